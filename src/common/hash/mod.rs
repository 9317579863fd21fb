mod identity_token;
mod no_hash;

pub use identity_token::*;
pub use no_hash::*;

use crate::common::constants::{
    HASH_MASK, HASH_MULTIPLIER, NULL_HASH, NUMBER_HASH_SEED, ZERO_HASH_REPLACEMENT,
};

/// Clears the sign bit of `hash` and maps a resulting `0` to `1`.
///
/// Every hash produced by this crate passes through here, so every hash is in
/// `[1, 0x7fffffff]`. Zero is left free for callers to mean "not yet computed".
#[inline]
pub const fn normalize_hash(hash: i32) -> i32 {
    match hash & HASH_MASK {
        0 => ZERO_HASH_REPLACEMENT,
        h => h,
    }
}

/// Hash of an object identity, or of the null marker when `token` is `None`.
///
/// `i32::MIN` masks to zero and is reported as `1`.
#[inline]
pub const fn object_identity_hash(token: Option<IdentityToken>) -> i32 {
    match token {
        None => NULL_HASH,
        Some(token) => normalize_hash(token.get()),
    }
}

/// Hash of the bit pattern of a 64-bit float.
///
/// The 8 bytes of `value` are mixed in native byte order with a multiplier of 31 over
/// wrapping `i32` arithmetic, so the result is only stable for a given platform. No numeric
/// normalization happens: `0.0` and `-0.0` differ, as do NaNs with different payloads.
pub fn numeric_hash(value: f64) -> i32 {
    let hash = value
        .to_ne_bytes()
        .iter()
        .fold(NUMBER_HASH_SEED, |acc, &byte| {
            acc.wrapping_mul(HASH_MULTIPLIER)
                .wrapping_add(i32::from(byte))
        });
    normalize_hash(hash)
}

/// Java style string hash over UTF-16 code units, kept in the positive range at every step.
pub fn string_hash(value: &str) -> i32 {
    let hash = value.encode_utf16().fold(0_i32, |acc, unit| {
        acc.wrapping_mul(HASH_MULTIPLIER)
            .wrapping_add(i32::from(unit))
            & HASH_MASK
    });
    normalize_hash(hash)
}
