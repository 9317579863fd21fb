use std::num::NonZeroI32;

/// Opaque per-object identity supplied by the host object model.
///
/// A token is never zero, but may be any other `i32`, including `i32::MIN`.
/// Callers must treat it as bits, not as a meaningful number.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct IdentityToken(NonZeroI32);

impl IdentityToken {
    /// Wraps a raw host token. Returns `None` for `0`, which no live object may carry.
    pub const fn from_raw(raw: i32) -> Option<Self> {
        match NonZeroI32::new(raw) {
            Some(v) => Some(Self(v)),
            None => None,
        }
    }

    /// Derives a token from an allocation address, stable for the lifetime of the allocation.
    ///
    /// The address is folded to 32 bits. A fold of `0` becomes `i32::MIN`, which keeps the
    /// token non-zero and still hashes to the zero replacement value.
    pub fn from_address(addr: usize) -> Self {
        let addr = addr as u64;
        let folded = (addr ^ (addr >> 32)) as u32 as i32;
        Self(NonZeroI32::new(folded).unwrap_or(NonZeroI32::MIN))
    }

    #[inline]
    pub const fn get(self) -> i32 {
        self.0.get()
    }
}
