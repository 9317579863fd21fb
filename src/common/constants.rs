/// Clears the sign bit of an `i32` hash.
pub const HASH_MASK: i32 = 0x7fff_ffff;

/// Substituted for a hash that masks to zero. Zero means "no hash" to callers.
pub const ZERO_HASH_REPLACEMENT: i32 = 1;

// Sentinel hashes for values that carry no identity of their own. All primes.
pub const NULL_HASH: i32 = 99961;
pub const UNDEFINED_HASH: i32 = 99971;
pub const TRUE_HASH: i32 = 99989;
pub const FALSE_HASH: i32 = 99991;

/// Seed of the numeric byte mixing hash (a prime).
pub const NUMBER_HASH_SEED: i32 = 56081;
pub const HASH_MULTIPLIER: i32 = 31;
