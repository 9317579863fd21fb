use std::collections::HashMap;
use std::hash::{BuildHasherDefault, Hasher};

/// Hasher for keys that are already id hashes.
///
/// The key is spread with a single multiply, since SwissTable reads its control bits from the
/// top of the hash and id hashes never set the top 33 bits.
#[derive(Default, Clone, Copy)]
pub struct NoHashHasher(u64);

const SPREAD: u64 = 0x9e37_79b9_7f4a_7c15;

impl Hasher for NoHashHasher {
    #[inline]
    fn finish(&self) -> u64 {
        self.0
    }

    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.0 = (self.0.rotate_left(8) ^ u64::from(b)).wrapping_mul(SPREAD);
        }
    }

    #[inline]
    fn write_u32(&mut self, u: u32) {
        self.0 = u64::from(u).wrapping_mul(SPREAD);
    }

    #[inline]
    fn write_i32(&mut self, i: i32) {
        self.write_u32(i as u32);
    }

    #[inline]
    fn write_u64(&mut self, u: u64) {
        self.0 = u.wrapping_mul(SPREAD);
    }
}

pub type BuildNoHashHasher = BuildHasherDefault<NoHashHasher>;

pub type NoHashMap<K, V> = HashMap<K, V, BuildNoHashHasher>;
#[cfg(test)]
mod tests {
    use super::*;
    use std::hash::{BuildHasher, Hash};

    fn hash_of<T: Hash>(value: T) -> u64 {
        BuildNoHashHasher::default().hash_one(value)
    }

    #[test]
    fn i32_keys_are_spread_deterministically() {
        assert_eq!(hash_of(99961_i32), hash_of(99961_i32));
        assert_ne!(hash_of(1_i32), hash_of(2_i32));
        assert_ne!(hash_of(1_i32) >> 57, hash_of(2_i32) >> 57);
    }

    #[test]
    fn map_round_trip() {
        let mut map: NoHashMap<i32, &str> = NoHashMap::default();
        map.insert(110988, "pie");
        map.insert(1, "empty");
        assert_eq!(map.get(&110988), Some(&"pie"));
        assert_eq!(map.get(&1), Some(&"empty"));
        assert_eq!(map.get(&2), None);
    }
}
