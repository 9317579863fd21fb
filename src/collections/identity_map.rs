use crate::collections::IdHash;
use crate::common::hash::NoHashMap;

/// Association list keyed by object/value identity.
#[derive(Clone, Debug)]
pub struct IdentityMap<K, V> {
    buckets: NoHashMap<i32, Vec<(K, V)>>,
    len: usize,
}

impl<K, V> Default for IdentityMap<K, V> {
    fn default() -> Self {
        Self {
            buckets: NoHashMap::default(),
            len: 0,
        }
    }
}

impl<K: IdHash + PartialEq, V> IdentityMap<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buckets: NoHashMap::with_capacity_and_hasher(capacity, Default::default()),
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        Q: IdHash + ?Sized,
        K: PartialEq<Q>,
    {
        self.buckets
            .get(&key.id_hash())?
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        Q: IdHash + ?Sized,
        K: PartialEq<Q>,
    {
        self.buckets
            .get_mut(&key.id_hash())?
            .iter_mut()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// The value mapped to `key`, or `default` when there is none.
    pub fn get_or<'a, Q>(&'a self, key: &Q, default: &'a V) -> &'a V
    where
        Q: IdHash + ?Sized,
        K: PartialEq<Q>,
    {
        self.get(key).unwrap_or(default)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        Q: IdHash + ?Sized,
        K: PartialEq<Q>,
    {
        self.get(key).is_some()
    }

    /// Maps `key` to `value`, returning the value it replaced.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        let candidates = self.buckets.entry(key.id_hash()).or_default();
        if let Some((_, existing)) = candidates.iter_mut().find(|(k, _)| *k == key) {
            return Some(std::mem::replace(existing, value));
        }
        candidates.push((key, value));
        self.len += 1;
        None
    }

    /// Drops the mapping for `key`, returning its value.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        Q: IdHash + ?Sized,
        K: PartialEq<Q>,
    {
        let hash = key.id_hash();
        let candidates = self.buckets.get_mut(&hash)?;
        let pos = candidates.iter().position(|(k, _)| k == key)?;
        let (_, value) = candidates.swap_remove(pos);
        if candidates.is_empty() {
            self.buckets.remove(&hash);
        }
        self.len -= 1;
        Some(value)
    }

    /// Visits every mapping. The order is unspecified.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        self.buckets
            .values()
            .flatten()
            .map(|(k, v)| (k, v))
    }

    pub fn clear(&mut self) {
        self.buckets.clear();
        self.len = 0;
    }
}

impl<K: IdHash + PartialEq, V> FromIterator<(K, V)> for IdentityMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}
