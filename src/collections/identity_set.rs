use crate::collections::IdHash;
use crate::common::hash::NoHashMap;

/// Unordered set of values, keyed by identity.
///
/// Membership follows `PartialEq`, so with strict equality a `NaN` is never found again.
#[derive(Clone, Debug)]
pub struct IdentitySet<K> {
    buckets: NoHashMap<i32, Vec<K>>,
    len: usize,
}

impl<K> Default for IdentitySet<K> {
    fn default() -> Self {
        Self {
            buckets: NoHashMap::default(),
            len: 0,
        }
    }
}

impl<K: IdHash + PartialEq> IdentitySet<K> {
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

    pub fn contains<Q>(&self, value: &Q) -> bool
    where
        Q: IdHash + ?Sized,
        K: PartialEq<Q>,
    {
        self.buckets
            .get(&value.id_hash())
            .is_some_and(|candidates| candidates.iter().any(|c| c == value))
    }

    /// Adds `value`. Returns `true` if the set changed, `false` if it was already present.
    pub fn insert(&mut self, value: K) -> bool {
        let candidates = self.buckets.entry(value.id_hash()).or_default();
        if candidates.iter().any(|c| *c == value) {
            return false;
        }
        candidates.push(value);
        self.len += 1;
        true
    }

    /// Removes `value`. Returns `true` if it was present.
    pub fn remove<Q>(&mut self, value: &Q) -> bool
    where
        Q: IdHash + ?Sized,
        K: PartialEq<Q>,
    {
        let hash = value.id_hash();
        let Some(candidates) = self.buckets.get_mut(&hash) else {
            return false;
        };
        let Some(pos) = candidates.iter().position(|c| c == value) else {
            return false;
        };
        candidates.swap_remove(pos);
        if candidates.is_empty() {
            self.buckets.remove(&hash);
        }
        self.len -= 1;
        true
    }

    /// Visits every element. The order is unspecified.
    pub fn iter(&self) -> impl Iterator<Item = &K> + '_ {
        self.buckets.values().flatten()
    }

    pub fn clear(&mut self) {
        self.buckets.clear();
        self.len = 0;
    }
}

impl<K: IdHash + PartialEq> FromIterator<K> for IdentitySet<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<K: IdHash + PartialEq> Extend<K> for IdentitySet<K> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for value in iter {
            self.insert(value);
        }
    }
}
