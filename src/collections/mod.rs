//! Sets and maps keyed by object/value identity rather than by `Hash + Eq`.
//!
//! Entries are bucketed by their [`IdHash`] and compared with `PartialEq` inside a bucket,
//! which for [`Value`](crate::module::Value) is strict equality.
mod id_hash;
mod identity_map;
mod identity_set;

pub use id_hash::*;
pub use identity_map::*;
pub use identity_set::*;

/// Copy of `items` without repeats, keeping the first occurrence of each element in order.
///
/// `0.0` and `-0.0` are both kept, see [`IdHash`].
pub fn dedup<K: IdHash + PartialEq + Clone>(items: &[K]) -> Vec<K> {
    let mut seen = IdentitySet::with_capacity(items.len());
    items
        .iter()
        .filter(|item| seen.insert((*item).clone()))
        .cloned()
        .collect()
}
