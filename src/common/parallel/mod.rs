mod thread_pool;

pub use thread_pool::*;

use crate::collections::IdHash;
use crate::common::hash::numeric_hash;
use crate::config::PARALLEL_THRESHOLD;
use crate::module::Value;
use rayon::prelude::*;
use std::sync::atomic::Ordering;

fn parallel_threshold() -> usize {
    PARALLEL_THRESHOLD.load(Ordering::Relaxed)
}

fn hash_batch<T, F>(values: &[T], threshold: usize, hasher: F) -> Vec<i32>
where
    T: Sync,
    F: Fn(&T) -> i32 + Sync + Send,
{
    if values.len() < threshold {
        return values.iter().map(hasher).collect();
    }
    install(|| values.par_iter().map(hasher).collect())
}

/// `numberIdHash` over a batch. Same results as hashing one value at a time, in input order.
pub fn number_id_hashes(values: &[f64]) -> Vec<i32> {
    hash_batch(values, parallel_threshold(), |v| numeric_hash(*v))
}

/// Value hash dispatch over a batch, in input order.
pub fn id_hashes(values: &[Value]) -> Vec<i32> {
    hash_batch(values, parallel_threshold(), |v| v.id_hash())
}
