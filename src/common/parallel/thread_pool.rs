use crate::common::logging::{log_debug, log_warning};
use crate::config::NUM_THREADS;
use crate::MODULE_NAME;
use rayon::{ThreadPool, ThreadPoolBuilder};
use std::sync::atomic::Ordering;
use std::sync::LazyLock;

pub static THREAD_POOL: LazyLock<Option<ThreadPool>> = LazyLock::new(construct_pool);

fn construct_pool() -> Option<ThreadPool> {
    let threads = NUM_THREADS.load(Ordering::Relaxed);
    let pool = ThreadPoolBuilder::new()
        .num_threads(threads)
        .thread_name(|i| format!("{MODULE_NAME}-hash-{i}"))
        .build();
    match pool {
        Ok(pool) => {
            log_debug(format!("batch hash pool started with {threads} threads"));
            Some(pool)
        }
        Err(e) => {
            // jobs fall back to the global rayon pool
            log_warning(format!("Failed to build batch hash pool: {e}"));
            None
        }
    }
}

/// Runs `op` inside the crate's thread pool, so parallel iterators in `op` use its workers.
pub fn install<OP, R>(op: OP) -> R
where
    OP: FnOnce() -> R + Send,
    R: Send,
{
    match THREAD_POOL.as_ref() {
        Some(pool) => pool.install(op),
        None => op(),
    }
}
