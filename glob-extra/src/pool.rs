//! Bounded worker pool for per-item collaborator calls.

use std::io;

use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::error::{Error, Result};

/// Default number of concurrent collaborator calls.
pub const DEFAULT_CONCURRENCY: usize = 8;

/// A fixed-size pool that maps fallible work over a slice.
///
/// Results come back in input order no matter which call finishes first, and
/// the first failure stops the remaining work from being scheduled.
pub(crate) struct WorkerPool {
    pool: ThreadPool,
}

impl WorkerPool {
    /// Build a pool with `threads` workers (at least one).
    pub(crate) fn new(threads: usize) -> Result<Self> {
        let pool = ThreadPoolBuilder::new()
            .num_threads(threads.max(1))
            .thread_name(|index| format!("glob-extra-{index}"))
            .build()
            .map_err(|e| Error::Io(io::Error::other(e)))?;
        Ok(Self { pool })
    }

    /// Apply `f` to every item, preserving order.
    pub(crate) fn map<T, R, F>(&self, items: &[T], f: F) -> Result<Vec<R>>
    where
        T: Sync,
        R: Send,
        F: Fn(&T) -> Result<R> + Sync + Send,
    {
        self.pool
            .install(|| items.par_iter().map(f).collect::<Result<Vec<R>>>())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_preserves_input_order() {
        let pool = WorkerPool::new(4).unwrap();
        let items: Vec<u32> = (0..100).collect();
        let doubled = pool.map(&items, |n| Ok(n * 2)).unwrap();
        assert_eq!(doubled, (0..100).map(|n| n * 2).collect::<Vec<_>>());
    }

    #[test]
    fn test_map_returns_error() {
        let pool = WorkerPool::new(2).unwrap();
        let items = vec!["ok", "bad", "ok"];
        let result = pool.map(&items, |item| {
            if *item == "bad" {
                Err(Error::NoMatch {
                    pattern: (*item).to_string(),
                })
            } else {
                Ok(item.len())
            }
        });
        assert!(result.unwrap_err().is_no_match());
    }

    #[test]
    fn test_zero_threads_is_clamped() {
        let pool = WorkerPool::new(0).unwrap();
        assert_eq!(pool.map(&[1, 2, 3], |n| Ok(*n)).unwrap(), vec![1, 2, 3]);
    }
}
