//! Where the per-agent phases run.

use crate::SimResult;

/// A dedicated Rayon pool when `num_threads` is set and the `parallel`
/// feature is on; otherwise work runs on the caller's thread (or Rayon's
/// global pool, for the parallel build).
pub(crate) struct Workers {
    #[cfg(feature = "parallel")]
    pool: Option<rayon::ThreadPool>,
}

impl Workers {
    #[cfg(feature = "parallel")]
    pub fn new(num_threads: Option<usize>) -> SimResult<Self> {
        let pool = match num_threads {
            Some(n) => Some(rayon::ThreadPoolBuilder::new().num_threads(n).build()?),
            None => None,
        };
        Ok(Self { pool })
    }

    #[cfg(not(feature = "parallel"))]
    pub fn new(num_threads: Option<usize>) -> SimResult<Self> {
        if let Some(n) = num_threads {
            tracing::debug!(n, "num_threads ignored without the `parallel` feature");
        }
        Ok(Self {})
    }

    #[cfg(feature = "parallel")]
    pub fn run<R: Send>(&self, op: impl FnOnce() -> R + Send) -> R {
        match &self.pool {
            Some(pool) => pool.install(op),
            None => op(),
        }
    }

    #[cfg(not(feature = "parallel"))]
    pub fn run<R>(&self, op: impl FnOnce() -> R) -> R {
        op()
    }
}
