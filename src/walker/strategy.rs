use anyhow::{Context, Result};
use rayon::{ThreadPool, ThreadPoolBuilder};

/// How traversal tasks are executed
///
/// `Parallel` runs one rayon task per directory. The number of queued tasks
/// is unbounded; `threads` only sizes the executor that drains them
/// (0 leaves the size to rayon). `Sequential` runs the same tasks one after
/// another on the calling thread.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WalkMode {
    Sequential,
    Parallel { threads: usize },
}

impl Default for WalkMode {
    fn default() -> Self {
        WalkMode::Parallel { threads: 0 }
    }
}

impl WalkMode {
    /// Executor size from available cores and configured limits
    ///
    /// ```text
    /// cores * thread_percentage / 100, at least 1
    /// capped at max_threads when max_threads > 0
    /// ```
    pub fn calculate_optimal_workers(max_threads: usize, thread_percentage: u8) -> usize {
        let available_cores = num_cpus::get();
        let workers_by_percentage =
            std::cmp::max(1, (available_cores * thread_percentage as usize) / 100);

        if max_threads > 0 {
            std::cmp::min(max_threads, workers_by_percentage)
        } else {
            workers_by_percentage
        }
    }

    pub(crate) fn build_pool(threads: usize) -> Result<ThreadPool> {
        ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|index| format!("dirhunt-walker-{index}"))
            .build()
            .with_context(|| format!("Failed to start walker thread pool ({threads} threads)"))
    }
}
