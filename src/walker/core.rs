use std::fs::{self, ReadDir};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use crossbeam::sync::WaitGroup;

use super::config::WalkConfig;
use super::sink::MatchSink;
use super::strategy::WalkMode;
use super::task::{TaskCounters, TaskTicket, WalkStats};
use crate::filters::EntryDecision;

/// Tree Walker - finds entries named like the target
///
/// Each directory is explored by one traversal task that lists it once,
/// reports entries matching the target, and schedules a new task for every
/// other subdirectory. Matched and excluded directories are never entered.
///
/// # Example
/// ```rust,no_run
/// use std::sync::Arc;
/// use dirhunt::walker::{CollectSink, WalkConfig, Walker};
///
/// let config = WalkConfig::new("node_modules").with_ignore_list(".git");
/// let sink = Arc::new(CollectSink::new());
/// let stats = Walker::new(config).walk("projects", sink.clone())?;
///
/// for path in sink.sorted() {
///     println!("{}", path.display());
/// }
/// println!("{} directories listed", stats.tasks_scheduled);
/// # Ok::<(), anyhow::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct Walker {
    config: Arc<WalkConfig>,
    mode: WalkMode,
}

/// State every traversal task shares; read-only apart from the atomics
struct TaskContext {
    config: Arc<WalkConfig>,
    sink: Arc<dyn MatchSink>,
    counters: Arc<TaskCounters>,
}

/// Result of listing one directory
enum Listing {
    Readable(ReadDir),
    /// Missing, not a directory, or not permitted. The branch ends here
    /// without a report; siblings and the walk carry on.
    Unreadable,
}

impl Listing {
    fn of(dir: &Path) -> Self {
        match fs::read_dir(dir) {
            Ok(entries) => Listing::Readable(entries),
            Err(_) => Listing::Unreadable,
        }
    }
}

impl Walker {
    pub fn new(config: WalkConfig) -> Self {
        Self {
            config: Arc::new(config),
            mode: WalkMode::default(),
        }
    }

    pub fn with_mode(mut self, mode: WalkMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn config(&self) -> &WalkConfig {
        &self.config
    }

    pub fn mode(&self) -> WalkMode {
        self.mode
    }

    /// Walk the tree under `root`, emitting every match into `sink`
    ///
    /// Blocks until every scheduled task has finished. Unreadable
    /// directories, the root included, are skipped silently; the only
    /// error is failing to start the thread pool.
    pub fn walk(&self, root: impl AsRef<Path>, sink: Arc<dyn MatchSink>) -> Result<WalkStats> {
        let root = root.as_ref().to_path_buf();
        let start_time = Instant::now();
        let counters = Arc::new(TaskCounters::default());
        let ctx = Arc::new(TaskContext {
            config: Arc::clone(&self.config),
            sink,
            counters: Arc::clone(&counters),
        });

        tracing::debug!(
            "Walking {} for '{}' ({:?})",
            root.display(),
            self.config.target(),
            self.mode
        );

        let wait_group = WaitGroup::new();
        let root_ticket = TaskTicket::issue(&wait_group, &counters);

        match self.mode {
            WalkMode::Sequential => {
                walk_sequential(root, &ctx, root_ticket);
                wait_group.wait();
            }
            WalkMode::Parallel { threads } => {
                let pool = WalkMode::build_pool(threads)?;
                tracing::trace!("Walker pool started with {} threads", pool.current_num_threads());
                pool.spawn(move || run_task(root, ctx, root_ticket));
                // The pool must outlive every task spawned into it
                wait_group.wait();
            }
        }

        debug_assert_eq!(counters.outstanding(), 0, "tasks still in flight after wait");
        let stats = counters.snapshot(start_time.elapsed());
        debug_assert!(stats.is_balanced(), "unbalanced task accounting: {stats:?}");
        tracing::debug!(
            "Walk finished in {:?}: {} directories listed, {} matches",
            stats.elapsed,
            stats.tasks_scheduled,
            stats.matches
        );
        Ok(stats)
    }
}

/// One traversal task on the rayon pool
///
/// Children are spawned onto the pool the task is running on. The task's
/// ticket is dropped when this function returns, after every child has been
/// issued its own.
fn run_task(dir: PathBuf, ctx: Arc<TaskContext>, ticket: TaskTicket) {
    explore(&dir, &ctx, |child| {
        let child_ticket = ticket.issue_child();
        let ctx = Arc::clone(&ctx);
        rayon::spawn(move || run_task(child, ctx, child_ticket));
    });
}

/// Same tasks as [`run_task`], drained from a stack on the calling thread
fn walk_sequential(root: PathBuf, ctx: &TaskContext, root_ticket: TaskTicket) {
    let mut pending = vec![(root, root_ticket)];

    while let Some((dir, ticket)) = pending.pop() {
        explore(&dir, ctx, |child| {
            let child_ticket = ticket.issue_child();
            pending.push((child, child_ticket));
        });
    }
}

/// List `dir` once and act on each entry in listing order
fn explore(dir: &Path, ctx: &TaskContext, mut schedule: impl FnMut(PathBuf)) {
    let entries = match Listing::of(dir) {
        Listing::Readable(entries) => entries,
        Listing::Unreadable => return,
    };

    for entry in entries.flatten() {
        let name = entry.file_name();
        // Entry type comes from the listing itself; symlinks are not followed.
        let is_dir = entry.file_type().is_ok_and(|ft| ft.is_dir());

        match ctx.config.classify(&name, is_dir) {
            EntryDecision::Matched => {
                ctx.sink.emit(&entry.path());
                ctx.counters.record_match();
            }
            EntryDecision::Descend => schedule(entry.path()),
            EntryDecision::Excluded(reason) => {
                tracing::trace!("Skipping {} ({})", entry.path().display(), reason);
            }
            EntryDecision::Ignore => {}
        }
    }
}
