//! Completion accounting for traversal tasks
//!
//! Every scheduled task owns exactly one [`TaskTicket`]. Issuing a ticket
//! joins the walk's wait group and counts the task as scheduled; dropping it
//! leaves the wait group and counts the task as finished. Because the ticket
//! is released by `Drop`, the decrement happens once on every exit path of a
//! task, including an unreadable directory, and can never happen twice.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use crossbeam::sync::WaitGroup;

/// Shared counters for one walk
#[derive(Debug, Default)]
pub struct TaskCounters {
    scheduled: AtomicUsize,
    finished: AtomicUsize,
    matches: AtomicUsize,
}

impl TaskCounters {
    pub fn record_match(&self) {
        self.matches.fetch_add(1, Ordering::Relaxed);
    }

    pub fn scheduled(&self) -> usize {
        self.scheduled.load(Ordering::Acquire)
    }

    pub fn finished(&self) -> usize {
        self.finished.load(Ordering::Acquire)
    }

    /// Tasks scheduled but not yet finished
    pub fn outstanding(&self) -> usize {
        // Load finished first so a task finishing between the two loads
        // cannot make the difference underflow.
        let finished = self.finished();
        self.scheduled().saturating_sub(finished)
    }

    pub fn snapshot(&self, elapsed: Duration) -> WalkStats {
        WalkStats {
            tasks_scheduled: self.scheduled(),
            tasks_finished: self.finished(),
            matches: self.matches.load(Ordering::Relaxed),
            elapsed,
        }
    }
}

/// Proof that a traversal task is in flight
///
/// Not `Clone`: each ticket stands for exactly one increment.
#[derive(Debug)]
pub struct TaskTicket {
    slot: WaitGroup,
    counters: Arc<TaskCounters>,
}

impl TaskTicket {
    /// Register a new task with the walk
    pub fn issue(wait_group: &WaitGroup, counters: &Arc<TaskCounters>) -> Self {
        counters.scheduled.fetch_add(1, Ordering::AcqRel);
        Self {
            slot: wait_group.clone(),
            counters: Arc::clone(counters),
        }
    }

    /// Register a task scheduled from inside this one
    ///
    /// Issued while the parent still holds its own ticket, so the walk's
    /// wait group cannot reach zero between parent and child.
    pub fn issue_child(&self) -> Self {
        Self::issue(&self.slot, &self.counters)
    }
}

impl Drop for TaskTicket {
    fn drop(&mut self) {
        self.counters.finished.fetch_add(1, Ordering::AcqRel);
        // `slot` is dropped right after this, releasing the wait group.
    }
}

/// Summary of a completed walk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkStats {
    /// One per directory listed, root included
    pub tasks_scheduled: usize,
    pub tasks_finished: usize,
    pub matches: usize,
    pub elapsed: Duration,
}

impl WalkStats {
    pub fn is_balanced(&self) -> bool {
        self.tasks_scheduled == self.tasks_finished
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_ticket_counts_once_per_task() {
        let wait_group = WaitGroup::new();
        let counters = Arc::new(TaskCounters::default());

        let first = TaskTicket::issue(&wait_group, &counters);
        let second = TaskTicket::issue(&wait_group, &counters);
        assert_eq!(counters.scheduled(), 2);
        assert_eq!(counters.outstanding(), 2);

        drop(first);
        assert_eq!(counters.finished(), 1);
        assert_eq!(counters.outstanding(), 1);

        drop(second);
        wait_group.wait();
        assert_eq!(counters.outstanding(), 0);
        assert!(counters.snapshot(Duration::ZERO).is_balanced());
    }

    #[test]
    fn test_wait_blocks_until_every_ticket_is_dropped() {
        let wait_group = WaitGroup::new();
        let counters = Arc::new(TaskCounters::default());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let ticket = TaskTicket::issue(&wait_group, &counters);
                thread::spawn(move || {
                    thread::sleep(Duration::from_millis(10));
                    drop(ticket);
                })
            })
            .collect();

        wait_group.wait();
        assert_eq!(counters.scheduled(), 8);
        assert_eq!(counters.finished(), 8);

        for handle in handles {
            handle.join().unwrap();
        }
    }

    #[test]
    fn test_ticket_released_on_early_return() {
        fn task_that_bails(ticket: TaskTicket, fail: bool) -> Option<()> {
            let _ticket = ticket;
            if fail {
                return None;
            }
            Some(())
        }

        let wait_group = WaitGroup::new();
        let counters = Arc::new(TaskCounters::default());

        task_that_bails(TaskTicket::issue(&wait_group, &counters), true);
        task_that_bails(TaskTicket::issue(&wait_group, &counters), false);

        wait_group.wait();
        assert_eq!(counters.scheduled(), 2);
        assert_eq!(counters.finished(), 2);
    }

    #[test]
    fn test_child_ticket_keeps_walk_open() {
        let wait_group = WaitGroup::new();
        let counters = Arc::new(TaskCounters::default());

        let parent = TaskTicket::issue(&wait_group, &counters);
        let child = parent.issue_child();
        drop(parent);
        assert_eq!(counters.outstanding(), 1);

        let handle = thread::spawn(move || drop(child));
        wait_group.wait();
        handle.join().unwrap();
        assert_eq!(counters.scheduled(), 2);
        assert_eq!(counters.finished(), 2);
    }

    #[test]
    fn test_match_counter() {
        let counters = TaskCounters::default();
        counters.record_match();
        counters.record_match();

        let stats = counters.snapshot(Duration::from_millis(5));
        assert_eq!(stats.matches, 2);
        assert_eq!(stats.tasks_scheduled, 0);
        assert_eq!(stats.elapsed, Duration::from_millis(5));
    }
}
