//! Concurrent directory-tree walker
//!
//! The walker explores a tree with one traversal task per directory and
//! reports every entry whose name equals the target, without entering
//! matched or excluded directories.
//!
//! ```text
//! walk(root)
//!   └─ task(root)                  ticket #1
//!        ├─ a/          Descend  → task(a)          ticket #2
//!        ├─ target/     Matched  → sink.emit(...)   (pruned)
//!        ├─ ignored/    Excluded                    (pruned)
//!        └─ file.txt    Ignore
//! ```
//!
//! Tasks run on a rayon pool ([`WalkMode::Parallel`]) or from a stack on the
//! calling thread ([`WalkMode::Sequential`]). In both modes the caller
//! blocks until the wait group shared by all [`task::TaskTicket`]s drains.

pub mod config;
pub mod core;
pub mod sink;
pub mod strategy;
pub mod task;

pub use config::WalkConfig;
pub use self::core::Walker;
pub use sink::{CollectSink, MatchSink, StdoutSink};
pub use strategy::WalkMode;
pub use task::WalkStats;
