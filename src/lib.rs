//! # dirhunt - find entries by exact name
//!
//! dirhunt walks a directory tree with one concurrent task per directory and
//! reports every entry whose name equals a target, without descending
//! into matches or into ignored directories. It is the engine behind
//! "find every `node_modules` under my projects" style cleanups.
//!
//! ## Quick Start
//!
//! ```bash
//! # Every node_modules under ~/projects, skipping .git and vendor trees
//! dirhunt ~/projects node_modules ".git vendor"
//!
//! # Same walk on a single thread, with a summary on stderr
//! dirhunt ~/projects node_modules --sequential -v
//! ```
//!
//! ## Library Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use dirhunt::walker::{CollectSink, WalkConfig, Walker};
//!
//! let config = WalkConfig::new("target").with_ignore_list(".git");
//! let sink = Arc::new(CollectSink::new());
//! Walker::new(config).walk("src", sink.clone())?;
//!
//! for path in sink.sorted() {
//!     println!("{}", path.display());
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ## Behavior
//!
//! - Names are compared exactly; `foobar` never matches `foo`.
//! - The ignore list wins over the target: an ignored directory is neither
//!   reported nor entered.
//! - Unreadable directories end their branch silently.
//! - Output order across branches is unspecified.

pub mod cli;
pub mod config;
pub mod filters;
pub mod walker;

pub use cli::Cli;
pub use config::Settings;
pub use walker::{WalkConfig, WalkMode, WalkStats, Walker};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
