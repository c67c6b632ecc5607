//! Human-facing messages on stderr
//!
//! Standard output is reserved for matched paths, so everything here goes
//! to stderr and stays out of pipelines like `dirhunt . node_modules | xargs rm -rf`.

use console::style;

use crate::walker::WalkStats;

/// Print a fatal error
pub fn error(message: &str) {
    eprintln!("{} {}", style("✖").red().bold(), style(message).red());
}

/// Log the walk summary (visible with -v)
pub fn summary(stats: &WalkStats) {
    tracing::info!(
        "⚡ Walk completed in {:.2}s ({} directories listed, {} matches)",
        stats.elapsed.as_secs_f64(),
        stats.tasks_scheduled,
        stats.matches
    );
}
