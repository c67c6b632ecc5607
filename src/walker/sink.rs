use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Destination for matched directory paths
///
/// Shared by every traversal task, so implementations must accept
/// concurrent calls and keep each emitted path intact.
pub trait MatchSink: Send + Sync {
    fn emit(&self, path: &Path);
}

/// Writes one path per line to standard output
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutSink;

impl MatchSink for StdoutSink {
    fn emit(&self, path: &Path) {
        let mut line = path.display().to_string();
        line.push('\n');

        // Single write under the stdout lock keeps concurrent lines whole.
        // A closed pipe is not an error for a finder.
        let mut stdout = io::stdout().lock();
        let _ = stdout.write_all(line.as_bytes());
    }
}

/// Keeps matches in memory, in emission order
#[derive(Debug, Default)]
pub struct CollectSink {
    paths: Mutex<Vec<PathBuf>>,
}

impl CollectSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the collected paths, leaving the sink empty
    pub fn take(&self) -> Vec<PathBuf> {
        match self.paths.lock() {
            Ok(mut paths) => std::mem::take(&mut *paths),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        }
    }

    /// Collected paths sorted, for order-independent comparison
    pub fn sorted(&self) -> Vec<PathBuf> {
        let mut paths = self.take();
        paths.sort();
        paths
    }
}

impl MatchSink for CollectSink {
    fn emit(&self, path: &Path) {
        let mut paths = match self.paths.lock() {
            Ok(paths) => paths,
            Err(poisoned) => poisoned.into_inner(),
        };
        paths.push(path.to_path_buf());
    }
}
