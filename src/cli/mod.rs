//! Command-line interface for dirhunt
//!
//! `dirhunt <ROOT> <TARGET> [IGNORE]` prints every entry under ROOT named
//! exactly TARGET, one path per line, without descending into the matches
//! or into directories named in IGNORE.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;

use crate::config::{self, ModeSetting, Settings};
use crate::walker::{StdoutSink, Walker};

pub mod output;

#[derive(Parser, Debug)]
#[command(
    name = "dirhunt",
    version = env!("CARGO_PKG_VERSION"),
    about = "Find entries by exact name, pruning each match",
    long_about = "Walks ROOT with one concurrent task per directory and prints the path of \
                  every entry named exactly TARGET. Matched directories and directories \
                  named in IGNORE are not descended into. Unreadable directories are skipped \
                  silently."
)]
pub struct Cli {
    /// Directory to start from
    #[arg(value_name = "ROOT")]
    pub root: PathBuf,

    /// Exact directory name to search for
    #[arg(value_name = "TARGET")]
    pub target: String,

    /// Space-separated directory names to skip entirely, e.g. ".git vendor"
    #[arg(value_name = "IGNORE")]
    pub ignore: Option<String>,

    /// Skip directories whose name starts with a dot
    #[arg(long)]
    pub exclude_hidden: bool,

    /// Task execution mode
    #[arg(long, value_enum)]
    pub mode: Option<ModeSetting>,

    /// Shorthand for `--mode sequential`
    #[arg(long, conflicts_with = "mode")]
    pub sequential: bool,

    /// Maximum walker threads (0 = no cap)
    #[arg(long, value_name = "N")]
    pub threads: Option<usize>,

    /// Use custom configuration file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity on stderr (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Disable logging entirely
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        setup_logging(self.verbose, self.quiet);

        let settings = self.resolve_settings()?;
        let walker = Walker::new(settings.walk_config(&self.target)).with_mode(settings.walk_mode());

        if let Some(exclusion) = walker.config().exclusion() {
            tracing::info!(
                "Ignoring directories: {} ({})",
                exclusion.names().join(", "),
                exclusion.as_str()
            );
        }

        let stats = walker.walk(&self.root, Arc::new(StdoutSink))?;
        output::summary(&stats);
        Ok(())
    }

    /// Config layers with command-line flags applied last
    pub fn resolve_settings(&self) -> Result<Settings> {
        let mut settings = config::load(self.config.as_deref())?;

        if let Some(ignore) = &self.ignore {
            settings.ignore = Some(ignore.clone());
        }
        if self.exclude_hidden {
            settings.exclude_hidden = true;
        }
        if let Some(mode) = self.mode {
            settings.mode = mode;
        }
        if self.sequential {
            settings.mode = ModeSetting::Sequential;
        }
        if let Some(threads) = self.threads {
            settings.max_threads = threads;
        }

        Ok(settings)
    }
}

fn setup_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        match verbose {
            0 => tracing_subscriber::EnvFilter::new("warn"),
            1 => tracing_subscriber::EnvFilter::new("info"),
            2 => tracing_subscriber::EnvFilter::new("debug"),
            _ => tracing_subscriber::EnvFilter::new("trace"),
        }
    });

    // stdout carries only matched paths
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::walker::WalkMode;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_positional_arguments() {
        let cli = Cli::try_parse_from(["dirhunt", "/tmp", "node_modules", ".git vendor"]).unwrap();

        assert_eq!(cli.root, PathBuf::from("/tmp"));
        assert_eq!(cli.target, "node_modules");
        assert_eq!(cli.ignore.as_deref(), Some(".git vendor"));
    }

    #[test]
    fn test_target_is_required() {
        assert!(Cli::try_parse_from(["dirhunt", "/tmp"]).is_err());
        assert!(Cli::try_parse_from(["dirhunt"]).is_err());
    }

    #[test]
    fn test_sequential_shorthand() {
        let cli = Cli::try_parse_from(["dirhunt", ".", "target", "--sequential"]).unwrap();
        assert!(cli.sequential);
        assert!(cli.mode.is_none());

        assert!(
            Cli::try_parse_from(["dirhunt", ".", "target", "--sequential", "--mode", "parallel"])
                .is_err()
        );
    }

    #[test]
    fn test_flags_override_settings() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config_path = temp_dir.path().join("dirhunt.toml");
        std::fs::write(&config_path, "ignore = \"from-config\"\nmax_threads = 8\n").unwrap();
        let config_arg = config_path.to_string_lossy().to_string();

        let cli = Cli::try_parse_from([
            "dirhunt",
            ".",
            "target",
            "from-cli",
            "--exclude-hidden",
            "--mode",
            "sequential",
            "--config",
            config_arg.as_str(),
        ])
        .unwrap();
        let settings = cli.resolve_settings().unwrap();

        assert_eq!(settings.ignore.as_deref(), Some("from-cli"));
        assert!(settings.exclude_hidden);
        assert_eq!(settings.walk_mode(), WalkMode::Sequential);
        assert_eq!(settings.max_threads, 8);

        let cli = Cli::try_parse_from([
            "dirhunt",
            ".",
            "target",
            "--threads",
            "1",
            "--config",
            config_arg.as_str(),
        ])
        .unwrap();
        let settings = cli.resolve_settings().unwrap();

        assert_eq!(settings.ignore.as_deref(), Some("from-config"));
        assert_eq!(settings.walk_mode(), WalkMode::Parallel { threads: 1 });
    }
}
