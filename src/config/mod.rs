//! Configuration management for dirhunt
//!
//! Settings are layered with figment: embedded defaults, then a project
//! config file, then `DIRHUNT_*` environment variables. Command-line flags
//! are applied on top by the CLI.

pub mod core;
pub mod smart_load;

use serde::{Deserialize, Serialize};

use crate::walker::{WalkConfig, WalkMode};

pub use self::core::load;

/// Resolved settings for one run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Whitespace-separated directory names to skip entirely
    pub ignore: Option<String>,

    /// Skip directories whose name starts with a dot
    pub exclude_hidden: bool,

    /// Task execution mode
    pub mode: ModeSetting,

    /// Hard cap on walker threads (0 = no cap)
    pub max_threads: usize,

    /// Percentage of CPU cores to use for walker threads (1-100)
    pub thread_percentage: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ModeSetting {
    #[default]
    Parallel,
    Sequential,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ignore: None,
            exclude_hidden: false,
            mode: ModeSetting::Parallel,
            max_threads: 0,
            thread_percentage: 100,
        }
    }
}

impl Settings {
    /// Check values figment cannot constrain by type alone
    pub fn validate(&self) -> anyhow::Result<()> {
        if !(1..=100).contains(&self.thread_percentage) {
            anyhow::bail!(
                "thread_percentage must be between 1 and 100, got {}",
                self.thread_percentage
            );
        }
        Ok(())
    }

    pub fn walk_mode(&self) -> WalkMode {
        match self.mode {
            ModeSetting::Sequential => WalkMode::Sequential,
            ModeSetting::Parallel => WalkMode::Parallel {
                threads: WalkMode::calculate_optimal_workers(
                    self.max_threads,
                    self.thread_percentage,
                ),
            },
        }
    }

    /// Build the immutable walk configuration for `target`
    pub fn walk_config(&self, target: &str) -> WalkConfig {
        let config = WalkConfig::new(target).with_exclude_hidden(self.exclude_hidden);
        match &self.ignore {
            Some(words) => config.with_ignore_list(words),
            None => config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings_are_valid() {
        let settings = Settings::default();
        assert!(settings.validate().is_ok());
        assert!(matches!(settings.walk_mode(), WalkMode::Parallel { threads } if threads >= 1));
    }

    #[test]
    fn test_thread_percentage_range() {
        let mut settings = Settings::default();
        settings.thread_percentage = 0;
        assert!(settings.validate().is_err());
        settings.thread_percentage = 101;
        assert!(settings.validate().is_err());
        settings.thread_percentage = 1;
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_sequential_mode() {
        let settings = Settings {
            mode: ModeSetting::Sequential,
            ..Settings::default()
        };
        assert_eq!(settings.walk_mode(), WalkMode::Sequential);
    }

    #[test]
    fn test_max_threads_caps_pool() {
        let settings = Settings {
            max_threads: 1,
            ..Settings::default()
        };
        assert_eq!(settings.walk_mode(), WalkMode::Parallel { threads: 1 });
    }

    #[test]
    fn test_walk_config_from_settings() {
        let settings = Settings {
            ignore: Some(".git target".to_string()),
            exclude_hidden: true,
            ..Settings::default()
        };

        let config = settings.walk_config("node_modules");
        assert_eq!(config.target(), "node_modules");
        assert!(config.exclude_hidden());
        let exclusion = config.exclusion().unwrap();
        assert!(exclusion.is_match("target"));
        assert!(!exclusion.is_match("node_modules"));

        let config = Settings::default().walk_config("node_modules");
        assert!(config.exclusion().is_none());
        assert!(!config.exclude_hidden());
    }
}
