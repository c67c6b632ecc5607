use std::ffi::OsStr;

use crate::filters::{EntryDecision, ExclusionPattern};

/// Immutable walk configuration
///
/// Built once at startup and shared by reference (behind an `Arc`) with
/// every traversal task. Nothing in here changes during a walk, so tasks
/// read it concurrently without locking.
#[derive(Debug, Clone)]
pub struct WalkConfig {
    target: String,
    exclusion: Option<ExclusionPattern>,
    exclude_hidden: bool,
}

impl WalkConfig {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            exclusion: None,
            exclude_hidden: false,
        }
    }

    /// Compile and attach an ignore list; an unusable list leaves exclusion off
    pub fn with_ignore_list(mut self, words: &str) -> Self {
        self.exclusion = ExclusionPattern::compile(words);
        self
    }

    /// Skip directories whose name starts with a dot
    pub fn with_exclude_hidden(mut self, exclude_hidden: bool) -> Self {
        self.exclude_hidden = exclude_hidden;
        self
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn exclusion(&self) -> Option<&ExclusionPattern> {
        self.exclusion.as_ref()
    }

    pub fn exclude_hidden(&self) -> bool {
        self.exclude_hidden
    }

    /// Decide what happens to one directory entry
    ///
    /// Checks run on the bare entry name in a fixed order: the ignore list,
    /// the hidden-directory rule, the target name, then the entry type.
    /// A target match applies to any entry type; only directories descend.
    /// Exclusion always wins over a target match, and a target match always
    /// wins over descending.
    pub fn classify(&self, name: &OsStr, is_dir: bool) -> EntryDecision {
        let name_str = name.to_string_lossy();

        if let Some(exclusion) = &self.exclusion
            && exclusion.is_match(&name_str)
        {
            return EntryDecision::Excluded("ignore list");
        }

        if is_dir && self.exclude_hidden && name_str.starts_with('.') {
            return EntryDecision::Excluded("hidden directory");
        }

        if name == OsStr::new(&self.target) {
            EntryDecision::Matched
        } else if is_dir {
            EntryDecision::Descend
        } else {
            EntryDecision::Ignore
        }
    }
}
