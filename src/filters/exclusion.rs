use regex::{Regex, RegexBuilder};

/// Exclusion Pattern - whole-name matcher built from the ignore list
///
/// The ignore list is a single string of folder names separated by
/// whitespace. Each name is escaped and the set is compiled into one
/// anchored alternation, `^(?:name1|name2|...)$`, so a name only matches
/// when it equals one of the listed names exactly.
///
/// Compiled once at startup and shared read-only by every traversal task.
#[derive(Debug, Clone)]
pub struct ExclusionPattern {
    regex: Regex,
    names: Vec<String>,
}

impl ExclusionPattern {
    /// Compile an ignore list into a matcher
    ///
    /// Returns `None` when the list holds no names or when the pattern
    /// cannot be compiled. Either way the walk proceeds as if no ignore
    /// list had been given.
    pub fn compile(words: &str) -> Option<Self> {
        Self::compile_with_limit(words, None)
    }

    fn compile_with_limit(words: &str, size_limit: Option<usize>) -> Option<Self> {
        let names: Vec<String> = words.split_whitespace().map(str::to_owned).collect();
        if names.is_empty() {
            tracing::debug!("Ignore list is empty, exclusion disabled");
            return None;
        }

        let alternation = names
            .iter()
            .map(|name| regex::escape(name))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = format!("^(?:{alternation})$");

        let mut builder = RegexBuilder::new(&pattern);
        if let Some(limit) = size_limit {
            builder.size_limit(limit);
        }

        match builder.build() {
            Ok(regex) => {
                tracing::debug!("Compiled ignore pattern {} ({} names)", pattern, names.len());
                Some(Self { regex, names })
            }
            Err(e) => {
                tracing::debug!("Ignore pattern failed to compile, exclusion disabled: {}", e);
                None
            }
        }
    }

    /// Check a bare entry name against the ignore list
    pub fn is_match(&self, name: &str) -> bool {
        self.regex.is_match(name)
    }

    /// Names the pattern was compiled from, in input order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}
