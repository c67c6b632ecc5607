//! Classification result shared by the walker and its filters

/// What the walker does with a single directory entry
///
/// Produced once per entry, before any recursion is considered. `Matched`
/// and `Descend` are mutually exclusive, so a reported directory is never
/// explored further.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryDecision {
    /// Skipped by the ignore list or the hidden-directory rule
    Excluded(&'static str),
    /// Entry named exactly like the target; reported, never descended into
    Matched,
    /// Plain directory; explored by a new traversal task
    Descend,
    /// Non-directory that did not match anything
    Ignore,
}
