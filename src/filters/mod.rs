//! Entry filtering for the tree walker
//!
//! Holds the exclusion matcher compiled from the ignore list and the
//! decision type every directory entry is classified into.

pub mod exclusion;
pub mod traits;

pub use exclusion::ExclusionPattern;
pub use traits::EntryDecision;
