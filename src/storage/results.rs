//! Storage result types
//!
//! Defines result structures returned by index operations.

use std::path::PathBuf;

/// Summary of the index contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexStats {
    pub total: usize,
    pub root: PathBuf,
    /// Smallest name ignoring case, `None` when the index is empty
    pub first: Option<String>,
    /// Largest name ignoring case, `None` when the index is empty
    pub last: Option<String>,
}
