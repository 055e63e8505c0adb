//! File system storage management
//!
//! Keeps the in-memory name index in step with the managed directory.

pub mod filesystem;
pub mod index;
pub mod name;
pub mod pattern;
pub mod results;

pub use index::{DirectoryIndex, NameLookup};
pub use results::IndexStats;
