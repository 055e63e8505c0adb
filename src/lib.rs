pub mod config;
pub mod error;
pub mod protocol;
pub mod shell;
pub mod storage;
pub mod validation;

pub use shell::Shell;
pub use storage::{DirectoryIndex, NameLookup};
