//! Interactive shell
//!
//! Line-oriented front end over the directory index.

pub mod core;

pub use self::core::Shell;
