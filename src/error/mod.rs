//! Error handling
//!
//! Defines error types for the directory index and the application entry point.

pub mod handlers;
pub mod types;

pub use types::*;
