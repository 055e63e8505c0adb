//! File name validation
//!
//! Checks candidate file names before they reach the directory index.

pub mod results;
pub mod validator;

pub use results::ValidationResult;
pub use validator::{
    FORBIDDEN_CHARS, MAX_NAME_LENGTH, MIN_NAME_LENGTH, is_valid, reason, validate,
};
