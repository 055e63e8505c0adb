//! Error handlers
//!
//! Logs index failures and turns them into messages for the shell.

use crate::error::types::IndexError;
use log::error;

/// Log an index error
pub fn handle_error(err: &IndexError) {
    error!("Index error: {}", err);
}

/// Short message shown to the user for a failed operation
pub fn error_to_message(err: &IndexError) -> String {
    match err {
        IndexError::InvalidArgument(msg) => format!("Invalid input: {}", msg),
        IndexError::Io { action, name, source, .. } => {
            format!("Could not {} '{}': {}", action, name, source)
        }
        IndexError::Scan { root, source } => {
            format!("Could not read {}: {}", root.display(), source)
        }
    }
}
