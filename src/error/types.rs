//! Error types
//!
//! Defines domain-specific error types for the index and the application.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Filesystem action that was attempted when an [`IndexError::Io`] occurred.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileAction {
    Create,
    Delete,
}

impl fmt::Display for FileAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FileAction::Create => write!(f, "create"),
            FileAction::Delete => write!(f, "delete"),
        }
    }
}

/// Directory index errors
#[derive(Debug)]
pub enum IndexError {
    /// The caller passed an empty or whitespace-only name to a mutator.
    InvalidArgument(String),
    /// A create or delete on the managed directory failed.
    Io {
        action: FileAction,
        name: String,
        root: PathBuf,
        source: io::Error,
    },
    /// The managed directory could not be enumerated.
    Scan { root: PathBuf, source: io::Error },
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexError::InvalidArgument(msg) => write!(f, "Invalid argument: {}", msg),
            IndexError::Io {
                action,
                name,
                root,
                source,
            } => write!(
                f,
                "Failed to {} file '{}' in {}: {}",
                action,
                name,
                root.display(),
                source
            ),
            IndexError::Scan { root, source } => {
                write!(f, "Failed to read directory {}: {}", root.display(), source)
            }
        }
    }
}

impl std::error::Error for IndexError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IndexError::Io { source, .. } | IndexError::Scan { source, .. } => Some(source),
            IndexError::InvalidArgument(_) => None,
        }
    }
}

/// Top-level error returned by the binary entry point
#[derive(Debug)]
pub enum AppError {
    Config(config::ConfigError),
    Index(IndexError),
    IoError(io::Error),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(e) => write!(f, "Configuration error: {}", e),
            AppError::Index(e) => write!(f, "Index error: {}", e),
            AppError::IoError(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(e) => Some(e),
            AppError::Index(e) => Some(e),
            AppError::IoError(e) => Some(e),
        }
    }
}

impl From<config::ConfigError> for AppError {
    fn from(error: config::ConfigError) -> Self {
        AppError::Config(error)
    }
}

impl From<IndexError> for AppError {
    fn from(error: IndexError) -> Self {
        AppError::Index(error)
    }
}

impl From<io::Error> for AppError {
    fn from(error: io::Error) -> Self {
        AppError::IoError(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn io_error_names_file_and_root() {
        let err = IndexError::Io {
            action: FileAction::Create,
            name: "notes.txt".into(),
            root: PathBuf::from("/srv/files"),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };

        let text = err.to_string();
        assert!(text.contains("create"));
        assert!(text.contains("notes.txt"));
        assert!(text.contains("/srv/files"));
        assert!(err.source().is_some());
    }

    #[test]
    fn invalid_argument_has_no_source() {
        let err = IndexError::InvalidArgument("empty name".into());
        assert!(err.source().is_none());
    }
}
