//! Module `commands`
//!
//! Data structures for shell commands and the results of running them.

/// A command parsed from one line of shell input.
///
/// Commands that need a file name or pattern carry it trimmed.
#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    List,
    Add(String),    // Create an empty file
    Delete(String), // Delete a file
    Search(String), // Check whether a name is indexed
    Find(String),   // Glob search
    Stats,
    Refresh,
    Help,
    Quit,
    Unknown(String), // Unrecognised keyword or missing argument
}

/// Represents the outcome status of executing a command.
#[derive(Debug, PartialEq, Eq)]
pub enum CommandStatus {
    Success,
    Failure(String),
    Exit,
}

/// Struct encapsulating the full result of a command execution.
#[derive(Debug)]
pub struct CommandResult {
    pub status: CommandStatus,
    pub message: Option<String>,
}

impl CommandResult {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            status: CommandStatus::Success,
            message: Some(message.into()),
        }
    }

    /// Failure whose reason is also the message shown to the user.
    pub fn failure(reason: impl Into<String>) -> Self {
        let reason = reason.into();
        Self {
            message: Some(reason.clone()),
            status: CommandStatus::Failure(reason),
        }
    }

    pub fn exit(message: impl Into<String>) -> Self {
        Self {
            status: CommandStatus::Exit,
            message: Some(message.into()),
        }
    }
}
