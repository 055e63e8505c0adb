//! Command handlers
//!
//! Each handler validates its input, calls the directory index and turns
//! the outcome into a [`CommandResult`]. Index failures become failure
//! results; they never end the session.

use log::{info, warn};

use crate::error::handlers::{error_to_message, handle_error};
use crate::protocol::responses::{HELP_TEXT, format_listing, format_stats};
use crate::protocol::{Command, CommandResult};
use crate::storage::DirectoryIndex;
use crate::validation;

/// Dispatches a parsed command to its handler.
pub fn handle_command(index: &mut DirectoryIndex, command: &Command) -> CommandResult {
    match command {
        Command::List => handle_cmd_list(index),
        Command::Add(name) => handle_cmd_add(index, name),
        Command::Delete(name) => handle_cmd_delete(index, name),
        Command::Search(name) => handle_cmd_search(index, name),
        Command::Find(pattern) => handle_cmd_find(index, pattern),
        Command::Stats => CommandResult::success(format_stats(&index.stats())),
        Command::Refresh => handle_cmd_refresh(index),
        Command::Help => CommandResult::success(HELP_TEXT),
        Command::Quit => CommandResult::exit("Goodbye!"),
        Command::Unknown(raw) => handle_cmd_unknown(raw),
    }
}

fn handle_cmd_list(index: &DirectoryIndex) -> CommandResult {
    CommandResult::success(format_listing(
        &index.list(),
        "Directory is empty - no files found.",
    ))
}

fn handle_cmd_add(index: &mut DirectoryIndex, name: &str) -> CommandResult {
    if let Some(reason) = validation::reason(name) {
        return CommandResult::failure(format!("Invalid file name: {}", reason));
    }

    match index.add(name) {
        Ok(true) => CommandResult::success(format!("File '{}' added.", name)),
        Ok(false) => CommandResult::failure(format!("File '{}' already exists.", name)),
        Err(e) => {
            handle_error(&e);
            CommandResult::failure(error_to_message(&e))
        }
    }
}

fn handle_cmd_delete(index: &mut DirectoryIndex, name: &str) -> CommandResult {
    if let Some(reason) = validation::reason(name) {
        return CommandResult::failure(format!("Invalid file name: {}", reason));
    }

    match index.delete(name) {
        Ok(true) => CommandResult::success(format!("File '{}' deleted.", name)),
        Ok(false) => CommandResult::failure(format!("File not found: '{}'.", name)),
        Err(e) => {
            handle_error(&e);
            CommandResult::failure(error_to_message(&e))
        }
    }
}

fn handle_cmd_search(index: &DirectoryIndex, name: &str) -> CommandResult {
    if let Some(reason) = validation::reason(name) {
        return CommandResult::failure(format!("Invalid file name: {}", reason));
    }

    if index.search(name) {
        CommandResult::success(format!("File found: '{}'.", name))
    } else {
        CommandResult::failure(format!("File not found: '{}'.", name))
    }
}

fn handle_cmd_find(index: &DirectoryIndex, pattern: &str) -> CommandResult {
    let matches = index.search_by_pattern(pattern);
    CommandResult::success(format_listing(
        &matches,
        &format!("No files match '{}'.", pattern),
    ))
}

fn handle_cmd_refresh(index: &mut DirectoryIndex) -> CommandResult {
    match index.refresh() {
        None => {
            info!("Refreshed index of {}", index.root().display());
            CommandResult::success(format!("Refreshed: {} file(s).", index.count()))
        }
        Some(e) => CommandResult::failure(error_to_message(&e)),
    }
}

fn handle_cmd_unknown(raw: &str) -> CommandResult {
    warn!("Unrecognised input: {:?}", raw);
    CommandResult::failure(format!(
        "Unknown command or missing argument: '{}'. Type 'help' for a list of commands.",
        raw
    ))
}
