//! Command parsing
//!
//! Turns one line of shell input into a [`Command`].

use crate::protocol::Command;

/// Parses a raw input line.
///
/// The keyword is case-insensitive and the rest of the line, trimmed, is the
/// argument. Known keywords used without a required argument parse as
/// [`Command::Unknown`].
pub fn parse_command(raw: &str) -> Command {
    let trimmed = raw.trim();
    let mut parts = trimmed.splitn(2, char::is_whitespace);
    let keyword = parts.next().unwrap_or("").to_ascii_lowercase();
    let arg = parts.next().unwrap_or("").trim();

    match keyword.as_str() {
        "list" | "ls" => Command::List,
        "add" if !arg.is_empty() => Command::Add(arg.to_string()),
        "delete" | "del" | "rm" if !arg.is_empty() => Command::Delete(arg.to_string()),
        "search" if !arg.is_empty() => Command::Search(arg.to_string()),
        "find" if !arg.is_empty() => Command::Find(arg.to_string()),
        "stats" => Command::Stats,
        "refresh" => Command::Refresh,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        _ => Command::Unknown(trimmed.to_string()),
    }
}
