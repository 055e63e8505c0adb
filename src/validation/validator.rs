//! File name validator
//!
//! Pure syntactic checks on a user supplied file name. Nothing here touches
//! the filesystem.

use super::results::ValidationResult;

pub const MIN_NAME_LENGTH: usize = 3;
pub const MAX_NAME_LENGTH: usize = 255;

/// Characters that are never allowed in a managed file name.
pub const FORBIDDEN_CHARS: [char; 9] = ['<', '>', ':', '"', '/', '\\', '|', '?', '*'];

/// Checks `name` against every rule in order and reports the first failure.
///
/// Surrounding whitespace is ignored. Lengths are counted in characters.
pub fn validate(name: &str) -> ValidationResult {
    let name = name.trim();

    if name.is_empty() {
        return ValidationResult::Invalid("File name cannot be empty".into());
    }

    let length = name.chars().count();
    if length < MIN_NAME_LENGTH {
        return ValidationResult::Invalid(format!(
            "File name is too short (minimum {} characters)",
            MIN_NAME_LENGTH
        ));
    }

    if length > MAX_NAME_LENGTH {
        return ValidationResult::Invalid(format!(
            "File name is too long (maximum {} characters)",
            MAX_NAME_LENGTH
        ));
    }

    if name.contains(FORBIDDEN_CHARS) {
        return ValidationResult::Invalid(format!(
            "File name contains forbidden characters: {}",
            forbidden_list()
        ));
    }

    if !name.contains('.') {
        return ValidationResult::Invalid(
            "File name must have an extension (for example notes.txt)".into(),
        );
    }

    ValidationResult::Valid
}

/// Returns true when `name` passes every rule.
pub fn is_valid(name: &str) -> bool {
    validate(name).is_valid()
}

/// Human readable rejection reason, `None` when `name` is valid.
pub fn reason(name: &str) -> Option<String> {
    validate(name).into_reason()
}

fn forbidden_list() -> String {
    FORBIDDEN_CHARS
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
