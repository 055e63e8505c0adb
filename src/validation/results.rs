//! Validation result types

/// Outcome of checking a candidate file name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationResult {
    Valid,
    Invalid(String),
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        matches!(self, ValidationResult::Valid)
    }

    /// Reason the name was rejected, `None` when valid.
    pub fn into_reason(self) -> Option<String> {
        match self {
            ValidationResult::Valid => None,
            ValidationResult::Invalid(reason) => Some(reason),
        }
    }
}
