//! Field-level validation reported as values.
//!
//! Validation failures surface as `Vec<ValidationError>` result values so a
//! caller can render them next to the offending form fields; they are never
//! raised as faults.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single failed validation, as a field/message pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// The field the failure is attached to.
    pub field: String,
    /// Human-readable message for display next to the field.
    pub message: String,
}

impl ValidationError {
    /// Create a new validation error.
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Append a required-field error when `value` is blank.
///
/// Blank means empty or whitespace-only.
pub fn require_present(errors: &mut Vec<ValidationError>, field: &'static str, value: &str) {
    if value.trim().is_empty() {
        errors.push(ValidationError::new(field, format!("{field} is required")));
    }
}
