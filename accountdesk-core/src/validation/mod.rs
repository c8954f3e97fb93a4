//! Field validation for account rows
//!
//! Validation is an external, asynchronous capability: the form store asks a
//! [`FieldValidator`] to check a set of field paths and commits only when the
//! validator resolves successfully. [`ValidationRules`] is the declarative
//! rule table and [`RuleValidator`] is a validator that enforces it.

mod rules;
mod validator;

pub use rules::{FieldRule, ValidationRules};
pub use validator::{FieldValidator, RuleValidator};

use std::fmt;

use thiserror::Error;

use crate::models::RowField;

/// Address of one field of one row, rendered as `accounts.<index>.<field>`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldPath {
    /// Row index
    pub index: usize,
    /// Field within the row
    pub field: RowField,
}

impl FieldPath {
    /// Creates a path
    #[must_use]
    pub const fn new(index: usize, field: RowField) -> Self {
        Self { index, field }
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "accounts.{}.{}", self.index, self.field)
    }
}

/// Messages for one field that failed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    /// The failing field
    pub path: FieldPath,
    /// Human-readable rule violations
    pub messages: Vec<String>,
}

/// A validator's refusal, listing every failed field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Validation failed: {}", describe(.errors))]
pub struct ValidationRejection {
    /// Failed fields
    pub errors: Vec<FieldError>,
}

impl ValidationRejection {
    /// Creates a rejection for a single field
    #[must_use]
    pub fn single(path: FieldPath, message: impl Into<String>) -> Self {
        Self {
            errors: vec![FieldError {
                path,
                messages: vec![message.into()],
            }],
        }
    }

    /// Returns true if `path` is among the failed fields
    #[must_use]
    pub fn contains(&self, path: FieldPath) -> bool {
        self.errors.iter().any(|e| e.path == path)
    }
}

fn describe(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{} ({})", e.path, e.messages.join(", ")))
        .collect::<Vec<_>>()
        .join("; ")
}
