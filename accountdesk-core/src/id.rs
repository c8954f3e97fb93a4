//! Row identifiers.
//!
//! Rows get an opaque token used only for UI identity (list keys). Tokens are
//! never persisted and never reused.

use std::fmt;

use uuid::Uuid;

/// Opaque identifier of an [`crate::AccountRow`]
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RowId(String);

impl RowId {
    /// Returns the token as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Generates a fresh row identifier
#[must_use]
pub fn new_id() -> RowId {
    RowId(Uuid::new_v4().simple().to_string())
}
