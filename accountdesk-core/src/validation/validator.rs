//! Validator boundary and the rule-table validator.

use async_trait::async_trait;

use super::{FieldError, FieldPath, ValidationRejection, ValidationRules};
use crate::models::{AccountRow, RowField};

/// Asynchronous field validation capability
///
/// Implementations receive the current rows and the paths to check, and
/// resolve with `Ok(())` when every path is valid. Any `Err` is treated by
/// the form store as "do not commit".
#[async_trait]
pub trait FieldValidator: Send + Sync {
    /// Validates the fields at `paths`
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationRejection`] listing every failing path.
    async fn validate_fields(
        &self,
        rows: &[AccountRow],
        paths: &[FieldPath],
    ) -> Result<(), ValidationRejection>;
}

/// Validator enforcing a [`ValidationRules`] table
///
/// The password of an LDAP row is never checked: that cell is collapsed in
/// the form and the value is discarded on commit.
#[derive(Debug, Clone, Default)]
pub struct RuleValidator {
    rules: ValidationRules,
}

impl RuleValidator {
    /// Creates a validator over `rules`
    #[must_use]
    pub const fn new(rules: ValidationRules) -> Self {
        Self { rules }
    }

    /// Returns the rule table
    #[must_use]
    pub const fn rules(&self) -> &ValidationRules {
        &self.rules
    }

    /// Checks one path synchronously
    #[must_use]
    pub fn check_path(&self, rows: &[AccountRow], path: FieldPath) -> Option<FieldError> {
        let Some(row) = rows.get(path.index) else {
            return Some(FieldError {
                path,
                messages: vec![format!("row {} does not exist", path.index)],
            });
        };

        if path.field == RowField::Password && !row.record_type.has_password() {
            return None;
        }

        let messages = self.rules.check(path.field, path.field.value_of(row));
        (!messages.is_empty()).then_some(FieldError { path, messages })
    }
}

#[async_trait]
impl FieldValidator for RuleValidator {
    async fn validate_fields(
        &self,
        rows: &[AccountRow],
        paths: &[FieldPath],
    ) -> Result<(), ValidationRejection> {
        let errors: Vec<FieldError> = paths
            .iter()
            .filter_map(|path| self.check_path(rows, *path))
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationRejection { errors })
        }
    }
}
