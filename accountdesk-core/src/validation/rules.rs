//! Declarative rule table.

use std::collections::HashMap;

use crate::models::RowField;

/// A single constraint on a field value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    /// The value must be present and not blank
    Required,
    /// The value must not exceed this many characters
    MaxLength(usize),
}

impl FieldRule {
    /// Checks `value`, returning a message on violation
    ///
    /// An absent value only violates [`FieldRule::Required`].
    #[must_use]
    pub fn check(self, field: RowField, value: Option<&str>) -> Option<String> {
        match self {
            Self::Required => match value {
                Some(v) if !v.trim().is_empty() => None,
                _ => Some(format!("{field} is required")),
            },
            Self::MaxLength(max) => {
                let len = value.map_or(0, |v| v.chars().count());
                (len > max).then(|| format!("{field} must be at most {max} characters"))
            }
        }
    }
}

/// Rules per field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationRules {
    rules: HashMap<RowField, Vec<FieldRule>>,
}

impl Default for ValidationRules {
    fn default() -> Self {
        Self::empty()
            .with(RowField::Tags, [FieldRule::MaxLength(50)])
            .with(RowField::RecordType, [FieldRule::Required])
            .with(
                RowField::Login,
                [FieldRule::Required, FieldRule::MaxLength(100)],
            )
            .with(
                RowField::Password,
                [FieldRule::Required, FieldRule::MaxLength(100)],
            )
    }
}

impl ValidationRules {
    /// Creates a table without any rules
    #[must_use]
    pub fn empty() -> Self {
        Self {
            rules: HashMap::new(),
        }
    }

    /// Replaces the rules for `field`
    #[must_use]
    pub fn with(mut self, field: RowField, rules: impl IntoIterator<Item = FieldRule>) -> Self {
        self.rules.insert(field, rules.into_iter().collect());
        self
    }

    /// Returns the rules for `field`
    #[must_use]
    pub fn rules_for(&self, field: RowField) -> &[FieldRule] {
        self.rules.get(&field).map(Vec::as_slice).unwrap_or_default()
    }

    /// Checks `value` against every rule for `field`
    ///
    /// Returns the violation messages; empty means valid.
    #[must_use]
    pub fn check(&self, field: RowField, value: Option<&str>) -> Vec<String> {
        self.rules_for(field)
            .iter()
            .filter_map(|rule| rule.check(field, value))
            .collect()
    }
}
