//! Editable form row.

use std::fmt;
use std::str::FromStr;

use secrecy::{ExposeSecret, SecretString};

use super::RecordType;
use crate::id::{RowId, new_id};

/// Editable projection of an [`super::Account`]
///
/// Rows are bound to form inputs and may hold values that would not pass
/// validation. They are never persisted; `id` only identifies the row in the
/// rendered list.
#[derive(Debug, Clone)]
pub struct AccountRow {
    /// Row identity for list rendering
    pub id: RowId,
    /// Tags encoded as a single `"; "`-separated line
    pub tag_string: String,
    /// Authentication kind
    pub record_type: RecordType,
    /// Login as typed, untrimmed
    pub login: String,
    /// Password as typed, `None` when cleared
    pub password: Option<SecretString>,
}

impl AccountRow {
    /// Creates the blank row used for a newly added account
    #[must_use]
    pub fn blank() -> Self {
        Self {
            id: new_id(),
            tag_string: String::new(),
            record_type: RecordType::Ldap,
            login: String::new(),
            password: None,
        }
    }

    /// Returns the typed password text, if any
    #[must_use]
    pub fn exposed_password(&self) -> Option<&str> {
        self.password.as_ref().map(ExposeSecret::expose_secret)
    }

    /// Replaces the typed password
    pub fn set_password(&mut self, password: impl Into<String>) {
        self.password = Some(SecretString::from(password.into()));
    }
}

impl Default for AccountRow {
    fn default() -> Self {
        Self::blank()
    }
}

impl PartialEq for AccountRow {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
            && self.tag_string == other.tag_string
            && self.record_type == other.record_type
            && self.login == other.login
            && self.exposed_password() == other.exposed_password()
    }
}

impl Eq for AccountRow {}

/// A validatable field of an [`AccountRow`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowField {
    /// The encoded tag line
    Tags,
    /// The record type selector
    RecordType,
    /// The login input
    Login,
    /// The password input
    Password,
}

impl RowField {
    /// All fields in column order
    pub const ALL: [Self; 4] = [Self::Tags, Self::RecordType, Self::Login, Self::Password];

    /// Returns the field name used in validation paths and rule tables
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tags => "tag",
            Self::RecordType => "recordType",
            Self::Login => "login",
            Self::Password => "password",
        }
    }

    /// Returns the current text of this field in `row`
    ///
    /// `None` means the field holds no value (a cleared password).
    #[must_use]
    pub fn value_of(self, row: &AccountRow) -> Option<&str> {
        match self {
            Self::Tags => Some(row.tag_string.as_str()),
            Self::RecordType => Some(row.record_type.as_str()),
            Self::Login => Some(row.login.as_str()),
            Self::Password => row.exposed_password(),
        }
    }
}

impl fmt::Display for RowField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RowField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("unknown field '{s}'"))
    }
}
