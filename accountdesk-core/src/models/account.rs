//! Persisted account record.

use std::fmt;
use std::str::FromStr;

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// A free-form label attached to an account
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tag {
    /// Label text
    pub text: String,
}

impl Tag {
    /// Creates a tag with the given text
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// How an account authenticates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RecordType {
    /// Externally authenticated against a directory; never stores a password
    #[default]
    #[serde(rename = "LDAP")]
    Ldap,
    /// Locally stored credential with its own password
    #[serde(rename = "LOCAL", alias = "Локальная")]
    Local,
}

impl RecordType {
    /// All record types in display order
    pub const ALL: [Self; 2] = [Self::Ldap, Self::Local];

    /// Returns the serialized label
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ldap => "LDAP",
            Self::Local => "LOCAL",
        }
    }

    /// Returns true if accounts of this type carry a password
    #[must_use]
    pub const fn has_password(self) -> bool {
        matches!(self, Self::Local)
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RecordType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ldap" => Ok(Self::Ldap),
            "local" | "локальная" => Ok(Self::Local),
            other => Err(format!(
                "unknown record type '{other}' (expected ldap or local)"
            )),
        }
    }
}

/// A committed credential record
///
/// `password` is always `None` for [`RecordType::Ldap`]; for
/// [`RecordType::Local`] it holds the stored password, possibly empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    /// Labels in display order
    #[serde(rename = "tag", default)]
    pub tags: Vec<Tag>,
    /// Authentication kind
    pub record_type: RecordType,
    /// Trimmed login name
    pub login: String,
    /// Local password, absent for LDAP accounts
    #[serde(default, with = "super::secret")]
    pub password: Option<SecretString>,
}

impl Account {
    /// Creates an LDAP account without tags
    #[must_use]
    pub fn ldap(login: impl Into<String>) -> Self {
        Self {
            tags: Vec::new(),
            record_type: RecordType::Ldap,
            login: login.into(),
            password: None,
        }
    }

    /// Creates a local account without tags
    #[must_use]
    pub fn local(login: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            tags: Vec::new(),
            record_type: RecordType::Local,
            login: login.into(),
            password: Some(SecretString::from(password.into())),
        }
    }

    /// Replaces the tag list
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Tag::new).collect();
        self
    }

    /// Returns the tag texts in order
    pub fn tag_texts(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(|t| t.text.as_str())
    }

    /// Returns the password text, if any
    #[must_use]
    pub fn exposed_password(&self) -> Option<&str> {
        self.password.as_ref().map(ExposeSecret::expose_secret)
    }

    /// Drops a password stored on an LDAP account
    ///
    /// Returns true if the account was changed.
    pub fn normalize(&mut self) -> bool {
        if self.record_type == RecordType::Ldap && self.password.is_some() {
            self.password = None;
            return true;
        }
        false
    }
}

impl PartialEq for Account {
    fn eq(&self, other: &Self) -> bool {
        self.tags == other.tags
            && self.record_type == other.record_type
            && self.login == other.login
            && self.exposed_password() == other.exposed_password()
    }
}

impl Eq for Account {}
