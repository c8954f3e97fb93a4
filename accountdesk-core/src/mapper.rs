//! Conversion between committed accounts and editable rows.
//!
//! Both directions are total: malformed row input never fails, it is
//! normalized. The tag encoding is a single `"; "`-joined line, so tag text
//! that itself contains `;` or surrounding whitespace does not survive a
//! round trip.

use secrecy::SecretString;

use crate::id::new_id;
use crate::models::{Account, AccountRow, RecordType, Tag};

/// Separator written between tags in a row's tag line
pub const TAG_SEPARATOR: &str = "; ";

/// Joins tag texts into the single-line row encoding
#[must_use]
pub fn encode_tags(tags: &[Tag]) -> String {
    tags.iter()
        .map(|t| t.text.as_str())
        .collect::<Vec<_>>()
        .join(TAG_SEPARATOR)
}

/// Splits a tag line on `;`, trimming segments and dropping empty ones
#[must_use]
pub fn decode_tags(tag_string: &str) -> Vec<Tag> {
    tag_string
        .split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(Tag::new)
        .collect()
}

/// Builds a fresh editable row for `account`
#[must_use]
pub fn to_row(account: &Account) -> AccountRow {
    AccountRow {
        id: new_id(),
        tag_string: encode_tags(&account.tags),
        record_type: account.record_type,
        login: account.login.clone(),
        password: account.password.clone(),
    }
}

/// Converts an edited row into the account it commits to
#[must_use]
pub fn to_account(row: &AccountRow) -> Account {
    let password = match row.record_type {
        RecordType::Ldap => None,
        RecordType::Local => Some(
            row.password
                .clone()
                .unwrap_or_else(|| SecretString::from("")),
        ),
    };

    Account {
        tags: decode_tags(&row.tag_string),
        record_type: row.record_type,
        login: row.login.trim().to_string(),
        password,
    }
}
