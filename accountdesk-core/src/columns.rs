//! Column schema for the account table
//!
//! The table has a fixed set of columns. For LDAP rows the login cell spans
//! the password column and the password cell is collapsed, since LDAP
//! accounts have no local password. The per-row spans are a pure projection
//! of the current rows and never touch stored data.

use serde::Serialize;

use crate::models::{AccountRow, RecordType};

/// Identifies a table column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum ColumnKey {
    /// Encoded tag line
    Tags,
    /// Record type selector
    RecordType,
    /// Login input
    Login,
    /// Password input
    Password,
    /// Row actions (remove)
    Actions,
}

/// Static description of a table column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnDescriptor {
    /// Column identity
    pub key: ColumnKey,
    /// Header title
    pub title: &'static str,
    /// Name of the bound field
    pub data_index: &'static str,
}

/// The table columns in display order
pub const COLUMNS: [ColumnDescriptor; 5] = [
    ColumnDescriptor {
        key: ColumnKey::Tags,
        title: "Tags",
        data_index: "tag",
    },
    ColumnDescriptor {
        key: ColumnKey::RecordType,
        title: "Record type",
        data_index: "recordType",
    },
    ColumnDescriptor {
        key: ColumnKey::Login,
        title: "Login",
        data_index: "login",
    },
    ColumnDescriptor {
        key: ColumnKey::Password,
        title: "Password",
        data_index: "password",
    },
    ColumnDescriptor {
        key: ColumnKey::Actions,
        title: "",
        data_index: "actions",
    },
];

/// Cell span override for one row in one column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CellSpan {
    /// Render normally in one column
    #[default]
    Normal,
    /// Span this many columns
    Merged(u16),
    /// Collapse to zero width
    Hidden,
}

impl CellSpan {
    /// Returns the explicit `colSpan` value, `None` for a normal cell
    #[must_use]
    pub const fn col_span(self) -> Option<u16> {
        match self {
            Self::Normal => None,
            Self::Merged(n) => Some(n),
            Self::Hidden => Some(0),
        }
    }

    /// Returns the number of columns this cell occupies
    #[must_use]
    pub const fn width(self) -> u16 {
        match self {
            Self::Normal => 1,
            Self::Merged(n) => n,
            Self::Hidden => 0,
        }
    }
}

/// A column together with the span of each row's cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MergedColumn {
    /// The column
    #[serde(flatten)]
    pub descriptor: ColumnDescriptor,
    /// One span per row, aligned with the rows
    pub spans: Vec<CellSpan>,
}

/// Returns the span of `row`'s cell in `column`
#[must_use]
pub fn cell_span(column: ColumnKey, row: &AccountRow) -> CellSpan {
    match (column, row.record_type) {
        (ColumnKey::Login, RecordType::Ldap) => CellSpan::Merged(2),
        (ColumnKey::Password, RecordType::Ldap) => CellSpan::Hidden,
        _ => CellSpan::Normal,
    }
}

/// Projects the column schema over `rows`
#[must_use]
pub fn merged_columns(rows: &[AccountRow]) -> Vec<MergedColumn> {
    COLUMNS
        .iter()
        .map(|descriptor| MergedColumn {
            descriptor: *descriptor,
            spans: rows
                .iter()
                .map(|row| cell_span(descriptor.key, row))
                .collect(),
        })
        .collect()
}
