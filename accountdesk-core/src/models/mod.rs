//! Core data models for `AccountDesk`
//!
//! [`Account`] is the committed, persisted record. [`AccountRow`] is its
//! editable projection bound to the form; rows may be transiently invalid
//! until they are committed back into accounts.

mod account;
mod row;
pub(crate) mod secret;

pub use account::{Account, RecordType, Tag};
pub use row::{AccountRow, RowField};
