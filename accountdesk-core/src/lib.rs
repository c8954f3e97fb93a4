//! `AccountDesk` Core Library
//!
//! This crate provides the core functionality for editing a list of LDAP and
//! local credential records through a tabular form: the persisted
//! [`Account`] model, the editable [`AccountRow`] projection, the mapper
//! between them, persistence through a key-value store, and the form store
//! that keeps the two collections aligned.
//!
//! # Crate Structure
//!
//! - [`models`] - Core data structures (Account, AccountRow, Tag, RecordType)
//! - [`mapper`] - Pure conversion between accounts and form rows
//! - [`storage`] - Key-value store trait, file and memory stores, account gateway
//! - [`store`] - The form store: aligned collections and commit pipeline
//! - [`columns`] - Column schema and per-row cell span projection
//! - [`validation`] - Field rules, async validator trait, rule-backed validator
//! - [`config`] - Application settings in TOML
//! - [`tracing`] - Subscriber initialization and span names

// Enable missing_docs warning for public API documentation
#![warn(missing_docs)]

pub mod columns;
pub mod config;
pub mod error;
pub mod id;
pub mod mapper;
pub mod models;
pub mod storage;
pub mod store;
pub mod tracing;
pub mod validation;

pub use columns::{COLUMNS, CellSpan, ColumnDescriptor, ColumnKey, MergedColumn};
pub use config::{LoggingSettings, Settings, StorageSettings};
pub use error::{
    AccountDeskError, ConfigError, ConfigResult, StorageError, StorageResult, StoreError,
    StoreResult,
};
pub use id::{RowId, new_id};
pub use mapper::{decode_tags, encode_tags, to_account, to_row};
pub use models::{Account, AccountRow, RecordType, RowField, Tag};
pub use storage::{ACCOUNTS_KEY, AccountGateway, FileStore, KeyValueStore, MemoryStore};
pub use store::{AccountFormStore, SaveOutcome};
pub use tracing::{
    TracingConfig, TracingError, TracingLevel, TracingOutput, TracingResult, init_tracing,
    is_tracing_initialized, span_names,
};
pub use validation::{
    FieldError, FieldPath, FieldRule, FieldValidator, RuleValidator, ValidationRejection,
    ValidationRules,
};
