//! Error types for `AccountDesk`
//!
//! Each layer has its own `thiserror` enum; [`AccountDeskError`] wraps them
//! for callers that only need a single error type.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by a key-value store backend
#[derive(Debug, Error)]
pub enum StorageError {
    /// The backend could not read the value for a key
    #[error("Failed to read key '{key}': {reason}")]
    Read {
        /// Key being read
        key: String,
        /// Backend-specific reason
        reason: String,
    },

    /// The backend could not write the value for a key
    #[error("Failed to write key '{key}': {reason}")]
    Write {
        /// Key being written
        key: String,
        /// Backend-specific reason
        reason: String,
    },

    /// The account list could not be serialized
    #[error("Failed to serialize accounts: {0}")]
    Serialize(String),

    /// I/O error from a file-backed store
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised by form store operations
#[derive(Debug, Error)]
pub enum StoreError {
    /// An operation addressed a row that does not exist
    #[error("Row index {index} is out of range (length {len})")]
    IndexOutOfRange {
        /// Requested index
        index: usize,
        /// Number of rows at the time of the call
        len: usize,
    },

    /// Persisting the account list failed
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),
}

/// Errors raised while loading or saving settings
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The settings file does not exist
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The settings file could not be read
    #[error("Failed to read configuration: {0}")]
    Read(String),

    /// The settings file is not valid TOML for [`crate::Settings`]
    #[error("Failed to parse configuration: {0}")]
    Parse(String),

    /// The settings could not be serialized
    #[error("Failed to serialize configuration: {0}")]
    Serialize(String),

    /// The settings file could not be written
    #[error("Failed to write configuration: {0}")]
    Write(String),

    /// No platform configuration directory is available
    #[error("Could not determine the configuration directory")]
    NoConfigDir,
}

/// Top-level error type for `AccountDesk`
#[derive(Debug, Error)]
pub enum AccountDeskError {
    /// Settings error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Storage backend error
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// Form store error
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Result type for form store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Result type for settings operations
pub type ConfigResult<T> = Result<T, ConfigError>;
