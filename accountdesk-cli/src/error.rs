//! CLI error types and exit codes.

use accountdesk_core::{ConfigError, StorageError, StoreError, TracingError};

/// Exit codes for CLI operations
pub mod exit_codes {
    /// General error - configuration, storage, or usage errors
    pub const GENERAL_ERROR: i32 = 1;
    /// A field failed validation and was not saved
    pub const VALIDATION_FAILURE: i32 = 2;
}

/// CLI error type
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Storage error
    #[error("Storage error: {0}")]
    Storage(String),

    /// No account at the given index
    #[error("Account not found: index {index} (there are {len} accounts)")]
    AccountNotFound {
        /// Requested index
        index: usize,
        /// Number of accounts
        len: usize,
    },

    /// A field failed validation
    #[error("{0}")]
    Validation(String),

    /// Output formatting error
    #[error("Output error: {0}")]
    Output(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<StorageError> for CliError {
    fn from(err: StorageError) -> Self {
        Self::Storage(err.to_string())
    }
}

impl From<StoreError> for CliError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::IndexOutOfRange { index, len } => Self::AccountNotFound { index, len },
            StoreError::Storage(e) => e.into(),
        }
    }
}

impl From<TracingError> for CliError {
    fn from(err: TracingError) -> Self {
        Self::Config(err.to_string())
    }
}

impl CliError {
    /// Returns the appropriate exit code for this error type.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Validation(_) => exit_codes::VALIDATION_FAILURE,
            Self::Config(_)
            | Self::Storage(_)
            | Self::AccountNotFound { .. }
            | Self::Output(_)
            | Self::Io(_) => exit_codes::GENERAL_ERROR,
        }
    }
}
