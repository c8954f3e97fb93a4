//! Form store: aligned accounts and rows with a single commit point.
//!
//! `accounts[i]` and `rows[i]` always describe the same entity. Every
//! insertion or removal touches both vectors in the same call, and
//! [`AccountFormStore::persist_row`] is the only place an edited row becomes
//! committed account state.

use tracing::Instrument;

use crate::columns::{self, MergedColumn};
use crate::error::{StorageResult, StoreError, StoreResult};
use crate::mapper::{to_account, to_row};
use crate::models::{Account, AccountRow, RecordType, RowField};
use crate::storage::{AccountGateway, KeyValueStore};
use crate::tracing::span_names;
use crate::validation::{FieldPath, FieldValidator, ValidationRejection};

/// Result of [`AccountFormStore::save_field`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// No validator was supplied; nothing happened
    Skipped,
    /// The field validated and the row was committed
    Committed,
    /// The validator rejected the field; the row keeps its uncommitted edit
    Rejected(ValidationRejection),
}

impl SaveOutcome {
    /// Returns true if the row was committed
    #[must_use]
    pub const fn is_committed(&self) -> bool {
        matches!(self, Self::Committed)
    }
}

/// Owner of the account list and its editable form rows
#[derive(Debug)]
pub struct AccountFormStore<S> {
    accounts: Vec<Account>,
    rows: Vec<AccountRow>,
    gateway: AccountGateway<S>,
}

impl<S: KeyValueStore> AccountFormStore<S> {
    /// Creates a store over `backend`, loading and hydrating stored accounts
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read. Malformed stored data
    /// is not an error; it loads as an empty list.
    pub fn new(backend: S) -> StorageResult<Self> {
        Self::with_gateway(AccountGateway::new(backend))
    }

    /// Creates a store over an existing gateway
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    pub fn with_gateway(gateway: AccountGateway<S>) -> StorageResult<Self> {
        let _span = tracing::info_span!(span_names::ACCOUNTS_LOAD).entered();
        let accounts = gateway.load()?;
        let mut store = Self {
            accounts,
            rows: Vec::new(),
            gateway,
        };
        store.hydrate();
        Ok(store)
    }

    /// Rebuilds every row from the committed accounts
    ///
    /// Uncommitted edits are discarded, so this is only meant to run before
    /// the user starts editing.
    pub fn hydrate(&mut self) {
        self.rows = self.accounts.iter().map(to_row).collect();
        tracing::debug!(rows = self.rows.len(), "Hydrated form rows");
    }

    /// Committed accounts, index aligned with [`Self::rows`]
    #[must_use]
    pub fn accounts(&self) -> &[Account] {
        &self.accounts
    }

    /// Editable rows, index aligned with [`Self::accounts`]
    #[must_use]
    pub fn rows(&self) -> &[AccountRow] {
        &self.rows
    }

    /// Returns the row at `index`
    #[must_use]
    pub fn row(&self, index: usize) -> Option<&AccountRow> {
        self.rows.get(index)
    }

    /// Returns the row at `index` for editing
    ///
    /// Edits stay uncommitted until [`Self::persist_row`] or a successful
    /// [`Self::save_field`].
    ///
    /// # Errors
    ///
    /// Returns `StoreError::IndexOutOfRange` if there is no such row.
    pub fn row_mut(&mut self, index: usize) -> StoreResult<&mut AccountRow> {
        self.check_index(index)?;
        Ok(&mut self.rows[index])
    }

    /// Number of accounts
    #[must_use]
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Returns true if there are no accounts
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    /// Appends a blank LDAP account and persists
    ///
    /// Returns the index of the new account.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting fails. The new row and account stay in
    /// memory in that case.
    pub fn add_account(&mut self) -> StoreResult<usize> {
        let _span = tracing::info_span!(span_names::ACCOUNT_ADD).entered();
        let row = AccountRow::blank();
        let account = to_account(&row);
        self.rows.push(row);
        self.accounts.push(account);

        let index = self.accounts.len() - 1;
        tracing::debug!(index, "Added account");
        self.save()?;
        Ok(index)
    }

    /// Removes the account and row at `index` and persists
    ///
    /// # Errors
    ///
    /// Returns `StoreError::IndexOutOfRange` without touching anything if
    /// there is no such row, or a storage error if persisting fails.
    pub fn remove_account(&mut self, index: usize) -> StoreResult<()> {
        let _span = tracing::info_span!(span_names::ACCOUNT_REMOVE, index).entered();
        self.check_index(index)?;
        self.rows.remove(index);
        self.accounts.remove(index);
        tracing::debug!(index, remaining = self.accounts.len(), "Removed account");
        self.save()?;
        Ok(())
    }

    /// Changes the record type of row `index` and commits it
    ///
    /// Switching to LDAP clears any password typed into the row.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::IndexOutOfRange` if there is no such row, or a
    /// storage error if persisting fails.
    pub fn on_record_type_change(
        &mut self,
        index: usize,
        record_type: RecordType,
    ) -> StoreResult<()> {
        let _span = tracing::info_span!(
            span_names::RECORD_TYPE_CHANGE,
            index,
            record_type = %record_type
        )
        .entered();
        let row = self.row_mut(index)?;
        row.record_type = record_type;
        if record_type == RecordType::Ldap {
            row.password = None;
        }
        self.persist_row(index)
    }

    /// Commits row `index` into the account list and persists
    ///
    /// # Errors
    ///
    /// Returns `StoreError::IndexOutOfRange` if there is no such row, or a
    /// storage error if persisting fails.
    pub fn persist_row(&mut self, index: usize) -> StoreResult<()> {
        self.check_index(index)?;
        self.accounts[index] = to_account(&self.rows[index]);
        tracing::debug!(index, "Committed row");
        self.save()?;
        Ok(())
    }

    /// Validates one field of row `index` and commits the row if it passes
    ///
    /// Without a validator this is a no-op. A rejection is logged and
    /// returned as [`SaveOutcome::Rejected`]; the row keeps its edited value
    /// and the account list is not touched.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::IndexOutOfRange` if there is no such row, or a
    /// storage error if the commit fails to persist.
    pub async fn save_field<V>(
        &mut self,
        index: usize,
        field: RowField,
        validator: Option<&V>,
    ) -> StoreResult<SaveOutcome>
    where
        V: FieldValidator + ?Sized,
    {
        let Some(validator) = validator else {
            return Ok(SaveOutcome::Skipped);
        };
        self.check_index(index)?;

        let path = FieldPath::new(index, field);
        let span = tracing::debug_span!(span_names::FIELD_VALIDATE, path = %path);
        let result = validator
            .validate_fields(&self.rows, &[path])
            .instrument(span)
            .await;

        match result {
            Ok(()) => {
                self.persist_row(index)?;
                Ok(SaveOutcome::Committed)
            }
            Err(rejection) => {
                tracing::warn!(path = %path, error = %rejection, "Field validation failed");
                Ok(SaveOutcome::Rejected(rejection))
            }
        }
    }

    /// Projects the column schema over the current rows
    #[must_use]
    pub fn merged_columns(&self) -> Vec<MergedColumn> {
        columns::merged_columns(&self.rows)
    }

    /// Returns the persistence gateway
    #[must_use]
    pub const fn gateway(&self) -> &AccountGateway<S> {
        &self.gateway
    }

    /// Returns the persistence gateway mutably
    pub fn gateway_mut(&mut self) -> &mut AccountGateway<S> {
        &mut self.gateway
    }

    fn check_index(&self, index: usize) -> StoreResult<()> {
        debug_assert_eq!(self.accounts.len(), self.rows.len());
        if index < self.rows.len() {
            Ok(())
        } else {
            Err(StoreError::IndexOutOfRange {
                index,
                len: self.rows.len(),
            })
        }
    }

    fn save(&mut self) -> StoreResult<()> {
        let _span = tracing::debug_span!(span_names::ACCOUNTS_SAVE).entered();
        self.gateway.save(&self.accounts).map_err(|e| {
            tracing::error!(error = %e, "Failed to persist accounts");
            StoreError::from(e)
        })
    }
}
