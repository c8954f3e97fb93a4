//! Account list (de)serialization over a [`KeyValueStore`].

use super::KeyValueStore;
use crate::error::{StorageError, StorageResult};
use crate::models::Account;

/// Key under which the account list is stored
pub const ACCOUNTS_KEY: &str = "accounts";

/// Reads and writes the full account list under [`ACCOUNTS_KEY`]
#[derive(Debug, Clone)]
pub struct AccountGateway<S> {
    backend: S,
}

impl<S: KeyValueStore> AccountGateway<S> {
    /// Wraps a key-value store backend
    #[must_use]
    pub const fn new(backend: S) -> Self {
        Self { backend }
    }

    /// Loads the stored account list
    ///
    /// An absent key or a value that does not parse as an account list
    /// yields an empty list. LDAP accounts carrying a password are
    /// normalized on the way in.
    ///
    /// # Errors
    ///
    /// Returns an error only if the backend itself cannot be read.
    pub fn load(&self) -> StorageResult<Vec<Account>> {
        let Some(raw) = self.backend.get(ACCOUNTS_KEY)? else {
            tracing::debug!("No stored accounts");
            return Ok(Vec::new());
        };

        let mut accounts: Vec<Account> = match serde_json::from_str(&raw) {
            Ok(accounts) => accounts,
            Err(e) => {
                tracing::warn!(error = %e, "Stored accounts are malformed, starting empty");
                return Ok(Vec::new());
            }
        };

        let normalized = accounts
            .iter_mut()
            .map(Account::normalize)
            .filter(|changed| *changed)
            .count();
        if normalized > 0 {
            tracing::debug!(count = normalized, "Dropped passwords stored on LDAP accounts");
        }

        tracing::debug!(count = accounts.len(), "Loaded accounts");
        Ok(accounts)
    }

    /// Replaces the stored account list with `accounts`
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails or the backend rejects the
    /// write. Nothing is written in either case.
    pub fn save(&mut self, accounts: &[Account]) -> StorageResult<()> {
        let json =
            serde_json::to_string(accounts).map_err(|e| StorageError::Serialize(e.to_string()))?;
        self.backend.set(ACCOUNTS_KEY, &json)?;
        tracing::debug!(count = accounts.len(), "Saved accounts");
        Ok(())
    }

    /// Returns the backend
    #[must_use]
    pub const fn backend(&self) -> &S {
        &self.backend
    }

    /// Returns the backend mutably
    pub fn backend_mut(&mut self) -> &mut S {
        &mut self.backend
    }

    /// Consumes the gateway and returns the backend
    #[must_use]
    pub fn into_inner(self) -> S {
        self.backend
    }
}
