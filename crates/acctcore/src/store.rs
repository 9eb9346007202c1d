//! Credential store capability and an in-memory implementation

use std::collections::BTreeMap;
use std::collections::btree_map::Entry;
use std::sync::Mutex;

use crate::account::Account;
use crate::error::StoreError;
use crate::password::hash_password;

/// Persistence for accounts and their password hashes
///
/// Operations are driven one at a time from a single command invocation, so
/// the futures are not required to be `Send`.
#[allow(async_fn_in_trait)]
pub trait CredentialStore {
    /// Hash `password` and store a new account
    async fn create_account(&self, username: &str, password: &str) -> Result<(), StoreError>;

    /// Accounts whose username contains `keyword`; an empty keyword matches all
    async fn get_accounts(
        &self,
        keyword: &str,
        include_hidden: bool,
    ) -> Result<Vec<Account>, StoreError>;

    /// Delete the named accounts as one unit, or every account when
    /// `usernames` is empty
    async fn delete_accounts(&self, usernames: &[String]) -> Result<(), StoreError>;
}

impl<S: CredentialStore + ?Sized> CredentialStore for &S {
    async fn create_account(&self, username: &str, password: &str) -> Result<(), StoreError> {
        (**self).create_account(username, password).await
    }

    async fn get_accounts(
        &self,
        keyword: &str,
        include_hidden: bool,
    ) -> Result<Vec<Account>, StoreError> {
        (**self).get_accounts(keyword, include_hidden).await
    }

    async fn delete_accounts(&self, usernames: &[String]) -> Result<(), StoreError> {
        (**self).delete_accounts(usernames).await
    }
}

#[derive(Debug, Clone)]
struct StoredAccount {
    password_hash: String,
    hidden: bool,
}

/// In-memory credential store
///
/// Usernames are kept in sorted order. Keyword matching is a
/// case-insensitive substring test.
#[derive(Debug, Default)]
pub struct MemoryStore {
    accounts: Mutex<BTreeMap<String, StoredAccount>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exclude an account from searches that do not ask for hidden accounts
    pub fn hide(&self, username: &str) -> Result<(), StoreError> {
        let mut accounts = self.lock();
        let account = accounts
            .get_mut(username)
            .ok_or_else(|| StoreError::NotFound(username.to_string()))?;
        account.hidden = true;
        Ok(())
    }

    /// Stored password hash, if the account exists
    #[cfg(test)]
    fn password_hash(&self, username: &str) -> Option<String> {
        self.lock().get(username).map(|a| a.password_hash.clone())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, BTreeMap<String, StoredAccount>> {
        self.accounts.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl CredentialStore for MemoryStore {
    async fn create_account(&self, username: &str, password: &str) -> Result<(), StoreError> {
        let password_hash = hash_password(password)?;

        match self.lock().entry(username.to_string()) {
            Entry::Occupied(_) => Err(StoreError::AlreadyExists(username.to_string())),
            Entry::Vacant(slot) => {
                slot.insert(StoredAccount {
                    password_hash,
                    hidden: false,
                });
                Ok(())
            }
        }
    }

    async fn get_accounts(
        &self,
        keyword: &str,
        include_hidden: bool,
    ) -> Result<Vec<Account>, StoreError> {
        let needle = keyword.to_lowercase();
        Ok(self
            .lock()
            .iter()
            .filter(|(_, stored)| include_hidden || !stored.hidden)
            .filter(|(username, _)| needle.is_empty() || username.to_lowercase().contains(&needle))
            .map(|(username, _)| Account::new(username.clone()))
            .collect())
    }

    async fn delete_accounts(&self, usernames: &[String]) -> Result<(), StoreError> {
        let mut accounts = self.lock();

        if usernames.is_empty() {
            accounts.clear();
            return Ok(());
        }

        if let Some(missing) = usernames.iter().find(|u| !accounts.contains_key(*u)) {
            return Err(StoreError::NotFound(missing.clone()));
        }

        for username in usernames {
            accounts.remove(username);
        }
        Ok(())
    }
}
