//! Account operations: add, search and delete against a credential store

use std::io::{BufRead, Write};

use secrecy::ExposeSecret;

use crate::account::{AddRequest, DeleteRequest, SearchRequest};
use crate::confirm::{ConfirmationGate, DELETE_ALL_QUESTION, Decision};
use crate::error::{AccountError, Result};
use crate::store::CredentialStore;
use crate::validate::validate_add;

/// What a delete request ended up doing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// The named accounts were removed
    Deleted(usize),
    /// Every account was removed
    DeletedAll,
    /// The operator declined the confirmation; the store was not called
    Aborted,
}

/// Runs account commands against a store handed in at construction
pub struct AccountService<S> {
    store: S,
}

impl<S: CredentialStore> AccountService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Validate and create one account
    pub async fn add(&self, request: &AddRequest) -> Result<()> {
        validate_add(&request.username, request.password.expose_secret())?;

        self.store
            .create_account(&request.username, request.password.expose_secret())
            .await?;

        tracing::debug!(username = %request.username, "account created");
        Ok(())
    }

    /// Write `- <username>` for every visible account matching the keyword
    ///
    /// Lines follow the store's order. Nothing is written when the query
    /// fails. Returns the number of lines written.
    pub async fn search<W: Write>(&self, request: &SearchRequest, out: &mut W) -> Result<usize> {
        let accounts = self.store.get_accounts(&request.keyword, false).await?;

        for account in &accounts {
            writeln!(out, "- {}", account.username).map_err(AccountError::Output)?;
        }

        tracing::debug!(keyword = %request.keyword, count = accounts.len(), "accounts listed");
        Ok(accounts.len())
    }

    /// Delete the named accounts, or all accounts once the gate approves
    pub async fn delete<R, G, W>(
        &self,
        request: &DeleteRequest,
        gate: &mut ConfirmationGate<R, G>,
        out: &mut W,
    ) -> Result<DeleteOutcome>
    where
        R: BufRead,
        G: Write,
        W: Write,
    {
        if request.needs_confirmation() {
            let decision = gate
                .resolve(DELETE_ALL_QUESTION)
                .map_err(AccountError::Prompt)?;

            if decision == Decision::Abort {
                writeln!(out, "No accounts deleted").map_err(AccountError::Output)?;
                tracing::debug!("delete-all declined");
                return Ok(DeleteOutcome::Aborted);
            }
        }

        let usernames: Vec<String> = request.usernames.iter().cloned().collect();
        self.store.delete_accounts(&usernames).await?;

        let outcome = if usernames.is_empty() {
            tracing::info!("all accounts deleted");
            DeleteOutcome::DeletedAll
        } else {
            tracing::info!(count = usernames.len(), "accounts deleted");
            DeleteOutcome::Deleted(usernames.len())
        };

        let message = match outcome {
            DeleteOutcome::Deleted(1) => "Account has been deleted",
            _ => "Accounts have been deleted",
        };
        writeln!(out, "{}", message).map_err(AccountError::Output)?;

        Ok(outcome)
    }
}
