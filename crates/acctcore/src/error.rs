//! Error types

use thiserror::Error;

use crate::validate::MIN_PASSWORD_LEN;

/// Errors reported by a credential store
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Account '{0}' already exists")]
    AlreadyExists(String),

    #[error("Account '{0}' not found")]
    NotFound(String),

    #[error("Failed to hash password: {0}")]
    Hash(String),

    #[error(transparent)]
    Backend(Box<dyn std::error::Error + Send + Sync>),
}

impl StoreError {
    /// Wrap a backend-specific error (database, I/O) without altering its message
    pub fn backend(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        StoreError::Backend(Box::new(err))
    }
}

/// Account command errors
#[derive(Error, Debug)]
pub enum AccountError {
    #[error("Username must not be empty")]
    InvalidUsername,

    #[error("Password must be at least {} characters", MIN_PASSWORD_LEN)]
    WeakPassword,

    /// Store failures pass through with the store's own message
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Failed to read from terminal")]
    Prompt(#[source] std::io::Error),

    #[error("Failed to write output")]
    Output(#[source] std::io::Error),
}

/// Result type for account operations
pub type Result<T> = std::result::Result<T, AccountError>;
