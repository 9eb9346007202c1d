//! # acctcore
//!
//! Core library for managing the local accounts that grant access to the
//! web interface.
//!
//! This library holds everything between the command line and the
//! credential store:
//!
//! - Account types and operation requests
//! - Input validation (usernames, password strength)
//! - Secret capture from the terminal
//! - The confirmation gate guarding bulk deletion
//! - Account operations over any [`CredentialStore`]
//!
//! ## Example
//!
//! ```rust,no_run
//! use acctcore::{AccountService, AddRequest, MemoryStore, SecretString};
//!
//! # async fn example() -> Result<(), acctcore::AccountError> {
//! let service = AccountService::new(MemoryStore::new());
//! service
//!     .add(&AddRequest::new("alice", SecretString::from("longenough1".to_string())))
//!     .await?;
//! # Ok(())
//! # }
//! ```

pub mod account;
pub mod confirm;
pub mod error;
pub mod password;
pub mod prompt;
pub mod service;
pub mod store;
pub mod validate;

// Re-export commonly used types
pub use account::{Account, AddRequest, DeleteRequest, SearchRequest};
pub use confirm::{ConfirmationGate, Decision, GateState};
pub use error::{AccountError, Result, StoreError};
pub use prompt::{SecretPrompt, TerminalPrompt};
pub use secrecy::{ExposeSecret, SecretString};
pub use service::{AccountService, DeleteOutcome};
pub use store::{CredentialStore, MemoryStore};
