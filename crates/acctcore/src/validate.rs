//! Input validation for account creation

use crate::error::{AccountError, Result};

/// Minimum password length, in bytes as captured
pub const MIN_PASSWORD_LEN: usize = 8;

/// Reject an empty username
pub fn validate_username(username: &str) -> Result<()> {
    if username.is_empty() {
        return Err(AccountError::InvalidUsername);
    }
    Ok(())
}

/// Validate a new account before it reaches the store
///
/// The username is checked first, so a request failing both rules reports
/// `InvalidUsername`.
pub fn validate_add(username: &str, password: &str) -> Result<()> {
    validate_username(username)?;

    if password.len() < MIN_PASSWORD_LEN {
        return Err(AccountError::WeakPassword);
    }

    Ok(())
}
