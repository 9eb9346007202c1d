//! Account records and operation requests

use std::collections::BTreeSet;

use secrecy::SecretString;

/// Account as listed by a credential store
///
/// Stores keep the password hash to themselves; only the username is
/// projected back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub username: String,
}

impl Account {
    pub fn new(username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
        }
    }
}

/// Create a new account
#[derive(Debug)]
pub struct AddRequest {
    pub username: String,
    pub password: SecretString,
}

impl AddRequest {
    pub fn new(username: impl Into<String>, password: SecretString) -> Self {
        Self {
            username: username.into(),
            password,
        }
    }
}

/// List accounts whose username matches `keyword` (empty matches all)
#[derive(Debug, Clone, Default)]
pub struct SearchRequest {
    pub keyword: String,
}

impl SearchRequest {
    pub fn new(keyword: impl Into<String>) -> Self {
        Self {
            keyword: keyword.into(),
        }
    }
}

/// Delete the named accounts, or every account when `usernames` is empty
#[derive(Debug, Clone, Default)]
pub struct DeleteRequest {
    pub usernames: BTreeSet<String>,
    /// Skip the confirmation prompt for delete-all
    pub assume_yes: bool,
}

impl DeleteRequest {
    pub fn new<I, S>(usernames: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            usernames: usernames.into_iter().map(Into::into).collect(),
            assume_yes: false,
        }
    }

    /// Request deletion of every account
    pub fn all() -> Self {
        Self::default()
    }

    pub fn assume_yes(mut self, assume_yes: bool) -> Self {
        self.assume_yes = assume_yes;
        self
    }

    pub fn is_delete_all(&self) -> bool {
        self.usernames.is_empty()
    }

    /// Whether the confirmation gate has to approve this request
    pub fn needs_confirmation(&self) -> bool {
        self.is_delete_all() && !self.assume_yes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_usernames_collapse() {
        let request = DeleteRequest::new(["bob", "alice", "bob"]);
        assert_eq!(request.usernames.len(), 2);
        assert!(!request.is_delete_all());
    }

    #[test]
    fn test_delete_all_needs_confirmation() {
        assert!(DeleteRequest::all().needs_confirmation());
        assert!(!DeleteRequest::all().assume_yes(true).needs_confirmation());
        assert!(!DeleteRequest::new(["bob"]).needs_confirmation());
    }

    #[test]
    fn test_add_request_debug_hides_password() {
        let request = AddRequest::new("alice", SecretString::from("longenough1".to_string()));
        assert!(!format!("{:?}", request).contains("longenough1"));
    }
}
