//! Password hashing for credential stores

use argon2::Argon2;
use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{PasswordHasher, SaltString};

use crate::error::StoreError;

/// Hash a plaintext password into a PHC string (Argon2id, random salt)
pub fn hash_password(password: &str) -> Result<String, StoreError> {
    let salt = SaltString::generate(&mut OsRng);
    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| StoreError::Hash(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use argon2::password_hash::{PasswordHash, PasswordVerifier};

    #[test]
    fn test_hash_verifies() {
        let hash = hash_password("longenough1").unwrap();
        let parsed = PasswordHash::new(&hash).unwrap();

        assert!(Argon2::default().verify_password(b"longenough1", &parsed).is_ok());
        assert!(Argon2::default().verify_password(b"wrongpassword", &parsed).is_err());
    }

    #[test]
    fn test_hash_is_salted() {
        let first = hash_password("longenough1").unwrap();
        let second = hash_password("longenough1").unwrap();

        assert_ne!(first, second);
        assert!(!first.contains("longenough1"));
        assert!(first.starts_with("$argon2id$"));
    }
}
