//! Password hashing and verification.

use crate::errors::{ServiceError, ServiceResult};
use bcrypt::{hash, verify};

/// Bcrypt-backed password hashing with a configurable work factor.
///
/// The cost is supplied at construction (from `Config`) and stays fixed for
/// the lifetime of the instance.
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Hashes a plaintext password for storage.
    ///
    /// Bcrypt salts internally, so hashing the same plaintext twice
    /// produces different strings.
    ///
    /// # Errors
    /// Returns `ServiceError::InternalError` if hashing fails
    pub fn hash(&self, password: &str) -> ServiceResult<String> {
        hash(password, self.cost)
            .map_err(|e| ServiceError::internal_error(format!("Password hashing failed: {}", e)))
    }

    /// Verifies a plaintext password against a stored hash.
    ///
    /// The stored value is untrusted at this boundary: a malformed hash
    /// counts as a mismatch rather than an error.
    pub fn verify(&self, password: &str, hashed: &str) -> bool {
        verify(password, hashed).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // bcrypt's minimum cost, keeps the tests fast
    fn hasher() -> PasswordHasher {
        PasswordHasher::new(4)
    }

    #[test]
    fn test_hash_and_verify_roundtrip() {
        let hasher = hasher();
        let hashed = hasher.hash("123456").unwrap();
        assert!(hasher.verify("123456", &hashed));
    }

    #[test]
    fn test_wrong_password_fails_verification() {
        let hasher = hasher();
        let hashed = hasher.hash("123456").unwrap();
        assert!(!hasher.verify("654321", &hashed));
    }

    #[test]
    fn test_same_plaintext_hashes_differently() {
        let hasher = hasher();
        let first = hasher.hash("123456").unwrap();
        let second = hasher.hash("123456").unwrap();
        assert_ne!(first, second);
    }

    #[test]
    fn test_malformed_hash_is_a_mismatch_not_an_error() {
        let hasher = hasher();
        assert!(!hasher.verify("123456", "not-a-bcrypt-hash"));
        assert!(!hasher.verify("123456", ""));
    }

    #[test]
    fn test_empty_plaintext_roundtrip() {
        let hasher = hasher();
        let hashed = hasher.hash("").unwrap();
        assert!(hasher.verify("", &hashed));
        assert!(!hasher.verify("x", &hashed));
    }
}
