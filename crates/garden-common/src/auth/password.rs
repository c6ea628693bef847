//! Password hashing and credential scrambling
//!
//! Uses Argon2id for password hashing (OWASP recommended). The scrambling
//! path backs account anonymization: the stored hash is replaced with the
//! hash of a random secret nobody knows, leaving the credential unusable.

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use uuid::Uuid;

use crate::error::AppError;

/// Hash a password using Argon2id
///
/// # Errors
/// Returns an error if hashing fails
pub fn hash_password(password: &str) -> Result<String, AppError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Password hashing failed: {e}")))
}

/// Verify a password against a hash
///
/// # Errors
/// Returns an error if the hash is invalid
pub fn verify_password(password: &str, hash: &str) -> Result<bool, AppError> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| AppError::Internal(anyhow::anyhow!("Invalid password hash format: {e}")))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}

/// Generate a random secret that is immediately discarded by callers
///
/// Hashing this secret yields a credential no login attempt can satisfy.
#[must_use]
pub fn generate_unusable_secret() -> String {
    Uuid::new_v4().to_string()
}

/// Password service for dependency injection
#[derive(Debug, Clone, Default)]
pub struct PasswordService;

impl PasswordService {
    /// Create a new password service
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Hash a password
    ///
    /// # Errors
    /// Returns an error if hashing fails
    pub fn hash(&self, password: &str) -> Result<String, AppError> {
        hash_password(password)
    }

    /// Verify a password against a hash
    ///
    /// # Errors
    /// Returns an error if verification fails
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, AppError> {
        verify_password(password, hash)
    }

    /// Produce an unusable hash for credential scrambling
    ///
    /// # Errors
    /// Returns an error if hashing fails
    pub fn scrambled_hash(&self) -> Result<String, AppError> {
        hash_password(&generate_unusable_secret())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_password() {
        let password = "SecurePassword123!";
        let hash = hash_password(password).unwrap();

        // Hash should start with argon2 identifier
        assert!(hash.starts_with("$argon2"));
        // Hash should be different each time (different salt)
        let hash2 = hash_password(password).unwrap();
        assert_ne!(hash, hash2);
    }

    #[test]
    fn test_verify_password_success() {
        let password = "SecurePassword123!";
        let hash = hash_password(password).unwrap();

        assert!(verify_password(password, &hash).unwrap());
    }

    #[test]
    fn test_verify_password_failure() {
        let hash = hash_password("SecurePassword123!").unwrap();

        assert!(!verify_password("WrongPassword123!", &hash).unwrap());
    }

    #[test]
    fn test_unusable_secrets_are_unique() {
        assert_ne!(generate_unusable_secret(), generate_unusable_secret());
    }

    #[test]
    fn test_scrambled_hash_rejects_everything_we_can_try() {
        let service = PasswordService::new();
        let hash = service.scrambled_hash().unwrap();

        assert!(hash.starts_with("$argon2"));
        assert!(!service.verify("password", &hash).unwrap());
        assert!(!service.verify("", &hash).unwrap());
    }
}
