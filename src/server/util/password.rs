//! Password hashing with Argon2id.

use argon2::{
    password_hash::{
        rand_core::OsRng, PasswordHash, PasswordHasher as Argon2Hasher, PasswordVerifier,
        SaltString,
    },
    Argon2,
};

use crate::server::error::AppError;

pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Hashes and verifies account passwords as PHC strings.
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    min_password_length: usize,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self {
            min_password_length: MIN_PASSWORD_LENGTH,
        }
    }
}

impl PasswordHasher {
    /// Hashes a password with a random salt.
    ///
    /// # Returns
    /// - `Ok(String)` - PHC string, e.g. `$argon2id$v=19$...`
    /// - `Err(AppError::Validation)` - Password shorter than the minimum length
    /// - `Err(AppError::InternalError)` - Hashing failed
    pub fn hash(&self, password: &str) -> Result<String, AppError> {
        if password.chars().count() < self.min_password_length {
            return Err(AppError::Validation(format!(
                "Password must be at least {} characters",
                self.min_password_length
            )));
        }

        let salt = SaltString::generate(&mut OsRng);

        let hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::InternalError(format!("Failed to hash password: {}", e)))?;

        Ok(hash.to_string())
    }

    /// Verifies a password against a stored PHC string.
    ///
    /// A stored value that is not a valid PHC string never matches.
    pub fn verify(&self, password: &str, hash: &str) -> Result<bool, AppError> {
        let Ok(parsed_hash) = PasswordHash::new(hash) else {
            tracing::warn!("Stored password hash is not a valid PHC string");
            return Ok(false);
        };

        match Argon2::default().verify_password(password.as_bytes(), &parsed_hash) {
            Ok(()) => Ok(true),
            Err(argon2::password_hash::Error::Password) => Ok(false),
            Err(e) => Err(AppError::InternalError(format!(
                "Password verification failed: {}",
                e
            ))),
        }
    }
}
