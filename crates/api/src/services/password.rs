//! Password hashing service.
//!
//! Plaintext passwords are hashed with Argon2 before they ever reach the
//! repository layer. There is no login endpoint, so verification lives
//! only in the tests.

use argon2::{
    Argon2,
    password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
};
use thiserror::Error;

use orderdesk_core::PasswordHash;

/// Errors that can occur while hashing a password.
#[derive(Debug, Error)]
pub enum PasswordError {
    /// The hash computation itself failed.
    #[error("failed to hash password: {0}")]
    Hash(argon2::password_hash::Error),
}

/// Hash a plaintext password with Argon2 and a fresh random salt.
///
/// # Errors
///
/// Returns `PasswordError::Hash` if the hash cannot be computed.
pub fn hash_password(password: &str) -> Result<PasswordHash, PasswordError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(PasswordError::Hash)?;

    Ok(PasswordHash::new(hash.to_string()))
}
