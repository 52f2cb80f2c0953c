use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use crate::error::ChirpyError;

/// Hash a plaintext password using Argon2 with a random salt.
pub fn hash_password(password: &str) -> Result<String, ChirpyError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| ChirpyError::Internal(format!("Failed to hash password: {}", e)))
}

/// Verify a plaintext password against a stored hash. The comparison is
/// the library's constant-time check.
pub fn verify_password(password: &str, hash: &str) -> Result<bool, ChirpyError> {
    let parsed_hash = PasswordHash::new(hash)
        .map_err(|e| ChirpyError::Internal(format!("Invalid password hash: {}", e)))?;

    Ok(Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_ok())
}
