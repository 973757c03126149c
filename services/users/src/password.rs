//! Password hashing

use argon2::{Argon2, PasswordHasher, password_hash::SaltString};

use crate::error::{UserError, UserResult};

/// Hash a plaintext password into a salted PHC string
///
/// Argon2id with the library defaults (19 MiB, 2 iterations). Each call draws
/// a fresh salt, so hashing the same plaintext twice yields different output.
pub fn hash_password(password: &str) -> UserResult<String> {
    let salt = SaltString::generate(&mut rand::thread_rng());
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| UserError::PasswordHash(e.to_string()))
}

/// Hash on the blocking thread pool to keep the async workers free
pub async fn hash_password_blocking(password: String) -> UserResult<String> {
    tokio::task::spawn_blocking(move || hash_password(&password))
        .await
        .map_err(|e| UserError::Internal(format!("Password hashing task failed: {}", e)))?
}
