//! bcrypt helpers. Hashing is CPU bound, so it runs on the blocking pool.

use bcrypt::{DEFAULT_COST, hash, verify};

use super::errors::UserError;

pub async fn hash_password(plain: String) -> Result<String, UserError> {
    tokio::task::spawn_blocking(move || hash(plain, DEFAULT_COST))
        .await
        .map_err(|_| UserError::PasswordHashing)?
        .map_err(|_| UserError::PasswordHashing)
}

/// Returns `false` for a mismatch and for a malformed stored hash.
pub async fn verify_password(plain: String, hashed: String) -> bool {
    tokio::task::spawn_blocking(move || verify(plain, &hashed).unwrap_or(false))
        .await
        .unwrap_or(false)
}
