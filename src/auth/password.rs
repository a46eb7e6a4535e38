//! bcrypt hashing, run on the blocking pool so request tasks keep moving.

use anyhow::{Context, Result};

/// Hash `plain` with a freshly generated salt at the given cost.
///
/// # Errors
/// Returns an error if the cost is out of range or the blocking task fails.
pub async fn hash_password(plain: String, cost: u32) -> Result<String> {
    tokio::task::spawn_blocking(move || bcrypt::hash(plain, cost))
        .await
        .context("password hashing task failed")?
        .context("failed to hash password")
}

/// Compare `plain` against a stored bcrypt hash.
///
/// # Errors
/// Returns an error if the stored hash is malformed or the blocking task fails.
pub async fn verify_password(plain: String, hash: String) -> Result<bool> {
    tokio::task::spawn_blocking(move || bcrypt::verify(plain, &hash))
        .await
        .context("password verification task failed")?
        .context("failed to verify password")
}
