//! User record persistence.
//!
//! Handlers only talk to the [`UserStore`] trait. Two backends exist:
//! [`PgUserStore`] for Postgres and [`MemoryUserStore`] for local runs and
//! tests. Both enforce email uniqueness themselves, so a concurrent
//! registration for the same address surfaces as [`StoreError::Duplicate`]
//! instead of creating a second record.

mod memory;
mod postgres;

pub use memory::MemoryUserStore;
pub use postgres::PgUserStore;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

/// Persisted account. `password` always holds a bcrypt hash.
#[derive(Clone)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    pub password: String,
    pub avatar: String,
    pub created_at: DateTime<Utc>,
}

impl std::fmt::Debug for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("User")
            .field("id", &self.id)
            .field("email", &self.email)
            .field("password", &"***")
            .field("avatar", &self.avatar)
            .field("created_at", &self.created_at)
            .finish()
    }
}

/// Fields supplied by the registration flow; the store assigns `id` and `created_at`.
#[derive(Clone)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
    pub avatar: String,
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("a user with this email already exists")]
    Duplicate,
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[async_trait]
pub trait UserStore: Send + Sync {
    /// Find a user by email, compared case-insensitively.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError>;

    /// Insert a user, failing with [`StoreError::Duplicate`] if the email is taken.
    async fn create(&self, user: NewUser) -> Result<User, StoreError>;

    /// Check the backend is reachable (used by `/health`).
    async fn ping(&self) -> Result<(), StoreError>;

    /// Short backend name reported in logs.
    fn backend(&self) -> &'static str;
}
