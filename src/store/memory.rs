use super::{NewUser, StoreError, User, UserStore};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::{hash_map::Entry, HashMap};
use tokio::sync::RwLock;
use uuid::Uuid;

/// In-process store keyed by lowercased email.
///
/// The uniqueness check and the insert happen under the same write lock.
#[derive(Debug, Default)]
pub struct MemoryUserStore {
    users: RwLock<HashMap<String, User>>,
}

impl MemoryUserStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, StoreError> {
        let users = self.users.read().await;
        Ok(users.get(&email.to_lowercase()).cloned())
    }

    async fn create(&self, user: NewUser) -> Result<User, StoreError> {
        let mut users = self.users.write().await;
        match users.entry(user.email.to_lowercase()) {
            Entry::Occupied(_) => Err(StoreError::Duplicate),
            Entry::Vacant(slot) => {
                let record = User {
                    id: Uuid::new_v4(),
                    email: user.email,
                    password: user.password_hash,
                    avatar: user.avatar,
                    created_at: Utc::now(),
                };
                slot.insert(record.clone());
                Ok(record)
            }
        }
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
