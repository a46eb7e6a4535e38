use crate::{auth::AuthConfig, store::UserStore};
use std::sync::Arc;

/// Everything a handler needs, shared through an `Extension`.
#[derive(Clone)]
pub struct AuthState {
    config: AuthConfig,
    store: Arc<dyn UserStore>,
}

impl AuthState {
    #[must_use]
    pub fn new(config: AuthConfig, store: Arc<dyn UserStore>) -> Self {
        Self { config, store }
    }

    #[must_use]
    pub fn config(&self) -> &AuthConfig {
        &self.config
    }

    #[must_use]
    pub fn store(&self) -> &dyn UserStore {
        self.store.as_ref()
    }
}

impl std::fmt::Debug for AuthState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthState")
            .field("config", &self.config)
            .field("store", &self.store.backend())
            .finish()
    }
}
