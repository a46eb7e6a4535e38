use super::avatar::AvatarOptions;
use secrecy::{ExposeSecret, SecretString};

pub const DEFAULT_JWT_EXPIRATION_SECONDS: u64 = 60 * 60;
pub const DEFAULT_BCRYPT_COST: u32 = 10;

/// Settings shared by the registration, login and token-verification paths.
///
/// Built once at startup and handed to handlers through `AuthState`.
#[derive(Clone)]
pub struct AuthConfig {
    jwt_secret: SecretString,
    jwt_expiration_seconds: u64,
    bcrypt_cost: u32,
    avatar: AvatarOptions,
}

impl AuthConfig {
    #[must_use]
    pub fn new(jwt_secret: SecretString) -> Self {
        Self {
            jwt_secret,
            jwt_expiration_seconds: DEFAULT_JWT_EXPIRATION_SECONDS,
            bcrypt_cost: DEFAULT_BCRYPT_COST,
            avatar: AvatarOptions::default(),
        }
    }

    #[must_use]
    pub fn with_jwt_expiration_seconds(mut self, seconds: u64) -> Self {
        self.jwt_expiration_seconds = seconds;
        self
    }

    #[must_use]
    pub fn with_bcrypt_cost(mut self, cost: u32) -> Self {
        self.bcrypt_cost = cost;
        self
    }

    #[must_use]
    pub fn with_avatar_options(mut self, avatar: AvatarOptions) -> Self {
        self.avatar = avatar;
        self
    }

    pub(crate) fn jwt_secret(&self) -> &[u8] {
        self.jwt_secret.expose_secret().as_bytes()
    }

    #[must_use]
    pub fn jwt_expiration_seconds(&self) -> u64 {
        self.jwt_expiration_seconds
    }

    #[must_use]
    pub fn bcrypt_cost(&self) -> u32 {
        self.bcrypt_cost
    }

    #[must_use]
    pub fn avatar(&self) -> &AvatarOptions {
        &self.avatar
    }
}

impl std::fmt::Debug for AuthConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthConfig")
            .field("jwt_secret", &"***")
            .field("jwt_expiration_seconds", &self.jwt_expiration_seconds)
            .field("bcrypt_cost", &self.bcrypt_cost)
            .field("avatar", &self.avatar)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_and_builders() {
        let config = AuthConfig::new(SecretString::from("s3cret".to_string()));
        assert_eq!(config.jwt_expiration_seconds(), DEFAULT_JWT_EXPIRATION_SECONDS);
        assert_eq!(config.bcrypt_cost(), DEFAULT_BCRYPT_COST);
        assert_eq!(config.avatar().size, 200);

        let config = config
            .with_jwt_expiration_seconds(60)
            .with_bcrypt_cost(4);
        assert_eq!(config.jwt_expiration_seconds(), 60);
        assert_eq!(config.bcrypt_cost(), 4);
        assert_eq!(config.jwt_secret(), b"s3cret");
    }

    #[test]
    fn debug_redacts_secret() {
        let config = AuthConfig::new(SecretString::from("s3cret".to_string()));
        let debug = format!("{config:?}");
        assert!(debug.contains("***"));
        assert!(!debug.contains("s3cret"));
    }
}
