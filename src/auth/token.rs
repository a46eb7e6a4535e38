//! Session token signing and verification (`HS256` JWT).

use super::config::AuthConfig;
use jsonwebtoken::{
    decode, encode, errors::Error as JwtError, Algorithm, DecodingKey, EncodingKey, Header,
    Validation,
};
use serde::{Deserialize, Serialize};
use std::time::SystemTime;
use ulid::Ulid;
use utoipa::ToSchema;
use uuid::Uuid;

/// Identity embedded in the token, `{ "id": ... }`.
#[derive(ToSchema, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct TokenUser {
    pub id: Uuid,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Claims {
    pub user: TokenUser,
    pub iat: u64,
    pub exp: u64,
    /// Unique per token so two logins in the same second never share a value.
    pub jti: String,
}

pub(crate) fn now_unix_seconds() -> u64 {
    SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Sign a token for `user_id` that expires after the configured lifetime.
///
/// # Errors
/// Returns an error if the claims cannot be encoded or signed.
pub fn sign(user_id: Uuid, config: &AuthConfig) -> Result<String, JwtError> {
    sign_at(user_id, config, now_unix_seconds())
}

/// Same as [`sign`] with an explicit issue time.
///
/// # Errors
/// Returns an error if the claims cannot be encoded or signed.
pub fn sign_at(user_id: Uuid, config: &AuthConfig, issued_at: u64) -> Result<String, JwtError> {
    let claims = Claims {
        user: TokenUser { id: user_id },
        iat: issued_at,
        exp: issued_at.saturating_add(config.jwt_expiration_seconds()),
        jti: Ulid::new().to_string(),
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(config.jwt_secret()),
    )
}

/// Check signature and expiry and return the claims.
///
/// # Errors
/// Returns an error if the token is malformed, tampered with, signed with
/// another secret, or expired.
pub fn verify(token: &str, config: &AuthConfig) -> Result<Claims, JwtError> {
    let validation = Validation::new(Algorithm::HS256);
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.jwt_secret()),
        &validation,
    )?;

    Ok(data.claims)
}
