use super::{
    error::ErrorResponse, require_fields, validate_registration, AuthError, AuthState, Credentials,
};
use crate::{
    auth::{avatar_url, get_user_by_email, password::hash_password, token},
    store::NewUser,
};
use axum::{extract::Extension, Json};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info, instrument};
use utoipa::ToSchema;

/// Token returned after a successful registration.
#[derive(ToSchema, Serialize, Debug)]
pub struct TokenResponse {
    pub token: String,
    /// Token lifetime in seconds.
    #[serde(rename = "expiresIn")]
    pub expires_in: u64,
}

#[utoipa::path(
    post,
    path= "/auth/user",
    request_body = Credentials,
    responses (
        (status = 200, description = "Account created, session token issued", body = TokenResponse, content_type = "application/json"),
        (status = 400, description = "Missing or invalid fields, or the email is already registered", body = ErrorResponse),
        (status = 500, description = "Server error", body = String, content_type = "text/plain"),
    ),
    tag= "auth"
)]
// axum handler for registration
#[instrument(skip_all)]
pub async fn register(
    Extension(state): Extension<Arc<AuthState>>,
    payload: Option<Json<Credentials>>,
) -> Result<Json<TokenResponse>, AuthError> {
    let submitted = require_fields(payload)?;
    validate_registration(&submitted)?;

    let lookup = get_user_by_email(state.store(), &submitted.email).await?;
    if lookup.is_valid_user {
        debug!("Registration rejected, email already registered");
        return Err(AuthError::DuplicateUser(lookup.message));
    }

    let config = state.config();
    let avatar = avatar_url(&submitted.email, config.avatar());
    let password_hash = hash_password(submitted.password, config.bcrypt_cost()).await?;

    // the store enforces uniqueness too, a concurrent insert surfaces as Duplicate
    let user = state
        .store()
        .create(NewUser {
            email: submitted.email,
            password_hash,
            avatar,
        })
        .await?;

    let token = token::sign(user.id, config)?;

    info!(user_id = %user.id, "User registered");

    Ok(Json(TokenResponse {
        token,
        expires_in: config.jwt_expiration_seconds(),
    }))
}
