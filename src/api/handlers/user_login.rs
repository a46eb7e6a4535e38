use super::{
    error::ErrorResponse, require_fields, validate_login, AuthError, AuthState, Credentials,
};
use crate::auth::{get_user_by_email, password::verify_password, token};
use axum::{extract::Extension, Json};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info, instrument};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(ToSchema, Serialize, Debug)]
pub struct UserSummary {
    pub id: Uuid,
    pub email: String,
}

#[derive(ToSchema, Serialize, Debug)]
pub struct LoginResponse {
    pub token: String,
    #[serde(rename = "expiresIn")]
    pub expires_in: u64,
    pub user: UserSummary,
}

#[utoipa::path(
    post,
    path= "/auth/login",
    request_body = Credentials,
    responses (
        (status = 200, description = "Credentials accepted, session token issued", body = LoginResponse, content_type = "application/json"),
        (status = 400, description = "Missing fields, malformed email or invalid credentials", body = ErrorResponse),
        (status = 500, description = "Server error", body = String, content_type = "text/plain"),
    ),
    tag= "auth"
)]
// axum handler for login
#[instrument(skip_all)]
pub async fn login(
    Extension(state): Extension<Arc<AuthState>>,
    payload: Option<Json<Credentials>>,
) -> Result<Json<LoginResponse>, AuthError> {
    let submitted = require_fields(payload)?;
    validate_login(&submitted)?;

    let lookup = get_user_by_email(state.store(), &submitted.email).await?;
    let Some(user) = lookup.user.filter(|_| lookup.is_valid_user) else {
        debug!("Login rejected, unknown email");
        return Err(AuthError::InvalidCredentials);
    };

    if !verify_password(submitted.password, user.password.clone()).await? {
        debug!(user_id = %user.id, "Login rejected, password mismatch");
        return Err(AuthError::InvalidCredentials);
    }

    let config = state.config();
    let token = token::sign(user.id, config)?;

    info!(user_id = %user.id, "User logged in");

    Ok(Json(LoginResponse {
        token,
        expires_in: config.jwt_expiration_seconds(),
        user: UserSummary {
            id: user.id,
            email: user.email,
        },
    }))
}
