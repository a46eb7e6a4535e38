use super::Principal;
use crate::auth::TokenUser;
use axum::{extract::Extension, Json};
use serde::Serialize;
use tracing::instrument;
use utoipa::ToSchema;

#[derive(ToSchema, Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ProtectedResponse {
    msg: String,
    user: TokenUser,
    token: String,
    expires_in: u64,
    expires_at: u64,
}

#[utoipa::path(
    get,
    path= "/auth/protected",
    responses (
        (status = 200, description = "Caller presented a valid token", body = ProtectedResponse, content_type = "application/json"),
        (status = 401, description = "Token missing, expired or invalid"),
    ),
    security(("x-auth-token" = [])),
    tag= "auth"
)]
// echoes what `require_token` resolved
#[instrument(skip_all, fields(user_id = %principal.user_id))]
pub async fn protected(Extension(principal): Extension<Principal>) -> Json<ProtectedResponse> {
    Json(ProtectedResponse {
        msg: format!("This is a protected route userId: {}", principal.user_id),
        user: principal.user,
        token: principal.token,
        expires_in: principal.expires_in,
        expires_at: principal.expires_at,
    })
}
