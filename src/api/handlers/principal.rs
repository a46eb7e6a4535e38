//! Token-verification middleware.
//!
//! Flow Overview: pull the token from `x-auth-token` (or a Bearer
//! `Authorization` header), verify signature and expiry, and attach a
//! [`Principal`] to the request for downstream handlers. Requests without a
//! usable token stop here with `401`.

use super::AuthState;
use crate::auth::{token, TokenUser};
use axum::{
    extract::{Extension, Request},
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

pub const AUTH_TOKEN_HEADER: &str = "x-auth-token";
pub const NO_TOKEN_MESSAGE: &str = "No token, authorization denied";
pub const INVALID_TOKEN_MESSAGE: &str = "Token is not valid";

/// Authenticated caller derived from a verified token.
#[derive(Clone, Debug)]
pub struct Principal {
    pub user_id: Uuid,
    pub user: TokenUser,
    pub token: String,
    /// Token lifetime in seconds (`exp - iat`).
    pub expires_in: u64,
    /// Expiry as a unix timestamp in seconds.
    pub expires_at: u64,
}

fn extract_token(headers: &HeaderMap) -> Option<String> {
    let from_header = headers
        .get(AUTH_TOKEN_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty());
    if from_header.is_some() {
        return from_header.map(str::to_string);
    }
    headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

fn unauthorized(message: &str) -> Response {
    (StatusCode::UNAUTHORIZED, Json(json!({ "msg": message }))).into_response()
}

pub async fn require_token(
    Extension(state): Extension<Arc<AuthState>>,
    mut request: Request,
    next: Next,
) -> Response {
    let Some(raw) = extract_token(request.headers()) else {
        return unauthorized(NO_TOKEN_MESSAGE);
    };

    let claims = match token::verify(&raw, state.config()) {
        Ok(claims) => claims,
        Err(err) => {
            debug!("Token rejected: {err}");
            return unauthorized(INVALID_TOKEN_MESSAGE);
        }
    };

    request.extensions_mut().insert(Principal {
        user_id: claims.user.id,
        expires_in: claims.exp.saturating_sub(claims.iat),
        expires_at: claims.exp,
        user: claims.user,
        token: raw,
    });

    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn extract_token_prefers_custom_header() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTH_TOKEN_HEADER, HeaderValue::from_static("abc"));
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer xyz"));
        assert_eq!(extract_token(&headers), Some("abc".to_string()));
    }

    #[test]
    fn extract_token_falls_back_to_bearer() {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Bearer xyz"));
        assert_eq!(extract_token(&headers), Some("xyz".to_string()));
    }

    #[test]
    fn extract_token_none_when_missing_or_blank() {
        let mut headers = HeaderMap::new();
        assert_eq!(extract_token(&headers), None);

        headers.insert(AUTH_TOKEN_HEADER, HeaderValue::from_static("  "));
        headers.insert(AUTHORIZATION, HeaderValue::from_static("Basic Zm9vOmJhcg=="));
        assert_eq!(extract_token(&headers), None);
    }
}
