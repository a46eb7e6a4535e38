use super::AuthState;
use crate::GIT_COMMIT_HASH;
use axum::{
    body::Body,
    extract::Extension,
    http::{HeaderMap, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Json},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, error};
use utoipa::ToSchema;

#[derive(ToSchema, Serialize, Deserialize, Debug)]
pub struct Health {
    commit: String,
    name: String,
    version: String,
    database: String,
}

#[utoipa::path(
    get,
    path= "/health",
    responses (
        (status = 200, description = "User store is reachable", body = Health),
        (status = 503, description = "User store is unreachable", body = Health)
    ),
    tag= "health"
)]
// axum handler for health
pub async fn health(method: Method, Extension(state): Extension<Arc<AuthState>>) -> impl IntoResponse {
    let result = state.store().ping().await.map_err(|err| {
        error!("Failed to ping {} store: {}", state.store().backend(), err);
    });

    let health = Health {
        commit: GIT_COMMIT_HASH.to_string(),
        name: env!("CARGO_PKG_NAME").to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: if result.is_ok() {
            "ok".to_string()
        } else {
            "error".to_string()
        },
    };

    let body = if method == Method::GET {
        Json(&health).into_response()
    } else {
        Body::empty().into_response()
    };

    let short_hash = if health.commit.len() > 7 {
        &health.commit[0..7]
    } else {
        ""
    };

    let headers = format!("{}:{}:{}", health.name, health.version, short_hash)
        .parse::<HeaderValue>()
        .map(|x_app| {
            let mut headers = HeaderMap::new();
            headers.insert("X-App", x_app);
            headers
        })
        .unwrap_or_else(|err| {
            error!("Failed to parse X-App header: {}", err);
            HeaderMap::new()
        });

    if result.is_ok() {
        debug!("User store is healthy");
        (StatusCode::OK, headers, body)
    } else {
        debug!("User store is unhealthy");
        (StatusCode::SERVICE_UNAVAILABLE, headers, body)
    }
}
