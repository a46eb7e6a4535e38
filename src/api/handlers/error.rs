//! Handler error type and its HTTP mapping.
//!
//! Client mistakes become `400 {"errors":[{"msg":...}]}`. Everything else is
//! logged and answered with a bare `500 Server error` so internals never reach
//! the caller.

use crate::auth::lookup::{INVALID_CREDENTIALS_MESSAGE, USER_EXISTS_MESSAGE};
use crate::store::StoreError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;
use utoipa::ToSchema;

pub const SERVER_ERROR_MESSAGE: &str = "Server error";

#[derive(Debug, Error)]
pub enum AuthError {
    #[error("invalid input: {}", .0.join(", "))]
    InvalidInput(Vec<String>),

    #[error("{0}")]
    DuplicateUser(String),

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("failed to sign token: {0}")]
    TokenSigning(#[from] jsonwebtoken::errors::Error),

    #[error(transparent)]
    Unexpected(#[from] anyhow::Error),
}

#[derive(ToSchema, Serialize, Debug)]
pub struct ErrorMessage {
    pub msg: String,
}

#[derive(ToSchema, Serialize, Debug)]
pub struct ErrorResponse {
    pub errors: Vec<ErrorMessage>,
}

impl AuthError {
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidInput(_) | Self::DuplicateUser(_) | Self::InvalidCredentials => {
                StatusCode::BAD_REQUEST
            }
            Self::TokenSigning(_) | Self::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Messages returned to the caller; empty for server-side failures.
    fn client_messages(self) -> Vec<String> {
        match self {
            Self::InvalidInput(errors) => errors,
            Self::DuplicateUser(message) => vec![message],
            Self::InvalidCredentials => vec![INVALID_CREDENTIALS_MESSAGE.to_string()],
            Self::TokenSigning(_) | Self::Unexpected(_) => Vec::new(),
        }
    }
}

impl From<StoreError> for AuthError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Duplicate => Self::DuplicateUser(USER_EXISTS_MESSAGE.to_string()),
            other => Self::Unexpected(anyhow::Error::new(other)),
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            error!("{:#}", self);
            return (status, SERVER_ERROR_MESSAGE).into_response();
        }

        let body = ErrorResponse {
            errors: self
                .client_messages()
                .into_iter()
                .map(|msg| ErrorMessage { msg })
                .collect(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use axum::body::to_bytes;

    async fn body_string(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap_or_default();
        String::from_utf8_lossy(&bytes).to_string()
    }

    #[test]
    fn status_codes() {
        assert_eq!(
            AuthError::InvalidInput(vec![]).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AuthError::DuplicateUser("dup".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AuthError::InvalidCredentials.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AuthError::TokenSigning(jsonwebtoken::errors::ErrorKind::InvalidKeyFormat.into())
                .status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AuthError::Unexpected(anyhow!("boom")).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn store_duplicate_maps_to_duplicate_user() {
        let err: AuthError = StoreError::Duplicate.into();
        assert!(matches!(err, AuthError::DuplicateUser(ref msg) if msg == USER_EXISTS_MESSAGE));

        let err: AuthError = StoreError::Database(sqlx::Error::RowNotFound).into();
        assert!(matches!(err, AuthError::Unexpected(_)));
    }

    #[tokio::test]
    async fn client_errors_render_json_list() {
        let response = AuthError::InvalidInput(vec!["a".to_string(), "b".to_string()])
            .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_string(response).await,
            r#"{"errors":[{"msg":"a"},{"msg":"b"}]}"#
        );
    }

    #[tokio::test]
    async fn server_errors_hide_details() {
        let response = AuthError::Unexpected(anyhow!("connection refused to 10.0.0.1")).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_string(response).await, SERVER_ERROR_MESSAGE);
    }

    #[tokio::test]
    async fn token_signing_failure_is_plain_server_error() {
        let err = AuthError::TokenSigning(jsonwebtoken::errors::ErrorKind::InvalidKeyFormat.into());
        let details = err.to_string();
        let response = err.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let content_type = response
            .headers()
            .get(axum::http::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(ToString::to_string);
        assert!(content_type.is_some_and(|value| value.starts_with("text/plain")));

        let body = body_string(response).await;
        assert_eq!(body, SERVER_ERROR_MESSAGE);
        assert!(!body.contains(&details));
    }
}
