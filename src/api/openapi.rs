#![allow(clippy::needless_for_each)]

use super::handlers::{
    error, health, principal::AUTH_TOKEN_HEADER, protected, user_login, user_register,
};
use utoipa::{
    openapi::security::{ApiKey, ApiKeyValue, SecurityScheme},
    Modify, OpenApi,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health,
        user_register::register,
        user_login::login,
        protected::protected
    ),
    components(
        schemas(
            health::Health,
            super::handlers::Credentials,
            user_register::TokenResponse,
            user_login::LoginResponse,
            user_login::UserSummary,
            protected::ProtectedResponse,
            error::ErrorResponse,
            error::ErrorMessage
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Registration, login and token-guarded routes"),
        (name = "health", description = "Service and user store status"),
    )
)]
struct ApiDoc;

/// Registers the `x-auth-token` header scheme referenced by guarded routes.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                AUTH_TOKEN_HEADER,
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new(AUTH_TOKEN_HEADER))),
            );
        }
    }
}

#[must_use]
pub fn openapi() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}
