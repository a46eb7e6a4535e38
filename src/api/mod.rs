//! HTTP surface: routes, middleware stack and server lifecycle.

use anyhow::Result;
use axum::{
    body::Body,
    extract::MatchedPath,
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        HeaderName, HeaderValue, Method, Request,
    },
    middleware,
    routing::{get, post},
    Extension, Router,
};
use std::{
    net::{Ipv6Addr, SocketAddr},
    sync::Arc,
};
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::PropagateRequestIdLayer,
    set_header::SetRequestHeaderLayer,
    trace::TraceLayer,
};
use tracing::{error, info, info_span, Span};
use ulid::Ulid;
use utoipa_swagger_ui::SwaggerUi;

pub mod handlers;
mod openapi;

pub use handlers::AuthState;
pub use openapi::openapi;

const REQUEST_ID_HEADER: &str = "x-request-id";

/// Build the application router around `state`.
///
/// `/auth/protected` sits behind [`handlers::require_token`]; everything else
/// is public. `/health` skips the request-id, trace and CORS layers.
pub fn router(state: Arc<AuthState>) -> Router {
    let cors = CorsLayer::new()
        .allow_headers([
            CONTENT_TYPE,
            AUTHORIZATION,
            HeaderName::from_static(handlers::principal::AUTH_TOKEN_HEADER),
        ])
        .allow_methods([Method::GET, Method::POST])
        .allow_origin(Any);

    Router::new()
        .route("/auth/protected", get(handlers::protected))
        .route_layer(middleware::from_fn(handlers::require_token))
        .route("/auth/user", post(handlers::register))
        .route("/auth/login", post(handlers::login))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi()))
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestHeaderLayer::if_not_present(
                    HeaderName::from_static(REQUEST_ID_HEADER),
                    |_req: &_| HeaderValue::from_str(Ulid::new().to_string().as_str()).ok(),
                ))
                .layer(PropagateRequestIdLayer::new(HeaderName::from_static(
                    REQUEST_ID_HEADER,
                )))
                .layer(TraceLayer::new_for_http().make_span_with(make_span))
                .layer(cors)
                .layer(Extension(state.clone())),
        )
        // outside the CORS layer, which answers every OPTIONS as a preflight
        .route("/health", get(handlers::health).options(handlers::health))
        .layer(Extension(state))
}

/// Start the server
/// # Errors
/// Return error if the listener cannot be bound or the server fails
pub async fn new(port: u16, state: Arc<AuthState>) -> Result<()> {
    let app = router(state);

    let listener = TcpListener::bind(SocketAddr::from((Ipv6Addr::UNSPECIFIED, port))).await?;

    info!("Listening on [::]:{}", port);

    axum::serve(listener, app.into_make_service())
        .with_graceful_shutdown(async {
            if let Err(err) = tokio::signal::ctrl_c().await {
                error!("Failed to listen for shutdown signal: {}", err);
                std::future::pending::<()>().await;
            }
            info!("Gracefully shutdown");
        })
        .await?;

    Ok(())
}

fn make_span(request: &Request<Body>) -> Span {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|val| val.to_str().ok())
        .unwrap_or("none");
    let matched_path = request
        .extensions()
        .get::<MatchedPath>()
        .map_or_else(|| request.uri().path(), MatchedPath::as_str);

    info_span!(
        "http.request",
        http.method = %request.method(),
        http.route = matched_path,
        request_id
    )
}
