//! Route modules for the PDF Q&A server

pub mod ask;
pub mod health;
pub mod upload;

use axum::http::{header::InvalidHeaderValue, HeaderValue};
use axum::Router;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the full application router
pub fn app(state: AppState) -> Result<Router, InvalidHeaderValue> {
    let cors = cors_layer(&state.config().cors.allowed_origin)?;
    let max_upload_bytes = state.config().upload.max_bytes;

    Ok(Router::new()
        .nest("/health", health::router())
        .nest(
            "/api",
            Router::new()
                .merge(upload::router(max_upload_bytes))
                .merge(ask::router()),
        )
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state))
}

/// CORS for a single origin with credentials.
///
/// Wildcards are not allowed alongside credentials, so methods and headers
/// are mirrored from the preflight request instead.
pub fn cors_layer(allowed_origin: &str) -> Result<CorsLayer, InvalidHeaderValue> {
    let origin = HeaderValue::from_str(allowed_origin)?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true))
}
