use crate::handlers::jwks_handler::handle_jwks_request;
use axum::{routing::any, Router};
use tower_http::trace::TraceLayer;

/// Well-known JWKS path (RFC 8414)
pub const WELL_KNOWN_JWKS_PATH: &str = "/.well-known/jwks.json";

/// Path the function is published under
pub const KEYS_PATH: &str = "/keys";

/// Build the application router
///
/// The function host decides which paths reach us, so every path (including
/// the fallback) is served by the same handler and only the method matters.
pub fn build_routes() -> Router {
    Router::new()
        .route(KEYS_PATH, any(handle_jwks_request))
        .route(WELL_KNOWN_JWKS_PATH, any(handle_jwks_request))
        .fallback(handle_jwks_request)
        // Add tracing middleware
        .layer(TraceLayer::new_for_http())
}
