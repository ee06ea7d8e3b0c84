use axum::{
    http::{
        header::{ACCESS_CONTROL_ALLOW_ORIGIN, CONTENT_TYPE},
        StatusCode,
    },
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use thiserror::Error;

/// Body returned when the key set cannot be encoded
pub const INTERNAL_ERROR_BODY: &str = r#"{"error": "Internal server error"}"#;

#[derive(Debug, Error)]
pub enum JwksError {
    #[error("failed to marshal JWKS: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Renders the 500 fallback response.
///
/// The error itself travels with the response as an `Arc<JwksError>` extension
/// so that tower layers (and the runtime host) can report the underlying cause.
impl IntoResponse for JwksError {
    fn into_response(self) -> Response {
        let mut response = (
            StatusCode::INTERNAL_SERVER_ERROR,
            [
                (CONTENT_TYPE, "application/json"),
                (ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
            ],
            INTERNAL_ERROR_BODY,
        )
            .into_response();

        response.extensions_mut().insert(Arc::new(self));
        response
    }
}
