use crate::errors::JwksError;
use crate::observability::{record_jwks_request, record_serialization_failure};
use crate::services::key_set_service;
use axum::{
    http::{
        header::{
            ACCESS_CONTROL_ALLOW_HEADERS, ACCESS_CONTROL_ALLOW_METHODS,
            ACCESS_CONTROL_ALLOW_ORIGIN, CACHE_CONTROL, CONTENT_TYPE,
        },
        Method, StatusCode, Uri,
    },
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::instrument;

pub const ALLOWED_METHODS: &str = "GET, OPTIONS";
pub const ALLOWED_HEADERS: &str = "Content-Type";
pub const JSON_CONTENT_TYPE: &str = "application/json";
pub const ANY_ORIGIN: &str = "*";

/// Clients and CDNs may cache the key set for one hour
pub const JWKS_CACHE_CONTROL: &str = "public, max-age=3600";

pub const METHOD_NOT_ALLOWED_BODY: &str = r#"{"error": "Method not allowed"}"#;

/// Handle any request routed to the key endpoint
///
/// - `OPTIONS`: CORS preflight, empty body
/// - `GET`: the key set (RFC 7517) with a one hour Cache-Control
/// - anything else: 405 with a JSON error body
///
/// Path is logged but never affects the response.
pub async fn handle_jwks_request(method: Method, uri: Uri) -> Result<Response, JwksError> {
    respond(&method, uri.path(), &key_set_service::get_jwks())
}

/// Build the response for one request, publishing `key_set` on GET
#[instrument(
    name = "jwks.request",
    skip_all,
    fields(method = %method, path = %path, status)
)]
pub fn respond<T: Serialize>(
    method: &Method,
    path: &str,
    key_set: &T,
) -> Result<Response, JwksError> {
    tracing::info!("Received request: {} {}", method, path);

    let result = match *method {
        Method::OPTIONS => Ok(preflight_response()),
        Method::GET => jwks_response(key_set),
        _ => Ok(method_not_allowed_response()),
    };

    let status = match &result {
        Ok(response) => response.status(),
        Err(e) => {
            tracing::error!(error = %e, "Error marshaling JWKS to JSON");
            record_serialization_failure();
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    tracing::Span::current().record("status", status.as_u16());
    record_jwks_request(method, status.as_u16());

    result
}

/// CORS preflight response
pub fn preflight_response() -> Response {
    (
        StatusCode::OK,
        [
            (ACCESS_CONTROL_ALLOW_ORIGIN, ANY_ORIGIN),
            (ACCESS_CONTROL_ALLOW_METHODS, ALLOWED_METHODS),
            (ACCESS_CONTROL_ALLOW_HEADERS, ALLOWED_HEADERS),
        ],
    )
        .into_response()
}

/// Successful key set response
pub fn jwks_response<T: Serialize>(key_set: &T) -> Result<Response, JwksError> {
    let body = key_set_service::encode_json(key_set)?;

    Ok((
        StatusCode::OK,
        [
            (CONTENT_TYPE, JSON_CONTENT_TYPE),
            (ACCESS_CONTROL_ALLOW_ORIGIN, ANY_ORIGIN),
            (CACHE_CONTROL, JWKS_CACHE_CONTROL),
        ],
        body,
    )
        .into_response())
}

/// Response for every method other than GET and OPTIONS
pub fn method_not_allowed_response() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        [
            (CONTENT_TYPE, JSON_CONTENT_TYPE),
            (ACCESS_CONTROL_ALLOW_ORIGIN, ANY_ORIGIN),
            (ACCESS_CONTROL_ALLOW_METHODS, ALLOWED_METHODS),
        ],
        METHOD_NOT_ALLOWED_BODY,
    )
        .into_response()
}
