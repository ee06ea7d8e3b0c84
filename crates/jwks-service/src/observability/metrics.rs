//! Metrics definitions for the JWKS service
//!
//! Prometheus naming conventions:
//! - `jwks_` prefix
//! - `_total` suffix for counters
//!
//! # Cardinality
//!
//! - `method`: 3 values (GET, OPTIONS, other)
//! - `status`: bounded by the handler (200, 405, 500)

use axum::http::Method;
use metrics::counter;

/// Collapse an HTTP method into a bounded label value
pub fn method_label(method: &Method) -> &'static str {
    match *method {
        Method::GET => "GET",
        Method::OPTIONS => "OPTIONS",
        _ => "other",
    }
}

/// Record a handled request
///
/// Metric: `jwks_requests_total`
/// Labels: `method`, `status`
pub fn record_jwks_request(method: &Method, status: u16) {
    counter!(
        "jwks_requests_total",
        "method" => method_label(method),
        "status" => status.to_string()
    )
    .increment(1);
}

/// Record a failure to encode the key set
///
/// Metric: `jwks_serialization_failures_total`
pub fn record_serialization_failure() {
    counter!("jwks_serialization_failures_total").increment(1);
}
