//! Observability for the JWKS service
//!
//! Structured logging through `tracing` and request counters through the
//! `metrics` facade. Key material is public, but log fields are still limited
//! to method, path and status.

pub mod metrics;

pub use self::metrics::{record_jwks_request, record_serialization_failure};

use crate::config::LogFormat;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Default filter used when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "jwks_service=info,tower_http=info";

/// Install the global tracing subscriber
///
/// JSON output is the default under the Lambda runtime, where log lines are
/// shipped as-is to the host's log sink.
pub fn init_tracing(format: LogFormat) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_LOG_FILTER.into());
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Json => registry
            .with(tracing_subscriber::fmt::layer().json().with_ansi(false))
            .init(),
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}
