//! CORS preflight behaviour

use crate::support::send;
use axum::http::{Method, StatusCode};

#[tokio::test]
async fn test_options_returns_cors_headers_on_any_path() -> Result<(), anyhow::Error> {
    for path in ["/keys", "/.well-known/jwks.json", "/", "/does/not/exist"] {
        let response = send(Method::OPTIONS, path).await?;

        assert_eq!(response.status, StatusCode::OK, "OPTIONS {}", path);
        assert!(response.body.is_empty(), "preflight body should be empty");
        assert_eq!(response.header("access-control-allow-origin"), Some("*"));
        assert_eq!(
            response.header("access-control-allow-methods"),
            Some("GET, OPTIONS")
        );
        assert_eq!(
            response.header("access-control-allow-headers"),
            Some("Content-Type")
        );
    }

    Ok(())
}

#[tokio::test]
async fn test_options_has_no_cache_control() -> Result<(), anyhow::Error> {
    let response = send(Method::OPTIONS, "/keys").await?;

    assert!(response.header("cache-control").is_none());

    Ok(())
}
