//! Unsupported methods

use crate::support::send;
use axum::http::{Method, StatusCode};

#[tokio::test]
async fn test_unsupported_methods_return_405() -> Result<(), anyhow::Error> {
    for method in [Method::POST, Method::PUT, Method::DELETE, Method::PATCH] {
        let response = send(method.clone(), "/keys").await?;

        assert_eq!(
            response.status,
            StatusCode::METHOD_NOT_ALLOWED,
            "{} should be rejected",
            method
        );
        assert_eq!(response.body, br#"{"error": "Method not allowed"}"#.to_vec());
        assert_eq!(response.header("content-type"), Some("application/json"));
        assert_eq!(response.header("access-control-allow-origin"), Some("*"));
        assert_eq!(
            response.header("access-control-allow-methods"),
            Some("GET, OPTIONS")
        );
        assert!(response.header("cache-control").is_none());
    }

    Ok(())
}

#[tokio::test]
async fn test_extension_method_returns_405() -> Result<(), anyhow::Error> {
    let method = Method::from_bytes(b"PURGE")?;
    let response = send(method, "/.well-known/jwks.json").await?;

    assert_eq!(response.status, StatusCode::METHOD_NOT_ALLOWED);

    Ok(())
}
