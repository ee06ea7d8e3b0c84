use crate::config::{Config, RuntimeMode};
use crate::routes;
use tokio::net::TcpListener;
use tracing::info;

/// Run the service in the mode selected by configuration
///
/// Under Lambda every invocation is converted into an `http::Request` and
/// dispatched through the router; locally the same router is served over TCP.
pub async fn run(config: &Config) -> Result<(), lambda_http::Error> {
    match config.runtime {
        RuntimeMode::Lambda => {
            info!("Running under the Lambda runtime");
            lambda_http::run(routes::build_routes()).await
        }
        RuntimeMode::Local => {
            let listener = TcpListener::bind(config.bind_address).await?;
            info!("JWKS service listening on {}", listener.local_addr()?);
            serve_local(listener).await?;
            Ok(())
        }
    }
}

/// Serve the router on an already bound listener until the process stops
pub async fn serve_local(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, routes::build_routes()).await
}
