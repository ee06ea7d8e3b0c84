use jwks_service::config::Config;
use jwks_service::{observability, server};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), lambda_http::Error> {
    // Load configuration (it decides the log format, so tracing comes second)
    let config = Config::from_env()?;

    observability::init_tracing(config.log_format);

    info!("Starting JWKS serverless function...");

    server::run(&config).await.map_err(|e| {
        error!("JWKS service stopped: {}", e);
        e
    })
}
