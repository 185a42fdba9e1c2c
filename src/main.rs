// src/main.rs
use anyhow::Result;
use redis_status::{client, config, Status, UnhealthyReason};
use std::process::ExitCode;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("redis_status=debug".parse()?),
        )
        .init();

    // Load configuration
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config.yaml".to_string());

    info!("Loading configuration from: {}", config_path);
    let config = config::load_config(&config_path).await?;

    let status = match client::connect(config.url.as_str(), config.connect_timeout()).await {
        Ok(conn) => config.checker(conn).check_status().await,
        Err(e) => {
            error!("Failed to connect to {}: {}", config.url, e);
            Status::Unhealthy(UnhealthyReason::NotResponsive {
                name: config.name.clone(),
            })
        }
    };

    match status.reason() {
        None => {
            info!("{} Redis instance is healthy", config.name);
            Ok(ExitCode::SUCCESS)
        }
        Some(reason) => {
            error!("{}", reason);
            Ok(ExitCode::FAILURE)
        }
    }
}
