use std::sync::Arc;

use log::{error, info};
use solecloud_app::build_application;
use solecloud_email_lettre::LettreEmailAdapter;

use crate::config::ServerConfig;

mod config;
mod logs;

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received. Preparing graceful exit...");
}

#[tokio::main]
async fn main() -> std::process::ExitCode {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("Failed to load .env file: {}", e);
            return std::process::ExitCode::FAILURE;
        }
    }

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Invalid configuration: {}", e);
            return std::process::ExitCode::FAILURE;
        }
    };

    if let Err(e) = logs::init_logger(config.log_file.as_ref()) {
        eprintln!("Failed to initialize logger: {}", e);
        return std::process::ExitCode::FAILURE;
    }

    info!(
        "Starting in {} environment, notifications go to {}",
        config.application.environment, config.application.operator_address
    );

    let email_adapter = match LettreEmailAdapter::new(config.smtp) {
        Ok(adapter) => Arc::new(adapter),
        Err(e) => {
            error!("Failed to set up mail transport: {}", e);
            return std::process::ExitCode::FAILURE;
        }
    };

    let app = Arc::new(build_application(
        email_adapter.clone(),
        email_adapter,
        config.application,
    ));

    if let Err(e) = solecloud_http_api::http::run(app, config.http_addr, shutdown_signal()).await {
        error!("HTTP API failed: {}", e);
        return std::process::ExitCode::FAILURE;
    }

    std::process::ExitCode::SUCCESS
}
