use std::sync::Arc;

use clap::Parser;
use tokio::signal;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::utils::cli::Args;
use crate::utils::state::AppState;

mod api;
mod config;
mod error;
mod service;
mod storage;
mod utils;
mod views;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = Args::parse();
    let config = validate_config(&args);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let state = Arc::new(AppState::new(config).await);
    let app = api::create_router(state.clone());

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", state.config.host, state.config.port))
            .await?;
    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
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

    println!("Shutting down...");
}

fn validate_config(args: &Args) -> Config {
    let mut validation_errors = Vec::new();

    if args.bucket.is_empty() {
        validation_errors.push("--bucket (BUCKETVIEW_S3_BUCKET) is required".to_string());
    }
    if args.s3_endpoint.is_empty() {
        validation_errors.push("--s3-endpoint (BUCKETVIEW_S3_ENDPOINT) is required".to_string());
    }
    if args.s3_access_key.is_empty() {
        validation_errors
            .push("--s3-access-key (BUCKETVIEW_S3_ACCESS_KEY) is required".to_string());
    }
    if args.s3_secret_key.is_empty() {
        validation_errors
            .push("--s3-secret-key (BUCKETVIEW_S3_SECRET_KEY) is required".to_string());
    }

    if !validation_errors.is_empty() {
        eprintln!("{}", validation_errors.join("\n"));
        std::process::exit(1);
    }

    Config {
        host: args.host.clone(),
        port: args.port,
        bucket: args.bucket.clone(),
        endpoint: args.s3_endpoint.clone(),
        access_key: args.s3_access_key.clone(),
        secret_key: args.s3_secret_key.clone(),
        region: args.s3_region.clone(),
        op_timeout_secs: args.op_timeout_secs,
    }
}
