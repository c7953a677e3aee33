//! hello-minikube entry point.
//!
//! Parses command line arguments, loads the optional TOML configuration,
//! initializes tracing, and serves the router until SIGTERM/SIGINT.

use std::path::Path;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hello_minikube::config::{AppConfig, LogFormat, DEFAULT_CONFIG_PATH, DEFAULT_LOG_FILTER};
use hello_minikube::create_router;
use hello_minikube::http::start_server;

/// hello-minikube: JSON hello and health endpoints for cluster smoke tests
#[derive(Parser, Debug)]
#[command(name = "hello-minikube", version, about)]
struct Args {
    /// Path to configuration file (defaults are used when absent)
    #[arg(short, long)]
    config: Option<String>,

    /// Listen IP address, overrides http.host
    #[arg(long)]
    host: Option<String>,

    /// Listen port, overrides http.port
    #[arg(long)]
    port: Option<u16>,

    /// Log level filter (e.g., "hello_minikube=debug")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // An explicit --config must exist; the sample path is only picked up if present
    let config_path = args.config.clone().or_else(|| {
        Path::new(DEFAULT_CONFIG_PATH)
            .exists()
            .then(|| DEFAULT_CONFIG_PATH.to_string())
    });

    let mut config = match &config_path {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };
    if let Some(host) = args.host {
        config.http.host = host;
    }
    if let Some(port) = args.port {
        config.http.port = port;
    }
    config.validate()?;

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(&log_filter));
    match config.logging.format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
    }

    tracing::info!(
        config = config_path.as_deref().unwrap_or("<defaults>"),
        host = %config.http.host,
        port = config.http.port,
        "Loaded configuration"
    );

    let app = create_router();
    start_server(app, &config).await?;

    Ok(())
}
