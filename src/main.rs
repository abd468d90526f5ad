//! healthcheck-demo: a minimal HTTP service.
//!
//! This is the application entry point. It parses arguments, loads the optional
//! TOML configuration, initializes tracing, builds the Axum router and starts
//! the HTTP server.

use clap::Parser;

use healthcheck_demo::config::{AppConfig, DEFAULT_CONFIG_PATH};
use healthcheck_demo::http::start_server;
use healthcheck_demo::logging;
use healthcheck_demo::routes::create_router;

/// healthcheck-demo: health check and greeting endpoints
#[derive(Parser, Debug)]
#[command(name = "healthcheck-demo", version, about)]
struct Args {
    /// Path to configuration file (optional at the default location)
    #[arg(short, long)]
    config: Option<String>,

    /// Log level filter (e.g., "healthcheck_demo=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Configuration comes first so the log format is known
    let explicit = args.config.is_some();
    let config_path = args
        .config
        .unwrap_or_else(|| DEFAULT_CONFIG_PATH.to_string());
    let config = AppConfig::load_or_default(&config_path, explicit)?;

    let log_filter = logging::resolve_filter(args.log_level, std::env::var("RUST_LOG").ok());
    logging::init(&log_filter, config.logging.format);

    tracing::info!(
        host = %config.http.host,
        port = config.http.port,
        format = ?config.logging.format,
        "Loaded configuration"
    );

    let app = create_router();
    start_server(app, &config).await?;

    tracing::info!("Server stopped");
    Ok(())
}
