//! ecoscan-api - EcoScan HTTP backend
//!
//! Scores products by barcode and serves product search/suggestions as JSON.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use ecoscan_api::{build_router, product_source_from_config, AppState};
use ecoscan_common::config::{ConfigOverrides, TomlConfig};
use tokio::signal;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Command-line arguments for ecoscan-api
#[derive(Parser, Debug)]
#[command(name = "ecoscan-api")]
#[command(about = "EcoScan product sustainability API")]
#[command(version)]
struct Args {
    /// TOML configuration file
    #[arg(short, long, env = "ECOSCAN_CONFIG")]
    config: Option<PathBuf>,

    /// Interface to bind
    #[arg(long, env = "ECOSCAN_HOST")]
    host: Option<String>,

    /// Port to listen on
    #[arg(short, long, env = "ECOSCAN_PORT")]
    port: Option<u16>,

    /// SQLite file for scan history (enables persistence)
    #[arg(short, long, env = "ECOSCAN_DATABASE")]
    database: Option<PathBuf>,

    /// Disable external product lookups
    #[arg(long)]
    offline: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "ECOSCAN_LOG_LEVEL")]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let (toml_config, source) =
        TomlConfig::load(args.config.as_deref()).context("Failed to load configuration")?;
    let config = toml_config
        .with_overrides(ConfigOverrides {
            host: args.host,
            port: args.port,
            database_path: args.database,
            log_level: args.log_level,
            offline: args.offline,
        })
        .context("Invalid configuration")?;

    // RUST_LOG wins over the configured level
    let level = &config.logging.level;
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            format!("ecoscan_api={level},ecoscan_common={level},tower_http={level}").into()
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting EcoScan API v{}", env!("CARGO_PKG_VERSION"));
    info!("Configuration: {}", source);

    let db = match &config.database_path {
        Some(path) => {
            let pool = ecoscan_common::db::init_database(path)
                .await
                .with_context(|| format!("Failed to initialize database {}", path.display()))?;
            info!("Persistence enabled: {}", path.display());
            Some(pool)
        }
        None => {
            info!("Persistence disabled (no database path configured)");
            None
        }
    };

    let product_source = product_source_from_config(&config.external)
        .context("Failed to create external product client")?;
    if config.external.enabled {
        info!(
            "External lookups via {} (timeout {} ms)",
            config.external.base_url, config.external.timeout_ms
        );
    } else {
        info!("External lookups disabled");
    }

    let app = build_router(AppState::new(product_source, db));

    let addr = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;
    info!("Listening on http://{}", addr);
    info!("Health check: http://{}/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        }
        _ = terminate => {
            info!("Received SIGTERM, shutting down");
        }
    }
}
