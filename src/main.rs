//! Binary entry point.

use clap::Parser;
use std::path::PathBuf;
use tokio::net::TcpListener;

use user_service::config::{load_config, ServiceConfig};
use user_service::http::HttpServer;
use user_service::observability::{logging, metrics};

#[derive(Debug, Parser)]
#[command(name = "user-service", about = "In-memory user CRUD HTTP service")]
struct Args {
    /// Path to a TOML configuration file. Built-in defaults apply when
    /// omitted.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => ServiceConfig::default(),
    };

    logging::init_tracing(&config.observability.log_level);

    tracing::info!("user-service v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        max_body_bytes = config.limits.max_body_bytes,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => metrics::init_metrics(addr),
            Err(_) => {
                tracing::error!(
                    metrics_address = %config.observability.metrics_address,
                    "Failed to parse metrics address"
                );
            }
        }
    }

    // A failed bind is the only fatal startup error.
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;
    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    let server = HttpServer::new(config);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
