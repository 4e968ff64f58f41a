//! Regex connector service.
//!
//! # Architecture Overview
//!
//! ```text
//!     POST /operations/{operation_id}
//!     ─────────────────────────────────▶ http::server (timeout, body limit, correlation id)
//!                                             │
//!                                             ▼
//!                                   connector::execute
//!                         operation → body → request → matcher → response
//!                                             │
//!     JSON response  ◀────────────────────────┘
//!
//!     config (TOML) · observability (tracing, Prometheus) · lifecycle (shutdown)
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;
use tokio::net::TcpListener;

use regex_connector::config::{load_config, validation::validate_config, ConfigError};
use regex_connector::lifecycle::signals::shutdown_on_ctrl_c;
use regex_connector::observability::{init_logging, metrics};
use regex_connector::{ConnectorConfig, HttpServer, Shutdown};

#[derive(Parser)]
#[command(name = "regex-connector")]
#[command(about = "HTTP connector answering RegexIsMatch and RegexMatch operations", long_about = None)]
struct Args {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the listener bind address.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => ConnectorConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.listener.bind_address = bind;
        validate_config(&config).map_err(ConfigError::Validation)?;
    }

    init_logging(&config.observability)?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        config_path = ?args.config,
        bind_address = %config.listener.bind_address,
        request_timeout_secs = config.timeouts.request_secs,
        max_body_bytes = config.limits.max_body_bytes,
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        let addr: SocketAddr = config.observability.metrics_address.parse()?;
        metrics::init_metrics(addr)?;
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let shutdown = Shutdown::new();
    tokio::spawn(shutdown_on_ctrl_c(shutdown.clone()));

    let server = HttpServer::new(config, shutdown);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
