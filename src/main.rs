//! User registry service.
//!
//! A small HTTP/JSON service built with Tokio and Axum that keeps a list of
//! users in memory and exposes create/read/update/delete operations on it.
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌──────────────────────────────────────────────────┐
//!                      │                  USER REGISTRY                   │
//!                      │                                                  │
//!   Client Request     │  ┌────────────┐   ┌────────────┐   ┌──────────┐  │
//!   ───────────────────┼─▶│ request id │──▶│ access log │──▶│  router  │  │
//!                      │  └────────────┘   └────────────┘   └────┬─────┘  │
//!                      │                                         │        │
//!                      │                          write paths    ▼        │
//!                      │                   ┌───────────┐   ┌──────────┐   │
//!                      │                   │ validator │──▶│  store   │   │
//!                      │                   └───────────┘   └────┬─────┘   │
//!   Client Response    │                                        │         │
//!   ◀──────────────────┼──────────────── JSON + status ◀────────┘         │
//!                      │                                                  │
//!                      │  config · observability · lifecycle              │
//!                      └──────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;

use clap::Parser;

use user_registry::config::{loader, ServiceConfig};
use user_registry::lifecycle::{self, Shutdown};
use user_registry::observability::init_logging;

#[derive(Parser)]
#[command(name = "user-registry")]
#[command(about = "In-memory user registry over HTTP", version)]
struct Cli {
    /// Path to a TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port to listen on, keeping the configured host.
    #[arg(short, long, env = "PORT")]
    port: Option<u16>,

    /// Full bind address; overrides both the file and --port.
    #[arg(short, long)]
    bind: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => loader::load_config(path)?,
        None => ServiceConfig::default(),
    };
    if let Some(port) = cli.port {
        config.listener.set_port(port);
    }
    if let Some(bind) = cli.bind {
        config.listener.bind_address = bind;
    }
    loader::check_config(&config)?;

    init_logging(&config.observability);
    tracing::info!("user-registry v{} starting", env!("CARGO_PKG_VERSION"));

    let shutdown = Shutdown::new();
    shutdown.trigger_on_signal();

    lifecycle::start(config, &shutdown).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
