//! # Traffic Police Service
//!
//! This is the main entry point that wires everything together.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │  main.rs (this file) - Dependency Injection & Wiring            │
//! │    │                                                            │
//! │    ├── Loads: ServiceConfig (file, env, flags)                  │
//! │    ├── Creates: InMemoryRecordStore (adapter)                   │
//! │    ├── Creates: HttpVehicleRegistry, HttpMailNotifier (adapter) │
//! │    ├── Spawns: NotificationDispatcher worker (usecase)          │
//! │    └── Serves: axum router on the configured port               │
//! └─────────────────────────────────────────────────────────────────┘
//! ```

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use police_adapter::{
    create_router, AppState, HttpMailNotifier, HttpVehicleRegistry, InMemoryRecordStore,
};
use police_domain::{PlateMatch, RecordStore};
use police_usecase::{NotificationDispatcher, PoliceServices};
use shared::{PlateMatchMode, ServiceConfig};
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "traffic-police")]
#[command(about = "Traffic police record service")]
#[command(version)]
struct Cli {
    /// Configuration file (JSON, or YAML by .yaml/.yml extension)
    #[arg(short, long, env = "POLICE_CONFIG")]
    config: Option<PathBuf>,

    /// Listen port, overrides config and PORT
    #[arg(short, long)]
    port: Option<u16>,

    /// Accident plate matching: substring or token
    #[arg(long)]
    plate_match: Option<PlateMatchMode>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config =
        ServiceConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;
    if let Some(port) = cli.port {
        config.port = port;
    }
    if let Some(mode) = cli.plate_match {
        config.accident_plate_match = mode;
    }
    config.validate()?;

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level)),
        )
        .init();

    info!(
        port = config.port,
        registry = %config.vehicle_service_url,
        notifications = %config.notification_service_url,
        plate_match = ?config.accident_plate_match,
        "Starting traffic police service"
    );

    // ========================================
    // Dependency Injection - Wire up the system
    // ========================================

    let registry = Arc::new(
        HttpVehicleRegistry::new(&config.vehicle_service_url, config.registry_timeout())
            .context("Failed to create vehicle registry client")?,
    );
    let mailer = Arc::new(
        HttpMailNotifier::new(&config.notification_service_url, config.registry_timeout())
            .context("Failed to create notification client")?,
    );
    let store = RecordStore::from_backend(Arc::new(InMemoryRecordStore::new()));

    let (dispatcher, worker) = NotificationDispatcher::spawn(
        config.notification_queue_capacity,
        registry.clone(),
        mailer,
    );
    let services = PoliceServices::new(
        store,
        registry,
        dispatcher,
        plate_match(config.accident_plate_match),
    );
    let router = create_router(Arc::new(AppState::new(services)), &config.cors_allowed_origin);

    // ========================================
    // Serve
    // ========================================

    let listener = TcpListener::bind(("0.0.0.0", config.port))
        .await
        .with_context(|| format!("Failed to bind port {}", config.port))?;
    info!(addr = %listener.local_addr()?, "Listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    // The router owned the last dispatcher handles; let queued jobs finish
    if tokio::time::timeout(Duration::from_secs(5), worker).await.is_err() {
        warn!("Notification queue not drained before shutdown");
    }
    info!("Traffic police service stopped");
    Ok(())
}

/// `shared` does not depend on the domain crate, so the configured mode
/// is mapped onto the domain's `PlateMatch` here and nowhere else.
fn plate_match(mode: PlateMatchMode) -> PlateMatch {
    match mode {
        PlateMatchMode::Substring => PlateMatch::Substring,
        PlateMatchMode::Token => PlateMatch::Token,
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown requested");
}
