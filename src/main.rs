//! Instructor Directory - a review-aggregating instructor registry
//!
//! Serves instructor records and their reviews from an in-memory cache backed
//! by a remote document store as the durable source of truth.

mod api;
mod cache;
mod config;
mod error;
mod models;
mod service;
mod store;
mod tasks;

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use tokio::signal;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api::{create_router, AppState};
use config::Config;
use service::InstructorService;
use store::HttpRecordStore;
use tasks::spawn_refresh_task;

/// Main entry point for the instructor directory server.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Build the record store gateway with the configured timeout
/// 4. Perform the initial cache load (a failure starts with an empty cache)
/// 5. Start the background cache refresh task
/// 6. Create Axum router with all endpoints
/// 7. Start HTTP server on configured port
/// 8. Handle graceful shutdown on SIGINT/SIGTERM
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber with env filter
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "instructor_directory=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Instructor Directory Server");

    // Load configuration from environment variables
    let config = Config::from_env();
    info!(
        "Configuration loaded: cache_ttl={}s, store_timeout={}s, refresh_interval={}s, port={}",
        config.cache_ttl_secs,
        config.store_timeout_secs,
        config.refresh_interval_secs,
        config.server_port
    );

    // Build the store gateway and the service around it
    let record_store = Arc::new(HttpRecordStore::new(
        &config.store_base_url,
        &config.store_collection,
        Duration::from_secs(config.store_timeout_secs),
    )?);
    let service = Arc::new(InstructorService::new(record_store, config.cache_ttl_secs));

    // Initial cache load; an unreachable store is not fatal at startup
    if let Err(err) = service.cache().refresh_all().await {
        warn!("initial cache load failed, starting with an empty cache: {err}");
    } else {
        info!(
            "Instructor cache initialized with {} records",
            service.cache().len().await
        );
    }

    // Start background refresh task
    let refresh_handle = spawn_refresh_task(service.clone(), config.refresh_interval_secs);
    info!("Background refresh task started");

    // Create router with all endpoints
    let app = create_router(AppState { service });

    // Bind to configured port
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server_port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Server listening on http://{}", addr);

    // Start server with graceful shutdown
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal(refresh_handle))
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// On shutdown signal, aborts the refresh task and allows graceful shutdown.
async fn shutdown_signal(refresh_handle: tokio::task::JoinHandle<()>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, initiating shutdown...");
        }
        _ = terminate => {
            info!("Received SIGTERM, initiating shutdown...");
        }
    }

    // Abort the refresh task
    refresh_handle.abort();
    warn!("Refresh task aborted");
}
