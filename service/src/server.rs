//! Server setup and lifecycle for the extraction service.

use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;

use crate::error::{Result, ServiceError};
use crate::routes::create_router;
use crate::state::{AppState, ServiceConfig};

/// Runs the HTTP server.
///
/// Blocks until the server is shut down (e.g., via Ctrl+C).
pub async fn run(config: ServiceConfig) -> Result<()> {
    let state = Arc::new(AppState::new(config)?);

    let addr: SocketAddr = format!("{}:{}", state.config.host, state.config.port)
        .parse()
        .map_err(|e| ServiceError::Configuration(format!("Invalid address: {e}")))?;

    let router = create_router(state.clone());

    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| ServiceError::Server(format!("Failed to bind to {addr}: {e}")))?;

    tracing::info!(%addr, model = %state.config.model, "Extraction service starting");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ServiceError::Server(format!("Server error: {e}")))?;

    tracing::info!("Extraction service stopped");
    Ok(())
}

/// Entry point for running the server from environment variables.
///
/// Initializes tracing and reads configuration once; a missing credential
/// fails here, before the server binds.
pub async fn run_from_env() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let config = ServiceConfig::from_env()?;
    run(config).await
}

/// Signal handler for graceful shutdown.
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        },
        () = terminate => {
            tracing::info!("Received terminate signal, initiating graceful shutdown");
        },
    }
}
