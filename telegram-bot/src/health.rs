//! Liveness endpoint for the hosting platform: `GET /` answers `OK`.
//!
//! The listener is bound before polling starts; a bind failure is fatal. Serving runs on its own task.

use anyhow::{Context, Result};
use axum::{routing::get, Router};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// Router with the single `GET /` health route.
pub fn health_router() -> Router {
    Router::new().route("/", get(health_handler))
}

async fn health_handler() -> &'static str {
    "OK"
}

/// Binds the health listener on `addr` (`host:port`).
pub async fn bind_health_listener(addr: &str) -> Result<TcpListener> {
    TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind health server to {}", addr))
}

/// Serves [`health_router`] on `listener` in a background task.
pub fn spawn_health_server(listener: TcpListener) -> JoinHandle<()> {
    if let Ok(addr) = listener.local_addr() {
        info!(addr = %addr, "Health server listening");
    }
    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, health_router()).await {
            error!(error = %e, "Health server stopped");
        }
    })
}
