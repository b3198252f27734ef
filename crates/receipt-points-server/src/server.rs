//! Listener setup and graceful shutdown.

use anyhow::Result;
use axum::Router;
use receipt_points::{MemoryStore, ReceiptService};
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::api::router;
use crate::config::ServerConfig;

/// Bind, serve until Ctrl-C, then drain in-flight requests.
pub async fn run_server(config: ServerConfig) -> Result<()> {
    let service = ReceiptService::new(MemoryStore::new());
    let listener = TcpListener::bind(config.bind_address).await?;
    serve(listener, router(service)).await
}

/// Serve `app` on an already bound listener.
pub async fn serve(listener: TcpListener, app: Router) -> Result<()> {
    let actual_addr = listener.local_addr()?;
    info!(bind = %actual_addr, "listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutdown signal received"),
        Err(error) => {
            warn!(%error, "cannot listen for shutdown signal; running until killed");
            std::future::pending::<()>().await;
        }
    }
}
