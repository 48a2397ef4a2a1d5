//! Axum HTTP surface of the gateway.

pub mod error;
pub mod handlers;
pub mod routes;

use crate::core::gateway::CommandGateway;
use crate::core::RepositoryHost;
use crate::utils::error::Result;
use std::future::Future;
use tokio::net::TcpListener;
use tokio::signal;

pub use routes::create_router;

/// Serves the gateway on `listener` until `shutdown` resolves.
pub async fn serve<H, F>(listener: TcpListener, gateway: CommandGateway<H>, shutdown: F) -> Result<()>
where
    H: RepositoryHost + 'static,
    F: Future<Output = ()> + Send + 'static,
{
    let addr = listener.local_addr()?;
    tracing::info!("Server is running on http://{}", addr);

    axum::serve(listener, create_router(gateway))
        .with_graceful_shutdown(shutdown)
        .await?;

    tracing::info!("Server shut down");
    Ok(())
}

/// Resolves on Ctrl+C or SIGTERM.
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
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
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
