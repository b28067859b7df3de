//! Listener binding and server lifecycle.

use crate::{AppState, api};
use std::net::SocketAddr;
use tracing::info;
use wordforge_error::{ServerError, ServerErrorKind, WordforgeResult};

/// Binds `addr` and serves the API until ctrl-c.
pub async fn serve(addr: SocketAddr, state: AppState) -> WordforgeResult<()> {
    let app = api::create_router(state);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| ServerError::new(ServerErrorKind::Bind(format!("{}: {}", addr, e))))?;

    info!("Wordforge server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ServerError::new(ServerErrorKind::Serve(e.to_string())))?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}
