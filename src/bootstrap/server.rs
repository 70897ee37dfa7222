//! HTTP server loop: bind, serve, shut down gracefully.

use anyhow::Result;
use tokio::net::TcpListener;

use crate::api::rest;
use crate::bootstrap::config::AppConfig;
use crate::bootstrap::signals::wait_for_shutdown;
use crate::domain::CalcService;

/// Bind the listener and serve until a shutdown signal arrives.
///
/// The domain service is constructed here and handed to the router
/// explicitly; request handlers receive it as axum state.
///
/// # Errors
/// Returns an error when the bind address is invalid, the listener cannot be
/// bound, or the server loop fails.
pub async fn run_server(config: AppConfig) -> Result<()> {
    let addr = config.bind_addr()?;
    let service = CalcService::new();
    let router = rest::router(service, &config.api);

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("HTTP server bound on {}", listener.local_addr()?);

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            wait_for_shutdown().await;
            tracing::info!("HTTP server shutting down gracefully");
        })
        .await?;

    Ok(())
}
