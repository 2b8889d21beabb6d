//! HTTP server initialization and runtime setup.
//!
//! Builds the Keystone client, wires the services and runs the Axum server
//! until Ctrl-C or SIGTERM.

use crate::api::middleware::rate_limit;
use crate::config::Config;
use crate::infrastructure::keystone::KeystoneClient;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Keystone HTTP client
/// - Rate limiter
/// - Axum HTTP server with graceful shutdown
///
/// Keystone being down at startup is logged, not fatal: `/health` reports
/// it and requests fail with 502 until it is back.
///
/// # Errors
///
/// Returns an error if:
/// - The HTTP client cannot be built
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let keystone = Arc::new(
        KeystoneClient::new(config.keystone_settings()).context("Failed to build Keystone client")?,
    );

    let state = AppState::new(keystone, config.paginate_projects);

    if state.auth_service.backend_healthy().await {
        tracing::info!(url = %config.keystone_url, "Identity service reachable");
    } else {
        tracing::warn!(url = %config.keystone_url, "Identity service not reachable yet");
    }

    let limiter = rate_limit::layer(config.rate_limit_per_second, config.rate_limit_burst)?;
    let app = app_router(state, limiter);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid LISTEN address '{}'", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to listen for Ctrl-C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}
