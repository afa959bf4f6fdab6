//! Gilnokie GMS Web Layer
//!
//! HTTP surface of the dashboard, built with Axum.
//!
//! # Endpoints
//!
//! ## Pages (session-gated)
//! - `GET /` - redirect to the dashboard
//! - `GET /dashboard` - overview
//! - `GET /dashboard/:section` - section page from the navigation registry
//!
//! ## Ungated
//! - `GET /login` - sign-in page, the gate's redirect target
//! - `GET /api/health` - health check
//! - `GET /manifest.webmanifest` - PWA manifest

pub mod dto;
pub mod error;
pub mod layout;
pub mod routes;
pub mod session;
pub mod state;

pub use error::{WebError, WebResult};
pub use session::CurrentUser;
pub use state::AppState;

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::config::ServerConfig;

/// Build the router with all routes and middleware
pub fn build_router(state: AppState) -> Router {
    let shared_state = Arc::new(state);

    Router::new()
        .route("/", get(routes::pages::index))
        .route("/login", get(routes::pages::login))
        .route("/dashboard", get(routes::pages::dashboard_home))
        .route("/dashboard/:section", get(routes::pages::dashboard_section))
        .route("/api/health", get(routes::health::health))
        .route("/manifest.webmanifest", get(routes::pwa::manifest))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()) // Configure properly in production
        .with_state(shared_state)
}

/// Start the server
pub async fn serve(state: AppState, config: &ServerConfig) -> Result<(), WebError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Gilnokie GMS listening on {}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| WebError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Gilnokie GMS shut down gracefully");
    Ok(())
}

/// Wait for a shutdown signal (Ctrl+C or SIGTERM)
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, shutting down");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, shutting down");
        }
    }
}
