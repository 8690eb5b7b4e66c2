//! REST API for on-demand simulation runs.
//!
//! Every request is an independent computation; the router carries no state.
//! - `POST /simulate`: run a scenario posted as JSON
//! - `GET /presets/{name}`: run a built-in preset
//! - `GET /health`: liveness probe

mod handlers;
mod types;

use std::io;
use std::net::SocketAddr;

use axum::Router;
use axum::routing::{get, post};
use tracing::info;

pub use types::{ErrorResponse, SimulationResponse};

/// Builds the axum router with all API routes.
pub fn router() -> Router {
    Router::new()
        .route("/simulate", post(handlers::simulate))
        .route("/presets/{name}", get(handlers::run_preset))
        .route("/health", get(handlers::health))
}

/// Binds to the given address and serves the API until the process exits.
///
/// # Errors
///
/// Returns an `io::Error` if the listener cannot bind or the server fails.
pub async fn serve(addr: SocketAddr) -> io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "API server listening");
    axum::serve(listener, router()).await
}
