//! Application startup and server initialization.
//!
//! Builds the shared state from the configuration, mounts the routes behind
//! the edge gate, and serves them on the configured address.

use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::info;

use crate::config::ConfigV1;
use crate::routes;
use crate::state::AppState;

/// Initializes and runs the application server.
///
/// # Errors
///
/// Returns an error if metrics registration fails, the server cannot bind
/// to the configured address, or serving fails at runtime.
pub async fn run(config: Arc<ConfigV1>) -> Result<(), Box<dyn std::error::Error>> {
    let state = AppState::new(config.clone())?;

    info!(
        locales = ?config.gate.locales,
        protected_prefixes = ?config.gate.protected_prefixes,
        "Edge gate configured"
    );
    info!("Starting server on {}", config.bind_address);

    let app = routes::create_router(state);
    let listener = TcpListener::bind(&config.bind_address).await?;

    axum::serve(listener, app).await?;

    Ok(())
}
