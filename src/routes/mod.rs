//! HTTP route definitions and handlers.
//!
//! Operational endpoints (health, metrics) are served directly. Everything
//! else goes through the edge gate before reaching the page-context fallback.

mod health_routes;
mod metrics_routes;
mod page_routes;

use crate::gate::middleware::gate;
use crate::state::AppState;
use axum::{middleware, Router};

/// Creates the application router with all configured routes.
///
/// The gate layer wraps only the storefront fallback, so `/health` and
/// `/metrics` never require the auth cookie.
pub fn create_router(state: AppState) -> Router {
    let storefront = page_routes::routes()
        .layer(middleware::from_fn_with_state(state.clone(), gate));

    Router::new()
        .merge(health_routes::routes())
        .merge(metrics_routes::routes())
        .merge(storefront)
        .with_state(state)
}
