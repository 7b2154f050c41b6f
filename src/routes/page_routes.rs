//! Fallback for requests the gate lets through.
//!
//! Page bodies are rendered elsewhere; this answers with the context a
//! renderer needs for the requested path.

use axum::http::Uri;
use axum::{Json, Router};
use serde::Serialize;

use crate::breadcrumbs::{self, Breadcrumb};
use crate::state::AppState;

/// Longest breadcrumb trail handed to the renderer.
const MAX_BREADCRUMBS: usize = 4;

#[derive(Serialize)]
struct PageContext {
    path: String,
    breadcrumbs: Vec<Breadcrumb>,
}

/// Registers the storefront fallback.
pub fn routes() -> Router<AppState> {
    Router::new().fallback(page_context)
}

async fn page_context(uri: Uri) -> Json<PageContext> {
    let path = uri.path().to_string();
    let breadcrumbs = breadcrumbs::truncate(breadcrumbs::from_path(&path), MAX_BREADCRUMBS);
    Json(PageContext { path, breadcrumbs })
}
