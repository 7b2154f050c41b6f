//! Shared application state.
//!
//! Contains the state that is shared across all request handlers,
//! including configuration, the compiled gate rules, and metrics.

use crate::config::ConfigV1;
use crate::gate::GateRules;
use crate::metrics::Metrics;
use std::sync::Arc;

/// Application state shared across all HTTP handlers.
///
/// Cloned for each request; everything inside is read-only or internally
/// synchronized.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration loaded at startup.
    pub config: Arc<ConfigV1>,
    /// Gate rules compiled from `config.gate`.
    pub rules: Arc<GateRules>,
    /// Prometheus metrics collector.
    pub metrics: Metrics,
}

impl AppState {
    pub fn new(config: Arc<ConfigV1>) -> Result<Self, prometheus::Error> {
        let rules = Arc::new(GateRules::new(&config.gate));
        Ok(AppState {
            config,
            rules,
            metrics: Metrics::new()?,
        })
    }
}
