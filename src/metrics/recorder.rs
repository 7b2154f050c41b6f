//! Metrics recording implementation using Prometheus.

use prometheus::{
    register_int_counter_vec_with_registry, Encoder, IntCounterVec, Opts, Registry, TextEncoder,
};
use std::sync::Arc;

/// Trait for recording application metrics.
pub trait MetricsRecorder: Clone + Send + Sync + 'static {
    /// Records one gate evaluation by decision kind and redirect reason
    /// (`"none"` for pass-through).
    fn record_gate_decision(&self, decision: &str, reason: &str);
}

/// Prometheus metrics collector.
#[derive(Clone)]
pub struct Metrics {
    registry: Arc<Registry>,
    gate_decisions_total: IntCounterVec,
}

impl Metrics {
    /// Creates a new metrics instance with its own Prometheus registry.
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Arc::new(Registry::new());

        let gate_decisions_total = register_int_counter_vec_with_registry!(
            Opts::new(
                "storefront_gate_decisions_total",
                "Total number of gate decisions by outcome"
            ),
            &["decision", "reason"],
            registry.clone()
        )?;

        Ok(Metrics {
            registry,
            gate_decisions_total,
        })
    }

    /// Renders all metrics in Prometheus text format.
    pub fn render(&self) -> Result<String, prometheus::Error> {
        let encoder = TextEncoder::new();
        let metric_families = self.registry.gather();
        let mut buffer = Vec::new();
        encoder.encode(&metric_families, &mut buffer)?;
        String::from_utf8(buffer).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }

    #[cfg(test)]
    pub(crate) fn gate_decisions(&self, decision: &str, reason: &str) -> u64 {
        self.gate_decisions_total
            .with_label_values(&[decision, reason])
            .get()
    }
}

impl MetricsRecorder for Metrics {
    fn record_gate_decision(&self, decision: &str, reason: &str) {
        self.gate_decisions_total
            .with_label_values(&[decision, reason])
            .inc();
    }
}
