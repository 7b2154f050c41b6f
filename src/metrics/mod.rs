//! Metrics collection and exposition for Prometheus.
//!
//! This module provides centralized metrics recording for gate decisions.

mod recorder;

pub use recorder::{Metrics, MetricsRecorder};
