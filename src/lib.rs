//! Library exports for storefront-gate, shared between the binary and tests.

pub mod breadcrumbs;
pub mod config;
pub mod gate;
pub mod metrics;
pub mod routes;
pub mod session;
pub mod startup;
pub mod state;
pub mod utils;
