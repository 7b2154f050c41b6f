//! Edge routing gate.
//!
//! Runs once per inbound request before any page renders and decides between
//! locale-prefix normalization, a login redirect for protected paths, or
//! pass-through. Evaluation is pure: [`GateRules::evaluate`] reads a
//! [`RequestContext`] and returns a [`RoutingDecision`], nothing else.

pub mod decision;
pub mod middleware;
pub mod rules;

pub use decision::{RedirectReason, RequestContext, RoutingDecision};
pub use rules::{GateRules, Rule};
