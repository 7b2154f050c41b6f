//! Axum middleware applying the gate to live requests.

use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::header::LOCATION;
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use tracing::{debug, info};

use super::decision::{RedirectReason, RequestContext, RoutingDecision};
use crate::metrics::MetricsRecorder;
use crate::state::AppState;
use crate::utils::http_helpers::HTTPError;

/// Evaluates the gate for the request and either answers with a
/// `307 Temporary Redirect` or forwards to the inner service.
pub async fn gate(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let ctx = RequestContext::from_request(request.uri(), request.headers());
    let decision = state.rules.evaluate(&ctx);

    match &decision {
        RoutingDecision::PassThrough => {
            debug!(path = %ctx.path, "gate pass-through");
            state.metrics.record_gate_decision(decision.kind(), "none");
            next.run(request).await
        }
        RoutingDecision::RedirectTo { reason, .. } => {
            state
                .metrics
                .record_gate_decision(decision.kind(), reason.as_str());
            match redirect_response(&decision, *reason, request.uri().query()) {
                Ok(response) => {
                    info!(
                        path = %ctx.path,
                        reason = reason.as_str(),
                        "gate redirect"
                    );
                    response
                }
                Err(e) => e.into_response(),
            }
        }
    }
}

/// Builds the redirect response. Locale redirects keep the original query
/// string; auth redirects only carry the return parameter.
fn redirect_response(
    decision: &RoutingDecision,
    reason: RedirectReason,
    original_query: Option<&str>,
) -> Result<Response, HTTPError> {
    let mut location = decision.location().ok_or_else(|| {
        HTTPError::new(StatusCode::INTERNAL_SERVER_ERROR, "redirect without target")
    })?;

    if reason == RedirectReason::LocaleNormalization {
        if let Some(query) = original_query.filter(|q| !q.is_empty()) {
            location.push('?');
            location.push_str(query);
        }
    }

    Response::builder()
        .status(StatusCode::TEMPORARY_REDIRECT)
        .header(LOCATION, location)
        .body(Body::empty())
        .map_err(|e| HTTPError::new(StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
}
