use std::collections::HashMap;

use axum::http::{HeaderMap, Uri};
use axum_extra::extract::cookie::CookieJar;
use url::form_urlencoded;

/// The per-request input to the gate: the request path and its cookies.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestContext {
    pub path: String,
    pub cookies: HashMap<String, String>,
}

impl RequestContext {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            cookies: HashMap::new(),
        }
    }

    /// Adds a cookie, mostly useful when building contexts by hand.
    pub fn with_cookie(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.cookies.insert(name.into(), value.into());
        self
    }

    /// Builds a context from the request URI and the `Cookie` headers.
    pub fn from_request(uri: &Uri, headers: &HeaderMap) -> Self {
        let cookies = CookieJar::from_headers(headers)
            .iter()
            .map(|cookie| (cookie.name().to_string(), cookie.value().to_string()))
            .collect();

        Self {
            path: uri.path().to_string(),
            cookies,
        }
    }

    /// True when the named cookie is present with a non-empty value.
    pub fn has_cookie(&self, name: &str) -> bool {
        self.cookies
            .get(name)
            .map(|value| !value.is_empty())
            .unwrap_or(false)
    }
}

/// Why the gate redirected. Used for logs and metrics only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectReason {
    LocaleNormalization,
    AuthRequired,
}

impl RedirectReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            RedirectReason::LocaleNormalization => "locale_normalization",
            RedirectReason::AuthRequired => "auth_required",
        }
    }
}

/// The gate's single output for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoutingDecision {
    PassThrough,
    RedirectTo {
        target: String,
        query: Vec<(String, String)>,
        reason: RedirectReason,
    },
}

impl RoutingDecision {
    pub fn is_pass_through(&self) -> bool {
        matches!(self, RoutingDecision::PassThrough)
    }

    /// Label for the decision kind, e.g. `"pass_through"` or `"redirect"`.
    pub fn kind(&self) -> &'static str {
        match self {
            RoutingDecision::PassThrough => "pass_through",
            RoutingDecision::RedirectTo { .. } => "redirect",
        }
    }

    /// The redirect target with its query parameters form-urlencoded, or
    /// `None` for pass-through.
    pub fn location(&self) -> Option<String> {
        match self {
            RoutingDecision::PassThrough => None,
            RoutingDecision::RedirectTo { target, query, .. } if query.is_empty() => {
                Some(target.clone())
            }
            RoutingDecision::RedirectTo { target, query, .. } => {
                let encoded = form_urlencoded::Serializer::new(String::new())
                    .extend_pairs(query.iter())
                    .finish();
                Some(format!("{}?{}", target, encoded))
            }
        }
    }
}
