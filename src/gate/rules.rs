use crate::config::GateConfig;

use super::decision::{RedirectReason, RequestContext, RoutingDecision};

/// One gate rule. [`Rule::ORDER`] is the evaluation order; the first rule
/// that produces a decision wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    LocaleNormalization,
    ProtectedPath,
}

impl Rule {
    /// Locale normalization runs before the auth check, so a locale-prefixed
    /// protected path is first stripped and only gated on the next request.
    pub const ORDER: [Rule; 2] = [Rule::LocaleNormalization, Rule::ProtectedPath];
}

/// Routing rules compiled from [`GateConfig`]. Immutable once built and
/// safe to share across requests.
#[derive(Debug, Clone)]
pub struct GateRules {
    locales: Vec<String>,
    protected_prefixes: Vec<String>,
    auth_cookie: String,
    login_path: String,
    return_param: String,
}

impl GateRules {
    pub fn new(config: &GateConfig) -> Self {
        Self {
            // An empty code or prefix would match everything.
            locales: config
                .locales
                .iter()
                .filter(|code| !code.is_empty())
                .cloned()
                .collect(),
            protected_prefixes: config
                .protected_prefixes
                .iter()
                .filter(|prefix| !prefix.is_empty())
                .cloned()
                .collect(),
            auth_cookie: config.auth_cookie.clone(),
            login_path: config.login_path.clone(),
            return_param: config.return_param.clone(),
        }
    }

    /// Evaluates every rule in [`Rule::ORDER`] and returns the first match,
    /// or [`RoutingDecision::PassThrough`].
    pub fn evaluate(&self, ctx: &RequestContext) -> RoutingDecision {
        Rule::ORDER
            .iter()
            .find_map(|rule| self.apply(*rule, ctx))
            .unwrap_or(RoutingDecision::PassThrough)
    }

    fn apply(&self, rule: Rule, ctx: &RequestContext) -> Option<RoutingDecision> {
        match rule {
            Rule::LocaleNormalization => {
                let stripped = self.strip_locale(&ctx.path)?;
                Some(RoutingDecision::RedirectTo {
                    target: stripped.to_string(),
                    query: Vec::new(),
                    reason: RedirectReason::LocaleNormalization,
                })
            }
            Rule::ProtectedPath => {
                if !self.is_protected(&ctx.path) || ctx.has_cookie(&self.auth_cookie) {
                    return None;
                }
                Some(RoutingDecision::RedirectTo {
                    target: self.login_path.clone(),
                    query: vec![(self.return_param.clone(), ctx.path.clone())],
                    reason: RedirectReason::AuthRequired,
                })
            }
        }
    }

    /// Returns the path without its leading locale segment, or `None` when the
    /// first segment is not a recognized locale. `/vi` becomes `/`.
    ///
    /// Repeated leading slashes in the remainder collapse to one, so the
    /// target can never be read as a protocol-relative URL.
    pub fn strip_locale<'a>(&self, path: &'a str) -> Option<&'a str> {
        let rest = path.strip_prefix('/')?;
        let (segment, remainder) = match rest.find('/') {
            Some(idx) => rest.split_at(idx),
            None => (rest, ""),
        };

        if !self.locales.iter().any(|code| code == segment) {
            return None;
        }

        if remainder.is_empty() {
            return Some("/");
        }

        // `remainder` starts with '/': keep only the last of its leading slashes.
        let slashes = remainder.len() - remainder.trim_start_matches('/').len();
        Some(&remainder[slashes - 1..])
    }

    /// Plain string prefix test against the configured protected prefixes.
    pub fn is_protected(&self, path: &str) -> bool {
        self.protected_prefixes
            .iter()
            .any(|prefix| path.starts_with(prefix.as_str()))
    }
}
