//! Breadcrumb trails derived from request paths.

use serde::Serialize;

/// Label used for the root crumb.
pub const HOME_LABEL: &str = "Home";

/// Label of the placeholder crumb inserted by [`truncate`].
pub const ELLIPSIS: &str = "...";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Breadcrumb {
    pub label: String,
    /// `None` for the ellipsis placeholder, which is not navigable.
    pub href: Option<String>,
}

impl Breadcrumb {
    fn link(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: Some(href.into()),
        }
    }

    fn ellipsis() -> Self {
        Self {
            label: ELLIPSIS.to_string(),
            href: None,
        }
    }
}

/// Home crumb followed by one crumb per non-empty path segment, each linking
/// to the cumulative path. Dashes in segments become spaces in labels.
pub fn from_path(path: &str) -> Vec<Breadcrumb> {
    let mut crumbs = vec![Breadcrumb::link(HOME_LABEL, "/")];
    let mut href = String::new();

    for segment in path.split('/').filter(|s| !s.is_empty()) {
        href.push('/');
        href.push_str(segment);
        crumbs.push(Breadcrumb::link(segment.replace('-', " "), href.clone()));
    }

    crumbs
}

/// Shortens a trail longer than `max` to the first crumb, an ellipsis, and
/// the last `max - 2` crumbs. With `max < 3` only the first and last remain.
pub fn truncate(crumbs: Vec<Breadcrumb>, max: usize) -> Vec<Breadcrumb> {
    if crumbs.len() <= max.max(2) {
        return crumbs;
    }

    let tail_len = max.saturating_sub(2).max(1);
    let tail_start = crumbs.len() - tail_len;
    let mut iter = crumbs.into_iter();

    let mut truncated = Vec::with_capacity(tail_len + 2);
    truncated.extend(iter.next());
    if max >= 3 {
        truncated.push(Breadcrumb::ellipsis());
    }
    truncated.extend(iter.skip(tail_start - 1));
    truncated
}
