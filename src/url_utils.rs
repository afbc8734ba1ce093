//! URL utilities for turning document and stylesheet references into
//! fetchable absolute URLs.

use url::Url;

/// Check if a string is a valid absolute http(s) URL.
///
/// # Returns
/// * `(is_absolute, parsed_url)` - Whether the URL is absolute and the parsed URL if valid
#[must_use]
pub fn is_absolute_url(s: &str) -> (bool, Option<Url>) {
    let s = s.trim();

    if s.is_empty() {
        return (false, None);
    }

    if !s.starts_with("http://") && !s.starts_with("https://") {
        return (false, None);
    }

    match Url::parse(s) {
        Ok(url) => {
            if url.host().is_some() {
                (true, Some(url))
            } else {
                (false, None)
            }
        }
        Err(_) => (false, None),
    }
}

/// Make a reference fetchable by prefixing a scheme where one is missing.
///
/// * `//host/path` (scheme-relative) gets `scheme:` prepended.
/// * A bare `host/path` with no scheme gets `scheme://` prepended.
/// * An already-absolute URL passes through unchanged.
#[must_use]
pub fn ensure_scheme(reference: &str, scheme: &str) -> String {
    let reference = reference.trim();

    if let Some(rest) = reference.strip_prefix("//") {
        return format!("{scheme}://{rest}");
    }

    if reference.contains("://") {
        return reference.to_string();
    }

    format!("{scheme}://{reference}")
}

/// Resolve a stylesheet href into a fetchable URL.
///
/// With a base URL (the page the document came from), relative hrefs are
/// joined against it; without one, the scheme-prefix rule applies with a
/// default of `http`.
#[must_use]
pub fn resolve_href(href: &str, base: Option<&Url>) -> String {
    let href = href.trim();

    let (is_abs, _) = is_absolute_url(href);
    if is_abs {
        return href.to_string();
    }

    if let Some(base) = base {
        if let Ok(resolved) = base.join(href) {
            return resolved.to_string();
        }
    }

    ensure_scheme(href, "http")
}
