//! URL normalization for submitted links.
//!
//! Input is trimmed, given an `http://` scheme when it lacks an HTTP(S) one,
//! and then checked by parsing it as an absolute URL. The checked string is
//! what gets stored; the parser's re-serialization is not used, so
//! `example.com` becomes `http://example.com` with no trailing slash added.

use regex::Regex;
use std::sync::LazyLock;
use url::Url;

/// Matches an `http://` or `https://` prefix in any letter case.
static HTTP_SCHEME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)^https?://").expect("valid scheme regex"));

const DEFAULT_SCHEME_PREFIX: &str = "http://";

/// Errors that can occur during URL normalization.
///
/// The display strings are returned verbatim to API clients.
#[derive(Debug, thiserror::Error)]
pub enum UrlNormalizationError {
    #[error("URL é obrigatória")]
    Missing,

    #[error("URL inválida")]
    Invalid(#[source] url::ParseError),
}

/// Normalizes a user-submitted URL.
///
/// # Errors
///
/// Returns [`UrlNormalizationError::Missing`] for empty or whitespace-only input.
/// Returns [`UrlNormalizationError::Invalid`] when the prefixed string does not
/// parse as an absolute URL.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(normalize_url("  example.com ").unwrap(), "http://example.com");
/// assert_eq!(normalize_url("HTTPS://x.io/a").unwrap(), "HTTPS://x.io/a");
/// ```
pub fn normalize_url(input: &str) -> Result<String, UrlNormalizationError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(UrlNormalizationError::Missing);
    }

    let normalized = if HTTP_SCHEME_REGEX.is_match(trimmed) {
        trimmed.to_string()
    } else {
        format!("{DEFAULT_SCHEME_PREFIX}{trimmed}")
    };

    Url::parse(&normalized).map_err(UrlNormalizationError::Invalid)?;

    Ok(normalized)
}
