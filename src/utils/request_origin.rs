//! Origin (`scheme://host[:port]`) resolution for building short URLs.

use axum::http::{HeaderMap, Uri, header};

use crate::AppError;

const FORWARDED_PROTO: &str = "x-forwarded-proto";

/// Resolves the public origin that short URLs are built on.
///
/// A configured `base_url` always wins (trailing slashes stripped). Otherwise
/// the host is taken from the `Host` header, or from the request URI's
/// authority when there is no `Host` (HTTP/2 carries it there). The scheme
/// comes from `X-Forwarded-Proto`, then the URI scheme, when either names
/// `http` or `https`, and is `http` otherwise.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if no base URL is configured and neither
/// a usable `Host` header nor a URI authority is present.
///
/// # Examples
///
/// ```ignore
/// let mut headers = HeaderMap::new();
/// headers.insert(header::HOST, "sho.rt:8080".parse().unwrap());
///
/// let uri = Uri::from_static("/api/links/create");
/// assert_eq!(request_origin(&headers, &uri, None).unwrap(), "http://sho.rt:8080");
/// ```
pub fn request_origin(
    headers: &HeaderMap,
    uri: &Uri,
    base_url: Option<&str>,
) -> Result<String, AppError> {
    if let Some(base) = base_url {
        return Ok(base.trim_end_matches('/').to_string());
    }

    let host = match headers.get(header::HOST) {
        Some(value) => value
            .to_str()
            .map_err(|_| AppError::internal("Invalid Host header"))?,
        None => uri
            .authority()
            .map(|authority| authority.as_str())
            .ok_or_else(|| AppError::internal("Missing Host header and URI authority"))?,
    };

    let scheme = headers
        .get(FORWARDED_PROTO)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.split(',').next())
        .or_else(|| uri.scheme_str())
        .map(|v| v.trim().to_ascii_lowercase())
        .filter(|v| v == "http" || v == "https")
        .unwrap_or_else(|| "http".to_string());

    Ok(format!("{scheme}://{host}"))
}

/// Joins an origin and a short code into a short URL.
pub fn short_url(origin: &str, code: &str) -> String {
    format!("{}/{}", origin.trim_end_matches('/'), code)
}
