//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use tracing::error;
use url::Url;

use crate::application::services::RedirectTarget;
use crate::state::AppState;

const ROOT: &str = "/";

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Behavior
///
/// - Known code: click counted, 307 to the stored URL
/// - Unknown code or store failure: 307 to `/`
///
/// This handler never returns an error status.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
) -> Response {
    let location = match state.redirect_service.resolve(&code).await {
        RedirectTarget::Original(url) => location_header(&url).unwrap_or_else(|| {
            error!(%code, %url, "Stored URL is not usable as a Location header");
            HeaderValue::from_static(ROOT)
        }),
        RedirectTarget::Root => HeaderValue::from_static(ROOT),
    };

    (StatusCode::TEMPORARY_REDIRECT, [(header::LOCATION, location)]).into_response()
}

/// Builds a `Location` value. The stored URL is sent as-is unless it holds
/// whitespace or bytes a header cannot carry, in which case the parser's
/// percent-encoded serialization is sent instead.
fn location_header(target: &str) -> Option<HeaderValue> {
    if !target.contains(char::is_whitespace) {
        if let Ok(value) = HeaderValue::from_str(target) {
            return Some(value);
        }
    }

    let encoded = Url::parse(target).ok()?;
    HeaderValue::from_str(encoded.as_str()).ok()
}
