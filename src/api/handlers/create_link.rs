//! Handler for the link creation endpoint.

use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::{HeaderMap, Uri},
};
use tracing::error;

use crate::api::dto::create_link::{CreateLinkRequest, CreateLinkResponse};
use crate::error::{AppError, CREATE_LINK_FAILED};
use crate::state::AppState;
use crate::utils::request_origin::{request_origin, short_url};
use crate::utils::url_normalizer::normalize_url;

/// Creates a short link for a submitted URL.
///
/// # Endpoint
///
/// `POST /api/links/create`
///
/// # Request Body
///
/// ```json
/// { "url": "example.com" }
/// ```
///
/// # Response
///
/// ```json
/// {
///   "shortUrl": "http://localhost:3000/aB3dE",
///   "code": "aB3dE",
///   "originalUrl": "http://example.com"
/// }
/// ```
///
/// # Errors
///
/// - 400 `{"error": "URL é obrigatória"}` if `url` is absent, null or blank
/// - 400 `{"error": "URL inválida"}` if the normalized URL does not parse
/// - 500 `{"error": "Erro ao criar link"}` for anything else, including a
///   body that is not JSON or a non-string `url`
///
/// The body is parsed regardless of `Content-Type`. A missing or invalid
/// `url` is reported even when the public origin cannot be resolved, and no
/// link is stored in that case.
pub async fn create_link_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    uri: Uri,
    body: Bytes,
) -> Result<Json<CreateLinkResponse>, AppError> {
    let payload: CreateLinkRequest = serde_json::from_slice(&body).map_err(|e| {
        error!(error = %e, "Unreadable link creation body");
        AppError::internal(CREATE_LINK_FAILED)
    })?;

    let raw_url = payload.url.unwrap_or_default();

    let origin = match request_origin(&headers, &uri, state.base_url.as_deref()) {
        Ok(origin) => origin,
        Err(e) => {
            // Input errors are reported ahead of an unresolvable origin.
            normalize_url(&raw_url)?;
            return Err(create_failure(e));
        }
    };

    let link = state
        .link_service
        .create_short_link(&raw_url)
        .await
        .map_err(create_failure)?;

    Ok(Json(CreateLinkResponse {
        short_url: short_url(&origin, &link.code),
        code: link.code,
        original_url: link.original_url,
    }))
}

/// Passes validation errors through and collapses everything else into the
/// generic creation failure.
fn create_failure(e: AppError) -> AppError {
    if e.is_validation() {
        return e;
    }

    error!(error = %e, "Failed to create short link");
    AppError::internal(CREATE_LINK_FAILED)
}
