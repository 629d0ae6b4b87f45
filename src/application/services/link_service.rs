//! Short link creation service.

use std::sync::Arc;

use tracing::{info, warn};

use crate::domain::entities::{NewShortLink, ShortLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::{CODE_LENGTH, FALLBACK_CODE_LENGTH, ShortCodeGenerator};
use crate::utils::url_normalizer::normalize_url;

/// Maximum number of regular-length codes probed against the store.
const MAX_CODE_ATTEMPTS: usize = 10;

/// Maximum number of inserts attempted when the store reports a code conflict.
const MAX_CREATE_ATTEMPTS: usize = 3;

/// Service for creating short links.
///
/// Normalizes the submitted URL, picks a short code and persists the mapping.
pub struct LinkService {
    repository: Arc<dyn LinkRepository>,
    generator: ShortCodeGenerator,
}

impl LinkService {
    /// Creates a new link service.
    pub fn new(repository: Arc<dyn LinkRepository>, generator: ShortCodeGenerator) -> Self {
        Self {
            repository,
            generator,
        }
    }

    /// Creates a short link for a raw user-submitted URL.
    ///
    /// The store's unique constraint on `code` is authoritative: when an insert
    /// is rejected as a conflict, a new code is generated and the insert
    /// retried, up to [`MAX_CREATE_ATTEMPTS`] times.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the URL is missing or invalid.
    /// Returns [`AppError::Internal`] if every insert attempt conflicted.
    /// Propagates store errors.
    pub async fn create_short_link(&self, raw_url: &str) -> Result<ShortLink, AppError> {
        let original_url = normalize_url(raw_url)?;

        for attempt in 1..=MAX_CREATE_ATTEMPTS {
            let code = self.generate_unique_code().await?;

            let new_link = NewShortLink {
                code,
                original_url: original_url.clone(),
            };

            match self.repository.create(new_link).await {
                Ok(link) => {
                    info!(code = %link.code, original_url = %link.original_url, "Short link created");
                    return Ok(link);
                }
                Err(AppError::Conflict(reason)) => {
                    warn!(attempt, %reason, "Short code collided on insert, retrying");
                }
                Err(e) => return Err(e),
            }
        }

        Err(AppError::internal("Failed to store a unique short code"))
    }

    /// Picks a short code that is, most likely, not yet in use.
    ///
    /// Draws up to [`MAX_CODE_ATTEMPTS`] codes of length [`CODE_LENGTH`],
    /// returning the first one the store does not know. If all of them are
    /// taken, a single code of length [`FALLBACK_CODE_LENGTH`] is returned
    /// without being checked.
    ///
    /// # Errors
    ///
    /// Propagates store errors from the existence checks.
    pub async fn generate_unique_code(&self) -> Result<String, AppError> {
        for _ in 0..MAX_CODE_ATTEMPTS {
            let code = self.generator.generate(CODE_LENGTH);

            if self.repository.find_by_code(&code).await?.is_none() {
                return Ok(code);
            }
        }

        // Unchecked: only the store's unique constraint guards this code.
        let code = self.generator.generate(FALLBACK_CODE_LENGTH);
        warn!(%code, attempts = MAX_CODE_ATTEMPTS, "Code space crowded, using unchecked fallback code");
        Ok(code)
    }

    /// Reports whether the backing store is reachable.
    pub async fn health_check(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }
}
