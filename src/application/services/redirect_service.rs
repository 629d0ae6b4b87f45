//! Short code resolution for redirects.

use std::sync::Arc;

use tracing::{debug, error, warn};

use crate::domain::repositories::LinkRepository;
use crate::utils::code_generator::is_well_formed;

/// Where an inbound short code request should be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RedirectTarget {
    /// The stored original URL of a known code.
    Original(String),
    /// The site root, for unknown codes and for any lookup failure.
    Root,
}

/// Resolves short codes to redirect targets, counting clicks on the way.
pub struct RedirectService {
    repository: Arc<dyn LinkRepository>,
}

impl RedirectService {
    pub fn new(repository: Arc<dyn LinkRepository>) -> Self {
        Self { repository }
    }

    /// Resolves `code` to a redirect target.
    ///
    /// Unknown codes and store failures both resolve to [`RedirectTarget::Root`];
    /// callers cannot tell them apart. A failed click increment is logged and
    /// does not change the target.
    pub async fn resolve(&self, code: &str) -> RedirectTarget {
        // No generated code can match, so skip the lookup.
        if !is_well_formed(code) {
            debug!(%code, "Malformed short code");
            return RedirectTarget::Root;
        }

        let link = match self.repository.find_by_code(code).await {
            Ok(Some(link)) => link,
            Ok(None) => {
                debug!(%code, "Unknown short code");
                return RedirectTarget::Root;
            }
            Err(e) => {
                error!(%code, error = %e, "Failed to resolve short code");
                return RedirectTarget::Root;
            }
        };

        if let Err(e) = self.repository.increment_clicks(link.id).await {
            warn!(%code, id = link.id, error = %e, "Failed to count click");
        }

        RedirectTarget::Original(link.original_url)
    }
}
