//! Shared application state.

use std::sync::Arc;

use crate::application::services::{LinkService, RedirectService};
use crate::domain::repositories::LinkRepository;
use crate::utils::code_generator::ShortCodeGenerator;

/// Shared state injected into every handler.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    pub redirect_service: Arc<RedirectService>,
    /// Public origin for short URLs; derived from the request when `None`.
    pub base_url: Option<String>,
}

impl AppState {
    /// Wires both services to a single repository.
    pub fn new(
        repository: Arc<dyn LinkRepository>,
        generator: ShortCodeGenerator,
        base_url: Option<String>,
    ) -> Self {
        Self {
            link_service: Arc::new(LinkService::new(repository.clone(), generator)),
            redirect_service: Arc::new(RedirectService::new(repository)),
            base_url,
        }
    }
}
