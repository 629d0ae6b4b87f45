#![allow(dead_code)]

use axum::extract::Request;
use axum::routing::IntoMakeService;
use axum::{Router, ServiceExt};
use axum_test::TestServer;
use std::sync::Arc;
use tiny_link::domain::repositories::LinkRepository;
use tiny_link::infrastructure::persistence::MemoryLinkRepository;
use tiny_link::routes::app_router;
use tiny_link::state::AppState;
use tiny_link::utils::code_generator::ShortCodeGenerator;
use tower_http::normalize_path::NormalizePath;

pub const HOST: &str = "sho.rt";

pub fn create_test_state(
    repository: Arc<dyn LinkRepository>,
    seed: u64,
    base_url: Option<&str>,
) -> AppState {
    AppState::new(
        repository,
        ShortCodeGenerator::seeded(seed),
        base_url.map(str::to_string),
    )
}

/// The production router, middleware included, ready for `TestServer`.
pub fn test_router(state: AppState) -> IntoMakeService<NormalizePath<Router>> {
    ServiceExt::<Request>::into_make_service(app_router(state))
}

pub fn memory_server(seed: u64) -> (TestServer, Arc<MemoryLinkRepository>) {
    let repo = Arc::new(MemoryLinkRepository::new());
    let state = create_test_state(repo.clone(), seed, None);
    let server = TestServer::new(test_router(state)).unwrap();
    (server, repo)
}
