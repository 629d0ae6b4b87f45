//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a small API for HTTP
//! handlers.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - URL normalization, code generation and link creation
//! - [`services::redirect_service::RedirectService`] - Short code resolution and click counting

pub mod services;
