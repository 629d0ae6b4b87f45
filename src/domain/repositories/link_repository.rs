//! Repository trait for short link data access.

use crate::domain::entities::{NewShortLink, ShortLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Storage contract for short links.
///
/// Implementations must enforce uniqueness of `code` themselves; callers'
/// existence checks are not atomic with [`LinkRepository::create`].
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::persistence::MemoryLinkRepository`] - In-process implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Finds a link by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Database`] or [`AppError::Internal`] if the store
    /// cannot be queried.
    async fn find_by_code(&self, code: &str) -> Result<Option<ShortLink>, AppError>;

    /// Creates a new short link with a zero click count.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the code is already taken.
    async fn create(&self, new_link: NewShortLink) -> Result<ShortLink, AppError>;

    /// Atomically increments the click counter of the link with `id`.
    ///
    /// Incrementing an unknown id is a no-op.
    async fn increment_clicks(&self, id: i64) -> Result<(), AppError>;

    /// Checks that the store is reachable.
    async fn ping(&self) -> Result<(), AppError>;
}
