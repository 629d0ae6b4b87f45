//! In-process implementation of link repository.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use std::sync::atomic::{AtomicI64, Ordering};

use crate::domain::entities::{NewShortLink, ShortLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;

/// Short links held in memory, keyed by code.
///
/// Code uniqueness is checked and claimed under the map's shard lock, and
/// click increments mutate the entry in place, so both are atomic with respect
/// to concurrent callers. Contents are lost when the process exits.
#[derive(Debug)]
pub struct MemoryLinkRepository {
    links: DashMap<String, ShortLink>,
    codes_by_id: DashMap<i64, String>,
    next_id: AtomicI64,
}

impl MemoryLinkRepository {
    pub fn new() -> Self {
        Self {
            links: DashMap::new(),
            codes_by_id: DashMap::new(),
            next_id: AtomicI64::new(1),
        }
    }

    /// Number of stored links.
    pub fn len(&self) -> usize {
        self.links.len()
    }

    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }
}

impl Default for MemoryLinkRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl LinkRepository for MemoryLinkRepository {
    async fn find_by_code(&self, code: &str) -> Result<Option<ShortLink>, AppError> {
        Ok(self.links.get(code).map(|link| link.clone()))
    }

    async fn create(&self, new_link: NewShortLink) -> Result<ShortLink, AppError> {
        match self.links.entry(new_link.code) {
            Entry::Occupied(entry) => Err(AppError::conflict(format!(
                "Short code '{}' already exists",
                entry.key()
            ))),
            Entry::Vacant(entry) => {
                let id = self.next_id.fetch_add(1, Ordering::Relaxed);
                let link = ShortLink::new(
                    id,
                    entry.key().clone(),
                    new_link.original_url,
                    0,
                    Utc::now(),
                );
                self.codes_by_id.insert(id, link.code.clone());
                entry.insert(link.clone());
                Ok(link)
            }
        }
    }

    async fn increment_clicks(&self, id: i64) -> Result<(), AppError> {
        let Some(code) = self.codes_by_id.get(&id).map(|c| c.clone()) else {
            return Ok(());
        };

        if let Some(mut link) = self.links.get_mut(&code) {
            link.clicks += 1;
        }

        Ok(())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}
