//! Short link entity mapping a short code to its original URL.

use chrono::{DateTime, Utc};

/// A stored short link.
///
/// `code` and `original_url` never change after creation; `clicks` only grows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortLink {
    pub id: i64,
    pub code: String,
    pub original_url: String,
    pub clicks: i64,
    pub created_at: DateTime<Utc>,
}

impl ShortLink {
    /// Creates a new ShortLink instance.
    pub fn new(
        id: i64,
        code: String,
        original_url: String,
        clicks: i64,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            code,
            original_url,
            clicks,
            created_at,
        }
    }
}

/// Input data for creating a new short link.
///
/// The store assigns `id`, `created_at` and a zero click count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShortLink {
    pub code: String,
    pub original_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_link_creation() {
        let now = Utc::now();
        let link = ShortLink::new(
            1,
            "aB3dE".to_string(),
            "http://example.com".to_string(),
            0,
            now,
        );

        assert_eq!(link.id, 1);
        assert_eq!(link.code, "aB3dE");
        assert_eq!(link.original_url, "http://example.com");
        assert_eq!(link.clicks, 0);
        assert_eq!(link.created_at, now);
    }

    #[test]
    fn test_new_short_link_creation() {
        let new_link = NewShortLink {
            code: "xyz78".to_string(),
            original_url: "https://rust-lang.org".to_string(),
        };

        assert_eq!(new_link.code, "xyz78");
        assert_eq!(new_link.original_url, "https://rust-lang.org");
    }
}
