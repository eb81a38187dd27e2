//! Search over the item collection.
//!
//! Two functionally equivalent strategies, both gated on a minimum query
//! length and capped at a result limit:
//! 1. [`Omnisearch`]: server-side FTS5 query through the repository
//! 2. [`rank_items`]: pure in-memory weighted substring ranking, for
//!    callers that already hold the item collection

mod ranking;

pub use ranking::{RankedItem, rank_items};

use std::sync::Arc;

use anyhow::Result;
use portal_core::{MAX_QUERY_LIMIT, MIN_QUERY_LEN, SearchHit};
use portal_storage::traits::{PortalStore, SearchStore as _};

/// High-level search facade over the repository's full-text index.
pub struct Omnisearch {
    storage: Arc<dyn PortalStore>,
}

impl Omnisearch {
    #[must_use]
    pub fn new(storage: Arc<dyn PortalStore>) -> Self {
        Self { storage }
    }

    /// Full-text search across every vertical.
    ///
    /// Queries shorter than [`MIN_QUERY_LEN`] characters return an empty
    /// result set, not an error. The limit is capped at
    /// [`MAX_QUERY_LIMIT`].
    pub async fn search(&self, query: &str, limit: usize) -> Result<Vec<SearchHit>> {
        let query = query.trim();
        if query.chars().count() < MIN_QUERY_LEN {
            return Ok(Vec::new());
        }
        let capped = limit.min(MAX_QUERY_LIMIT);
        Ok(self.storage.search_items(query, capped).await?)
    }
}
