//! Search delegation.

use std::sync::Arc;

use portal_core::SearchHit;
use portal_search::Omnisearch;
use portal_storage::traits::PortalStore;

use crate::ServiceError;

pub struct SearchService {
    search: Omnisearch,
}

impl SearchService {
    #[must_use]
    pub fn new(storage: Arc<dyn PortalStore>) -> Self {
        Self { search: Omnisearch::new(storage) }
    }

    /// Full-text search across every vertical. Sub-minimum-length queries
    /// return an empty result set.
    pub async fn search(&self, query: &str, limit: usize) -> Result<Vec<SearchHit>, ServiceError> {
        self.search.search(query, limit).await.map_err(ServiceError::Search)
    }
}
