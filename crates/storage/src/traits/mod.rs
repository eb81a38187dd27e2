//! Storage trait abstraction
//!
//! Async domain traits over the repository, enabling mocking and
//! backend-agnostic callers. The SQLite `Storage` implements them via
//! `spawn_blocking` in `async_store`.

use async_trait::async_trait;

use portal_core::{ItemOrder, PortalItem, SearchHit, Vertical};

use crate::error::StorageError;

/// Vertical declarations.
#[async_trait]
pub trait VerticalStore: Send + Sync {
    /// Idempotent upsert by `slug`; returns the durable id used as the
    /// foreign key on items.
    async fn upsert_vertical(&self, vertical: &Vertical) -> Result<String, StorageError>;

    async fn get_vertical_by_slug(&self, slug: &str) -> Result<Option<Vertical>, StorageError>;

    async fn list_verticals(&self) -> Result<Vec<Vertical>, StorageError>;
}

/// Item reads and writes.
#[async_trait]
pub trait ItemStore: Send + Sync {
    /// Idempotent batch upsert keyed by `(vertical_id, slug)`. Per-row
    /// failures surface as [`StorageError::PartialBatch`].
    async fn upsert_items(
        &self,
        vertical_id: &str,
        items: &[PortalItem],
    ) -> Result<usize, StorageError>;

    async fn get_item_by_slug(
        &self,
        vertical: Option<&str>,
        slug: &str,
    ) -> Result<Option<PortalItem>, StorageError>;

    async fn list_items(
        &self,
        vertical_slug: &str,
        limit: usize,
        order: ItemOrder,
    ) -> Result<Vec<PortalItem>, StorageError>;
}

/// Full-text lookup.
#[async_trait]
pub trait SearchStore: Send + Sync {
    async fn search_items(&self, query: &str, limit: usize)
    -> Result<Vec<SearchHit>, StorageError>;
}

/// The full repository contract, for callers that hold one backend behind a
/// trait object. Blanket-implemented for any type covering all three
/// domains.
pub trait PortalStore: VerticalStore + ItemStore + SearchStore {}

impl<T: VerticalStore + ItemStore + SearchStore> PortalStore for T {}
