//! Async trait implementations for SQLite `Storage` via `spawn_blocking`.

use async_trait::async_trait;

use portal_core::{ItemOrder, PortalItem, SearchHit, Vertical};

use crate::Storage;
use crate::error::StorageError;
use crate::traits::{ItemStore, SearchStore, VerticalStore};

/// Helper: run a blocking closure on the tokio blocking pool.
async fn blocking<F, T>(f: F) -> Result<T, StorageError>
where
    F: FnOnce() -> Result<T, StorageError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| StorageError::Runtime(format!("spawn_blocking join error: {e}")))?
}

/// Body-generating macro for async-to-blocking delegation.
///
/// Each argument is annotated with a capture kind:
/// - `@ref arg`      — `.clone()` a `&T`, pass as `&arg`
/// - `@str arg`      — `.to_owned()` a `&str`, pass as `&arg`
/// - `@opt_str arg`  — `.map(ToOwned::to_owned)` an `Option<&str>`, pass as `arg.as_deref()`
/// - `@slice arg`    — `.to_vec()` a `&[T]`, pass as `&arg`
/// - `@val arg`      — move directly (Copy/owned types)
macro_rules! delegate {
    ($self:ident, $method:ident $(, @$kind:ident $arg:ident)*) => {{
        let s = $self.clone();
        $(delegate!(@capture $kind $arg);)*
        blocking(move || s.$method($(delegate!(@pass $kind $arg)),*)).await
    }};
    (@capture ref $arg:ident) => { let $arg = $arg.clone(); };
    (@capture str $arg:ident) => { let $arg = $arg.to_owned(); };
    (@capture opt_str $arg:ident) => { let $arg = $arg.map(ToOwned::to_owned); };
    (@capture slice $arg:ident) => { let $arg = $arg.to_vec(); };
    (@capture val $arg:ident) => { };
    (@pass ref $arg:ident) => { &$arg };
    (@pass str $arg:ident) => { &$arg };
    (@pass opt_str $arg:ident) => { $arg.as_deref() };
    (@pass slice $arg:ident) => { &$arg };
    (@pass val $arg:ident) => { $arg };
}

// ── VerticalStore ────────────────────────────────────────────────

#[async_trait]
impl VerticalStore for Storage {
    async fn upsert_vertical(&self, vertical: &Vertical) -> Result<String, StorageError> {
        delegate!(self, upsert_vertical, @ref vertical)
    }
    async fn get_vertical_by_slug(&self, slug: &str) -> Result<Option<Vertical>, StorageError> {
        delegate!(self, get_vertical_by_slug, @str slug)
    }
    async fn list_verticals(&self) -> Result<Vec<Vertical>, StorageError> {
        delegate!(self, list_verticals)
    }
}

// ── ItemStore ────────────────────────────────────────────────────

#[async_trait]
impl ItemStore for Storage {
    async fn upsert_items(
        &self,
        vertical_id: &str,
        items: &[PortalItem],
    ) -> Result<usize, StorageError> {
        delegate!(self, upsert_items, @str vertical_id, @slice items)
    }
    async fn get_item_by_slug(
        &self,
        vertical: Option<&str>,
        slug: &str,
    ) -> Result<Option<PortalItem>, StorageError> {
        delegate!(self, get_item_by_slug, @opt_str vertical, @str slug)
    }
    async fn list_items(
        &self,
        vertical_slug: &str,
        limit: usize,
        order: ItemOrder,
    ) -> Result<Vec<PortalItem>, StorageError> {
        delegate!(self, list_items, @str vertical_slug, @val limit, @val order)
    }
}

// ── SearchStore ──────────────────────────────────────────────────

#[async_trait]
impl SearchStore for Storage {
    async fn search_items(
        &self,
        query: &str,
        limit: usize,
    ) -> Result<Vec<SearchHit>, StorageError> {
        delegate!(self, search_items, @str query, @val limit)
    }
}
