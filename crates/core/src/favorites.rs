//! User-scoped favorites.
//!
//! Favorites live outside the item tables: a small, client-mutable bookmark
//! list keyed by item id. The store is injected as a trait so the shipped
//! file-backed implementation can be swapped for a server-backed one without
//! touching calling code.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::item::ItemKind;

/// One saved bookmark.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Favorite {
    pub id: String,
    pub slug: String,
    #[serde(rename = "type")]
    pub kind: ItemKind,
    pub title: String,
    pub saved_at: DateTime<Utc>,
}

impl Favorite {
    /// Bookmark an item as of now.
    #[must_use]
    pub fn new(id: &str, slug: &str, kind: ItemKind, title: &str) -> Self {
        Self {
            id: id.to_owned(),
            slug: slug.to_owned(),
            kind,
            title: title.to_owned(),
            saved_at: Utc::now(),
        }
    }
}

/// Injected favorites store. Single writer, single reader, last-write-wins;
/// concurrent writers are not synchronized (matches the browser-profile
/// key-value area it replaces).
pub trait FavoriteStore: Send + Sync {
    /// All favorites, oldest first.
    fn list(&self) -> Result<Vec<Favorite>>;

    /// Favorites of one kind, oldest first.
    fn list_by_kind(&self, kind: ItemKind) -> Result<Vec<Favorite>>;

    /// Add a favorite. Returns `false` (without writing) if the id is
    /// already saved.
    fn add(&self, favorite: &Favorite) -> Result<bool>;

    /// Remove by item id. Returns `false` if the id was not saved.
    fn remove(&self, id: &str) -> Result<bool>;

    /// Whether an item id is saved.
    fn contains(&self, id: &str) -> Result<bool>;

    fn count(&self) -> Result<usize>;

    fn clear(&self) -> Result<()>;
}
