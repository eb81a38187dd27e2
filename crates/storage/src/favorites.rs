//! File-backed favorites store.
//!
//! The localStorage analogue: one JSON array under a well-known file in the
//! data directory. Single writer, last-write-wins; concurrent processes are
//! not synchronized, matching the browser-profile model it replaces.

use std::fs;
use std::path::{Path, PathBuf};

use portal_core::{FAVORITES_FILE, Favorite, FavoriteStore, ItemKind, Result};

#[derive(Debug, Clone)]
pub struct JsonFavorites {
    path: PathBuf,
}

impl JsonFavorites {
    /// Store favorites under `dir` (created if missing).
    pub fn new(dir: &Path) -> Result<Self> {
        fs::create_dir_all(dir)?;
        Ok(Self { path: dir.join(FAVORITES_FILE) })
    }

    fn read(&self) -> Result<Vec<Favorite>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let raw = fs::read_to_string(&self.path)?;
        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&raw)?)
    }

    fn write(&self, favorites: &[Favorite]) -> Result<()> {
        fs::write(&self.path, serde_json::to_string_pretty(favorites)?)?;
        Ok(())
    }
}

impl FavoriteStore for JsonFavorites {
    fn list(&self) -> Result<Vec<Favorite>> {
        self.read()
    }

    fn list_by_kind(&self, kind: ItemKind) -> Result<Vec<Favorite>> {
        Ok(self.read()?.into_iter().filter(|f| f.kind == kind).collect())
    }

    fn add(&self, favorite: &Favorite) -> Result<bool> {
        let mut favorites = self.read()?;
        if favorites.iter().any(|f| f.id == favorite.id) {
            return Ok(false);
        }
        favorites.push(favorite.clone());
        self.write(&favorites)?;
        Ok(true)
    }

    fn remove(&self, id: &str) -> Result<bool> {
        let mut favorites = self.read()?;
        let before = favorites.len();
        favorites.retain(|f| f.id != id);
        if favorites.len() == before {
            return Ok(false);
        }
        self.write(&favorites)?;
        Ok(true)
    }

    fn contains(&self, id: &str) -> Result<bool> {
        Ok(self.read()?.iter().any(|f| f.id == id))
    }

    fn count(&self) -> Result<usize> {
        Ok(self.read()?.len())
    }

    fn clear(&self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}
