//! Vertical rows.

use rusqlite::params;
use uuid::Uuid;

use portal_core::Vertical;

use crate::error::StorageError;

use super::{Storage, log_row_error, map_vertical};

const VERTICAL_COLUMNS: &str = "id, slug, name, description, ui_config";

impl Storage {
    /// Idempotent upsert keyed by `slug`. An existing vertical keeps its id
    /// and gets its display metadata and capability list refreshed; the
    /// durable id is returned either way.
    pub fn upsert_vertical(&self, vertical: &Vertical) -> Result<String, StorageError> {
        let conn = self.conn()?;
        let id = if vertical.id.is_empty() {
            Uuid::new_v4().to_string()
        } else {
            vertical.id.clone()
        };
        let ui_config = serde_json::to_string(&vertical.capabilities)?;
        conn.execute(
            r"INSERT INTO verticals (id, slug, name, description, ui_config)
              VALUES (?1, ?2, ?3, ?4, ?5)
              ON CONFLICT(slug) DO UPDATE SET
                  name = excluded.name,
                  description = excluded.description,
                  ui_config = excluded.ui_config",
            params![id, vertical.slug, vertical.name, vertical.description, ui_config],
        )?;
        let durable_id: String = conn.query_row(
            "SELECT id FROM verticals WHERE slug = ?1",
            params![vertical.slug],
            |row| row.get(0),
        )?;
        Ok(durable_id)
    }

    pub fn get_vertical_by_slug(&self, slug: &str) -> Result<Option<Vertical>, StorageError> {
        let conn = self.conn()?;
        let mut stmt = conn
            .prepare(&format!("SELECT {VERTICAL_COLUMNS} FROM verticals WHERE slug = ?1"))?;
        let mut rows = stmt.query_map(params![slug], map_vertical)?;
        rows.next().transpose().map_err(Into::into)
    }

    pub fn list_verticals(&self) -> Result<Vec<Vertical>, StorageError> {
        let conn = self.conn()?;
        let mut stmt =
            conn.prepare(&format!("SELECT {VERTICAL_COLUMNS} FROM verticals ORDER BY slug"))?;
        let verticals =
            stmt.query_map([], map_vertical)?.filter_map(log_row_error).collect();
        Ok(verticals)
    }
}
