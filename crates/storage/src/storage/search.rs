//! Full-text search over portal items.

use rusqlite::params;

use portal_core::SearchHit;

use crate::error::StorageError;

use super::{Storage, build_fts_query, log_row_error, map_search_hit, usize_to_i64};

impl Storage {
    /// FTS5 prefix search over title/description/slug, ranked by bm25.
    /// Scores are negated bm25 so that higher is better.
    pub fn search_items(&self, query: &str, limit: usize) -> Result<Vec<SearchHit>, StorageError> {
        let fts_query = build_fts_query(query);
        if fts_query.is_empty() {
            return Ok(Vec::new());
        }
        let conn = self.conn()?;
        let mut stmt = conn.prepare(
            r"SELECT i.id, v.slug, v.name, i.slug, i.title, i.description,
                     -bm25(portal_items_fts) AS score
              FROM portal_items_fts f
              JOIN portal_items i ON i.rowid = f.rowid
              JOIN verticals v ON v.id = i.vertical_id
              WHERE portal_items_fts MATCH ?1
              ORDER BY bm25(portal_items_fts)
              LIMIT ?2",
        )?;
        let hits = stmt
            .query_map(params![fts_query, usize_to_i64(limit)], map_search_hit)?
            .filter_map(log_row_error)
            .collect();
        Ok(hits)
    }
}
