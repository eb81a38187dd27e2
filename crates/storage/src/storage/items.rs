//! Portal item rows.

use chrono::Utc;
use rusqlite::params;

use portal_core::{ItemOrder, PortalItem};

use crate::error::{BatchFailure, StorageError};

use super::{PooledConn, Storage, log_row_error, map_item, usize_to_i64};

const ITEM_COLUMNS: &str = "i.id, i.slug, i.title, i.description, i.data, i.updated_at";

/// Update-then-insert keyed on `(vertical_id, slug)`.
///
/// Not `ON CONFLICT`: a re-ingested item carries the same deterministic id,
/// so the insert would trip the primary key alongside the conflict target
/// and SQLite rejects that instead of upserting. The existing row keeps its
/// id either way.
fn upsert_item_row(
    conn: &PooledConn,
    vertical_id: &str,
    item: &PortalItem,
) -> Result<(), StorageError> {
    let data = serde_json::to_string(&item.to_data())?;
    let updated_at = item.updated_at.with_timezone(&Utc).to_rfc3339();
    let changed = conn.execute(
        r"UPDATE portal_items
          SET title = ?3, description = ?4, data = ?5, updated_at = ?6
          WHERE vertical_id = ?1 AND slug = ?2",
        params![vertical_id, item.slug, item.title, item.description, data, updated_at],
    )?;
    if changed == 0 {
        conn.execute(
            r"INSERT INTO portal_items (id, vertical_id, slug, title, description, data, updated_at)
              VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                item.id,
                vertical_id,
                item.slug,
                item.title,
                item.description,
                data,
                updated_at,
            ],
        )?;
    }
    Ok(())
}

impl Storage {
    /// Idempotent batch upsert keyed by `(vertical_id, slug)`. Row failures
    /// are collected, not swallowed: either every row lands and the count is
    /// returned, or `PartialBatch` enumerates the failed slugs with reasons
    /// (the remaining rows are still persisted).
    pub fn upsert_items(
        &self,
        vertical_id: &str,
        items: &[PortalItem],
    ) -> Result<usize, StorageError> {
        let conn = self.conn()?;
        let mut upserted = 0;
        let mut failures = Vec::new();
        for item in items {
            match upsert_item_row(&conn, vertical_id, item) {
                Ok(()) => upserted += 1,
                Err(e) => {
                    tracing::warn!(slug = %item.slug, error = %e, "item upsert failed");
                    failures
                        .push(BatchFailure { slug: item.slug.clone(), reason: e.to_string() });
                },
            }
        }
        if failures.is_empty() {
            Ok(upserted)
        } else {
            Err(StorageError::PartialBatch { upserted, failures })
        }
    }

    /// Look up one item. With a vertical slug the lookup is exact; without
    /// one the first match across verticals wins (slugs are only unique per
    /// vertical). Absence is `Ok(None)`.
    pub fn get_item_by_slug(
        &self,
        vertical: Option<&str>,
        slug: &str,
    ) -> Result<Option<PortalItem>, StorageError> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(&format!(
            r"SELECT {ITEM_COLUMNS}
              FROM portal_items i
              JOIN verticals v ON v.id = i.vertical_id
              WHERE i.slug = ?1 AND (?2 IS NULL OR v.slug = ?2)
              ORDER BY v.slug
              LIMIT 1"
        ))?;
        let mut rows = stmt.query_map(params![slug, vertical], map_item)?;
        rows.next().transpose().map_err(Into::into)
    }

    /// Items of one vertical. An unknown vertical or an empty collection
    /// both yield an empty list.
    pub fn list_items(
        &self,
        vertical_slug: &str,
        limit: usize,
        order: ItemOrder,
    ) -> Result<Vec<PortalItem>, StorageError> {
        let order_by = match order {
            ItemOrder::Title => "i.title ASC",
            ItemOrder::RecentlyUpdated => "i.updated_at DESC",
        };
        let conn = self.conn()?;
        let mut stmt = conn.prepare(&format!(
            r"SELECT {ITEM_COLUMNS}
              FROM portal_items i
              JOIN verticals v ON v.id = i.vertical_id
              WHERE v.slug = ?1
              ORDER BY {order_by}
              LIMIT ?2"
        ))?;
        let items = stmt
            .query_map(params![vertical_slug, usize_to_i64(limit)], map_item)?
            .filter_map(log_row_error)
            .collect();
        Ok(items)
    }
}
