//! `SQLite` storage implementation - modular structure
//!
//! Split by domain concern. All methods are synchronous; async access goes
//! through the trait impls in `async_store`.

#![allow(
    clippy::arithmetic_side_effects,
    reason = "DB row counts and pagination are bounded by SQLite limits"
)]

mod items;
mod search;
mod verticals;

use std::path::Path;
use std::str::FromStr as _;

use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::Connection;

use portal_core::{Capability, ItemData, PortalItem, SearchHit, Vertical};

use crate::error::StorageError;
use crate::migrations;

/// Type alias for pooled connection
pub(crate) type PooledConn = PooledConnection<SqliteConnectionManager>;

/// Main storage struct wrapping `SQLite` connection pool
#[derive(Clone, Debug)]
pub struct Storage {
    pub(crate) pool: Pool<SqliteConnectionManager>,
}

/// Get a connection from the pool
pub(crate) fn get_conn(pool: &Pool<SqliteConnectionManager>) -> Result<PooledConn, StorageError> {
    pool.get().map_err(|e| StorageError::Pool(format!("failed to get connection: {e}")))
}

/// Parse JSON from string, converting error to rusqlite error
pub(crate) fn parse_json<T: serde::de::DeserializeOwned>(s: &str) -> rusqlite::Result<T> {
    serde_json::from_str(s).map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))
}

/// Log row read errors and filter them out
pub(crate) fn log_row_error<T>(result: rusqlite::Result<T>) -> Option<T> {
    match result {
        Ok(v) => Some(v),
        Err(e) => {
            tracing::warn!("Row read error: {}", e);
            None
        },
    }
}

/// Parse an RFC 3339 timestamp column
pub(crate) fn parse_timestamp(s: &str) -> rusqlite::Result<chrono::DateTime<chrono::Utc>> {
    chrono::DateTime::parse_from_rfc3339(s)
        .map(|d| d.with_timezone(&chrono::Utc))
        .map_err(|e| rusqlite::Error::ToSqlConversionFailure(Box::new(e)))
}

/// Parse the `ui_config` JSON column into capabilities, logging and skipping
/// unknown tokens instead of failing the row.
pub(crate) fn parse_capabilities(s: &str) -> rusqlite::Result<Vec<Capability>> {
    let tokens: Vec<String> = parse_json(s)?;
    Ok(tokens
        .iter()
        .filter_map(|t| match Capability::from_str(t) {
            Ok(cap) => Some(cap),
            Err(_) => {
                tracing::warn!(token = %t, "unknown capability token in ui_config, skipping");
                None
            },
        })
        .collect())
}

/// Map a database row to a `PortalItem`
/// (column order: id, slug, title, description, data, updated_at).
pub(crate) fn map_item(row: &rusqlite::Row<'_>) -> rusqlite::Result<PortalItem> {
    let data: ItemData = parse_json(&row.get::<_, String>(4)?)?;
    let updated_at = parse_timestamp(&row.get::<_, String>(5)?)?;
    Ok(PortalItem::from_parts(
        row.get(0)?,
        row.get(1)?,
        row.get(2)?,
        row.get(3)?,
        updated_at,
        data,
    ))
}

/// Map a database row to a `Vertical`
/// (column order: id, slug, name, description, ui_config).
pub(crate) fn map_vertical(row: &rusqlite::Row<'_>) -> rusqlite::Result<Vertical> {
    Ok(Vertical {
        id: row.get(0)?,
        slug: row.get(1)?,
        name: row.get(2)?,
        description: row.get(3)?,
        capabilities: parse_capabilities(&row.get::<_, String>(4)?)?,
    })
}

/// Map a database row to a `SearchHit`
/// (column order: id, vertical_slug, vertical_name, slug, title, description, score).
pub(crate) fn map_search_hit(row: &rusqlite::Row<'_>) -> rusqlite::Result<SearchHit> {
    Ok(SearchHit {
        id: row.get(0)?,
        vertical_slug: row.get(1)?,
        vertical_name: row.get(2)?,
        slug: row.get(3)?,
        title: row.get(4)?,
        description: row.get(5)?,
        score: row.get(6)?,
    })
}

/// Build FTS5 query from whitespace-separated words.
/// Each word becomes a quoted prefix match, joined with AND.
pub(crate) fn build_fts_query(query: &str) -> String {
    query
        .split_whitespace()
        .map(|word| format!("\"{}\"*", word.replace('"', "")))
        .collect::<Vec<_>>()
        .join(" AND ")
}

/// Convert `usize` to `i64` for SQL LIMIT binds.
pub(crate) fn usize_to_i64(val: usize) -> i64 {
    i64::try_from(val).unwrap_or(i64::MAX)
}

/// Connection initializer for concurrency settings
fn init_connection(conn: &mut Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(
        "PRAGMA busy_timeout = 30000;
         PRAGMA journal_mode = WAL;
         PRAGMA synchronous = NORMAL;
         PRAGMA foreign_keys = ON;",
    )?;
    Ok(())
}

fn db_pool_size() -> u32 {
    std::env::var("PORTAL_DB_POOL_SIZE").ok().and_then(|v| v.parse().ok()).unwrap_or(8)
}

impl Storage {
    /// Create new storage instance with `SQLite` connection pool
    pub fn new(db_path: &Path) -> Result<Self, StorageError> {
        let manager = SqliteConnectionManager::file(db_path).with_init(init_connection);
        let pool = Pool::builder()
            .max_size(db_pool_size())
            .build(manager)
            .map_err(|e| StorageError::Pool(format!("failed to build pool: {e}")))?;

        let conn = get_conn(&pool)?;
        migrations::run_migrations(&conn)
            .map_err(|e| StorageError::Migration(e.to_string()))?;
        drop(conn);

        tracing::info!("Storage initialized at {}", db_path.display());
        Ok(Self { pool })
    }

    pub(crate) fn conn(&self) -> Result<PooledConn, StorageError> {
        get_conn(&self.pool)
    }
}
