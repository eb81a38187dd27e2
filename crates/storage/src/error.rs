//! Typed error enum for the storage layer.
//!
//! Callers match on specific failure modes (not found, duplicate, partial
//! batch) instead of downcasting opaque boxes. A vertical with zero items is
//! an empty `Ok` result, never an error.

use serde::Serialize;
use thiserror::Error;

/// One row that failed during a batch upsert.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct BatchFailure {
    pub slug: String,
    pub reason: String,
}

/// Storage-layer error with variants covering every expected failure mode.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Row not found for expected-present entity.
    #[error("not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: String },

    /// Unique constraint violation outside an upsert conflict target.
    #[error("duplicate: {0}")]
    Duplicate(String),

    /// Some rows of a batch upsert failed; the rest were persisted.
    #[error("partial batch failure: {} of {} rows failed", failures.len(), failures.len() + upserted)]
    PartialBatch { upserted: usize, failures: Vec<BatchFailure> },

    /// SQL / connection failure.
    #[error("database error: {0}")]
    Database(#[source] rusqlite::Error),

    /// Connection pool failure.
    #[error("pool error: {0}")]
    Pool(String),

    /// Async runtime failure (join error from `spawn_blocking`).
    #[error("runtime error: {0}")]
    Runtime(String),

    /// Row data could not be deserialized into a domain type.
    #[error("data corruption: {context}")]
    DataCorruption {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Migration failure.
    #[error("migration error: {0}")]
    Migration(String),
}

impl StorageError {
    /// Whether this error is a not-found condition.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Whether this error is a unique-constraint violation.
    #[must_use]
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate(_))
    }
}

/// Custom `From<rusqlite::Error>` — NOT blanket `#[from]`.
///
/// - `QueryReturnedNoRows` → `NotFound` (generic; callers remap with entity context)
/// - constraint violations → `Duplicate`
/// - everything else → `Database`
impl From<rusqlite::Error> for StorageError {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::QueryReturnedNoRows => {
                Self::NotFound { entity: "row", id: "unknown".into() }
            },
            rusqlite::Error::SqliteFailure(e, msg)
                if e.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                Self::Duplicate(
                    msg.clone().unwrap_or_else(|| "constraint violation".to_owned()),
                )
            },
            _ => Self::Database(err),
        }
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        Self::DataCorruption {
            context: "JSON serialization/deserialization".to_owned(),
            source: Box::new(err),
        }
    }
}
