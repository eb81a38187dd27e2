//! Typed error enum for the service layer.
//!
//! Unifies storage and normalization failures into a single error type,
//! enabling callers to match on specific failure modes instead of
//! downcasting opaque `anyhow::Error` boxes.

use portal_core::CoreError;
use portal_storage::StorageError;
use thiserror::Error;

/// Service-layer error unifying storage and core failures.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Storage operation failed (DB, not found, partial batch, etc.).
    #[error("storage: {0}")]
    Storage(#[from] StorageError),

    /// Normalization or domain-level failure.
    #[error("core: {0}")]
    Core(#[from] CoreError),

    /// Requested entity does not exist. A displayable absence, not a crash.
    #[error("not found: {entity} '{id}'")]
    NotFound { entity: &'static str, id: String },

    /// Caller provided invalid input (empty query, bad slug).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Search operation failed (wraps anyhow from search crate).
    #[error("search: {0}")]
    Search(#[source] anyhow::Error),
}

impl ServiceError {
    /// Whether this error represents a not-found condition.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::NotFound { .. } | Self::Storage(StorageError::NotFound { .. })
        )
    }

    /// Whether some rows of a batch were rejected.
    #[must_use]
    pub fn is_partial_batch(&self) -> bool {
        matches!(self, Self::Storage(StorageError::PartialBatch { .. }))
    }
}
