use std::io;
use std::result::Result as StdResult;

use thiserror::Error;

/// Errors that can occur in the portal core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// A raw price/number string does not match the expected locale pattern.
    /// Fails normalization of the single record carrying it, never the batch.
    #[error("malformed numeric field '{field}': {value:?}")]
    MalformedNumericField { field: &'static str, value: String },

    #[error("unknown item kind: {0}")]
    UnknownItemKind(String),

    #[error("unknown trend: {0}")]
    UnknownTrend(String),

    #[error("unknown tarja: {0}")]
    UnknownTarja(String),

    #[error("unknown capability: {0}")]
    UnknownCapability(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = StdResult<T, CoreError>;
