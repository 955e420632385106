//! Error types for record-store access.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The store rejected or failed a search.
    #[error("record store query failed: {message}")]
    Query { message: String },

    #[error("failed to read record file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid record JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("record file must be a JSON array of objects: {message}")]
    Format { message: String },
}

impl StoreError {
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, StoreError>;
