//! Error types for snapshot acquisition.

use std::io;

use thiserror::Error;

/// Errors raised while obtaining a family snapshot.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Snapshot parse error: {0}")]
    Json(#[from] serde_json::Error),
}
