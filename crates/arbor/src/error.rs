//! Error types for Arbor operations.
//!
//! This module provides the main error type [`ArborError`] which wraps
//! the error conditions that can occur while computing or exporting a
//! family tree layout.

use thiserror::Error;

use crate::config::ConfigError;

/// The main error type for Arbor operations.
///
/// Note that an empty or unknown layout root is *not* an error: the engine
/// returns an empty layout for that case so callers can render a uniform
/// "no data" state. Errors are reserved for invalid configuration and
/// failures outside the pure layout computation.
#[derive(Debug, Error)]
pub enum ArborError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<crate::export::Error> for ArborError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}
