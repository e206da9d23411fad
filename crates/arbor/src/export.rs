//! Export of computed layouts to drawable formats.

pub mod svg;

use thiserror::Error;

/// Errors raised while exporting a layout.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Invalid style: {0}")]
    Style(String),
}
