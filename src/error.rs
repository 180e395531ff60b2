//! Error types for sampling and export.

use thiserror::Error;

/// Errors raised while building a painting or writing its outputs.
#[derive(Error, Debug)]
pub enum BenDayError {
    /// Input that the geometry cannot work with (empty collections, bad dimensions)
    #[error("Precondition failed: {0}")]
    Precondition(String),

    /// I/O error while writing an output file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Raster encoding error
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// DXF serialization error
    #[error("DXF error: {0}")]
    Dxf(#[from] dxf::DxfError),
}

impl BenDayError {
    pub(crate) fn precondition(message: impl Into<String>) -> Self {
        Self::Precondition(message.into())
    }
}

pub type Result<T> = std::result::Result<T, BenDayError>;
