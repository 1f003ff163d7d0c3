//! Error types for ghoster-color

use thiserror::Error;

/// Errors that can occur during color processing operations
#[derive(Debug, Error)]
pub enum ColorError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] ghoster_core::Error),

    /// Fill color string is not `#` followed by 6 hex digits
    #[error("invalid color format: expected \"#RRGGBB\", got {0:?}")]
    InvalidColorFormat(String),
}

/// Result type for color operations
pub type ColorResult<T> = Result<T, ColorError>;
