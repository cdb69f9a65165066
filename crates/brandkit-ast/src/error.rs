//! Error types for the content model

use thiserror::Error;

/// Result type for model operations
pub type Result<T> = std::result::Result<T, ModelError>;

/// Errors raised while building model values
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModelError {
    /// A color literal is not exactly six hex digits
    #[error("Invalid hex color '{value}': expected 6 hex digits, optionally prefixed by '#'")]
    InvalidHex { value: String },
}

impl ModelError {
    /// Create an invalid hex error
    pub fn invalid_hex(value: impl Into<String>) -> Self {
        Self::InvalidHex {
            value: value.into(),
        }
    }

    /// Get the error code for diagnostics
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidHex { .. } => "MODEL001",
        }
    }
}
