//! Error types for PPTX generation.

use thiserror::Error;

/// Result type for PPTX operations
pub type Result<T> = std::result::Result<T, PptxError>;

/// Errors that can occur during PPTX generation
#[derive(Error, Debug)]
pub enum PptxError {
    /// Layout cannot be expressed as a deck
    #[error("Invalid layout: {reason}")]
    InvalidLayout { reason: String },

    /// A generated or inspected package part is malformed
    #[error("Invalid package part '{part}': {reason}")]
    InvalidPart { part: String, reason: String },

    /// XML generation or parsing error
    #[error("XML error: {0}")]
    XmlError(#[from] quick_xml::Error),

    /// ZIP archive error
    #[error("Archive error: {0}")]
    ZipError(#[from] zip::result::ZipError),

    /// I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl PptxError {
    /// Create an invalid layout error
    pub fn invalid_layout(reason: impl Into<String>) -> Self {
        Self::InvalidLayout {
            reason: reason.into(),
        }
    }

    /// Create an invalid part error
    pub fn invalid_part(part: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidPart {
            part: part.into(),
            reason: reason.into(),
        }
    }

    /// Get the error code for diagnostics
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidLayout { .. } => "PPTX001",
            Self::InvalidPart { .. } => "PPTX002",
            Self::XmlError(_) => "PPTX007",
            Self::ZipError(_) => "PPTX008",
            Self::IoError(_) => "PPTX009",
        }
    }
}
