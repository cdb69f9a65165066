//! Error types for PDF generation

use thiserror::Error;

/// Result type for PDF operations
pub type Result<T> = std::result::Result<T, PdfError>;

/// Errors that can occur during PDF generation
#[derive(Error, Debug)]
pub enum PdfError {
    /// Typst compilation error
    #[error("Typst compilation failed: {0}")]
    Compilation(String),

    /// PDF export error
    #[error("PDF export failed: {0}")]
    Export(String),

    /// Font loading error
    #[error("Font error: {0}")]
    Font(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl PdfError {
    /// Get the error code for diagnostics
    pub fn code(&self) -> &'static str {
        match self {
            Self::Compilation(_) => "PDF001",
            Self::Export(_) => "PDF002",
            Self::Font(_) => "PDF003",
            Self::Io(_) => "PDF004",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(PdfError::Compilation("x".into()).code(), "PDF001");
        assert_eq!(PdfError::Font("missing".into()).code(), "PDF003");
        let io = PdfError::from(std::io::Error::other("disk"));
        assert_eq!(io.code(), "PDF004");
        assert!(io.to_string().contains("disk"));
    }
}
