//! Error types for layout, tokens, assets and configuration

use std::path::{Path, PathBuf};

use brandkit_ast::ModelError;
use thiserror::Error;

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;

/// Layout configuration errors
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// A grid was asked for zero columns
    #[error("Grid must have at least one column")]
    InvalidColumns,

    /// A row of cells is wider than the space it is placed in
    #[error("Grid row needs {required}pt but only {available}pt are available")]
    GridOverflow { required: i64, available: i64 },

    /// Gradient stops cannot tile the target width
    #[error("Invalid gradient '{name}': {reason}")]
    InvalidGradient { name: String, reason: String },

    /// Table rows do not match the column list
    #[error("Invalid table: {reason}")]
    InvalidTable { reason: String },
}

impl LayoutError {
    /// Create an invalid gradient error
    pub fn invalid_gradient(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidGradient {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid table error
    pub fn invalid_table(reason: impl Into<String>) -> Self {
        Self::InvalidTable {
            reason: reason.into(),
        }
    }

    /// Get the error code for diagnostics
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidColumns => "LAYOUT001",
            Self::GridOverflow { .. } => "LAYOUT002",
            Self::InvalidGradient { .. } => "LAYOUT003",
            Self::InvalidTable { .. } => "LAYOUT004",
        }
    }
}

/// Errors loading the brand token file
#[derive(Error, Debug)]
pub enum TokenError {
    /// The token file does not exist
    #[error("Token file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// The token file is not the expected JSON shape
    #[error("Malformed token file {}: {reason}", path.display())]
    Malformed { path: PathBuf, reason: String },

    /// A token value is not a hex color
    #[error("Token '{key}' has invalid color value '{value}'")]
    InvalidValue { key: String, value: String },

    /// I/O error while reading
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl TokenError {
    /// Create a not found error
    pub fn not_found(path: impl AsRef<Path>) -> Self {
        Self::NotFound {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Create a malformed file error
    pub fn malformed(path: impl AsRef<Path>, reason: impl Into<String>) -> Self {
        Self::Malformed {
            path: path.as_ref().to_path_buf(),
            reason: reason.into(),
        }
    }

    /// Create an invalid value error
    pub fn invalid_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidValue {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Get the error code for diagnostics
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "TOKEN001",
            Self::Malformed { .. } => "TOKEN002",
            Self::InvalidValue { .. } => "TOKEN003",
            Self::Io(_) => "TOKEN004",
        }
    }
}

/// Errors loading bitmap assets
#[derive(Error, Debug)]
pub enum AssetError {
    /// A required asset does not exist
    #[error("Required asset '{name}' not found at {}", path.display())]
    Missing { name: String, path: PathBuf },

    /// The file exists but is not a supported image
    #[error("Cannot decode asset '{name}': {reason}")]
    Decode { name: String, reason: String },

    /// I/O error while reading
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AssetError {
    /// Create a missing asset error
    pub fn missing(name: impl Into<String>, path: impl AsRef<Path>) -> Self {
        Self::Missing {
            name: name.into(),
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Create a decode error
    pub fn decode(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Decode {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Get the error code for diagnostics
    pub fn code(&self) -> &'static str {
        match self {
            Self::Missing { .. } => "ASSET001",
            Self::Decode { .. } => "ASSET002",
            Self::Io(_) => "ASSET003",
        }
    }
}

/// Errors loading `brandkit.toml`
#[derive(Error, Debug)]
pub enum ConfigError {
    /// An explicitly requested config file does not exist
    #[error("Config file not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// I/O error while reading
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConfigError {
    /// Create a not found error
    pub fn not_found(path: impl AsRef<Path>) -> Self {
        Self::NotFound {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Get the error code for diagnostics
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "CONFIG001",
            Self::Toml(_) => "CONFIG002",
            Self::Io(_) => "CONFIG003",
        }
    }
}

/// Any error raised while building a brand kit layout
#[derive(Error, Debug)]
pub enum CoreError {
    #[error(transparent)]
    Model(#[from] ModelError),

    #[error(transparent)]
    Layout(#[from] LayoutError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    Asset(#[from] AssetError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl CoreError {
    /// Get the error code of the wrapped error
    pub fn code(&self) -> &'static str {
        match self {
            Self::Model(e) => e.code(),
            Self::Layout(e) => e.code(),
            Self::Token(e) => e.code(),
            Self::Asset(e) => e.code(),
            Self::Config(e) => e.code(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_error_messages() {
        let err = LayoutError::GridOverflow {
            required: 600,
            available: 487,
        };
        assert_eq!(
            err.to_string(),
            "Grid row needs 600pt but only 487pt are available"
        );
        assert_eq!(err.code(), "LAYOUT002");
        assert_eq!(LayoutError::InvalidColumns.code(), "LAYOUT001");
    }

    #[test]
    fn test_core_error_keeps_code() {
        let err: CoreError = LayoutError::invalid_gradient("Hero", "no stops").into();
        assert_eq!(err.code(), "LAYOUT003");
        assert!(err.to_string().contains("Hero"));

        let err: CoreError = TokenError::not_found("brand-tokens.json").into();
        assert_eq!(err.code(), "TOKEN001");
        assert!(err.to_string().contains("brand-tokens.json"));
    }

    #[test]
    fn test_asset_missing_message() {
        let err = AssetError::missing("logo", "/tmp/logo.png");
        assert_eq!(err.code(), "ASSET001");
        assert!(err.to_string().contains("/tmp/logo.png"));
    }
}
