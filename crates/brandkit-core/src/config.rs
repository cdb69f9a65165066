//! `brandkit.toml` configuration
//!
//! Every field has a default, so an empty file (or no file at all) builds
//! the stock CredSuvidha kit from the current directory.
//!
//! ```toml
//! [identity]
//! company = "CredSuvidha"
//! domain = "www.credsuvidha.com"
//!
//! [paths]
//! asset_dir = "assets/brandkit"
//! logo = "logo.png"
//! logo_policy = "optional"
//!
//! [pdf]
//! font_files = ["fonts/Inter-Regular.ttf", "fonts/Inter-Bold.ttf"]
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::asset::AssetPolicy;
use crate::error::ConfigError;

/// File name looked up in the working directory
pub const CONFIG_FILE_NAME: &str = "brandkit.toml";

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrandkitConfig {
    pub identity: IdentityConfig,
    pub paths: PathsConfig,
    pub pdf: PdfConfig,
    pub pptx: PptxConfig,
}

impl BrandkitConfig {
    /// Parse configuration from a TOML string
    pub fn from_toml_str(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Load configuration from a file that must exist
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::not_found(path));
        }
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        debug!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Load an explicit config file, or `brandkit.toml` under `root` when
    /// present, or the defaults
    pub fn load(explicit: Option<&Path>, root: &Path) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }
        let default_path = root.join(CONFIG_FILE_NAME);
        if default_path.exists() {
            Self::from_file(default_path)
        } else {
            debug!("No {} found, using defaults", CONFIG_FILE_NAME);
            Ok(Self::default())
        }
    }
}

/// Company identity shown throughout the kit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IdentityConfig {
    pub company: String,
    pub tagline: String,
    pub description: String,
    pub domain: String,
    pub industry: String,
    pub copyright: String,
    pub version: String,
    pub phone: String,
    pub email: String,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            company: "CredSuvidha".to_string(),
            tagline: "Trusted Partner. Swift Solutions.".to_string(),
            description: "Smart Financial Solutions for a Better Tomorrow".to_string(),
            domain: "www.credsuvidha.com".to_string(),
            industry: "Financial Services (Fintech)".to_string(),
            copyright: "© 2025 CredSuvidha. All rights reserved.".to_string(),
            version: "1.0".to_string(),
            phone: "+91 93076 73391".to_string(),
            email: "info@credsuvidha.com".to_string(),
        }
    }
}

/// Input and output locations, relative to the project root
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PathsConfig {
    /// Directory holding the token file and the generated outputs
    pub asset_dir: PathBuf,
    /// Token file, relative to `asset_dir`
    pub tokens: PathBuf,
    /// Logo bitmap, relative to the project root
    pub logo: PathBuf,
    pub logo_policy: AssetPolicy,
    /// PDF file name, relative to `asset_dir`
    pub pdf_output: PathBuf,
    /// PPTX file name, relative to `asset_dir`
    pub pptx_output: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            asset_dir: PathBuf::from("assets/brandkit"),
            tokens: PathBuf::from("brand-tokens.json"),
            logo: PathBuf::from("logo.png"),
            logo_policy: AssetPolicy::Optional,
            pdf_output: PathBuf::from("CredSuvidha-BrandKit.pdf"),
            pptx_output: PathBuf::from("CredSuvidha-BrandKit.pptx"),
        }
    }
}

impl PathsConfig {
    pub fn tokens_path(&self, root: &Path) -> PathBuf {
        root.join(&self.asset_dir).join(&self.tokens)
    }

    pub fn logo_path(&self, root: &Path) -> PathBuf {
        root.join(&self.logo)
    }

    pub fn pdf_output_path(&self, root: &Path) -> PathBuf {
        root.join(&self.asset_dir).join(&self.pdf_output)
    }

    pub fn pptx_output_path(&self, root: &Path) -> PathBuf {
        root.join(&self.asset_dir).join(&self.pptx_output)
    }
}

/// PDF output settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    /// Font files handed to the typesetter
    pub font_files: Vec<PathBuf>,
    /// Sans-serif family name
    pub font_family: String,
    /// Display family name
    pub serif_family: String,
    /// Monospace family name
    pub mono_family: String,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            font_files: Vec::new(),
            font_family: "Inter".to_string(),
            serif_family: "Playfair Display".to_string(),
            mono_family: "DejaVu Sans Mono".to_string(),
        }
    }
}

/// PPTX output settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PptxConfig {
    /// Language tag written on text runs
    pub locale: String,
    pub font_family: String,
    pub serif_family: String,
    pub mono_family: String,
}

impl Default for PptxConfig {
    fn default() -> Self {
        Self {
            locale: "en-US".to_string(),
            font_family: "Calibri".to_string(),
            serif_family: "Georgia".to_string(),
            mono_family: "Consolas".to_string(),
        }
    }
}
