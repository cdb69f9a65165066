//! brandkit-core - Brand kit layout engine
//!
//! Loads the brand configuration and tokens, builds the brand kit
//! [`Document`](brandkit_ast::Document) and lays it out on a [`Canvas`]:
//!
//! ```rust,ignore
//! use std::path::Path;
//! use brandkit_core::{build_layout, BrandkitConfig, Canvas};
//!
//! let root = Path::new(".");
//! let config = BrandkitConfig::load(None, root)?;
//! let layout = build_layout(&config, root, &Canvas::a4_document(), "October 2026")?;
//! assert!(layout.page_count() > 1);
//! ```
//!
//! The resulting [`DocumentLayout`] is handed to a [`Renderer`]; the PDF
//! and PPTX renderers live in their own crates.

use std::path::Path;

use brandkit_ast::DocumentLayout;
use tracing::info;

pub mod assembler;
pub mod asset;
pub mod canvas;
pub mod catalog;
pub mod config;
pub mod error;
pub mod gradient;
pub mod grid;
pub mod measure;
pub mod palette;
pub mod render;
pub mod styler;
pub mod table;
pub mod template;
pub mod theme;
pub mod tokens;

// Re-export main types and functions
pub use assembler::Assembler;
pub use asset::{AssetPolicy, AssetSet, LOGO};
pub use canvas::{Canvas, CanvasKind};
pub use catalog::{brand_kit, date_label};
pub use config::{BrandkitConfig, IdentityConfig, PathsConfig, PdfConfig, PptxConfig};
pub use error::{AssetError, ConfigError, CoreError, LayoutError, Result, TokenError};
pub use grid::GridLayout;
pub use render::Renderer;
pub use theme::Theme;
pub use tokens::BrandTokens;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Theme from the token file configured under `root`
pub fn load_theme(config: &BrandkitConfig, root: &Path) -> Result<Theme> {
    let tokens = BrandTokens::from_file(config.paths.tokens_path(root))?;
    Ok(Theme::from_tokens(&tokens))
}

/// Load tokens and assets under `root`, then lay the brand kit out on `canvas`
pub fn build_layout(
    config: &BrandkitConfig,
    root: &Path,
    canvas: &Canvas,
    date: &str,
) -> Result<DocumentLayout> {
    let theme = load_theme(config, root)?;
    build_layout_with_theme(config, root, canvas, date, &theme)
}

/// Lay the brand kit out with an already loaded `theme`; only assets are read
pub fn build_layout_with_theme(
    config: &BrandkitConfig,
    root: &Path,
    canvas: &Canvas,
    date: &str,
    theme: &Theme,
) -> Result<DocumentLayout> {
    let mut assets = AssetSet::new();
    assets.load(
        LOGO,
        config.paths.logo_path(root),
        config.paths.logo_policy,
    )?;

    let document = brand_kit(&config.identity, theme, date)?;
    let layout = Assembler::new(theme, canvas, &assets).assemble(&document)?;
    info!(
        canvas = ?canvas.kind,
        pages = layout.page_count(),
        images = assets.len(),
        "Built brand kit layout"
    );
    Ok(layout)
}
