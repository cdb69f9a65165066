//! # brandkit-pptx
//!
//! PowerPoint (PPTX) generation from brandkit layouts.
//!
//! Every page of a [`DocumentLayout`] becomes one slide of absolutely
//! positioned shapes on a blank layout, so the deck matches the PDF built
//! from the same content model.
//!
//! ## Features
//!
//! - **Shapes**: rectangles, rounded rectangles and ovals as preset geometry
//! - **Text**: zero-inset text boxes with per-run size, weight, color and font
//! - **Images**: media parts shared across slides, one relationship per slide
//! - **Speaker Notes**: notes slides for every page that carries notes
//!
//! ## Example
//!
//! ```rust,ignore
//! use brandkit_core::{PptxConfig, Renderer};
//! use brandkit_pptx::PptxRenderer;
//!
//! let renderer = PptxRenderer::new(&PptxConfig::default());
//! let pptx_bytes = renderer.render(&layout)?;
//! std::fs::write("output.pptx", pptx_bytes)?;
//! ```

pub mod error;
pub mod media;
pub mod package;
pub mod slide;
pub mod writer;

use brandkit_ast::DocumentLayout;
use brandkit_core::{PptxConfig, Renderer, Theme};
use tracing::info;

// Re-exports
pub use error::{PptxError, Result};
pub use media::{MediaItem, MediaRegistry};
pub use package::{inspect, PackageSummary};
pub use slide::{SlideBuilder, SlideFonts, SlidePart};
pub use writer::{ColorScheme, PptxWriter};

/// PPTX-related constants
pub mod constants {
    /// Widescreen 16:9 slide width in EMU (13.333" width)
    pub const WIDESCREEN_SLIDE_WIDTH_EMU: i64 = 12_192_000;

    /// Widescreen 16:9 slide height in EMU (7.5" height)
    pub const WIDESCREEN_SLIDE_HEIGHT_EMU: i64 = 6_858_000;

    /// EMU per inch
    pub const EMU_PER_INCH: i64 = 914_400;

    /// EMU per point
    pub const EMU_PER_POINT: i64 = 12_700;

    /// Relationship id of the first slide in `presentation.xml.rels`
    pub const FIRST_SLIDE_REL: usize = 5;

    /// PresentationML namespace
    pub const NS_PRESENTATION: &str =
        "http://schemas.openxmlformats.org/presentationml/2006/main";

    /// DrawingML namespace
    pub const NS_DRAWING: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";

    /// Relationships namespace (`r:` attributes)
    pub const NS_RELATIONSHIPS: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

    /// Package relationships namespace (`.rels` parts)
    pub const NS_PACKAGE_RELATIONSHIPS: &str =
        "http://schemas.openxmlformats.org/package/2006/relationships";

    /// Content Types namespace
    pub const NS_CONTENT_TYPES: &str = "http://schemas.openxmlformats.org/package/2006/content-types";

    /// Main document relationship type
    pub const REL_TYPE_OFFICE_DOCUMENT: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";

    /// Core properties relationship type
    pub const REL_TYPE_CORE_PROPERTIES: &str =
        "http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties";

    /// Extended properties relationship type
    pub const REL_TYPE_EXTENDED_PROPERTIES: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/extended-properties";

    /// Slide relationship type
    pub const REL_TYPE_SLIDE: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slide";

    /// Slide layout relationship type
    pub const REL_TYPE_SLIDE_LAYOUT: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideLayout";

    /// Slide master relationship type
    pub const REL_TYPE_SLIDE_MASTER: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/slideMaster";

    /// Notes master relationship type
    pub const REL_TYPE_NOTES_MASTER: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/notesMaster";

    /// Notes slide relationship type
    pub const REL_TYPE_NOTES_SLIDE: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/notesSlide";

    /// Presentation properties relationship type
    pub const REL_TYPE_PRES_PROPS: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/presProps";

    /// Theme relationship type
    pub const REL_TYPE_THEME: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/theme";

    /// Image relationship type
    pub const REL_TYPE_IMAGE: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/image";
}

/// Renders layouts to PPTX
#[derive(Debug, Clone, Default)]
pub struct PptxRenderer {
    writer: PptxWriter,
}

impl PptxRenderer {
    pub fn new(config: &PptxConfig) -> Self {
        Self {
            writer: PptxWriter::new(config),
        }
    }

    /// Use brand colors for the deck theme
    pub fn with_theme(mut self, theme: &Theme) -> Self {
        self.writer = self.writer.with_theme(theme);
        self
    }
}

impl Renderer for PptxRenderer {
    type Error = PptxError;

    fn extension(&self) -> &'static str {
        "pptx"
    }

    fn render(&self, layout: &DocumentLayout) -> Result<Vec<u8>> {
        let bytes = self.writer.generate(layout)?;
        info!(
            slides = layout.page_count(),
            notes = layout.pages.iter().filter(|p| p.notes.is_some()).count(),
            images = layout.images().len(),
            bytes = bytes.len(),
            "Rendered PPTX"
        );
        Ok(bytes)
    }
}

/// Convenience function to render a layout with default settings
pub fn render_pptx(layout: &DocumentLayout) -> Result<Vec<u8>> {
    PptxRenderer::default().render(layout)
}
