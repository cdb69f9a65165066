//! brandkit-pdf - PDF rendering via Typst
//!
//! This crate renders brandkit layouts to PDF using Typst as the
//! typesetting backend.
//!
//! # Architecture
//!
//! The PDF generation pipeline consists of two stages:
//!
//! 1. **Transpiler** - Converts a `brandkit_ast::DocumentLayout` to Typst
//!    markup of absolutely placed shapes, text boxes and images
//! 2. **Compiler** - Compiles the markup to PDF bytes, serving images from
//!    memory
//!
//! # Example
//!
//! ```ignore
//! use brandkit_core::{PdfConfig, Renderer};
//! use brandkit_pdf::PdfRenderer;
//!
//! let renderer = PdfRenderer::new(&PdfConfig::default(), root)?;
//! let pdf_bytes = renderer.render(&layout)?;
//! ```

mod compiler;
mod error;
mod transpiler;

use std::path::Path;

use brandkit_ast::DocumentLayout;
use brandkit_core::{PdfConfig, Renderer};
use tracing::{debug, info};

pub use compiler::{Compiler, VirtualFile};
pub use error::{PdfError, Result};
pub use transpiler::{image_path, FontSet, Transpiler, ASSET_ROOT};

/// Renders layouts to PDF
#[derive(Debug, Clone, Default)]
pub struct PdfRenderer {
    transpiler: Transpiler,
    compiler: Compiler,
}

impl PdfRenderer {
    /// Renderer with fonts from `config`, font paths relative to `root`
    pub fn new(config: &PdfConfig, root: &Path) -> Result<Self> {
        let font_paths: Vec<_> = config.font_files.iter().map(|p| root.join(p)).collect();
        Ok(Self {
            transpiler: Transpiler::new(FontSet::from(config)),
            compiler: Compiler::with_font_files(&font_paths)?,
        })
    }

    /// Typst markup for a layout, without compiling it
    pub fn markup(&self, layout: &DocumentLayout) -> String {
        self.transpiler.transpile(layout)
    }
}

impl Renderer for PdfRenderer {
    type Error = PdfError;

    fn extension(&self) -> &'static str {
        "pdf"
    }

    fn render(&self, layout: &DocumentLayout) -> Result<Vec<u8>> {
        let markup = self.markup(layout);
        debug!(bytes = markup.len(), "Transpiled layout to Typst");

        let files: Vec<VirtualFile> = layout
            .images()
            .into_iter()
            .map(|source| VirtualFile {
                path: image_path(source),
                bytes: source.bytes.to_vec(),
            })
            .collect();

        let pdf = self.compiler.compile(&markup, &files)?;
        info!(
            pages = layout.page_count(),
            images = files.len(),
            bytes = pdf.len(),
            "Rendered PDF"
        );
        Ok(pdf)
    }
}

/// Convenience function to render a layout with default settings
pub fn render_pdf(layout: &DocumentLayout) -> Result<Vec<u8>> {
    PdfRenderer::default().render(layout)
}

#[cfg(test)]
mod tests {
    use super::*;
    use brandkit_ast::{
        DocumentMeta, ImageElement, ImageFormat, ImageSource, PageKind, PageLayout, Rect,
        RectElement, Rgb,
    };
    use std::io::Cursor;
    use std::sync::Arc;

    fn png() -> ImageSource {
        let img = image::RgbImage::from_pixel(4, 2, image::Rgb([0x1b, 0x3a, 0x5c]));
        let mut out = Cursor::new(Vec::new());
        img.write_to(&mut out, image::ImageFormat::Png).unwrap();
        ImageSource {
            name: "logo".to_string(),
            format: ImageFormat::Png,
            bytes: Arc::from(out.into_inner()),
            width_px: 4,
            height_px: 2,
        }
    }

    fn layout() -> DocumentLayout {
        let mut cover = PageLayout::new(PageKind::Cover);
        cover.background = Some(Rgb::from_u32(0x142857));
        cover.push(ImageElement {
            bounds: Rect::new(200, 100, 80, 40),
            source: png(),
        });
        let mut content = PageLayout::new(PageKind::Content);
        content.push(RectElement::filled(Rect::new(54, 65, 487, 4), Rgb::from_u32(0x1a6ef5)));
        content.push(ImageElement {
            bounds: Rect::new(500, 20, 40, 20),
            source: png(),
        });
        DocumentLayout {
            meta: DocumentMeta {
                title: "Brand Kit".to_string(),
                ..Default::default()
            },
            width: 595,
            height: 842,
            pages: vec![cover, content],
        }
    }

    #[test]
    fn test_markup_references_images() {
        let markup = PdfRenderer::default().markup(&layout());
        assert_eq!(markup.matches("image(\"/assets/logo.png\"").count(), 2);
        assert_eq!(markup.matches("#pagebreak()").count(), 1);
    }

    #[test]
    fn test_render_pdf_with_image() {
        let pdf = render_pdf(&layout()).unwrap();
        assert!(pdf.starts_with(b"%PDF"));
        assert_eq!(PdfRenderer::default().extension(), "pdf");
    }

    #[test]
    fn test_missing_font_file_is_error() {
        let config = PdfConfig {
            font_files: vec!["fonts/absent.ttf".into()],
            ..Default::default()
        };
        let err = PdfRenderer::new(&config, Path::new("/nonexistent")).unwrap_err();
        assert_eq!(err.code(), "PDF003");
    }
}
