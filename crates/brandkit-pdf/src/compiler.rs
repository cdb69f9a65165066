//! Typst to PDF compiler
//!
//! Compiles Typst markup to PDF bytes using typst-as-lib. Images are
//! served to Typst from memory through a static file resolver. Configured
//! font files come first; the fonts embedded in typst-kit back them up so
//! text always has glyphs.

use std::path::Path;

use tracing::{debug, warn};
use typst_as_lib::typst_kit_options::TypstKitFontOptions;
use typst_as_lib::TypstEngine;

use crate::error::{PdfError, Result};

/// An in-memory file visible to the Typst document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VirtualFile {
    /// Absolute virtual path, e.g. `/assets/logo.png`
    pub path: String,
    pub bytes: Vec<u8>,
}

/// Compiler for converting Typst markup to PDF
#[derive(Debug, Clone, Default)]
pub struct Compiler {
    fonts: Vec<Vec<u8>>,
}

impl Compiler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compiler with font files read from disk
    pub fn with_font_files<P: AsRef<Path>>(paths: &[P]) -> Result<Self> {
        let mut fonts = Vec::with_capacity(paths.len());
        for path in paths {
            let path = path.as_ref();
            let bytes = std::fs::read(path).map_err(|e| {
                PdfError::Font(format!("Failed to read font {}: {}", path.display(), e))
            })?;
            debug!(path = %path.display(), bytes = bytes.len(), "Loaded font");
            fonts.push(bytes);
        }
        if fonts.is_empty() {
            warn!("No font files configured, text falls back to the embedded Typst fonts");
        }
        Ok(Self { fonts })
    }

    pub fn font_count(&self) -> usize {
        self.fonts.len()
    }

    /// Compile Typst markup to PDF bytes
    pub fn compile(&self, markup: &str, files: &[VirtualFile]) -> Result<Vec<u8>> {
        let engine = TypstEngine::builder()
            .main_file(markup.to_string())
            .fonts(self.fonts.clone())
            .search_fonts_with(
                TypstKitFontOptions::default()
                    .include_system_fonts(false)
                    .include_embedded_fonts(true),
            )
            .with_static_file_resolver(files.iter().map(|f| (f.path.as_str(), f.bytes.clone())))
            .build();

        // compiled is Warned<Result<Document, Error>>
        let compiled = engine.compile();
        if !compiled.warnings.is_empty() {
            debug!(count = compiled.warnings.len(), "Typst reported warnings");
        }
        let document = compiled
            .output
            .map_err(|e| PdfError::Compilation(format!("{:?}", e)))?;

        let options = typst_pdf::PdfOptions::default();
        let pdf_bytes = typst_pdf::pdf(&document, &options)
            .map_err(|e| PdfError::Export(format!("{:?}", e)))?;

        Ok(pdf_bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_shapes() {
        let markup = "#set page(width: 200pt, height: 100pt, margin: 0pt)\n\
                      #place(top + left, dx: 10pt, dy: 10pt, rect(width: 50pt, height: 20pt, fill: rgb(\"#1A6EF5\"), stroke: none))\n\
                      #pagebreak()\n\
                      #place(top + left, line(start: (0pt, 50pt), end: (200pt, 50pt), stroke: 2.0pt + rgb(\"#C5961E\")))\n";
        let result = Compiler::new().compile(markup, &[]);
        assert!(result.is_ok(), "Compilation failed: {:?}", result.err());

        let pdf = result.unwrap();
        // PDF files start with %PDF
        assert!(pdf.starts_with(b"%PDF"), "Output doesn't start with PDF header");
    }

    #[test]
    fn test_missing_font_file() {
        let err = Compiler::with_font_files(&["/nonexistent/Inter.ttf"]).unwrap_err();
        assert_eq!(err.code(), "PDF003");
    }

    #[test]
    fn test_no_font_files() {
        let compiler = Compiler::with_font_files::<&str>(&[]).unwrap();
        assert_eq!(compiler.font_count(), 0);
    }

    #[test]
    fn test_text_embeds_fallback_font() {
        let markup = "#set page(width: 200pt, height: 100pt)\n\
                      #text(font: \"Inter\", size: 12pt)[Brand Kit]\n";
        let pdf = Compiler::new().compile(markup, &[]).unwrap();
        assert!(contains(&pdf, b"/FontFile"), "No font embedded in PDF");
    }

    fn contains(haystack: &[u8], needle: &[u8]) -> bool {
        haystack.windows(needle.len()).any(|w| w == needle)
    }

    #[test]
    fn test_missing_image_fails() {
        let markup = "#image(\"/assets/absent.png\", width: 10pt)";
        let err = Compiler::new().compile(markup, &[]).unwrap_err();
        assert_eq!(err.code(), "PDF001");
    }
}
