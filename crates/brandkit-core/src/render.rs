//! Renderer seam
//!
//! A renderer turns a finished [`DocumentLayout`] into the bytes of one
//! output file. The PDF and PPTX adapters live in their own crates.

use brandkit_ast::DocumentLayout;

/// Serializes a laid-out document into a binary artifact
pub trait Renderer {
    type Error: std::error::Error + Send + Sync + 'static;

    /// File extension of the produced artifact, without the dot
    fn extension(&self) -> &'static str;

    fn render(&self, layout: &DocumentLayout) -> Result<Vec<u8>, Self::Error>;
}
