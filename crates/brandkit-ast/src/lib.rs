//! brandkit-ast - Content model and layout tree definitions
//!
//! This crate provides the types shared by every brandkit stage:
//!
//! - the declarative **content model** ([`Document`], [`SectionSpec`],
//!   [`ContentBlock`]) that describes what a brand kit says, and
//! - the positioned **layout tree** ([`DocumentLayout`], [`PageLayout`],
//!   [`Element`]) that renderers turn into PDF or PPTX bytes.
//!
//! All lengths are integer points (1/72 inch) on a fixed canvas, with the
//! origin at the top-left corner and y growing downwards.

pub mod block;
pub mod color;
pub mod document;
pub mod error;
pub mod geometry;
pub mod inline;
pub mod layout;

pub use block::{
    Callout, CardSpec, CardStyle, ColumnSpec, ContentBlock, GradientBlock, GradientSpec,
    GradientStop, GridSpec, ImageBlock, PaletteSpec, Paragraph, Subheading, TableSpec,
};
pub use color::{ColorToken, Rgb};
pub use document::{
    ClosingSpec, CoverSpec, Document, DocumentMeta, FrameSpec, SectionSpec,
};
pub use error::{ModelError, Result};
pub use geometry::{Insets, LayoutFrame, Point, Rect};
pub use inline::{Alignment, TextRole, TextRun};
pub use layout::{
    DocumentLayout, Element, FontFamily, ImageElement, ImageFormat, ImageSource, LineElement,
    PageKind, PageLayout, RectElement, ShapeKind, Stroke, StyledRun, TextElement,
    VerticalAlign,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
