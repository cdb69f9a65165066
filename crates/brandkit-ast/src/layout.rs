//! Positioned layout tree
//!
//! This is what renderers consume. Every page is a flat list of
//! primitives with absolute bounds in points. Nothing here is measured
//! or wrapped again by a renderer beyond the text engine's own line
//! breaking inside a text box.

use std::sync::Arc;

use crate::color::Rgb;
use crate::document::DocumentMeta;
use crate::geometry::{Point, Rect};
use crate::inline::Alignment;

/// A laid-out document, ready for a renderer
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentLayout {
    pub meta: DocumentMeta,
    /// Page width in points
    pub width: i64,
    /// Page height in points
    pub height: i64,
    pub pages: Vec<PageLayout>,
}

impl DocumentLayout {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Distinct images used anywhere in the document, first use first
    pub fn images(&self) -> Vec<&ImageSource> {
        let mut seen: Vec<&ImageSource> = Vec::new();
        for page in &self.pages {
            for image in page.images() {
                if !seen.iter().any(|s| s.name == image.source.name) {
                    seen.push(&image.source);
                }
            }
        }
        seen
    }
}

/// What a page is for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageKind {
    Cover,
    Content,
    Closing,
}

/// One page or slide
#[derive(Debug, Clone, PartialEq)]
pub struct PageLayout {
    pub kind: PageKind,
    /// Full-bleed background color
    pub background: Option<Rgb>,
    /// Elements in painting order
    pub elements: Vec<Element>,
    /// Speaker notes
    pub notes: Option<String>,
}

impl PageLayout {
    pub fn new(kind: PageKind) -> Self {
        Self {
            kind,
            background: None,
            elements: Vec::new(),
            notes: None,
        }
    }

    pub fn push(&mut self, element: impl Into<Element>) {
        self.elements.push(element.into());
    }

    pub fn texts(&self) -> impl Iterator<Item = &TextElement> {
        self.elements.iter().filter_map(|e| match e {
            Element::Text(t) => Some(t),
            _ => None,
        })
    }

    pub fn images(&self) -> impl Iterator<Item = &ImageElement> {
        self.elements.iter().filter_map(|e| match e {
            Element::Image(i) => Some(i),
            _ => None,
        })
    }

    pub fn rects(&self) -> impl Iterator<Item = &RectElement> {
        self.elements.iter().filter_map(|e| match e {
            Element::Rect(r) => Some(r),
            _ => None,
        })
    }

    /// Plain text of every text element, in painting order
    pub fn plain_texts(&self) -> Vec<String> {
        self.texts().map(TextElement::plain_text).collect()
    }

    /// Whether any text element reads exactly `text`
    pub fn has_text(&self, text: &str) -> bool {
        self.texts().any(|t| t.plain_text() == text)
    }
}

/// A drawing primitive
#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Rect(RectElement),
    Line(LineElement),
    Text(TextElement),
    Image(ImageElement),
}

impl Element {
    /// Bounding box of the element
    pub fn bounds(&self) -> Rect {
        match self {
            Self::Rect(r) => r.bounds,
            Self::Text(t) => t.bounds,
            Self::Image(i) => i.bounds,
            Self::Line(l) => {
                let x = l.from.x.min(l.to.x);
                let y = l.from.y.min(l.to.y);
                Rect::new(x, y, (l.from.x - l.to.x).abs(), (l.from.y - l.to.y).abs())
            }
        }
    }

    /// Move the element by `(dx, dy)`
    pub fn translate(&mut self, dx: i64, dy: i64) {
        match self {
            Self::Rect(r) => r.bounds = r.bounds.translate(dx, dy),
            Self::Text(t) => t.bounds = t.bounds.translate(dx, dy),
            Self::Image(i) => i.bounds = i.bounds.translate(dx, dy),
            Self::Line(l) => {
                l.from = Point::new(l.from.x + dx, l.from.y + dy);
                l.to = Point::new(l.to.x + dx, l.to.y + dy);
            }
        }
    }
}

impl From<RectElement> for Element {
    fn from(value: RectElement) -> Self {
        Self::Rect(value)
    }
}

impl From<LineElement> for Element {
    fn from(value: LineElement) -> Self {
        Self::Line(value)
    }
}

impl From<TextElement> for Element {
    fn from(value: TextElement) -> Self {
        Self::Text(value)
    }
}

impl From<ImageElement> for Element {
    fn from(value: ImageElement) -> Self {
        Self::Image(value)
    }
}

/// Outline of a shape
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stroke {
    pub color: Rgb,
    /// Line width in points
    pub width: f64,
}

impl Stroke {
    pub fn new(color: Rgb, width: f64) -> Self {
        Self { color, width }
    }
}

/// Geometry of a filled shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ShapeKind {
    #[default]
    Rectangle,
    /// Rectangle with rounded corners
    Rounded { radius: i64 },
    /// Ellipse inscribed in the bounds
    Ellipse,
}

/// A filled and/or stroked shape
#[derive(Debug, Clone, PartialEq)]
pub struct RectElement {
    pub bounds: Rect,
    pub shape: ShapeKind,
    pub fill: Option<Rgb>,
    pub stroke: Option<Stroke>,
}

impl RectElement {
    /// A solid rectangle without outline
    pub fn filled(bounds: Rect, fill: Rgb) -> Self {
        Self {
            bounds,
            shape: ShapeKind::Rectangle,
            fill: Some(fill),
            stroke: None,
        }
    }

    pub fn rounded(mut self, radius: i64) -> Self {
        self.shape = ShapeKind::Rounded { radius };
        self
    }

    pub fn ellipse(mut self) -> Self {
        self.shape = ShapeKind::Ellipse;
        self
    }

    pub fn stroked(mut self, stroke: Stroke) -> Self {
        self.stroke = Some(stroke);
        self
    }
}

/// A straight line
#[derive(Debug, Clone, PartialEq)]
pub struct LineElement {
    pub from: Point,
    pub to: Point,
    pub stroke: Stroke,
}

impl LineElement {
    /// A horizontal rule of the given length
    pub fn horizontal(from: Point, length: i64, stroke: Stroke) -> Self {
        Self {
            from,
            to: Point::new(from.x + length, from.y),
            stroke,
        }
    }
}

/// Typeface family; the renderer maps it to a concrete font
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontFamily {
    #[default]
    Sans,
    Serif,
    Mono,
}

/// A run of text with every style attribute resolved
#[derive(Debug, Clone, PartialEq)]
pub struct StyledRun {
    pub text: String,
    /// Font size in points
    pub size: f64,
    pub bold: bool,
    pub italic: bool,
    pub color: Rgb,
    pub family: FontFamily,
}

/// Vertical placement of text inside its box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VerticalAlign {
    #[default]
    Top,
    Middle,
    Bottom,
}

/// A text box
#[derive(Debug, Clone, PartialEq)]
pub struct TextElement {
    pub bounds: Rect,
    pub runs: Vec<StyledRun>,
    pub align: Alignment,
    pub valign: VerticalAlign,
    /// Line height as a multiple of the font size
    pub leading: f64,
}

impl TextElement {
    /// Concatenated text of all runs
    pub fn plain_text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }

    /// Largest font size among the runs
    pub fn max_size(&self) -> f64 {
        self.runs.iter().map(|r| r.size).fold(0.0, f64::max)
    }
}

/// Encoded bitmap format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    Png,
    Jpeg,
    Gif,
}

impl ImageFormat {
    /// File extension without the dot
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpeg",
            Self::Gif => "gif",
        }
    }

    /// MIME type
    pub fn content_type(&self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
            Self::Gif => "image/gif",
        }
    }
}

/// A loaded bitmap
#[derive(Debug, Clone, PartialEq)]
pub struct ImageSource {
    /// Asset key, unique per document (e.g. `logo`)
    pub name: String,
    pub format: ImageFormat,
    /// Encoded file bytes
    pub bytes: Arc<[u8]>,
    /// Intrinsic width in pixels
    pub width_px: u32,
    /// Intrinsic height in pixels
    pub height_px: u32,
}

impl ImageSource {
    /// File name used inside output packages, e.g. `logo.png`
    pub fn file_name(&self) -> String {
        format!("{}.{}", self.name, self.format.extension())
    }

    /// Height for a given display width, keeping the aspect ratio
    pub fn height_for_width(&self, width: i64) -> i64 {
        if self.width_px == 0 {
            return width;
        }
        ((width as f64) * (self.height_px as f64) / (self.width_px as f64)).round() as i64
    }
}

/// A placed bitmap
#[derive(Debug, Clone, PartialEq)]
pub struct ImageElement {
    pub bounds: Rect,
    pub source: ImageSource,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn logo() -> ImageSource {
        ImageSource {
            name: "logo".to_string(),
            format: ImageFormat::Png,
            bytes: Arc::from(vec![1u8, 2, 3]),
            width_px: 400,
            height_px: 200,
        }
    }

    fn run(text: &str, size: f64) -> StyledRun {
        StyledRun {
            text: text.to_string(),
            size,
            bold: false,
            italic: false,
            color: Rgb::BLACK,
            family: FontFamily::Sans,
        }
    }

    #[test]
    fn test_image_aspect() {
        let source = logo();
        assert_eq!(source.height_for_width(120), 60);
        assert_eq!(source.file_name(), "logo.png");
    }

    #[test]
    fn test_document_images_are_deduplicated() {
        let mut page = PageLayout::new(PageKind::Content);
        page.push(ImageElement {
            bounds: Rect::new(0, 0, 10, 5),
            source: logo(),
        });
        let layout = DocumentLayout {
            meta: DocumentMeta::default(),
            width: 595,
            height: 842,
            pages: vec![page.clone(), page],
        };
        assert_eq!(layout.images().len(), 1);
        assert_eq!(layout.page_count(), 2);
    }

    #[test]
    fn test_text_helpers() {
        let text = TextElement {
            bounds: Rect::new(0, 0, 100, 20),
            runs: vec![run("Hex ", 9.0), run("Code", 11.0)],
            align: Alignment::Left,
            valign: VerticalAlign::Top,
            leading: 1.2,
        };
        assert_eq!(text.plain_text(), "Hex Code");
        assert_eq!(text.max_size(), 11.0);

        let mut page = PageLayout::new(PageKind::Cover);
        page.push(text);
        assert!(page.has_text("Hex Code"));
        assert_eq!(page.plain_texts(), vec!["Hex Code".to_string()]);
    }

    #[test]
    fn test_line_bounds() {
        let line = LineElement::horizontal(
            Point::new(54, 60),
            487,
            Stroke::new(Rgb::from_u32(0x1a6ef5), 2.0),
        );
        let bounds = Element::from(line).bounds();
        assert_eq!(bounds, Rect::new(54, 60, 487, 0));
    }
}
