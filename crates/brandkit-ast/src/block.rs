//! Content blocks
//!
//! A section is a list of blocks laid out top to bottom in reading order.
//! Blocks say *what* is shown; the assembler in `brandkit-core` decides
//! where it goes and lowers it to layout [`Element`](crate::Element)s.

use serde::{Deserialize, Serialize};

use crate::color::{ColorToken, Rgb};
use crate::inline::{Alignment, TextRole, TextRun};

/// One renderable unit of a section
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    /// Flowing text
    Paragraph(Paragraph),
    /// A heading inside a section
    Subheading(Subheading),
    /// A striped table with a header row
    Table(TableSpec),
    /// A palette table: swatch, name, hex and usage per color
    Swatch(PaletteSpec),
    /// A gradient strip approximated by solid bands
    Gradient(GradientBlock),
    /// A bitmap from the asset set
    Image(ImageBlock),
    /// Equal cards arranged in a grid
    Grid(GridSpec),
    /// Text inside a tinted box
    Callout(Callout),
}

impl ContentBlock {
    /// Short name used in log lines
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Paragraph(_) => "paragraph",
            Self::Subheading(_) => "subheading",
            Self::Table(_) => "table",
            Self::Swatch(_) => "swatch",
            Self::Gradient(_) => "gradient",
            Self::Image(_) => "image",
            Self::Grid(_) => "grid",
            Self::Callout(_) => "callout",
        }
    }
}

/// A paragraph of styled runs
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Paragraph {
    pub runs: Vec<TextRun>,
    #[serde(default)]
    pub role: TextRole,
    #[serde(default)]
    pub align: Alignment,
}

impl Paragraph {
    /// A body paragraph holding a single plain run
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            runs: vec![TextRun::plain(text)],
            ..Default::default()
        }
    }

    pub fn from_runs(runs: Vec<TextRun>) -> Self {
        Self {
            runs,
            ..Default::default()
        }
    }

    pub fn with_role(mut self, role: TextRole) -> Self {
        self.role = role;
        self
    }

    pub fn aligned(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }
}

/// A heading below the section heading
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subheading {
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Rgb>,
}

impl Subheading {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            color: None,
        }
    }
}

/// A table column
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnSpec {
    pub header: String,
    /// Share of the table width relative to the other columns
    pub weight: u32,
    /// Body cells in bold
    #[serde(default)]
    pub bold: bool,
    /// Body cells in the monospace face
    #[serde(default)]
    pub monospace: bool,
}

impl ColumnSpec {
    pub fn new(header: impl Into<String>, weight: u32) -> Self {
        Self {
            header: header.into(),
            weight,
            bold: false,
            monospace: false,
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn monospace(mut self) -> Self {
        self.monospace = true;
        self
    }
}

/// A table with a header row and zebra-striped body rows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSpec {
    pub columns: Vec<ColumnSpec>,
    pub rows: Vec<Vec<String>>,
    /// Header background; the theme's header fill when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header_fill: Option<Rgb>,
}

impl TableSpec {
    pub fn new(columns: Vec<ColumnSpec>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            header_fill: None,
        }
    }

    /// Append a body row
    pub fn row<I, S>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_header_fill(mut self, fill: Rgb) -> Self {
        self.header_fill = Some(fill);
        self
    }
}

/// A named group of colors rendered as a palette table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaletteSpec {
    /// Group title shown above the table
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub tokens: Vec<ColorToken>,
}

impl PaletteSpec {
    pub fn new(title: impl Into<String>, tokens: Vec<ColorToken>) -> Self {
        Self {
            title: Some(title.into()),
            tokens,
        }
    }
}

/// One band of a gradient
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradientStop {
    pub color: Rgb,
    /// Share of the total width, in `(0, 1]`
    pub fraction: f64,
}

impl GradientStop {
    pub fn new(color: Rgb, fraction: f64) -> Self {
        Self { color, fraction }
    }
}

/// A linear gradient described by its stops
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientSpec {
    pub name: String,
    pub stops: Vec<GradientStop>,
    /// CSS form shown under the strip
    #[serde(default)]
    pub css: String,
}

impl GradientSpec {
    pub fn new(name: impl Into<String>, stops: Vec<GradientStop>) -> Self {
        Self {
            name: name.into(),
            stops,
            css: String::new(),
        }
    }

    pub fn with_css(mut self, css: impl Into<String>) -> Self {
        self.css = css.into();
        self
    }
}

/// A gradient strip with its name and CSS caption
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientBlock {
    pub gradient: GradientSpec,
    /// Strip height in points; the canvas default when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<i64>,
}

/// A bitmap looked up by key in the asset set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageBlock {
    /// Asset key, e.g. `logo`
    pub asset: String,
    /// Display width in points; height follows the aspect ratio
    pub width: i64,
    #[serde(default)]
    pub align: Alignment,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    /// Panel color drawn behind the image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub backdrop: Option<Rgb>,
}

impl ImageBlock {
    pub fn new(asset: impl Into<String>, width: i64) -> Self {
        Self {
            asset: asset.into(),
            width,
            align: Alignment::Center,
            caption: None,
            backdrop: None,
        }
    }

    pub fn with_caption(mut self, caption: impl Into<String>) -> Self {
        self.caption = Some(caption.into());
        self
    }

    pub fn on_backdrop(mut self, backdrop: Rgb) -> Self {
        self.backdrop = Some(backdrop);
        self
    }
}

/// How a card is decorated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardStyle {
    /// Accent bar along the top edge
    #[default]
    TopAccent,
    /// Accent bar along the left edge
    LeftAccent,
    /// Title shown large in the accent color, body as a label
    Stat,
}

/// A card tile
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardSpec {
    pub title: String,
    pub body: String,
    pub accent: Rgb,
}

impl CardSpec {
    pub fn new(title: impl Into<String>, body: impl Into<String>, accent: Rgb) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
            accent,
        }
    }
}

/// Cards of equal size in a grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSpec {
    pub columns: u32,
    /// Cell height in points; measured from the tallest card when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cell_height: Option<i64>,
    #[serde(default)]
    pub style: CardStyle,
    pub cards: Vec<CardSpec>,
}

impl GridSpec {
    pub fn new(columns: u32, cards: Vec<CardSpec>) -> Self {
        Self {
            columns,
            cell_height: None,
            style: CardStyle::default(),
            cards,
        }
    }

    pub fn with_style(mut self, style: CardStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_cell_height(mut self, height: i64) -> Self {
        self.cell_height = Some(height);
        self
    }
}

/// Text in a tinted, optionally bordered box
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Callout {
    pub runs: Vec<TextRun>,
    pub fill: Rgb,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub border: Option<Rgb>,
    #[serde(default)]
    pub role: TextRole,
    #[serde(default)]
    pub align: Alignment,
}

impl Callout {
    pub fn new(runs: Vec<TextRun>, fill: Rgb) -> Self {
        Self {
            runs,
            fill,
            border: None,
            role: TextRole::Body,
            align: Alignment::Left,
        }
    }

    pub fn with_border(mut self, border: Rgb) -> Self {
        self.border = Some(border);
        self
    }

    pub fn with_role(mut self, role: TextRole) -> Self {
        self.role = role;
        self
    }

    pub fn aligned(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_builder() {
        let table = TableSpec::new(vec![
            ColumnSpec::new("Weight", 1).bold(),
            ColumnSpec::new("Value", 1).monospace(),
        ])
        .row(["Bold", "700"])
        .row(["Semi-Bold", "600"]);

        assert_eq!(table.rows.len(), 2);
        assert_eq!(table.rows[1], vec!["Semi-Bold".to_string(), "600".to_string()]);
        assert!(table.columns[0].bold);
        assert!(table.columns[1].monospace);
    }

    #[test]
    fn test_block_serde_is_tagged() {
        let block = ContentBlock::Subheading(Subheading::new("Logo Elements"));
        let json = serde_json::to_value(&block).unwrap();
        assert_eq!(json["type"], "subheading");
        assert_eq!(json["text"], "Logo Elements");

        let back: ContentBlock = serde_json::from_value(json).unwrap();
        assert_eq!(back, block);
    }

    #[test]
    fn test_block_kind() {
        let grid = ContentBlock::Grid(GridSpec::new(2, Vec::new()));
        assert_eq!(grid.kind(), "grid");
        let para = ContentBlock::Paragraph(Paragraph::text("hello"));
        assert_eq!(para.kind(), "paragraph");
    }

    #[test]
    fn test_card_style_default() {
        let grid = GridSpec::new(3, Vec::new());
        assert_eq!(grid.style, CardStyle::TopAccent);
        assert_eq!(grid.cell_height, None);
    }
}
