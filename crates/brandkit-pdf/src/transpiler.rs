//! Layout tree to Typst transpiler
//!
//! Every element is drawn with an absolute `place()` call in code mode, so
//! the page reproduces the assembler's coordinates exactly. Pages are
//! separated by `pagebreak()`; page margins are zero.

use brandkit_ast::{
    Alignment, DocumentLayout, Element, FontFamily, ImageElement, ImageSource, LineElement,
    PageLayout, Rect, RectElement, Rgb, ShapeKind, Stroke, StyledRun, TextElement, VerticalAlign,
};
use brandkit_core::PdfConfig;

/// Directory images are mounted under in the Typst file system
pub const ASSET_ROOT: &str = "/assets";

/// Font family names, one per [`FontFamily`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontSet {
    pub sans: String,
    pub serif: String,
    pub mono: String,
}

impl Default for FontSet {
    fn default() -> Self {
        Self::from(&PdfConfig::default())
    }
}

impl From<&PdfConfig> for FontSet {
    fn from(config: &PdfConfig) -> Self {
        Self {
            sans: config.font_family.clone(),
            serif: config.serif_family.clone(),
            mono: config.mono_family.clone(),
        }
    }
}

impl FontSet {
    fn family(&self, family: FontFamily) -> &str {
        match family {
            FontFamily::Sans => &self.sans,
            FontFamily::Serif => &self.serif,
            FontFamily::Mono => &self.mono,
        }
    }
}

/// Transpiler for converting a layout tree to Typst markup
#[derive(Debug, Clone, Default)]
pub struct Transpiler {
    fonts: FontSet,
}

impl Transpiler {
    pub fn new(fonts: FontSet) -> Self {
        Self { fonts }
    }

    /// Transpile a laid-out document to Typst markup
    pub fn transpile(&self, layout: &DocumentLayout) -> String {
        let mut output = String::new();

        output.push_str(&format!(
            "#set document(title: \"{}\", author: \"{}\")\n",
            escape_string(&layout.meta.title),
            escape_string(&layout.meta.company)
        ));
        output.push_str(&format!(
            "#set page(width: {}, height: {}, margin: 0pt)\n",
            pt(layout.width),
            pt(layout.height)
        ));
        output.push_str(&format!(
            "#set text(font: \"{}\", lang: \"en\")\n",
            escape_string(&self.fonts.sans)
        ));

        for (i, page) in layout.pages.iter().enumerate() {
            if i > 0 {
                output.push_str("#pagebreak()\n");
            }
            output.push_str(&format!("// page {}\n", i + 1));
            self.transpile_page(&mut output, page, layout.width, layout.height);
        }

        output
    }

    fn transpile_page(&self, output: &mut String, page: &PageLayout, width: i64, height: i64) {
        if let Some(background) = page.background {
            let full = RectElement::filled(Rect::new(0, 0, width, height), background);
            output.push_str(&Self::transpile_rect(&full));
        }
        for element in &page.elements {
            output.push_str(&self.transpile_element(element));
        }
    }

    /// Transpile a single element to one `place()` line
    pub fn transpile_element(&self, element: &Element) -> String {
        match element {
            Element::Rect(rect) => Self::transpile_rect(rect),
            Element::Line(line) => Self::transpile_line(line),
            Element::Text(text) => self.transpile_text(text),
            Element::Image(image) => Self::transpile_image(image),
        }
    }

    fn transpile_rect(rect: &RectElement) -> String {
        let b = rect.bounds;
        let fill = rect.fill.map(color).unwrap_or_else(|| "none".to_string());
        let stroke = rect.stroke.map(stroke).unwrap_or_else(|| "none".to_string());
        let shape = match rect.shape {
            ShapeKind::Rectangle => format!(
                "rect(width: {}, height: {}, fill: {fill}, stroke: {stroke})",
                pt(b.width),
                pt(b.height)
            ),
            ShapeKind::Rounded { radius } => format!(
                "rect(width: {}, height: {}, radius: {}, fill: {fill}, stroke: {stroke})",
                pt(b.width),
                pt(b.height),
                pt(radius)
            ),
            ShapeKind::Ellipse => format!(
                "ellipse(width: {}, height: {}, fill: {fill}, stroke: {stroke})",
                pt(b.width),
                pt(b.height)
            ),
        };
        format!("#place(top + left, dx: {}, dy: {}, {shape})\n", pt(b.x), pt(b.y))
    }

    fn transpile_line(line: &LineElement) -> String {
        format!(
            "#place(top + left, line(start: ({}, {}), end: ({}, {}), stroke: {}))\n",
            pt(line.from.x),
            pt(line.from.y),
            pt(line.to.x),
            pt(line.to.y),
            stroke(line.stroke)
        )
    }

    fn transpile_text(&self, text: &TextElement) -> String {
        let b = text.bounds;
        let horizontal = match text.align {
            Alignment::Left | Alignment::Justify => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
        };
        let vertical = match text.valign {
            VerticalAlign::Top => "top",
            VerticalAlign::Middle => "horizon",
            VerticalAlign::Bottom => "bottom",
        };
        // Typst leading is the gap between a cap-height top edge and the
        // previous baseline
        let leading = (text.leading - 0.7).max(0.0);
        let runs: Vec<String> = text.runs.iter().map(|r| self.transpile_run(r)).collect();

        format!(
            "#place(top + left, dx: {}, dy: {}, box(width: {}, height: {}, align({horizontal} + {vertical}, {{ set par(leading: {leading:.2}em, justify: {}); {} }})))\n",
            pt(b.x),
            pt(b.y),
            pt(b.width),
            pt(b.height),
            text.align == Alignment::Justify,
            runs.join("; ")
        )
    }

    /// One styled run as `text(..)` calls, hard breaks as `linebreak()`
    fn transpile_run(&self, run: &StyledRun) -> String {
        let mut attrs = format!(
            "font: \"{}\", size: {:.1}pt, fill: {}",
            escape_string(self.fonts.family(run.family)),
            run.size,
            color(run.color)
        );
        if run.bold {
            attrs.push_str(", weight: \"bold\"");
        }
        if run.italic {
            attrs.push_str(", style: \"italic\"");
        }
        run.text
            .split('\n')
            .map(|line| format!("text({attrs}, \"{}\")", escape_string(line)))
            .collect::<Vec<_>>()
            .join("; linebreak(); ")
    }

    fn transpile_image(image: &ImageElement) -> String {
        let b = image.bounds;
        format!(
            "#place(top + left, dx: {}, dy: {}, image(\"{}\", width: {}, height: {}, fit: \"contain\"))\n",
            pt(b.x),
            pt(b.y),
            image_path(&image.source),
            pt(b.width),
            pt(b.height)
        )
    }
}

/// Virtual path an image is served from
pub fn image_path(source: &ImageSource) -> String {
    format!("{ASSET_ROOT}/{}", source.file_name())
}

fn pt(value: i64) -> String {
    format!("{value}pt")
}

fn color(rgb: Rgb) -> String {
    format!("rgb(\"{}\")", rgb.to_hex())
}

fn stroke(stroke: Stroke) -> String {
    format!("{:.1}pt + {}", stroke.width, color(stroke.color))
}

/// Escape special characters for a Typst string literal
fn escape_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out
}
