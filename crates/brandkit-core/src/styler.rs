//! Resolving text roles into styled runs

use brandkit_ast::{
    Alignment, Element, FontFamily, Rect, Rgb, StyledRun, TextElement, TextRole, TextRun,
    VerticalAlign,
};

use crate::canvas::Canvas;
use crate::measure::TextMeasure;
use crate::theme::Theme;

/// Elements laid out relative to a block origin, plus the height they use
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Fragment {
    pub elements: Vec<Element>,
    pub height: i64,
}

impl Fragment {
    pub fn push(&mut self, element: impl Into<Element>) {
        self.elements.push(element.into());
    }

    /// Move every element down by `dy`
    pub fn shifted(mut self, dy: i64) -> Self {
        for element in &mut self.elements {
            element.translate(0, dy);
        }
        self
    }

    /// Append `other` below this fragment with `gap` points between them
    pub fn stack(&mut self, other: Fragment, gap: i64) {
        let offset = if self.height > 0 { self.height + gap } else { 0 };
        let other = other.shifted(offset);
        self.elements.extend(other.elements);
        self.height = offset + other.height;
    }
}

/// Theme, canvas and measurer bundled for layout routines
#[derive(Debug, Clone, Copy)]
pub struct Styler<'a> {
    pub theme: &'a Theme,
    pub canvas: &'a Canvas,
    pub measure: TextMeasure,
}

impl<'a> Styler<'a> {
    pub fn new(theme: &'a Theme, canvas: &'a Canvas) -> Self {
        Self {
            theme,
            canvas,
            measure: TextMeasure::default(),
        }
    }

    /// Resolve model runs for a role
    pub fn runs(&self, runs: &[TextRun], role: TextRole) -> Vec<StyledRun> {
        let size = self.canvas.size(role);
        let role_bold = matches!(
            role,
            TextRole::Display
                | TextRole::Heading
                | TextRole::Subheading
                | TextRole::Label
                | TextRole::Stat
        );
        runs.iter()
            .map(|run| StyledRun {
                text: run.text.clone(),
                size,
                bold: run.bold || role_bold,
                italic: run.italic,
                color: run.color.unwrap_or_else(|| self.theme.role_color(role)),
                family: if run.monospace {
                    FontFamily::Mono
                } else if role == TextRole::Display {
                    FontFamily::Serif
                } else {
                    FontFamily::Sans
                },
            })
            .collect()
    }

    /// A single run of `text` in a role
    pub fn run(&self, text: impl Into<String>, role: TextRole) -> StyledRun {
        self.runs(&[TextRun::plain(text)], role)
            .pop()
            .unwrap_or_else(|| StyledRun {
                text: String::new(),
                size: self.canvas.size(role),
                bold: false,
                italic: false,
                color: self.theme.role_color(role),
                family: FontFamily::Sans,
            })
    }

    /// A single run with explicit size, weight and color
    pub fn custom(&self, text: impl Into<String>, size: f64, bold: bool, color: Rgb) -> StyledRun {
        StyledRun {
            text: text.into(),
            size,
            bold,
            italic: false,
            color,
            family: FontFamily::Sans,
        }
    }

    /// Height the runs need inside `width`
    pub fn height(&self, runs: &[StyledRun], width: i64) -> i64 {
        self.measure.height(runs, width, self.canvas.leading)
    }

    /// Top-aligned text box
    pub fn text(&self, bounds: Rect, runs: Vec<StyledRun>, align: Alignment) -> TextElement {
        TextElement {
            bounds,
            runs,
            align,
            valign: VerticalAlign::Top,
            leading: self.canvas.leading,
        }
    }

    /// Text box centered vertically in its bounds
    pub fn centered(&self, bounds: Rect, runs: Vec<StyledRun>, align: Alignment) -> TextElement {
        TextElement {
            valign: VerticalAlign::Middle,
            ..self.text(bounds, runs, align)
        }
    }

    /// Text box sized to the runs, starting at `(x, y)`
    pub fn flowed(
        &self,
        x: i64,
        y: i64,
        width: i64,
        runs: Vec<StyledRun>,
        align: Alignment,
    ) -> TextElement {
        let height = self.height(&runs, width);
        self.text(Rect::new(x, y, width, height), runs, align)
    }
}
