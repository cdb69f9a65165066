//! Page canvases
//!
//! A canvas fixes the page size, the interior margins, the type scale and
//! the template geometry for one output format.

use brandkit_ast::{Insets, Rect, TextRole};

/// Which family of template the canvas uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CanvasKind {
    /// Portrait printed document
    Document,
    /// Widescreen slide deck
    Deck,
}

/// Font sizes per text role, in points
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TypeScale {
    pub display: f64,
    pub heading: f64,
    pub subheading: f64,
    pub label: f64,
    pub body: f64,
    pub small: f64,
    pub caption: f64,
    pub stat: f64,
}

impl TypeScale {
    pub fn size(&self, role: TextRole) -> f64 {
        match role {
            TextRole::Display => self.display,
            TextRole::Heading => self.heading,
            TextRole::Subheading => self.subheading,
            TextRole::Label => self.label,
            TextRole::Body => self.body,
            TextRole::Small => self.small,
            TextRole::Caption => self.caption,
            TextRole::Stat => self.stat,
        }
    }
}

/// Geometry of the repeating content page frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameMetrics {
    /// Vertical position of the two-color accent line
    pub accent_y: i64,
    /// Thickness of the accent line
    pub accent_width: f64,
    /// Left and right ends of the accent line
    pub accent_span: (i64, i64),
    /// Box of the running header label
    pub label: Rect,
    /// Box the small logo is fitted into
    pub logo: Rect,
    /// Height of the footer bar
    pub footer_height: i64,
    /// Horizontal padding of footer text
    pub footer_padding: i64,
    /// Size of footer, label and page index text
    pub text_size: f64,
}

/// Fixed page size with margins, type scale and template metrics
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    pub kind: CanvasKind,
    pub width: i64,
    pub height: i64,
    /// Margins around the content interior
    pub margins: Insets,
    pub type_scale: TypeScale,
    /// Line height as a multiple of font size
    pub leading: f64,
    /// Vertical gap between blocks
    pub block_gap: i64,
    /// Space between grid cells
    pub gutter: i64,
    /// Padding inside table cells
    pub cell_padding: i64,
    /// Padding inside cards and callouts
    pub box_padding: i64,
    /// Default gradient strip height
    pub gradient_height: i64,
    /// Palette swatch square size
    pub swatch_size: i64,
    pub frame: FrameMetrics,
    /// Paint content pages with the alternate surface color
    pub tinted_pages: bool,
    /// Emit the closing page when the document has one
    pub include_closing: bool,
}

impl Canvas {
    /// A4 portrait, 595 x 842 pt
    pub fn a4_document() -> Self {
        let width = 595;
        let height = 842;
        Self {
            kind: CanvasKind::Document,
            width,
            height,
            margins: Insets::new(65, 54, 61, 54),
            type_scale: TypeScale {
                display: 32.0,
                heading: 20.0,
                subheading: 14.0,
                label: 11.0,
                body: 10.0,
                small: 9.0,
                caption: 8.0,
                stat: 16.0,
            },
            leading: 1.4,
            block_gap: 10,
            gutter: 12,
            cell_padding: 6,
            box_padding: 12,
            gradient_height: 40,
            swatch_size: 14,
            frame: FrameMetrics {
                accent_y: 40,
                accent_width: 1.5,
                accent_span: (54, width - 54),
                label: Rect::new(54, 24, 300, 12),
                logo: Rect::new(width - 54 - 72, 8, 68, 30),
                footer_height: 29,
                footer_padding: 22,
                text_size: 7.0,
            },
            tinted_pages: false,
            include_closing: false,
        }
    }

    /// 16:9 widescreen, 960 x 540 pt
    pub fn widescreen_deck() -> Self {
        let width = 960;
        let height = 540;
        Self {
            kind: CanvasKind::Deck,
            width,
            height,
            margins: Insets::new(40, 58, 44, 58),
            type_scale: TypeScale {
                display: 40.0,
                heading: 28.0,
                subheading: 16.0,
                label: 13.0,
                body: 13.0,
                small: 11.0,
                caption: 9.0,
                stat: 24.0,
            },
            leading: 1.25,
            block_gap: 10,
            gutter: 14,
            cell_padding: 4,
            box_padding: 10,
            gradient_height: 30,
            swatch_size: 12,
            frame: FrameMetrics {
                accent_y: 2,
                accent_width: 4.0,
                accent_span: (0, width),
                label: Rect::new(58, 12, 300, 12),
                logo: Rect::new(width - 58 - 150, 10, 150, 40),
                footer_height: 30,
                footer_padding: 29,
                text_size: 9.0,
            },
            tinted_pages: true,
            include_closing: true,
        }
    }

    /// Whole page rectangle
    pub fn page(&self) -> Rect {
        Rect::new(0, 0, self.width, self.height)
    }

    /// Rectangle content is flowed into
    pub fn interior(&self) -> Rect {
        self.page().inset(&self.margins)
    }

    pub fn size(&self, role: TextRole) -> f64 {
        self.type_scale.size(role)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_a4_interior() {
        let canvas = Canvas::a4_document();
        assert_eq!(canvas.interior(), Rect::new(54, 65, 487, 716));
        assert_eq!(canvas.size(TextRole::Body), 10.0);
    }

    #[test]
    fn test_deck_interior_clears_frame() {
        let canvas = Canvas::widescreen_deck();
        let interior = canvas.interior();
        assert_eq!(interior.width, 844);
        assert!(interior.bottom() <= canvas.height - canvas.frame.footer_height);
        assert!(canvas.include_closing);
    }

    #[test]
    fn test_frame_logo_inside_page() {
        for canvas in [Canvas::a4_document(), Canvas::widescreen_deck()] {
            let logo = canvas.frame.logo;
            assert!(logo.x >= 0 && logo.right() <= canvas.width);
            assert!(logo.bottom() < canvas.interior().y + canvas.height / 4);
        }
    }
}
