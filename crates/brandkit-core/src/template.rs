//! Cover, closing page and the repeating content frame
//!
//! The cover and closing pages have one fixed layout per canvas kind. The
//! frame is stamped onto every content page after assembly, once the page
//! total is known.

use brandkit_ast::{
    Alignment, ClosingSpec, CoverSpec, FrameSpec, ImageElement, ImageSource, LineElement,
    PageKind, PageLayout, Point, Rect, RectElement, Rgb, Stroke, TextRun,
};

use crate::asset::AssetSet;
use crate::canvas::CanvasKind;
use crate::styler::Styler;

/// Fit `source` inside `frame`, keeping its aspect ratio, centered
pub fn fit_image(source: &ImageSource, frame: Rect) -> Rect {
    if source.width_px == 0 || source.height_px == 0 || frame.width <= 0 || frame.height <= 0 {
        return Rect::new(frame.x, frame.y, 0, 0);
    }
    let sx = frame.width as f64 / source.width_px as f64;
    let sy = frame.height as f64 / source.height_px as f64;
    let scale = sx.min(sy);
    let width = ((source.width_px as f64 * scale).round() as i64).min(frame.width);
    let height = ((source.height_px as f64 * scale).round() as i64).min(frame.height);
    Rect::new(
        frame.x + (frame.width - width) / 2,
        frame.y + (frame.height - height) / 2,
        width,
        height,
    )
}

/// Page templates for one canvas
#[derive(Debug, Clone, Copy)]
pub struct Template<'a> {
    styler: Styler<'a>,
    assets: &'a AssetSet,
}

impl<'a> Template<'a> {
    pub fn new(styler: Styler<'a>, assets: &'a AssetSet) -> Self {
        Self { styler, assets }
    }

    /// Push the logo fitted into `frame`, or nothing when there is no logo
    fn logo(&self, page: &mut PageLayout, frame: Rect) {
        if let Some(source) = self.assets.logo() {
            page.push(ImageElement {
                bounds: fit_image(source, frame),
                source: source.clone(),
            });
        }
    }

    /// Two-color horizontal stripe split at the middle
    fn stripe(&self, page: &mut PageLayout, y: i64, height: i64) {
        let theme = self.styler.theme;
        let width = self.styler.canvas.width;
        let half = width / 2;
        page.push(RectElement::filled(Rect::new(0, y, half, height), theme.primary));
        page.push(RectElement::filled(
            Rect::new(half, y, width - half, height),
            theme.logo_gold,
        ));
    }

    /// Full-width bar at the page bottom with centered small text
    fn bottom_bar(&self, page: &mut PageLayout, height: i64, fill: Rgb, text: &str, size: f64) {
        let theme = self.styler.theme;
        let canvas = self.styler.canvas;
        let bar = Rect::new(0, canvas.height - height, canvas.width, height);
        page.push(RectElement::filled(bar, fill));
        page.push(self.styler.centered(
            bar,
            vec![self.styler.custom(text, size, false, theme.pale)],
            Alignment::Center,
        ));
    }

    pub fn cover(&self, cover: &CoverSpec) -> PageLayout {
        let mut page = PageLayout::new(PageKind::Cover);
        match self.styler.canvas.kind {
            CanvasKind::Document => self.document_cover(&mut page, cover),
            CanvasKind::Deck => self.deck_cover(&mut page, cover),
        }
        page.notes = cover.notes.clone();
        page
    }

    fn document_cover(&self, page: &mut PageLayout, cover: &CoverSpec) {
        let s = &self.styler;
        let theme = s.theme;
        let width = s.canvas.width;
        page.background = Some(theme.white);

        page.push(RectElement::filled(Rect::new(0, 0, width, 463), theme.navy_dark));
        self.stripe(page, 459, 4);
        self.logo(page, Rect::new(54, 58, 180, 94));

        page.push(s.text(
            Rect::new(54, 240, 487, 40),
            vec![s.custom(&cover.title, 32.0, true, theme.white)],
            Alignment::Left,
        ));
        page.push(s.text(
            Rect::new(54, 283, 487, 22),
            vec![s.custom(&cover.subtitle, 16.0, false, theme.pale)],
            Alignment::Left,
        ));

        let badge = Rect::new(54, 312, 120, 22);
        page.push(RectElement::filled(badge, theme.primary).rounded(4));
        page.push(s.centered(
            badge,
            vec![s.custom(&cover.badge, 9.0, true, theme.white)],
            Alignment::Center,
        ));

        for (i, (label, value)) in cover.info.iter().enumerate() {
            let y = 536 + 20 * i as i64;
            page.push(s.text(
                Rect::new(54, y, 487, 16),
                vec![
                    s.custom(format!("{label}: "), 11.0, true, theme.text),
                    s.custom(value, 11.0, false, theme.text_secondary),
                ],
                Alignment::Left,
            ));
        }

        page.push(s.centered(
            Rect::new(0, 760, width, 20),
            vec![s.custom(&cover.tagline, 14.0, true, theme.logo_gold)],
            Alignment::Center,
        ));
        self.bottom_bar(page, 30, theme.navy_dark, &cover.copyright, 7.0);
    }

    fn deck_cover(&self, page: &mut PageLayout, cover: &CoverSpec) {
        let s = &self.styler;
        let theme = s.theme;
        let width = s.canvas.width;
        page.background = Some(theme.navy_dark);

        self.logo(page, Rect::new(282, 40, 396, 270));
        self.stripe(page, 324, 5);

        page.push(s.centered(
            Rect::new(72, 338, 816, 48),
            vec![s.custom(&cover.title, 40.0, true, theme.white)],
            Alignment::Center,
        ));
        page.push(s.centered(
            Rect::new(72, 389, 816, 30),
            vec![s.custom(&cover.subtitle, 20.0, false, theme.light)],
            Alignment::Center,
        ));

        let badge = Rect::new((width - 140) / 2, 430, 140, 24);
        page.push(RectElement::filled(badge, theme.primary).rounded(4));
        page.push(s.centered(
            badge,
            vec![s.custom(&cover.badge, 11.0, true, theme.white)],
            Alignment::Center,
        ));

        if !cover.info.is_empty() {
            let line = cover
                .info
                .iter()
                .map(|(_, value)| value.as_str())
                .collect::<Vec<_>>()
                .join("  •  ");
            let mut run = s.custom(line, 12.0, false, theme.text_muted);
            run.italic = true;
            page.push(s.centered(Rect::new(72, 462, 816, 20), vec![run], Alignment::Center));
        }

        page.push(s.centered(
            Rect::new(72, 488, 816, 22),
            vec![s.custom(&cover.tagline, 16.0, true, theme.logo_gold)],
            Alignment::Center,
        ));
        self.bottom_bar(page, 22, theme.primary, &cover.copyright, 9.0);
    }

    /// The closing page; only the deck canvas lays one out
    pub fn closing(&self, closing: &ClosingSpec) -> PageLayout {
        let s = &self.styler;
        let theme = s.theme;
        let mut page = PageLayout::new(PageKind::Closing);
        page.background = Some(theme.navy_dark);

        self.logo(&mut page, Rect::new(302, 36, 360, 180));
        self.stripe(&mut page, 230, 3);

        page.push(s.centered(
            Rect::new(72, 252, 816, 56),
            vec![s.custom(&closing.title, 44.0, true, theme.white)],
            Alignment::Center,
        ));
        page.push(s.centered(
            Rect::new(72, 324, 816, 26),
            vec![s.custom(&closing.contact, 16.0, false, theme.light)],
            Alignment::Center,
        ));
        let (lead, accent) = &closing.tagline;
        page.push(s.centered(
            Rect::new(72, 382, 816, 30),
            vec![
                s.custom(lead, 20.0, true, theme.white),
                s.custom(accent, 20.0, true, theme.logo_gold),
            ],
            Alignment::Center,
        ));
        page.push(s.centered(
            Rect::new(72, 454, 816, 16),
            vec![s.custom(&closing.copyright, 10.0, false, theme.text_muted)],
            Alignment::Center,
        ));
        let bar = Rect::new(0, s.canvas.height - 22, s.canvas.width, 22);
        page.push(RectElement::filled(bar, theme.primary));
        page.notes = closing.notes.clone();
        page
    }

    /// Decorate a content page with the accent line, label, logo and footer
    ///
    /// `number` is 1-based and counts every page, cover included.
    pub fn frame(&self, page: &mut PageLayout, frame: &FrameSpec, number: usize, total: usize) {
        let s = &self.styler;
        let theme = s.theme;
        let canvas = s.canvas;
        let metrics = &canvas.frame;
        let size = metrics.text_size;

        let (start, end) = metrics.accent_span;
        let half = (end - start) / 2;
        page.push(LineElement::horizontal(
            Point::new(start, metrics.accent_y),
            half,
            Stroke::new(theme.primary, metrics.accent_width),
        ));
        page.push(LineElement::horizontal(
            Point::new(start + half, metrics.accent_y),
            end - start - half,
            Stroke::new(theme.logo_gold, metrics.accent_width),
        ));

        page.push(s.centered(
            metrics.label,
            vec![s.custom(&frame.header_label, size, true, theme.text_secondary)],
            Alignment::Left,
        ));
        self.logo(page, metrics.logo);

        let bar = Rect::new(
            0,
            canvas.height - metrics.footer_height,
            canvas.width,
            metrics.footer_height,
        );
        page.push(RectElement::filled(bar, theme.navy_dark));
        let inner = Rect::new(
            bar.x + metrics.footer_padding,
            bar.y,
            bar.width - 2 * metrics.footer_padding,
            bar.height,
        );

        let mut left = s.custom(&frame.footer_left, size, false, theme.pale);
        left.italic = true;
        page.push(s.centered(inner, vec![left], Alignment::Left));
        page.push(s.centered(
            inner,
            vec![s.custom(page_index(number, total), size, true, theme.white)],
            Alignment::Center,
        ));
        page.push(s.centered(
            inner,
            vec![s.custom(&frame.footer_right, size, false, theme.logo_gold)],
            Alignment::Right,
        ));
    }
}

/// Running page index, e.g. `3 / 12`
pub fn page_index(number: usize, total: usize) -> String {
    format!("{number} / {total}")
}

/// Model runs for a two-color tagline
pub fn tagline_runs(lead: &str, accent: &str, accent_color: Rgb) -> Vec<TextRun> {
    vec![TextRun::bold(lead), TextRun::bold(accent).colored(accent_color)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::tests::logo_source;
    use crate::canvas::Canvas;
    use crate::theme::Theme;
    use brandkit_ast::Element;

    fn cover() -> CoverSpec {
        CoverSpec {
            title: "Brand Kit".to_string(),
            subtitle: "Visual Identity & Brand Guidelines".to_string(),
            badge: "VERSION 1.0".to_string(),
            info: vec![
                ("Company".to_string(), "CredSuvidha".to_string()),
                ("Date".to_string(), "October 2026".to_string()),
            ],
            tagline: "Trusted Partner. Swift Solutions.".to_string(),
            copyright: "© 2025 CredSuvidha. All rights reserved.".to_string(),
            notes: Some("Welcome".to_string()),
        }
    }

    fn frame_spec() -> FrameSpec {
        FrameSpec {
            header_label: "CredSuvidha Brand Kit".to_string(),
            footer_left: "CredSuvidha — Trusted Partner. Swift Solutions.".to_string(),
            footer_right: "www.credsuvidha.com".to_string(),
        }
    }

    #[test]
    fn test_fit_image_keeps_aspect() {
        let logo = logo_source();
        let fitted = fit_image(&logo, Rect::new(0, 0, 100, 100));
        assert_eq!(fitted, Rect::new(0, 25, 100, 50));

        let fitted = fit_image(&logo, Rect::new(469, 8, 68, 30));
        assert!(fitted.width <= 68 && fitted.height <= 30);
        assert_eq!(fitted.height, 30);
        assert_eq!(fitted.width, 60);
    }

    #[test]
    fn test_cover_without_logo() {
        let theme = Theme::default();
        for canvas in [Canvas::a4_document(), Canvas::widescreen_deck()] {
            let assets = AssetSet::new();
            let template = Template::new(Styler::new(&theme, &canvas), &assets);
            let page = template.cover(&cover());
            assert_eq!(page.kind, PageKind::Cover);
            assert_eq!(page.images().count(), 0);
            assert!(page.has_text("Brand Kit"));
            assert_eq!(page.notes.as_deref(), Some("Welcome"));
        }
    }

    #[test]
    fn test_cover_with_logo() {
        let theme = Theme::default();
        let canvas = Canvas::a4_document();
        let mut assets = AssetSet::new();
        assets.insert(logo_source());
        let template = Template::new(Styler::new(&theme, &canvas), &assets);
        let page = template.cover(&cover());
        let logo = page.images().next().unwrap();
        assert!(logo.bounds.x >= 54 && logo.bounds.right() <= 234);
    }

    #[test]
    fn test_frame_elements() {
        let theme = Theme::default();
        let canvas = Canvas::widescreen_deck();
        let mut assets = AssetSet::new();
        assets.insert(logo_source());
        let template = Template::new(Styler::new(&theme, &canvas), &assets);

        let mut page = PageLayout::new(PageKind::Content);
        template.frame(&mut page, &frame_spec(), 3, 12);

        assert!(page.has_text("3 / 12"));
        assert!(page.has_text("www.credsuvidha.com"));
        assert!(page.has_text("CredSuvidha Brand Kit"));
        assert_eq!(page.images().count(), 1);

        let lines: Vec<_> = page
            .elements
            .iter()
            .filter_map(|e| match e {
                Element::Line(l) => Some(l),
                _ => None,
            })
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].to, lines[1].from);
        assert_eq!(lines[1].to.x, 960);

        let footer = page.rects().last().unwrap();
        assert_eq!(footer.bounds.bottom(), canvas.height);
    }

    #[test]
    fn test_frame_without_logo() {
        let theme = Theme::default();
        let canvas = Canvas::a4_document();
        let assets = AssetSet::new();
        let template = Template::new(Styler::new(&theme, &canvas), &assets);
        let mut page = PageLayout::new(PageKind::Content);
        template.frame(&mut page, &frame_spec(), 2, 2);
        assert_eq!(page.images().count(), 0);
        assert!(page.has_text("2 / 2"));
    }

    #[test]
    fn test_closing_tagline_colors() {
        let theme = Theme::default();
        let canvas = Canvas::widescreen_deck();
        let assets = AssetSet::new();
        let template = Template::new(Styler::new(&theme, &canvas), &assets);
        let page = template.closing(&ClosingSpec {
            title: "Thank You".to_string(),
            contact: "info@credsuvidha.com".to_string(),
            tagline: ("Trusted Partner. ".to_string(), "Swift Solutions.".to_string()),
            copyright: "©".to_string(),
            notes: None,
        });
        assert_eq!(page.kind, PageKind::Closing);
        let tagline = page
            .texts()
            .find(|t| t.plain_text() == "Trusted Partner. Swift Solutions.")
            .unwrap();
        assert_eq!(tagline.runs[1].color, theme.logo_gold);
    }

    #[test]
    fn test_tagline_runs() {
        let runs = tagline_runs("A ", "B", Rgb::BLACK);
        assert!(runs.iter().all(|r| r.bold));
        assert_eq!(runs[1].color, Some(Rgb::BLACK));
    }
}
