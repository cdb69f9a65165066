//! Document assembler
//!
//! Turns a [`Document`] into a [`DocumentLayout`] on one canvas:
//!
//! 1. the cover page,
//! 2. every section on a fresh page, blocks flowed top to bottom through
//!    the interior with continuation pages when a block does not fit,
//! 3. the closing page when the canvas wants one,
//! 4. the content frame on every content page, last, so the running
//!    `n / total` index knows the total.
//!
//! Each block is lowered into a [`Fragment`] whose y coordinates start at
//! zero; the flow then moves it into place.

use brandkit_ast::{
    Alignment, Callout, CardSpec, CardStyle, ContentBlock, Document, DocumentLayout, FontFamily,
    GradientBlock, GridSpec, ImageBlock, ImageElement, LineElement, PageKind, PageLayout,
    PaletteSpec, Paragraph, Point, Rect, RectElement, Rgb, SectionSpec, Stroke, StyledRun,
    Subheading, TextRole, TextRun,
};
use tracing::{debug, info, warn};

use crate::asset::AssetSet;
use crate::canvas::Canvas;
use crate::error::{LayoutError, Result};
use crate::gradient;
use crate::grid::GridLayout;
use crate::styler::{Fragment, Styler};
use crate::table;
use crate::template::Template;
use crate::theme::Theme;

/// Width of the rule under section headings
const HEADING_RULE: f64 = 2.0;

/// Thickness of card accent bars
const ACCENT_BAR: i64 = 4;

/// Lays out documents on one canvas
#[derive(Debug, Clone, Copy)]
pub struct Assembler<'a> {
    styler: Styler<'a>,
    template: Template<'a>,
    assets: &'a AssetSet,
}

impl<'a> Assembler<'a> {
    pub fn new(theme: &'a Theme, canvas: &'a Canvas, assets: &'a AssetSet) -> Self {
        let styler = Styler::new(theme, canvas);
        Self {
            styler,
            template: Template::new(styler, assets),
            assets,
        }
    }

    fn canvas(&self) -> &'a Canvas {
        self.styler.canvas
    }

    fn theme(&self) -> &'a Theme {
        self.styler.theme
    }

    /// Lay out the whole document
    pub fn assemble(&self, document: &Document) -> Result<DocumentLayout> {
        let canvas = self.canvas();
        let mut pages = vec![self.template.cover(&document.cover)];

        for section in &document.sections {
            let section_pages = self.section(section)?;
            debug!(
                section = %section.heading,
                pages = section_pages.len(),
                "Laid out section"
            );
            pages.extend(section_pages);
        }

        if canvas.include_closing {
            if let Some(closing) = &document.closing {
                pages.push(self.template.closing(closing));
            }
        }

        let total = pages.len();
        for (i, page) in pages.iter_mut().enumerate() {
            if page.kind == PageKind::Content {
                self.template.frame(page, &document.frame, i + 1, total);
            }
        }

        info!(
            pages = total,
            width = canvas.width,
            height = canvas.height,
            logo = self.assets.logo().is_some(),
            "Assembled document layout"
        );

        Ok(DocumentLayout {
            meta: document.meta.clone(),
            width: canvas.width,
            height: canvas.height,
            pages,
        })
    }

    /// Pages of one section
    fn section(&self, section: &SectionSpec) -> Result<Vec<PageLayout>> {
        let canvas = self.canvas();
        let interior = canvas.interior();
        let gap = canvas.block_gap;

        let mut pages = Vec::new();
        let mut current = self.heading(&section.heading, interior.x);
        if let Some(intro) = &section.intro {
            let runs = self.styler.runs(&[TextRun::plain(intro.as_str())], TextRole::Body);
            current.stack(self.paragraph_runs(runs, Alignment::Left), gap);
        }
        // whether the current page holds more than its heading
        let mut has_content = section.intro.is_some();

        for block in &section.blocks {
            let fragment = self.lower(block, interior.x, interior.width)?;
            if fragment.elements.is_empty() {
                continue;
            }
            debug!(
                block = block.kind(),
                height = fragment.height,
                "Lowered block"
            );

            if has_content && current.height + gap + fragment.height > interior.height {
                pages.push(std::mem::take(&mut current));
                current = self.heading(&format!("{} (continued)", section.heading), interior.x);
            }
            current.stack(fragment, gap);
            has_content = true;
            if current.height > interior.height {
                warn!(
                    section = %section.heading,
                    block = block.kind(),
                    overflow = current.height - interior.height,
                    "Block does not fit on an empty page, placing it anyway"
                );
            }
        }
        pages.push(current);

        let count = pages.len();
        Ok(pages
            .into_iter()
            .enumerate()
            .map(|(i, fragment)| {
                let mut page = PageLayout::new(PageKind::Content);
                if canvas.tinted_pages {
                    page.background = Some(self.theme().surface_alt);
                }
                page.elements = fragment.shifted(interior.y).elements;
                if i == 0 {
                    page.notes = section.notes.clone();
                }
                debug!(page = i + 1, of = count, elements = page.elements.len(), "Built content page");
                page
            })
            .collect())
    }

    /// Section heading with its rule
    fn heading(&self, text: &str, x: i64) -> Fragment {
        let canvas = self.canvas();
        let interior = canvas.interior();
        let logo = canvas.frame.logo;
        // keep clear of the frame logo when it reaches into the interior
        let width = if logo.bottom() > interior.y {
            (logo.x - interior.x - canvas.gutter).min(interior.width)
        } else {
            interior.width
        };

        let mut fragment = Fragment::default();
        let title = self
            .styler
            .flowed(x, 0, width, vec![self.styler.run(text, TextRole::Heading)], Alignment::Left);
        let rule_y = title.bounds.bottom() + 4;
        fragment.push(title);
        fragment.push(LineElement::horizontal(
            Point::new(x, rule_y),
            interior.width,
            Stroke::new(self.theme().primary, HEADING_RULE),
        ));
        fragment.height = rule_y + HEADING_RULE.ceil() as i64;
        fragment
    }

    /// Lower one block at `x`, `width` points wide, starting at y = 0
    pub fn lower(&self, block: &ContentBlock, x: i64, width: i64) -> Result<Fragment> {
        let fragment = match block {
            ContentBlock::Paragraph(p) => self.paragraph(p, x, width),
            ContentBlock::Subheading(s) => self.subheading(s, x, width),
            ContentBlock::Table(t) => table::lower_table(&self.styler, t, x, width)?,
            ContentBlock::Swatch(p) => self.palette(p, x, width)?,
            ContentBlock::Gradient(g) => self.gradient(g, x, width)?,
            ContentBlock::Image(i) => self.image(i, x, width),
            ContentBlock::Grid(g) => self.grid(g, x, width)?,
            ContentBlock::Callout(c) => self.callout(c, x, width),
        };
        Ok(fragment)
    }

    fn paragraph_runs(&self, runs: Vec<StyledRun>, align: Alignment) -> Fragment {
        let interior = self.canvas().interior();
        self.text_fragment(interior.x, interior.width, runs, align)
    }

    fn text_fragment(
        &self,
        x: i64,
        width: i64,
        runs: Vec<StyledRun>,
        align: Alignment,
    ) -> Fragment {
        let text = self.styler.flowed(x, 0, width, runs, align);
        let mut fragment = Fragment {
            height: text.bounds.height,
            ..Default::default()
        };
        fragment.push(text);
        fragment
    }

    fn paragraph(&self, paragraph: &Paragraph, x: i64, width: i64) -> Fragment {
        let runs = self.styler.runs(&paragraph.runs, paragraph.role);
        self.text_fragment(x, width, runs, paragraph.align)
    }

    fn subheading(&self, subheading: &Subheading, x: i64, width: i64) -> Fragment {
        let mut run = self.styler.run(subheading.text.as_str(), TextRole::Subheading);
        if let Some(color) = subheading.color {
            run.color = color;
        }
        self.text_fragment(x, width, vec![run], Alignment::Left)
    }

    fn palette(&self, palette: &PaletteSpec, x: i64, width: i64) -> Result<Fragment> {
        let mut fragment = Fragment::default();
        if let Some(title) = &palette.title {
            fragment = self.text_fragment(
                x,
                width,
                vec![self.styler.run(title.as_str(), TextRole::Label)],
                Alignment::Left,
            );
        }
        let rows = table::lower_palette(&self.styler, &palette.tokens, x, width)?;
        fragment.stack(rows, self.canvas().block_gap / 2);
        Ok(fragment)
    }

    fn gradient(&self, block: &GradientBlock, x: i64, width: i64) -> Result<Fragment> {
        let spec = &block.gradient;
        let height = block.height.unwrap_or(self.canvas().gradient_height);

        let mut fragment = self.text_fragment(
            x,
            width,
            vec![self.styler.run(spec.name.as_str(), TextRole::Label)],
            Alignment::Left,
        );

        let mut strip = Fragment {
            height,
            ..Default::default()
        };
        for band in gradient::approximate(spec, Rect::new(x, 0, width, height))? {
            strip.push(band);
        }
        fragment.stack(strip, 4);

        if !spec.css.is_empty() {
            let mut css = self.styler.run(spec.css.as_str(), TextRole::Caption);
            css.family = FontFamily::Mono;
            fragment.stack(self.text_fragment(x, width, vec![css], Alignment::Left), 3);
        }
        Ok(fragment)
    }

    fn image(&self, block: &ImageBlock, x: i64, width: i64) -> Fragment {
        let Some(source) = self.assets.get(&block.asset) else {
            warn!(asset = %block.asset, "Image asset not loaded, leaving it out");
            return Fragment::default();
        };
        let canvas = self.canvas();
        let pad = if block.backdrop.is_some() {
            canvas.box_padding
        } else {
            0
        };
        let image_width = block.width.min(width - 2 * pad).max(0);
        let image_height = source.height_for_width(image_width);
        let image_x = match block.align {
            Alignment::Left | Alignment::Justify => x + pad,
            Alignment::Center => x + (width - image_width) / 2,
            Alignment::Right => x + width - pad - image_width,
        };

        let mut fragment = Fragment::default();
        if let Some(backdrop) = block.backdrop {
            let panel = Rect::new(x, 0, width, image_height + 2 * pad);
            fragment.push(
                RectElement::filled(panel, backdrop)
                    .rounded(6)
                    .stroked(Stroke::new(self.theme().border, 0.75)),
            );
        }
        fragment.push(ImageElement {
            bounds: Rect::new(image_x, pad, image_width, image_height),
            source: source.clone(),
        });
        fragment.height = image_height + 2 * pad;

        if let Some(caption) = &block.caption {
            let run = self.styler.run(caption.as_str(), TextRole::Caption);
            fragment.stack(self.text_fragment(x, width, vec![run], Alignment::Center), 4);
        }
        fragment
    }

    /// Height a card needs inside a cell of `width`
    fn card_height(&self, card: &CardSpec, style: CardStyle, width: i64) -> i64 {
        let pad = self.canvas().box_padding;
        let inner = width - 2 * pad - ACCENT_BAR;
        let title_role = if style == CardStyle::Stat {
            TextRole::Stat
        } else {
            TextRole::Label
        };
        let title = self
            .styler
            .height(&[self.styler.run(card.title.as_str(), title_role)], inner);
        let body = self
            .styler
            .height(&[self.styler.run(card.body.as_str(), TextRole::Small)], inner);
        2 * pad + ACCENT_BAR + title + 4 + body
    }

    fn grid(&self, spec: &GridSpec, x: i64, width: i64) -> Result<Fragment> {
        let canvas = self.canvas();
        if spec.columns == 0 {
            return Err(LayoutError::InvalidColumns.into());
        }
        let sizing = GridLayout::fill(Point::new(x, 0), width, spec.columns, 0, canvas.gutter)?;
        sizing.ensure_fits(width)?;

        let cell_height = match spec.cell_height {
            Some(height) => height,
            None => spec
                .cards
                .iter()
                .map(|card| self.card_height(card, spec.style, sizing.cell_width))
                .max()
                .unwrap_or(0),
        };
        let grid = GridLayout {
            cell_height,
            ..sizing
        };

        let mut fragment = Fragment::default();
        for (card, cell) in spec.cards.iter().zip(grid.cells(spec.cards.len())?) {
            self.card(&mut fragment, card, spec.style, cell);
        }
        fragment.height = grid.bounds(spec.cards.len()).height;
        Ok(fragment)
    }

    fn card(&self, fragment: &mut Fragment, card: &CardSpec, style: CardStyle, cell: Rect) {
        let theme = self.theme();
        let s = &self.styler;
        let pad = self.canvas().box_padding;
        let outline = Stroke::new(theme.border, 0.75);

        match style {
            CardStyle::TopAccent => {
                fragment.push(RectElement::filled(cell, theme.white).stroked(outline));
                fragment.push(RectElement::filled(
                    Rect::new(cell.x, cell.y, cell.width, ACCENT_BAR),
                    card.accent,
                ));
                let inner = Rect::new(
                    cell.x + pad,
                    cell.y + ACCENT_BAR + pad,
                    cell.width - 2 * pad,
                    cell.height - ACCENT_BAR - 2 * pad,
                );
                self.card_text(fragment, card, inner, TextRole::Label, theme.navy_dark, Alignment::Left);
            }
            CardStyle::LeftAccent => {
                fragment.push(RectElement::filled(cell, theme.white).stroked(outline));
                fragment.push(RectElement::filled(
                    Rect::new(cell.x, cell.y, ACCENT_BAR, cell.height),
                    card.accent,
                ));
                let inner = Rect::new(
                    cell.x + ACCENT_BAR + pad,
                    cell.y + pad,
                    cell.width - ACCENT_BAR - 2 * pad,
                    cell.height - 2 * pad,
                );
                self.card_text(fragment, card, inner, TextRole::Label, theme.navy_dark, Alignment::Left);
            }
            CardStyle::Stat => {
                fragment.push(RectElement::filled(cell, theme.white).rounded(6).stroked(outline));
                let title_run = s.run(card.title.as_str(), TextRole::Stat);
                let body_run = s.run(card.body.as_str(), TextRole::Small);
                let inner_width = cell.width - 2 * pad;
                let block_height =
                    s.height(std::slice::from_ref(&title_run), inner_width) + 4
                        + s.height(std::slice::from_ref(&body_run), inner_width);
                let top = cell.y + (cell.height - block_height).max(0) / 2;
                let inner = Rect::new(cell.x + pad, top, inner_width, block_height);
                self.card_text(fragment, card, inner, TextRole::Stat, card.accent, Alignment::Center);
            }
        }
    }

    /// Title above body inside `inner`
    fn card_text(
        &self,
        fragment: &mut Fragment,
        card: &CardSpec,
        inner: Rect,
        title_role: TextRole,
        title_color: Rgb,
        align: Alignment,
    ) {
        let s = &self.styler;
        let mut title = s.run(card.title.as_str(), title_role);
        title.color = title_color;
        let title = s.flowed(inner.x, inner.y, inner.width, vec![title], align);
        let body_y = title.bounds.bottom() + 4;
        fragment.push(title);
        fragment.push(s.flowed(
            inner.x,
            body_y,
            inner.width,
            vec![s.run(card.body.as_str(), TextRole::Small)],
            align,
        ));
    }

    fn callout(&self, callout: &Callout, x: i64, width: i64) -> Fragment {
        let pad = self.canvas().box_padding;
        let runs = self.styler.runs(&callout.runs, callout.role);
        let text = self
            .styler
            .flowed(x + pad, pad, width - 2 * pad, runs, callout.align);
        let height = text.bounds.height + 2 * pad;

        let mut panel = RectElement::filled(Rect::new(x, 0, width, height), callout.fill).rounded(6);
        if let Some(border) = callout.border {
            panel = panel.stroked(Stroke::new(border, 1.0));
        }
        let mut fragment = Fragment {
            height,
            ..Default::default()
        };
        fragment.push(panel);
        fragment.push(text);
        fragment
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asset::tests::logo_source;
    use brandkit_ast::{
        ClosingSpec, ColorToken, CoverSpec, DocumentMeta, Element, FrameSpec, GradientSpec,
        GradientStop,
    };

    fn document(sections: Vec<SectionSpec>) -> Document {
        Document {
            meta: DocumentMeta {
                title: "Brand Kit".to_string(),
                ..Default::default()
            },
            cover: CoverSpec {
                title: "Brand Kit".to_string(),
                notes: Some("cover notes".to_string()),
                ..Default::default()
            },
            frame: FrameSpec {
                header_label: "CredSuvidha Brand Kit".to_string(),
                footer_left: "left".to_string(),
                footer_right: "www.credsuvidha.com".to_string(),
            },
            sections,
            closing: Some(ClosingSpec {
                title: "Thank You".to_string(),
                ..Default::default()
            }),
        }
    }

    fn sample() -> Document {
        let theme = Theme::default();
        document(vec![
            SectionSpec::new("Brand Overview")
                .with_intro("Who we are")
                .with_notes("overview notes")
                .block(ContentBlock::Grid(
                    GridSpec::new(
                        4,
                        vec![
                            CardSpec::new("500+ Cr", "Loans Disbursed", theme.primary),
                            CardSpec::new("10,000+", "Happy Customers", theme.logo_gold),
                            CardSpec::new("50+", "Banking Partners", theme.emerald),
                            CardSpec::new("24/7", "Expert Support", theme.accent),
                        ],
                    )
                    .with_style(CardStyle::Stat),
                )),
            SectionSpec::new("Logo").block(ContentBlock::Image(
                ImageBlock::new("logo", 200)
                    .with_caption("Primary")
                    .on_backdrop(theme.logo_cream),
            )),
            SectionSpec::new("Color Palette").block(ContentBlock::Swatch(PaletteSpec::new(
                "Brand",
                vec![
                    ColorToken::parse("Brand 600", "#1A6EF5", "Primary").unwrap(),
                    ColorToken::parse("Brand 500", "#338DFF", "Hover").unwrap(),
                ],
            ))),
            SectionSpec::new("Gradients").block(ContentBlock::Gradient(GradientBlock {
                gradient: GradientSpec::new(
                    "Hero",
                    vec![
                        GradientStop::new(theme.primary, 0.5),
                        GradientStop::new(theme.accent, 0.5),
                    ],
                )
                .with_css("linear-gradient(135deg, #1a6ef5, #f97316)"),
                height: None,
            })),
        ])
    }

    fn with_logo() -> AssetSet {
        let mut assets = AssetSet::new();
        assets.insert(logo_source());
        assets
    }

    #[test]
    fn test_page_sequence_deck() {
        let theme = Theme::default();
        let canvas = Canvas::widescreen_deck();
        let assets = AssetSet::new();
        let layout = Assembler::new(&theme, &canvas, &assets)
            .assemble(&sample())
            .unwrap();

        let kinds: Vec<PageKind> = layout.pages.iter().map(|p| p.kind).collect();
        assert_eq!(kinds.first(), Some(&PageKind::Cover));
        assert_eq!(kinds.last(), Some(&PageKind::Closing));
        assert_eq!(layout.page_count(), 6);
        assert_eq!((layout.width, layout.height), (960, 540));
        assert_eq!(layout.pages[1].background, Some(theme.surface_alt));
    }

    #[test]
    fn test_document_has_no_closing_page() {
        let theme = Theme::default();
        let canvas = Canvas::a4_document();
        let assets = AssetSet::new();
        let layout = Assembler::new(&theme, &canvas, &assets)
            .assemble(&sample())
            .unwrap();
        assert_eq!(layout.page_count(), 5);
        assert!(layout.pages.iter().all(|p| p.kind != PageKind::Closing));
        assert_eq!(layout.pages[1].background, None);
    }

    #[test]
    fn test_missing_logo_is_omitted() {
        let theme = Theme::default();
        for canvas in [Canvas::a4_document(), Canvas::widescreen_deck()] {
            let assets = AssetSet::new();
            let layout = Assembler::new(&theme, &canvas, &assets)
                .assemble(&sample())
                .unwrap();
            assert!(layout.pages.iter().all(|p| p.images().count() == 0));
            assert!(layout.images().is_empty());
        }
    }

    #[test]
    fn test_logo_on_cover_and_frame() {
        let theme = Theme::default();
        let canvas = Canvas::a4_document();
        let assets = with_logo();
        let layout = Assembler::new(&theme, &canvas, &assets)
            .assemble(&sample())
            .unwrap();
        assert_eq!(layout.pages[0].images().count(), 1);
        for page in layout.pages.iter().filter(|p| p.kind == PageKind::Content) {
            assert!(page.images().any(|i| i.bounds == crate::template::fit_image(
                &i.source,
                canvas.frame.logo
            )));
        }
        assert_eq!(layout.images().len(), 1);
    }

    #[test]
    fn test_page_index_on_content_pages() {
        let theme = Theme::default();
        let canvas = Canvas::widescreen_deck();
        let assets = AssetSet::new();
        let layout = Assembler::new(&theme, &canvas, &assets)
            .assemble(&sample())
            .unwrap();
        let total = layout.page_count();
        for (i, page) in layout.pages.iter().enumerate() {
            let index = format!("{} / {}", i + 1, total);
            assert_eq!(page.has_text(&index), page.kind == PageKind::Content);
        }
    }

    #[test]
    fn test_assembly_is_deterministic() {
        let theme = Theme::default();
        let canvas = Canvas::a4_document();
        let assets = with_logo();
        let assembler = Assembler::new(&theme, &canvas, &assets);
        let doc = sample();
        assert_eq!(assembler.assemble(&doc).unwrap(), assembler.assemble(&doc).unwrap());
    }

    #[test]
    fn test_content_stays_inside_interior_width() {
        let theme = Theme::default();
        for canvas in [Canvas::a4_document(), Canvas::widescreen_deck()] {
            let assets = with_logo();
            let layout = Assembler::new(&theme, &canvas, &assets)
                .assemble(&document(sample().sections))
                .unwrap();
            let interior = canvas.interior();
            let page = &layout.pages[1];
            // elements before the frame are section content
            for element in page.elements.iter().take(3) {
                let bounds = element.bounds();
                assert!(bounds.x >= interior.x, "{element:?}");
                assert!(bounds.right() <= interior.right(), "{element:?}");
            }
        }
    }

    #[test]
    fn test_continuation_pages() {
        let theme = Theme::default();
        let canvas = Canvas::widescreen_deck();
        let assets = AssetSet::new();
        let mut section = SectionSpec::new("Long").with_notes("only once");
        for i in 0..40 {
            section = section.block(ContentBlock::Paragraph(Paragraph::text(format!(
                "Paragraph {i} with some words in it"
            ))));
        }
        let layout = Assembler::new(&theme, &canvas, &assets)
            .assemble(&document(vec![section]))
            .unwrap();

        let content: Vec<&PageLayout> = layout
            .pages
            .iter()
            .filter(|p| p.kind == PageKind::Content)
            .collect();
        assert!(content.len() > 1);
        assert_eq!(content[0].notes.as_deref(), Some("only once"));
        assert!(content[1..].iter().all(|p| p.notes.is_none()));
        assert!(content[1].has_text("Long (continued)"));

        let interior = canvas.interior();
        for page in &content {
            for text in page.texts().filter(|t| t.plain_text().starts_with("Paragraph")) {
                assert!(text.bounds.bottom() <= interior.bottom());
            }
        }
    }

    #[test]
    fn test_stat_grid_cells() {
        let theme = Theme::default();
        let canvas = Canvas::a4_document();
        let assets = AssetSet::new();
        let assembler = Assembler::new(&theme, &canvas, &assets);
        let ContentBlock::Grid(grid) = &sample().sections[0].blocks[0] else {
            panic!("expected grid");
        };
        let fragment = assembler
            .lower(&ContentBlock::Grid(grid.clone()), 54, 487)
            .unwrap();
        let cards: Vec<Rect> = fragment
            .elements
            .iter()
            .filter_map(|e| match e {
                Element::Rect(r) => Some(r.bounds),
                _ => None,
            })
            .collect();
        assert_eq!(cards.len(), 4);
        assert_eq!(cards[0].x, 54);
        assert_eq!(cards[1].x, 54 + cards[0].width + canvas.gutter);
        assert!(cards[3].right() <= 54 + 487);

        let first = fragment
            .elements
            .iter()
            .find_map(|e| match e {
                Element::Text(t) if t.plain_text() == "500+ Cr" => Some(t),
                _ => None,
            })
            .unwrap();
        assert_eq!(first.runs[0].color, theme.primary);
    }

    #[test]
    fn test_grid_fixed_cell_height() {
        let theme = Theme::default();
        let canvas = Canvas::a4_document();
        let assets = AssetSet::new();
        let assembler = Assembler::new(&theme, &canvas, &assets);
        let cards = (0..4)
            .map(|i| CardSpec::new(format!("Card {i}"), "body", theme.primary))
            .collect();
        let grid = ContentBlock::Grid(GridSpec::new(2, cards).with_cell_height(100));

        let fragment = assembler.lower(&grid, 54, 487).unwrap();
        assert_eq!(fragment.height, 2 * 100 + canvas.gutter);
        let outlines: Vec<Rect> = fragment
            .elements
            .iter()
            .filter_map(|e| match e {
                Element::Rect(r) if r.stroke.is_some() => Some(r.bounds),
                _ => None,
            })
            .collect();
        assert_eq!(outlines.len(), 4);
        assert!(outlines.iter().all(|r| r.height == 100));
        assert_eq!(outlines[2].y, 100 + canvas.gutter);
    }

    #[test]
    fn test_grid_errors() {
        let theme = Theme::default();
        let canvas = Canvas::a4_document();
        let assets = AssetSet::new();
        let assembler = Assembler::new(&theme, &canvas, &assets);

        let zero = ContentBlock::Grid(GridSpec::new(0, Vec::new()));
        let err = assembler.lower(&zero, 54, 487).unwrap_err();
        assert_eq!(err.code(), "LAYOUT001");

        let wide = ContentBlock::Grid(GridSpec::new(
            50,
            vec![CardSpec::new("a", "b", Rgb::BLACK)],
        ));
        let err = assembler.lower(&wide, 54, 487).unwrap_err();
        assert_eq!(err.code(), "LAYOUT002");
    }

    #[test]
    fn test_bad_gradient_fails_assembly() {
        let theme = Theme::default();
        let canvas = Canvas::a4_document();
        let assets = AssetSet::new();
        let doc = document(vec![SectionSpec::new("Gradients").block(
            ContentBlock::Gradient(GradientBlock {
                gradient: GradientSpec::new("Broken", vec![GradientStop::new(Rgb::BLACK, 0.4)]),
                height: None,
            }),
        )]);
        let err = Assembler::new(&theme, &canvas, &assets)
            .assemble(&doc)
            .unwrap_err();
        assert_eq!(err.code(), "LAYOUT003");
    }

    #[test]
    fn test_gradient_block_tiles_width() {
        let theme = Theme::default();
        let canvas = Canvas::a4_document();
        let assets = AssetSet::new();
        let assembler = Assembler::new(&theme, &canvas, &assets);
        let block = &sample().sections[3].blocks[0];
        let fragment = assembler.lower(block, 54, 487).unwrap();
        let bands: Vec<Rect> = fragment
            .elements
            .iter()
            .filter_map(|e| match e {
                Element::Rect(r) => Some(r.bounds),
                _ => None,
            })
            .collect();
        assert_eq!(bands.len(), 2);
        assert_eq!(bands[0].x, 54);
        assert_eq!(bands[1].right(), 54 + 487);
        assert_eq!(bands[0].height, canvas.gradient_height);
    }

    #[test]
    fn test_missing_image_block_is_skipped() {
        let theme = Theme::default();
        let canvas = Canvas::a4_document();
        let assets = AssetSet::new();
        let assembler = Assembler::new(&theme, &canvas, &assets);
        let fragment = assembler
            .lower(&ContentBlock::Image(ImageBlock::new("logo", 200)), 54, 487)
            .unwrap();
        assert!(fragment.elements.is_empty());
        assert_eq!(fragment.height, 0);
    }

    #[test]
    fn test_callout_box_wraps_text() {
        let theme = Theme::default();
        let canvas = Canvas::a4_document();
        let assets = AssetSet::new();
        let assembler = Assembler::new(&theme, &canvas, &assets);
        let callout = Callout::new(
            vec![
                TextRun::bold("Trusted Partner. "),
                TextRun::bold("Swift Solutions.").colored(theme.logo_gold),
            ],
            theme.navy_dark,
        )
        .aligned(Alignment::Center);
        let fragment = assembler
            .lower(&ContentBlock::Callout(callout), 54, 487)
            .unwrap();
        let Element::Rect(panel) = &fragment.elements[0] else {
            panic!("expected panel");
        };
        let Element::Text(text) = &fragment.elements[1] else {
            panic!("expected text");
        };
        assert_eq!(panel.fill, Some(theme.navy_dark));
        assert!(text.bounds.x > panel.bounds.x);
        assert!(text.bounds.bottom() < panel.bounds.bottom());
        assert_eq!(fragment.height, panel.bounds.height);
    }
}
