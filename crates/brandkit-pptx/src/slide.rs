//! Slide parts from page layouts.
//!
//! A [`PageLayout`] becomes one `p:sld` part: an optional solid
//! background, then every element as an absolutely positioned shape in
//! painting order. Rectangles and ovals are `p:sp` preset shapes, lines are
//! `p:cxnSp` connectors, text boxes carry one `a:r` per styled run and
//! images are `p:pic` elements referring to the slide's relationships.

use brandkit_ast::{
    Alignment, Element, FontFamily, ImageElement, LineElement, PageLayout, Rect, RectElement,
    Rgb, ShapeKind, Stroke, StyledRun, TextElement, VerticalAlign,
};
use brandkit_core::PptxConfig;

use crate::constants::*;
use crate::error::{PptxError, Result};
use crate::media::MediaRegistry;

/// Line spacing PowerPoint calls 100%, as a multiple of the font size
const SINGLE_SPACING: f64 = 1.2;

/// Convert points to EMU
pub fn emu(points: i64) -> i64 {
    points * EMU_PER_POINT
}

fn emu_f(points: f64) -> i64 {
    (points * EMU_PER_POINT as f64).round() as i64
}

/// Escape text for XML content and attribute values
pub fn escape_xml(s: &str) -> String {
    quick_xml::escape::escape(s).into_owned()
}

/// Typeface names, one per [`FontFamily`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideFonts {
    pub sans: String,
    pub serif: String,
    pub mono: String,
}

impl Default for SlideFonts {
    fn default() -> Self {
        Self::from(&PptxConfig::default())
    }
}

impl From<&PptxConfig> for SlideFonts {
    fn from(config: &PptxConfig) -> Self {
        Self {
            sans: config.font_family.clone(),
            serif: config.serif_family.clone(),
            mono: config.mono_family.clone(),
        }
    }
}

impl SlideFonts {
    fn typeface(&self, family: FontFamily) -> &str {
        match family {
            FontFamily::Sans => &self.sans,
            FontFamily::Serif => &self.serif,
            FontFamily::Mono => &self.mono,
        }
    }
}

/// A generated slide part
#[derive(Debug, Clone, PartialEq)]
pub struct SlidePart {
    pub xml: String,
    /// `(relationship id, media file name)` per image on the slide
    pub images: Vec<(String, String)>,
}

impl SlidePart {
    /// First relationship id free after the layout and images
    pub fn next_rel_id(&self) -> usize {
        self.images.len() + 2
    }
}

/// Builds slide XML
#[derive(Debug, Clone, Copy)]
pub struct SlideBuilder<'a> {
    locale: &'a str,
    fonts: &'a SlideFonts,
    media: &'a MediaRegistry,
}

impl<'a> SlideBuilder<'a> {
    pub fn new(locale: &'a str, fonts: &'a SlideFonts, media: &'a MediaRegistry) -> Self {
        Self {
            locale,
            fonts,
            media,
        }
    }

    /// Slide part for one page
    pub fn build(&self, page: &PageLayout) -> Result<SlidePart> {
        let mut shapes = String::new();
        let mut images: Vec<(String, String)> = Vec::new();
        // id 1 is the shape tree itself
        let mut shape_id = 2;

        for element in &page.elements {
            match element {
                Element::Rect(rect) => shapes.push_str(&self.rect_shape(shape_id, rect)),
                Element::Line(line) => shapes.push_str(&self.line_shape(shape_id, line)),
                Element::Text(text) => shapes.push_str(&self.text_shape(shape_id, text)),
                Element::Image(image) => {
                    let item = self.media.get(&image.source.name).ok_or_else(|| {
                        PptxError::invalid_layout(format!(
                            "image '{}' is not registered as media",
                            image.source.name
                        ))
                    })?;
                    let rel_id = match images.iter().find(|(_, name)| *name == item.embedded_name) {
                        Some((id, _)) => id.clone(),
                        None => {
                            let id = format!("rId{}", images.len() + 2);
                            images.push((id.clone(), item.embedded_name.clone()));
                            id
                        }
                    };
                    shapes.push_str(&self.picture(shape_id, image, &rel_id));
                }
            }
            shape_id += 1;
        }

        let background = page.background.map(background_xml).unwrap_or_default();
        let xml = format!(
            r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>
<p:sld xmlns:a="{}" xmlns:r="{}" xmlns:p="{}">
  <p:cSld>
{}    <p:spTree>
      <p:nvGrpSpPr>
        <p:cNvPr id="1" name=""/>
        <p:cNvGrpSpPr/>
        <p:nvPr/>
      </p:nvGrpSpPr>
      <p:grpSpPr/>
{}    </p:spTree>
  </p:cSld>
  <p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>
</p:sld>"#,
            NS_DRAWING, NS_RELATIONSHIPS, NS_PRESENTATION, background, shapes
        );

        Ok(SlidePart { xml, images })
    }

    /// Filled and/or outlined preset shape
    fn rect_shape(&self, id: usize, rect: &RectElement) -> String {
        let b = rect.bounds;
        let geometry = match rect.shape {
            ShapeKind::Rectangle => r#"<a:prstGeom prst="rect"><a:avLst/></a:prstGeom>"#.to_string(),
            ShapeKind::Rounded { radius } => format!(
                r#"<a:prstGeom prst="roundRect"><a:avLst><a:gd name="adj" fmla="val {}"/></a:avLst></a:prstGeom>"#,
                corner_adjust(b, radius)
            ),
            ShapeKind::Ellipse => r#"<a:prstGeom prst="ellipse"><a:avLst/></a:prstGeom>"#.to_string(),
        };
        let fill = rect.fill.map(solid_fill).unwrap_or_else(|| "<a:noFill/>".to_string());
        let line = rect
            .stroke
            .map(outline)
            .unwrap_or_else(|| "<a:ln><a:noFill/></a:ln>".to_string());

        format!(
            r#"      <p:sp>
        <p:nvSpPr>
          <p:cNvPr id="{id}" name="Shape {id}"/>
          <p:cNvSpPr/>
          <p:nvPr/>
        </p:nvSpPr>
        <p:spPr>
          {}
          {geometry}
          {fill}
          {line}
        </p:spPr>
      </p:sp>
"#,
            xfrm(b, "")
        )
    }

    /// Straight connector
    fn line_shape(&self, id: usize, line: &LineElement) -> String {
        let bounds = Rect::new(
            line.from.x.min(line.to.x),
            line.from.y.min(line.to.y),
            (line.to.x - line.from.x).abs(),
            (line.to.y - line.from.y).abs(),
        );
        let mut flips = String::new();
        if line.to.x < line.from.x {
            flips.push_str(r#" flipH="1""#);
        }
        if line.to.y < line.from.y {
            flips.push_str(r#" flipV="1""#);
        }

        format!(
            r#"      <p:cxnSp>
        <p:nvCxnSpPr>
          <p:cNvPr id="{id}" name="Line {id}"/>
          <p:cNvCxnSpPr/>
          <p:nvPr/>
        </p:nvCxnSpPr>
        <p:spPr>
          {}
          <a:prstGeom prst="line"><a:avLst/></a:prstGeom>
          {}
        </p:spPr>
      </p:cxnSp>
"#,
            xfrm(bounds, &flips),
            outline(line.stroke)
        )
    }

    /// Text box without insets, one paragraph per hard line
    fn text_shape(&self, id: usize, text: &TextElement) -> String {
        let anchor = match text.valign {
            VerticalAlign::Top => "t",
            VerticalAlign::Middle => "ctr",
            VerticalAlign::Bottom => "b",
        };
        let algn = match text.align {
            Alignment::Left => "l",
            Alignment::Center => "ctr",
            Alignment::Right => "r",
            Alignment::Justify => "just",
        };
        let spacing = (text.leading / SINGLE_SPACING * 100_000.0).round() as i64;
        let paragraph_props = format!(
            r#"<a:pPr algn="{algn}"><a:lnSpc><a:spcPct val="{spacing}"/></a:lnSpc></a:pPr>"#
        );

        let mut paragraphs = String::new();
        for line in split_lines(&text.runs) {
            paragraphs.push_str(&format!("          <a:p>{paragraph_props}"));
            for run in &line {
                paragraphs.push_str(&self.text_run(run));
            }
            paragraphs.push_str("</a:p>\n");
        }

        format!(
            r#"      <p:sp>
        <p:nvSpPr>
          <p:cNvPr id="{id}" name="Text {id}"/>
          <p:cNvSpPr txBox="1"/>
          <p:nvPr/>
        </p:nvSpPr>
        <p:spPr>
          {}
          <a:prstGeom prst="rect"><a:avLst/></a:prstGeom>
          <a:noFill/>
        </p:spPr>
        <p:txBody>
          <a:bodyPr wrap="square" lIns="0" tIns="0" rIns="0" bIns="0" anchor="{anchor}"><a:noAutofit/></a:bodyPr>
          <a:lstStyle/>
{paragraphs}        </p:txBody>
      </p:sp>
"#,
            xfrm(text.bounds, "")
        )
    }

    fn text_run(&self, run: &StyledRun) -> String {
        let mut rpr = format!(
            r#"lang="{}" sz="{}""#,
            escape_xml(self.locale),
            (run.size * 100.0).round() as i64
        );
        if run.bold {
            rpr.push_str(r#" b="1""#);
        }
        if run.italic {
            rpr.push_str(r#" i="1""#);
        }
        let typeface = escape_xml(self.fonts.typeface(run.family));
        format!(
            r#"<a:r><a:rPr {rpr} dirty="0">{}<a:latin typeface="{typeface}"/><a:cs typeface="{typeface}"/></a:rPr><a:t>{}</a:t></a:r>"#,
            solid_fill(run.color),
            escape_xml(&run.text)
        )
    }

    fn picture(&self, id: usize, image: &ImageElement, rel_id: &str) -> String {
        format!(
            r#"      <p:pic>
        <p:nvPicPr>
          <p:cNvPr id="{id}" name="Picture {id}" descr="{}"/>
          <p:cNvPicPr><a:picLocks noChangeAspect="1"/></p:cNvPicPr>
          <p:nvPr/>
        </p:nvPicPr>
        <p:blipFill>
          <a:blip r:embed="{rel_id}"/>
          <a:stretch><a:fillRect/></a:stretch>
        </p:blipFill>
        <p:spPr>
          {}
          <a:prstGeom prst="rect"><a:avLst/></a:prstGeom>
        </p:spPr>
      </p:pic>
"#,
            escape_xml(&image.source.name),
            xfrm(image.bounds, "")
        )
    }
}

/// Runs regrouped into hard lines, splitting runs at `\n`
fn split_lines(runs: &[StyledRun]) -> Vec<Vec<StyledRun>> {
    let mut lines: Vec<Vec<StyledRun>> = vec![Vec::new()];
    for run in runs {
        for (i, part) in run.text.split('\n').enumerate() {
            if i > 0 {
                lines.push(Vec::new());
            }
            if !part.is_empty() {
                if let Some(line) = lines.last_mut() {
                    line.push(StyledRun {
                        text: part.to_string(),
                        ..run.clone()
                    });
                }
            }
        }
    }
    lines
}

fn xfrm(bounds: Rect, flips: &str) -> String {
    format!(
        r#"<a:xfrm{flips}><a:off x="{}" y="{}"/><a:ext cx="{}" cy="{}"/></a:xfrm>"#,
        emu(bounds.x),
        emu(bounds.y),
        emu(bounds.width.max(0)),
        emu(bounds.height.max(0))
    )
}

fn solid_fill(color: Rgb) -> String {
    format!(r#"<a:solidFill><a:srgbClr val="{}"/></a:solidFill>"#, color.hex_digits())
}

fn outline(stroke: Stroke) -> String {
    format!(r#"<a:ln w="{}">{}</a:ln>"#, emu_f(stroke.width), solid_fill(stroke.color))
}

fn background_xml(color: Rgb) -> String {
    format!(
        "    <p:bg><p:bgPr>{}<a:effectLst/></p:bgPr></p:bg>\n",
        solid_fill(color)
    )
}

/// `roundRect` adjust value: radius over the shorter side, in 1/100000
fn corner_adjust(bounds: Rect, radius: i64) -> i64 {
    let short = bounds.width.min(bounds.height);
    if short <= 0 {
        return 0;
    }
    (radius * 100_000 / short).clamp(0, 50_000)
}
