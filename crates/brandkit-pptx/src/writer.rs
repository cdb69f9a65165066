//! PPTX generation from page layouts.
//!
//! This module packages slide parts, speaker notes and media into a
//! PresentationML archive with a single blank master and layout.

use std::io::{Cursor, Seek, Write};

use brandkit_ast::{DocumentLayout, Rgb};
use brandkit_core::{PptxConfig, Theme};
use tracing::debug;
use zip::write::SimpleFileOptions;
use zip::ZipWriter;

use crate::constants::*;
use crate::error::{PptxError, Result};
use crate::media::MediaRegistry;
use crate::slide::{emu, escape_xml, SlideBuilder, SlideFonts, SlidePart};

const XML_HEADER: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

/// Theme colors written to `theme1.xml`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorScheme {
    pub dark: Rgb,
    pub light: Rgb,
    pub dark_alt: Rgb,
    pub light_alt: Rgb,
    pub accents: [Rgb; 6],
    pub hyperlink: Rgb,
}

impl Default for ColorScheme {
    fn default() -> Self {
        Self {
            dark: Rgb::BLACK,
            light: Rgb::WHITE,
            dark_alt: Rgb::from_u32(0x44546a),
            light_alt: Rgb::from_u32(0xe7e6e6),
            accents: [
                Rgb::from_u32(0x4472c4),
                Rgb::from_u32(0xed7d31),
                Rgb::from_u32(0xa5a5a5),
                Rgb::from_u32(0xffc000),
                Rgb::from_u32(0x5b9bd5),
                Rgb::from_u32(0x70ad47),
            ],
            hyperlink: Rgb::from_u32(0x0563c1),
        }
    }
}

impl From<&Theme> for ColorScheme {
    fn from(theme: &Theme) -> Self {
        Self {
            dark: theme.text,
            light: theme.white,
            dark_alt: theme.navy_dark,
            light_alt: theme.tint,
            accents: [
                theme.primary,
                theme.accent,
                theme.emerald,
                theme.logo_gold,
                theme.bright,
                theme.navy,
            ],
            hyperlink: theme.primary,
        }
    }
}

/// PPTX document writer
#[derive(Debug, Clone)]
pub struct PptxWriter {
    locale: String,
    fonts: SlideFonts,
    colors: ColorScheme,
    application: String,
}

impl Default for PptxWriter {
    fn default() -> Self {
        Self::new(&PptxConfig::default())
    }
}

impl PptxWriter {
    /// Create a writer with locale and typefaces from `config`
    pub fn new(config: &PptxConfig) -> Self {
        Self {
            locale: config.locale.clone(),
            fonts: SlideFonts::from(config),
            colors: ColorScheme::default(),
            application: "brandkit".to_string(),
        }
    }

    /// Use brand colors for the theme part
    pub fn with_theme(mut self, theme: &Theme) -> Self {
        self.colors = ColorScheme::from(theme);
        self
    }

    /// Use an explicit color scheme for the theme part
    pub fn with_colors(mut self, colors: ColorScheme) -> Self {
        self.colors = colors;
        self
    }

    /// Generate the PPTX as bytes
    pub fn generate(&self, layout: &DocumentLayout) -> Result<Vec<u8>> {
        if layout.pages.is_empty() {
            return Err(PptxError::invalid_layout("layout has no pages"));
        }
        if layout.width <= 0 || layout.height <= 0 {
            return Err(PptxError::invalid_layout(format!(
                "slide size {}x{} is not positive",
                layout.width, layout.height
            )));
        }

        let media = MediaRegistry::from_layout(layout);
        let builder = SlideBuilder::new(&self.locale, &self.fonts, &media);
        let slides = layout
            .pages
            .iter()
            .map(|page| builder.build(page))
            .collect::<Result<Vec<SlidePart>>>()?;
        let notes: Vec<Option<&str>> = layout
            .pages
            .iter()
            .map(|page| page.notes.as_deref().filter(|n| !n.trim().is_empty()))
            .collect();

        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

        // Write [Content_Types].xml
        self.write_content_types(&mut zip, options, &notes, &media)?;

        // Write _rels/.rels
        self.write_root_rels(&mut zip, options)?;

        // Write docProps
        self.write_app_xml(&mut zip, options, layout, &notes)?;
        self.write_core_xml(&mut zip, options, layout)?;

        // Write ppt/presentation.xml and its rels
        self.write_presentation_xml(&mut zip, options, layout)?;
        self.write_presentation_rels(&mut zip, options, slides.len())?;

        self.write_pres_props(&mut zip, options)?;
        self.write_table_styles(&mut zip, options)?;
        self.write_view_props(&mut zip, options)?;

        self.write_theme(&mut zip, options, "ppt/theme/theme1.xml", &layout.meta.title)?;
        self.write_theme(&mut zip, options, "ppt/theme/theme2.xml", "Notes")?;
        self.write_slide_master(&mut zip, options)?;
        self.write_slide_layout(&mut zip, options)?;
        self.write_notes_master(&mut zip, options, layout)?;

        for (i, (slide, note)) in slides.iter().zip(&notes).enumerate() {
            let number = i + 1;
            self.write_slide(&mut zip, options, number, slide, note.is_some())?;
            if let Some(text) = note {
                self.write_notes_slide(&mut zip, options, number, text)?;
            }
            debug!(slide = number, images = slide.images.len(), "Wrote slide");
        }

        for item in media.items() {
            zip.start_file(item.part_name(), options)?;
            zip.write_all(&item.data)?;
        }

        let cursor = zip.finish()?;
        Ok(cursor.into_inner())
    }

    /// Write [Content_Types].xml
    fn write_content_types<W: Write + Seek>(
        &self,
        zip: &mut ZipWriter<W>,
        options: SimpleFileOptions,
        notes: &[Option<&str>],
        media: &MediaRegistry,
    ) -> Result<()> {
        zip.start_file("[Content_Types].xml", options)?;

        let mut content = format!(
            r#"{XML_HEADER}
<Types xmlns="{NS_CONTENT_TYPES}">
  <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>
  <Default Extension="xml" ContentType="application/xml"/>
"#
        );
        for (extension, content_type) in media.formats() {
            content.push_str(&format!(
                "  <Default Extension=\"{}\" ContentType=\"{}\"/>\n",
                extension, content_type
            ));
        }
        content.push_str(
            r#"  <Override PartName="/ppt/presentation.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.presentation.main+xml"/>
  <Override PartName="/ppt/presProps.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.presProps+xml"/>
  <Override PartName="/ppt/tableStyles.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.tableStyles+xml"/>
  <Override PartName="/ppt/viewProps.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.viewProps+xml"/>
  <Override PartName="/ppt/theme/theme1.xml" ContentType="application/vnd.openxmlformats-officedocument.theme+xml"/>
  <Override PartName="/ppt/theme/theme2.xml" ContentType="application/vnd.openxmlformats-officedocument.theme+xml"/>
  <Override PartName="/ppt/slideMasters/slideMaster1.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slideMaster+xml"/>
  <Override PartName="/ppt/slideLayouts/slideLayout1.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.slideLayout+xml"/>
  <Override PartName="/ppt/notesMasters/notesMaster1.xml" ContentType="application/vnd.openxmlformats-officedocument.presentationml.notesMaster+xml"/>
  <Override PartName="/docProps/core.xml" ContentType="application/vnd.openxmlformats-package.core-properties+xml"/>
  <Override PartName="/docProps/app.xml" ContentType="application/vnd.openxmlformats-officedocument.extended-properties+xml"/>
"#,
        );

        for (i, note) in notes.iter().enumerate() {
            let number = i + 1;
            content.push_str(&format!(
                "  <Override PartName=\"/ppt/slides/slide{}.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.presentationml.slide+xml\"/>\n",
                number
            ));
            if note.is_some() {
                content.push_str(&format!(
                    "  <Override PartName=\"/ppt/notesSlides/notesSlide{}.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.presentationml.notesSlide+xml\"/>\n",
                    number
                ));
            }
        }

        content.push_str("</Types>");

        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    /// Write _rels/.rels
    fn write_root_rels<W: Write + Seek>(
        &self,
        zip: &mut ZipWriter<W>,
        options: SimpleFileOptions,
    ) -> Result<()> {
        zip.start_file("_rels/.rels", options)?;

        let content = format!(
            r#"{XML_HEADER}
<Relationships xmlns="{NS_PACKAGE_RELATIONSHIPS}">
  <Relationship Id="rId1" Type="{REL_TYPE_OFFICE_DOCUMENT}" Target="ppt/presentation.xml"/>
  <Relationship Id="rId2" Type="{REL_TYPE_CORE_PROPERTIES}" Target="docProps/core.xml"/>
  <Relationship Id="rId3" Type="{REL_TYPE_EXTENDED_PROPERTIES}" Target="docProps/app.xml"/>
</Relationships>"#
        );

        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    /// Write docProps/app.xml
    fn write_app_xml<W: Write + Seek>(
        &self,
        zip: &mut ZipWriter<W>,
        options: SimpleFileOptions,
        layout: &DocumentLayout,
        notes: &[Option<&str>],
    ) -> Result<()> {
        zip.start_file("docProps/app.xml", options)?;

        let content = format!(
            r#"{XML_HEADER}
<Properties xmlns="http://schemas.openxmlformats.org/officeDocument/2006/extended-properties" xmlns:vt="http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes">
  <TotalTime>0</TotalTime>
  <Application>{}</Application>
  <PresentationFormat>Widescreen</PresentationFormat>
  <Slides>{}</Slides>
  <Notes>{}</Notes>
  <HiddenSlides>0</HiddenSlides>
  <MMClips>0</MMClips>
  <ScaleCrop>false</ScaleCrop>
  <Company>{}</Company>
  <LinksUpToDate>false</LinksUpToDate>
  <SharedDoc>false</SharedDoc>
  <HyperlinksChanged>false</HyperlinksChanged>
  <AppVersion>1.0</AppVersion>
</Properties>"#,
            escape_xml(&self.application),
            layout.page_count(),
            notes.iter().filter(|n| n.is_some()).count(),
            escape_xml(&layout.meta.company)
        );

        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    /// Write docProps/core.xml
    fn write_core_xml<W: Write + Seek>(
        &self,
        zip: &mut ZipWriter<W>,
        options: SimpleFileOptions,
        layout: &DocumentLayout,
    ) -> Result<()> {
        zip.start_file("docProps/core.xml", options)?;

        let meta = &layout.meta;
        let author = if meta.company.is_empty() {
            self.application.as_str()
        } else {
            meta.company.as_str()
        };
        let now = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ").to_string();

        let content = format!(
            r#"{XML_HEADER}
<cp:coreProperties xmlns:cp="http://schemas.openxmlformats.org/package/2006/metadata/core-properties" xmlns:dc="http://purl.org/dc/elements/1.1/" xmlns:dcterms="http://purl.org/dc/terms/" xmlns:dcmitype="http://purl.org/dc/dcmitype/" xmlns:xsi="http://www.w3.org/2001/XMLSchema-instance">
  <dc:title>{}</dc:title>
  <dc:subject>{}</dc:subject>
  <dc:creator>{}</dc:creator>
  <cp:lastModifiedBy>{}</cp:lastModifiedBy>
  <cp:version>{}</cp:version>
  <dcterms:created xsi:type="dcterms:W3CDTF">{}</dcterms:created>
  <dcterms:modified xsi:type="dcterms:W3CDTF">{}</dcterms:modified>
</cp:coreProperties>"#,
            escape_xml(&meta.title),
            escape_xml(&meta.subject),
            escape_xml(author),
            escape_xml(&self.application),
            escape_xml(&meta.version),
            now,
            now
        );

        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    /// Write ppt/presentation.xml
    fn write_presentation_xml<W: Write + Seek>(
        &self,
        zip: &mut ZipWriter<W>,
        options: SimpleFileOptions,
        layout: &DocumentLayout,
    ) -> Result<()> {
        zip.start_file("ppt/presentation.xml", options)?;

        let mut slide_refs = String::new();
        for i in 1..=layout.page_count() {
            slide_refs.push_str(&format!(
                "    <p:sldId id=\"{}\" r:id=\"rId{}\"/>\n",
                255 + i,
                i + FIRST_SLIDE_REL - 1
            ));
        }

        let (cx, cy) = (emu(layout.width), emu(layout.height));
        let content = format!(
            r#"{XML_HEADER}
<p:presentation xmlns:a="{NS_DRAWING}" xmlns:r="{NS_RELATIONSHIPS}" xmlns:p="{NS_PRESENTATION}" saveSubsetFonts="1">
  <p:sldMasterIdLst>
    <p:sldMasterId id="2147483648" r:id="rId1"/>
  </p:sldMasterIdLst>
  <p:notesMasterIdLst>
    <p:notesMasterId r:id="rId4"/>
  </p:notesMasterIdLst>
  <p:sldIdLst>
{slide_refs}  </p:sldIdLst>
  <p:sldSz cx="{cx}" cy="{cy}"/>
  <p:notesSz cx="{cy}" cy="{cx}"/>
</p:presentation>"#
        );

        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    /// Write ppt/_rels/presentation.xml.rels
    fn write_presentation_rels<W: Write + Seek>(
        &self,
        zip: &mut ZipWriter<W>,
        options: SimpleFileOptions,
        slide_count: usize,
    ) -> Result<()> {
        zip.start_file("ppt/_rels/presentation.xml.rels", options)?;

        let mut rels = format!(
            r#"{XML_HEADER}
<Relationships xmlns="{NS_PACKAGE_RELATIONSHIPS}">
  <Relationship Id="rId1" Type="{REL_TYPE_SLIDE_MASTER}" Target="slideMasters/slideMaster1.xml"/>
  <Relationship Id="rId2" Type="{REL_TYPE_PRES_PROPS}" Target="presProps.xml"/>
  <Relationship Id="rId3" Type="{REL_TYPE_THEME}" Target="theme/theme1.xml"/>
  <Relationship Id="rId4" Type="{REL_TYPE_NOTES_MASTER}" Target="notesMasters/notesMaster1.xml"/>
"#
        );

        for i in 1..=slide_count {
            rels.push_str(&format!(
                "  <Relationship Id=\"rId{}\" Type=\"{}\" Target=\"slides/slide{}.xml\"/>\n",
                i + FIRST_SLIDE_REL - 1,
                REL_TYPE_SLIDE,
                i
            ));
        }

        rels.push_str("</Relationships>");

        zip.write_all(rels.as_bytes())?;
        Ok(())
    }

    /// Write ppt/presProps.xml
    fn write_pres_props<W: Write + Seek>(
        &self,
        zip: &mut ZipWriter<W>,
        options: SimpleFileOptions,
    ) -> Result<()> {
        zip.start_file("ppt/presProps.xml", options)?;

        let content = format!(
            r#"{XML_HEADER}
<p:presentationPr xmlns:a="{NS_DRAWING}" xmlns:r="{NS_RELATIONSHIPS}" xmlns:p="{NS_PRESENTATION}"/>"#
        );

        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    /// Write ppt/tableStyles.xml
    fn write_table_styles<W: Write + Seek>(
        &self,
        zip: &mut ZipWriter<W>,
        options: SimpleFileOptions,
    ) -> Result<()> {
        zip.start_file("ppt/tableStyles.xml", options)?;

        let content = format!(
            r#"{XML_HEADER}
<a:tblStyleLst xmlns:a="{NS_DRAWING}" def="{{5C22544A-7EE6-4342-B048-85BDC9FD1C3A}}"/>"#
        );

        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    /// Write ppt/viewProps.xml
    fn write_view_props<W: Write + Seek>(
        &self,
        zip: &mut ZipWriter<W>,
        options: SimpleFileOptions,
    ) -> Result<()> {
        zip.start_file("ppt/viewProps.xml", options)?;

        let content = format!(
            r#"{XML_HEADER}
<p:viewPr xmlns:a="{NS_DRAWING}" xmlns:r="{NS_RELATIONSHIPS}" xmlns:p="{NS_PRESENTATION}">
  <p:normalViewPr>
    <p:restoredLeft sz="15620"/>
    <p:restoredTop sz="94660"/>
  </p:normalViewPr>
  <p:slideViewPr>
    <p:cSldViewPr>
      <p:cViewPr>
        <p:scale>
          <a:sx n="100" d="100"/>
          <a:sy n="100" d="100"/>
        </p:scale>
        <p:origin x="0" y="0"/>
      </p:cViewPr>
    </p:cSldViewPr>
  </p:slideViewPr>
</p:viewPr>"#
        );

        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    /// Write a theme part with the writer's colors and fonts
    fn write_theme<W: Write + Seek>(
        &self,
        zip: &mut ZipWriter<W>,
        options: SimpleFileOptions,
        path: &str,
        name: &str,
    ) -> Result<()> {
        zip.start_file(path, options)?;

        let c = &self.colors;
        let mut accents = String::new();
        for (i, accent) in c.accents.iter().enumerate() {
            accents.push_str(&format!(
                "      <a:accent{n}><a:srgbClr val=\"{}\"/></a:accent{n}>\n",
                accent.hex_digits(),
                n = i + 1
            ));
        }
        let name = if name.is_empty() { "brandkit" } else { name };

        let content = format!(
            r#"{XML_HEADER}
<a:theme xmlns:a="{NS_DRAWING}" name="{}">
  <a:themeElements>
    <a:clrScheme name="{}">
      <a:dk1><a:srgbClr val="{}"/></a:dk1>
      <a:lt1><a:srgbClr val="{}"/></a:lt1>
      <a:dk2><a:srgbClr val="{}"/></a:dk2>
      <a:lt2><a:srgbClr val="{}"/></a:lt2>
{}      <a:hlink><a:srgbClr val="{}"/></a:hlink>
      <a:folHlink><a:srgbClr val="{}"/></a:folHlink>
    </a:clrScheme>
    <a:fontScheme name="{}">
      <a:majorFont>
        <a:latin typeface="{}"/>
        <a:ea typeface=""/>
        <a:cs typeface=""/>
      </a:majorFont>
      <a:minorFont>
        <a:latin typeface="{}"/>
        <a:ea typeface=""/>
        <a:cs typeface=""/>
      </a:minorFont>
    </a:fontScheme>
    <a:fmtScheme name="brandkit">
      <a:fillStyleLst>
        <a:solidFill><a:schemeClr val="phClr"/></a:solidFill>
        <a:solidFill><a:schemeClr val="phClr"/></a:solidFill>
        <a:solidFill><a:schemeClr val="phClr"/></a:solidFill>
      </a:fillStyleLst>
      <a:lnStyleLst>
        <a:ln w="6350"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln>
        <a:ln w="12700"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln>
        <a:ln w="19050"><a:solidFill><a:schemeClr val="phClr"/></a:solidFill></a:ln>
      </a:lnStyleLst>
      <a:effectStyleLst>
        <a:effectStyle><a:effectLst/></a:effectStyle>
        <a:effectStyle><a:effectLst/></a:effectStyle>
        <a:effectStyle><a:effectLst/></a:effectStyle>
      </a:effectStyleLst>
      <a:bgFillStyleLst>
        <a:solidFill><a:schemeClr val="phClr"/></a:solidFill>
        <a:solidFill><a:schemeClr val="phClr"/></a:solidFill>
        <a:solidFill><a:schemeClr val="phClr"/></a:solidFill>
      </a:bgFillStyleLst>
    </a:fmtScheme>
  </a:themeElements>
</a:theme>"#,
            escape_xml(name),
            escape_xml(name),
            c.dark.hex_digits(),
            c.light.hex_digits(),
            c.dark_alt.hex_digits(),
            c.light_alt.hex_digits(),
            accents,
            c.hyperlink.hex_digits(),
            c.accents[5].hex_digits(),
            escape_xml(name),
            escape_xml(&self.fonts.serif),
            escape_xml(&self.fonts.sans)
        );

        zip.write_all(content.as_bytes())?;
        Ok(())
    }

    /// Write ppt/slideMasters/slideMaster1.xml
    fn write_slide_master<W: Write + Seek>(
        &self,
        zip: &mut ZipWriter<W>,
        options: SimpleFileOptions,
    ) -> Result<()> {
        zip.start_file("ppt/slideMasters/slideMaster1.xml", options)?;

        let content = format!(
            r#"{XML_HEADER}
<p:sldMaster xmlns:a="{NS_DRAWING}" xmlns:r="{NS_RELATIONSHIPS}" xmlns:p="{NS_PRESENTATION}">
  <p:cSld>
    <p:bg>
      <p:bgRef idx="1001">
        <a:schemeClr val="bg1"/>
      </p:bgRef>
    </p:bg>
{}  </p:cSld>
  <p:clrMap bg1="lt1" tx1="dk1" bg2="lt2" tx2="dk2" accent1="accent1" accent2="accent2" accent3="accent3" accent4="accent4" accent5="accent5" accent6="accent6" hlink="hlink" folHlink="folHlink"/>
  <p:sldLayoutIdLst>
    <p:sldLayoutId id="2147483649" r:id="rId1"/>
  </p:sldLayoutIdLst>
</p:sldMaster>"#,
            empty_tree()
        );

        zip.write_all(content.as_bytes())?;

        zip.start_file("ppt/slideMasters/_rels/slideMaster1.xml.rels", options)?;
        let rels = format!(
            r#"{XML_HEADER}
<Relationships xmlns="{NS_PACKAGE_RELATIONSHIPS}">
  <Relationship Id="rId1" Type="{REL_TYPE_SLIDE_LAYOUT}" Target="../slideLayouts/slideLayout1.xml"/>
  <Relationship Id="rId2" Type="{REL_TYPE_THEME}" Target="../theme/theme1.xml"/>
</Relationships>"#
        );
        zip.write_all(rels.as_bytes())?;
        Ok(())
    }

    /// Write the single blank layout every slide uses
    fn write_slide_layout<W: Write + Seek>(
        &self,
        zip: &mut ZipWriter<W>,
        options: SimpleFileOptions,
    ) -> Result<()> {
        zip.start_file("ppt/slideLayouts/slideLayout1.xml", options)?;

        let content = format!(
            r#"{XML_HEADER}
<p:sldLayout xmlns:a="{NS_DRAWING}" xmlns:r="{NS_RELATIONSHIPS}" xmlns:p="{NS_PRESENTATION}" type="blank" preserve="1">
  <p:cSld name="Blank">
{}  </p:cSld>
  <p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>
</p:sldLayout>"#,
            empty_tree()
        );
        zip.write_all(content.as_bytes())?;

        zip.start_file("ppt/slideLayouts/_rels/slideLayout1.xml.rels", options)?;
        let rels = format!(
            r#"{XML_HEADER}
<Relationships xmlns="{NS_PACKAGE_RELATIONSHIPS}">
  <Relationship Id="rId1" Type="{REL_TYPE_SLIDE_MASTER}" Target="../slideMasters/slideMaster1.xml"/>
</Relationships>"#
        );
        zip.write_all(rels.as_bytes())?;
        Ok(())
    }

    /// Write ppt/notesMasters/notesMaster1.xml
    fn write_notes_master<W: Write + Seek>(
        &self,
        zip: &mut ZipWriter<W>,
        options: SimpleFileOptions,
        layout: &DocumentLayout,
    ) -> Result<()> {
        zip.start_file("ppt/notesMasters/notesMaster1.xml", options)?;

        // Notes pages are portrait: the slide size rotated
        let (page_w, page_h) = (emu(layout.height), emu(layout.width));
        let image_h = page_h * 2 / 5;
        let image_w = image_h * layout.width / layout.height;
        let margin = page_w / 12;

        let content = format!(
            r#"{XML_HEADER}
<p:notesMaster xmlns:a="{NS_DRAWING}" xmlns:r="{NS_RELATIONSHIPS}" xmlns:p="{NS_PRESENTATION}">
  <p:cSld>
    <p:bg>
      <p:bgRef idx="1001">
        <a:schemeClr val="bg1"/>
      </p:bgRef>
    </p:bg>
    <p:spTree>
      <p:nvGrpSpPr>
        <p:cNvPr id="1" name=""/>
        <p:cNvGrpSpPr/>
        <p:nvPr/>
      </p:nvGrpSpPr>
      <p:grpSpPr/>
      <p:sp>
        <p:nvSpPr>
          <p:cNvPr id="2" name="Slide Image Placeholder 1"/>
          <p:cNvSpPr><a:spLocks noGrp="1" noRot="1" noChangeAspect="1"/></p:cNvSpPr>
          <p:nvPr><p:ph type="sldImg" idx="2"/></p:nvPr>
        </p:nvSpPr>
        <p:spPr>
          <a:xfrm><a:off x="{}" y="{margin}"/><a:ext cx="{image_w}" cy="{image_h}"/></a:xfrm>
          <a:prstGeom prst="rect"><a:avLst/></a:prstGeom>
        </p:spPr>
      </p:sp>
      <p:sp>
        <p:nvSpPr>
          <p:cNvPr id="3" name="Notes Placeholder 2"/>
          <p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr>
          <p:nvPr><p:ph type="body" sz="quarter" idx="3"/></p:nvPr>
        </p:nvSpPr>
        <p:spPr>
          <a:xfrm><a:off x="{margin}" y="{}"/><a:ext cx="{}" cy="{}"/></a:xfrm>
          <a:prstGeom prst="rect"><a:avLst/></a:prstGeom>
        </p:spPr>
        <p:txBody>
          <a:bodyPr/>
          <a:lstStyle/>
          <a:p><a:endParaRPr lang="{}"/></a:p>
        </p:txBody>
      </p:sp>
    </p:spTree>
  </p:cSld>
  <p:clrMap bg1="lt1" tx1="dk1" bg2="lt2" tx2="dk2" accent1="accent1" accent2="accent2" accent3="accent3" accent4="accent4" accent5="accent5" accent6="accent6" hlink="hlink" folHlink="folHlink"/>
</p:notesMaster>"#,
            (page_w - image_w) / 2,
            margin * 2 + image_h,
            page_w - margin * 2,
            page_h - image_h - margin * 4,
            escape_xml(&self.locale)
        );
        zip.write_all(content.as_bytes())?;

        zip.start_file("ppt/notesMasters/_rels/notesMaster1.xml.rels", options)?;
        let rels = format!(
            r#"{XML_HEADER}
<Relationships xmlns="{NS_PACKAGE_RELATIONSHIPS}">
  <Relationship Id="rId1" Type="{REL_TYPE_THEME}" Target="../theme/theme2.xml"/>
</Relationships>"#
        );
        zip.write_all(rels.as_bytes())?;
        Ok(())
    }

    /// Write a single slide and its relationships
    fn write_slide<W: Write + Seek>(
        &self,
        zip: &mut ZipWriter<W>,
        options: SimpleFileOptions,
        number: usize,
        slide: &SlidePart,
        has_notes: bool,
    ) -> Result<()> {
        zip.start_file(format!("ppt/slides/slide{}.xml", number), options)?;
        zip.write_all(slide.xml.as_bytes())?;

        zip.start_file(format!("ppt/slides/_rels/slide{}.xml.rels", number), options)?;

        let mut rels = format!(
            r#"{XML_HEADER}
<Relationships xmlns="{NS_PACKAGE_RELATIONSHIPS}">
  <Relationship Id="rId1" Type="{REL_TYPE_SLIDE_LAYOUT}" Target="../slideLayouts/slideLayout1.xml"/>
"#
        );
        for (rel_id, file_name) in &slide.images {
            rels.push_str(&format!(
                "  <Relationship Id=\"{}\" Type=\"{}\" Target=\"../media/{}\"/>\n",
                rel_id, REL_TYPE_IMAGE, file_name
            ));
        }
        if has_notes {
            rels.push_str(&format!(
                "  <Relationship Id=\"rId{}\" Type=\"{}\" Target=\"../notesSlides/notesSlide{}.xml\"/>\n",
                slide.next_rel_id(),
                REL_TYPE_NOTES_SLIDE,
                number
            ));
        }
        rels.push_str("</Relationships>");

        zip.write_all(rels.as_bytes())?;
        Ok(())
    }

    /// Write speaker notes slide
    fn write_notes_slide<W: Write + Seek>(
        &self,
        zip: &mut ZipWriter<W>,
        options: SimpleFileOptions,
        number: usize,
        notes: &str,
    ) -> Result<()> {
        zip.start_file(format!("ppt/notesSlides/notesSlide{}.xml", number), options)?;

        let mut paragraphs = String::new();
        for line in notes.lines() {
            if line.is_empty() {
                paragraphs.push_str(&format!(
                    "          <a:p><a:endParaRPr lang=\"{}\"/></a:p>\n",
                    escape_xml(&self.locale)
                ));
            } else {
                paragraphs.push_str(&format!(
                    "          <a:p><a:r><a:rPr lang=\"{}\" dirty=\"0\"/><a:t>{}</a:t></a:r></a:p>\n",
                    escape_xml(&self.locale),
                    escape_xml(line)
                ));
            }
        }

        let content = format!(
            r#"{XML_HEADER}
<p:notes xmlns:a="{NS_DRAWING}" xmlns:r="{NS_RELATIONSHIPS}" xmlns:p="{NS_PRESENTATION}">
  <p:cSld>
    <p:spTree>
      <p:nvGrpSpPr>
        <p:cNvPr id="1" name=""/>
        <p:cNvGrpSpPr/>
        <p:nvPr/>
      </p:nvGrpSpPr>
      <p:grpSpPr/>
      <p:sp>
        <p:nvSpPr>
          <p:cNvPr id="2" name="Slide Image Placeholder 1"/>
          <p:cNvSpPr><a:spLocks noGrp="1" noRot="1" noChangeAspect="1"/></p:cNvSpPr>
          <p:nvPr><p:ph type="sldImg"/></p:nvPr>
        </p:nvSpPr>
        <p:spPr/>
      </p:sp>
      <p:sp>
        <p:nvSpPr>
          <p:cNvPr id="3" name="Notes Placeholder 2"/>
          <p:cNvSpPr><a:spLocks noGrp="1"/></p:cNvSpPr>
          <p:nvPr><p:ph type="body" idx="1"/></p:nvPr>
        </p:nvSpPr>
        <p:spPr/>
        <p:txBody>
          <a:bodyPr/>
          <a:lstStyle/>
{paragraphs}        </p:txBody>
      </p:sp>
    </p:spTree>
  </p:cSld>
  <p:clrMapOvr><a:masterClrMapping/></p:clrMapOvr>
</p:notes>"#
        );

        zip.write_all(content.as_bytes())?;

        zip.start_file(
            format!("ppt/notesSlides/_rels/notesSlide{}.xml.rels", number),
            options,
        )?;

        let rels = format!(
            r#"{XML_HEADER}
<Relationships xmlns="{NS_PACKAGE_RELATIONSHIPS}">
  <Relationship Id="rId1" Type="{REL_TYPE_NOTES_MASTER}" Target="../notesMasters/notesMaster1.xml"/>
  <Relationship Id="rId2" Type="{REL_TYPE_SLIDE}" Target="../slides/slide{number}.xml"/>
</Relationships>"#
        );

        zip.write_all(rels.as_bytes())?;
        Ok(())
    }
}

/// Shape tree with no shapes, for masters and layouts
fn empty_tree() -> &'static str {
    r#"    <p:spTree>
      <p:nvGrpSpPr>
        <p:cNvPr id="1" name=""/>
        <p:cNvGrpSpPr/>
        <p:nvPr/>
      </p:nvGrpSpPr>
      <p:grpSpPr/>
    </p:spTree>
"#
}
