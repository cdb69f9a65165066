//! Package inspection
//!
//! Reads a generated archive back, counts slides, notes and media, and
//! checks that every XML part is well formed.

use std::io::{Cursor, Read};

use quick_xml::events::Event;
use quick_xml::Reader;
use zip::ZipArchive;

use crate::error::{PptxError, Result};

/// What a PPTX archive contains
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageSummary {
    pub slides: usize,
    pub notes: usize,
    pub media: usize,
    /// Every part name, in archive order
    pub parts: Vec<String>,
}

impl PackageSummary {
    pub fn contains(&self, part: &str) -> bool {
        self.parts.iter().any(|p| p == part)
    }
}

/// Open a PPTX archive and verify its XML parts
pub fn inspect(bytes: &[u8]) -> Result<PackageSummary> {
    let mut archive = ZipArchive::new(Cursor::new(bytes))?;
    let mut summary = PackageSummary::default();

    for i in 0..archive.len() {
        let mut file = archive.by_index(i)?;
        let name = file.name().to_string();

        if is_part(&name, "ppt/slides/slide") {
            summary.slides += 1;
        } else if is_part(&name, "ppt/notesSlides/notesSlide") {
            summary.notes += 1;
        } else if name.starts_with("ppt/media/") {
            summary.media += 1;
        }

        if name.ends_with(".xml") || name.ends_with(".rels") {
            let mut content = Vec::new();
            file.read_to_end(&mut content)?;
            check_well_formed(&name, &content)?;
        }
        summary.parts.push(name);
    }

    for required in ["[Content_Types].xml", "_rels/.rels", "ppt/presentation.xml"] {
        if !summary.contains(required) {
            return Err(PptxError::invalid_part(required, "missing from package"));
        }
    }

    Ok(summary)
}

fn is_part(name: &str, prefix: &str) -> bool {
    name.starts_with(prefix) && name.ends_with(".xml")
}

/// Parse a part to the end, requiring balanced and matching tags
pub fn check_well_formed(part: &str, xml: &[u8]) -> Result<()> {
    let mut reader = Reader::from_reader(xml);
    reader.config_mut().check_end_names = true;

    let mut buf = Vec::new();
    let mut depth = 0usize;
    let mut roots = 0usize;
    loop {
        let event = reader
            .read_event_into(&mut buf)
            .map_err(|e| PptxError::invalid_part(part, e.to_string()))?;
        match event {
            Event::Start(_) => {
                if depth == 0 {
                    roots += 1;
                }
                depth += 1;
            }
            Event::Empty(_) if depth == 0 => roots += 1,
            Event::End(_) => depth = depth.saturating_sub(1),
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    if depth != 0 {
        return Err(PptxError::invalid_part(part, "unclosed element at end of part"));
    }
    if roots != 1 {
        return Err(PptxError::invalid_part(
            part,
            format!("expected one root element, found {}", roots),
        ));
    }
    Ok(())
}
