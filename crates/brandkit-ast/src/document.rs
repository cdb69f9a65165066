//! Document root and metadata definitions
//!
//! A [`Document`] is the whole brand kit: a cover, the content sections in
//! reading order, and an optional closing page. The same document feeds
//! both the PDF and the PPTX build.

use serde::{Deserialize, Serialize};

use crate::block::ContentBlock;

/// A complete brand kit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub meta: DocumentMeta,
    pub cover: CoverSpec,
    /// Decoration repeated on every content page
    pub frame: FrameSpec,
    /// Sections in rendering order
    pub sections: Vec<SectionSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closing: Option<ClosingSpec>,
}

impl Document {
    /// Number of sections carrying speaker notes
    pub fn notes_count(&self) -> usize {
        self.sections.iter().filter(|s| s.notes.is_some()).count()
    }

    /// Find a section by its heading
    pub fn section(&self, heading: &str) -> Option<&SectionSpec> {
        self.sections.iter().find(|s| s.heading == heading)
    }
}

/// Document metadata
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DocumentMeta {
    /// Document title, e.g. "CredSuvidha Brand Kit"
    pub title: String,
    pub subject: String,
    /// Company name, used as the author
    pub company: String,
    /// Version label, e.g. "1.0"
    pub version: String,
    /// Human readable date, e.g. "March 2025"
    pub date: String,
}

/// The cover page
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CoverSpec {
    pub title: String,
    pub subtitle: String,
    /// Text of the version badge
    pub badge: String,
    /// Label/value lines under the badge (Company, Date, ...)
    pub info: Vec<(String, String)>,
    pub tagline: String,
    /// Text on the bottom accent bar
    pub copyright: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Decoration shared by every content page
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FrameSpec {
    /// Running header next to the logo
    pub header_label: String,
    /// Footer text on the left
    pub footer_left: String,
    /// Footer text on the right
    pub footer_right: String,
}

/// One section of the brand kit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionSpec {
    pub heading: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intro: Option<String>,
    pub blocks: Vec<ContentBlock>,
    /// Speaker notes; only slide decks show them
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl SectionSpec {
    pub fn new(heading: impl Into<String>) -> Self {
        Self {
            heading: heading.into(),
            intro: None,
            blocks: Vec::new(),
            notes: None,
        }
    }

    pub fn with_intro(mut self, intro: impl Into<String>) -> Self {
        self.intro = Some(intro.into());
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Append a block
    pub fn block(mut self, block: ContentBlock) -> Self {
        self.blocks.push(block);
        self
    }
}

/// The closing page of a deck
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ClosingSpec {
    pub title: String,
    pub contact: String,
    /// Tagline drawn in two colors: (first half, second half)
    pub tagline: (String, String),
    pub copyright: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}
