//! Inline text for content blocks
//!
//! Runs carry the emphasis a piece of brand copy needs. Sizes and fonts are
//! not chosen here; a [`TextRole`] picks them from the canvas type scale.

use serde::{Deserialize, Serialize};

use crate::color::Rgb;

/// A run of text sharing one style
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TextRun {
    /// Text content; `\n` forces a line break
    pub text: String,
    #[serde(default)]
    pub bold: bool,
    #[serde(default)]
    pub italic: bool,
    #[serde(default)]
    pub monospace: bool,
    /// Overrides the role color when set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Rgb>,
}

impl TextRun {
    /// Plain text in the surrounding style
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn bold(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            bold: true,
            ..Default::default()
        }
    }

    pub fn italic(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            italic: true,
            ..Default::default()
        }
    }

    pub fn monospace(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            monospace: true,
            ..Default::default()
        }
    }

    /// Same run with an explicit color
    pub fn colored(mut self, color: Rgb) -> Self {
        self.color = Some(color);
        self
    }
}

/// Horizontal text alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    #[default]
    Left,
    Center,
    Right,
    Justify,
}

/// Typographic role of a piece of text
///
/// Each canvas maps roles to a font size and default color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextRole {
    /// Cover and closing titles
    Display,
    /// Section headings
    Heading,
    /// Headings inside a section
    Subheading,
    /// Card titles and emphasized labels
    Label,
    #[default]
    Body,
    /// Table cells and card bodies
    Small,
    /// Notes under swatches, footers
    Caption,
    /// Large numbers on stat cards
    Stat,
}
