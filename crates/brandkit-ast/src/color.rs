//! Colors and named color tokens
//!
//! Brand colors are 24-bit RGB values. They are written in hex form
//! (`#1a6ef5`) in token files and brand copy, and always rendered back
//! uppercased with a leading `#`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// A 24-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(0xFF, 0xFF, 0xFF);
    pub const BLACK: Rgb = Rgb::new(0x00, 0x00, 0x00);

    /// Create a color from its channels
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Create a color from a packed `0xRRGGBB` value
    pub const fn from_u32(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xFF) as u8,
            g: ((value >> 8) & 0xFF) as u8,
            b: (value & 0xFF) as u8,
        }
    }

    /// Parse `#RRGGBB` or `RRGGBB` (case-insensitive)
    pub fn parse_hex(value: &str) -> Result<Self> {
        let digits = value.strip_prefix('#').unwrap_or(value);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ModelError::invalid_hex(value));
        }
        let packed =
            u32::from_str_radix(digits, 16).map_err(|_| ModelError::invalid_hex(value))?;
        Ok(Self::from_u32(packed))
    }

    /// Uppercase hex with a leading `#`, e.g. `#1A6EF5`
    pub fn to_hex(&self) -> String {
        format!("#{}", self.hex_digits())
    }

    /// Uppercase hex digits without the `#`, as DrawingML expects
    pub fn hex_digits(&self) -> String {
        format!("{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }

    /// Whether light text reads better than dark text on this color
    pub fn is_dark(&self) -> bool {
        (self.r as u16 + self.g as u16 + self.b as u16) < 400
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Rgb {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_hex(s)
    }
}

impl TryFrom<String> for Rgb {
    type Error = ModelError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse_hex(&value)
    }
}

impl From<Rgb> for String {
    fn from(value: Rgb) -> Self {
        value.to_hex()
    }
}

/// A named brand color with its usage note
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorToken {
    /// Display name (e.g. "600 Primary")
    pub name: String,
    /// Color value
    pub hex: Rgb,
    /// Where the color is meant to be used
    pub usage: String,
}

impl ColorToken {
    /// Build a token from a hex literal, validating it
    pub fn parse(name: impl Into<String>, hex: &str, usage: impl Into<String>) -> Result<Self> {
        Ok(Self {
            name: name.into(),
            hex: Rgb::parse_hex(hex)?,
            usage: usage.into(),
        })
    }

    /// Build a token from an already parsed color
    pub fn new(name: impl Into<String>, hex: Rgb, usage: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            hex,
            usage: usage.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_and_without_hash() {
        assert_eq!(Rgb::parse_hex("#1a6ef5").unwrap(), Rgb::new(0x1A, 0x6E, 0xF5));
        assert_eq!(Rgb::parse_hex("1A6EF5").unwrap(), Rgb::new(0x1A, 0x6E, 0xF5));
    }

    #[test]
    fn test_reject_bad_hex() {
        for bad in ["#1a6ef", "#1a6ef5f", "#zz6ef5", "", "#", "##1a6ef5", "+1a6ef5"] {
            let err = Rgb::parse_hex(bad).unwrap_err();
            assert_eq!(err.code(), "MODEL001", "accepted {bad:?}");
        }
    }

    #[test]
    fn test_to_hex_is_uppercase() {
        assert_eq!(Rgb::from_u32(0x1a6ef5).to_hex(), "#1A6EF5");
        assert_eq!(Rgb::from_u32(0x0f172a).hex_digits(), "0F172A");
    }

    #[test]
    fn test_is_dark() {
        assert!(Rgb::from_u32(0x142857).is_dark());
        assert!(!Rgb::from_u32(0xeef7ff).is_dark());
    }

    #[test]
    fn test_serde_as_string() {
        let json = serde_json::to_string(&Rgb::from_u32(0xc5961e)).unwrap();
        assert_eq!(json, "\"#C5961E\"");

        let back: Rgb = serde_json::from_str("\"#c5961e\"").unwrap();
        assert_eq!(back, Rgb::from_u32(0xc5961e));

        assert!(serde_json::from_str::<Rgb>("\"#c5961\"").is_err());
    }

    #[test]
    fn test_color_token_parse() {
        let token = ColorToken::parse("Logo Gold", "#C5961E", "S letterform").unwrap();
        assert_eq!(token.hex.to_hex(), "#C5961E");
        assert!(ColorToken::parse("Broken", "#C5961", "").is_err());
    }
}
