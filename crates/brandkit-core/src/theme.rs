//! Brand theme
//!
//! The theme is the fixed set of colors every layout routine draws with.
//! It is built once (defaults overridden by the token file) and passed
//! down by reference.

use brandkit_ast::{Rgb, TextRole};
use tracing::debug;

use crate::palette::Zebra;
use crate::tokens::BrandTokens;

/// Colors used by the layout routines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub navy_dark: Rgb,
    pub navy: Rgb,
    pub primary: Rgb,
    pub bright: Rgb,
    pub light: Rgb,
    pub pale: Rgb,
    pub tint: Rgb,
    pub accent: Rgb,
    pub accent_light: Rgb,
    pub emerald: Rgb,
    pub emerald_dark: Rgb,
    pub emerald_light: Rgb,
    pub emerald_tint: Rgb,
    pub logo_navy: Rgb,
    pub logo_gold: Rgb,
    pub logo_cream: Rgb,
    pub text: Rgb,
    pub text_secondary: Rgb,
    pub text_muted: Rgb,
    pub border: Rgb,
    pub surface_alt: Rgb,
    pub white: Rgb,
    /// Table cell rules and swatch outlines
    pub grid_line: Rgb,
    pub danger: Rgb,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            navy_dark: Rgb::from_u32(0x142857),
            navy: Rgb::from_u32(0x193f8f),
            primary: Rgb::from_u32(0x1a6ef5),
            bright: Rgb::from_u32(0x338dff),
            light: Rgb::from_u32(0x59b0ff),
            pale: Rgb::from_u32(0xbce0ff),
            tint: Rgb::from_u32(0xeef7ff),
            accent: Rgb::from_u32(0xf97316),
            accent_light: Rgb::from_u32(0xfb923c),
            emerald: Rgb::from_u32(0x10b981),
            emerald_dark: Rgb::from_u32(0x059669),
            emerald_light: Rgb::from_u32(0x34d399),
            emerald_tint: Rgb::from_u32(0xecfdf5),
            logo_navy: Rgb::from_u32(0x1b3a5c),
            logo_gold: Rgb::from_u32(0xc5961e),
            logo_cream: Rgb::from_u32(0xfaf6f1),
            text: Rgb::from_u32(0x1e293b),
            text_secondary: Rgb::from_u32(0x64748b),
            text_muted: Rgb::from_u32(0x94a3b8),
            border: Rgb::from_u32(0xe2e8f0),
            surface_alt: Rgb::from_u32(0xf8fafc),
            white: Rgb::WHITE,
            grid_line: Rgb::from_u32(0xd1d5db),
            danger: Rgb::from_u32(0xdc2626),
        }
    }
}

impl Theme {
    /// Default theme with every matching token applied
    pub fn from_tokens(tokens: &BrandTokens) -> Self {
        let mut theme = Self::default();
        let mut applied = 0usize;
        for (name, color) in tokens.iter() {
            if let Some(slot) = theme.slot_mut(name) {
                *slot = color;
                applied += 1;
            }
        }
        debug!(applied, total = tokens.len(), "Applied brand tokens to theme");
        theme
    }

    /// Theme slot a token name maps to
    fn slot_mut(&mut self, name: &str) -> Option<&mut Rgb> {
        let slot = match name {
            "brand-950" | "navy-dark" => &mut self.navy_dark,
            "brand-900" | "navy" => &mut self.navy,
            "brand-600" | "primary" => &mut self.primary,
            "brand-500" | "bright" => &mut self.bright,
            "brand-400" | "light" => &mut self.light,
            "brand-200" | "pale" => &mut self.pale,
            "brand-50" | "tint" => &mut self.tint,
            "accent-500" | "accent" => &mut self.accent,
            "accent-400" | "accent-light" => &mut self.accent_light,
            "emerald-500" | "emerald" => &mut self.emerald,
            "emerald-600" | "emerald-dark" => &mut self.emerald_dark,
            "emerald-400" | "emerald-light" => &mut self.emerald_light,
            "emerald-50" | "emerald-tint" => &mut self.emerald_tint,
            "logo-navy" => &mut self.logo_navy,
            "logo-gold" => &mut self.logo_gold,
            "logo-background" | "logo-cream" => &mut self.logo_cream,
            "slate-800" | "text" => &mut self.text,
            "slate-500" | "text-secondary" => &mut self.text_secondary,
            "slate-400" | "text-muted" => &mut self.text_muted,
            "slate-200" | "border" => &mut self.border,
            "slate-50" | "surface-alt" => &mut self.surface_alt,
            "white" => &mut self.white,
            "grid-line" => &mut self.grid_line,
            "danger" => &mut self.danger,
            _ => return None,
        };
        Some(slot)
    }

    /// Default text color for a role on a light page
    pub fn role_color(&self, role: TextRole) -> Rgb {
        match role {
            TextRole::Display => self.white,
            TextRole::Heading | TextRole::Label => self.navy_dark,
            TextRole::Subheading | TextRole::Stat => self.primary,
            TextRole::Body => self.text,
            TextRole::Small => self.text_secondary,
            TextRole::Caption => self.text_muted,
        }
    }

    /// Row backgrounds for striped tables
    pub fn zebra(&self) -> Zebra {
        Zebra {
            even: self.white,
            odd: self.tint,
        }
    }

    /// Header row fill for tables
    pub fn table_header(&self) -> Rgb {
        self.navy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_brand() {
        let theme = Theme::default();
        assert_eq!(theme.primary.to_hex(), "#1A6EF5");
        assert_eq!(theme.logo_gold.to_hex(), "#C5961E");
        assert_eq!(theme.navy_dark.to_hex(), "#142857");
    }

    #[test]
    fn test_tokens_override_slots() {
        let tokens = BrandTokens::parse(
            r##"{"colors": {"brand": {"600": "#000001"}, "logo": {"gold": "#000002"}, "unused": "#000003"}}"##,
        )
        .unwrap();
        let theme = Theme::from_tokens(&tokens);
        assert_eq!(theme.primary, Rgb::from_u32(0x000001));
        assert_eq!(theme.logo_gold, Rgb::from_u32(0x000002));
        assert_eq!(theme.navy, Theme::default().navy);
    }

    #[test]
    fn test_zebra_comes_from_theme() {
        let theme = Theme::default();
        let zebra = theme.zebra();
        assert_eq!(zebra.even, Rgb::WHITE);
        assert_eq!(zebra.odd, theme.tint);
    }

    #[test]
    fn test_role_colors() {
        let theme = Theme::default();
        assert_eq!(theme.role_color(TextRole::Heading), theme.navy_dark);
        assert_eq!(theme.role_color(TextRole::Caption), theme.text_muted);
    }
}
