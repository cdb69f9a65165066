//! Palette rows and zebra striping
//!
//! A palette is a list of color tokens shown as a table: a header row,
//! then one row per token in the order given. Rows alternate between two
//! backgrounds by parity.

use brandkit_ast::{ColorToken, ColumnSpec, Rgb};

/// Header labels of a palette table
pub const PALETTE_HEADER: [&str; 4] = ["Swatch", "Name", "Hex Code", "Usage"];

/// Relative column widths of a palette table
pub const PALETTE_WEIGHTS: [u32; 4] = [2, 7, 5, 13];

/// Alternating row backgrounds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Zebra {
    /// Background of rows 0, 2, 4, ...
    pub even: Rgb,
    /// Background of rows 1, 3, 5, ...
    pub odd: Rgb,
}

impl Zebra {
    /// Background of the data row at `index` (0-based, header excluded)
    pub fn background(&self, index: usize) -> Rgb {
        if index % 2 == 0 {
            self.even
        } else {
            self.odd
        }
    }
}

/// One data row of a palette table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteRow {
    pub swatch: Rgb,
    pub name: String,
    /// `#RRGGBB`, uppercase
    pub hex: String,
    pub usage: String,
    pub background: Rgb,
}

/// Rows for `tokens`, in input order
pub fn palette_rows(tokens: &[ColorToken], zebra: &Zebra) -> Vec<PaletteRow> {
    tokens
        .iter()
        .enumerate()
        .map(|(i, token)| PaletteRow {
            swatch: token.hex,
            name: token.name.clone(),
            hex: token.hex.to_hex(),
            usage: token.usage.clone(),
            background: zebra.background(i),
        })
        .collect()
}

/// Column list of a palette table
pub fn palette_columns() -> Vec<ColumnSpec> {
    PALETTE_HEADER
        .iter()
        .zip(PALETTE_WEIGHTS)
        .enumerate()
        .map(|(i, (header, weight))| {
            let column = ColumnSpec::new(*header, weight);
            if i == 2 {
                column.monospace()
            } else {
                column
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zebra() -> Zebra {
        Zebra {
            even: Rgb::from_u32(0xaaaaaa),
            odd: Rgb::from_u32(0xbbbbbb),
        }
    }

    #[test]
    fn test_rows_keep_order_and_stripe() {
        let tokens = vec![
            ColorToken::parse("A", "#142857", "first").unwrap(),
            ColorToken::parse("B", "#193f8f", "second").unwrap(),
            ColorToken::parse("C", "#1a6ef5", "third").unwrap(),
        ];
        let rows = palette_rows(&tokens, &zebra());

        let names: Vec<&str> = rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);

        let backgrounds: Vec<Rgb> = rows.iter().map(|r| r.background).collect();
        assert_eq!(
            backgrounds,
            vec![zebra().even, zebra().odd, zebra().even]
        );
    }

    #[test]
    fn test_hex_is_uppercase() {
        let tokens = vec![ColorToken::parse("Primary", "1a6ef5", "CTA").unwrap()];
        let rows = palette_rows(&tokens, &zebra());
        assert_eq!(rows[0].hex, "#1A6EF5");
        assert_eq!(rows[0].swatch, Rgb::from_u32(0x1a6ef5));
        assert_eq!(rows[0].usage, "CTA");
    }

    #[test]
    fn test_empty_palette() {
        assert!(palette_rows(&[], &zebra()).is_empty());
    }

    #[test]
    fn test_columns() {
        let columns = palette_columns();
        let headers: Vec<&str> = columns.iter().map(|c| c.header.as_str()).collect();
        assert_eq!(headers, PALETTE_HEADER.to_vec());
        assert!(columns[2].monospace);
    }
}
