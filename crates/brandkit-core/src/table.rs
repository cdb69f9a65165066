//! Table lowering
//!
//! Tables become one ruled rectangle per cell plus its content. Row
//! heights come from the tallest cell in the row.

use brandkit_ast::{
    Alignment, ColumnSpec, FontFamily, Rect, RectElement, Rgb, Stroke, TableSpec, TextRole,
};

use crate::error::LayoutError;
use crate::palette::{palette_columns, palette_rows, PaletteRow};
use crate::styler::{Fragment, Styler};

/// Width of the cell rules
const RULE_WIDTH: f64 = 0.5;

/// Content of a table cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Text(String),
    /// A color sample square
    Swatch(Rgb),
}

/// A body row with its background
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BodyRow {
    pub cells: Vec<Cell>,
    pub background: Rgb,
}

impl From<PaletteRow> for BodyRow {
    fn from(row: PaletteRow) -> Self {
        Self {
            cells: vec![
                Cell::Swatch(row.swatch),
                Cell::Text(row.name),
                Cell::Text(row.hex),
                Cell::Text(row.usage),
            ],
            background: row.background,
        }
    }
}

/// Split `width` by column weights; the last column takes the remainder
pub fn column_widths(columns: &[ColumnSpec], width: i64) -> Result<Vec<i64>, LayoutError> {
    if columns.is_empty() {
        return Err(LayoutError::invalid_table("no columns"));
    }
    let total: i64 = columns.iter().map(|c| c.weight as i64).sum();
    if total == 0 {
        return Err(LayoutError::invalid_table("column weights sum to zero"));
    }
    let mut widths: Vec<i64> = columns[..columns.len() - 1]
        .iter()
        .map(|c| width * c.weight as i64 / total)
        .collect();
    let used: i64 = widths.iter().sum();
    widths.push(width - used);
    Ok(widths)
}

/// Lay out a generic table block at the fragment origin
pub fn lower_table(
    styler: &Styler<'_>,
    table: &TableSpec,
    x: i64,
    width: i64,
) -> Result<Fragment, LayoutError> {
    let zebra = styler.theme.zebra();
    let rows: Vec<BodyRow> = table
        .rows
        .iter()
        .enumerate()
        .map(|(i, cells)| BodyRow {
            cells: cells.iter().cloned().map(Cell::Text).collect(),
            background: zebra.background(i),
        })
        .collect();
    let header_fill = table
        .header_fill
        .unwrap_or_else(|| styler.theme.table_header());
    lower_rows(styler, &table.columns, header_fill, &rows, x, width)
}

/// Lay out a palette table at the fragment origin
pub fn lower_palette(
    styler: &Styler<'_>,
    tokens: &[brandkit_ast::ColorToken],
    x: i64,
    width: i64,
) -> Result<Fragment, LayoutError> {
    let rows: Vec<BodyRow> = palette_rows(tokens, &styler.theme.zebra())
        .into_iter()
        .map(BodyRow::from)
        .collect();
    lower_rows(
        styler,
        &palette_columns(),
        styler.theme.table_header(),
        &rows,
        x,
        width,
    )
}

/// Lay out a header row and body rows
pub fn lower_rows(
    styler: &Styler<'_>,
    columns: &[ColumnSpec],
    header_fill: Rgb,
    rows: &[BodyRow],
    x: i64,
    width: i64,
) -> Result<Fragment, LayoutError> {
    let widths = column_widths(columns, width)?;
    for (i, row) in rows.iter().enumerate() {
        if row.cells.len() != columns.len() {
            return Err(LayoutError::invalid_table(format!(
                "row {i} has {} cells, expected {}",
                row.cells.len(),
                columns.len()
            )));
        }
    }

    let theme = styler.theme;
    let canvas = styler.canvas;
    let pad = canvas.cell_padding;
    let size = canvas.size(TextRole::Small);
    let rule = Stroke::new(theme.grid_line, RULE_WIDTH);
    let mut fragment = Fragment::default();
    let mut y = 0;

    // header
    let header_runs: Vec<_> = columns
        .iter()
        .map(|c| vec![styler.custom(c.header.clone(), size, true, theme.white)])
        .collect();
    let header_height = row_height(styler, &header_runs, &widths, pad);
    let mut cx = x;
    for (runs, w) in header_runs.into_iter().zip(&widths) {
        let cell = Rect::new(cx, y, *w, header_height);
        fragment.push(RectElement::filled(cell, header_fill).stroked(rule));
        fragment.push(styler.centered(inner(cell, pad), runs, Alignment::Center));
        cx += w;
    }
    y += header_height;

    for row in rows {
        let runs: Vec<Vec<_>> = row
            .cells
            .iter()
            .zip(columns)
            .map(|(cell, column)| match cell {
                Cell::Text(text) => {
                    let mut run = styler.custom(text.clone(), size, column.bold, theme.text);
                    if column.monospace {
                        run.family = FontFamily::Mono;
                    }
                    vec![run]
                }
                Cell::Swatch(_) => Vec::new(),
            })
            .collect();
        let mut height = row_height(styler, &runs, &widths, pad);
        if row.cells.iter().any(|c| matches!(c, Cell::Swatch(_))) {
            height = height.max(canvas.swatch_size + 2 * pad);
        }

        let mut cx = x;
        for ((cell, cell_runs), w) in row.cells.iter().zip(runs).zip(&widths) {
            let bounds = Rect::new(cx, y, *w, height);
            fragment.push(RectElement::filled(bounds, row.background).stroked(rule));
            match cell {
                Cell::Text(_) => {
                    fragment.push(styler.centered(inner(bounds, pad), cell_runs, Alignment::Left));
                }
                Cell::Swatch(color) => {
                    let s = canvas.swatch_size.min(*w - 2 * pad).max(0);
                    let square = Rect::new(
                        bounds.x + (bounds.width - s) / 2,
                        bounds.y + (bounds.height - s) / 2,
                        s,
                        s,
                    );
                    fragment.push(RectElement::filled(square, *color).stroked(rule));
                }
            }
            cx += w;
        }
        y += height;
    }

    fragment.height = y;
    Ok(fragment)
}

fn inner(cell: Rect, pad: i64) -> Rect {
    cell.inset(&brandkit_ast::Insets::symmetric(pad, pad))
}

fn row_height(
    styler: &Styler<'_>,
    cells: &[Vec<brandkit_ast::StyledRun>],
    widths: &[i64],
    pad: i64,
) -> i64 {
    let min_line = (styler.canvas.size(TextRole::Small) * styler.canvas.leading).ceil() as i64;
    cells
        .iter()
        .zip(widths)
        .map(|(runs, w)| {
            if runs.is_empty() {
                min_line
            } else {
                styler.height(runs, w - 2 * pad)
            }
        })
        .max()
        .unwrap_or(min_line)
        .max(min_line)
        + 2 * pad
}
