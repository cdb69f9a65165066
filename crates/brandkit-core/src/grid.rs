//! Card grid layout
//!
//! Cells are filled row by row in reading order. Positions only depend on
//! the index, so the same input always lands in the same place.

use brandkit_ast::{Point, Rect};

use crate::error::LayoutError;

/// A grid of equal cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub origin: Point,
    pub columns: u32,
    pub cell_width: i64,
    pub cell_height: i64,
    pub gutter_x: i64,
    pub gutter_y: i64,
}

impl GridLayout {
    /// Grid whose cell width is derived from the row width
    ///
    /// Each cell gets `(width - gutter * (columns - 1)) / columns` points,
    /// rounded down, so a full row never exceeds `width`.
    pub fn fill(
        origin: Point,
        width: i64,
        columns: u32,
        cell_height: i64,
        gutter: i64,
    ) -> Result<Self, LayoutError> {
        if columns == 0 {
            return Err(LayoutError::InvalidColumns);
        }
        let cols = columns as i64;
        let cell_width = (width - gutter * (cols - 1)).max(0) / cols;
        Ok(Self {
            origin,
            columns,
            cell_width,
            cell_height,
            gutter_x: gutter,
            gutter_y: gutter,
        })
    }

    /// Top-left corner of each of `count` cells
    pub fn origins(&self, count: usize) -> Result<Vec<Point>, LayoutError> {
        if self.columns == 0 {
            return Err(LayoutError::InvalidColumns);
        }
        let columns = self.columns as usize;
        Ok((0..count)
            .map(|i| {
                let col = (i % columns) as i64;
                let row = (i / columns) as i64;
                Point::new(
                    self.origin.x + col * (self.cell_width + self.gutter_x),
                    self.origin.y + row * (self.cell_height + self.gutter_y),
                )
            })
            .collect())
    }

    /// Cell rectangles for `count` items
    pub fn cells(&self, count: usize) -> Result<Vec<Rect>, LayoutError> {
        Ok(self
            .origins(count)?
            .into_iter()
            .map(|p| Rect::new(p.x, p.y, self.cell_width, self.cell_height))
            .collect())
    }

    /// Number of rows `count` items occupy
    pub fn rows(&self, count: usize) -> usize {
        if self.columns == 0 {
            return 0;
        }
        count.div_ceil(self.columns as usize)
    }

    /// Width of one full row
    pub fn row_width(&self) -> i64 {
        let cols = self.columns as i64;
        cols * (self.cell_width + self.gutter_x) - self.gutter_x
    }

    /// Rectangle covering every cell of `count` items
    pub fn bounds(&self, count: usize) -> Rect {
        if count == 0 || self.columns == 0 {
            return Rect::new(self.origin.x, self.origin.y, 0, 0);
        }
        let used_columns = count.min(self.columns as usize) as i64;
        let rows = self.rows(count) as i64;
        Rect::new(
            self.origin.x,
            self.origin.y,
            used_columns * (self.cell_width + self.gutter_x) - self.gutter_x,
            rows * (self.cell_height + self.gutter_y) - self.gutter_y,
        )
    }

    /// Fail when a full row is wider than `available`
    pub fn ensure_fits(&self, available: i64) -> Result<(), LayoutError> {
        if self.columns == 0 {
            return Err(LayoutError::InvalidColumns);
        }
        let required = self.row_width();
        if required > available {
            return Err(LayoutError::GridOverflow {
                required,
                available,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stat_grid() -> GridLayout {
        GridLayout {
            origin: Point::new(80, 330),
            columns: 2,
            cell_width: 260,
            cell_height: 150,
            gutter_x: 20,
            gutter_y: 20,
        }
    }

    #[test]
    fn test_four_cells_two_columns() {
        let origins = stat_grid().origins(4).unwrap();
        assert_eq!(
            origins,
            vec![
                Point::new(80, 330),
                Point::new(360, 330),
                Point::new(80, 500),
                Point::new(360, 500),
            ]
        );
    }

    #[test]
    fn test_zero_items() {
        let grid = stat_grid();
        assert!(grid.origins(0).unwrap().is_empty());
        assert_eq!(grid.bounds(0).width, 0);
    }

    #[test]
    fn test_zero_columns() {
        let mut grid = stat_grid();
        grid.columns = 0;
        assert_eq!(grid.origins(3), Err(LayoutError::InvalidColumns));
        assert_eq!(
            GridLayout::fill(Point::new(0, 0), 100, 0, 10, 5),
            Err(LayoutError::InvalidColumns)
        );
    }

    #[test]
    fn test_bounds() {
        let grid = stat_grid();
        assert_eq!(grid.bounds(4), Rect::new(80, 330, 540, 320));
        assert_eq!(grid.bounds(3), Rect::new(80, 330, 540, 320));
        assert_eq!(grid.bounds(1), Rect::new(80, 330, 260, 150));
    }

    #[test]
    fn test_overflow_guard() {
        let grid = stat_grid();
        assert!(grid.ensure_fits(540).is_ok());
        assert_eq!(
            grid.ensure_fits(500),
            Err(LayoutError::GridOverflow {
                required: 540,
                available: 500
            })
        );
    }

    #[test]
    fn test_fill_fits_width() {
        let grid = GridLayout::fill(Point::new(54, 100), 487, 4, 60, 12).unwrap();
        assert_eq!(grid.cell_width, 112);
        assert!(grid.row_width() <= 487);
        assert!(grid.ensure_fits(487).is_ok());
    }

    #[test]
    fn test_reading_order_preserved() {
        let grid = GridLayout::fill(Point::new(0, 0), 300, 3, 10, 0).unwrap();
        let origins = grid.origins(7).unwrap();
        for pair in origins.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            assert!(b.y > a.y || (b.y == a.y && b.x > a.x));
        }
        assert_eq!(grid.rows(7), 3);
    }
}
