//! Mapping between grid cells and screen rectangles.

use chrono::NaiveDate;
use emath::{Pos2, Rect, Vec2, pos2, vec2};

use crate::{GridRange, GridShape};

/// Fraction of the widget height taken by the weekday header.
pub const DEFAULT_HEADER_FRACTION: f32 = 0.04;

/// Split a widget rectangle into a header strip at the top and the grid bounds below it.
///
/// The header height is floored to whole points.
pub fn split_header(widget_rect: Rect, header_fraction: f32) -> (Rect, Rect) {
    let header_height = (widget_rect.height() * header_fraction.clamp(0.0, 1.0)).floor();
    let split_y = widget_rect.top() + header_height;
    let header = Rect::from_min_max(widget_rect.min, pos2(widget_rect.right(), split_y));
    let grid = Rect::from_min_max(pos2(widget_rect.left(), split_y), widget_rect.max);
    (header, grid)
}

/// Places the cells of a grid with a given [`GridShape`] inside some bounds.
///
/// Cell sizes are floored to whole points, so when the bounds are not a multiple of the shape
/// the rightmost column and bottom row leave a few unused points along the far edges.
/// Those points belong to no cell.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridLayout {
    bounds: Rect,
    shape: GridShape,
}

impl GridLayout {
    /// `bounds` excludes any header.
    ///
    /// A shape with a zero dimension gives empty cells that nothing hits.
    pub fn new(bounds: Rect, shape: GridShape) -> Self {
        Self { bounds, shape }
    }

    #[inline]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    #[inline]
    pub fn shape(&self) -> GridShape {
        self.shape
    }

    /// Size of every cell. Zero along a dimension with no cells.
    pub fn cell_size(&self) -> Vec2 {
        let size = |length: f32, count: usize| {
            if count == 0 {
                0.0
            } else {
                (length / count as f32).floor()
            }
        };
        vec2(
            size(self.bounds.width(), self.shape.cells_per_row),
            size(self.bounds.height(), self.shape.rows_per_grid),
        )
    }

    pub fn cell_rect(&self, row: usize, column: usize) -> Rect {
        let size = self.cell_size();
        let min = self.bounds.min + vec2(column as f32 * size.x, row as f32 * size.y);
        Rect::from_min_size(min, size)
    }

    /// Rectangle of the cell with this sequential index.
    ///
    /// `None` if the shape has no columns.
    pub fn cell_rect_at(&self, index: usize) -> Option<Rect> {
        let (row, column) = self.shape.row_column(index)?;
        Some(self.cell_rect(row, column))
    }

    /// Rectangle of the cell showing `date`, if it is in the grid.
    pub fn date_rect(&self, date: NaiveDate, range: &GridRange) -> Option<Rect> {
        range
            .index_of(date)
            .and_then(|index| self.cell_rect_at(index))
    }

    /// Which cell, if any, is under this point?
    pub fn cell_index_at(&self, pos: Pos2) -> Option<usize> {
        if !self.bounds.contains(pos) {
            return None;
        }

        let size = self.cell_size();
        if size.x < 1.0 || size.y < 1.0 {
            // Bounds too small to give every cell a point.
            return None;
        }

        let offset = pos - self.bounds.min;
        let column = (offset.x / size.x).floor() as usize;
        let row = (offset.y / size.y).floor() as usize;
        if column < self.shape.cells_per_row && row < self.shape.rows_per_grid {
            Some(row * self.shape.cells_per_row + column)
        } else {
            None
        }
    }

    /// The date under this point, if any.
    pub fn hit_test(&self, pos: Pos2, range: &GridRange) -> Option<NaiveDate> {
        self.cell_index_at(pos).and_then(|index| range.date_at(index))
    }

    /// Rectangle of one weekday label inside the header strip.
    ///
    /// Uses the same column width as the cells below it.
    pub fn header_cell_rect(&self, header: Rect, column: usize) -> Rect {
        let width = self.cell_size().x;
        Rect::from_min_size(
            pos2(header.left() + column as f32 * width, header.top()),
            vec2(width, header.height()),
        )
    }

    /// X coordinates of the lines between columns.
    pub fn column_separators(&self) -> Vec<f32> {
        let width = self.cell_size().x;
        (1..self.shape.cells_per_row)
            .map(|column| self.bounds.left() + column as f32 * width)
            .collect()
    }

    /// Y coordinates of the lines between rows.
    pub fn row_separators(&self) -> Vec<f32> {
        let height = self.cell_size().y;
        (1..self.shape.rows_per_grid)
            .map(|row| self.bounds.top() + row as f32 * height)
            .collect()
    }
}
