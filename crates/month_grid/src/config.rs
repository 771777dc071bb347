use chrono::Weekday;

use crate::GridError;

/// The number of columns and rows in the grid.
///
/// Usually one column per weekday, but any positive shape is allowed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridShape {
    pub cells_per_row: usize,
    pub rows_per_grid: usize,
}

impl Default for GridShape {
    /// Seven days per row, five rows.
    fn default() -> Self {
        Self {
            cells_per_row: 7,
            rows_per_grid: 5,
        }
    }
}

impl GridShape {
    /// Checked constructor.
    ///
    /// # Errors
    /// [`GridError::InvalidShape`] if either dimension is zero,
    /// [`GridError::TooManyCells`] if the cell count overflows.
    pub fn new(cells_per_row: usize, rows_per_grid: usize) -> Result<Self, GridError> {
        let shape = Self {
            cells_per_row,
            rows_per_grid,
        };
        shape.validate()?;
        Ok(shape)
    }

    /// Check that the shape has at least one cell and that its cell count fits in a `usize`.
    ///
    /// # Errors
    /// See [`Self::new`].
    pub fn validate(&self) -> Result<(), GridError> {
        self.cell_count().map(|_| ())
    }

    /// Total number of cells, `cells_per_row * rows_per_grid`.
    ///
    /// # Errors
    /// See [`Self::new`].
    pub fn cell_count(&self) -> Result<usize, GridError> {
        let Self {
            cells_per_row,
            rows_per_grid,
        } = *self;
        if cells_per_row == 0 || rows_per_grid == 0 {
            return Err(GridError::InvalidShape {
                cells_per_row,
                rows_per_grid,
            });
        }
        cells_per_row
            .checked_mul(rows_per_grid)
            .ok_or(GridError::TooManyCells {
                cells_per_row,
                rows_per_grid,
            })
    }

    /// `(row, column)` of the cell with the given sequential index.
    ///
    /// `None` if `cells_per_row` is zero.
    #[inline]
    pub fn row_column(&self, index: usize) -> Option<(usize, usize)> {
        Some((
            index.checked_div(self.cells_per_row)?,
            index.checked_rem(self.cells_per_row)?,
        ))
    }
}

/// Everything that decides which dates land in the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct CalendarConfig {
    pub shape: GridShape,

    /// The weekday shown in column 0, counted from Sunday (`0` = Sunday, `1` = Monday, …).
    ///
    /// Values outside `0..cells_per_row` are wrapped, never rejected.
    pub start_of_week: i32,

    /// If `false`, padding days from the neighboring months are not
    /// considered part of the displayed month.
    pub show_outside_month_dates: bool,
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            shape: GridShape::default(),
            start_of_week: 0,
            show_outside_month_dates: true,
        }
    }
}

impl CalendarConfig {
    #[inline]
    pub fn with_shape(mut self, shape: GridShape) -> Self {
        self.shape = shape;
        self
    }

    #[inline]
    pub fn with_start_of_week(mut self, start_of_week: impl Into<StartOfWeek>) -> Self {
        self.start_of_week = start_of_week.into().0;
        self
    }

    #[inline]
    pub fn with_show_outside_month_dates(mut self, show: bool) -> Self {
        self.show_outside_month_dates = show;
        self
    }

    /// `start_of_week` wrapped into `0..cells_per_row`.
    ///
    /// `0` for a shape without columns.
    pub fn normalized_start_of_week(&self) -> i64 {
        i64::from(self.start_of_week)
            .checked_rem_euclid(self.shape.cells_per_row as i64)
            .unwrap_or(0)
    }
}

/// Either a raw Sunday-based offset or a [`Weekday`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StartOfWeek(pub i32);

impl From<i32> for StartOfWeek {
    fn from(offset: i32) -> Self {
        Self(offset)
    }
}

impl From<Weekday> for StartOfWeek {
    fn from(weekday: Weekday) -> Self {
        Self(weekday.num_days_from_sunday() as i32)
    }
}
