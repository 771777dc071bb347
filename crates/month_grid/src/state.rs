//! Calendar state that survives between frames, and the per-frame paint output.

use chrono::NaiveDate;
use emath::{Pos2, Rect};

use crate::{
    CalendarConfig, CalendarLocale, DateGrid, GridCell, GridError, GridLayout, GridRange,
    GridShape, StartOfWeek,
};

/// The state behind a month-view calendar.
///
/// Holds the configuration, the display and selected dates, and the grid computed from them.
/// Every setter recomputes the whole grid and swaps it in only if that succeeded,
/// so a rejected change leaves the state as it was.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CalendarState {
    selected_date: NaiveDate,
    grid: DateGrid,
}

impl CalendarState {
    /// Show the month of `display_date` with the default configuration, selecting `display_date`.
    ///
    /// # Errors
    /// If the grid would leave the supported date range.
    pub fn new(display_date: NaiveDate) -> Result<Self, GridError> {
        Self::with_config(display_date, CalendarConfig::default())
    }

    /// Show the current month with the default configuration.
    ///
    /// # Errors
    /// Only near the ends of the supported date range.
    pub fn today() -> Result<Self, GridError> {
        Self::new(chrono::Local::now().date_naive())
    }

    /// Show the month of `display_date` and select `display_date`.
    ///
    /// The grid starts at the week of the first of the month, so a late display date
    /// may lie past the end of a small grid. It is still selected, see [`Self::selected_date`].
    ///
    /// # Errors
    /// If the configuration is invalid, see [`DateGrid::compute`].
    pub fn with_config(display_date: NaiveDate, config: CalendarConfig) -> Result<Self, GridError> {
        let grid = DateGrid::compute(display_date, &config)?;
        Ok(Self {
            selected_date: display_date,
            grid,
        })
    }

    #[inline]
    pub fn config(&self) -> &CalendarConfig {
        &self.grid.config
    }

    #[inline]
    pub fn display_date(&self) -> NaiveDate {
        self.grid.display_date
    }

    /// The highlighted date.
    ///
    /// Whenever the grid is recomputed, a selection that falls outside it is replaced by the
    /// display date. The display date itself is not always in the grid: a 7×5 grid for a month
    /// that starts late in the week ends before the month does. No cell is highlighted then.
    #[inline]
    pub fn selected_date(&self) -> NaiveDate {
        self.selected_date
    }

    #[inline]
    pub fn grid(&self) -> &DateGrid {
        &self.grid
    }

    #[inline]
    pub fn range(&self) -> &GridRange {
        &self.grid.range
    }

    #[inline]
    pub fn cells(&self) -> &[GridCell] {
        &self.grid.cells
    }

    /// # Errors
    /// Only near the ends of the supported date range.
    pub fn set_display_date(&mut self, display_date: NaiveDate) -> Result<(), GridError> {
        self.recompute(display_date, self.grid.config, self.selected_date)
    }

    /// Select a date. If it is not in the grid, the display date is selected instead.
    ///
    /// # Errors
    /// Only near the ends of the supported date range.
    pub fn set_selected_date(&mut self, selected_date: NaiveDate) -> Result<(), GridError> {
        self.recompute(self.grid.display_date, self.grid.config, selected_date)
    }

    /// Which weekday goes in the first column. Out-of-range offsets wrap.
    ///
    /// # Errors
    /// Only near the ends of the supported date range.
    pub fn set_start_of_week(
        &mut self,
        start_of_week: impl Into<StartOfWeek>,
    ) -> Result<(), GridError> {
        let config = self.grid.config.with_start_of_week(start_of_week);
        self.recompute(self.grid.display_date, config, self.selected_date)
    }

    /// # Errors
    /// [`GridError::InvalidShape`] if a dimension is zero. The state is left untouched.
    pub fn set_grid_shape(&mut self, shape: GridShape) -> Result<(), GridError> {
        let config = self.grid.config.with_shape(shape);
        self.recompute(self.grid.display_date, config, self.selected_date)
    }

    /// # Errors
    /// Only near the ends of the supported date range.
    pub fn set_show_outside_month_dates(&mut self, show: bool) -> Result<(), GridError> {
        let config = self.grid.config.with_show_outside_month_dates(show);
        self.recompute(self.grid.display_date, config, self.selected_date)
    }

    fn recompute(
        &mut self,
        display_date: NaiveDate,
        config: CalendarConfig,
        selected_date: NaiveDate,
    ) -> Result<(), GridError> {
        let grid = DateGrid::compute(display_date, &config)?;

        self.selected_date = if grid.range.contains(selected_date) {
            selected_date
        } else {
            log::debug!(
                "Selected date {selected_date} is outside the grid; selecting {display_date}"
            );
            display_date
        };
        self.grid = grid;
        Ok(())
    }

    /// The date under a pointer position, given where the grid is drawn.
    pub fn date_at(&self, pos: Pos2, grid_rect: Rect) -> Option<NaiveDate> {
        GridLayout::new(grid_rect, self.grid.config.shape).hit_test(pos, &self.grid.range)
    }

    /// Select the date under the pointer, if there is one. Returns the newly selected date.
    pub fn select_at(&mut self, pos: Pos2, grid_rect: Rect) -> Option<NaiveDate> {
        let date = self.date_at(pos, grid_rect)?;
        // Every date in the grid is a valid selection, so no recompute is needed.
        self.selected_date = date;
        Some(date)
    }

    /// Everything a renderer needs to paint the calendar once.
    ///
    /// `header_rect` holds the weekday names and `grid_rect` the day cells,
    /// see [`crate::split_header`].
    pub fn frame(
        &self,
        header_rect: Rect,
        grid_rect: Rect,
        locale: &CalendarLocale,
    ) -> CalendarFrame {
        let config = &self.grid.config;
        let layout = GridLayout::new(grid_rect, config.shape);

        let header = locale
            .weekday_header_labels(config.start_of_week, config.shape.cells_per_row)
            .into_iter()
            .enumerate()
            .map(|(column, label)| HeaderLabel {
                label: label.to_owned(),
                rect: layout.header_cell_rect(header_rect, column),
            })
            .collect();

        let grid_cells = self.grid.cells.as_slice();
        let cells = self
            .grid
            .month_spans()
            .into_iter()
            .enumerate()
            .flat_map(move |(span_index, span)| {
                let alternate_month = span_index % 2 == 1;
                grid_cells[span.first_index..span.first_index + span.len]
                    .iter()
                    .map(move |cell| (cell, alternate_month))
            })
            .map(|(cell, alternate_month)| FrameCell {
                cell: *cell,
                rect: layout.cell_rect(cell.row, cell.column),
                label: locale.day_label(cell.date, cell.index == 0),
                is_selected: cell.date == self.selected_date,
                alternate_month,
            })
            .collect();

        CalendarFrame {
            header,
            cells,
            column_separators: layout.column_separators(),
            row_separators: layout.row_separators(),
        }
    }
}

/// One weekday name in the header strip.
#[derive(Clone, Debug, PartialEq)]
pub struct HeaderLabel {
    pub label: String,
    pub rect: Rect,
}

/// One day cell, ready to paint.
#[derive(Clone, Debug, PartialEq)]
pub struct FrameCell {
    pub cell: GridCell,
    pub rect: Rect,

    /// `"April 1"` for the first cell and every first of a month, else the day number.
    pub label: String,
    pub is_selected: bool,

    /// Every other month in the grid is flagged, for alternating background shades.
    pub alternate_month: bool,
}

/// The output of [`CalendarState::frame`]. Drawing it is up to the caller.
#[derive(Clone, Debug, PartialEq)]
pub struct CalendarFrame {
    pub header: Vec<HeaderLabel>,
    pub cells: Vec<FrameCell>,

    /// X coordinates of the vertical lines between columns.
    pub column_separators: Vec<f32>,

    /// Y coordinates of the horizontal lines between rows.
    pub row_separators: Vec<f32>,
}
