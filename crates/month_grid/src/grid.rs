//! Which dates go into which cells.

use chrono::{Datelike as _, Days, Months, NaiveDate};

use crate::{CalendarConfig, GridError};

/// Date boundaries of a computed grid. All bounds are inclusive.
///
/// The *real* range is every date physically in the grid, padding included.
/// The *virtual* range is the part considered to belong to the displayed month,
/// and always lies within the real range.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridRange {
    pub real_start: NaiveDate,
    pub real_end: NaiveDate,
    pub virtual_start: NaiveDate,
    pub virtual_end: NaiveDate,
}

impl GridRange {
    /// Is this date somewhere in the grid?
    #[inline]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.real_start <= date && date <= self.real_end
    }

    /// Does this date count as part of the displayed month?
    #[inline]
    pub fn is_in_displayed_month(&self, date: NaiveDate) -> bool {
        self.virtual_start <= date && date <= self.virtual_end
    }

    /// Number of days in the real range, which equals the number of cells.
    pub fn num_days(&self) -> usize {
        self.real_end.signed_duration_since(self.real_start).num_days() as usize + 1
    }

    /// Sequential cell index of a date, if it is in the grid.
    pub fn index_of(&self, date: NaiveDate) -> Option<usize> {
        self.contains(date)
            .then(|| date.signed_duration_since(self.real_start).num_days() as usize)
    }

    /// The date in the cell with the given sequential index.
    pub fn date_at(&self, index: usize) -> Option<NaiveDate> {
        if index < self.num_days() {
            self.real_start.checked_add_days(Days::new(index as u64))
        } else {
            None
        }
    }
}

/// One slot of the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridCell {
    pub date: NaiveDate,

    /// Sequential index, row by row.
    pub index: usize,
    pub row: usize,
    pub column: usize,

    /// `date` lies in the virtual range.
    pub is_in_displayed_month: bool,
}

/// A run of consecutive cells that share a month.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MonthSpan {
    pub year: i32,

    /// 1-based, like [`Datelike::month`](chrono::Datelike::month).
    pub month: u32,

    /// Index of the first cell of this month in the grid.
    pub first_index: usize,

    /// How many cells of the grid this month occupies.
    pub len: usize,
}

/// The result of laying out a month: the range plus one [`GridCell`] per slot.
///
/// This is a pure function of the display date and the [`CalendarConfig`],
/// so it is cheap to recompute on every frame.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DateGrid {
    pub display_date: NaiveDate,
    pub config: CalendarConfig,
    pub range: GridRange,

    /// Exactly `cells_per_row * rows_per_grid` cells, starting at `range.real_start`,
    /// one day apart.
    pub cells: Vec<GridCell>,
}

impl DateGrid {
    /// Lay out the month containing `display_date`.
    ///
    /// The first row always holds the first of the month, in the column of its weekday.
    /// Leading cells are filled from the previous month, trailing cells from the next.
    ///
    /// ```
    /// # use month_grid::{CalendarConfig, DateGrid};
    /// use chrono::{NaiveDate, Weekday};
    ///
    /// let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
    /// let config = CalendarConfig::default().with_start_of_week(Weekday::Mon);
    /// let grid = DateGrid::compute(date(2024, 4, 17), &config).unwrap();
    /// assert_eq!(grid.range.real_start, date(2024, 4, 1));
    /// assert_eq!(grid.range.real_end, date(2024, 5, 5));
    /// assert_eq!(grid.cells.len(), 35);
    /// ```
    ///
    /// # Errors
    /// [`GridError::InvalidShape`] or [`GridError::TooManyCells`] for a bad shape.
    /// [`GridError::DateOutOfRange`] if the grid would leave the dates `chrono` supports.
    pub fn compute(display_date: NaiveDate, config: &CalendarConfig) -> Result<Self, GridError> {
        let cell_count = config
            .shape
            .cell_count()
            .inspect_err(|err| log::warn!("Rejected calendar configuration: {err}"))?;

        let out_of_range = GridError::DateOutOfRange {
            anchor: display_date,
            cells: cell_count,
        };

        let first_of_month = display_date.with_day(1).ok_or(out_of_range)?;
        let last_of_month = last_day_of_month(first_of_month).ok_or(out_of_range)?;

        // Column of the first of the month. Every other day of the month follows
        // from it, so the grid start does not depend on which day we were given.
        let leading_days = leading_padding(first_of_month, config);
        let real_start = first_of_month
            .checked_sub_days(Days::new(leading_days))
            .ok_or(out_of_range)?;

        // The grid always holds exactly `cell_count` days, whatever the month looks like.
        let real_end = real_start
            .checked_add_days(Days::new(cell_count as u64 - 1))
            .ok_or(out_of_range)?;

        // Leading padding never counts as part of the month. Trailing days do when shown.
        let virtual_start = first_of_month;
        let virtual_end = if config.show_outside_month_dates {
            real_end
        } else {
            // A grid smaller than the month cannot show more days than it has cells.
            last_of_month.min(real_end)
        };

        let range = GridRange {
            real_start,
            real_end,
            virtual_start,
            virtual_end,
        };

        // Non-zero, `cell_count` checked it.
        let cells_per_row = config.shape.cells_per_row;
        let cells = real_start
            .iter_days()
            .take(cell_count)
            .enumerate()
            .map(|(index, date)| GridCell {
                date,
                index,
                row: index / cells_per_row,
                column: index % cells_per_row,
                is_in_displayed_month: range.is_in_displayed_month(date),
            })
            .collect();

        log::debug!(
            "Computed {cell_count}-cell grid {real_start}..={real_end} for {display_date} (displayed {virtual_start}..={virtual_end})"
        );

        Ok(Self {
            display_date,
            config: *config,
            range,
            cells,
        })
    }

    /// The cell showing this date, if it is in the grid.
    pub fn cell_for_date(&self, date: NaiveDate) -> Option<&GridCell> {
        self.range.index_of(date).and_then(|i| self.cells.get(i))
    }

    /// The months present in the grid, in order, with how many cells each occupies.
    ///
    /// Useful for shading alternating months and for labelling month starts.
    pub fn month_spans(&self) -> Vec<MonthSpan> {
        self.cells
            .chunk_by(|a, b| a.date.year() == b.date.year() && a.date.month() == b.date.month())
            .filter_map(|run| {
                let first = run.first()?;
                Some(MonthSpan {
                    year: first.date.year(),
                    month: first.date.month(),
                    first_index: first.index,
                    len: run.len(),
                })
            })
            .collect()
    }
}

/// How many cells before the first of the month belong to the previous month.
///
/// Always in `0..cells_per_row`.
fn leading_padding(first_of_month: NaiveDate, config: &CalendarConfig) -> u64 {
    let cells_per_row = config.shape.cells_per_row as i64;
    let weekday = i64::from(first_of_month.weekday().num_days_from_sunday());
    (weekday - config.normalized_start_of_week()).rem_euclid(cells_per_row) as u64
}

/// The last day of the month that starts at `first_of_month`.
fn last_day_of_month(first_of_month: NaiveDate) -> Option<NaiveDate> {
    first_of_month
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
}
