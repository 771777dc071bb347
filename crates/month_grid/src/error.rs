//! Errors from grid computation.

use chrono::NaiveDate;

/// Why a grid could not be computed.
///
/// Configuration problems are reported before any date arithmetic runs,
/// so no partial [`crate::GridRange`] is ever produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    /// One of the grid dimensions is zero.
    #[error("invalid grid shape {cells_per_row}x{rows_per_grid}: both dimensions must be positive")]
    InvalidShape {
        cells_per_row: usize,
        rows_per_grid: usize,
    },

    /// `cells_per_row * rows_per_grid` does not fit in a `usize`.
    #[error("grid shape {cells_per_row}x{rows_per_grid} has too many cells")]
    TooManyCells {
        cells_per_row: usize,
        rows_per_grid: usize,
    },

    /// The grid would reach past the dates `chrono` can represent.
    #[error("a grid of {cells} cells around {anchor} leaves the supported date range")]
    DateOutOfRange { anchor: NaiveDate, cells: usize },
}
