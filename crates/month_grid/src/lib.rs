//! Date-grid layout for month-view calendars.
//!
//! Given a display date, a first day of the week and a grid shape, this crate works out
//! which date goes in every cell of a fixed-size grid, which of those belong to the
//! displayed month, and where each cell sits on screen.
//! Painting is left to you: [`CalendarState::frame`] hands you rectangles and labels,
//! and [`GridLayout::hit_test`] turns pointer positions back into dates.
//!
//! ```
//! use chrono::{NaiveDate, Weekday};
//! use emath::{pos2, vec2, Rect};
//! use month_grid::{CalendarLocale, CalendarState, split_header, DEFAULT_HEADER_FRACTION};
//!
//! let mut state = CalendarState::new(NaiveDate::from_ymd_opt(2024, 3, 14).unwrap()).unwrap();
//! state.set_start_of_week(Weekday::Mon).unwrap();
//!
//! let widget = Rect::from_min_size(pos2(0.0, 0.0), vec2(700.0, 520.0));
//! let (header, grid) = split_header(widget, DEFAULT_HEADER_FRACTION);
//! let frame = state.frame(header, grid, &CalendarLocale::english());
//! assert_eq!(frame.header[0].label, "Monday");
//! assert_eq!(frame.cells[0].label, "February 26");
//! ```
//!
//! ## Feature flags
#![cfg_attr(feature = "document-features", doc = document_features::document_features!())]
//!

#![forbid(unsafe_code)]

mod config;
mod error;
mod grid;
mod layout;
mod locale;
mod state;

pub use crate::config::{CalendarConfig, GridShape, StartOfWeek};
pub use crate::error::GridError;
pub use crate::grid::{DateGrid, GridCell, GridRange, MonthSpan};
pub use crate::layout::{DEFAULT_HEADER_FRACTION, GridLayout, split_header};
pub use crate::locale::CalendarLocale;
pub use crate::state::{CalendarFrame, CalendarState, FrameCell, HeaderLabel};

pub use chrono;
pub use emath;
