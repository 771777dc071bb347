//! Print a month grid as text.
//!
//! ```sh
//! cargo run -p month_grid --example print_month -- 2024-03-14 1
//! ```
//!
//! The first argument is the display date (defaults to today),
//! the second the first day of the week counted from Sunday.

#![expect(clippy::print_stdout, clippy::print_stderr)]

use emath::{Rect, pos2, vec2};
use month_grid::{CalendarLocale, CalendarState, DEFAULT_HEADER_FRACTION, split_header};

const COLUMN_WIDTH: usize = 13;

fn main() {
    env_logger::init(); // Log to stderr (if you run with `RUST_LOG=debug`).

    if let Err(err) = run() {
        eprintln!("print_month: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut args = std::env::args().skip(1);

    let mut state = match args.next() {
        Some(arg) => CalendarState::new(arg.parse()?)?,
        None => CalendarState::today()?,
    };
    if let Some(arg) = args.next() {
        state.set_start_of_week(arg.parse::<i32>()?)?;
    }

    let shape = state.config().shape;
    let widget = Rect::from_min_size(
        pos2(0.0, 0.0),
        vec2(shape.cells_per_row as f32, shape.rows_per_grid as f32) * 100.0,
    );
    let (header, grid) = split_header(widget, DEFAULT_HEADER_FRACTION);
    let frame = state.frame(header, grid, &CalendarLocale::english());

    let header_line: Vec<String> = frame
        .header
        .iter()
        .map(|label| format!("{:<COLUMN_WIDTH$}", label.label))
        .collect();
    println!("{}", header_line.join(""));

    for row in frame.cells.chunks(shape.cells_per_row) {
        let line: Vec<String> = row
            .iter()
            .map(|cell| {
                let marker = if cell.is_selected {
                    '*'
                } else if cell.cell.is_in_displayed_month {
                    ' '
                } else {
                    '.'
                };
                format!("{:<COLUMN_WIDTH$}", format!("{marker}{}", cell.label))
            })
            .collect();
        println!("{}", line.join(""));
    }

    Ok(())
}
