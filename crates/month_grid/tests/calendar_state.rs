use chrono::{Months, NaiveDate, Weekday};
use emath::{Rect, pos2, vec2};
use month_grid::{
    CalendarConfig, CalendarLocale, CalendarState, DEFAULT_HEADER_FRACTION, GridShape,
    split_header,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn mid_month_selection_stays_in_grid() {
    let mut state = CalendarState::new(date(2023, 12, 15)).unwrap();
    let mut display_date = date(2023, 12, 15);
    for _ in 0..30 {
        // Select the last cell, then move on a month.
        let last = state.range().real_end;
        state.set_selected_date(last).unwrap();
        assert_eq!(state.selected_date(), last);

        display_date = display_date.checked_add_months(Months::new(1)).unwrap();
        state.set_display_date(display_date).unwrap();
        assert!(state.range().contains(state.selected_date()));
        if !state.range().contains(last) {
            assert_eq!(state.selected_date(), display_date);
        }
    }
}

#[test]
fn late_display_date_has_no_selected_cell() {
    let mut state = CalendarState::new(date(2024, 3, 14)).unwrap();
    state.set_selected_date(date(2024, 3, 30)).unwrap();

    // The 31st is past the default 7×5 grid for March 2024, but becomes the selection anyway.
    state.set_display_date(date(2024, 3, 31)).unwrap();
    assert_eq!(state.range().real_end, date(2024, 3, 30));
    assert_eq!(state.selected_date(), date(2024, 3, 30));

    state.set_selected_date(date(2024, 4, 2)).unwrap();
    assert_eq!(state.selected_date(), date(2024, 3, 31));
    assert!(!state.range().contains(state.selected_date()));

    let widget = Rect::from_min_size(pos2(0.0, 0.0), vec2(700.0, 520.0));
    let (header, grid) = split_header(widget, DEFAULT_HEADER_FRACTION);
    let frame = state.frame(header, grid, &CalendarLocale::english());
    assert_eq!(frame.cells.len(), 35);
    assert_eq!(frame.cells.iter().filter(|c| c.is_selected).count(), 0);

    let fresh = CalendarState::new(date(2024, 3, 31)).unwrap();
    assert_eq!(fresh, state);
}

#[test]
fn every_setter_recomputes() {
    let mut state = CalendarState::new(date(2024, 3, 14)).unwrap();
    assert_eq!(state.range().real_start, date(2024, 2, 25));

    state.set_start_of_week(Weekday::Mon).unwrap();
    assert_eq!(state.range().real_start, date(2024, 2, 26));

    state
        .set_grid_shape(GridShape {
            cells_per_row: 7,
            rows_per_grid: 6,
        })
        .unwrap();
    assert_eq!(state.cells().len(), 42);
    assert_eq!(state.range().real_end, date(2024, 4, 7));

    state.set_show_outside_month_dates(false).unwrap();
    assert_eq!(state.range().virtual_start, date(2024, 3, 1));
    assert_eq!(state.range().virtual_end, date(2024, 3, 31));

    state.set_display_date(date(2024, 4, 30)).unwrap();
    assert_eq!(state.range().real_start, date(2024, 4, 1));
    assert_eq!(state.config().start_of_week, 1);
}

#[test]
fn rejected_configuration_keeps_the_old_grid() {
    let config = CalendarConfig::default().with_start_of_week(Weekday::Mon);
    let mut state = CalendarState::with_config(date(2024, 3, 14), config).unwrap();
    let before = state.clone();
    assert!(
        state
            .set_grid_shape(GridShape {
                cells_per_row: 0,
                rows_per_grid: 0,
            })
            .is_err()
    );
    assert_eq!(state, before);

    let zero_width = config.with_shape(GridShape {
        cells_per_row: 0,
        rows_per_grid: 3,
    });
    assert!(CalendarState::with_config(date(2024, 3, 14), zero_width).is_err());
}

#[test]
fn paint_pass_and_pointer_agree() {
    let mut state = CalendarState::new(date(2024, 3, 14)).unwrap();
    let widget = Rect::from_min_size(pos2(5.0, 5.0), vec2(731.0, 553.0));
    let (header, grid) = split_header(widget, DEFAULT_HEADER_FRACTION);
    let frame = state.frame(header, grid, &CalendarLocale::english());

    for cell in &frame.cells {
        assert_eq!(state.date_at(cell.rect.center(), grid), Some(cell.cell.date));
    }

    let target = &frame.cells[20];
    assert_eq!(state.select_at(target.rect.center(), grid), Some(target.cell.date));
    let frame = state.frame(header, grid, &CalendarLocale::english());
    assert!(frame.cells[20].is_selected);
    assert_eq!(frame.cells.iter().filter(|c| c.is_selected).count(), 1);
}
