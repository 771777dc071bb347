use chrono::{Datelike as _, NaiveDate};

/// Names used when labelling the grid.
///
/// Weekdays are indexed from Sunday, months from January.
/// The grid algorithm never looks at these, so swapping the table is all it takes to translate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CalendarLocale {
    pub weekday_names: [String; 7],
    pub month_names: [String; 12],
}

impl Default for CalendarLocale {
    fn default() -> Self {
        Self::english()
    }
}

impl CalendarLocale {
    pub fn new(weekday_names: [String; 7], month_names: [String; 12]) -> Self {
        Self {
            weekday_names,
            month_names,
        }
    }

    pub fn english() -> Self {
        Self {
            weekday_names: [
                "Sunday",
                "Monday",
                "Tuesday",
                "Wednesday",
                "Thursday",
                "Friday",
                "Saturday",
            ]
            .map(String::from),
            month_names: [
                "January",
                "February",
                "March",
                "April",
                "May",
                "June",
                "July",
                "August",
                "September",
                "October",
                "November",
                "December",
            ]
            .map(String::from),
        }
    }

    /// Name of a 1-based month. Out-of-range months wrap around.
    pub fn month_name(&self, month: u32) -> &str {
        let index = (month as usize + self.month_names.len() - 1) % self.month_names.len();
        &self.month_names[index]
    }

    /// The labels for the header row, one per column.
    ///
    /// Starts at `start_of_week` and walks the weekday table.
    /// Whenever the walk runs off the end of the table it restarts at the first name,
    /// so rows wider than a week simply repeat the week.
    pub fn weekday_header_labels(&self, start_of_week: i32, cells_per_row: usize) -> Vec<&str> {
        let table_len = self.weekday_names.len() as i64;
        let mut anchor = if cells_per_row == 0 {
            0
        } else {
            i64::from(start_of_week).rem_euclid(cells_per_row as i64)
        };

        (0..cells_per_row as i64)
            .map(|column| {
                let mut index = column + anchor;
                if index >= table_len {
                    index = 0;
                    anchor = -column;
                }
                self.weekday_names[index as usize].as_str()
            })
            .collect()
    }

    /// The text for a day cell: `"March 1"` at the start of the grid and of every month,
    /// otherwise just the day number.
    pub fn day_label(&self, date: NaiveDate, is_first_cell: bool) -> String {
        if is_first_cell || date.day() == 1 {
            format!("{} {}", self.month_name(date.month()), date.day())
        } else {
            date.day().to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_starting_on_monday() {
        let locale = CalendarLocale::english();
        assert_eq!(
            locale.weekday_header_labels(1, 7),
            [
                "Monday",
                "Tuesday",
                "Wednesday",
                "Thursday",
                "Friday",
                "Saturday",
                "Sunday"
            ]
        );
    }

    #[test]
    fn header_wider_than_a_week_repeats() {
        let locale = CalendarLocale::english();
        let labels = locale.weekday_header_labels(5, 10);
        assert_eq!(
            labels,
            [
                "Friday",
                "Saturday",
                "Sunday",
                "Monday",
                "Tuesday",
                "Wednesday",
                "Thursday",
                "Friday",
                "Saturday",
                "Sunday"
            ]
        );
    }

    #[test]
    fn header_start_beyond_table_restarts_at_sunday() {
        let locale = CalendarLocale::english();
        let labels = locale.weekday_header_labels(8, 10);
        assert_eq!(labels[0], "Sunday");
        assert_eq!(labels[1], "Monday");
        assert_eq!(labels[7], "Sunday");
    }

    #[test]
    fn header_negative_start_wraps() {
        let locale = CalendarLocale::english();
        assert_eq!(locale.weekday_header_labels(-1, 7)[0], "Saturday");
        assert!(locale.weekday_header_labels(3, 0).is_empty());
    }

    #[test]
    fn day_labels() {
        let locale = CalendarLocale::english();
        let date = |y, m, d| NaiveDate::from_ymd_opt(y, m, d).unwrap();
        assert_eq!(locale.day_label(date(2024, 2, 25), true), "February 25");
        assert_eq!(locale.day_label(date(2024, 2, 26), false), "26");
        assert_eq!(locale.day_label(date(2024, 3, 1), false), "March 1");
    }

    #[test]
    fn custom_table() {
        let locale = CalendarLocale::new(
            ["So", "Mo", "Di", "Mi", "Do", "Fr", "Sa"].map(String::from),
            [
                "Januar",
                "Februar",
                "März",
                "April",
                "Mai",
                "Juni",
                "Juli",
                "August",
                "September",
                "Oktober",
                "November",
                "Dezember",
            ]
            .map(String::from),
        );
        assert_eq!(locale.weekday_header_labels(1, 3), ["Mo", "Di", "Mi"]);
        assert_eq!(locale.month_name(3), "März");
        assert_eq!(locale.month_name(13), "Januar");
    }
}
