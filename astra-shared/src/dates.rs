use chrono::{Duration, NaiveDate};

/// Formats a calendar date for display, e.g. "Monday, January 5, 2026".
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

/// Return date for a trip: departure plus the package duration.
pub fn return_date(departure: NaiveDate, duration_days: u32) -> NaiveDate {
    departure + Duration::days(duration_days as i64)
}
