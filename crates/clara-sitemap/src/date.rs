use chrono::{Local, NaiveDate};

/// Returns the current calendar date in the local timezone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Formats a date the way `<lastmod>` expects it (`YYYY-MM-DD`).
pub fn format_lastmod(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}
