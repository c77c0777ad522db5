use chrono::NaiveDate;

/// `July 4, 2025` style, English month names.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}
