use chrono::NaiveDate;

/// ISO-8601 calendar date, `YYYY-MM-DD`.
pub fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parses a date written with `format` (e.g. `%d-%m-%Y`).
pub fn parse_date(value: &str, format: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(value.trim(), format)
}
