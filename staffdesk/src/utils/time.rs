//! Date helpers
//!
//! Dates travel as `YYYY-MM-DD` text in inputs and in the persisted blob.

use chrono::NaiveDate;
use shared::error::{AppError, AppResult, ErrorCode};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a date string (YYYY-MM-DD)
pub fn parse_date(date: &str) -> AppResult<NaiveDate> {
    let date = date.trim();
    NaiveDate::parse_from_str(date, DATE_FORMAT).map_err(|_| {
        AppError::with_message(
            ErrorCode::InvalidFormat,
            format!("Invalid date format: {date}"),
        )
        .with_detail("expected", "YYYY-MM-DD")
    })
}

/// Format a date the way list filters and the view see it
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date() {
        let d = parse_date(" 2024-03-01 ").unwrap();
        assert_eq!(format_date(d), "2024-03-01");
        assert_eq!(parse_date("03/01/2024").unwrap_err().code, ErrorCode::InvalidFormat);
        assert!(parse_date("2024-02-30").is_err());
        assert!(parse_date("").is_err());
    }
}
