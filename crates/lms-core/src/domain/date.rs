//! Date Helpers
//!
//! Display-only formatting for the ISO dates stored on leads and enrollments.

use chrono::{DateTime, NaiveDate};

const ISO_DATE: &str = "%Y-%m-%d";

/// True when `value` is a calendar date in `YYYY-MM-DD` form
pub fn is_iso_date(value: &str) -> bool {
    NaiveDate::parse_from_str(value, ISO_DATE).is_ok()
}

/// Format an ISO date or RFC 3339 timestamp as `DD/MM/YYYY`.
///
/// Empty or unparsable input renders as an empty string.
pub fn format_display_date(value: &str) -> String {
    let value = value.trim();
    let date = NaiveDate::parse_from_str(value, ISO_DATE)
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(value).ok().map(|dt| dt.date_naive()));
    match date {
        Some(date) => date.format("%d/%m/%Y").to_string(),
        None => String::new(),
    }
}

/// Date part of an ISO timestamp (text before `T`), if any
pub fn date_part(timestamp: &str) -> Option<&str> {
    timestamp.split('T').next().filter(|part| !part.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_iso_date() {
        assert_eq!(format_display_date("1990-01-05"), "05/01/1990");
        assert_eq!(format_display_date("2024-12-31T10:00:00Z"), "31/12/2024");
    }

    #[test]
    fn test_format_invalid_date_is_blank() {
        assert_eq!(format_display_date(""), "");
        assert_eq!(format_display_date("yesterday"), "");
    }

    #[test]
    fn test_date_part() {
        assert_eq!(date_part("2024-03-01T08:15:00.000Z"), Some("2024-03-01"));
        assert_eq!(date_part("2024-03-01"), Some("2024-03-01"));
        assert_eq!(date_part(""), None);
    }
}
