//! Date and time formatting
//!
//! Short calendar strings the way the rest of the business paperwork
//! writes them: abbreviated month, no leading zero on the day, 24-hour
//! clock. Formatters take chrono values; the parsing helpers convert
//! ISO-8601 strings once at the boundary.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

/// Format a calendar date, e.g. "Jan 12, 2025".
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Format a date with time of day, e.g. "Jan 12, 2025, 14:30".
pub fn format_date_time(date_time: NaiveDateTime) -> String {
    date_time.format("%b %-d, %Y, %H:%M").to_string()
}

/// Format the time of day on a 24-hour clock, e.g. "14:30".
pub fn format_time(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

/// Parse an ISO-8601 date or datetime string into a calendar date.
///
/// Returns `None` when the input is not a recognizable date.
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    let trimmed = input.trim();
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Some(date);
    }
    parse_date_time(trimmed).map(|dt| dt.date())
}

/// Parse an ISO-8601 datetime string, keeping the wall-clock reading.
///
/// Offsets are accepted but not applied: a document stamped 14:30 is
/// shown as 14:30 regardless of where the server runs.
pub fn parse_date_time(input: &str) -> Option<NaiveDateTime> {
    let trimmed = input.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.naive_local());
    }
    NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(date(2025, 1, 12)), "Jan 12, 2025");
        assert_eq!(format_date(date(2024, 12, 3)), "Dec 3, 2024");
    }

    #[test]
    fn test_format_date_time() {
        let dt = date(2025, 1, 12).and_hms_opt(14, 30, 0).unwrap();
        assert_eq!(format_date_time(dt), "Jan 12, 2025, 14:30");
    }

    #[test]
    fn test_format_time_is_24_hour() {
        let afternoon = NaiveTime::from_hms_opt(14, 30, 0).unwrap();
        let morning = NaiveTime::from_hms_opt(8, 5, 0).unwrap();
        assert_eq!(format_time(afternoon), "14:30");
        assert_eq!(format_time(morning), "08:05");
    }

    #[test]
    fn test_parse_date_plain() {
        assert_eq!(parse_date("2025-01-12"), Some(date(2025, 1, 12)));
        assert_eq!(parse_date("  2025-01-12  "), Some(date(2025, 1, 12)));
    }

    #[test]
    fn test_parse_date_from_datetime() {
        assert_eq!(parse_date("2025-01-12T10:30:00Z"), Some(date(2025, 1, 12)));
        assert_eq!(parse_date("2025-01-12T23:59:00+02:00"), Some(date(2025, 1, 12)));
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        assert_eq!(parse_date("not a date"), None);
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("2025-13-01"), None);
    }

    #[test]
    fn test_parse_date_time_keeps_wall_clock() {
        let dt = parse_date_time("2025-01-12T14:30:00+02:00").unwrap();
        assert_eq!(format_date_time(dt), "Jan 12, 2025, 14:30");
    }

    #[test]
    fn test_parse_date_time_without_offset() {
        let dt = parse_date_time("2025-01-12 14:30:00").unwrap();
        assert_eq!(dt.date(), date(2025, 1, 12));
    }

    #[test]
    fn test_round_trip_through_formatter() {
        let parsed = parse_date("2025-01-12").unwrap();
        assert_eq!(format_date(parsed), "Jan 12, 2025");
    }
}
