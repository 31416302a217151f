//! Date and time utility functions
//!
//! This module provides functions for due date parsing, human-readable
//! formatting (e.g., "yesterday", "today", "tomorrow") and the compact UTC
//! timestamps used in calendar links.

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveTime, Utc, Weekday};

/// Standard date format used for due dates, both on screen and in storage
pub const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Compact UTC timestamp layout used by calendar links
pub const COMPACT_UTC_FORMAT: &str = "%Y%m%dT%H%M%SZ";

/// Parse a date string in YYYY-MM-DD format to NaiveDate
///
/// # Arguments
/// * `date_str` - Date string in YYYY-MM-DD format
///
/// # Returns
/// * `Result<NaiveDate, chrono::ParseError>` - Parsed date or parse error
pub fn parse_date(date_str: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(date_str.trim(), DUE_DATE_FORMAT)
}

/// Format a NaiveDate to YYYY-MM-DD string
pub fn format_ymd(d: NaiveDate) -> String {
    d.format(DUE_DATE_FORMAT).to_string()
}

/// Render `date` with a strftime format, `None` if the format is invalid
pub fn format_with(date: NaiveDate, format: &str) -> Option<String> {
    use std::fmt::Write;

    let mut out = String::new();
    write!(out, "{}", date.format(format)).ok()?;
    Some(out)
}

/// Current local calendar day
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// The moment a date starts, read as UTC
pub fn utc_midnight(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

/// Format a date as the compact UTC timestamp of its midnight, e.g. `20250601T000000Z`
pub fn compact_utc_midnight(date: NaiveDate) -> String {
    utc_midnight(date).format(COMPACT_UTC_FORMAT).to_string()
}

/// Format a due date relative to the local current day
pub fn format_human_date(date: NaiveDate) -> String {
    format_human_date_from(date, today())
}

/// Format a due date relative to `today`
///
/// Nearby days get words ("today", "next Friday", "in 12 days"), anything
/// further out falls back to "Jan 15" or "Jan 15, 2027" across years.
pub fn format_human_date_from(date: NaiveDate, today: NaiveDate) -> String {
    let days_diff = (date - today).num_days();

    match days_diff {
        -1 => "yesterday".to_string(),
        0 => "today".to_string(),
        1 => "tomorrow".to_string(),
        diff if diff > 1 && diff <= 7 => format!("next {}", weekday_name(date.weekday())),
        diff if (-7..-1).contains(&diff) => format!("last {}", weekday_name(date.weekday())),
        diff if diff > 7 && diff <= 30 => format!("in {} days", diff),
        diff if (-30..-7).contains(&diff) => format!("{} days ago", -diff),
        _ => {
            if date.year() == today.year() {
                date.format("%b %d").to_string()
            } else {
                date.format("%b %d, %Y").to_string()
            }
        }
    }
}

/// Get a human-readable weekday name
fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Serde adapter for optional due dates.
///
/// Writes `YYYY-MM-DD`; reads `YYYY-MM-DD`, `null`, a missing field or the
/// empty string older saves used for "no due date".
pub mod optional_due_date {
    use super::{format_ymd, parse_date};
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(date) => serializer.serialize_str(&format_ymd(*date)),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw: Option<String> = Option::deserialize(deserializer)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(text) => parse_date(text).map(Some).map_err(serde::de::Error::custom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_compact_utc_midnight() {
        assert_eq!(compact_utc_midnight(date(2025, 6, 1)), "20250601T000000Z");
    }

    #[test]
    fn test_human_date_relative_words() {
        let today = date(2025, 1, 15); // Wednesday
        assert_eq!(format_human_date_from(date(2025, 1, 14), today), "yesterday");
        assert_eq!(format_human_date_from(today, today), "today");
        assert_eq!(format_human_date_from(date(2025, 1, 16), today), "tomorrow");
        assert_eq!(format_human_date_from(date(2025, 1, 17), today), "next Friday");
        assert_eq!(format_human_date_from(date(2025, 1, 10), today), "last Friday");
        assert_eq!(format_human_date_from(date(2025, 1, 27), today), "in 12 days");
        assert_eq!(format_human_date_from(date(2025, 1, 1), today), "14 days ago");
    }

    #[test]
    fn test_human_date_far_away() {
        let today = date(2025, 1, 15);
        assert_eq!(format_human_date_from(date(2025, 6, 1), today), "Jun 01");
        assert_eq!(format_human_date_from(date(2026, 6, 1), today), "Jun 01, 2026");
    }

    #[test]
    fn test_parse_date_trims_whitespace() {
        assert_eq!(parse_date(" 2025-06-01 ").unwrap(), date(2025, 6, 1));
        assert!(parse_date("06/01/2025").is_err());
    }
}
