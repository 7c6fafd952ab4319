//! Date parsing and pt-BR rendering.
//!
//! Requests carry ISO 8601 dates (`2025-02-16` or a full RFC 3339 date-time);
//! responses render calendar dates as `16/02/2025`.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::Serializer;

use crate::error::{AppError, AppResult};

pub const BR_DATE_FORMAT: &str = "%d/%m/%Y";

/// Parses an ISO 8601 date, keeping only the calendar date of a date-time.
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(value).ok().map(|dt| dt.date_naive()))
}

/// [`parse_iso_date`] for a named request field.
pub fn require_iso_date(field: &str, value: &str) -> AppResult<NaiveDate> {
    parse_iso_date(value).ok_or_else(|| {
        AppError::validation(field, format!("{field} must be a valid ISO 8601 date string"))
    })
}

/// Optional variant of [`require_iso_date`].
pub fn optional_iso_date(field: &str, value: Option<&str>) -> AppResult<Option<NaiveDate>> {
    value.map(|value| require_iso_date(field, value)).transpose()
}

pub fn format_br_date(date: &NaiveDate) -> String {
    date.format(BR_DATE_FORMAT).to_string()
}

/// UTC audit timestamp, millisecond precision.
pub fn format_timestamp(timestamp: &NaiveDateTime) -> String {
    timestamp.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()
}

/// `serialize_with` target for `NaiveDate` fields.
pub fn serialize_br_date<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_br_date(date))
}

/// `serialize_with` target for `Option<NaiveDate>` fields.
pub fn serialize_br_date_opt<S>(date: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match date {
        Some(date) => serializer.serialize_str(&format_br_date(date)),
        None => serializer.serialize_none(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_date() {
        assert_eq!(
            parse_iso_date("2025-02-16"),
            NaiveDate::from_ymd_opt(2025, 2, 16)
        );
    }

    #[test]
    fn test_parse_datetime_keeps_calendar_date() {
        assert_eq!(
            parse_iso_date("2025-02-16T23:30:00-03:00"),
            NaiveDate::from_ymd_opt(2025, 2, 16)
        );
        assert_eq!(
            parse_iso_date("2025-02-16T10:00:00Z"),
            NaiveDate::from_ymd_opt(2025, 2, 16)
        );
    }

    #[test]
    fn test_parse_rejects_other_formats() {
        assert_eq!(parse_iso_date("16/02/2025"), None);
        assert_eq!(parse_iso_date("2025-02-30"), None);
        assert_eq!(parse_iso_date(""), None);
    }

    #[test]
    fn test_require_iso_date_message() {
        match require_iso_date("data", "ontem") {
            Err(AppError::Validation { field, reason }) => {
                assert_eq!(field, "data");
                assert_eq!(reason, "data must be a valid ISO 8601 date string");
            }
            other => panic!("Expected Validation error, got: {:?}", other),
        }
    }

    #[test]
    fn test_format_timestamp() {
        let ts = NaiveDate::from_ymd_opt(2025, 2, 16)
            .unwrap()
            .and_hms_milli_opt(9, 5, 7, 42)
            .unwrap();
        assert_eq!(format_timestamp(&ts), "2025-02-16T09:05:07.042Z");
    }

    #[test]
    fn test_format_br_date() {
        let date = NaiveDate::from_ymd_opt(2025, 2, 6).unwrap();
        assert_eq!(format_br_date(&date), "06/02/2025");
    }
}
