//! Timestamp helpers.
//!
//! Every instant pal persists is offset-aware. Naive local times coming from
//! user input are pinned to the local offset before they reach a store.

use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone};

use crate::error::{PalError, Result};

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Current instant with the local offset.
pub fn now() -> DateTime<FixedOffset> {
    Local::now().fixed_offset()
}

/// Attach the local offset to a naive local time.
///
/// Ambiguous times (DST fall-back) resolve to the earlier instant.
///
/// # Errors
///
/// Returns `PalError::Validation` when the local time does not exist
/// (it falls inside a DST gap).
pub fn normalize_naive(naive: NaiveDateTime) -> Result<DateTime<FixedOffset>> {
    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|dt| dt.fixed_offset())
        .ok_or_else(|| {
            PalError::Validation(format!("Local time {} does not exist", naive))
        })
}

/// Parse a user-supplied timestamp.
///
/// Accepts RFC 3339 (offset kept as given), naive date-times (normalized to
/// the local offset) and bare `YYYY-MM-DD` dates (local midnight).
pub fn parse_timestamp(value: &str) -> Result<DateTime<FixedOffset>> {
    let value = value.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Ok(parsed);
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return normalize_naive(naive);
        }
    }

    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        let naive = date
            .and_hms_opt(0, 0, 0)
            .ok_or_else(|| PalError::Validation(format!("Invalid date value: {}", value)))?;
        return normalize_naive(naive);
    }

    Err(PalError::Validation(format!(
        "Invalid date/time (expected ISO-8601 or YYYY-MM-DD): {}",
        value
    )))
}

/// Render an instant as RFC 3339 keeping its offset and sub-second digits.
pub fn format_timestamp(value: &DateTime<FixedOffset>) -> String {
    value.to_rfc3339_opts(SecondsFormat::AutoSi, false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn test_parse_rfc3339_keeps_offset_and_fraction() {
        let parsed = parse_timestamp("2024-03-01T09:30:15.123456+05:30").unwrap();
        assert_eq!(parsed.offset().local_minus_utc(), 5 * 3600 + 30 * 60);
        assert_eq!(parsed.nanosecond(), 123_456_000);
    }

    #[test]
    fn test_parse_naive_uses_local_offset() {
        let parsed = parse_timestamp("2024-03-01 09:30:15").unwrap();
        let naive = NaiveDateTime::parse_from_str("2024-03-01 09:30:15", "%Y-%m-%d %H:%M:%S")
            .unwrap();
        assert_eq!(parsed.naive_local(), naive);
        let expected = Local.from_local_datetime(&naive).earliest().unwrap();
        assert_eq!(parsed.offset().local_minus_utc(), expected.offset().local_minus_utc());
    }

    #[test]
    fn test_parse_date_is_local_midnight() {
        let parsed = parse_timestamp("2024-03-01").unwrap();
        assert_eq!(parsed.hour(), 0);
        assert_eq!(parsed.minute(), 0);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = parse_timestamp("yesterday-ish").unwrap_err();
        assert!(matches!(err, PalError::Validation(_)));
    }

    #[test]
    fn test_format_round_trips_through_rfc3339() {
        let original = parse_timestamp("2023-12-31T23:59:59.000000001-08:00").unwrap();
        let text = format_timestamp(&original);
        let back = DateTime::parse_from_rfc3339(&text).unwrap();
        assert_eq!(back, original);
        assert_eq!(back.offset(), original.offset());
        assert_eq!(back.nanosecond(), 1);
    }
}
