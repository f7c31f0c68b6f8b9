// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Clock display helpers for attendance timestamps.
//!
//! These helpers are display-only and sit outside the aggregation math.
//! The report builders trust the ledger's precomputed durations; the
//! derived-duration path in [`compute_duration_hours`] exists for callers
//! that explicitly need to recompute a day's hours from its raw
//! timestamps. Callers choose one path or the other, never both silently.

use time::format_description::BorrowedFormatItem;
use time::format_description::well_known::Iso8601;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime};

/// Placeholder rendered for absent or unparsable timestamps.
const NOT_AVAILABLE: &str = "N/A";

/// Duration rendered for absent, unparsable, or inconsistent timestamps.
const ZERO_DURATION: &str = "0.00";

const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// 12-hour wall-clock rendering, e.g. `09:30 AM`.
const CLOCK_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[hour repr:12 padding:zero]:[minute] [period]");

/// Parses an ISO 8601 timestamp with or without a UTC offset.
///
/// The ledger delivers both offset-bearing and naive datetimes depending
/// on which upstream produced the record; an offset, when present, is
/// discarded and the wall-clock components kept.
fn parse_timestamp(value: &str) -> Option<PrimitiveDateTime> {
    PrimitiveDateTime::parse(value, &Iso8601::DEFAULT)
        .ok()
        .or_else(|| {
            OffsetDateTime::parse(value, &Iso8601::DEFAULT)
                .ok()
                .map(|moment| PrimitiveDateTime::new(moment.date(), moment.time()))
        })
}

/// Renders a timestamp as a 12-hour clock string, e.g. `"09:30 AM"`.
///
/// Returns the literal `"N/A"` when the timestamp is absent or
/// unparsable. Pure and display-only; never part of the aggregation math.
#[must_use]
pub fn format_clock_time(timestamp: Option<&str>) -> String {
    timestamp
        .and_then(parse_timestamp)
        .and_then(|moment| moment.format(CLOCK_FORMAT).ok())
        .unwrap_or_else(|| String::from(NOT_AVAILABLE))
}

/// Derives a day's duration from its raw check-in/check-out timestamps.
///
/// Returns the elapsed hours formatted to exactly two decimal places. If
/// either timestamp is absent or unparsable, or check-out precedes
/// check-in (a ledger inconsistency), the result is the literal `"0.00"`:
/// the lenient policy clamps rather than raises.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn compute_duration_hours(check_in: Option<&str>, check_out: Option<&str>) -> String {
    let Some(start) = check_in.and_then(parse_timestamp) else {
        return String::from(ZERO_DURATION);
    };
    let Some(end) = check_out.and_then(parse_timestamp) else {
        return String::from(ZERO_DURATION);
    };

    let elapsed_millis: i128 = (end - start).whole_milliseconds();
    if elapsed_millis < 0 {
        return String::from(ZERO_DURATION);
    }

    format!("{:.2}", elapsed_millis as f64 / MILLIS_PER_HOUR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_clock_time_morning() {
        assert_eq!(
            format_clock_time(Some("2025-05-01T09:30:00")),
            "09:30 AM"
        );
    }

    #[test]
    fn test_format_clock_time_afternoon() {
        assert_eq!(
            format_clock_time(Some("2025-05-01T17:05:00")),
            "05:05 PM"
        );
    }

    #[test]
    fn test_format_clock_time_midnight_and_noon() {
        assert_eq!(
            format_clock_time(Some("2025-05-01T00:00:00")),
            "12:00 AM"
        );
        assert_eq!(
            format_clock_time(Some("2025-05-01T12:00:00")),
            "12:00 PM"
        );
    }

    #[test]
    fn test_format_clock_time_absent() {
        assert_eq!(format_clock_time(None), "N/A");
    }

    #[test]
    fn test_format_clock_time_unparsable() {
        assert_eq!(format_clock_time(Some("not-a-timestamp")), "N/A");
        assert_eq!(format_clock_time(Some("")), "N/A");
    }

    #[test]
    fn test_format_clock_time_with_utc_offset() {
        assert_eq!(
            format_clock_time(Some("2025-05-01T09:30:00Z")),
            "09:30 AM"
        );
    }

    #[test]
    fn test_duration_full_day() {
        assert_eq!(
            compute_duration_hours(Some("2025-05-01T09:00:00"), Some("2025-05-01T17:00:00")),
            "8.00"
        );
    }

    #[test]
    fn test_duration_fractional_hours() {
        assert_eq!(
            compute_duration_hours(Some("2025-05-01T09:00:00"), Some("2025-05-01T10:15:00")),
            "1.25"
        );
    }

    #[test]
    fn test_duration_checkout_before_checkin_clamps() {
        // Check-out before check-in is a ledger inconsistency, clamped
        // rather than raised.
        assert_eq!(
            compute_duration_hours(Some("2025-05-01T10:00:00"), Some("2025-05-01T09:00:00")),
            "0.00"
        );
    }

    #[test]
    fn test_duration_missing_either_timestamp() {
        assert_eq!(
            compute_duration_hours(None, Some("2025-05-01T17:00:00")),
            "0.00"
        );
        assert_eq!(
            compute_duration_hours(Some("2025-05-01T09:00:00"), None),
            "0.00"
        );
        assert_eq!(compute_duration_hours(None, None), "0.00");
    }

    #[test]
    fn test_duration_unparsable_timestamp() {
        assert_eq!(
            compute_duration_hours(Some("yesterday"), Some("2025-05-01T17:00:00")),
            "0.00"
        );
    }

    #[test]
    fn test_duration_equal_timestamps() {
        assert_eq!(
            compute_duration_hours(Some("2025-05-01T09:00:00"), Some("2025-05-01T09:00:00")),
            "0.00"
        );
    }

    #[test]
    fn test_duration_spans_midnight() {
        assert_eq!(
            compute_duration_hours(Some("2025-05-01T22:00:00"), Some("2025-05-02T06:30:00")),
            "8.50"
        );
    }
}
