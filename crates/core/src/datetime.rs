//! Date/time normalization between the offender API wire format and the
//! display formats used by the cell move screens.
//!
//! The upstream API exchanges floating local timestamps
//! (`YYYY-MM-DDTHH:mm:ss`, no offset) while the screens capture and render
//! dates as `DD/MM/YYYY` and times as `HH:mm`. All conversions live here so
//! neither format ever appears as an ad hoc literal in handler code.
//!
//! Every function is pure and total: malformed input yields `None`, never a
//! panic, because unparsable values arriving from the upstream API are an
//! expected condition the rendering layer handles (typically as a blank
//! cell).

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};

// ---------------------------------------------------------------------------
// Format constants
// ---------------------------------------------------------------------------

/// Canonical wire format exchanged with the upstream offender API.
/// Floating local time, no offset.
pub const WIRE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Default display format for dates entered or shown on screen.
pub const DISPLAY_DATE_FORMAT: &str = "%d/%m/%Y";

/// Display format for times of day (24-hour).
pub const DISPLAY_TIME_FORMAT: &str = "%H:%M";

/// Date-only form of the wire format.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Full weekday name (English, Gregorian).
const WEEKDAY_FORMAT: &str = "%A";

// ---------------------------------------------------------------------------
// Input type
// ---------------------------------------------------------------------------

/// Date and time-of-day fields as captured separately by the move form.
///
/// The form widget submits `hours` and `minutes` as strings, but older
/// callers send bare numbers; both are accepted on the wire. `date_format`
/// is a programmatic override and never crosses the wire.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateTimeInput {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub hours: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub minutes: Option<String>,
    /// Format to parse `date` with. Defaults to [`DISPLAY_DATE_FORMAT`].
    #[serde(skip)]
    pub date_format: Option<String>,
}

/// Accept either a JSON string or a bare number for a form field.
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Field {
        Text(String),
        Number(i64),
    }

    Ok(Option::<Field>::deserialize(deserializer)?.map(|field| match field {
        Field::Text(text) => text,
        Field::Number(number) => number.to_string(),
    }))
}

// ---------------------------------------------------------------------------
// Wire -> display
// ---------------------------------------------------------------------------

fn parse_wire(timestamp: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(timestamp, WIRE_FORMAT).ok()
}

/// Full weekday name (e.g. `Monday`) for a wire timestamp.
pub fn weekday_name(timestamp: &str) -> Option<String> {
    parse_wire(timestamp).map(|dt| dt.format(WEEKDAY_FORMAT).to_string())
}

/// `DD/MM/YYYY` rendering of a wire timestamp.
pub fn day_month_year(timestamp: &str) -> Option<String> {
    parse_wire(timestamp).map(|dt| dt.format(DISPLAY_DATE_FORMAT).to_string())
}

/// `HH:mm` (24-hour) rendering of a wire timestamp.
pub fn time_of_day(timestamp: &str) -> Option<String> {
    parse_wire(timestamp).map(|dt| dt.format(DISPLAY_TIME_FORMAT).to_string())
}

/// `YYYY-MM-DD` rendering of a wire timestamp.
pub fn iso_date(timestamp: &str) -> Option<String> {
    parse_wire(timestamp).map(|dt| dt.format(ISO_DATE_FORMAT).to_string())
}

// ---------------------------------------------------------------------------
// Display -> wire
// ---------------------------------------------------------------------------

/// Assemble a timestamp from separately-entered date and time-of-day fields.
///
/// Seconds are fixed at `:00`. Returns `None` when the date is missing or
/// unparsable, or when hours/minutes do not parse as in-range integers.
/// `None` is a validation signal for the caller to branch on, not a fault.
pub fn compose_timestamp(input: &DateTimeInput) -> Option<NaiveDateTime> {
    let date = input.date.as_deref().filter(|d| !d.is_empty())?;
    let hours: u32 = input.hours.as_deref()?.trim().parse().ok()?;
    let minutes: u32 = input.minutes.as_deref()?.trim().parse().ok()?;

    let format = input.date_format.as_deref().unwrap_or(DISPLAY_DATE_FORMAT);
    NaiveDate::parse_from_str(date, format)
        .ok()?
        .and_hms_opt(hours, minutes, 0)
}

/// Canonical wire form of a constructed date/time value.
///
/// The inverse direction, used before submitting a value to the upstream
/// API. Compose with [`compose_timestamp`] via `Option::map`; a value that
/// failed composition never reaches this function.
pub fn for_wire(value: &NaiveDateTime) -> String {
    value.format(WIRE_FORMAT).to_string()
}

/// Wire timestamp for the very start of `date` (`00:00:00`).
///
/// Used to build the lower bound of a history search window.
pub fn start_of_day_iso(date: &str, original_format: &str) -> Option<String> {
    let date = NaiveDate::parse_from_str(date, original_format).ok()?;
    date.and_hms_opt(0, 0, 0).map(|dt| for_wire(&dt))
}

/// Wire timestamp for the very end of `date` (`23:59:59`).
pub fn end_of_day_iso(date: &str, original_format: &str) -> Option<String> {
    let date = NaiveDate::parse_from_str(date, original_format).ok()?;
    date.and_hms_opt(23, 59, 59).map(|dt| for_wire(&dt))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn input(date: &str, hours: &str, minutes: &str) -> DateTimeInput {
        DateTimeInput {
            date: Some(date.to_string()),
            hours: Some(hours.to_string()),
            minutes: Some(minutes.to_string()),
            date_format: None,
        }
    }

    // -----------------------------------------------------------------------
    // Wire -> display
    // -----------------------------------------------------------------------

    #[test]
    fn weekday_name_of_wire_timestamp() {
        // 17 August 2020 was a Monday.
        assert_eq!(
            weekday_name("2020-08-17T10:30:00"),
            Some("Monday".to_string())
        );
    }

    #[test]
    fn day_month_year_of_wire_timestamp() {
        assert_eq!(
            day_month_year("2020-08-17T10:30:00"),
            Some("17/08/2020".to_string())
        );
    }

    #[test]
    fn time_of_day_of_wire_timestamp() {
        assert_eq!(time_of_day("2020-08-17T10:30:00"), Some("10:30".to_string()));
    }

    #[test]
    fn iso_date_of_wire_timestamp() {
        assert_eq!(
            iso_date("2020-08-17T10:30:00"),
            Some("2020-08-17".to_string())
        );
    }

    #[test]
    fn malformed_wire_timestamp_yields_none() {
        // Upstream occasionally emits values we cannot parse; they must
        // surface as absent, never as a panic.
        for bad in ["", "not a date", "17/08/2020", "2020-08-17 10:30:00"] {
            assert_eq!(weekday_name(bad), None, "weekday_name({bad:?})");
            assert_eq!(day_month_year(bad), None, "day_month_year({bad:?})");
            assert_eq!(time_of_day(bad), None, "time_of_day({bad:?})");
            assert_eq!(iso_date(bad), None, "iso_date({bad:?})");
        }
    }

    #[test]
    fn display_functions_are_deterministic() {
        let ts = "2020-08-17T10:30:00";
        assert_eq!(weekday_name(ts), weekday_name(ts));
        assert_eq!(day_month_year(ts), day_month_year(ts));
        assert_eq!(time_of_day(ts), time_of_day(ts));
    }

    // -----------------------------------------------------------------------
    // Composition
    // -----------------------------------------------------------------------

    #[test]
    fn compose_builds_timestamp_with_zero_seconds() {
        let composed = compose_timestamp(&input("17/08/2020", "10", "30"));
        assert_eq!(
            composed.as_ref().map(for_wire),
            Some("2020-08-17T10:30:00".to_string())
        );
    }

    #[test]
    fn compose_respects_caller_supplied_format() {
        let composed = compose_timestamp(&DateTimeInput {
            date: Some("2020-08-17".to_string()),
            hours: Some("9".to_string()),
            minutes: Some("5".to_string()),
            date_format: Some(ISO_DATE_FORMAT.to_string()),
        });
        assert_eq!(
            composed.as_ref().map(for_wire),
            Some("2020-08-17T09:05:00".to_string())
        );
    }

    #[test]
    fn compose_rejects_missing_or_empty_date() {
        assert!(compose_timestamp(&DateTimeInput {
            date: None,
            hours: Some("10".to_string()),
            minutes: Some("30".to_string()),
            date_format: None,
        })
        .is_none());
        assert!(compose_timestamp(&input("", "10", "30")).is_none());
    }

    #[test]
    fn compose_rejects_non_numeric_hours() {
        assert!(compose_timestamp(&input("17/08/2020", "abc", "30")).is_none());
        assert!(compose_timestamp(&input("17/08/2020", "10", "abc")).is_none());
    }

    #[test]
    fn compose_rejects_out_of_range_time() {
        assert!(compose_timestamp(&input("17/08/2020", "24", "00")).is_none());
        assert!(compose_timestamp(&input("17/08/2020", "10", "60")).is_none());
    }

    #[test]
    fn compose_rejects_unparsable_date() {
        assert!(compose_timestamp(&input("32/13/2020", "10", "30")).is_none());
    }

    #[test]
    fn round_trip_preserves_date_and_time() {
        let wire = compose_timestamp(&input("17/08/2020", "10", "30"))
            .as_ref()
            .map(for_wire)
            .unwrap();
        assert_eq!(day_month_year(&wire), Some("17/08/2020".to_string()));
        assert_eq!(time_of_day(&wire), Some("10:30".to_string()));
    }

    #[test]
    fn input_accepts_string_or_numeric_fields() {
        let from_strings: DateTimeInput =
            serde_json::from_value(serde_json::json!({
                "date": "17/08/2020",
                "hours": "10",
                "minutes": "30",
            }))
            .unwrap();
        let from_numbers: DateTimeInput =
            serde_json::from_value(serde_json::json!({
                "date": "17/08/2020",
                "hours": 10,
                "minutes": 30,
            }))
            .unwrap();

        assert_eq!(from_strings.hours.as_deref(), Some("10"));
        assert_eq!(from_numbers.hours.as_deref(), Some("10"));
        assert_eq!(
            compose_timestamp(&from_strings),
            compose_timestamp(&from_numbers)
        );
    }

    // -----------------------------------------------------------------------
    // Day boundaries
    // -----------------------------------------------------------------------

    #[test]
    fn start_of_day_clamps_to_midnight() {
        assert_eq!(
            start_of_day_iso("17/08/2020", DISPLAY_DATE_FORMAT),
            Some("2020-08-17T00:00:00".to_string())
        );
    }

    #[test]
    fn end_of_day_clamps_to_last_second() {
        assert_eq!(
            end_of_day_iso("17/08/2020", DISPLAY_DATE_FORMAT),
            Some("2020-08-17T23:59:59".to_string())
        );
    }

    #[test]
    fn day_boundaries_reject_unparsable_dates() {
        assert_eq!(start_of_day_iso("not a date", DISPLAY_DATE_FORMAT), None);
        assert_eq!(end_of_day_iso("17-08-2020", DISPLAY_DATE_FORMAT), None);
    }
}
