//! Calendar fields derived from a message timestamp.
//!
//! Timestamps are wall-clock values exactly as the export recorded them; no
//! timezone conversion happens anywhere in this module.

use serde::{Serialize, Serializer};
use std::fmt::Display;
use time::{Date, PrimitiveDateTime};

/// Weekday names in display order (Monday first).
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Month names in calendar order.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Fields derived from a timestamp.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarFields {
    #[serde(serialize_with = "serialize_display")]
    pub date_only: Date,
    pub year: i32,
    /// 1-12.
    pub month_number: u8,
    pub month_name: &'static str,
    pub day_of_month: u8,
    /// 0 = Monday .. 6 = Sunday.
    #[serde(skip)]
    pub weekday_index: u8,
    pub weekday_name: &'static str,
    pub hour: u8,
    pub minute: u8,
    pub hour_bucket_label: String,
}

impl CalendarFields {
    pub fn from_timestamp(ts: PrimitiveDateTime) -> Self {
        let month_number = u8::from(ts.month());
        let weekday_index = ts.weekday().number_days_from_monday();
        Self {
            date_only: ts.date(),
            year: ts.year(),
            month_number,
            month_name: MONTH_NAMES[usize::from(month_number - 1)],
            day_of_month: ts.day(),
            weekday_index,
            weekday_name: WEEKDAY_NAMES[usize::from(weekday_index)],
            hour: ts.hour(),
            minute: ts.minute(),
            hour_bucket_label: hour_bucket_label(ts.hour()),
        }
    }
}

/// Render a 24-hour clock hour as a zero-padded 12-hour value: `0` → `"12 AM"`,
/// `9` → `"09 AM"`, `13` → `"01 PM"`.
pub fn twelve_hour_label(hour: u8) -> String {
    let hour = hour % 24;
    let meridiem = if hour < 12 { "AM" } else { "PM" };
    let clock = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{clock:02} {meridiem}")
}

/// One-hour window starting at `hour`, e.g. `23` → `"11 PM - 12 AM"`.
pub fn hour_bucket_label(hour: u8) -> String {
    format!(
        "{} - {}",
        twelve_hour_label(hour),
        twelve_hour_label((hour + 1) % 24)
    )
}

/// Labels for all 24 buckets, midnight first.
pub fn hour_bucket_labels() -> Vec<String> {
    (0..24).map(hour_bucket_label).collect()
}

/// Serialize any `Display` value as a string (dates, timestamps).
pub fn serialize_display<T: Display, S: Serializer>(
    value: &T,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

/// Serialize a timestamp as `YYYY-MM-DDTHH:MM`.
pub fn serialize_timestamp<S: Serializer>(
    ts: &PrimitiveDateTime,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(&format_args!(
        "{}T{:02}:{:02}",
        ts.date(),
        ts.hour(),
        ts.minute()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::{Month, Time};

    fn at(y: i32, m: Month, d: u8, hh: u8, mm: u8) -> PrimitiveDateTime {
        PrimitiveDateTime::new(
            Date::from_calendar_date(y, m, d).unwrap(),
            Time::from_hms(hh, mm, 0).unwrap(),
        )
    }

    #[test]
    fn twelve_hour_labels() {
        assert_eq!(twelve_hour_label(0), "12 AM");
        assert_eq!(twelve_hour_label(9), "09 AM");
        assert_eq!(twelve_hour_label(12), "12 PM");
        assert_eq!(twelve_hour_label(13), "01 PM");
        assert_eq!(twelve_hour_label(23), "11 PM");
    }

    #[test]
    fn bucket_wraps_past_midnight() {
        assert_eq!(hour_bucket_label(23), "11 PM - 12 AM");
        assert_eq!(hour_bucket_label(11), "11 AM - 12 PM");
        assert_eq!(hour_bucket_label(0), "12 AM - 01 AM");
    }

    #[test]
    fn all_bucket_labels_are_distinct() {
        let labels = hour_bucket_labels();
        assert_eq!(labels.len(), 24);
        let unique: std::collections::HashSet<_> = labels.iter().collect();
        assert_eq!(unique.len(), 24);
    }

    #[test]
    fn fields_from_timestamp() {
        // 2023-05-12 was a Friday.
        let f = CalendarFields::from_timestamp(at(2023, Month::May, 12, 21, 5));
        assert_eq!(f.date_only.to_string(), "2023-05-12");
        assert_eq!(f.year, 2023);
        assert_eq!(f.month_number, 5);
        assert_eq!(f.month_name, "May");
        assert_eq!(f.day_of_month, 12);
        assert_eq!(f.weekday_name, "Friday");
        assert_eq!(f.weekday_index, 4);
        assert_eq!(f.hour, 21);
        assert_eq!(f.minute, 5);
        assert_eq!(f.hour_bucket_label, "09 PM - 10 PM");
    }

    #[test]
    fn date_serializes_as_iso_string() {
        let f = CalendarFields::from_timestamp(at(2024, Month::January, 7, 0, 0));
        let v = serde_json::to_value(&f).unwrap();
        assert_eq!(v["date_only"], "2024-01-07");
        assert_eq!(v["weekday_name"], "Sunday");
        assert!(v.get("weekday_index").is_none());
    }
}
