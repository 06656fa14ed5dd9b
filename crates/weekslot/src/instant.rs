//! Week-anchored instants.
//!
//! Only the weekday and the time of day of an instant carry meaning. Dates are
//! pinned to a fixed anchor week (Sunday 2023-01-01 through Saturday
//! 2023-01-07), which is the week the calendar widget opens on.

use chrono::{
    DateTime, Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Weekday,
};

use crate::error::{Result, WeekSlotError};

/// First day (a Sunday) of the anchor week.
pub fn anchor_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 1, 1).expect("2023-01-01 is a valid date")
}

/// Build an instant on the anchor week from a weekday and a wall-clock time.
///
/// # Errors
/// Returns `WeekSlotError::InvalidInstant` when `hour`/`minute` are out of range.
pub fn weekly_instant(weekday: Weekday, hour: u32, minute: u32) -> Result<NaiveDateTime> {
    let time = NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(|| {
        WeekSlotError::InvalidInstant(format!("{:02}:{:02} is not a valid time", hour, minute))
    })?;
    let date = anchor_date() + Duration::days(i64::from(weekday.num_days_from_sunday()));
    Ok(date.and_time(time))
}

/// Parse an ISO 8601 instant.
///
/// Accepts RFC 3339 strings with an offset (the local wall-clock part is kept,
/// the offset is dropped) and naive datetimes such as `2023-01-02T09:30:00`.
pub fn parse_instant(s: &str) -> Result<NaiveDateTime> {
    let trimmed = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.naive_local());
    }
    if let Ok(ndt) = trimmed.parse::<NaiveDateTime>() {
        return Ok(ndt);
    }
    NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M")
        .map_err(|e| WeekSlotError::InvalidInstant(format!("'{}': {}", s, e)))
}

/// Saturday or Sunday.
pub fn is_weekend(instant: &NaiveDateTime) -> bool {
    matches!(instant.weekday(), Weekday::Sat | Weekday::Sun)
}

/// True when the instant sits exactly on midnight.
///
/// A single click on the all-day row of the week view yields such a start.
pub fn is_start_of_day(instant: &NaiveDateTime) -> bool {
    instant.num_seconds_from_midnight() == 0 && instant.nanosecond() == 0
}

/// Human-readable rendering used in prompts, e.g. `Monday, 9:30 AM`.
pub fn prompt_label(instant: &NaiveDateTime) -> String {
    instant.format("%A, %-I:%M %p").to_string()
}

/// Hour-granularity rendering used on the wire, e.g. `Mon, 09`.
///
/// Minutes are discarded, not rounded.
pub fn wire_label(instant: &NaiveDateTime) -> String {
    format!("{}, {:02}", short_weekday(instant.weekday()), instant.hour())
}

fn short_weekday(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Mon",
        Weekday::Tue => "Tue",
        Weekday::Wed => "Wed",
        Weekday::Thu => "Thu",
        Weekday::Fri => "Fri",
        Weekday::Sat => "Sat",
        Weekday::Sun => "Sun",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_week_starts_on_sunday() {
        assert_eq!(anchor_date().weekday(), Weekday::Sun);
        let mon = weekly_instant(Weekday::Mon, 9, 0).unwrap();
        assert_eq!(mon.to_string(), "2023-01-02 09:00:00");
        let sat = weekly_instant(Weekday::Sat, 0, 0).unwrap();
        assert_eq!(sat.to_string(), "2023-01-07 00:00:00");
    }

    #[test]
    fn invalid_time_rejected() {
        assert!(weekly_instant(Weekday::Mon, 24, 0).is_err());
        assert!(weekly_instant(Weekday::Mon, 9, 60).is_err());
    }

    #[test]
    fn parses_naive_and_offset_forms() {
        let expected = weekly_instant(Weekday::Tue, 14, 30).unwrap();
        assert_eq!(parse_instant("2023-01-03T14:30:00").unwrap(), expected);
        assert_eq!(parse_instant("2023-01-03T14:30").unwrap(), expected);
        assert_eq!(parse_instant("2023-01-03T14:30:00+02:00").unwrap(), expected);
        assert_eq!(parse_instant("2023-01-03T14:30:00.000").unwrap(), expected);
        assert!(parse_instant("next tuesday").is_err());
    }

    #[test]
    fn weekend_detection() {
        assert!(is_weekend(&weekly_instant(Weekday::Sat, 10, 0).unwrap()));
        assert!(is_weekend(&weekly_instant(Weekday::Sun, 10, 0).unwrap()));
        assert!(!is_weekend(&weekly_instant(Weekday::Fri, 23, 59).unwrap()));
    }

    #[test]
    fn midnight_detection() {
        assert!(is_start_of_day(&weekly_instant(Weekday::Wed, 0, 0).unwrap()));
        assert!(!is_start_of_day(&weekly_instant(Weekday::Wed, 0, 30).unwrap()));
    }

    #[test]
    fn labels() {
        let t = weekly_instant(Weekday::Mon, 9, 30).unwrap();
        assert_eq!(prompt_label(&t), "Monday, 9:30 AM");
        assert_eq!(wire_label(&t), "Mon, 09");

        let t = weekly_instant(Weekday::Thu, 17, 45).unwrap();
        assert_eq!(prompt_label(&t), "Thursday, 5:45 PM");
        assert_eq!(wire_label(&t), "Thu, 17");
    }
}
