//! Time-of-day and date conversions shared by the whole engine.
//!
//! Times travel as `HH:MM` 24-hour strings at the boundary and as integer
//! minutes since midnight internally (0–1439, no day rollover). Parsing is
//! strict: malformed input is an error, never coerced.

use chrono::{Datelike, NaiveDate};

use crate::error::{Result, SlotError};

/// Minutes in a day; time-of-day values live in `0..MINUTES_PER_DAY`.
pub const MINUTES_PER_DAY: i64 = 1440;

/// Parse a `HH:MM` 24-hour string into minutes since midnight.
///
/// Requires exactly two colon-separated integers with hours in 0–23 and
/// minutes in 0–59.
///
/// # Errors
/// Returns [`SlotError::InvalidTimeFormat`] for anything else.
pub fn time_to_minutes(s: &str) -> Result<i64> {
    let invalid = || SlotError::InvalidTimeFormat(s.to_string());

    let mut parts = s.split(':');
    let (hours, minutes) = match (parts.next(), parts.next(), parts.next()) {
        (Some(h), Some(m), None) => (h, m),
        _ => return Err(invalid()),
    };

    let hours: i64 = hours.parse().map_err(|_| invalid())?;
    let minutes: i64 = minutes.parse().map_err(|_| invalid())?;
    if !(0..24).contains(&hours) || !(0..60).contains(&minutes) {
        return Err(invalid());
    }

    Ok(hours * 60 + minutes)
}

/// Render minutes since midnight as a zero-padded `HH:MM` string.
///
/// Contract: input outside `0..1440` is a caller bug; this implementation
/// clamps to the valid range rather than rolling over into the next day.
pub fn minutes_to_time(minutes: i64) -> String {
    let m = minutes.clamp(0, MINUTES_PER_DAY - 1);
    format!("{:02}:{:02}", m / 60, m % 60)
}

/// Convert a 24-hour `HH:MM` string to 12-hour `h:MM AM/PM` display form.
///
/// `00:00` → `12:00 AM`, `12:00` → `12:00 PM`, `13:05` → `1:05 PM`.
///
/// # Errors
/// Returns [`SlotError::InvalidTimeFormat`] if the input does not parse.
pub fn format_time_display(s: &str) -> Result<String> {
    let total = time_to_minutes(s)?;
    let hours = total / 60;
    let minutes = total % 60;

    let period = if hours < 12 { "AM" } else { "PM" };
    let display_hours = match hours % 12 {
        0 => 12,
        h => h,
    };

    Ok(format!("{}:{:02} {}", display_hours, minutes, period))
}

/// Weekday and month name tables used for long-form date display.
///
/// Locale is configuration, not a global: callers pass the table they want.
/// The default is English.
#[derive(Debug, Clone)]
pub struct DateLocale {
    /// Sunday-first weekday names.
    pub weekdays: [&'static str; 7],
    pub months: [&'static str; 12],
}

impl Default for DateLocale {
    fn default() -> Self {
        DateLocale {
            weekdays: [
                "Sunday",
                "Monday",
                "Tuesday",
                "Wednesday",
                "Thursday",
                "Friday",
                "Saturday",
            ],
            months: [
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
            ],
        }
    }
}

/// Render a date in long form, e.g. `Monday, January 1, 2024`.
pub fn format_date_display(date: NaiveDate, locale: &DateLocale) -> String {
    let weekday = locale.weekdays[date.weekday().num_days_from_sunday() as usize];
    let month = locale.months[date.month0() as usize];
    format!("{}, {} {}, {}", weekday, month, date.day(), date.year())
}

/// Parse an ISO `YYYY-MM-DD` string arriving from storage or a client.
///
/// # Errors
/// Returns [`SlotError::InvalidDateFormat`] if the input does not parse.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| SlotError::InvalidDateFormat(s.to_string()))
}
