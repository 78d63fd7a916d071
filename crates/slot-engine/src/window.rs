//! Booking window policy: how far ahead a booking may be made, and how much
//! lead time it needs.
//!
//! Both checks take `now` as an explicit input. No hidden clock anywhere in
//! the engine — the same inputs always produce the same answer.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::types::Settings;

const MILLIS_PER_HOUR: f64 = 3_600_000.0;

/// True iff `date` is no later than `today + booking_window_days`.
///
/// "Today" is the date component of `now`; the comparison ignores
/// time-of-day entirely.
pub fn within_booking_window(date: NaiveDate, settings: &Settings, now: NaiveDateTime) -> bool {
    let latest = now.date() + Duration::days(settings.booking_window_days);
    date <= latest
}

/// True iff a slot starting at `time_minutes` on `date` is at least
/// `minimum_notice_hours` ahead of `now`.
///
/// The comparison is an exact millisecond difference, not calendar
/// arithmetic, so fractional notice hours work and the boundary is sharp: a
/// slot exactly at the notice horizon is allowed, one millisecond earlier is
/// not.
pub fn within_minimum_notice(
    date: NaiveDate,
    time_minutes: i64,
    settings: &Settings,
    now: NaiveDateTime,
) -> bool {
    let slot_start = date.and_time(NaiveTime::MIN) + Duration::minutes(time_minutes);
    let lead_ms = (slot_start - now).num_milliseconds();
    let required_ms = (settings.minimum_notice_hours * MILLIS_PER_HOUR) as i64;
    lead_ms >= required_ms
}
