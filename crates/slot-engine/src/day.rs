//! Day-level availability: is this calendar date bookable at all, and if
//! not, why.

use chrono::{Datelike, NaiveDate, NaiveDateTime};

use crate::error::{Result, SlotError};
use crate::types::{reason, DayAvailability, EventType, Settings, Weekday};
use crate::window::within_booking_window;

/// Decide whether a single date is bookable for an event type.
///
/// Rules run in a fixed priority order so the reported reason is
/// deterministic; the first failing rule wins:
///
/// 1. Dates before today → `"Past date"` (date-only comparison).
/// 2. Weekday not in the effective available-days set →
///    `"Not an available day"`. The event type's own list overrides the
///    settings default entirely; the two are never merged.
/// 3. Beyond the booking window → `"Outside booking window"`.
///
/// Otherwise the date is available with no reason.
pub fn evaluate_day(
    date: NaiveDate,
    event_type: &EventType,
    settings: &Settings,
    now: NaiveDateTime,
) -> DayAvailability {
    if date < now.date() {
        return DayAvailability::unavailable(date, reason::PAST_DATE);
    }

    let weekday = Weekday::from(date.weekday());
    let effective_days: &[Weekday] = event_type
        .available_days
        .as_deref()
        .unwrap_or(&settings.default_available_days);
    if !effective_days.contains(&weekday) {
        return DayAvailability::unavailable(date, reason::NOT_AVAILABLE_DAY);
    }

    if !within_booking_window(date, settings, now) {
        return DayAvailability::unavailable(date, reason::OUTSIDE_BOOKING_WINDOW);
    }

    DayAvailability::available(date)
}

/// Evaluate every day of a calendar month, ascending.
///
/// Feeds the booking page's month view: one [`DayAvailability`] per day from
/// the 1st through the last day of the month.
///
/// # Errors
/// Returns [`SlotError::InvalidMonth`] when `month` is not 1–12 or the year
/// is outside chrono's representable range.
pub fn evaluate_month(
    year: i32,
    month: u32,
    event_type: &EventType,
    settings: &Settings,
    now: NaiveDateTime,
) -> Result<Vec<DayAvailability>> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or(SlotError::InvalidMonth { year, month })?;

    let mut days = Vec::with_capacity(31);
    let mut current = first;
    while current.month() == month {
        days.push(evaluate_day(current, event_type, settings, now));
        current = match current.succ_opt() {
            Some(next) => next,
            None => break,
        };
    }

    Ok(days)
}
