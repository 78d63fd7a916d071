//! Slot-level availability: enumerate the candidate start times of a single
//! day and mark each one bookable or not.

use chrono::{NaiveDate, NaiveDateTime};

use crate::day::evaluate_day;
use crate::error::{Result, SlotError};
use crate::timefmt::{minutes_to_time, time_to_minutes};
use crate::types::{reason, Booking, EventType, Settings, TimeSlot};
use crate::window::within_minimum_notice;

/// Fixed slot granularity. Candidates step by 30 minutes regardless of the
/// event type's duration; durations other than 30 produce overlapping-span
/// slots, which is the intended behavior on both the month and day views.
pub const SLOT_INTERVAL_MINUTES: i64 = 30;

/// Assumed length of a booking whose own event type (and therefore duration)
/// is unknown.
pub const FALLBACK_DURATION_MINUTES: i64 = 30;

/// Enumerate the time slots of one day, each marked available or not.
///
/// Contract: this function applies only time-of-day rules (minimum notice,
/// conflicts against existing bookings). Day-level rules — past date,
/// weekday, booking window — are [`evaluate_day`]'s job, and callers are
/// expected to have passed them first; [`check_slot_selection`] composes
/// both checks for confirmation paths.
///
/// The resolved daily window comes from the event type with settings-level
/// fallbacks (ultimately 09:00–17:00), so a missing schedule never fails —
/// the booking page stays renderable. Candidates run from the window start
/// inclusive to the window end exclusive in [`SLOT_INTERVAL_MINUTES`] steps,
/// dropping any candidate whose full duration would run past closing.
///
/// Slot verdicts, in priority order:
/// - `"Too soon to book"` when the slot starts inside the minimum-notice
///   horizon;
/// - `"Time slot unavailable"` when the slot's interval overlaps any
///   same-date, non-cancelled booking's buffered interval
///   `[start − buffer, start + duration + buffer)` under
///   inclusive-start/exclusive-end semantics. Touching a buffered edge is
///   not a conflict. The reason never says which booking conflicted.
///
/// Output is ascending, at most `(end − start) / 30` slots, and fully
/// recomputed on every call.
///
/// # Errors
/// Returns [`SlotError::InvalidTimeFormat`] if the resolved window times or
/// a relevant booking's time are malformed.
pub fn generate_slots(
    date: NaiveDate,
    event_type: &EventType,
    bookings: &[Booking],
    settings: &Settings,
    now: NaiveDateTime,
) -> Result<Vec<TimeSlot>> {
    let start = time_to_minutes(
        event_type
            .start_time
            .as_deref()
            .unwrap_or(&settings.default_start_time),
    )?;
    let end = time_to_minutes(
        event_type
            .end_time
            .as_deref()
            .unwrap_or(&settings.default_end_time),
    )?;
    let duration = event_type
        .duration_minutes
        .unwrap_or(FALLBACK_DURATION_MINUTES);
    let buffer = settings.buffer_time_minutes;

    // Buffered occupied intervals of the bookings that can block this date.
    // Cancelled bookings never block. Bookings on other dates are not even
    // parsed.
    let mut occupied: Vec<(i64, i64)> = Vec::new();
    for booking in bookings {
        if booking.date != date || !booking.status.blocks_slots() {
            continue;
        }
        let booked_start = time_to_minutes(&booking.time)?;
        let booked_duration = booking
            .duration_minutes
            .unwrap_or(FALLBACK_DURATION_MINUTES);
        occupied.push((
            booked_start - buffer,
            booked_start + booked_duration + buffer,
        ));
    }

    let mut slots = Vec::new();
    let mut candidate = start;
    while candidate < end {
        if candidate + duration > end {
            // Slot would run past closing time.
            candidate += SLOT_INTERVAL_MINUTES;
            continue;
        }

        let mut available = true;
        let mut slot_reason = None;

        if !within_minimum_notice(date, candidate, settings, now) {
            available = false;
            slot_reason = Some(reason::TOO_SOON.to_string());
        } else {
            let candidate_end = candidate + duration;
            for &(busy_start, busy_end) in &occupied {
                // Half-open overlap; first conflict wins.
                if candidate < busy_end && busy_start < candidate_end {
                    available = false;
                    slot_reason = Some(reason::SLOT_UNAVAILABLE.to_string());
                    break;
                }
            }
        }

        slots.push(TimeSlot {
            time: minutes_to_time(candidate),
            available,
            reason: slot_reason,
        });
        candidate += SLOT_INTERVAL_MINUTES;
    }

    Ok(slots)
}

/// Authoritative confirmation gate: is the requested `(date, time)` present
/// and available in the currently computed slot sequence?
///
/// Recomputes [`evaluate_day`] and [`generate_slots`] from scratch. "No
/// availability" is never an error for the evaluators themselves; it only
/// becomes one here, when a caller tries to confirm a slot that is not on
/// offer. The booking page runs the same check client-side for UX; this one
/// runs server-side before anything is persisted.
///
/// # Errors
/// Returns [`SlotError::IllegalSlotSelection`] when the requested slot is
/// not available, or [`SlotError::InvalidTimeFormat`] when the requested
/// time itself is malformed.
pub fn check_slot_selection(
    date: NaiveDate,
    time: &str,
    event_type: &EventType,
    bookings: &[Booking],
    settings: &Settings,
    now: NaiveDateTime,
) -> Result<()> {
    // Normalizing through the minute representation makes "9:30" and "09:30"
    // compare equal.
    let requested = minutes_to_time(time_to_minutes(time)?);

    if evaluate_day(date, event_type, settings, now).available {
        let slots = generate_slots(date, event_type, bookings, settings, now)?;
        if slots.iter().any(|s| s.available && s.time == requested) {
            return Ok(());
        }
    }

    Err(SlotError::IllegalSlotSelection {
        date,
        time: requested,
    })
}
