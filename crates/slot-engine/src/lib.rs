//! # slot-engine
//!
//! Deterministic availability and slot computation for an appointment-booking
//! platform.
//!
//! Given an event type's schedule rules, the site-wide settings policy, and
//! the existing bookings, the engine computes which calendar dates and
//! time-of-day slots are bookable — and, for the ones that are not, exactly
//! why. Every function is pure: `now` is an explicit parameter, inputs are
//! borrowed immutably, and identical inputs always produce identical output.
//! Persistence, transport, authentication, and email live behind the
//! [`boundary`] traits and never inside the engine.
//!
//! ## Modules
//!
//! - [`timefmt`] — `HH:MM` ↔ minutes conversions, 12-hour and long-date display
//! - [`window`] — booking-window and minimum-notice policy checks
//! - [`day`] — per-date and per-month availability evaluation
//! - [`slots`] — slot enumeration, conflict marking, selection check
//! - [`boundary`] — storage/notification/access-control seams
//! - [`types`] — the shared data model
//! - [`error`] — error types

pub mod boundary;
pub mod day;
pub mod error;
pub mod slots;
pub mod timefmt;
pub mod types;
pub mod window;

pub use day::{evaluate_day, evaluate_month};
pub use error::SlotError;
pub use slots::{check_slot_selection, generate_slots};
pub use timefmt::{format_date_display, format_time_display, parse_date, DateLocale};
pub use types::{
    Booking, BookingStatus, DayAvailability, EventType, Settings, TimeSlot, Weekday,
};
