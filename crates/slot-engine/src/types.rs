//! Data model shared across the availability engine.
//!
//! These are the plain-data inputs the engine receives from the storage layer
//! and the transient outputs it hands back to callers. Nothing here owns
//! mutable state; every evaluation is a pure function of
//! `(EventType, Settings, bookings, now)`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Exact reason strings reported for unavailable days and slots.
///
/// These are a contract with the booking UI, not display copy — callers match
/// on them, so they never vary by locale.
pub mod reason {
    pub const PAST_DATE: &str = "Past date";
    pub const NOT_AVAILABLE_DAY: &str = "Not an available day";
    pub const OUTSIDE_BOOKING_WINDOW: &str = "Outside booking window";
    pub const TOO_SOON: &str = "Too soon to book";
    pub const SLOT_UNAVAILABLE: &str = "Time slot unavailable";
}

/// Canonical weekday enumeration used as both the internal representation and
/// the comparison key against configured available-days lists.
///
/// Serializes as the English name ("Sunday".."Saturday") regardless of any
/// caller locale. Display locale is a formatting concern, not a data concern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Weekday {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl Weekday {
    pub fn as_str(&self) -> &'static str {
        match self {
            Weekday::Sunday => "Sunday",
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
        }
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(w: chrono::Weekday) -> Self {
        match w {
            chrono::Weekday::Sun => Weekday::Sunday,
            chrono::Weekday::Mon => Weekday::Monday,
            chrono::Weekday::Tue => Weekday::Tuesday,
            chrono::Weekday::Wed => Weekday::Wednesday,
            chrono::Weekday::Thu => Weekday::Thursday,
            chrono::Weekday::Fri => Weekday::Friday,
            chrono::Weekday::Sat => Weekday::Saturday,
        }
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A bookable meeting definition.
///
/// Schedule fields are optional: a missing value falls back to the
/// corresponding [`Settings`] default (override, never merge).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EventType {
    pub id: String,
    pub name: String,
    /// Meeting length in minutes. Falls back to 30 when absent.
    pub duration_minutes: Option<i64>,
    /// Days of the week this event type can be booked on.
    pub available_days: Option<Vec<Weekday>>,
    /// Daily window start, `HH:MM` 24-hour.
    pub start_time: Option<String>,
    /// Daily window end, `HH:MM` 24-hour.
    pub end_time: Option<String>,
}

/// Site-wide scheduling policy, one per deployment.
///
/// Storage may have no settings record at all; callers map that to
/// [`Settings::default`], which carries the documented fallbacks
/// (09:00–17:00, no buffer, 24h notice, 30-day window, weekdays).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Gap in minutes enforced before and after every existing booking.
    pub buffer_time_minutes: i64,
    /// Earliest a slot may start, as hours ahead of "now". Fractional hours
    /// are honored to the millisecond.
    pub minimum_notice_hours: f64,
    /// Latest bookable date, as days ahead of "today".
    pub booking_window_days: i64,
    pub default_start_time: String,
    pub default_end_time: String,
    pub default_available_days: Vec<Weekday>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            buffer_time_minutes: 0,
            minimum_notice_hours: 24.0,
            booking_window_days: 30,
            default_start_time: "09:00".to_string(),
            default_end_time: "17:00".to_string(),
            default_available_days: vec![
                Weekday::Monday,
                Weekday::Tuesday,
                Weekday::Wednesday,
                Weekday::Thursday,
                Weekday::Friday,
            ],
        }
    }
}

/// Lifecycle status of a stored booking.
///
/// Storage serializes status either as a bare string ("confirmed") or as a
/// `{key, value}` object; both normalize here, at the deserialization
/// boundary, so the evaluator and generator only ever see the enum. Anything
/// unrecognized becomes [`BookingStatus::Unknown`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "RawStatus")]
pub enum BookingStatus {
    Confirmed,
    Completed,
    Cancelled,
    #[default]
    Unknown,
}

impl BookingStatus {
    /// Only non-cancelled bookings constrain availability.
    pub fn blocks_slots(&self) -> bool {
        !matches!(self, BookingStatus::Cancelled)
    }
}

/// Wire shapes a status field may arrive in.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawStatus {
    Plain(String),
    Keyed { value: String },
}

impl From<RawStatus> for BookingStatus {
    fn from(raw: RawStatus) -> Self {
        let label = match raw {
            RawStatus::Plain(s) => s,
            RawStatus::Keyed { value } => value,
        };
        match label.trim().to_ascii_lowercase().as_str() {
            "confirmed" => BookingStatus::Confirmed,
            "completed" => BookingStatus::Completed,
            "cancelled" | "canceled" => BookingStatus::Cancelled,
            _ => BookingStatus::Unknown,
        }
    }
}

/// An existing appointment, as handed over by storage.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    #[serde(default)]
    pub id: Option<String>,
    /// Calendar day, no time component.
    pub date: NaiveDate,
    /// Start time-of-day, `HH:MM` 24-hour.
    pub time: String,
    /// Length in minutes, inherited from the booking's event type. Falls back
    /// to 30 when the event type is unknown.
    #[serde(default)]
    pub duration_minutes: Option<i64>,
    #[serde(default)]
    pub status: BookingStatus,
}

/// Day-level availability verdict. Derived and transient — recomputed on
/// every query, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayAvailability {
    pub date: NaiveDate,
    pub available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl DayAvailability {
    pub(crate) fn available(date: NaiveDate) -> Self {
        DayAvailability {
            date,
            available: true,
            reason: None,
        }
    }

    pub(crate) fn unavailable(date: NaiveDate, reason: &str) -> Self {
        DayAvailability {
            date,
            available: false,
            reason: Some(reason.to_string()),
        }
    }
}

/// Slot-level availability verdict. Derived and transient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSlot {
    /// Slot start, `HH:MM` 24-hour.
    pub time: String,
    pub available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}
