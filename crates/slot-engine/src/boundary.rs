//! Seams to the external collaborators: storage, notification, and the
//! management-endpoint access check.
//!
//! The engine itself never performs I/O — it consumes the *results* of these
//! traits as plain data. Implementations live with the web layer and are
//! expected to normalize storage quirks (see
//! [`BookingStatus`](crate::types::BookingStatus) deserialization) before
//! data reaches the evaluators.

use chrono::NaiveDate;
use tracing::warn;

use crate::types::{Booking, BookingStatus, EventType, Settings};

/// Restriction applied when listing bookings. Empty filter means all.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BookingFilter {
    pub date: Option<NaiveDate>,
    pub event_type_id: Option<String>,
}

impl BookingFilter {
    /// Filter down to a single calendar day — the shape every slot
    /// computation uses.
    pub fn for_date(date: NaiveDate) -> Self {
        BookingFilter {
            date: Some(date),
            event_type_id: None,
        }
    }

    pub fn matches(&self, booking: &Booking) -> bool {
        if let Some(date) = self.date {
            if booking.date != date {
                return false;
            }
        }
        true
    }
}

/// The persistence collaborator. A storage failure surfaces to the user;
/// snapshot consistency and write-time uniqueness of `(event type, date,
/// time)` are this layer's responsibility, not the engine's.
pub trait BookingStore {
    type Error: std::error::Error + Send + Sync + 'static;

    fn list_bookings(&self, filter: &BookingFilter) -> Result<Vec<Booking>, Self::Error>;
    fn create_booking(&self, booking: Booking) -> Result<Booking, Self::Error>;
    fn update_booking_status(
        &self,
        id: &str,
        status: BookingStatus,
    ) -> Result<Booking, Self::Error>;
    /// `None` means no settings record exists yet; callers substitute
    /// [`Settings::default`].
    fn get_settings(&self) -> Result<Option<Settings>, Self::Error>;
    fn get_event_type(&self, slug: &str) -> Result<Option<EventType>, Self::Error>;
}

/// The email collaborator: notify attendee and host about a confirmed
/// booking.
pub trait Notifier {
    type Error: std::fmt::Display;

    fn booking_confirmed(&self, booking: &Booking) -> Result<(), Self::Error>;
}

/// Fire-and-forget notification: a delivery failure is logged and swallowed,
/// never propagated into booking success.
pub fn notify_best_effort<N: Notifier>(notifier: &N, booking: &Booking) {
    if let Err(err) = notifier.booking_confirmed(booking) {
        warn!(error = %err, booking_id = ?booking.id, "booking notification failed");
    }
}

/// Shared secret gating the bookings-management write endpoints.
///
/// Orthogonal to slot computation; kept here so every delivery surface uses
/// the same comparison.
#[derive(Clone)]
pub struct SharedSecret(String);

impl SharedSecret {
    pub fn new(secret: impl Into<String>) -> Self {
        SharedSecret(secret.into())
    }

    /// Compare without early exit on the first differing byte.
    pub fn verify(&self, presented: &str) -> bool {
        let expected = self.0.as_bytes();
        let presented = presented.as_bytes();
        if expected.len() != presented.len() {
            return false;
        }
        expected
            .iter()
            .zip(presented)
            .fold(0u8, |acc, (a, b)| acc | (a ^ b))
            == 0
    }
}

impl std::fmt::Debug for SharedSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Never print the secret itself.
        f.write_str("SharedSecret(..)")
    }
}
