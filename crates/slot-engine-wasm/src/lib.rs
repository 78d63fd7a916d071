//! WASM bindings for slot-engine.
//!
//! Exposes day availability, month availability, slot generation, and the
//! slot-selection check to JavaScript via `wasm-bindgen`, so the booking
//! page's client-side pre-check runs exactly the same rules the server
//! enforces before persisting. All complex types are passed as JSON strings.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p slot-engine-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir web/wasm/ \
//!   target/wasm32-unknown-unknown/release/slot_engine_wasm.wasm
//! ```

use chrono::{NaiveDate, NaiveDateTime};
use slot_engine::{Booking, DateLocale, EventType, Settings, SlotError};
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Helpers: parse the string inputs crossing the WASM boundary
// ---------------------------------------------------------------------------

fn js_err(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

/// Parse a `YYYY-MM-DD` date string.
fn parse_date(s: &str) -> Result<NaiveDate, JsValue> {
    slot_engine::parse_date(s).map_err(js_err)
}

/// Parse a local `now` timestamp, e.g. "2026-02-17T14:00:00" (fractional
/// seconds accepted). Local time only; the engine does no timezone math.
fn parse_now(s: &str) -> Result<NaiveDateTime, JsValue> {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .map_err(|e| JsValue::from_str(&format!("Invalid datetime '{}': {}", s, e)))
}

fn parse_event_type(json: &str) -> Result<EventType, JsValue> {
    serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid event type JSON: {}", e)))
}

/// Settings JSON; `"null"` means no settings record exists and the documented
/// defaults apply.
fn parse_settings(json: &str) -> Result<Settings, JsValue> {
    let settings: Option<Settings> = serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid settings JSON: {}", e)))?;
    Ok(settings.unwrap_or_default())
}

fn parse_bookings(json: &str) -> Result<Vec<Booking>, JsValue> {
    serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid bookings JSON: {}", e)))
}

fn to_json<T: serde::Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Evaluate whether a single date is bookable.
///
/// Returns a JSON string `{date, available, reason?}`.
///
/// # Arguments
/// - `date` -- `YYYY-MM-DD`
/// - `event_type_json` -- JSON event type object
/// - `settings_json` -- JSON settings object, or `"null"` for defaults
/// - `now` -- local datetime string (e.g., "2026-02-17T14:00:00")
#[wasm_bindgen(js_name = "evaluateDay")]
pub fn evaluate_day(
    date: &str,
    event_type_json: &str,
    settings_json: &str,
    now: &str,
) -> Result<String, JsValue> {
    let verdict = slot_engine::evaluate_day(
        parse_date(date)?,
        &parse_event_type(event_type_json)?,
        &parse_settings(settings_json)?,
        parse_now(now)?,
    );
    to_json(&verdict)
}

/// Evaluate every day of a calendar month.
///
/// Returns a JSON string containing an array of `{date, available, reason?}`
/// objects, one per day, ascending.
#[wasm_bindgen(js_name = "evaluateMonth")]
pub fn evaluate_month(
    year: i32,
    month: u32,
    event_type_json: &str,
    settings_json: &str,
    now: &str,
) -> Result<String, JsValue> {
    let days = slot_engine::evaluate_month(
        year,
        month,
        &parse_event_type(event_type_json)?,
        &parse_settings(settings_json)?,
        parse_now(now)?,
    )
    .map_err(js_err)?;
    to_json(&days)
}

/// Generate the time slots of one day against the existing bookings.
///
/// `bookings_json` must be a JSON array of booking objects (`date`, `time`,
/// optional `duration_minutes`, optional `status` as either a string or a
/// `{key, value}` object). Returns a JSON string containing an array of
/// `{time, available, reason?}` objects, ascending.
#[wasm_bindgen(js_name = "generateSlots")]
pub fn generate_slots(
    date: &str,
    event_type_json: &str,
    bookings_json: &str,
    settings_json: &str,
    now: &str,
) -> Result<String, JsValue> {
    let slots = slot_engine::generate_slots(
        parse_date(date)?,
        &parse_event_type(event_type_json)?,
        &parse_bookings(bookings_json)?,
        &parse_settings(settings_json)?,
        parse_now(now)?,
    )
    .map_err(js_err)?;
    to_json(&slots)
}

/// Check whether a requested `(date, time)` is currently bookable.
///
/// Returns `true` when the slot is on offer and available, `false` when the
/// engine rejects the selection. Malformed inputs are errors, not `false`.
#[wasm_bindgen(js_name = "checkSlotSelection")]
pub fn check_slot_selection(
    date: &str,
    time: &str,
    event_type_json: &str,
    bookings_json: &str,
    settings_json: &str,
    now: &str,
) -> Result<bool, JsValue> {
    let result = slot_engine::check_slot_selection(
        parse_date(date)?,
        time,
        &parse_event_type(event_type_json)?,
        &parse_bookings(bookings_json)?,
        &parse_settings(settings_json)?,
        parse_now(now)?,
    );
    match result {
        Ok(()) => Ok(true),
        Err(SlotError::IllegalSlotSelection { .. }) => Ok(false),
        Err(e) => Err(js_err(e)),
    }
}

/// Convert a 24-hour `HH:MM` time to its 12-hour display form.
#[wasm_bindgen(js_name = "formatTimeDisplay")]
pub fn format_time_display(time: &str) -> Result<String, JsValue> {
    slot_engine::format_time_display(time).map_err(js_err)
}

/// Render a `YYYY-MM-DD` date in long form, e.g. "Monday, January 1, 2024".
#[wasm_bindgen(js_name = "formatDateDisplay")]
pub fn format_date_display(date: &str) -> Result<String, JsValue> {
    Ok(slot_engine::format_date_display(
        parse_date(date)?,
        &DateLocale::default(),
    ))
}
