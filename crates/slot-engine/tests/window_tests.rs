//! Tests for the booking window and minimum-notice policy checks.

use chrono::{NaiveDate, NaiveDateTime};
use slot_engine::window::{within_booking_window, within_minimum_notice};
use slot_engine::Settings;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    date(y, m, d).and_hms_opt(h, min, 0).unwrap()
}

fn settings(notice_hours: f64, window_days: i64) -> Settings {
    Settings {
        minimum_notice_hours: notice_hours,
        booking_window_days: window_days,
        ..Settings::default()
    }
}

// ── Booking window ──────────────────────────────────────────────────────────

#[test]
fn window_boundary_is_inclusive() {
    let s = settings(0.0, 30);
    let now = at(2024, 1, 10, 15, 0);

    // today + 30 days = 2024-02-09
    assert!(within_booking_window(date(2024, 2, 9), &s, now));
    assert!(!within_booking_window(date(2024, 2, 10), &s, now));
}

#[test]
fn window_ignores_time_of_day() {
    let s = settings(0.0, 1);

    // Late in the evening, tomorrow is still within a 1-day window.
    let now = at(2024, 1, 10, 23, 59);
    assert!(within_booking_window(date(2024, 1, 11), &s, now));
    assert!(!within_booking_window(date(2024, 1, 12), &s, now));
}

#[test]
fn today_and_past_are_within_window() {
    // The window only bounds the future; past-date rejection is the day
    // evaluator's first rule, not the window's.
    let s = settings(0.0, 30);
    let now = at(2024, 1, 10, 9, 0);
    assert!(within_booking_window(date(2024, 1, 10), &s, now));
    assert!(within_booking_window(date(2023, 12, 1), &s, now));
}

// ── Minimum notice ──────────────────────────────────────────────────────────

#[test]
fn notice_boundary_is_exact() {
    let s = settings(24.0, 365);

    // Slot at 2024-01-02 10:00, exactly 24h after now — allowed.
    let now = at(2024, 1, 1, 10, 0);
    assert!(within_minimum_notice(date(2024, 1, 2), 600, &s, now));

    // One millisecond later and the same slot is too soon.
    let now_plus_ms = date(2024, 1, 1).and_hms_milli_opt(10, 0, 0, 1).unwrap();
    assert!(!within_minimum_notice(date(2024, 1, 2), 600, &s, now_plus_ms));
}

#[test]
fn fractional_notice_hours() {
    let s = settings(0.5, 365);
    let now = at(2024, 6, 3, 8, 0);

    // 08:30 is exactly 30 minutes out.
    assert!(within_minimum_notice(date(2024, 6, 3), 510, &s, now));
    // 08:29 is not.
    assert!(!within_minimum_notice(date(2024, 6, 3), 509, &s, now));
}

#[test]
fn zero_notice_allows_the_present_but_not_the_past() {
    let s = settings(0.0, 365);
    let now = at(2024, 6, 3, 9, 0);

    assert!(within_minimum_notice(date(2024, 6, 3), 540, &s, now));
    assert!(!within_minimum_notice(date(2024, 6, 3), 539, &s, now));
}
