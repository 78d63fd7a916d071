//! Integration tests for the `bookslot` CLI binary.
//!
//! These use `assert_cmd` and `predicates` to exercise the day, month,
//! slots, and check subcommands through the actual binary, pinning the clock
//! with `--now` so every run is deterministic.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper: path to a fixture file.
fn fixture(name: &str) -> String {
    format!("{}/tests/fixtures/{}", env!("CARGO_MANIFEST_DIR"), name)
}

fn bookslot() -> Command {
    Command::cargo_bin("bookslot").unwrap()
}

// 2026-03-16 is a Monday; the fixture event type runs 09:00–10:30 with
// 30-minute meetings, and the fixture settings use a 15-minute buffer with
// zero notice.
const NOW: &str = "2026-03-15T12:00:00";

// ─────────────────────────────────────────────────────────────────────────────
// day subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn day_available_monday() {
    bookslot()
        .args([
            "day",
            "--event-type",
            &fixture("event_type.json"),
            "--settings",
            &fixture("settings.json"),
            "--date",
            "2026-03-16",
            "--now",
            NOW,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"available\": true"));
}

#[test]
fn day_unavailable_weekend() {
    // 2026-03-15 is a Sunday.
    bookslot()
        .args([
            "day",
            "--event-type",
            &fixture("event_type.json"),
            "--date",
            "2026-03-15",
            "--now",
            NOW,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"available\": false"))
        .stdout(predicate::str::contains("Not an available day"));
}

#[test]
fn day_past_date() {
    bookslot()
        .args([
            "day",
            "--event-type",
            &fixture("event_type.json"),
            "--date",
            "2026-03-01",
            "--now",
            NOW,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Past date"));
}

#[test]
fn day_summary_uses_long_date() {
    bookslot()
        .args([
            "day",
            "--event-type",
            &fixture("event_type.json"),
            "--date",
            "2026-03-16",
            "--now",
            NOW,
            "--summary",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Monday, March 16, 2026: available"));
}

// ─────────────────────────────────────────────────────────────────────────────
// month subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn month_emits_every_day() {
    let output = bookslot()
        .args([
            "month",
            "--event-type",
            &fixture("event_type.json"),
            "--settings",
            &fixture("settings.json"),
            "--year",
            "2026",
            "--month",
            "3",
            "--now",
            NOW,
        ])
        .output()
        .expect("month should run");

    assert!(output.status.success());
    let days: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("month output is JSON");
    let days = days.as_array().expect("month output is an array");
    assert_eq!(days.len(), 31);
    assert_eq!(days[0]["date"], "2026-03-01");
    assert_eq!(days[30]["date"], "2026-03-31");
    // The 15th is a Sunday and not available; the 16th is a Monday.
    assert_eq!(days[14]["available"], false);
    assert_eq!(days[15]["available"], true);
}

#[test]
fn month_rejects_invalid_month() {
    bookslot()
        .args([
            "month",
            "--event-type",
            &fixture("event_type.json"),
            "--year",
            "2026",
            "--month",
            "13",
            "--now",
            NOW,
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid calendar month"));
}

// ─────────────────────────────────────────────────────────────────────────────
// slots subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn slots_against_bookings() {
    let output = bookslot()
        .args([
            "slots",
            "--event-type",
            &fixture("event_type.json"),
            "--settings",
            &fixture("settings.json"),
            "--bookings",
            &fixture("bookings.json"),
            "--date",
            "2026-03-16",
            "--now",
            NOW,
        ])
        .output()
        .expect("slots should run");

    assert!(output.status.success());
    let slots: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("slots output is JSON");
    let slots = slots.as_array().expect("slots output is an array");

    // The confirmed 09:00 booking plus its 15-minute buffer occupies
    // [08:45, 09:45); the cancelled 10:00 booking blocks nothing.
    assert_eq!(slots.len(), 3);
    assert_eq!(slots[0]["time"], "09:00");
    assert_eq!(slots[0]["available"], false);
    assert_eq!(slots[0]["reason"], "Time slot unavailable");
    assert_eq!(slots[1]["time"], "09:30");
    assert_eq!(slots[1]["available"], false);
    assert_eq!(slots[2]["time"], "10:00");
    assert_eq!(slots[2]["available"], true);
}

#[test]
fn slots_without_bookings_file() {
    bookslot()
        .args([
            "slots",
            "--event-type",
            &fixture("event_type.json"),
            "--settings",
            &fixture("settings.json"),
            "--date",
            "2026-03-16",
            "--now",
            NOW,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("09:00"))
        .stdout(predicate::str::contains("\"available\": true"));
}

#[test]
fn slots_summary_uses_twelve_hour_display() {
    bookslot()
        .args([
            "slots",
            "--event-type",
            &fixture("event_type.json"),
            "--settings",
            &fixture("settings.json"),
            "--date",
            "2026-03-16",
            "--now",
            NOW,
            "--summary",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("9:00 AM: available"))
        .stdout(predicate::str::contains("10:00 AM: available"));
}

// ─────────────────────────────────────────────────────────────────────────────
// check subcommand
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn check_accepts_open_slot() {
    bookslot()
        .args([
            "check",
            "--event-type",
            &fixture("event_type.json"),
            "--settings",
            &fixture("settings.json"),
            "--bookings",
            &fixture("bookings.json"),
            "--date",
            "2026-03-16",
            "--time",
            "10:00",
            "--now",
            NOW,
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Slot is bookable"));
}

#[test]
fn check_rejects_conflicted_slot() {
    bookslot()
        .args([
            "check",
            "--event-type",
            &fixture("event_type.json"),
            "--settings",
            &fixture("settings.json"),
            "--bookings",
            &fixture("bookings.json"),
            "--date",
            "2026-03-16",
            "--time",
            "09:00",
            "--now",
            NOW,
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not available"));
}

#[test]
fn check_rejects_unavailable_day() {
    bookslot()
        .args([
            "check",
            "--event-type",
            &fixture("event_type.json"),
            "--date",
            "2026-03-15",
            "--time",
            "09:00",
            "--now",
            NOW,
        ])
        .assert()
        .failure();
}

// ─────────────────────────────────────────────────────────────────────────────
// Error handling and usage
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn missing_event_type_file_fails() {
    bookslot()
        .args([
            "day",
            "--event-type",
            "/nonexistent/et.json",
            "--date",
            "2026-03-16",
            "--now",
            NOW,
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));
}

#[test]
fn malformed_date_fails() {
    bookslot()
        .args([
            "day",
            "--event-type",
            &fixture("event_type.json"),
            "--date",
            "03/16/2026",
            "--now",
            NOW,
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date"));
}

#[test]
fn help_flag_shows_usage() {
    bookslot()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("day"))
        .stdout(predicate::str::contains("month"))
        .stdout(predicate::str::contains("slots"))
        .stdout(predicate::str::contains("check"));
}
