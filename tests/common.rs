// ABOUTME: Shared fixtures and setup functions for integration tests
// ABOUTME: Builds activity histories, generated weeks, and planned sessions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions
)]
//! Shared test utilities for `coach_guard`

use std::env;
use std::sync::Once;

use chrono::{Duration, NaiveDate, TimeZone, Utc};
use coach_guard::models::{
    ActivityRecord, IntensityLevel, PlannedSession, SessionSpec, SessionType, SportType,
};
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        // Another harness may already own the global subscriber
        let _ = tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .try_init();
    });
}

/// Calendar date helper
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// Run activity starting at 07:00 UTC on `day`
pub fn run_on(day: NaiveDate, duration_seconds: u64, heart_rate: Option<u32>) -> ActivityRecord {
    let start = Utc.from_utc_datetime(&day.and_hms_opt(7, 0, 0).unwrap());
    let activity = ActivityRecord::new("test", SportType::Run, start, duration_seconds);
    match heart_rate {
        Some(bpm) => activity.with_heart_rate(bpm),
        None => activity,
    }
}

/// One identical activity per day for `days` days ending on `end`
pub fn daily_runs(
    end: NaiveDate,
    days: i64,
    duration_seconds: u64,
    heart_rate: u32,
) -> Vec<ActivityRecord> {
    (0..days)
        .rev()
        .map(|offset| run_on(end - Duration::days(offset), duration_seconds, Some(heart_rate)))
        .collect()
}

/// Generated running session with a distance target
pub fn spec(session_type: SessionType, day: u8, km: f64) -> SessionSpec {
    let intensity = match session_type {
        SessionType::Tempo | SessionType::Threshold => IntensityLevel::High,
        SessionType::Vo2 | SessionType::RacePace => IntensityLevel::Max,
        SessionType::Long => IntensityLevel::Moderate,
        _ => IntensityLevel::Low,
    };
    SessionSpec::new(SportType::Run, session_type, intensity, 1, day).with_distance_km(km)
}

/// Typical generated week for available days Tue, Thu, Sat, Sun: 8 + 10 + 8 + 20 = 46 km
pub fn generated_week() -> Vec<SessionSpec> {
    vec![
        spec(SessionType::Tempo, 1, 8.0),
        spec(SessionType::Tempo, 3, 10.0),
        spec(SessionType::Easy, 5, 8.0),
        spec(SessionType::Long, 6, 20.0),
    ]
}

/// Stored session on a date in week 1
///
/// The title depends only on the session type so distance edits change one field.
pub fn planned(id: &str, day: NaiveDate, session_type: SessionType, km: f64) -> PlannedSession {
    PlannedSession::new(
        id,
        day,
        format!("{session_type} run"),
        spec(session_type, 0, km),
    )
}

/// Absolute float comparison with a fixed epsilon
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}
