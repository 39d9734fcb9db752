// ABOUTME: Completed activity record consumed by the training state model
// ABOUTME: Immutable input produced by ingestion collaborators, never mutated here
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::SportType;

/// One completed activity from any source
///
/// The training state model only reads the start time, duration, and average
/// heart rate; the remaining fields are carried for callers.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use coach_core::models::{ActivityRecord, SportType};
///
/// let start = Utc.with_ymd_and_hms(2025, 3, 4, 7, 0, 0).unwrap();
/// let run = ActivityRecord::new("strava", SportType::Run, start, 3600)
///     .with_heart_rate(150)
///     .with_distance_meters(10_000.0);
/// assert_eq!(run.average_heart_rate, Some(150));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityRecord {
    /// Provider or import channel the record came from
    pub source: String,
    /// Sport performed
    pub sport: SportType,
    /// Activity start (UTC)
    pub start_time: DateTime<Utc>,
    /// Elapsed duration in seconds
    pub duration_seconds: u64,
    /// Distance covered in meters
    pub distance_meters: f64,
    /// Elevation gain in meters
    pub elevation_gain_meters: f64,
    /// Average heart rate (bpm)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_heart_rate: Option<u32>,
    /// Average power (watts)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_power: Option<u32>,
}

impl ActivityRecord {
    /// Create a record with the fields every source provides
    #[must_use]
    pub fn new(
        source: impl Into<String>,
        sport: SportType,
        start_time: DateTime<Utc>,
        duration_seconds: u64,
    ) -> Self {
        Self {
            source: source.into(),
            sport,
            start_time,
            duration_seconds,
            distance_meters: 0.0,
            elevation_gain_meters: 0.0,
            average_heart_rate: None,
            average_power: None,
        }
    }

    /// Set average heart rate
    #[must_use]
    pub const fn with_heart_rate(mut self, bpm: u32) -> Self {
        self.average_heart_rate = Some(bpm);
        self
    }

    /// Set average power
    #[must_use]
    pub const fn with_power(mut self, watts: u32) -> Self {
        self.average_power = Some(watts);
        self
    }

    /// Set distance in meters
    #[must_use]
    pub const fn with_distance_meters(mut self, meters: f64) -> Self {
        self.distance_meters = meters;
        self
    }

    /// Set elevation gain in meters
    #[must_use]
    pub const fn with_elevation_gain(mut self, meters: f64) -> Self {
        self.elevation_gain_meters = meters;
        self
    }

    /// Calendar date (UTC) the activity started on
    #[must_use]
    pub fn start_date(&self) -> NaiveDate {
        self.start_time.date_naive()
    }
}
