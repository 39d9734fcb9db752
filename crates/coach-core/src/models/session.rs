// ABOUTME: Planned session models including SessionSpec, PlannedSession, and session enums
// ABOUTME: Closed enumerations for session type, intensity, and phase with diffable field views
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::SportType;

/// Structural role of a session within a week
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum SessionType {
    /// Aerobic easy session
    Easy,
    /// Very light recovery session
    Recovery,
    /// The week's long session
    Long,
    /// Sustained tempo effort
    Tempo,
    /// Lactate threshold work
    Threshold,
    /// VO2max intervals
    Vo2,
    /// Goal race pace work
    RacePace,
    /// Short strides or pickups
    Strides,
}

impl SessionType {
    /// Stable snake-case name used in diffs and cache keys
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Recovery => "recovery",
            Self::Long => "long",
            Self::Tempo => "tempo",
            Self::Threshold => "threshold",
            Self::Vo2 => "vo2",
            Self::RacePace => "race_pace",
            Self::Strides => "strides",
        }
    }

    /// Whether volume repair may scale this session's distance
    #[must_use]
    pub const fn is_adjustable(&self) -> bool {
        matches!(self, Self::Easy | Self::Recovery)
    }

    /// Whether this is a quality (hard) session
    #[must_use]
    pub const fn is_quality(&self) -> bool {
        matches!(
            self,
            Self::Tempo | Self::Threshold | Self::Vo2 | Self::RacePace
        )
    }
}

impl fmt::Display for SessionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Prescribed effort level
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum IntensityLevel {
    /// Conversational effort
    Low,
    /// Steady, controlled effort
    Moderate,
    /// Hard, sustained effort
    High,
    /// Near-maximal effort
    Max,
}

impl IntensityLevel {
    /// Stable snake-case name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Moderate => "moderate",
            Self::High => "high",
            Self::Max => "max",
        }
    }
}

/// Periodization phase a session belongs to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TrainingPhase {
    /// Aerobic base building
    Base,
    /// Specific build
    Build,
    /// Peak block
    Peak,
    /// Pre-race taper
    Taper,
    /// Post-race or deload recovery
    Recovery,
}

impl TrainingPhase {
    /// Stable snake-case name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Base => "base",
            Self::Build => "build",
            Self::Peak => "peak",
            Self::Taper => "taper",
            Self::Recovery => "recovery",
        }
    }
}

/// One prescribed session as produced by the generator
///
/// Volume repair is the only component allowed to change `target_distance_km`,
/// and it does so on an owned copy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSpec {
    /// Sport for the session
    pub sport: SportType,
    /// Structural role within the week
    pub session_type: SessionType,
    /// Prescribed intensity
    pub intensity: IntensityLevel,
    /// Target distance in kilometers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_distance_km: Option<f64>,
    /// Target duration in minutes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_duration_min: Option<f64>,
    /// Free-text session goal
    pub goal: String,
    /// Periodization phase
    pub phase: TrainingPhase,
    /// Week number within the plan (1-based)
    pub week_number: u32,
    /// Day of week, 0 = Monday through 6 = Sunday
    pub day_of_week: u8,
    /// Optional coaching notes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl SessionSpec {
    /// Create a session with no targets set; add one with `with_distance_km`
    /// or `with_duration_min`
    #[must_use]
    pub fn new(
        sport: SportType,
        session_type: SessionType,
        intensity: IntensityLevel,
        week_number: u32,
        day_of_week: u8,
    ) -> Self {
        Self {
            sport,
            session_type,
            intensity,
            target_distance_km: None,
            target_duration_min: None,
            goal: String::new(),
            phase: TrainingPhase::Base,
            week_number,
            day_of_week,
            notes: None,
        }
    }

    /// Set target distance
    #[must_use]
    pub const fn with_distance_km(mut self, km: f64) -> Self {
        self.target_distance_km = Some(km);
        self
    }

    /// Set target duration
    #[must_use]
    pub const fn with_duration_min(mut self, minutes: f64) -> Self {
        self.target_duration_min = Some(minutes);
        self
    }

    /// Set goal text
    #[must_use]
    pub fn with_goal(mut self, goal: impl Into<String>) -> Self {
        self.goal = goal.into();
        self
    }

    /// Set phase
    #[must_use]
    pub const fn with_phase(mut self, phase: TrainingPhase) -> Self {
        self.phase = phase;
        self
    }

    /// Set notes
    #[must_use]
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// Target distance, counting a missing target as zero
    #[must_use]
    pub fn distance_or_zero(&self) -> f64 {
        self.target_distance_km.unwrap_or(0.0)
    }

    /// At least one of distance or duration is present and strictly positive
    #[must_use]
    pub fn has_valid_target(&self) -> bool {
        let positive = |value: Option<f64>| value.is_some_and(|v| v > 0.0);
        positive(self.target_distance_km) || positive(self.target_duration_min)
    }
}

/// A session as stored in a plan snapshot
///
/// `id` is stable across revisions. `created_at`, `updated_at`, and `revision`
/// are bookkeeping and never show up in a plan diff.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannedSession {
    /// Stable session identifier
    pub id: String,
    /// Calendar date of the session
    pub date: NaiveDate,
    /// Display title
    pub title: String,
    /// Prescription
    pub spec: SessionSpec,
    /// When the session was first stored
    pub created_at: DateTime<Utc>,
    /// When the session was last written
    pub updated_at: DateTime<Utc>,
    /// Generation counter maintained by persistence
    pub revision: u32,
}

impl PlannedSession {
    /// Create a first-revision session stamped with the current time
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        date: NaiveDate,
        title: impl Into<String>,
        spec: SessionSpec,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            date,
            title: title.into(),
            spec,
            created_at: now,
            updated_at: now,
            revision: 1,
        }
    }

    /// Field name/value pairs that take part in plan diffs, in presentation order
    #[must_use]
    pub fn comparable_fields(&self) -> Vec<(&'static str, Value)> {
        let spec = &self.spec;
        vec![
            ("date", Value::from(self.date.to_string())),
            ("title", Value::from(self.title.as_str())),
            ("sport", Value::from(spec.sport.as_str())),
            ("session_type", Value::from(spec.session_type.as_str())),
            ("intensity", Value::from(spec.intensity.as_str())),
            ("distance", spec.target_distance_km.map_or(Value::Null, Value::from)),
            ("duration", spec.target_duration_min.map_or(Value::Null, Value::from)),
            ("goal", Value::from(spec.goal.as_str())),
            ("phase", Value::from(spec.phase.as_str())),
            ("week_number", Value::from(spec.week_number)),
            ("day_of_week", Value::from(spec.day_of_week)),
            ("notes", spec.notes.as_deref().map_or(Value::Null, Value::from)),
        ]
    }
}
