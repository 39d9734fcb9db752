// ABOUTME: Typed failures for week structure validation and volume repair
// ABOUTME: StructuralViolation, RepairImpossible, and ValidationError carry the offending day or totals
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::SessionType;

/// Generator output disagrees with the locked week skeleton
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StructuralViolation {
    /// A skeleton day has no candidate session
    #[error("skeleton day {day} has no candidate session")]
    MissingDay {
        /// Day of week (0 = Monday)
        day: u8,
    },
    /// A candidate session sits on a day outside the skeleton
    #[error("candidate session on day {day} is not part of the week skeleton")]
    UnexpectedDay {
        /// Day of week (0 = Monday)
        day: u8,
    },
    /// More than one candidate session on the same day
    #[error("day {day} has more than one candidate session")]
    DuplicateDay {
        /// Day of week (0 = Monday)
        day: u8,
    },
    /// Candidate session type differs from the skeleton
    #[error("day {day} requires a {expected} session but the candidate is {actual}")]
    SessionTypeMismatch {
        /// Day of week (0 = Monday)
        day: u8,
        /// Type locked in by the skeleton
        expected: SessionType,
        /// Type the generator produced
        actual: SessionType,
    },
}

/// No easy or recovery session exists to absorb a volume correction
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[error(
    "no adjustable session to absorb volume correction: {current_km:.1} km planned, \
     {target_km:.1} km target across {session_count} sessions"
)]
pub struct RepairImpossible {
    /// Total planned distance before repair
    pub current_km: f64,
    /// Requested weekly distance
    pub target_km: f64,
    /// Sessions in the week
    pub session_count: usize,
}

/// Structurally invalid week
#[derive(Debug, Clone, PartialEq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationError {
    /// No available days were supplied
    #[error("at least one available day is required")]
    NoAvailableDays,
    /// Day index outside 0..=6
    #[error("day of week {day} is out of range (expected 0-6)")]
    InvalidDay {
        /// Offending index
        day: u8,
    },
    /// Week has no long session
    #[error("week has no long session")]
    NoLongRun,
    /// Week has more than one long session
    #[error("week has {count} long sessions, expected exactly one")]
    MultipleLongRuns {
        /// Number of long sessions found
        count: usize,
    },
    /// Session placed on a day the athlete cannot train
    #[error("session on day {day} falls outside the available days")]
    UnavailableDay {
        /// Day of week (0 = Monday)
        day: u8,
    },
    /// Session lacks a positive distance and a positive duration
    #[error("session on day {day} needs a positive target distance or duration")]
    MissingTarget {
        /// Day of week (0 = Monday)
        day: u8,
    },
    /// Weekly volume still outside tolerance after repair
    #[error("weekly volume {actual_km:.2} km is outside tolerance of {target_km:.2} km after repair")]
    VolumeMismatch {
        /// Total after repair
        actual_km: f64,
        /// Requested total
        target_km: f64,
    },
}
