// ABOUTME: Week structure planner generating locked day-to-session-type skeletons
// ABOUTME: Validates generator output against the skeleton and gates the finished week
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Week structure planner
//!
//! A skeleton is fixed before the generator runs. The generator only fills in
//! volume and detail; anything that changes the day set or a day's session
//! type is rejected as a `StructuralViolation`.

use std::collections::{BTreeMap, BTreeSet};

use coach_core::constants::week_structure::{MAX_DAY_OF_WEEK, PREFERRED_HARD_DAYS};
use coach_core::errors::{CoachResult, StructuralViolation, ValidationError};
use coach_core::models::{SessionSpec, SessionType};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::volume_repair::{compute_total_distance, within_tolerance, VolumeRepairEngine};
use crate::config::RepairConfig;

/// Locked day-of-week to session-type mapping for one week
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeekSkeleton {
    week_number: u32,
    days: BTreeMap<u8, SessionType>,
}

impl WeekSkeleton {
    /// Week number the skeleton was built for
    #[must_use]
    pub const fn week_number(&self) -> u32 {
        self.week_number
    }

    /// Day-to-type mapping, ordered Monday first
    #[must_use]
    pub const fn days(&self) -> &BTreeMap<u8, SessionType> {
        &self.days
    }

    /// Session type required on `day`, if the day is part of the week
    #[must_use]
    pub fn required_type(&self, day: u8) -> Option<SessionType> {
        self.days.get(&day).copied()
    }

    /// Days covered by the skeleton, ascending
    pub fn available_days(&self) -> impl Iterator<Item = u8> + '_ {
        self.days.keys().copied()
    }

    /// The single long-session day
    #[must_use]
    pub fn long_run_day(&self) -> Option<u8> {
        self.days
            .iter()
            .find_map(|(day, kind)| (*kind == SessionType::Long).then_some(*day))
    }

    /// Days carrying a quality session, ascending
    pub fn quality_days(&self) -> impl Iterator<Item = u8> + '_ {
        self.days
            .iter()
            .filter_map(|(day, kind)| kind.is_quality().then_some(*day))
    }

    /// Number of days in the week
    #[must_use]
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Whether the skeleton covers no days
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

/// Deterministic week scaffolding and structure checks
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekStructurePlanner;

impl WeekStructurePlanner {
    /// Build the skeleton for a week
    ///
    /// The last available day carries the long session, Tuesday and Thursday
    /// carry tempo sessions when available, every other day is easy. Duplicate
    /// day indices are ignored.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::NoAvailableDays` for an empty list and
    /// `ValidationError::InvalidDay` for an index above 6.
    pub fn generate_skeleton(
        available_days: &[u8],
        week_number: u32,
    ) -> Result<WeekSkeleton, ValidationError> {
        if let Some(&day) = available_days.iter().find(|&&day| day > MAX_DAY_OF_WEEK) {
            return Err(ValidationError::InvalidDay { day });
        }
        let ordered: BTreeSet<u8> = available_days.iter().copied().collect();
        let Some(&long_day) = ordered.last() else {
            return Err(ValidationError::NoAvailableDays);
        };

        let days: BTreeMap<u8, SessionType> = ordered
            .iter()
            .map(|&day| {
                let kind = if day == long_day {
                    SessionType::Long
                } else if PREFERRED_HARD_DAYS.contains(&day) {
                    SessionType::Tempo
                } else {
                    SessionType::Easy
                };
                (day, kind)
            })
            .collect();

        match days.values().filter(|kind| **kind == SessionType::Long).count() {
            1 => {}
            0 => return Err(ValidationError::NoLongRun),
            count => return Err(ValidationError::MultipleLongRuns { count }),
        }

        let skeleton = WeekSkeleton { week_number, days };
        debug!(
            week_number,
            days = ?skeleton.days,
            quality_days = skeleton.quality_days().count(),
            "generated week skeleton"
        );
        Ok(skeleton)
    }

    /// Check generated sessions against the locked skeleton
    ///
    /// The candidate day-to-type mapping must equal the skeleton's exactly.
    ///
    /// # Errors
    ///
    /// Returns the first `StructuralViolation` found: a duplicate day, a day
    /// outside the skeleton, a missing skeleton day, or a session type mismatch.
    pub fn validate_against_skeleton(
        candidates: &[SessionSpec],
        skeleton: &WeekSkeleton,
    ) -> Result<(), StructuralViolation> {
        let mut assigned: BTreeMap<u8, SessionType> = BTreeMap::new();
        for session in candidates {
            if assigned
                .insert(session.day_of_week, session.session_type)
                .is_some()
            {
                return Err(Self::reject(StructuralViolation::DuplicateDay {
                    day: session.day_of_week,
                }));
            }
        }

        if assigned == skeleton.days {
            return Ok(());
        }

        if let Some(&day) = assigned.keys().find(|day| !skeleton.days.contains_key(day)) {
            return Err(Self::reject(StructuralViolation::UnexpectedDay { day }));
        }
        for (&day, &expected) in &skeleton.days {
            match assigned.get(&day) {
                None => return Err(Self::reject(StructuralViolation::MissingDay { day })),
                Some(&actual) if actual != expected => {
                    return Err(Self::reject(StructuralViolation::SessionTypeMismatch {
                        day,
                        expected,
                        actual,
                    }));
                }
                Some(_) => {}
            }
        }
        Ok(())
    }

    /// Week-level checks independent of any skeleton
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for a day index above 6, a session on an
    /// unavailable day, a session without a positive target, or a week with
    /// zero or several long sessions.
    pub fn validate_week(
        sessions: &[SessionSpec],
        available_days: &[u8],
    ) -> Result<(), ValidationError> {
        for session in sessions {
            let day = session.day_of_week;
            if day > MAX_DAY_OF_WEEK {
                return Err(ValidationError::InvalidDay { day });
            }
            if !available_days.contains(&day) {
                return Err(ValidationError::UnavailableDay { day });
            }
            if !session.has_valid_target() {
                return Err(ValidationError::MissingTarget { day });
            }
        }

        match sessions
            .iter()
            .filter(|s| s.session_type == SessionType::Long)
            .count()
        {
            0 => Err(ValidationError::NoLongRun),
            1 => Ok(()),
            count => Err(ValidationError::MultipleLongRuns { count }),
        }
    }

    /// Run the full gate on generator output
    ///
    /// Skeleton check, week check, volume repair, then the week check again and
    /// a final tolerance check on the repaired total.
    ///
    /// # Errors
    ///
    /// Returns `CoachError::Structure` for skeleton violations,
    /// `CoachError::Repair` when volume cannot be corrected locally, and
    /// `CoachError::Validation` for week violations or a total still outside
    /// tolerance after repair.
    pub fn finalize_week(
        candidates: &[SessionSpec],
        skeleton: &WeekSkeleton,
        target_km: f64,
        config: &RepairConfig,
    ) -> CoachResult<Vec<SessionSpec>> {
        Self::validate_against_skeleton(candidates, skeleton)?;
        let available: Vec<u8> = skeleton.available_days().collect();
        Self::validate_week(candidates, &available)?;

        let engine = VolumeRepairEngine::from_config(config);
        let repaired = engine.repair(candidates, target_km)?;
        // Repair can floor an easy session to zero distance
        Self::validate_week(&repaired, &available)?;

        let actual_km = compute_total_distance(&repaired);
        if !within_tolerance(actual_km, target_km, engine.tolerance()) {
            warn!(actual_km, target_km, "weekly volume outside tolerance after repair");
            return Err(ValidationError::VolumeMismatch {
                actual_km,
                target_km,
            }
            .into());
        }
        Ok(repaired)
    }

    fn reject(violation: StructuralViolation) -> StructuralViolation {
        warn!(%violation, "generated week rejected by skeleton");
        violation
    }
}
