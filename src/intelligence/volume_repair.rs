// ABOUTME: Volume repair engine correcting weekly distance drift from the plan generator
// ABOUTME: Scales easy/recovery sessions, pins long sessions, and settles the residual locally
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Volume repair
//!
//! The generator fills a locked week skeleton with distances that rarely add up
//! to the requested weekly volume. Repair fixes the numbers without asking the
//! generator again: only easy and recovery sessions are scaled, long sessions
//! stay within a narrow band of their generated distance, and session types,
//! days, and counts never change.

use coach_core::constants::volume_repair::{DEFAULT_TOLERANCE, LONG_RUN_CLAMP};
use coach_core::errors::RepairImpossible;
use coach_core::models::{SessionSpec, SessionType};
use tracing::{debug, info, warn};

use crate::config::RepairConfig;

/// Sum of target distances, counting missing distances as zero
#[must_use]
pub fn compute_total_distance(sessions: &[SessionSpec]) -> f64 {
    sessions.iter().map(SessionSpec::distance_or_zero).sum()
}

/// Whether `actual` lies within `tolerance` (a fraction) of `target`
///
/// ```
/// use coach_guard::intelligence::volume_repair::within_tolerance;
///
/// assert!(within_tolerance(50.0, 50.0, 0.05));
/// assert!(!within_tolerance(53.0, 50.0, 0.05));
/// ```
#[must_use]
pub fn within_tolerance(actual: f64, target: f64, tolerance: f64) -> bool {
    (actual - target).abs() <= target.abs() * tolerance
}

/// Local numeric corrector for a generated week
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolumeRepairEngine {
    tolerance: f64,
    long_run_clamp: f64,
}

impl Default for VolumeRepairEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl VolumeRepairEngine {
    /// Engine with the standard 5% tolerance and 5% long-run band
    #[must_use]
    pub const fn new() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            long_run_clamp: LONG_RUN_CLAMP,
        }
    }

    /// Engine using configured tolerances
    #[must_use]
    pub const fn from_config(config: &RepairConfig) -> Self {
        Self {
            tolerance: config.tolerance,
            long_run_clamp: config.long_run_clamp,
        }
    }

    /// Acceptable fractional deviation from the target
    #[must_use]
    pub const fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Bring the week's total distance toward `target_km`
    ///
    /// Returns an owned, corrected copy. The input slice is never touched, and
    /// nothing is returned on failure.
    ///
    /// # Errors
    ///
    /// Returns `RepairImpossible` when the week is outside tolerance and has no
    /// easy or recovery session to scale.
    pub fn repair(
        &self,
        sessions: &[SessionSpec],
        target_km: f64,
    ) -> Result<Vec<SessionSpec>, RepairImpossible> {
        let current_total = compute_total_distance(sessions);
        if within_tolerance(current_total, target_km, self.tolerance) {
            debug!(current_total, target_km, "weekly volume within tolerance");
            return Ok(sessions.to_vec());
        }

        if !sessions.iter().any(|s| s.session_type.is_adjustable()) {
            warn!(
                current_total,
                target_km,
                sessions = sessions.len(),
                "volume repair impossible: no easy or recovery session"
            );
            return Err(RepairImpossible {
                current_km: current_total,
                target_km,
                session_count: sessions.len(),
            });
        }

        let mut repaired = sessions.to_vec();
        let factor = if current_total > 0.0 {
            target_km / current_total
        } else {
            1.0
        };

        for session in repaired.iter_mut().filter(|s| s.session_type.is_adjustable()) {
            if let Some(distance) = session.target_distance_km.as_mut() {
                *distance *= factor;
            }
        }

        self.clamp_long_sessions(&mut repaired, sessions);
        Self::settle_residual(&mut repaired, target_km);

        info!(
            before_km = current_total,
            after_km = compute_total_distance(&repaired),
            target_km,
            scale = factor,
            "repaired weekly volume"
        );
        Ok(repaired)
    }

    /// Keep every long session within the clamp band of its generated distance
    fn clamp_long_sessions(&self, repaired: &mut [SessionSpec], original: &[SessionSpec]) {
        for (session, before) in repaired.iter_mut().zip(original) {
            if session.session_type != SessionType::Long {
                continue;
            }
            if let (Some(distance), Some(generated)) =
                (session.target_distance_km.as_mut(), before.target_distance_km)
            {
                let low = generated * (1.0 - self.long_run_clamp);
                let high = generated * (1.0 + self.long_run_clamp);
                *distance = distance.clamp(low.min(high), low.max(high));
            }
        }
    }

    /// Push the remaining difference onto the largest adjustable session, floored at zero
    fn settle_residual(repaired: &mut [SessionSpec], target_km: f64) {
        let residual = target_km - compute_total_distance(repaired);
        let largest = repaired
            .iter_mut()
            .filter(|s| s.session_type.is_adjustable())
            .max_by(|a, b| a.distance_or_zero().total_cmp(&b.distance_or_zero()));

        if let Some(session) = largest {
            let settled = (session.distance_or_zero() + residual).max(0.0);
            debug!(residual, settled, day = session.day_of_week, "settled residual volume");
            session.target_distance_km = Some(settled);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use coach_core::models::{IntensityLevel, SportType};

    fn session(session_type: SessionType, day: u8, km: f64) -> SessionSpec {
        SessionSpec::new(SportType::Run, session_type, IntensityLevel::Low, 1, day)
            .with_distance_km(km)
    }

    #[test]
    fn test_residual_goes_to_largest_adjustable() {
        let mut week = vec![
            session(SessionType::Easy, 0, 5.0),
            session(SessionType::Easy, 2, 8.0),
            session(SessionType::Long, 6, 20.0),
        ];
        VolumeRepairEngine::settle_residual(&mut week, 35.0);
        assert_eq!(week[0].target_distance_km, Some(5.0));
        assert_eq!(week[1].target_distance_km, Some(10.0));
        assert_eq!(week[2].target_distance_km, Some(20.0));
    }

    #[test]
    fn test_residual_floors_at_zero() {
        let mut week = vec![
            session(SessionType::Recovery, 0, 3.0),
            session(SessionType::Long, 6, 20.0),
        ];
        VolumeRepairEngine::settle_residual(&mut week, 10.0);
        assert_eq!(week[0].target_distance_km, Some(0.0));
    }

    #[test]
    fn test_long_clamp_restores_band() {
        let engine = VolumeRepairEngine::new();
        let original = vec![session(SessionType::Long, 6, 20.0)];
        let mut drifted = vec![session(SessionType::Long, 6, 30.0)];
        engine.clamp_long_sessions(&mut drifted, &original);
        let distance = drifted[0].target_distance_km.unwrap_or_default();
        assert!((distance - 21.0).abs() < 1e-9);
    }
}
