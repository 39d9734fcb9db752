// ABOUTME: Training state model deriving acute/chronic load, TSB, monotony, and readiness
// ABOUTME: Pure snapshot computation from activity history with risk flags and intent
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Training state model
//!
//! Turns a list of completed activities into a fatigue/fitness snapshot for one
//! reference date. Load windows use plain trailing sums (7-day acute, 28-day
//! chronic normalized to a weekly rate), not exponential averages.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

use chrono::{Duration, NaiveDate};
use coach_core::constants::{
    heart_rate::{HARD_HR_THRESHOLD, MODERATE_HR_THRESHOLD},
    readiness::{BASELINE, MAX_SCORE, MIN_SCORE, MONOTONY_CAP, MONOTONY_PENALTY, TSB_DIVISOR},
    recovery::{BUILD_TSB_THRESHOLD, OVER_TSB_THRESHOLD, UNDER_TSB_THRESHOLD},
    risk::{ACUTE_SPIKE_RATIO, HIGH_MONOTONY_THRESHOLD, OVERREACHING_RATIO},
    training_load::{
        ACUTE_WINDOW_DAYS, CHRONIC_WINDOW_DAYS, CHRONIC_WINDOW_WEEKS, HEART_RATE_LOAD_DIVISOR,
        MIN_ACTIVITIES_FOR_MONOTONY, MIN_ACTIVITIES_FOR_TREND, NO_HEART_RATE_LOAD_FACTOR,
    },
};
use coach_core::models::ActivityRecord;
use rayon::prelude::*;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::debug;

/// Direction of the last day's load relative to the window average
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadTrend {
    /// Most recent day above the daily mean
    Rising,
    /// Not enough data, or most recent day equals the mean
    Stable,
    /// Most recent day below the daily mean
    Falling,
}

/// Recovery label derived from training-stress balance
///
/// `Over` is assigned for strongly negative balance and `Under` for strongly
/// positive balance, matching the product's established thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecoveryStatus {
    /// TSB < -20
    Over,
    /// TSB > 20
    Under,
    /// -20 <= TSB <= 20
    Adequate,
}

/// Risk conditions raised by a snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskFlag {
    /// Monotony >= 2.0 (including infinite)
    HighMonotony,
    /// Acute load > 1.5x the prior snapshot's chronic load
    AcuteSpike,
    /// Acute load > 1.2x chronic load
    Overreaching,
}

/// What the next block of training should aim for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TrainingIntent {
    /// Back off; a load risk was flagged
    Recover,
    /// Fresh enough to add load
    Build,
    /// Hold current load
    Maintain,
}

/// Share of acute-window activities per intensity bucket
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntensityDistribution {
    /// Average HR below 140 bpm, or no HR recorded
    pub easy: f64,
    /// Average HR 140-164 bpm
    pub moderate: f64,
    /// Average HR 165 bpm or above
    pub hard: f64,
}

/// Fatigue/fitness state for one reference date
///
/// `monotony` is `f64::INFINITY` when the acute window's daily loads have no
/// spread; JSON encodes that as `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingStateSnapshot {
    /// Date the snapshot describes
    pub reference_date: NaiveDate,
    /// Trailing 7-day load
    pub acute_load: f64,
    /// Trailing 28-day load divided by 4
    pub chronic_load: f64,
    /// Chronic minus acute load
    pub training_stress_balance: f64,
    /// Direction of the 7-day load
    pub load_trend: LoadTrend,
    /// Mean over population standard deviation of daily loads
    #[serde(
        serialize_with = "serialize_monotony",
        deserialize_with = "deserialize_monotony"
    )]
    pub monotony: f64,
    /// Intensity mix over the acute window
    pub intensity_distribution: IntensityDistribution,
    /// Recovery label
    pub recovery_status: RecoveryStatus,
    /// Readiness, 0-100
    pub readiness_score: u8,
    /// Raised risk flags
    pub risk_flags: BTreeSet<RiskFlag>,
    /// Recommended intent for upcoming training
    pub recommended_intent: TrainingIntent,
}

/// Non-finite monotony is written as `null`
#[allow(clippy::trivially_copy_pass_by_ref)]
fn serialize_monotony<S>(monotony: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if monotony.is_finite() {
        serializer.serialize_some(monotony)
    } else {
        serializer.serialize_none()
    }
}

/// `null` reads back as infinite monotony
fn deserialize_monotony<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::INFINITY))
}

impl TrainingStateSnapshot {
    /// Whether a risk flag is raised
    #[must_use]
    pub fn has_flag(&self, flag: RiskFlag) -> bool {
        self.risk_flags.contains(&flag)
    }
}

/// Calculator for training state snapshots
#[derive(Debug, Clone, Copy, Default)]
pub struct TrainingStateModel;

impl TrainingStateModel {
    /// Compute the snapshot for `reference_date`
    ///
    /// Only activities starting on or after the window start count; callers
    /// pass history up to the reference date. An empty history yields zero
    /// loads, a stable trend, and neutral readiness.
    #[must_use]
    pub fn compute(
        activities: &[ActivityRecord],
        reference_date: NaiveDate,
        prior: Option<&TrainingStateSnapshot>,
    ) -> TrainingStateSnapshot {
        let refs: Vec<&ActivityRecord> = activities.iter().collect();
        Self::compute_from(&refs, reference_date, prior)
    }

    /// One snapshot per day from `start` through `end` inclusive
    ///
    /// Each day sees only activities started on or before it and uses the
    /// previous day's snapshot as its prior.
    #[must_use]
    pub fn history(
        activities: &[ActivityRecord],
        start: NaiveDate,
        end: NaiveDate,
    ) -> Vec<TrainingStateSnapshot> {
        let mut snapshots: Vec<TrainingStateSnapshot> = Vec::new();
        for date in start.iter_days().take_while(|date| *date <= end) {
            let visible: Vec<&ActivityRecord> = activities
                .iter()
                .filter(|activity| activity.start_date() <= date)
                .collect();
            let snapshot = Self::compute_from(&visible, date, snapshots.last());
            snapshots.push(snapshot);
        }
        snapshots
    }

    /// Independent snapshots for arbitrary dates, computed in parallel
    ///
    /// No prior is chained, so `ACUTE_SPIKE` is never raised here.
    #[must_use]
    pub fn snapshots_for_dates(
        activities: &[ActivityRecord],
        dates: &[NaiveDate],
    ) -> Vec<TrainingStateSnapshot> {
        dates
            .par_iter()
            .map(|&date| {
                let visible: Vec<&ActivityRecord> = activities
                    .iter()
                    .filter(|activity| activity.start_date() <= date)
                    .collect();
                Self::compute_from(&visible, date, None)
            })
            .collect()
    }

    fn compute_from(
        activities: &[&ActivityRecord],
        reference_date: NaiveDate,
        prior: Option<&TrainingStateSnapshot>,
    ) -> TrainingStateSnapshot {
        let acute_start = reference_date - Duration::days(ACUTE_WINDOW_DAYS);
        let chronic_start = reference_date - Duration::days(CHRONIC_WINDOW_DAYS);

        let acute_window: Vec<&ActivityRecord> = activities
            .iter()
            .copied()
            .filter(|activity| activity.start_date() >= acute_start)
            .collect();

        let acute_load: f64 = acute_window.iter().copied().map(Self::activity_load).sum();
        let chronic_load = activities
            .iter()
            .copied()
            .filter(|activity| activity.start_date() >= chronic_start)
            .map(Self::activity_load)
            .sum::<f64>()
            / CHRONIC_WINDOW_WEEKS;
        let tsb = Self::calculate_tsb(chronic_load, acute_load);

        let daily = Self::daily_loads(&acute_window);
        let load_trend = Self::load_trend(acute_window.len(), &daily);
        let monotony = Self::monotony(acute_window.len(), &daily);
        let risk_flags = Self::risk_flags(acute_load, chronic_load, monotony, prior);
        let recommended_intent = Self::recommend_intent(tsb, &risk_flags);

        debug!(
            %reference_date,
            acute_load,
            chronic_load,
            tsb,
            monotony,
            activities = acute_window.len(),
            "computed training state"
        );

        TrainingStateSnapshot {
            reference_date,
            acute_load,
            chronic_load,
            training_stress_balance: tsb,
            load_trend,
            monotony,
            intensity_distribution: Self::intensity_distribution(&acute_window),
            recovery_status: Self::interpret_tsb(tsb),
            readiness_score: Self::readiness_score(tsb, monotony),
            risk_flags,
            recommended_intent,
        }
    }

    /// Load of a single activity: duration x (HR / 100), or duration x 0.5 without HR
    #[must_use]
    pub fn activity_load(activity: &ActivityRecord) -> f64 {
        let duration = activity.duration_seconds as f64;
        activity.average_heart_rate.map_or_else(
            || duration * NO_HEART_RATE_LOAD_FACTOR,
            |hr| duration * (f64::from(hr) / HEART_RATE_LOAD_DIVISOR),
        )
    }

    /// Training-stress balance = chronic - acute
    #[must_use]
    pub fn calculate_tsb(chronic_load: f64, acute_load: f64) -> f64 {
        chronic_load - acute_load
    }

    /// Recovery label for a TSB value
    #[must_use]
    pub fn interpret_tsb(tsb: f64) -> RecoveryStatus {
        if tsb < OVER_TSB_THRESHOLD {
            RecoveryStatus::Over
        } else if tsb > UNDER_TSB_THRESHOLD {
            RecoveryStatus::Under
        } else {
            RecoveryStatus::Adequate
        }
    }

    /// Readiness = clamp(75 + TSB/2 - min(monotony, 5) x 5, 0, 100), rounded
    ///
    /// Infinite monotony is capped before the multiply.
    #[must_use]
    pub fn readiness_score(tsb: f64, monotony: f64) -> u8 {
        let capped = if monotony.is_finite() {
            monotony.min(MONOTONY_CAP)
        } else {
            MONOTONY_CAP
        };
        let raw = capped.mul_add(-MONOTONY_PENALTY, BASELINE + tsb / TSB_DIVISOR);
        raw.clamp(MIN_SCORE, MAX_SCORE).round() as u8
    }

    /// Intent: recover on a load risk, build when fresh, otherwise maintain
    #[must_use]
    pub fn recommend_intent(tsb: f64, risk_flags: &BTreeSet<RiskFlag>) -> TrainingIntent {
        if risk_flags.contains(&RiskFlag::Overreaching) || risk_flags.contains(&RiskFlag::AcuteSpike)
        {
            TrainingIntent::Recover
        } else if tsb > BUILD_TSB_THRESHOLD {
            TrainingIntent::Build
        } else {
            TrainingIntent::Maintain
        }
    }

    fn risk_flags(
        acute_load: f64,
        chronic_load: f64,
        monotony: f64,
        prior: Option<&TrainingStateSnapshot>,
    ) -> BTreeSet<RiskFlag> {
        let mut flags = BTreeSet::new();
        if monotony >= HIGH_MONOTONY_THRESHOLD {
            flags.insert(RiskFlag::HighMonotony);
        }
        if prior.is_some_and(|p| acute_load > ACUTE_SPIKE_RATIO * p.chronic_load) {
            flags.insert(RiskFlag::AcuteSpike);
        }
        if acute_load > chronic_load * OVERREACHING_RATIO {
            flags.insert(RiskFlag::Overreaching);
        }
        flags
    }

    fn daily_loads(activities: &[&ActivityRecord]) -> BTreeMap<NaiveDate, f64> {
        let mut daily: BTreeMap<NaiveDate, f64> = BTreeMap::new();
        for activity in activities {
            *daily.entry(activity.start_date()).or_insert(0.0) += Self::activity_load(activity);
        }
        daily
    }

    fn load_trend(activity_count: usize, daily: &BTreeMap<NaiveDate, f64>) -> LoadTrend {
        if activity_count < MIN_ACTIVITIES_FOR_TREND {
            return LoadTrend::Stable;
        }
        let Some(latest) = daily.values().next_back() else {
            return LoadTrend::Stable;
        };
        let mean = daily.values().sum::<f64>() / daily.len() as f64;
        match latest.partial_cmp(&mean) {
            Some(Ordering::Greater) => LoadTrend::Rising,
            Some(Ordering::Less) => LoadTrend::Falling,
            _ => LoadTrend::Stable,
        }
    }

    fn monotony(activity_count: usize, daily: &BTreeMap<NaiveDate, f64>) -> f64 {
        if activity_count < MIN_ACTIVITIES_FOR_MONOTONY || daily.is_empty() {
            return 0.0;
        }
        let days = daily.len() as f64;
        let mean = daily.values().sum::<f64>() / days;
        let variance = daily.values().map(|load| (load - mean).powi(2)).sum::<f64>() / days;
        let stdev = variance.sqrt();
        // Rounding in the mean can leave a residue on equal loads
        if stdev <= f64::EPSILON * mean.abs().max(1.0) {
            f64::INFINITY
        } else {
            mean / stdev
        }
    }

    fn intensity_distribution(activities: &[&ActivityRecord]) -> IntensityDistribution {
        let (mut easy, mut moderate, mut hard) = (0_u32, 0_u32, 0_u32);
        for activity in activities {
            match activity.average_heart_rate {
                Some(hr) if hr >= HARD_HR_THRESHOLD => hard += 1,
                Some(hr) if hr >= MODERATE_HR_THRESHOLD => moderate += 1,
                _ => easy += 1,
            }
        }
        let total = activities.len().max(1) as f64;
        IntensityDistribution {
            easy: f64::from(easy) / total,
            moderate: f64::from(moderate) / total,
            hard: f64::from(hard) / total,
        }
    }
}
