// ABOUTME: Integration tests for the training state model
// ABOUTME: Covers load windows, monotony, risk flags, readiness, intent, and snapshot history
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::collections::BTreeSet;

use chrono::Duration;
use coach_guard::intelligence::{
    LoadTrend, RecoveryStatus, RiskFlag, TrainingIntent, TrainingStateModel, TrainingStateSnapshot,
};
use common::{approx_eq, daily_runs, date, init_test_logging, run_on};

#[test]
fn test_steady_week_is_monotonous_and_overreaching() {
    init_test_logging();
    let reference = date(2025, 6, 15);
    let activities = daily_runs(reference, 7, 3600, 150);

    let snapshot = TrainingStateModel::compute(&activities, reference, None);

    assert!(approx_eq(snapshot.acute_load, 37_800.0));
    assert!(approx_eq(snapshot.chronic_load, 9_450.0));
    assert!(approx_eq(snapshot.training_stress_balance, -28_350.0));
    assert!(snapshot.monotony.is_infinite());
    assert!(snapshot.has_flag(RiskFlag::HighMonotony));
    assert!(snapshot.has_flag(RiskFlag::Overreaching));
    assert!(!snapshot.has_flag(RiskFlag::AcuteSpike));
    assert_eq!(snapshot.recovery_status, RecoveryStatus::Over);
    assert_eq!(snapshot.readiness_score, 0);
    assert_eq!(snapshot.recommended_intent, TrainingIntent::Recover);
    assert_eq!(snapshot.load_trend, LoadTrend::Stable);
    assert!(approx_eq(snapshot.intensity_distribution.moderate, 1.0));
}

#[test]
fn test_empty_history_is_neutral() {
    let reference = date(2025, 6, 15);
    let snapshot = TrainingStateModel::compute(&[], reference, None);

    assert!(approx_eq(snapshot.acute_load, 0.0));
    assert!(approx_eq(snapshot.chronic_load, 0.0));
    assert!(approx_eq(snapshot.monotony, 0.0));
    assert_eq!(snapshot.load_trend, LoadTrend::Stable);
    assert_eq!(snapshot.recovery_status, RecoveryStatus::Adequate);
    assert_eq!(snapshot.readiness_score, 75);
    assert!(snapshot.risk_flags.is_empty());
    assert_eq!(snapshot.recommended_intent, TrainingIntent::Maintain);
    assert!(approx_eq(snapshot.intensity_distribution.easy, 0.0));
    assert!(approx_eq(snapshot.intensity_distribution.moderate, 0.0));
    assert!(approx_eq(snapshot.intensity_distribution.hard, 0.0));
}

#[test]
fn test_activity_load_falls_back_without_heart_rate() {
    let day = date(2025, 6, 1);
    assert!(approx_eq(
        TrainingStateModel::activity_load(&run_on(day, 3600, None)),
        1_800.0
    ));
    assert!(approx_eq(
        TrainingStateModel::activity_load(&run_on(day, 3600, Some(150))),
        5_400.0
    ));
}

#[test]
fn test_rest_week_after_block_recommends_build() {
    let reference = date(2025, 6, 30);
    // Two weeks of training ending eight days before the reference date
    let activities = daily_runs(reference - Duration::days(8), 14, 3600, 150);

    let snapshot = TrainingStateModel::compute(&activities, reference, None);

    assert!(approx_eq(snapshot.acute_load, 0.0));
    assert!(approx_eq(snapshot.chronic_load, 18_900.0));
    assert_eq!(snapshot.recovery_status, RecoveryStatus::Under);
    assert_eq!(snapshot.readiness_score, 100);
    assert!(snapshot.risk_flags.is_empty());
    assert_eq!(snapshot.recommended_intent, TrainingIntent::Build);
}

#[test]
fn test_acute_spike_uses_prior_chronic_load() {
    let reference = date(2025, 6, 15);
    let prior = TrainingStateModel::compute(&[], reference - Duration::days(1), None);
    let activities = vec![run_on(reference, 3600, Some(150))];

    let snapshot = TrainingStateModel::compute(&activities, reference, Some(&prior));

    assert!(snapshot.has_flag(RiskFlag::AcuteSpike));
    assert_eq!(snapshot.recommended_intent, TrainingIntent::Recover);

    let without_prior = TrainingStateModel::compute(&activities, reference, None);
    assert!(!without_prior.has_flag(RiskFlag::AcuteSpike));
}

#[test]
fn test_rising_trend_when_last_day_is_heaviest() {
    let reference = date(2025, 6, 15);
    let mut activities: Vec<_> = (1..=3)
        .map(|offset| run_on(reference - Duration::days(offset), 3600, Some(100)))
        .collect();
    activities.push(run_on(reference, 3600, Some(200)));

    let snapshot = TrainingStateModel::compute(&activities, reference, None);

    assert_eq!(snapshot.load_trend, LoadTrend::Rising);
    assert!(snapshot.monotony.is_finite());
}

#[test]
fn test_intensity_buckets_use_heart_rate_thresholds() {
    let reference = date(2025, 6, 15);
    let activities = vec![
        run_on(reference, 1800, Some(139)),
        run_on(reference, 1800, None),
        run_on(reference, 1800, Some(140)),
        run_on(reference, 1800, Some(165)),
    ];

    let distribution = TrainingStateModel::compute(&activities, reference, None).intensity_distribution;

    assert!(approx_eq(distribution.easy, 0.5));
    assert!(approx_eq(distribution.moderate, 0.25));
    assert!(approx_eq(distribution.hard, 0.25));
}

#[test]
fn test_tsb_interpretation_boundaries() {
    assert_eq!(TrainingStateModel::interpret_tsb(-20.0), RecoveryStatus::Adequate);
    assert_eq!(TrainingStateModel::interpret_tsb(-20.5), RecoveryStatus::Over);
    assert_eq!(TrainingStateModel::interpret_tsb(20.0), RecoveryStatus::Adequate);
    assert_eq!(TrainingStateModel::interpret_tsb(20.5), RecoveryStatus::Under);
}

#[test]
fn test_readiness_score_is_clamped() {
    assert_eq!(TrainingStateModel::readiness_score(0.0, 0.0), 75);
    assert_eq!(TrainingStateModel::readiness_score(10.0, 1.0), 75);
    assert_eq!(TrainingStateModel::readiness_score(0.0, f64::INFINITY), 50);
    assert_eq!(TrainingStateModel::readiness_score(-1_000.0, 0.0), 0);
    assert_eq!(TrainingStateModel::readiness_score(1_000.0, 0.0), 100);
}

#[test]
fn test_intent_prefers_recovery_over_build() {
    let flags: BTreeSet<RiskFlag> = [RiskFlag::Overreaching].into_iter().collect();
    assert_eq!(
        TrainingStateModel::recommend_intent(50.0, &flags),
        TrainingIntent::Recover
    );

    let monotony_only: BTreeSet<RiskFlag> = [RiskFlag::HighMonotony].into_iter().collect();
    assert_eq!(
        TrainingStateModel::recommend_intent(50.0, &monotony_only),
        TrainingIntent::Build
    );
    assert_eq!(
        TrainingStateModel::recommend_intent(10.0, &BTreeSet::new()),
        TrainingIntent::Maintain
    );
}

#[test]
fn test_infinite_monotony_serializes_as_null() {
    let reference = date(2025, 6, 15);
    let snapshot = TrainingStateModel::compute(&daily_runs(reference, 7, 3600, 150), reference, None);

    let json = serde_json::to_value(&snapshot).unwrap();

    assert!(json["monotony"].is_null());
    assert_eq!(json["recommended_intent"], "RECOVER");
    assert_eq!(json["recovery_status"], "over");
}

#[test]
fn test_snapshot_json_round_trip_keeps_infinite_monotony() {
    let reference = date(2025, 6, 15);
    let snapshot = TrainingStateModel::compute(&daily_runs(reference, 7, 3600, 150), reference, None);

    let encoded = serde_json::to_string(&snapshot).unwrap();
    let decoded: TrainingStateSnapshot = serde_json::from_str(&encoded).unwrap();

    assert!(decoded.monotony.is_infinite());
    assert_eq!(decoded, snapshot);
}

#[test]
fn test_finite_monotony_survives_json() {
    let reference = date(2025, 6, 15);
    let mut activities: Vec<_> = (1..=3)
        .map(|offset| run_on(reference - Duration::days(offset), 3600, Some(100)))
        .collect();
    activities.push(run_on(reference, 3600, Some(200)));
    let snapshot = TrainingStateModel::compute(&activities, reference, None);

    let json = serde_json::to_value(&snapshot).unwrap();
    let decoded: TrainingStateSnapshot = serde_json::from_value(json.clone()).unwrap();

    assert!(json["monotony"].is_f64());
    assert!(approx_eq(decoded.monotony, snapshot.monotony));
}

#[test]
fn test_history_only_sees_past_activities() {
    let start = date(2025, 6, 1);
    let end = date(2025, 6, 7);
    let activities = daily_runs(end, 7, 3600, 150);

    let history = TrainingStateModel::history(&activities, start, end);

    assert_eq!(history.len(), 7);
    assert_eq!(history[0].reference_date, start);
    assert_eq!(history[6].reference_date, end);
    assert!(approx_eq(history[0].acute_load, 5_400.0));
    assert!(approx_eq(history[6].acute_load, 37_800.0));
    // Day two's acute load exceeds 1.5x day one's chronic load
    assert!(history[1].has_flag(RiskFlag::AcuteSpike));
}

#[test]
fn test_snapshots_for_dates_match_individual_computation() {
    let end = date(2025, 6, 30);
    let activities = daily_runs(end, 28, 2700, 145);
    let dates = vec![date(2025, 6, 10), date(2025, 6, 20), end];

    let snapshots = TrainingStateModel::snapshots_for_dates(&activities, &dates);

    assert_eq!(snapshots.len(), dates.len());
    for (snapshot, day) in snapshots.iter().zip(&dates) {
        let visible: Vec<_> = activities
            .iter()
            .filter(|activity| activity.start_date() <= *day)
            .cloned()
            .collect();
        assert_eq!(*snapshot, TrainingStateModel::compute(&visible, *day, None));
    }
}
