// ABOUTME: Tests for core domain models and error types
// ABOUTME: Covers sport parsing, session classification, diffable fields, and error codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use coach_guard::errors::{
    CoachError, ErrorCode, RepairImpossible, StructuralViolation, ValidationError,
};
use coach_guard::models::{SessionType, SportType, UnknownSportType};
use common::{date, planned, spec};
use serde_json::json;

#[test]
fn test_sport_type_parsing_accepts_aliases() {
    assert_eq!("Running".parse::<SportType>().unwrap(), SportType::Run);
    assert_eq!("bike".parse::<SportType>().unwrap(), SportType::Ride);
    assert_eq!("trail".parse::<SportType>().unwrap(), SportType::TrailRun);
    assert_eq!(
        "Curling".parse::<SportType>(),
        Err(UnknownSportType("curling".to_owned()))
    );
    assert_eq!(
        "curling".parse::<SportType>().unwrap_err().to_string(),
        "unknown sport type: curling"
    );
    assert_eq!(SportType::CrossTraining.to_string(), "cross_training");
}

#[test]
fn test_only_easy_and_recovery_are_adjustable() {
    let adjustable: Vec<SessionType> = [
        SessionType::Easy,
        SessionType::Recovery,
        SessionType::Long,
        SessionType::Tempo,
        SessionType::Threshold,
        SessionType::Vo2,
        SessionType::RacePace,
        SessionType::Strides,
    ]
    .into_iter()
    .filter(SessionType::is_adjustable)
    .collect();

    assert_eq!(adjustable, vec![SessionType::Easy, SessionType::Recovery]);
    assert!(SessionType::Vo2.is_quality());
    assert!(!SessionType::Long.is_quality());
}

#[test]
fn test_session_type_serializes_snake_case() {
    assert_eq!(json!(SessionType::RacePace), json!("race_pace"));
    assert_eq!(SessionType::RacePace.to_string(), "race_pace");
}

#[test]
fn test_valid_target_requires_positive_distance_or_duration() {
    assert!(spec(SessionType::Easy, 0, 5.0).has_valid_target());
    assert!(!spec(SessionType::Easy, 0, 0.0).has_valid_target());

    let mut duration_only = spec(SessionType::Easy, 0, 0.0);
    duration_only.target_distance_km = None;
    duration_only.target_duration_min = Some(30.0);
    assert!(duration_only.has_valid_target());
    assert!((duration_only.distance_or_zero()).abs() < f64::EPSILON);
}

#[test]
fn test_comparable_fields_exclude_bookkeeping() {
    let session = planned("s1", date(2025, 5, 5), SessionType::Long, 18.0);
    let names: Vec<&str> = session
        .comparable_fields()
        .into_iter()
        .map(|(name, _)| name)
        .collect();

    assert!(names.contains(&"distance"));
    assert!(names.contains(&"session_type"));
    assert!(!names.contains(&"revision"));
    assert!(!names.contains(&"updated_at"));
    assert!(!names.contains(&"id"));
    assert_eq!(session.revision, 1);
}

#[test]
fn test_error_codes_and_regeneration_hints() {
    let structural: CoachError = StructuralViolation::MissingDay { day: 2 }.into();
    let repair: CoachError = RepairImpossible {
        current_km: 30.0,
        target_km: 40.0,
        session_count: 3,
    }
    .into();
    let validation: CoachError = ValidationError::NoLongRun.into();

    assert_eq!(structural.code(), ErrorCode::StructuralViolation);
    assert_eq!(repair.code(), ErrorCode::RepairImpossible);
    assert_eq!(validation.code(), ErrorCode::ValidationFailed);
    assert!(structural.code().suggests_regeneration());
    assert!(!validation.code().suggests_regeneration());
    assert_eq!(
        structural.to_string(),
        "skeleton day 2 has no candidate session"
    );
}

#[test]
fn test_structural_violation_serializes_with_kind_tag() {
    let violation = StructuralViolation::SessionTypeMismatch {
        day: 3,
        expected: SessionType::Tempo,
        actual: SessionType::Easy,
    };
    let value = serde_json::to_value(&violation).unwrap();

    assert_eq!(value["kind"], "session_type_mismatch");
    assert_eq!(value["day"], 3);
    assert_eq!(value["expected"], "tempo");
    assert_eq!(json!(ErrorCode::RepairImpossible), json!("REPAIR_IMPOSSIBLE"));
}
