// ABOUTME: Deterministic planning algorithms: training state, week structure, repair, diff, confidence
// ABOUTME: Re-exports the five pure components that guard generated training plans
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! Pure, synchronous computations with no I/O and no shared state. Every
//! function here is safe to call from any number of threads at once.

/// Fatigue/fitness snapshot from activity history
pub mod training_state;
/// Locked week skeletons and structural validation
pub mod week_structure;
/// Local weekly volume correction
pub mod volume_repair;
/// Session-level diff between plan snapshots
pub mod plan_diff;
/// Revision scoring and approval gate
pub mod revision_confidence;

pub use plan_diff::{
    DiffScope, PlanDiff, PlanDiffEngine, SessionDiffEntry, SessionFieldChange, SessionSummary,
};
pub use revision_confidence::{requires_approval, RevisionConfidence, RevisionConfidenceScorer};
pub use training_state::{
    IntensityDistribution, LoadTrend, RecoveryStatus, RiskFlag, TrainingIntent,
    TrainingStateModel, TrainingStateSnapshot,
};
pub use volume_repair::{compute_total_distance, within_tolerance, VolumeRepairEngine};
pub use week_structure::{WeekSkeleton, WeekStructurePlanner};
