// ABOUTME: Main library entry point for the deterministic training plan guard
// ABOUTME: Wraps an LLM plan generator with load modeling, structure locks, repair, and review gating
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Coach Guard
//!
//! Deterministic guardrails around a language-model training plan generator.
//! The generator proposes sessions; this crate decides what the week looks
//! like, fixes weekly volume, and judges whether a revision may be applied
//! without a human.
//!
//! ## Pipeline
//!
//! 1. `TrainingStateModel::compute` summarizes recent activities into fatigue,
//!    fitness, risk flags, and a recommended intent.
//! 2. `WeekStructurePlanner::generate_skeleton` locks the day to session-type
//!    mapping before the generator runs.
//! 3. Generator output is checked with `validate_against_skeleton`, then
//!    `VolumeRepairEngine::repair` brings the week back to its volume target.
//! 4. Edits to a stored plan go through `PlanDiffEngine::diff` and
//!    `RevisionConfidenceScorer::evaluate` before they are applied.
//!
//! ## Example
//!
//! ```rust
//! use coach_guard::intelligence::WeekStructurePlanner;
//! use coach_guard::models::SessionType;
//!
//! # fn main() -> Result<(), coach_guard::errors::ValidationError> {
//! let skeleton = WeekStructurePlanner::generate_skeleton(&[1, 3, 5, 6], 1)?;
//! assert_eq!(skeleton.required_type(6), Some(SessionType::Long));
//! assert_eq!(skeleton.required_type(1), Some(SessionType::Tempo));
//! assert_eq!(skeleton.required_type(5), Some(SessionType::Easy));
//! # Ok(())
//! # }
//! ```

/// Memoized session plans behind a bounded LRU
pub mod cache;

/// Operational configuration loaded from the environment
pub mod config;

/// Planning algorithms
pub mod intelligence;

/// Tracing subscriber setup
pub mod logging;

pub use coach_core::{constants, errors, models};
