// ABOUTME: Core data models for the training plan invariant layer
// ABOUTME: Re-exports ActivityRecord, SessionSpec, PlannedSession and session enums
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! - `ActivityRecord`: one completed activity, read-only input to the state model
//! - `SessionSpec`: one prescribed session as returned by the plan generator
//! - `PlannedSession`: a stored session with a stable identifier, used for diffs
//! - `SportType`, `SessionType`, `IntensityLevel`, `TrainingPhase`: closed enums

mod activity;
mod session;
mod sport;

pub use activity::ActivityRecord;
pub use session::{IntensityLevel, PlannedSession, SessionSpec, SessionType, TrainingPhase};
pub use sport::{SportType, UnknownSportType};
