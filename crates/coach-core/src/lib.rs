// ABOUTME: Core types and constants for the coach_guard plan invariant layer
// ABOUTME: Foundation crate with domain models, typed errors, and locked training constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Coach Core
//!
//! Foundation crate providing shared types and constants for the deterministic
//! training plan layer. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Typed failures (`StructuralViolation`, `RepairImpossible`, `ValidationError`)
//!   and the `CoachError` umbrella with stable error codes
//! - **constants**: Locked physiological and policy constants
//! - **models**: Activity records, session specifications, and closed session enums

/// Typed error handling with stable error codes
pub mod errors;

/// Locked domain constants organized by concern
pub mod constants;

/// Core data models (`ActivityRecord`, `SessionSpec`, `PlannedSession`, enums)
pub mod models;
