// ABOUTME: Unified error handling for the plan invariant layer
// ABOUTME: Defines CoachError, stable ErrorCode values, and the CoachResult alias
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Error Types
//!
//! Every expected failure is a typed value. Callers match on the specific type
//! (`StructuralViolation`, `RepairImpossible`, `ValidationError`) or on the
//! `CoachError` umbrella when a pipeline can fail in more than one way. None of
//! these are retried internally; regeneration policy belongs to the caller.

mod plan;

pub use plan::{RepairImpossible, StructuralViolation, ValidationError};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stable error codes for callers that persist or forward failures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    /// Generator output broke the locked week skeleton
    #[serde(rename = "STRUCTURAL_VIOLATION")]
    StructuralViolation = 3100,
    /// Volume could not be repaired locally
    #[serde(rename = "REPAIR_IMPOSSIBLE")]
    RepairImpossible = 3101,
    /// Week failed structural or volume validation
    #[serde(rename = "VALIDATION_FAILED")]
    ValidationFailed = 3102,
    /// Configuration value was rejected
    #[serde(rename = "CONFIG_INVALID")]
    ConfigInvalid = 6002,
}

impl ErrorCode {
    /// Short description of the failure class
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::StructuralViolation => "Generated sessions do not match the locked week structure",
            Self::RepairImpossible => "No adjustable session is available to correct weekly volume",
            Self::ValidationFailed => "The week failed structural or volume validation",
            Self::ConfigInvalid => "A configuration value is invalid",
        }
    }

    /// Whether a caller should ask the generator for a new week
    #[must_use]
    pub const fn suggests_regeneration(&self) -> bool {
        matches!(self, Self::StructuralViolation | Self::RepairImpossible)
    }
}

/// Umbrella error for multi-step pipelines
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CoachError {
    /// Skeleton mismatch
    #[error(transparent)]
    Structure(#[from] StructuralViolation),
    /// Volume repair not possible
    #[error(transparent)]
    Repair(#[from] RepairImpossible),
    /// Week validation failure
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl CoachError {
    /// Error code for this failure
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::Structure(_) => ErrorCode::StructuralViolation,
            Self::Repair(_) => ErrorCode::RepairImpossible,
            Self::Validation(_) => ErrorCode::ValidationFailed,
        }
    }
}

/// Result alias for multi-step pipelines
pub type CoachResult<T> = Result<T, CoachError>;
