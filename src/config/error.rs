// ABOUTME: Configuration error types for coach_guard settings validation
// ABOUTME: Defines error variants for configuration values outside their allowed ranges
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration error types.
//!
//! Unparsable environment values fall back to defaults, so only range checks
//! produce errors.

use coach_core::errors::ErrorCode;
use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Value outside acceptable range (e.g., a fraction not between 0 and 1)
    #[error("Invalid range: {0}")]
    InvalidRange(&'static str),

    /// Numeric value outside valid range for parameter
    #[error("Value out of range: {0}")]
    ValueOutOfRange(&'static str),
}

impl ConfigError {
    /// Error code for configuration failures
    #[must_use]
    pub const fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidRange(_) | Self::ValueOutOfRange(_) => ErrorCode::ConfigInvalid,
        }
    }
}
