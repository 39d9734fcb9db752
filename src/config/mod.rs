// ABOUTME: Configuration for repair tolerances, approval policy, and plan cache sizing
// ABOUTME: Environment-driven settings with locked defaults and range validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module
//!
//! Only operational knobs are configurable here. Physiological constants
//! (load windows, heart rate zones, readiness formula) are locked in
//! `coach_core::constants`.
//!
//! | Variable | Default |
//! |----------|---------|
//! | `COACH_REPAIR_TOLERANCE` | 0.05 |
//! | `COACH_LONG_RUN_CLAMP` | 0.05 |
//! | `COACH_AUTO_APPLY_THRESHOLD` | 0.5 |
//! | `COACH_PLAN_CACHE_MAX_ENTRIES` | 512 |

mod error;

pub use error::ConfigError;

use std::env;
use std::str::FromStr;

use coach_core::constants::{
    cache::DEFAULT_PLAN_CACHE_ENTRIES,
    revision::AUTO_APPLY_THRESHOLD,
    volume_repair::{DEFAULT_TOLERANCE, LONG_RUN_CLAMP},
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Top-level configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CoachConfig {
    /// Volume repair tolerances
    pub repair: RepairConfig,
    /// Revision approval policy
    pub approval: ApprovalConfig,
    /// Session plan cache sizing
    pub cache: CacheConfig,
}

/// Volume repair tolerances
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RepairConfig {
    /// Fractional deviation from target treated as already repaired
    pub tolerance: f64,
    /// Fractional band long sessions must stay within
    pub long_run_clamp: f64,
}

impl Default for RepairConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            long_run_clamp: LONG_RUN_CLAMP,
        }
    }
}

/// Revision approval policy
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ApprovalConfig {
    /// Confidence at or above this auto-applies (unless the kind always needs review)
    pub auto_apply_threshold: f64,
}

impl Default for ApprovalConfig {
    fn default() -> Self {
        Self {
            auto_apply_threshold: AUTO_APPLY_THRESHOLD,
        }
    }
}

/// Session plan cache sizing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheConfig {
    /// Maximum memoized session plans before LRU eviction
    pub max_entries: usize,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            max_entries: DEFAULT_PLAN_CACHE_ENTRIES,
        }
    }
}

fn env_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

impl CoachConfig {
    /// Load configuration from environment, using defaults for absent or unparsable values
    #[must_use]
    pub fn from_env() -> Self {
        let config = Self {
            repair: RepairConfig {
                tolerance: env_or("COACH_REPAIR_TOLERANCE", DEFAULT_TOLERANCE),
                long_run_clamp: env_or("COACH_LONG_RUN_CLAMP", LONG_RUN_CLAMP),
            },
            approval: ApprovalConfig {
                auto_apply_threshold: env_or("COACH_AUTO_APPLY_THRESHOLD", AUTO_APPLY_THRESHOLD),
            },
            cache: CacheConfig {
                max_entries: env_or("COACH_PLAN_CACHE_MAX_ENTRIES", DEFAULT_PLAN_CACHE_ENTRIES),
            },
        };
        debug!(?config, "coach configuration read from environment");
        config
    }

    /// Load from environment and validate
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if any value is out of range
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::from_env();
        config.validate()?;
        info!(
            repair_tolerance = config.repair.tolerance,
            long_run_clamp = config.repair.long_run_clamp,
            auto_apply_threshold = config.approval.auto_apply_threshold,
            plan_cache_entries = config.cache.max_entries,
            "coach configuration loaded"
        );
        Ok(config)
    }

    /// Check every value is within its allowed range
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` naming the first offending value
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..1.0).contains(&self.repair.tolerance) {
            return Err(ConfigError::ValueOutOfRange(
                "repair tolerance must be in [0.0, 1.0)",
            ));
        }
        if !(0.0..1.0).contains(&self.repair.long_run_clamp) {
            return Err(ConfigError::ValueOutOfRange(
                "long run clamp must be in [0.0, 1.0)",
            ));
        }
        if !(0.0..=1.0).contains(&self.approval.auto_apply_threshold) {
            return Err(ConfigError::InvalidRange(
                "auto apply threshold must be in [0.0, 1.0]",
            ));
        }
        if self.cache.max_entries == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "plan cache must hold at least one entry",
            ));
        }
        Ok(())
    }
}
