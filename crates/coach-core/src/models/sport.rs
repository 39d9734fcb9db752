// ABOUTME: Sport type enumeration for activities and planned sessions
// ABOUTME: Defines the closed set of supported sports with display and parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Enumeration of supported sport types
///
/// Ingestion collaborators map provider-specific sport names onto this set
/// before records reach the planning layer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SportType {
    /// Road or track running
    Run,
    /// Trail running
    TrailRun,
    /// Outdoor or indoor cycling
    Ride,
    /// Pool or open-water swimming
    Swim,
    /// Walking
    Walk,
    /// Hiking
    Hike,
    /// Strength and conditioning
    Strength,
    /// Any other cross-training modality
    CrossTraining,
}

impl SportType {
    /// Stable snake-case name used in diffs and cache keys
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Run => "run",
            Self::TrailRun => "trail_run",
            Self::Ride => "ride",
            Self::Swim => "swim",
            Self::Walk => "walk",
            Self::Hike => "hike",
            Self::Strength => "strength",
            Self::CrossTraining => "cross_training",
        }
    }
}

impl fmt::Display for SportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sport name outside the supported set
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown sport type: {0}")]
pub struct UnknownSportType(pub String);

impl FromStr for SportType {
    type Err = UnknownSportType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "run" | "running" => Ok(Self::Run),
            "trail_run" | "trailrun" | "trail" => Ok(Self::TrailRun),
            "ride" | "cycling" | "bike" => Ok(Self::Ride),
            "swim" | "swimming" => Ok(Self::Swim),
            "walk" | "walking" => Ok(Self::Walk),
            "hike" | "hiking" => Ok(Self::Hike),
            "strength" | "weight_training" => Ok(Self::Strength),
            "cross_training" | "crosstraining" => Ok(Self::CrossTraining),
            other => Err(UnknownSportType(other.to_owned())),
        }
    }
}
