// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Locked training-load, week-structure, repair, and revision-policy constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Values here are locked domain constants. They are tuned against the coaching
//! product and must not be adjusted per deployment; operational knobs live in
//! `coach_guard::config` instead.

/// Training-load windows and per-activity load factors
pub mod training_load {
    /// Acute window: trailing days counted as short-term fatigue
    pub const ACUTE_WINDOW_DAYS: i64 = 7;

    /// Chronic window: trailing days counted as long-term fitness
    pub const CHRONIC_WINDOW_DAYS: i64 = 28;

    /// Chronic load is normalized to a weekly rate by this many weeks
    pub const CHRONIC_WINDOW_WEEKS: f64 = 4.0;

    /// Average heart rate is divided by this to form the load multiplier
    pub const HEART_RATE_LOAD_DIVISOR: f64 = 100.0;

    /// Load multiplier applied when no heart rate was recorded
    pub const NO_HEART_RATE_LOAD_FACTOR: f64 = 0.5;

    /// Minimum acute-window activities before a trend is reported
    pub const MIN_ACTIVITIES_FOR_TREND: usize = 4;

    /// Minimum acute-window activities before monotony is computed
    pub const MIN_ACTIVITIES_FOR_MONOTONY: usize = 3;
}

/// Heart rate boundaries for intensity classification (bpm)
pub mod heart_rate {
    /// Activities at or above this average are moderate
    pub const MODERATE_HR_THRESHOLD: u32 = 140;

    /// Activities at or above this average are hard
    pub const HARD_HR_THRESHOLD: u32 = 165;
}

/// Risk-flag triggers
pub mod risk {
    /// Monotony at or above this value raises `HIGH_MONOTONY`
    pub const HIGH_MONOTONY_THRESHOLD: f64 = 2.0;

    /// Acute load above this multiple of the prior chronic load raises `ACUTE_SPIKE`
    pub const ACUTE_SPIKE_RATIO: f64 = 1.5;

    /// Acute load above this multiple of chronic load raises `OVERREACHING`
    pub const OVERREACHING_RATIO: f64 = 1.2;
}

/// Recovery status and intent thresholds on training-stress balance
///
/// The label pairing (negative balance reads as "over", positive as "under") is
/// kept exactly as the coaching product defines it. Raise changes with the
/// domain owners rather than flipping the labels here.
pub mod recovery {
    /// TSB below this is labelled `over`
    pub const OVER_TSB_THRESHOLD: f64 = -20.0;

    /// TSB above this is labelled `under`
    pub const UNDER_TSB_THRESHOLD: f64 = 20.0;

    /// TSB above this recommends a build week when no risk flag is raised
    pub const BUILD_TSB_THRESHOLD: f64 = 10.0;
}

/// Readiness score formula: `75 + TSB/2 - min(monotony, 5) * 5`, clamped to 0..=100
pub mod readiness {
    /// Baseline readiness before adjustments
    pub const BASELINE: f64 = 75.0;

    /// TSB contribution divisor
    pub const TSB_DIVISOR: f64 = 2.0;

    /// Monotony is capped here (infinite monotony counts as the cap)
    pub const MONOTONY_CAP: f64 = 5.0;

    /// Readiness penalty per unit of capped monotony
    pub const MONOTONY_PENALTY: f64 = 5.0;

    /// Lowest readiness score
    pub const MIN_SCORE: f64 = 0.0;

    /// Highest readiness score
    pub const MAX_SCORE: f64 = 100.0;
}

/// Week scaffold placement rules
pub mod week_structure {
    /// Highest valid day-of-week index (0 = Monday, 6 = Sunday)
    pub const MAX_DAY_OF_WEEK: u8 = 6;

    /// Days preferred for quality sessions (Tuesday, Thursday)
    pub const PREFERRED_HARD_DAYS: [u8; 2] = [1, 3];
}

/// Volume repair tolerances
pub mod volume_repair {
    /// Weekly volume within this fraction of target needs no repair
    pub const DEFAULT_TOLERANCE: f64 = 0.05;

    /// Long sessions may move at most this fraction from their generated distance
    pub const LONG_RUN_CLAMP: f64 = 0.05;
}

/// Revision confidence penalties and approval policy
pub mod revision {
    /// Penalty for a revision spanning the whole plan
    pub const PLAN_SCOPE_PENALTY: f64 = 0.3;

    /// Penalty for a revision spanning one week
    pub const WEEK_SCOPE_PENALTY: f64 = 0.1;

    /// Penalty per removed session
    pub const REMOVED_SESSION_PENALTY: f64 = 0.2;

    /// Cap on the removed-session penalty
    pub const MAX_REMOVED_SESSION_PENALTY: f64 = 0.4;

    /// One-off penalty when any distance field changed
    pub const DISTANCE_CHANGE_PENALTY: f64 = 0.1;

    /// Penalty per field change beyond the first
    pub const EXTRA_FIELD_CHANGE_PENALTY: f64 = 0.05;

    /// Cap on the extra field change penalty
    pub const MAX_FIELD_CHANGE_PENALTY: f64 = 0.2;

    /// Confidence below this requires explicit approval
    pub const AUTO_APPLY_THRESHOLD: f64 = 0.5;

    /// Scores are rounded to this many parts per unit
    pub const SCORE_PRECISION: f64 = 1e9;

    /// Revision kinds containing any of these never auto-apply
    pub const ALWAYS_REVIEW_KEYWORDS: [&str; 2] = ["regenerate", "race"];
}

/// Session plan cache sizing
pub mod cache {
    /// Default number of memoized session plans
    pub const DEFAULT_PLAN_CACHE_ENTRIES: usize = 512;
}
