// ABOUTME: Revision confidence scorer turning a plan diff into an auto-apply decision
// ABOUTME: Penalizes scope, removals, distance edits, and change count; gates risky revision kinds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Revision confidence scoring
//!
//! Score starts at 1.0 and loses:
//! - 0.3 for plan scope, 0.1 for week scope
//! - 0.2 per removed session, at most 0.4
//! - 0.1 once if any changed field is a distance
//! - 0.05 per field change beyond the first, at most 0.2
//!
//! Revision kinds mentioning "regenerate" or "race" always need approval.

use coach_core::constants::revision::{
    ALWAYS_REVIEW_KEYWORDS, AUTO_APPLY_THRESHOLD, DISTANCE_CHANGE_PENALTY,
    EXTRA_FIELD_CHANGE_PENALTY, MAX_FIELD_CHANGE_PENALTY, MAX_REMOVED_SESSION_PENALTY,
    PLAN_SCOPE_PENALTY, REMOVED_SESSION_PENALTY, SCORE_PRECISION, WEEK_SCOPE_PENALTY,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::plan_diff::{DiffScope, PlanDiff};
use crate::config::ApprovalConfig;

/// Score and approval verdict for a proposed revision
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RevisionConfidence {
    /// Confidence in [0.0, 1.0]
    pub score: f64,
    /// Whether a human must approve before the revision applies
    pub requires_approval: bool,
}

/// Deterministic scorer and approval gate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevisionConfidenceScorer {
    auto_apply_threshold: f64,
}

impl Default for RevisionConfidenceScorer {
    fn default() -> Self {
        Self::new()
    }
}

impl RevisionConfidenceScorer {
    /// Scorer with the standard 0.5 auto-apply threshold
    #[must_use]
    pub const fn new() -> Self {
        Self {
            auto_apply_threshold: AUTO_APPLY_THRESHOLD,
        }
    }

    /// Scorer with a configured threshold
    #[must_use]
    pub const fn from_config(config: &ApprovalConfig) -> Self {
        Self {
            auto_apply_threshold: config.auto_apply_threshold,
        }
    }

    /// Confidence that `diff` is safe to apply without review
    ///
    /// Rounded to nine decimal places.
    #[must_use]
    pub fn score(diff: &PlanDiff) -> f64 {
        let scope_penalty = match diff.scope {
            DiffScope::Plan => PLAN_SCOPE_PENALTY,
            DiffScope::Week => WEEK_SCOPE_PENALTY,
            DiffScope::Day => 0.0,
        };
        let removed_penalty =
            (diff.removed.len() as f64 * REMOVED_SESSION_PENALTY).min(MAX_REMOVED_SESSION_PENALTY);
        let distance_penalty = if diff.touches_field("distance") {
            DISTANCE_CHANGE_PENALTY
        } else {
            0.0
        };
        let total_changes = diff.total_field_changes();
        let change_penalty = if total_changes > 1 {
            ((total_changes - 1) as f64 * EXTRA_FIELD_CHANGE_PENALTY).min(MAX_FIELD_CHANGE_PENALTY)
        } else {
            0.0
        };

        let raw = 1.0 - scope_penalty - removed_penalty - distance_penalty - change_penalty;
        // Decimal penalty sums must compare exactly against the threshold
        let score = (raw.clamp(0.0, 1.0) * SCORE_PRECISION).round() / SCORE_PRECISION;
        debug!(
            scope = ?diff.scope,
            removed = diff.removed.len(),
            total_changes,
            score,
            "scored plan revision"
        );
        score
    }

    /// Whether a revision of `revision_kind` with `confidence` needs approval
    #[must_use]
    pub fn requires_approval(&self, revision_kind: &str, confidence: Option<f64>) -> bool {
        let kind = revision_kind.to_lowercase();
        if ALWAYS_REVIEW_KEYWORDS
            .iter()
            .any(|keyword| kind.contains(keyword))
        {
            info!(revision_kind, "revision kind always requires approval");
            return true;
        }
        match confidence {
            Some(score) if score.is_finite() => score < self.auto_apply_threshold,
            _ => true,
        }
    }

    /// Score `diff` and decide approval in one step
    #[must_use]
    pub fn evaluate(&self, diff: &PlanDiff, revision_kind: &str) -> RevisionConfidence {
        let score = Self::score(diff);
        RevisionConfidence {
            score,
            requires_approval: self.requires_approval(revision_kind, Some(score)),
        }
    }
}

/// Approval gate with the standard threshold
///
/// ```
/// use coach_guard::intelligence::revision_confidence::requires_approval;
///
/// assert!(requires_approval("regenerate_plan", Some(0.95)));
/// assert!(!requires_approval("modify_day", Some(0.6)));
/// assert!(requires_approval("modify_week", Some(0.4)));
/// ```
#[must_use]
pub fn requires_approval(revision_kind: &str, confidence: Option<f64>) -> bool {
    RevisionConfidenceScorer::new().requires_approval(revision_kind, confidence)
}
