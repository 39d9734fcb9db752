// ABOUTME: Plan diff engine comparing two session snapshots by stable identifier
// ABOUTME: Produces added, removed, modified (with field triples), and unchanged session sets
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Plan diff engine
//!
//! Both snapshots are indexed by session identifier. Identifiers are reported in
//! ascending order; within a modified session, field changes follow the order of
//! `PlannedSession::comparable_fields`. If a snapshot repeats an identifier the
//! last occurrence wins.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use coach_core::models::{PlannedSession, SessionType};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

/// Span a revision covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiffScope {
    /// A single day
    Day,
    /// One week
    Week,
    /// The whole plan
    Plan,
}

/// One changed field on a session present in both snapshots
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionFieldChange {
    /// Field name (e.g. `distance`, `session_type`)
    pub field: String,
    /// Value in the prior snapshot
    pub before: Value,
    /// Value in the proposed snapshot
    pub after: Value,
}

/// Summary of an added or removed session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionSummary {
    /// Session identifier
    pub session_id: String,
    /// Scheduled date
    pub date: NaiveDate,
    /// Session type
    pub session_type: SessionType,
    /// Display title
    pub title: String,
}

impl From<&PlannedSession> for SessionSummary {
    fn from(session: &PlannedSession) -> Self {
        Self {
            session_id: session.id.clone(),
            date: session.date,
            session_type: session.spec.session_type,
            title: session.title.clone(),
        }
    }
}

/// A session present in both snapshots with at least one changed field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionDiffEntry {
    /// Session identifier
    pub session_id: String,
    /// Date in the proposed snapshot
    pub date: NaiveDate,
    /// Title in the proposed snapshot
    pub title: String,
    /// Changed fields
    pub changes: Vec<SessionFieldChange>,
}

/// Structured difference between two plan snapshots
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanDiff {
    /// Scope supplied by the caller
    pub scope: DiffScope,
    /// Sessions only in the proposed snapshot
    pub added: Vec<SessionSummary>,
    /// Sessions only in the prior snapshot
    pub removed: Vec<SessionSummary>,
    /// Sessions in both with changed fields
    pub modified: Vec<SessionDiffEntry>,
    /// Identifiers of sessions in both with no changed field
    pub unchanged: Vec<String>,
}

impl PlanDiff {
    /// No session was added, removed, or modified
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.modified.is_empty()
    }

    /// Field changes across all modified sessions
    #[must_use]
    pub fn total_field_changes(&self) -> usize {
        self.modified.iter().map(|entry| entry.changes.len()).sum()
    }

    /// Distinct session identifiers across both snapshots
    #[must_use]
    pub fn session_count(&self) -> usize {
        self.added.len() + self.removed.len() + self.modified.len() + self.unchanged.len()
    }

    /// Whether any changed field name contains `name`, ignoring case
    #[must_use]
    pub fn touches_field(&self, name: &str) -> bool {
        let needle = name.to_lowercase();
        self.modified
            .iter()
            .flat_map(|entry| &entry.changes)
            .any(|change| change.field.to_lowercase().contains(&needle))
    }
}

/// Pure comparison of two plan snapshots
#[derive(Debug, Clone, Copy, Default)]
pub struct PlanDiffEngine;

impl PlanDiffEngine {
    /// Diff `before` against `after`
    ///
    /// Every identifier from either snapshot lands in exactly one of added,
    /// removed, modified, or unchanged. `scope` is passed through untouched.
    #[must_use]
    pub fn diff(before: &[PlannedSession], after: &[PlannedSession], scope: DiffScope) -> PlanDiff {
        let before_index = Self::index(before);
        let after_index = Self::index(after);

        let added = after_index
            .iter()
            .filter(|(id, _)| !before_index.contains_key(*id))
            .map(|(_, session)| SessionSummary::from(*session))
            .collect();

        let mut removed = Vec::new();
        let mut modified = Vec::new();
        let mut unchanged = Vec::new();

        for (id, prior) in &before_index {
            let Some(proposed) = after_index.get(id) else {
                removed.push(SessionSummary::from(*prior));
                continue;
            };
            let changes = Self::compare_sessions(prior, proposed);
            if changes.is_empty() {
                unchanged.push((*id).to_owned());
            } else {
                modified.push(SessionDiffEntry {
                    session_id: (*id).to_owned(),
                    date: proposed.date,
                    title: proposed.title.clone(),
                    changes,
                });
            }
        }

        let diff = PlanDiff {
            scope,
            added,
            removed,
            modified,
            unchanged,
        };
        debug!(
            ?scope,
            added = diff.added.len(),
            removed = diff.removed.len(),
            modified = diff.modified.len(),
            unchanged = diff.unchanged.len(),
            "computed plan diff"
        );
        diff
    }

    /// Changed fields between two versions of the same session
    #[must_use]
    pub fn compare_sessions(
        before: &PlannedSession,
        after: &PlannedSession,
    ) -> Vec<SessionFieldChange> {
        before
            .comparable_fields()
            .into_iter()
            .zip(after.comparable_fields())
            .filter(|((_, prior), (_, proposed))| prior != proposed)
            .map(|((field, prior), (_, proposed))| SessionFieldChange {
                field: field.to_owned(),
                before: prior,
                after: proposed,
            })
            .collect()
    }

    fn index(sessions: &[PlannedSession]) -> BTreeMap<&str, &PlannedSession> {
        sessions
            .iter()
            .map(|session| (session.id.as_str(), session))
            .collect()
    }
}
