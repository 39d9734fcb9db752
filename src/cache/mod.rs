// ABOUTME: Session plan memoization keyed by a SHA-256 digest of the generation fields
// ABOUTME: Exposes the cache key type and the bounded LRU session plan cache
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Bounded LRU cache of generated session plans
pub mod session_plan;

use std::fmt;

use coach_core::models::SessionSpec;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

pub use session_plan::{create_shared_cache, CacheStats, SessionPlanCache, SharedSessionPlanCache};

/// Structural digest of the `SessionSpec` fields that drive session generation
///
/// Notes are excluded since they are generator output rather than input.
/// Strings are length-prefixed and optional values carry a presence tag so
/// distinct specs cannot collide by concatenation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionCacheKey(String);

impl SessionCacheKey {
    /// Digest the generation fields of `spec`
    #[must_use]
    pub fn from_spec(spec: &SessionSpec) -> Self {
        let mut hasher = Sha256::new();
        update_str(&mut hasher, spec.sport.as_str());
        update_str(&mut hasher, spec.session_type.as_str());
        update_str(&mut hasher, spec.intensity.as_str());
        update_optional_f64(&mut hasher, spec.target_distance_km);
        update_optional_f64(&mut hasher, spec.target_duration_min);
        update_str(&mut hasher, &spec.goal);
        update_str(&mut hasher, spec.phase.as_str());
        hasher.update(spec.week_number.to_le_bytes());
        hasher.update([spec.day_of_week]);
        Self(hex::encode(hasher.finalize()))
    }

    /// Hex-encoded digest
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SessionCacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn update_str(hasher: &mut Sha256, value: &str) {
    hasher.update((value.len() as u64).to_le_bytes());
    hasher.update(value.as_bytes());
}

fn update_optional_f64(hasher: &mut Sha256, value: Option<f64>) {
    match value {
        Some(v) => {
            hasher.update([1]);
            hasher.update(v.to_bits().to_le_bytes());
        }
        None => hasher.update([0]),
    }
}
