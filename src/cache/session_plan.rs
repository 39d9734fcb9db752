// ABOUTME: Bounded LRU cache for generated session plans keyed by structural digest
// ABOUTME: Owned by one caller-visible object, mutex-guarded, shareable through Arc
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use coach_core::constants::cache::DEFAULT_PLAN_CACHE_ENTRIES;
use coach_core::models::SessionSpec;
use lru::LruCache;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::SessionCacheKey;
use crate::config::CacheConfig;

/// Memoized session plans
///
/// Values are whatever the caller derives from a `SessionSpec` (typically the
/// generator's detailed workout). Two specs with equal generation fields share
/// an entry. Least-recently-used entries are evicted once `max_entries` is hit.
///
/// # Thread Safety
///
/// All access goes through one `Mutex`; share the cache with `Arc`. A poisoned
/// lock degrades every call to a miss and skips writes.
#[derive(Debug)]
pub struct SessionPlanCache<V> {
    store: Mutex<LruCache<SessionCacheKey, V>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

/// Cache counters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheStats {
    /// Entries currently stored
    pub entries: usize,
    /// Maximum entries before eviction
    pub capacity: usize,
    /// Lookups that found an entry
    pub hits: u64,
    /// Lookups that found nothing
    pub misses: u64,
}

impl<V: Clone> SessionPlanCache<V> {
    /// Fallback capacity when the configured size is zero
    const DEFAULT_CAPACITY: NonZeroUsize = match NonZeroUsize::new(DEFAULT_PLAN_CACHE_ENTRIES) {
        Some(n) => n,
        None => unreachable!(),
    };

    /// Create a cache sized from configuration
    #[must_use]
    pub fn new(config: &CacheConfig) -> Self {
        let capacity = NonZeroUsize::new(config.max_entries).unwrap_or(Self::DEFAULT_CAPACITY);
        Self {
            store: Mutex::new(LruCache::new(capacity)),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Cached value for `spec`
    #[must_use]
    pub fn get(&self, spec: &SessionSpec) -> Option<V> {
        self.get_by_key(&SessionCacheKey::from_spec(spec))
    }

    /// Cached value for a precomputed key
    #[must_use]
    pub fn get_by_key(&self, key: &SessionCacheKey) -> Option<V> {
        let found = self
            .store
            .lock()
            .ok()
            .and_then(|mut store| store.get(key).cloned());
        if found.is_some() {
            self.hits.fetch_add(1, Ordering::Relaxed);
            trace!(key = key.as_str(), "session plan cache hit");
        } else {
            self.misses.fetch_add(1, Ordering::Relaxed);
            trace!(key = key.as_str(), "session plan cache miss");
        }
        found
    }

    /// Store `value` for `spec`, replacing any previous entry
    pub fn insert(&self, spec: &SessionSpec, value: V) {
        let key = SessionCacheKey::from_spec(spec);
        let Ok(mut store) = self.store.lock() else {
            // Lock poisoned - skip insertion, cache is non-critical
            return;
        };
        if let Some((evicted, _)) = store.push(key.clone(), value) {
            if evicted != key {
                debug!(evicted = evicted.as_str(), "evicted least recently used session plan");
            }
        }
    }

    /// Cached value for `spec`, or compute, store, and return it
    ///
    /// `produce` runs without the lock held.
    pub fn get_or_insert_with<F>(&self, spec: &SessionSpec, produce: F) -> V
    where
        F: FnOnce(&SessionSpec) -> V,
    {
        if let Some(value) = self.get(spec) {
            return value;
        }
        let value = produce(spec);
        self.insert(spec, value.clone());
        value
    }

    /// Remove the entry for `spec`; returns whether one existed
    pub fn invalidate(&self, spec: &SessionSpec) -> bool {
        let key = SessionCacheKey::from_spec(spec);
        self.store
            .lock()
            .is_ok_and(|mut store| store.pop(&key).is_some())
    }

    /// Drop every entry
    pub fn clear(&self) {
        if let Ok(mut store) = self.store.lock() {
            store.clear();
        }
    }

    /// Number of stored entries (zero if the lock is poisoned)
    #[must_use]
    pub fn len(&self) -> usize {
        self.store.lock().map_or(0, |store| store.len())
    }

    /// Whether the cache is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Current counters
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        let (entries, capacity) = self
            .store
            .lock()
            .map_or((0, 0), |store| (store.len(), store.cap().get()));
        CacheStats {
            entries,
            capacity,
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }
}

/// Thread-safe handle to a session plan cache
pub type SharedSessionPlanCache<V> = Arc<SessionPlanCache<V>>;

/// Create a shared cache sized from configuration
#[must_use]
pub fn create_shared_cache<V: Clone>(config: &CacheConfig) -> SharedSessionPlanCache<V> {
    Arc::new(SessionPlanCache::new(config))
}
