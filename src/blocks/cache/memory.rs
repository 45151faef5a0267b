// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Bounded in-memory LRU store

use lru::LruCache;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::debug;

use super::CacheStats;
use crate::types::config::{CacheCapacity, Confirmations};

/// Entry in the store with admission metadata
#[derive(Debug)]
struct CacheEntry<V> {
    /// The cached value, shared with readers
    value: Arc<V>,
    /// Confirmations the block had when it was admitted
    admitted_with: Confirmations,
}

#[derive(Debug)]
struct LruState<V> {
    entries: LruCache<String, CacheEntry<V>>,
    stats: CacheStats,
}

/// Bounded LRU store keyed by block hash
///
/// A single async mutex guards the recency list, so concurrent readers and
/// writers never observe a half-updated structure. Every write is one
/// replace-or-insert under that lock.
///
/// # Performance
///
/// - Get: O(1) (also promotes the entry to most recently used)
/// - Insert: O(1), evicting the least recently used entry when full
#[derive(Debug)]
pub struct LruStore<V> {
    name: &'static str,
    capacity: CacheCapacity,
    state: Mutex<LruState<V>>,
}

impl<V> LruStore<V> {
    pub fn new(name: &'static str, capacity: CacheCapacity) -> Self {
        Self {
            name,
            capacity,
            state: Mutex::new(LruState {
                entries: LruCache::new(capacity.as_non_zero()),
                stats: CacheStats::default(),
            }),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn capacity(&self) -> CacheCapacity {
        self.capacity
    }

    /// Look up a value, promoting it to most recently used
    pub async fn get(&self, key: &str) -> Option<Arc<V>> {
        let mut state = self.state.lock().await;

        let value = state.entries.get(key).map(|entry| Arc::clone(&entry.value));
        if value.is_some() {
            state.stats.hits += 1;
            debug!(key, cache = self.name, "Cache hit");
        } else {
            state.stats.misses += 1;
            debug!(key, cache = self.name, "Cache miss");
        }
        value
    }

    /// Confirmations recorded when `key` was admitted, without touching recency
    pub async fn admitted_with(&self, key: &str) -> Option<Confirmations> {
        let state = self.state.lock().await;
        state.entries.peek(key).map(|entry| entry.admitted_with)
    }

    /// Insert or replace a value
    pub async fn insert(&self, key: String, value: Arc<V>, admitted_with: Confirmations) {
        let mut state = self.state.lock().await;

        let entry = CacheEntry {
            value,
            admitted_with,
        };
        if let Some((displaced, _)) = state.entries.push(key.clone(), entry) {
            if displaced != key {
                debug!(key = %displaced, cache = self.name, "Evicting LRU cache entry");
                state.stats.evictions += 1;
            }
        }
        state.stats.entries = state.entries.len();
    }

    pub async fn clear(&self) {
        let mut state = self.state.lock().await;
        debug!(entries = state.entries.len(), cache = self.name, "Clearing cache");
        state.entries.clear();
        state.stats.entries = 0;
    }

    pub async fn len(&self) -> usize {
        self.state.lock().await.entries.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    pub async fn stats(&self) -> CacheStats {
        self.state.lock().await.stats.clone()
    }
}
