// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Block caches
//!
//! Two independent bounded LRU stores keyed by block hash:
//!
//! - full [`BlockDetail`] objects (default capacity 1000)
//! - lightweight [`BlockSummary`] objects (default capacity 1,000,000)
//!
//! A block is only admitted once it has at least the configured number of
//! confirmations, never fewer than 6. Blocks inside that reorganization
//! window are always read fresh from the node.
//!
//! # Examples
//!
//! ```rust,ignore
//! use blockscan::{BlockCache, ExplorerConfig};
//!
//! let cache = BlockCache::from_config(&ExplorerConfig::default());
//! let admitted = cache.admit_block(&hash, Arc::new(block), confirmations).await;
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tracing::debug;

use crate::config::ExplorerConfig;
use crate::types::block::{BlockDetail, BlockSummary};
use crate::types::config::{CacheCapacity, Confirmations};

mod memory;

pub use memory::LruStore;

/// Statistics about cache performance
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheStats {
    /// Number of cache hits (successful retrievals)
    pub hits: u64,
    /// Number of cache misses (key not found)
    pub misses: u64,
    /// Number of entries evicted due to size limits
    pub evictions: u64,
    /// Current number of entries in the cache
    pub entries: usize,
}

impl CacheStats {
    /// Calculates the cache hit rate as a percentage (0.0 to 100.0)
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            (self.hits as f64 / total as f64) * 100.0
        }
    }
}

impl fmt::Display for CacheStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hits={}, misses={}, evictions={}, entries={}, hit_rate={:.1}%",
            self.hits,
            self.misses,
            self.evictions,
            self.entries,
            self.hit_rate()
        )
    }
}

/// The full-block and summary caches with their admission rule
#[derive(Debug)]
pub struct BlockCache {
    blocks: LruStore<BlockDetail>,
    summaries: LruStore<BlockSummary>,
    min_confirmations: Confirmations,
}

impl BlockCache {
    /// Thresholds below [`Confirmations::REORG_SAFE`] are raised to it
    pub fn new(
        block_capacity: CacheCapacity,
        summary_capacity: CacheCapacity,
        min_confirmations: Confirmations,
    ) -> Self {
        Self {
            blocks: LruStore::new("blocks", block_capacity),
            summaries: LruStore::new("block_summaries", summary_capacity),
            min_confirmations: min_confirmations.max(Confirmations::REORG_SAFE),
        }
    }

    pub fn from_config(config: &ExplorerConfig) -> Self {
        Self::new(
            config.block_cache_capacity,
            config.summary_cache_capacity,
            config.cache_min_confirmations,
        )
    }

    /// Confirmations required for admission
    pub fn min_confirmations(&self) -> Confirmations {
        self.min_confirmations
    }

    /// Whether a block with this many confirmations may be cached
    pub fn admits(&self, confirmations: Confirmations) -> bool {
        confirmations >= self.min_confirmations
    }

    pub async fn get_block(&self, hash: &str) -> Option<Arc<BlockDetail>> {
        self.blocks.get(hash).await
    }

    /// Cache a block if it is outside the reorganization window
    ///
    /// Returns whether the block was admitted.
    pub async fn admit_block(
        &self,
        hash: &str,
        block: Arc<BlockDetail>,
        confirmations: Confirmations,
    ) -> bool {
        if !self.admits(confirmations) {
            debug!(hash, confirmations = %confirmations, "Block too recent to cache");
            return false;
        }
        self.blocks.insert(hash.to_string(), block, confirmations).await;
        true
    }

    pub async fn get_summary(&self, hash: &str) -> Option<Arc<BlockSummary>> {
        self.summaries.get(hash).await
    }

    /// Cache a summary if its block is outside the reorganization window
    ///
    /// Returns whether the summary was admitted.
    pub async fn admit_summary(
        &self,
        hash: &str,
        summary: Arc<BlockSummary>,
        confirmations: Confirmations,
    ) -> bool {
        if !self.admits(confirmations) {
            debug!(hash, confirmations = %confirmations, "Block summary too recent to cache");
            return false;
        }
        self.summaries
            .insert(hash.to_string(), summary, confirmations)
            .await;
        true
    }

    /// Confirmations recorded when `hash` entered the block cache
    pub async fn block_admitted_with(&self, hash: &str) -> Option<Confirmations> {
        self.blocks.admitted_with(hash).await
    }

    /// Confirmations recorded when `hash` entered the summary cache
    pub async fn summary_admitted_with(&self, hash: &str) -> Option<Confirmations> {
        self.summaries.admitted_with(hash).await
    }

    pub async fn block_stats(&self) -> CacheStats {
        self.blocks.stats().await
    }

    pub async fn summary_stats(&self) -> CacheStats {
        self.summaries.stats().await
    }

    pub async fn clear(&self) {
        self.blocks.clear().await;
        self.summaries.clear().await;
    }
}
