// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Block resolution against the node and the block caches
//!
//! [`BlockResolver`] turns node responses into cached, confirmation-aware,
//! reward-annotated block objects.
//!
//! # Examples
//!
//! ```rust,ignore
//! use blockscan::{BlockResolver, ExplorerConfig, PoolAttributor};
//! use std::sync::Arc;
//!
//! let pools = Arc::new(PoolAttributor::from_file("pools.json").await?);
//! let resolver = BlockResolver::from_config(node, &ExplorerConfig::default(), pools);
//!
//! let block = resolver.resolve_block(&hash).await?;
//! println!("{} reward={} pool={:?}", block.height, block.reward, block.pool_info.pool_name);
//! ```

use std::sync::Arc;
use tracing::{debug, info, Instrument};

use crate::blocks::cache::{BlockCache, CacheStats};
use crate::blocks::raw::read_block_prefix;
use crate::blocks::transform::{build_summary, normalize_prev_hash, transform_block};
use crate::config::constants::explorer::{BLOCK_HASH_HEX_LEN, HEADER_BATCH_SIZE};
use crate::config::ExplorerConfig;
use crate::errors::BlockError;
use crate::node::NodeClient;
use crate::pools::PoolAttributor;
use crate::reward::RewardCalculator;
use crate::tracing::spans;
use crate::types::block::{
    BlockDetail, BlockIndex, BlockRef, BlockSummary, HeaderInfo, RawBlockHex,
};
use crate::types::config::Confirmations;

/// Resolves blocks, summaries and headers, serving from and filling the caches
///
/// Concurrent resolutions of the same hash may both reach the node; the
/// last one to finish wins the cache slot. Cached objects are never mutated.
pub struct BlockResolver<N> {
    node: N,
    cache: BlockCache,
    rewards: RewardCalculator,
    pools: Arc<PoolAttributor>,
    header_batch_size: usize,
}

impl<N: NodeClient> BlockResolver<N> {
    pub fn new(
        node: N,
        cache: BlockCache,
        rewards: RewardCalculator,
        pools: Arc<PoolAttributor>,
    ) -> Self {
        Self {
            node,
            cache,
            rewards,
            pools,
            header_batch_size: HEADER_BATCH_SIZE,
        }
    }

    /// Build a resolver with caches and reward table derived from `config`
    pub fn from_config(node: N, config: &ExplorerConfig, pools: Arc<PoolAttributor>) -> Self {
        Self {
            header_batch_size: config.header_batch_size,
            ..Self::new(
                node,
                BlockCache::from_config(config),
                RewardCalculator::from_config(config),
                pools,
            )
        }
    }

    pub fn node(&self) -> &N {
        &self.node
    }

    pub fn cache(&self) -> &BlockCache {
        &self.cache
    }

    pub fn rewards(&self) -> &RewardCalculator {
        &self.rewards
    }

    /// Hit/miss statistics of the block and summary caches
    pub async fn cache_stats(&self) -> (CacheStats, CacheStats) {
        (
            self.cache.block_stats().await,
            self.cache.summary_stats().await,
        )
    }

    fn confirmations_at(&self, height: u64) -> Confirmations {
        Confirmations::from_heights(self.node.chain_height(), height)
    }

    /// Resolve a full block by hash
    ///
    /// Cached blocks are returned with confirmations recomputed against the
    /// current tip. Otherwise the block and its index metadata are fetched,
    /// annotated with reward and pool, and cached once they are outside the
    /// reorganization window.
    ///
    /// # Errors
    ///
    /// - [`BlockError::NotFound`] if the node does not know the block (or its predecessor)
    /// - [`BlockError::Upstream`] for any other node failure
    pub async fn resolve_block(&self, hash: &str) -> Result<BlockDetail, BlockError> {
        let span = spans::resolve_block(hash);

        if let Some(cached) = self.cache.get_block(hash).await {
            let confirmations = self.confirmations_at(cached.height);
            debug!(parent: &span, hash, confirmations = %confirmations, cached = true, "Resolved block");
            return Ok(cached.with_confirmations(confirmations));
        }

        self.fetch_block(hash).instrument(span).await
    }

    async fn fetch_block(&self, hash: &str) -> Result<BlockDetail, BlockError> {
        let header_ref = BlockRef::Hash(hash.to_string());
        let (block, info) = futures::try_join!(
            async {
                self.node
                    .get_block(hash)
                    .await
                    .map_err(|e| BlockError::from_node(hash, e))
            },
            async {
                self.node
                    .get_block_header(&header_ref)
                    .await
                    .map_err(|e| BlockError::from_node(hash, e))
            },
        )?;

        let prev_hash = normalize_prev_hash(&block.header.prev_hash);
        let prev_height = self.previous_height(prev_hash.as_deref()).await?;
        let reward = self.rewards.reward_after(prev_height);
        let pool_info = self.pools.attribute(&block);

        let detail = transform_block(&block, &info, reward, pool_info);

        let admitted = self
            .cache
            .admit_block(hash, Arc::new(detail.clone()), info.confirmations)
            .await;

        info!(
            hash,
            height = detail.height,
            confirmations = %detail.confirmations,
            reward = %detail.reward,
            cached = false,
            admitted,
            "Resolved block"
        );

        Ok(detail)
    }

    /// Height of the predecessor, `None` for the genesis block
    async fn previous_height(&self, prev_hash: Option<&str>) -> Result<Option<u64>, BlockError> {
        let Some(prev_hash) = prev_hash else {
            return Ok(None);
        };

        let span = spans::resolve_previous_header(Some(prev_hash));
        let info = self
            .node
            .get_block_header(&BlockRef::Hash(prev_hash.to_string()))
            .instrument(span)
            .await
            .map_err(|e| BlockError::from_node(prev_hash, e))?;

        Ok(Some(info.height))
    }

    /// Resolve a block summary by hash
    ///
    /// On a cache miss, only the header and the coinbase transaction are
    /// decoded from the raw block bytes.
    ///
    /// # Errors
    ///
    /// - [`BlockError::NotFound`] if the node does not know the block
    /// - [`BlockError::RawDecode`] if the raw bytes are truncated
    /// - [`BlockError::Upstream`] for any other node failure
    pub async fn resolve_summary(&self, hash: &str) -> Result<BlockSummary, BlockError> {
        let span = spans::resolve_summary(hash);

        if let Some(cached) = self.cache.get_summary(hash).await {
            debug!(parent: &span, hash, cached = true, "Resolved block summary");
            return Ok(BlockSummary::clone(&cached));
        }

        self.fetch_summary(hash).instrument(span).await
    }

    async fn fetch_summary(&self, hash: &str) -> Result<BlockSummary, BlockError> {
        let header_ref = BlockRef::Hash(hash.to_string());
        let (raw, info) = futures::try_join!(
            async {
                self.node
                    .get_raw_block(hash)
                    .await
                    .map_err(|e| BlockError::from_node(hash, e))
            },
            async {
                self.node
                    .get_block_header(&header_ref)
                    .await
                    .map_err(|e| BlockError::from_node(hash, e))
            },
        )?;

        let prefix = read_block_prefix(&raw)?;
        let pool_info = self.pools.attribute(&prefix);
        let summary = build_summary(hash, &prefix, info.height, pool_info);

        let confirmations = self.confirmations_at(info.height);
        let admitted = self
            .cache
            .admit_summary(hash, Arc::new(summary.clone()), confirmations)
            .await;

        debug!(
            hash,
            height = summary.height,
            transactions = summary.transaction_count,
            confirmations = %confirmations,
            admitted,
            "Resolved block summary"
        );

        Ok(summary)
    }

    /// Header metadata straight from the node, never cached
    pub async fn resolve_header(&self, block: &BlockRef) -> Result<HeaderInfo, BlockError> {
        let span = spans::resolve_header(block);
        self.node
            .get_block_header(block)
            .instrument(span)
            .await
            .map_err(|e| BlockError::from_node(block.to_string(), e))
    }

    /// Consecutive headers starting at a hash or height
    ///
    /// A 64-character identifier is a hash, anything else must be a height.
    /// `count` falls back to the configured batch size when absent or zero.
    pub async fn resolve_headers(
        &self,
        id: &str,
        count: Option<usize>,
    ) -> Result<Vec<HeaderInfo>, BlockError> {
        let block = if id.len() == BLOCK_HASH_HEX_LEN {
            BlockRef::Hash(id.to_string())
        } else {
            BlockRef::Height(parse_height(id)?)
        };
        let count = count
            .filter(|&count| count > 0)
            .unwrap_or(self.header_batch_size);

        let span = spans::resolve_headers(&block, count);
        self.node
            .get_block_headers(&block, count)
            .instrument(span)
            .await
            .map_err(|e| BlockError::from_node(block.to_string(), e))
    }

    /// Serialized block as hex
    pub async fn raw_block(&self, hash: &str) -> Result<RawBlockHex, BlockError> {
        let span = spans::raw_block(hash);
        let raw = self
            .node
            .get_raw_block(hash)
            .instrument(span)
            .await
            .map_err(|e| BlockError::from_node(hash, e))?;

        Ok(RawBlockHex {
            rawblock: hex::encode(raw),
        })
    }

    /// Hash of the best-chain block at `height`
    pub async fn block_hash_at(&self, height: u64) -> Result<BlockIndex, BlockError> {
        let info = self.resolve_header(&BlockRef::Height(height)).await?;
        Ok(BlockIndex {
            block_hash: info.hash,
        })
    }

    /// Turn a user-supplied block identifier into a block hash
    ///
    /// Anything shorter than a hash or not hexadecimal is read as a height
    /// and looked up on the node.
    pub async fn normalize_block_id(&self, id: &str) -> Result<String, BlockError> {
        if id.len() >= BLOCK_HASH_HEX_LEN && is_hexadecimal(id) {
            return Ok(id.to_string());
        }

        let height = parse_height(id)?;
        Ok(self.block_hash_at(height).await?.block_hash)
    }
}

fn is_hexadecimal(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_hexdigit())
}

fn parse_height(id: &str) -> Result<u64, BlockError> {
    id.trim()
        .parse::<u64>()
        .map_err(|_| BlockError::invalid_block_id(id))
}
