// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Configuration for blockscan
//!
//! Controls cache sizes, the reorganization safety window, page sizes and the
//! subsidy schedule used for reward annotation.
//!
//! # Example: Using defaults
//!
//! ```rust
//! use blockscan::ExplorerConfig;
//!
//! let config = ExplorerConfig::default();
//! assert_eq!(config.block_cache_capacity.as_usize(), 1000);
//! assert_eq!(config.cache_min_confirmations.as_i64(), 6);
//! ```
//!
//! # Example: Custom configuration
//!
//! ```rust
//! use blockscan::ExplorerConfigBuilder;
//!
//! let config = ExplorerConfigBuilder::with_defaults()
//!     .block_cache_capacity(50)
//!     .page_limit(20)
//!     .hourly_reward_seed(42)
//!     .build();
//! assert_eq!(config.page_limit.as_usize(), 20);
//! ```

use crate::reward::RewardSchedule;
use crate::types::config::{CacheCapacity, Confirmations, PageLimit};

pub mod constants;

/// Configuration for the block read path
#[derive(Debug, Clone)]
pub struct ExplorerConfig {
    /// Capacity of the full block cache
    /// Default: 1000
    pub block_cache_capacity: CacheCapacity,

    /// Capacity of the block summary cache
    /// Default: 1,000,000
    pub summary_cache_capacity: CacheCapacity,

    /// Confirmations a block needs before it is admitted to either cache
    /// Default: 6
    pub cache_min_confirmations: Confirmations,

    /// Maximum number of blocks in one date-listing page
    /// Default: 200
    pub page_limit: PageLimit,

    /// Number of headers returned by a header listing when none is requested
    /// Default: 25
    pub header_batch_size: usize,

    /// Subsidy schedule constants
    pub reward_schedule: RewardSchedule,

    /// Seed for the hourly base-subsidy table
    /// Default: None (a seed is drawn once at startup and logged)
    pub hourly_reward_seed: Option<u64>,
}

impl Default for ExplorerConfig {
    fn default() -> Self {
        Self::with_common_defaults()
    }
}

impl ExplorerConfig {
    /// Create config with the explorer's production defaults
    pub fn with_common_defaults() -> Self {
        Self {
            block_cache_capacity: CacheCapacity::BLOCKS,
            summary_cache_capacity: CacheCapacity::SUMMARIES,
            cache_min_confirmations: Confirmations::new(constants::explorer::CACHE_MIN_CONFIRMATIONS),
            page_limit: PageLimit::DEFAULT,
            header_batch_size: constants::explorer::HEADER_BATCH_SIZE,
            reward_schedule: RewardSchedule::default(),
            hourly_reward_seed: None,
        }
    }

    /// Create config with small caches
    ///
    /// Suitable for tests and short-lived tools.
    ///
    /// # Example
    ///
    /// ```rust
    /// use blockscan::ExplorerConfig;
    ///
    /// let config = ExplorerConfig::minimal();
    /// assert_eq!(config.summary_cache_capacity.as_usize(), 1000);
    /// ```
    pub fn minimal() -> Self {
        Self {
            summary_cache_capacity: CacheCapacity::new(1000),
            block_cache_capacity: CacheCapacity::new(100),
            ..Self::with_common_defaults()
        }
    }
}

/// Builder for [`ExplorerConfig`]
///
/// # Example
///
/// ```rust
/// use blockscan::ExplorerConfigBuilder;
///
/// let config = ExplorerConfigBuilder::new()
///     .summary_cache_capacity(10_000)
///     .cache_min_confirmations(12)
///     .build();
/// assert_eq!(config.cache_min_confirmations.as_i64(), 12);
/// ```
pub struct ExplorerConfigBuilder {
    config: ExplorerConfig,
}

impl Default for ExplorerConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ExplorerConfigBuilder {
    /// Create a new builder with minimal defaults
    pub fn new() -> Self {
        Self {
            config: ExplorerConfig::minimal(),
        }
    }

    /// Start with production defaults
    pub fn with_defaults() -> Self {
        Self {
            config: ExplorerConfig::with_common_defaults(),
        }
    }

    pub fn block_cache_capacity(mut self, entries: usize) -> Self {
        self.config.block_cache_capacity = CacheCapacity::new(entries);
        self
    }

    pub fn summary_cache_capacity(mut self, entries: usize) -> Self {
        self.config.summary_cache_capacity = CacheCapacity::new(entries);
        self
    }

    /// Set the reorganization safety window
    ///
    /// Blocks with fewer confirmations are always read fresh from the node.
    /// The cache never admits blocks with fewer than six confirmations, so
    /// lower values only take effect as six.
    pub fn cache_min_confirmations(mut self, confirmations: i64) -> Self {
        self.config.cache_min_confirmations = Confirmations::new(confirmations);
        self
    }

    pub fn page_limit(mut self, blocks: usize) -> Self {
        self.config.page_limit = PageLimit::new(blocks);
        self
    }

    pub fn header_batch_size(mut self, headers: usize) -> Self {
        self.config.header_batch_size = headers;
        self
    }

    pub fn reward_schedule(mut self, schedule: RewardSchedule) -> Self {
        self.config.reward_schedule = schedule;
        self
    }

    /// Pin the seed of the hourly base-subsidy table
    ///
    /// Two processes started with the same seed compute identical rewards.
    pub fn hourly_reward_seed(mut self, seed: u64) -> Self {
        self.config.hourly_reward_seed = Some(seed);
        self
    }

    /// Build the final configuration
    pub fn build(self) -> ExplorerConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ExplorerConfig::default();

        assert_eq!(config.block_cache_capacity.as_usize(), 1000);
        assert_eq!(config.summary_cache_capacity.as_usize(), 1_000_000);
        assert_eq!(config.cache_min_confirmations, Confirmations::REORG_SAFE);
        assert_eq!(config.page_limit.as_usize(), 200);
        assert_eq!(config.header_batch_size, 25);
        assert_eq!(config.hourly_reward_seed, None);
        assert_eq!(config.reward_schedule, RewardSchedule::default());
    }

    #[test]
    fn test_minimal_config_keeps_safety_window() {
        let config = ExplorerConfig::minimal();

        assert_eq!(config.block_cache_capacity.as_usize(), 100);
        assert_eq!(config.cache_min_confirmations.as_i64(), 6);
        assert_eq!(config.page_limit, PageLimit::DEFAULT);
    }

    #[test]
    fn test_builder_pattern() {
        let config = ExplorerConfigBuilder::new()
            .block_cache_capacity(10)
            .summary_cache_capacity(20)
            .page_limit(5)
            .header_batch_size(3)
            .hourly_reward_seed(7)
            .build();

        assert_eq!(config.block_cache_capacity.as_usize(), 10);
        assert_eq!(config.summary_cache_capacity.as_usize(), 20);
        assert_eq!(config.page_limit.as_usize(), 5);
        assert_eq!(config.header_batch_size, 3);
        assert_eq!(config.hourly_reward_seed, Some(7));
    }

    #[test]
    fn test_builder_zero_capacity_is_clamped() {
        let config = ExplorerConfigBuilder::new().block_cache_capacity(0).build();
        assert_eq!(config.block_cache_capacity.as_usize(), 1);
    }

    #[test]
    fn test_builder_custom_schedule() {
        let schedule = RewardSchedule {
            halving_interval: 100,
            ..RewardSchedule::default()
        };
        let config = ExplorerConfigBuilder::with_defaults()
            .reward_schedule(schedule)
            .build();

        assert_eq!(config.reward_schedule.halving_interval, 100);
        assert_eq!(config.reward_schedule.budget_payments_start_block, 700);
    }
}
