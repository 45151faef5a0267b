// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Chain constants and well-known values
//!
//! Centralizes the magic numbers of the subsidy schedule and the explorer's
//! operational defaults.

/// Subsidy schedule constants
pub mod subsidy {
    /// Blocks between two subsidy reductions
    pub const HALVING_INTERVAL: u64 = 210_240;

    /// Height after which the treasury share is withheld from the miner
    pub const BUDGET_PAYMENTS_START_BLOCK: u64 = 700;

    /// Reward of the genesis block, and the floor of the hourly base subsidy
    pub const GENESIS_REWARD: f64 = 50.0;

    /// Total reduction applied across the 24 hourly buckets
    pub const HOURLY_DECAY_SPAN: f64 = 450.0;

    /// Blocks per hourly bucket (one block per minute)
    pub const BLOCKS_PER_HOUR: u64 = 60;

    pub const HOURS_IN_A_DAY: usize = 24;

    /// Range of the first hourly base subsidy when generating a table
    pub const INITIAL_REWARD_MIN: u32 = 50;
    pub const INITIAL_REWARD_MAX: u32 = 500;

    /// Range of the per-hour decrement when generating a table
    pub const DECREMENT_MIN: u32 = 1;
    pub const DECREMENT_MAX: u32 = 50;
}

/// Explorer read-path defaults
pub mod explorer {
    /// Confirmations required before a block is cached
    pub const CACHE_MIN_CONFIRMATIONS: i64 = 6;

    /// Default number of headers returned by a header listing
    pub const HEADER_BATCH_SIZE: usize = 25;

    /// Seconds in one UTC day
    pub const SECONDS_PER_DAY: i64 = 86_400;

    /// Hex length of a block hash
    pub const BLOCK_HASH_HEX_LEN: usize = 64;
}
