// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Hourly base-subsidy table
//!
//! The table is generated once per process from an explicit seed and then
//! handed to [`RewardCalculator`](super::RewardCalculator) as plain data, so
//! the reward function itself never touches a random number generator.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::config::constants::subsidy::{
    DECREMENT_MAX, DECREMENT_MIN, HOURS_IN_A_DAY, INITIAL_REWARD_MAX, INITIAL_REWARD_MIN,
};

/// Base subsidy for each hour of the day, before the hourly decay is applied
///
/// # Examples
///
/// ```
/// use blockscan::HourlyRewardTable;
///
/// let a = HourlyRewardTable::generate(7);
/// let b = HourlyRewardTable::generate(7);
/// assert_eq!(a, b);
///
/// // Each hour is at most the previous one
/// assert!(a.values().windows(2).all(|w| w[1] <= w[0]));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HourlyRewardTable([u32; HOURS_IN_A_DAY]);

impl HourlyRewardTable {
    /// Use fixed values, e.g. in tests or when restoring a recorded table
    pub const fn from_values(values: [u32; HOURS_IN_A_DAY]) -> Self {
        Self(values)
    }

    /// Generate a table from a seed
    ///
    /// The first hour draws from `[50, 500]`; every following hour drops by a
    /// draw from `[1, 50]` and never goes below 1.
    pub fn generate(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut values = [0u32; HOURS_IN_A_DAY];

        values[0] = rng.random_range(INITIAL_REWARD_MIN..=INITIAL_REWARD_MAX);
        for hour in 1..HOURS_IN_A_DAY {
            let decrement = rng.random_range(DECREMENT_MIN..=DECREMENT_MAX);
            values[hour] = values[hour - 1].saturating_sub(decrement).max(1);
        }

        Self(values)
    }

    pub fn get(&self, hour: usize) -> u32 {
        self.0[hour % HOURS_IN_A_DAY]
    }

    pub fn values(&self) -> &[u32; HOURS_IN_A_DAY] {
        &self.0
    }
}
