// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Block reward computation
//!
//! The reward of a block depends only on the height of its predecessor and
//! on the hourly base-subsidy table chosen at startup:
//!
//! 1. No predecessor (genesis): the genesis reward, `50.00000000`.
//! 2. Otherwise the hourly base subsidy `table[hour] - hour * 450/24`,
//!    floored at 50, where `hour = (prev_height / 60) % 24`. A predecessor at
//!    height 0 uses the genesis reward as its base.
//! 3. For every multiple of the halving interval up to `prev_height`, the
//!    subsidy loses a fourteenth of its current value.
//! 4. Past the budget start height a tenth of the subsidy is withheld as the
//!    treasury share.
//!
//! # Examples
//!
//! ```
//! use blockscan::{HourlyRewardTable, RewardCalculator, RewardSchedule};
//!
//! let calculator = RewardCalculator::new(
//!     RewardSchedule::default(),
//!     HourlyRewardTable::from_values([500; 24]),
//! );
//!
//! assert_eq!(calculator.reward_after(None).to_string(), "50.00000000");
//! assert_eq!(calculator.reward_after(Some(1)).to_string(), "500.00000000");
//! ```

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use tracing::info;

use crate::config::constants::subsidy;
use crate::config::ExplorerConfig;

mod table;

pub use table::HourlyRewardTable;

/// Constants of the subsidy schedule
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RewardSchedule {
    /// Blocks between two subsidy reductions
    pub halving_interval: u64,
    /// Treasury share applies to predecessors strictly above this height
    pub budget_payments_start_block: u64,
    /// Reward of the genesis block and floor of the hourly base subsidy
    pub genesis_reward: f64,
}

impl Default for RewardSchedule {
    fn default() -> Self {
        Self {
            halving_interval: subsidy::HALVING_INTERVAL,
            budget_payments_start_block: subsidy::BUDGET_PAYMENTS_START_BLOCK,
            genesis_reward: subsidy::GENESIS_REWARD,
        }
    }
}

/// Block reward in coins
///
/// Displays and serializes with exactly eight fractional digits.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Reward(f64);

impl Reward {
    pub const fn from_coins(coins: f64) -> Self {
        Self(coins)
    }

    pub const fn as_coins(&self) -> f64 {
        self.0
    }
}

impl fmt::Display for Reward {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.8}", self.0)
    }
}

impl Serialize for Reward {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Reward {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse::<f64>()
            .map(Reward)
            .map_err(serde::de::Error::custom)
    }
}

/// Computes block rewards from a predecessor height
///
/// Pure given its schedule and table; build one per process and share it.
#[derive(Debug, Clone)]
pub struct RewardCalculator {
    schedule: RewardSchedule,
    table: HourlyRewardTable,
}

impl RewardCalculator {
    pub fn new(schedule: RewardSchedule, table: HourlyRewardTable) -> Self {
        Self { schedule, table }
    }

    /// Build the calculator for a process, generating its hourly table
    ///
    /// Uses the configured seed, or draws one and logs it so the table can be
    /// reproduced later.
    pub fn from_config(config: &ExplorerConfig) -> Self {
        let seed = config
            .hourly_reward_seed
            .unwrap_or_else(rand::random::<u64>);
        let table = HourlyRewardTable::generate(seed);
        info!(
            seed,
            configured = config.hourly_reward_seed.is_some(),
            table = ?table.values(),
            "Generated hourly reward table"
        );
        Self::new(config.reward_schedule, table)
    }

    pub fn schedule(&self) -> &RewardSchedule {
        &self.schedule
    }

    pub fn table(&self) -> &HourlyRewardTable {
        &self.table
    }

    /// Base subsidy for a block whose predecessor is at `prev_height`
    pub fn base_subsidy(&self, prev_height: u64) -> f64 {
        let floor = self.schedule.genesis_reward;
        if prev_height == 0 {
            return floor;
        }

        let hour = (prev_height / subsidy::BLOCKS_PER_HOUR) % subsidy::HOURS_IN_A_DAY as u64;
        let decay_per_hour = subsidy::HOURLY_DECAY_SPAN / subsidy::HOURS_IN_A_DAY as f64;
        let base = f64::from(self.table.get(hour as usize)) - hour as f64 * decay_per_hour;

        if base < floor {
            floor
        } else {
            base
        }
    }

    /// Reward of the block following `prev_height`, or of the genesis block for `None`
    pub fn reward_after(&self, prev_height: Option<u64>) -> Reward {
        let Some(prev_height) = prev_height else {
            return Reward(self.schedule.genesis_reward);
        };

        let mut subsidy = self.base_subsidy(prev_height);

        let reductions = prev_height
            .checked_div(self.schedule.halving_interval)
            .unwrap_or(0);
        for _ in 0..reductions {
            subsidy -= subsidy / 14.0;
        }

        let treasury_share = if prev_height > self.schedule.budget_payments_start_block {
            subsidy / 10.0
        } else {
            0.0
        };

        Reward(subsidy - treasury_share)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descending_table() -> HourlyRewardTable {
        let mut values = [0u32; 24];
        for (hour, value) in values.iter_mut().enumerate() {
            *value = 500 - 10 * hour as u32;
        }
        HourlyRewardTable::from_values(values)
    }

    fn calculator() -> RewardCalculator {
        RewardCalculator::new(RewardSchedule::default(), descending_table())
    }

    #[test]
    fn test_genesis_reward() {
        assert_eq!(calculator().reward_after(None).to_string(), "50.00000000");
    }

    #[test]
    fn test_predecessor_at_height_zero_uses_genesis_base() {
        assert_eq!(calculator().reward_after(Some(0)).to_string(), "50.00000000");
    }

    #[test]
    fn test_hour_zero_before_budget_start() {
        // hour 0, no decay, no halving, no treasury
        assert_eq!(calculator().reward_after(Some(59)).to_string(), "500.00000000");
    }

    #[test]
    fn test_hourly_decay() {
        // hour 1: 490 - 18.75
        assert_eq!(calculator().reward_after(Some(60)).to_string(), "471.25000000");
        // hour 2: 480 - 37.5
        assert_eq!(calculator().reward_after(Some(120)).to_string(), "442.50000000");
    }

    #[test]
    fn test_base_subsidy_floor() {
        // hour 23: 270 - 431.25 is below the floor
        let calc = calculator();
        assert_eq!(calc.base_subsidy(23 * 60), 50.0);
    }

    #[test]
    fn test_hour_wraps_every_day() {
        let calc = calculator();
        assert_eq!(calc.base_subsidy(1440 + 60), calc.base_subsidy(60));
    }

    #[test]
    fn test_treasury_share_after_budget_start() {
        let calc = calculator();
        // 700 is hour 11: 390 - 206.25 = 183.75, no treasury yet
        assert_eq!(calc.reward_after(Some(700)).to_string(), "183.75000000");
        // 701 is still hour 11, now minus a tenth
        assert_eq!(calc.reward_after(Some(701)).to_string(), "165.37500000");
    }

    #[test]
    fn test_halving_reduction() {
        let calc = calculator();
        // 210240 / 60 = 3504, 3504 % 24 = 0 -> hour 0, base 500
        let expected = {
            let mut subsidy = 500.0f64;
            subsidy -= subsidy / 14.0;
            subsidy - subsidy / 10.0
        };
        let reward = calc.reward_after(Some(210_240));
        assert_eq!(reward.as_coins(), expected);
        assert_eq!(reward.to_string(), format!("{expected:.8}"));

        // One block before the boundary has no reduction
        let before = calc.reward_after(Some(210_239));
        assert!(before.as_coins() > 0.0);
    }

    #[test]
    fn test_two_halvings() {
        let calc = calculator();
        let prev = 2 * 210_240;
        let hour = (prev / 60) % 24;
        let mut subsidy = calc.base_subsidy(prev);
        assert_eq!(hour, 0);
        subsidy -= subsidy / 14.0;
        subsidy -= subsidy / 14.0;
        let expected = subsidy - subsidy / 10.0;
        assert_eq!(calc.reward_after(Some(prev)).as_coins(), expected);
    }

    #[test]
    fn test_zero_halving_interval_disables_reductions() {
        let schedule = RewardSchedule {
            halving_interval: 0,
            ..RewardSchedule::default()
        };
        let calc = RewardCalculator::new(schedule, descending_table());
        assert_eq!(calc.reward_after(Some(59)).to_string(), "500.00000000");
    }

    #[test]
    fn test_reward_serializes_as_string() {
        let json = serde_json::to_string(&Reward::from_coins(1.5)).unwrap();
        assert_eq!(json, "\"1.50000000\"");

        let back: Reward = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Reward::from_coins(1.5));
    }

    #[test]
    fn test_from_config_with_seed_is_reproducible() {
        let config = crate::ExplorerConfigBuilder::new()
            .hourly_reward_seed(99)
            .build();
        let a = RewardCalculator::from_config(&config);
        let b = RewardCalculator::from_config(&config);
        assert_eq!(a.table(), b.table());
        assert_eq!(a.reward_after(Some(5000)), b.reward_after(Some(5000)));
    }
}
