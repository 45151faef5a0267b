// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Property-based tests for block rewards and cache admission
//!
//! These tests use proptest to validate invariants of the reward schedule
//! and of the reorganization-window cache rule across wide input ranges.

use blockscan::{
    BlockCache, BlockSummary, CacheCapacity, Confirmations, HourlyRewardTable, PoolInfo,
    RewardCalculator, RewardSchedule,
};
use proptest::prelude::*;
use std::sync::Arc;

const HALVING_INTERVAL: u64 = 210_240;
const BLOCKS_PER_DAY: u64 = 60 * 24;

fn calculator(seed: u64) -> RewardCalculator {
    RewardCalculator::new(RewardSchedule::default(), HourlyRewardTable::generate(seed))
}

fn summary(height: u64) -> BlockSummary {
    BlockSummary {
        height,
        size: 250,
        hash: format!("{height:064x}"),
        time: 1_700_000_000,
        transaction_count: 1,
        pool_info: PoolInfo::unknown(),
    }
}

proptest! {
    /// Property: rewards always render with exactly eight decimals
    #[test]
    fn prop_reward_has_eight_decimals(seed in any::<u64>(), prev in proptest::option::of(0u64..10_000_000)) {
        let rendered = calculator(seed).reward_after(prev).to_string();
        let (whole, fraction) = rendered.split_once('.').expect("decimal point");

        prop_assert!(!whole.is_empty() && whole.bytes().all(|b| b.is_ascii_digit()), "{}", rendered);
        prop_assert_eq!(fraction.len(), 8);
        prop_assert!(fraction.bytes().all(|b| b.is_ascii_digit()), "{}", rendered);
    }

    /// Property: within the first era the reward stays between the floor net of
    /// the treasury share and the largest table value
    #[test]
    fn prop_first_era_reward_is_bounded(seed in any::<u64>(), prev in 1u64..HALVING_INTERVAL) {
        let calculator = calculator(seed);
        let max = f64::from(*calculator.table().values().iter().max().unwrap());
        let reward = calculator.reward_after(Some(prev)).as_coins();

        prop_assert!(reward >= 45.0, "reward {} below floor", reward);
        prop_assert!(reward <= max, "reward {} above table max {}", reward, max);
    }

    /// Property: the hourly schedule repeats every day within an era
    #[test]
    fn prop_reward_repeats_daily(seed in any::<u64>(), prev in 701u64..(HALVING_INTERVAL - BLOCKS_PER_DAY)) {
        let calculator = calculator(seed);
        prop_assert_eq!(
            calculator.reward_after(Some(prev)),
            calculator.reward_after(Some(prev + BLOCKS_PER_DAY))
        );
    }

    /// Property: within one day of the first era, past the budget start, a
    /// later predecessor never earns more
    ///
    /// The hour index wraps every 1440 blocks, so both heights are drawn from
    /// the same day. Day 0 is skipped because it straddles the budget start.
    #[test]
    fn prop_reward_non_increasing_within_day(
        seed in any::<u64>(),
        day in 1u64..(HALVING_INTERVAL / BLOCKS_PER_DAY),
        a in 0u64..BLOCKS_PER_DAY,
        b in 0u64..BLOCKS_PER_DAY,
    ) {
        let calculator = calculator(seed);
        let (low, high) = (a.min(b), a.max(b));
        let h1 = day * BLOCKS_PER_DAY + low;
        let h2 = day * BLOCKS_PER_DAY + high;

        let earlier = calculator.reward_after(Some(h1)).as_coins();
        let later = calculator.reward_after(Some(h2)).as_coins();
        prop_assert!(later <= earlier, "reward({}) = {} > reward({}) = {}", h2, later, h1, earlier);
    }

    /// Property: crossing a halving boundary removes one fourteenth
    #[test]
    fn prop_halving_removes_one_fourteenth(seed in any::<u64>(), prev in 701u64..HALVING_INTERVAL) {
        let calculator = calculator(seed);
        let before = calculator.reward_after(Some(prev)).as_coins();
        let after = calculator.reward_after(Some(prev + HALVING_INTERVAL)).as_coins();

        prop_assert!((after - before * 13.0 / 14.0).abs() < 1e-9, "{} vs {}", before, after);
    }

    /// Property: the same seed always yields the same table
    #[test]
    fn prop_table_generation_is_deterministic(seed in any::<u64>()) {
        prop_assert_eq!(HourlyRewardTable::generate(seed), HourlyRewardTable::generate(seed));
    }

    /// Property: an entry is admitted exactly when it has at least six confirmations
    #[test]
    fn prop_cache_admits_only_settled_blocks(confirmations in -1i64..50, height in 0u64..1_000_000) {
        let runtime = tokio::runtime::Builder::new_current_thread().build().unwrap();
        runtime.block_on(async {
            let cache = BlockCache::new(
                CacheCapacity::new(10),
                CacheCapacity::new(10),
                Confirmations::REORG_SAFE,
            );
            let hash = format!("{height:064x}");
            let admitted = cache
                .admit_summary(&hash, Arc::new(summary(height)), Confirmations::new(confirmations))
                .await;

            prop_assert_eq!(admitted, confirmations >= 6);
            prop_assert_eq!(cache.get_summary(&hash).await.is_some(), admitted);
            Ok(())
        })?;
    }
}
