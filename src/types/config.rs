// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strong types for configuration values
//!
//! These types keep cache sizes, page sizes and confirmation thresholds from
//! being confused with block heights, timestamps or byte sizes.

use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;

/// Capacity of a bounded LRU store
///
/// Always at least one entry; the LRU backend cannot represent an empty store.
///
/// # Examples
///
/// ```
/// use blockscan::CacheCapacity;
///
/// let capacity = CacheCapacity::new(1000);
/// assert_eq!(capacity.as_usize(), 1000);
///
/// // Zero is clamped to the smallest usable capacity
/// assert_eq!(CacheCapacity::new(0).as_usize(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CacheCapacity(NonZeroUsize);

impl CacheCapacity {
    /// Default capacity of the full-block cache
    pub const BLOCKS: Self = Self(NonZeroUsize::MIN.saturating_add(999));

    /// Default capacity of the block summary cache
    pub const SUMMARIES: Self = Self(NonZeroUsize::MIN.saturating_add(999_999));

    /// Create a capacity, clamping zero to one
    pub fn new(entries: usize) -> Self {
        Self(NonZeroUsize::new(entries).unwrap_or(NonZeroUsize::MIN))
    }

    pub const fn as_non_zero(&self) -> NonZeroUsize {
        self.0
    }

    pub const fn as_usize(&self) -> usize {
        self.0.get()
    }
}

impl std::fmt::Display for CacheCapacity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} entries", self.0)
    }
}

/// Maximum number of blocks returned in one date-listing page
///
/// # Examples
///
/// ```
/// use blockscan::PageLimit;
///
/// assert_eq!(PageLimit::DEFAULT.as_usize(), 200);
/// assert_eq!(PageLimit::new(25).as_usize(), 25);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageLimit(usize);

impl PageLimit {
    pub const DEFAULT: Self = Self(200);

    pub const fn new(blocks: usize) -> Self {
        Self(blocks)
    }

    pub const fn as_usize(&self) -> usize {
        self.0
    }
}

impl Default for PageLimit {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<usize> for PageLimit {
    fn from(value: usize) -> Self {
        Self(value)
    }
}

/// Number of confirmations a block has on the best chain
///
/// `-1` is the node's marker for a block that is not on the main chain.
///
/// # Examples
///
/// ```
/// use blockscan::Confirmations;
///
/// let confirmations = Confirmations::from_heights(100, 95);
/// assert_eq!(confirmations.as_i64(), 6);
/// assert!(confirmations.is_main_chain());
/// assert!(!Confirmations::ORPHANED.is_main_chain());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Confirmations(i64);

impl Confirmations {
    /// Marker the node reports for blocks off the best chain
    pub const ORPHANED: Self = Self(-1);

    /// Threshold after which a block is considered safe from reorganization
    pub const REORG_SAFE: Self = Self(6);

    pub const fn new(confirmations: i64) -> Self {
        Self(confirmations)
    }

    /// Confirmations of a block at `height` when the best chain tip is at `chain_height`
    pub fn from_heights(chain_height: u64, height: u64) -> Self {
        Self(chain_height as i64 - height as i64 + 1)
    }

    pub const fn as_i64(&self) -> i64 {
        self.0
    }

    pub const fn is_main_chain(&self) -> bool {
        self.0 != Self::ORPHANED.0
    }
}

impl From<i64> for Confirmations {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl std::fmt::Display for Confirmations {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
