// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Block resolution and date-range listing.
//!
//! This module provides functionality for:
//! - Resolving full blocks, summaries and headers from the node
//! - Caching settled blocks outside the reorganization window
//! - Partially decoding raw blocks for summaries
//! - Listing blocks by UTC day with continuation cursors

pub mod cache;
pub mod raw;
pub mod resolver;
pub mod transform;
pub mod window;

// Re-export public API
pub use cache::{BlockCache, CacheStats, LruStore};
pub use raw::{read_block_prefix, RawBlockPrefix, RawTransaction};
pub use resolver::BlockResolver;
pub use transform::{build_summary, normalize_prev_hash, transform_block};
pub use window::{
    format_day, parse_day, DateQuery, DateRangePaginator, DayWindow, Page, Pagination,
};
