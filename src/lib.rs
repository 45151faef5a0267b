// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Block read path for block explorer APIs.
//!
//! `blockscan` sits between an explorer's HTTP layer and a full node. It
//! resolves blocks into reward- and pool-annotated objects, caches settled
//! blocks, lists blocks by UTC day with continuation cursors, and orders
//! search hints. Everything returned is serializable in the explorer's wire
//! format; no HTTP concerns live here.
//!
//! The node itself is reached through the [`NodeClient`] trait.
//!
//! # Quick start
//!
//! ```rust,ignore
//! use blockscan::{BlockResolver, DateQuery, DateRangePaginator, ExplorerConfig, PoolAttributor};
//! use std::sync::Arc;
//!
//! let config = ExplorerConfig::default();
//! let pools = Arc::new(PoolAttributor::from_file("pools.json").await?);
//! let resolver = Arc::new(BlockResolver::from_config(node, &config, pools));
//!
//! let block = resolver.resolve_block(&hash).await?;
//!
//! let paginator = DateRangePaginator::new(resolver.clone(), config.page_limit);
//! let page = paginator.list_by_date(DateQuery::for_date("2024-03-01")).await?;
//! ```

pub mod blocks;
pub mod config;
pub mod errors;
pub mod node;
pub mod pools;
pub mod reward;
pub mod search;
pub mod types;

mod tracing;

pub use blocks::{
    build_summary, format_day, normalize_prev_hash, parse_day, read_block_prefix,
    transform_block, BlockCache, BlockResolver, CacheStats, DateQuery, DateRangePaginator,
    DayWindow, LruStore, Page, Pagination, RawBlockPrefix, RawTransaction,
};
pub use config::{ExplorerConfig, ExplorerConfigBuilder};
pub use errors::{
    BlockError, BlockscanError, NodeError, PaginationError, PoolTableError, RawBlockError,
    RpcFailure,
};
pub use node::NodeClient;
pub use pools::{CoinbaseScript, PoolAttributor, PoolDefinition};
pub use reward::{HourlyRewardTable, Reward, RewardCalculator, RewardSchedule};
pub use search::{SearchTarget, SearchTypeHints};
pub use types::block::{
    BlockDetail, BlockHeader, BlockIndex, BlockRef, BlockSummary, FullBlock, HeaderInfo,
    RawBlockHex, Transaction, TxInput, TxOutput,
};
pub use types::config::{CacheCapacity, Confirmations, PageLimit};
pub use types::pool::PoolInfo;
pub use types::timestamp::UnixTimestamp;
