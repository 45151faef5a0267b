// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the blockscan library.
//!
//! This module follows a hybrid approach:
//!
//! - **Module-specific errors** for fine-grained handling ([`BlockError`],
//!   [`PaginationError`], ...)
//! - **Unified error type** ([`BlockscanError`]) for callers that do not need
//!   to distinguish between error sources
//!
//! # Architecture
//!
//! - [`NodeError`] - Failures reported by the full-node collaborator, with the
//!   two "missing block" RPC codes folded into tagged variants
//! - [`BlockError`] - Block, summary and header resolution
//! - [`PaginationError`] - Date-range listings
//! - [`RawBlockError`] - Decoding of serialized block bytes
//! - [`PoolTableError`] - Loading the mining-pool signature table
//!
//! # Examples
//!
//! ```rust,ignore
//! use blockscan::{BlockscanError, DateRangePaginator, DateQuery};
//!
//! async fn example(paginator: &DateRangePaginator<MyNode>) -> Result<(), BlockscanError> {
//!     let page = paginator.list_by_date(DateQuery::for_date("2024-01-15")).await?;
//!     println!("{} blocks", page.length);
//!     Ok(())
//! }
//! ```

mod blocks;
mod node;
mod pagination;
mod pools;
mod raw;

pub use blocks::BlockError;
pub use node::{NodeError, RpcFailure, RPC_INVALID_ADDRESS_OR_KEY, RPC_INVALID_PARAMETER};
pub use pagination::PaginationError;
pub use pools::PoolTableError;
pub use raw::RawBlockError;

/// Unified error type for all blockscan operations.
///
/// All module-specific error types convert into `BlockscanError` via `From`,
/// so `?` propagates them naturally.
#[derive(Debug, thiserror::Error)]
pub enum BlockscanError {
    /// Error from block resolution.
    #[error("Block error: {0}")]
    Block(#[from] BlockError),

    /// Error from date-range pagination.
    #[error("Pagination error: {0}")]
    Pagination(#[from] PaginationError),

    /// Error from the node collaborator.
    #[error("Node error: {0}")]
    Node(#[from] NodeError),

    /// Error loading the pool signature table.
    #[error("Pool table error: {0}")]
    PoolTable(#[from] PoolTableError),
}

impl BlockscanError {
    /// True when the error means "no such block", for any source.
    pub fn is_not_found(&self) -> bool {
        match self {
            BlockscanError::Block(e) => e.is_not_found(),
            BlockscanError::Pagination(PaginationError::Block(e)) => e.is_not_found(),
            BlockscanError::Node(e) => e.is_not_found(),
            _ => false,
        }
    }
}
