// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for block resolution.

use super::{NodeError, RawBlockError};

/// Errors that can occur while resolving blocks, summaries and headers.
///
/// # Examples
///
/// ```rust,ignore
/// use blockscan::{BlockError, BlockResolver};
///
/// match resolver.resolve_block(hash).await {
///     Ok(block) => println!("{} has {} confirmations", block.hash, block.confirmations),
///     Err(BlockError::NotFound { id }) => eprintln!("no such block: {id}"),
///     Err(e) => eprintln!("node failure: {e}"),
/// }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum BlockError {
    /// The node has no block or header for this identifier.
    ///
    /// This is a "no such resource" outcome, not a failure of the node.
    #[error("Block not found: {id}")]
    NotFound {
        /// Hash or height that was requested
        id: String,
    },

    /// The identifier is neither a block hash nor a height.
    #[error("Invalid block identifier: {input}")]
    InvalidBlockId {
        /// The rejected input
        input: String,
    },

    /// The node failed for a reason other than a missing block.
    #[error("Upstream node error: {0}")]
    Upstream(#[from] NodeError),

    /// The raw block bytes returned by the node could not be decoded.
    #[error("Raw block decode error: {0}")]
    RawDecode(#[from] RawBlockError),
}

impl BlockError {
    /// Create a `NotFound` error for a hash or height.
    pub fn not_found(id: impl Into<String>) -> Self {
        BlockError::NotFound { id: id.into() }
    }

    /// Create an `InvalidBlockId` error.
    pub fn invalid_block_id(input: impl Into<String>) -> Self {
        BlockError::InvalidBlockId {
            input: input.into(),
        }
    }

    /// Translate a node error for `id`, folding both not-found codes into `NotFound`.
    pub fn from_node(id: impl Into<String>, err: NodeError) -> Self {
        if err.is_not_found() {
            BlockError::not_found(id)
        } else {
            BlockError::Upstream(err)
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, BlockError::NotFound { .. })
    }
}
