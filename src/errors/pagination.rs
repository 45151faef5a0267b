// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for date-range block listings.

use super::{BlockError, NodeError};

/// Errors that can occur while listing blocks by date.
#[derive(Debug, thiserror::Error)]
pub enum PaginationError {
    /// The date is not a `yyyy-mm-dd` calendar date.
    ///
    /// Raised before any node call is made.
    #[error("Invalid date '{input}': please use yyyy-mm-dd format")]
    InvalidDate {
        /// The rejected input
        input: String,
    },

    /// The node failed to list block hashes for the window.
    #[error("Node error: {0}")]
    Node(#[from] NodeError),

    /// One of the blocks on the page could not be resolved.
    ///
    /// The whole page is abandoned; partial pages are never returned.
    #[error("Block error: {0}")]
    Block(#[from] BlockError),
}

impl PaginationError {
    /// Create an `InvalidDate` error.
    pub fn invalid_date(input: impl Into<String>) -> Self {
        PaginationError::InvalidDate {
            input: input.into(),
        }
    }
}
