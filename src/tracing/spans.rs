// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Span creation helpers for blockscan operations.
//!
//! Telemetry concerns are kept apart from business logic: instead of
//! `#[instrument]` attributes, each instrumented operation has a span helper
//! here and attaches it to its future.
//!
//! Usage pattern:
//! ```rust,ignore
//! pub async fn my_operation(&self, hash: &str) -> Result<T, E> {
//!     let span = spans::my_operation(hash);
//!     async move {
//!         // Business logic here
//!     }
//!     .instrument(span)
//!     .await
//! }
//! ```

use chrono::NaiveDate;
use tracing::{Level, Span};

use crate::types::block::BlockRef;
use crate::types::timestamp::UnixTimestamp;

/// Create span for resolving a full, reward-annotated block.
///
/// Parent: caller's request span
/// Children: resolve_previous_header span
#[inline]
pub(crate) fn resolve_block(hash: &str) -> Span {
    tracing::span!(Level::INFO, "blockscan.resolve_block", hash = %hash)
}

/// Create span for looking up the predecessor used for reward computation.
///
/// Parent: resolve_block span
#[inline]
pub(crate) fn resolve_previous_header(prev_hash: Option<&str>) -> Span {
    tracing::debug_span!(
        "blockscan.resolve_previous_header",
        prev_hash = prev_hash.unwrap_or("genesis"),
    )
}

/// Create span for building a block summary from raw bytes.
///
/// Parent: list_by_date span, or the caller's request span
#[inline]
pub(crate) fn resolve_summary(hash: &str) -> Span {
    tracing::debug_span!("blockscan.resolve_summary", hash = %hash)
}

/// Create span for a header passthrough lookup.
#[inline]
pub(crate) fn resolve_header(block: &BlockRef) -> Span {
    tracing::debug_span!("blockscan.resolve_header", block = %block)
}

/// Create span for a header listing.
#[inline]
pub(crate) fn resolve_headers(block: &BlockRef, count: usize) -> Span {
    tracing::debug_span!("blockscan.resolve_headers", block = %block, count = count)
}

/// Create span for fetching a raw block as hex.
#[inline]
pub(crate) fn raw_block(hash: &str) -> Span {
    tracing::debug_span!("blockscan.raw_block", hash = %hash)
}

/// Create span for listing one page of blocks for a UTC day.
///
/// This is the public entry point of date-range pagination.
///
/// Parent: None (root span for this operation)
/// Children: resolve_summary spans (one per block on the page)
#[inline]
pub(crate) fn list_by_date(date: NaiveDate, gte: UnixTimestamp, lte: UnixTimestamp) -> Span {
    tracing::info_span!(
        "blockscan.list_by_date",
        date = %date,
        gte = %gte,
        lte = %lte,
    )
}
