// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strong types for type safety across blockscan.
//!
//! This module provides the domain types of the block read path:
//! - Node-side blocks, headers and transactions, and the explorer block objects built from them
//! - Mining pool attribution results
//! - Configuration values (cache capacities, page limits, confirmations)
//! - Unix timestamps for date windows

pub mod block;
pub mod config;
pub mod pool;
pub mod timestamp;

// Note: Public types are re-exported from lib.rs, not here
