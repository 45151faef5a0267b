// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! The full-node collaborator
//!
//! [`NodeClient`] is the only way this crate reaches the chain. An RPC client,
//! an in-process node handle or a test double can all sit behind it. Missing
//! blocks must be reported as [`NodeError::BlockNotFound`] or
//! [`NodeError::IndexUnavailable`]; [`NodeError::from_rpc_code`] does that
//! classification for JSON-RPC backed implementations.

use async_trait::async_trait;
use std::sync::Arc;

use crate::errors::NodeError;
use crate::types::block::{BlockRef, FullBlock, HeaderInfo};
use crate::types::timestamp::UnixTimestamp;

/// Read access to a full node
#[async_trait]
pub trait NodeClient: Send + Sync {
    /// Fully deserialized block
    async fn get_block(&self, hash: &str) -> Result<FullBlock, NodeError>;

    /// Serialized block bytes
    async fn get_raw_block(&self, hash: &str) -> Result<Vec<u8>, NodeError>;

    /// Index metadata for one block
    async fn get_block_header(&self, block: &BlockRef) -> Result<HeaderInfo, NodeError>;

    /// Up to `count` consecutive headers starting at `block`
    async fn get_block_headers(
        &self,
        block: &BlockRef,
        count: usize,
    ) -> Result<Vec<HeaderInfo>, NodeError>;

    /// Hashes of blocks with `low <= time < high`, in ascending chain order
    async fn get_block_hashes_by_timestamp(
        &self,
        low: UnixTimestamp,
        high: UnixTimestamp,
    ) -> Result<Vec<String>, NodeError>;

    /// Height of the current best-chain tip
    fn chain_height(&self) -> u64;
}

#[async_trait]
impl<N: NodeClient + ?Sized> NodeClient for Arc<N> {
    async fn get_block(&self, hash: &str) -> Result<FullBlock, NodeError> {
        (**self).get_block(hash).await
    }

    async fn get_raw_block(&self, hash: &str) -> Result<Vec<u8>, NodeError> {
        (**self).get_raw_block(hash).await
    }

    async fn get_block_header(&self, block: &BlockRef) -> Result<HeaderInfo, NodeError> {
        (**self).get_block_header(block).await
    }

    async fn get_block_headers(
        &self,
        block: &BlockRef,
        count: usize,
    ) -> Result<Vec<HeaderInfo>, NodeError> {
        (**self).get_block_headers(block, count).await
    }

    async fn get_block_hashes_by_timestamp(
        &self,
        low: UnixTimestamp,
        high: UnixTimestamp,
    ) -> Result<Vec<String>, NodeError> {
        (**self).get_block_hashes_by_timestamp(low, high).await
    }

    fn chain_height(&self) -> u64 {
        (**self).chain_height()
    }
}
