// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Normalization of node output into explorer block objects

use crate::blocks::raw::RawBlockPrefix;
use crate::reward::Reward;
use crate::types::block::{BlockDetail, BlockSummary, FullBlock, HeaderInfo};
use crate::types::pool::PoolInfo;

/// Map the node's all-zero predecessor sentinel to `None`
///
/// Any string made only of `0` characters is the sentinel, whatever its
/// length, as is an empty string.
///
/// # Examples
///
/// ```
/// use blockscan::normalize_prev_hash;
///
/// assert_eq!(normalize_prev_hash(&"0".repeat(64)), None);
/// assert_eq!(
///     normalize_prev_hash("00000ffd590b1485b3caadc19b22e6379c733355108f107a430458cdf3407ab6").as_deref(),
///     Some("00000ffd590b1485b3caadc19b22e6379c733355108f107a430458cdf3407ab6"),
/// );
/// ```
pub fn normalize_prev_hash(hash: &str) -> Option<String> {
    if hash.bytes().all(|b| b == b'0') {
        None
    } else {
        Some(hash.to_string())
    }
}

/// Build a [`BlockDetail`] from a full block, its index metadata, its reward and pool
///
/// Transaction ids keep block order. Confirmations and main-chain status
/// come from the header metadata as reported at fetch time.
pub fn transform_block(
    block: &FullBlock,
    info: &HeaderInfo,
    reward: Reward,
    pool_info: PoolInfo,
) -> BlockDetail {
    BlockDetail {
        hash: block.hash.clone(),
        size: block.size,
        height: info.height,
        version: block.header.version,
        merkle_root: block.header.merkle_root.clone(),
        transaction_ids: block.transactions.iter().map(|tx| tx.txid.clone()).collect(),
        time: block.header.time,
        nonce: block.header.nonce,
        bits: format!("{:x}", block.header.bits),
        difficulty: info.difficulty,
        chain_work: info.chain_work.clone(),
        confirmations: info.confirmations,
        previous_block_hash: normalize_prev_hash(&block.header.prev_hash),
        next_block_hash: info.next_hash.clone(),
        reward,
        is_main_chain: info.confirmations.is_main_chain(),
        pool_info,
    }
}

/// Build a [`BlockSummary`] from a partially decoded raw block
pub fn build_summary(
    hash: &str,
    prefix: &RawBlockPrefix,
    height: u64,
    pool_info: PoolInfo,
) -> BlockSummary {
    BlockSummary {
        height,
        size: prefix.size,
        hash: hash.to_string(),
        time: prefix.header.time,
        transaction_count: prefix.transaction_count,
        pool_info,
    }
}
