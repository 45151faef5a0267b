// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Block shapes exchanged with the node and served to the presentation layer.
//!
//! Node-side types ([`FullBlock`], [`HeaderInfo`]) mirror what the full node
//! returns. Explorer-side types ([`BlockDetail`], [`BlockSummary`]) are the
//! normalized, reward-annotated objects this crate caches and serves; their
//! serialized field names follow the explorer wire format.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::reward::Reward;
use crate::types::config::Confirmations;
use crate::types::pool::PoolInfo;

/// Identifies a block either by hash or by height
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BlockRef {
    Hash(String),
    Height(u64),
}

impl fmt::Display for BlockRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BlockRef::Hash(hash) => write!(f, "{hash}"),
            BlockRef::Height(height) => write!(f, "{height}"),
        }
    }
}

impl From<u64> for BlockRef {
    fn from(height: u64) -> Self {
        BlockRef::Height(height)
    }
}

impl From<&str> for BlockRef {
    fn from(hash: &str) -> Self {
        BlockRef::Hash(hash.to_string())
    }
}

impl From<String> for BlockRef {
    fn from(hash: String) -> Self {
        BlockRef::Hash(hash)
    }
}

/// The 80-byte block header, with hashes in display (byte-reversed) hex
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockHeader {
    pub version: u32,
    pub prev_hash: String,
    pub merkle_root: String,
    pub time: u32,
    pub bits: u32,
    pub nonce: u32,
}

/// A transaction input as far as this crate needs it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TxInput {
    pub prev_txid: String,
    pub prev_index: u32,
    /// Raw input script; for a coinbase input this is free-form miner data
    #[serde(with = "hex::serde")]
    pub script: Vec<u8>,
    pub sequence: u32,
}

/// A transaction output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TxOutput {
    /// Amount in duffs
    pub value: i64,
    #[serde(with = "hex::serde")]
    pub script: Vec<u8>,
}

/// A transaction of a fully deserialized block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub txid: String,
    pub inputs: Vec<TxInput>,
}

/// A fully deserialized block as returned by the node
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FullBlock {
    pub hash: String,
    pub header: BlockHeader,
    /// Transactions in block order; the first one is the coinbase
    pub transactions: Vec<Transaction>,
    /// Length of the serialized block in bytes
    pub size: usize,
}

/// Header metadata the node keeps in its block index
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeaderInfo {
    pub hash: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub version: Option<u32>,
    pub height: u64,
    pub confirmations: Confirmations,
    pub chain_work: String,
    pub difficulty: f64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub prev_hash: Option<String>,
    pub next_hash: Option<String>,
}

/// Lightweight description of a block, built from the header and coinbase only
///
/// Immutable once built; the summary cache hands out shared copies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockSummary {
    pub height: u64,
    /// Serialized size in bytes
    pub size: usize,
    pub hash: String,
    /// Block time in unix seconds
    pub time: u32,
    #[serde(rename = "txlength")]
    pub transaction_count: u64,
    #[serde(rename = "poolInfo")]
    pub pool_info: PoolInfo,
}

/// Normalized, reward-annotated block
///
/// The cache stores these without ever mutating them; confirmations are
/// recomputed for each read with [`BlockDetail::with_confirmations`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockDetail {
    pub hash: String,
    pub size: usize,
    pub height: u64,
    pub version: u32,
    #[serde(rename = "merkleroot")]
    pub merkle_root: String,
    #[serde(rename = "tx")]
    pub transaction_ids: Vec<String>,
    pub time: u32,
    pub nonce: u32,
    /// Compact difficulty target as lowercase hex without padding
    pub bits: String,
    pub difficulty: f64,
    #[serde(rename = "chainwork")]
    pub chain_work: String,
    pub confirmations: Confirmations,
    /// `None` for the genesis block
    #[serde(rename = "previousblockhash")]
    pub previous_block_hash: Option<String>,
    #[serde(rename = "nextblockhash")]
    pub next_block_hash: Option<String>,
    pub reward: Reward,
    #[serde(rename = "isMainChain")]
    pub is_main_chain: bool,
    #[serde(rename = "poolInfo")]
    pub pool_info: PoolInfo,
}

impl BlockDetail {
    /// Copy of this block with confirmations taken from the current tip
    pub fn with_confirmations(&self, confirmations: Confirmations) -> Self {
        Self {
            confirmations,
            ..self.clone()
        }
    }
}

/// Hex encoding of a raw serialized block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawBlockHex {
    pub rawblock: String,
}

/// Hash of the block at a given height
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockIndex {
    pub block_hash: String,
}
