// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Test helpers for blockscan integration tests
//!
//! Provides an in-memory [`NodeClient`] so the read path can be tested
//! without a running node.

#![allow(dead_code)]

use async_trait::async_trait;
use blockscan::{
    BlockHeader, BlockRef, Confirmations, FullBlock, HeaderInfo, NodeClient, NodeError,
    Transaction, TxInput, UnixTimestamp,
};
use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::sync::Mutex;

/// Script used for coinbases that do not identify a pool
pub const SOLO_SCRIPT: &[u8] = b"\x03\x01\x00\x00solo";

/// Deterministic, non-zero hash for a height
pub fn hash_for(height: u64) -> String {
    format!("{:064x}", 0x00ab_c000_0000u64 + height)
}

/// One block of a mock chain
#[derive(Debug, Clone)]
pub struct MockBlock {
    pub hash: String,
    pub height: u64,
    pub time: u32,
    pub prev_hash: String,
    pub coinbase_script: Vec<u8>,
    pub txids: Vec<String>,
}

impl MockBlock {
    pub fn full_block(&self) -> FullBlock {
        let raw = self.raw_bytes();
        FullBlock {
            hash: self.hash.clone(),
            header: self.header(),
            transactions: self
                .txids
                .iter()
                .enumerate()
                .map(|(i, txid)| Transaction {
                    txid: txid.clone(),
                    inputs: vec![TxInput {
                        prev_txid: "00".repeat(32),
                        prev_index: u32::MAX,
                        script: if i == 0 {
                            self.coinbase_script.clone()
                        } else {
                            Vec::new()
                        },
                        sequence: u32::MAX,
                    }],
                })
                .collect(),
            size: raw.len(),
        }
    }

    pub fn header(&self) -> BlockHeader {
        BlockHeader {
            version: 0x2000_0000,
            prev_hash: self.prev_hash.clone(),
            merkle_root: "22".repeat(32),
            time: self.time,
            bits: 0x1b04_864c,
            nonce: self.height as u32,
        }
    }

    /// Serialized block: header, transaction count and coinbase only
    pub fn raw_bytes(&self) -> Vec<u8> {
        let header = self.header();
        let mut out = Vec::new();
        out.extend_from_slice(&header.version.to_le_bytes());
        out.extend_from_slice(&reversed_hash_bytes(&header.prev_hash));
        out.extend_from_slice(&reversed_hash_bytes(&header.merkle_root));
        out.extend_from_slice(&header.time.to_le_bytes());
        out.extend_from_slice(&header.bits.to_le_bytes());
        out.extend_from_slice(&header.nonce.to_le_bytes());
        push_compact_size(&mut out, self.txids.len() as u64);
        out.extend(coinbase_bytes(&self.coinbase_script));
        out
    }
}

fn reversed_hash_bytes(hex_hash: &str) -> Vec<u8> {
    let mut bytes = hex::decode(hex_hash).unwrap();
    bytes.resize(32, 0);
    bytes.reverse();
    bytes
}

pub fn push_compact_size(out: &mut Vec<u8>, n: u64) {
    match n {
        0..=0xfc => out.push(n as u8),
        0xfd..=0xffff => {
            out.push(0xfd);
            out.extend_from_slice(&(n as u16).to_le_bytes());
        }
        0x1_0000..=0xffff_ffff => {
            out.push(0xfe);
            out.extend_from_slice(&(n as u32).to_le_bytes());
        }
        _ => {
            out.push(0xff);
            out.extend_from_slice(&n.to_le_bytes());
        }
    }
}

fn coinbase_bytes(script: &[u8]) -> Vec<u8> {
    let mut out = Vec::new();
    out.extend_from_slice(&1u16.to_le_bytes());
    out.extend_from_slice(&0u16.to_le_bytes());
    push_compact_size(&mut out, 1);
    out.extend_from_slice(&[0u8; 32]);
    out.extend_from_slice(&u32::MAX.to_le_bytes());
    push_compact_size(&mut out, script.len() as u64);
    out.extend_from_slice(script);
    out.extend_from_slice(&u32::MAX.to_le_bytes());
    push_compact_size(&mut out, 1);
    out.extend_from_slice(&5_000_000_000i64.to_le_bytes());
    push_compact_size(&mut out, 1);
    out.push(0x51);
    out.extend_from_slice(&0u32.to_le_bytes());
    out
}

/// Per-method call counters
#[derive(Debug, Default)]
pub struct CallCounts {
    pub get_block: AtomicUsize,
    pub get_raw_block: AtomicUsize,
    pub get_block_header: AtomicUsize,
    pub get_block_headers: AtomicUsize,
    pub get_block_hashes_by_timestamp: AtomicUsize,
}

impl CallCounts {
    pub fn get_block(&self) -> usize {
        self.get_block.load(Ordering::SeqCst)
    }

    pub fn get_raw_block(&self) -> usize {
        self.get_raw_block.load(Ordering::SeqCst)
    }

    pub fn get_block_header(&self) -> usize {
        self.get_block_header.load(Ordering::SeqCst)
    }

    pub fn hash_listings(&self) -> usize {
        self.get_block_hashes_by_timestamp.load(Ordering::SeqCst)
    }

    pub fn total(&self) -> usize {
        self.get_block()
            + self.get_raw_block()
            + self.get_block_header()
            + self.get_block_headers.load(Ordering::SeqCst)
            + self.hash_listings()
    }
}

/// In-memory node holding a linear chain starting at a genesis block
///
/// # Example
///
/// ```rust,ignore
/// let node = MockNode::linear_chain(20, 1_700_000_000, 60)
///     .with_coinbase(5, b"/alpha/")
///     .with_tip(30);
/// node.fail_with_code(&hash_for(3), -28);
/// ```
pub struct MockNode {
    blocks: Vec<MockBlock>,
    by_hash: HashMap<String, usize>,
    orphaned: HashSet<String>,
    failures: Mutex<HashMap<String, i64>>,
    listing_failure: Mutex<Option<i64>>,
    chain_height: AtomicU64,
    pub calls: CallCounts,
}

impl MockNode {
    /// Chain of `count` blocks, `spacing` seconds apart, starting at `start_time`
    pub fn linear_chain(count: u64, start_time: u32, spacing: u32) -> Self {
        let mut blocks = Vec::new();
        for height in 0..count {
            let prev_hash = if height == 0 {
                "0".repeat(64)
            } else {
                hash_for(height - 1)
            };
            blocks.push(MockBlock {
                hash: hash_for(height),
                height,
                time: start_time + spacing * height as u32,
                prev_hash,
                coinbase_script: SOLO_SCRIPT.to_vec(),
                txids: vec![format!("{:064x}", 0xc0ffee_0000u64 + height)],
            });
        }
        Self::from_blocks(blocks)
    }

    pub fn from_blocks(blocks: Vec<MockBlock>) -> Self {
        let by_hash = blocks
            .iter()
            .enumerate()
            .map(|(i, block)| (block.hash.clone(), i))
            .collect();
        let tip = blocks.iter().map(|b| b.height).max().unwrap_or(0);
        Self {
            blocks,
            by_hash,
            orphaned: HashSet::new(),
            failures: Mutex::new(HashMap::new()),
            listing_failure: Mutex::new(None),
            chain_height: AtomicU64::new(tip),
            calls: CallCounts::default(),
        }
    }

    pub fn with_coinbase(mut self, height: u64, script: &[u8]) -> Self {
        if let Some(block) = self.blocks.iter_mut().find(|b| b.height == height) {
            block.coinbase_script = script.to_vec();
        }
        self
    }

    /// Override the header time of the block at `height`
    pub fn with_time(mut self, height: u64, time: u32) -> Self {
        if let Some(block) = self.blocks.iter_mut().find(|b| b.height == height) {
            block.time = time;
        }
        self
    }

    pub fn with_txids(mut self, height: u64, txids: &[&str]) -> Self {
        if let Some(block) = self.blocks.iter_mut().find(|b| b.height == height) {
            block.txids = txids.iter().map(|t| t.to_string()).collect();
        }
        self
    }

    pub fn with_tip(self, height: u64) -> Self {
        self.set_chain_height(height);
        self
    }

    /// Mark a block as no longer on the best chain
    pub fn with_orphan(mut self, hash: &str) -> Self {
        self.orphaned.insert(hash.to_string());
        self
    }

    pub fn set_chain_height(&self, height: u64) {
        self.chain_height.store(height, Ordering::SeqCst);
    }

    /// Make every call about `hash` fail with the given RPC code
    pub fn fail_with_code(&self, hash: &str, code: i64) {
        self.failures
            .lock()
            .unwrap()
            .insert(hash.to_string(), code);
    }

    /// Make the timestamp listing fail with the given RPC code
    pub fn fail_listing_with_code(&self, code: i64) {
        *self.listing_failure.lock().unwrap() = Some(code);
    }

    pub fn block(&self, height: u64) -> &MockBlock {
        &self.blocks[height as usize]
    }

    fn lookup(&self, hash: &str) -> Result<&MockBlock, NodeError> {
        if let Some(code) = self.failures.lock().unwrap().get(hash) {
            return Err(NodeError::from_rpc_code(*code, "injected failure"));
        }
        self.by_hash
            .get(hash)
            .map(|&i| &self.blocks[i])
            .ok_or(NodeError::BlockNotFound)
    }

    fn lookup_ref(&self, block: &BlockRef) -> Result<&MockBlock, NodeError> {
        match block {
            BlockRef::Hash(hash) => self.lookup(hash),
            BlockRef::Height(height) => {
                let block = self
                    .blocks
                    .iter()
                    .find(|b| b.height == *height && !self.orphaned.contains(&b.hash))
                    .ok_or(NodeError::IndexUnavailable)?;
                self.lookup(&block.hash)
            }
        }
    }

    fn header_info(&self, block: &MockBlock) -> HeaderInfo {
        let confirmations = if self.orphaned.contains(&block.hash) {
            Confirmations::ORPHANED
        } else {
            Confirmations::from_heights(self.chain_height(), block.height)
        };
        let next_hash = self
            .blocks
            .iter()
            .find(|b| b.prev_hash == block.hash && !self.orphaned.contains(&b.hash))
            .map(|b| b.hash.clone());
        HeaderInfo {
            hash: block.hash.clone(),
            version: Some(0x2000_0000),
            height: block.height,
            confirmations,
            chain_work: format!("{:064x}", block.height + 1),
            difficulty: 1.5,
            prev_hash: (block.height > 0).then(|| block.prev_hash.clone()),
            next_hash,
        }
    }
}

#[async_trait]
impl NodeClient for MockNode {
    async fn get_block(&self, hash: &str) -> Result<FullBlock, NodeError> {
        self.calls.get_block.fetch_add(1, Ordering::SeqCst);
        Ok(self.lookup(hash)?.full_block())
    }

    async fn get_raw_block(&self, hash: &str) -> Result<Vec<u8>, NodeError> {
        self.calls.get_raw_block.fetch_add(1, Ordering::SeqCst);
        Ok(self.lookup(hash)?.raw_bytes())
    }

    async fn get_block_header(&self, block: &BlockRef) -> Result<HeaderInfo, NodeError> {
        self.calls.get_block_header.fetch_add(1, Ordering::SeqCst);
        let found = self.lookup_ref(block)?;
        Ok(self.header_info(found))
    }

    async fn get_block_headers(
        &self,
        block: &BlockRef,
        count: usize,
    ) -> Result<Vec<HeaderInfo>, NodeError> {
        self.calls.get_block_headers.fetch_add(1, Ordering::SeqCst);
        let start = self.lookup_ref(block)?.height;
        Ok(self
            .blocks
            .iter()
            .filter(|b| b.height >= start && !self.orphaned.contains(&b.hash))
            .take(count)
            .map(|b| self.header_info(b))
            .collect())
    }

    async fn get_block_hashes_by_timestamp(
        &self,
        low: UnixTimestamp,
        high: UnixTimestamp,
    ) -> Result<Vec<String>, NodeError> {
        self.calls
            .get_block_hashes_by_timestamp
            .fetch_add(1, Ordering::SeqCst);
        if let Some(code) = *self.listing_failure.lock().unwrap() {
            return Err(NodeError::from_rpc_code(code, "injected failure"));
        }
        Ok(self
            .blocks
            .iter()
            .filter(|b| {
                let time = i64::from(b.time);
                time >= low.as_i64() && time < high.as_i64() && !self.orphaned.contains(&b.hash)
            })
            .map(|b| b.hash.clone())
            .collect())
    }

    fn chain_height(&self) -> u64 {
        self.chain_height.load(Ordering::SeqCst)
    }
}

/// Install a test subscriber honouring `RUST_LOG`; safe to call repeatedly
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
