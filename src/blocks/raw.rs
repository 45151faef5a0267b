// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Partial decoding of serialized blocks
//!
//! Block summaries only need the header, the transaction count and the
//! coinbase transaction. [`read_block_prefix`] decodes exactly that much from
//! the node's raw block bytes and never looks at the remaining transactions,
//! so large blocks cost no more to summarize than small ones.
//!
//! # Layout
//!
//! ```text
//! header      version:u32 | prev_hash:[u8;32] | merkle_root:[u8;32] | time:u32 | bits:u32 | nonce:u32
//! tx count    compact size
//! coinbase    version:u16 | type:u16 | inputs | outputs | lock_time:u32 | [extra payload]
//! ```
//!
//! Integers are little-endian; hashes are stored byte-reversed relative to
//! their hex display form. Special transactions (version >= 3 with a non-zero
//! type) carry a compact-size prefixed extra payload after the lock time.

use std::io::{Cursor, Read};

use crate::errors::RawBlockError;
use crate::pools::CoinbaseScript;
use crate::types::block::{BlockHeader, TxInput, TxOutput};

/// Size of a serialized block header
pub const HEADER_SIZE: usize = 80;

/// A transaction decoded from raw bytes (no txid is computed)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTransaction {
    pub version: u16,
    pub tx_type: u16,
    pub inputs: Vec<TxInput>,
    pub outputs: Vec<TxOutput>,
    pub lock_time: u32,
    pub extra_payload: Vec<u8>,
}

impl RawTransaction {
    /// Whether this transaction carries an extra payload
    pub fn is_special(&self) -> bool {
        self.version >= 3 && self.tx_type != 0
    }
}

/// Header, transaction count and coinbase of a serialized block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawBlockPrefix {
    pub header: BlockHeader,
    pub transaction_count: u64,
    pub coinbase: RawTransaction,
    /// Length of the full serialized block
    pub size: usize,
}

impl CoinbaseScript for RawBlockPrefix {
    fn coinbase_script(&self) -> Option<&[u8]> {
        self.coinbase
            .inputs
            .first()
            .map(|input| input.script.as_slice())
    }
}

struct Reader<'a> {
    cursor: Cursor<&'a [u8]>,
}

impl<'a> Reader<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self {
            cursor: Cursor::new(bytes),
        }
    }

    fn remaining(&self) -> usize {
        let len = self.cursor.get_ref().len() as u64;
        len.saturating_sub(self.cursor.position()) as usize
    }

    fn read_array<const N: usize>(
        &mut self,
        context: &'static str,
    ) -> Result<[u8; N], RawBlockError> {
        let mut buf = [0u8; N];
        self.cursor
            .read_exact(&mut buf)
            .map_err(|e| RawBlockError::unexpected_eof(context, e))?;
        Ok(buf)
    }

    fn read_u8(&mut self, context: &'static str) -> Result<u8, RawBlockError> {
        Ok(self.read_array::<1>(context)?[0])
    }

    fn read_u16(&mut self, context: &'static str) -> Result<u16, RawBlockError> {
        Ok(u16::from_le_bytes(self.read_array(context)?))
    }

    fn read_u32(&mut self, context: &'static str) -> Result<u32, RawBlockError> {
        Ok(u32::from_le_bytes(self.read_array(context)?))
    }

    fn read_u64(&mut self, context: &'static str) -> Result<u64, RawBlockError> {
        Ok(u64::from_le_bytes(self.read_array(context)?))
    }

    fn read_i64(&mut self, context: &'static str) -> Result<i64, RawBlockError> {
        Ok(i64::from_le_bytes(self.read_array(context)?))
    }

    fn read_hash(&mut self, context: &'static str) -> Result<String, RawBlockError> {
        let mut hash = self.read_array::<32>(context)?;
        hash.reverse();
        Ok(hex::encode(hash))
    }

    fn read_compact_size(&mut self, context: &'static str) -> Result<u64, RawBlockError> {
        match self.read_u8(context)? {
            0xfd => Ok(u64::from(self.read_u16(context)?)),
            0xfe => Ok(u64::from(self.read_u32(context)?)),
            0xff => self.read_u64(context),
            small => Ok(u64::from(small)),
        }
    }

    /// Read a compact-size prefixed byte string
    fn read_var_bytes(&mut self, context: &'static str) -> Result<Vec<u8>, RawBlockError> {
        let length = self.read_compact_size(context)?;
        let length = usize::try_from(length)
            .map_err(|_| RawBlockError::LengthOverflow { context, length })?;
        if length > self.remaining() {
            // Refuse to allocate for a length the input cannot satisfy
            return Err(RawBlockError::unexpected_eof(
                context,
                std::io::Error::from(std::io::ErrorKind::UnexpectedEof),
            ));
        }
        let mut buf = vec![0u8; length];
        self.cursor
            .read_exact(&mut buf)
            .map_err(|e| RawBlockError::unexpected_eof(context, e))?;
        Ok(buf)
    }

    fn read_header(&mut self) -> Result<BlockHeader, RawBlockError> {
        Ok(BlockHeader {
            version: self.read_u32("header version")?,
            prev_hash: self.read_hash("previous block hash")?,
            merkle_root: self.read_hash("merkle root")?,
            time: self.read_u32("header time")?,
            bits: self.read_u32("header bits")?,
            nonce: self.read_u32("header nonce")?,
        })
    }

    fn read_input(&mut self) -> Result<TxInput, RawBlockError> {
        Ok(TxInput {
            prev_txid: self.read_hash("input outpoint hash")?,
            prev_index: self.read_u32("input outpoint index")?,
            script: self.read_var_bytes("input script")?,
            sequence: self.read_u32("input sequence")?,
        })
    }

    fn read_output(&mut self) -> Result<TxOutput, RawBlockError> {
        Ok(TxOutput {
            value: self.read_i64("output value")?,
            script: self.read_var_bytes("output script")?,
        })
    }

    fn read_transaction(&mut self) -> Result<RawTransaction, RawBlockError> {
        let version = self.read_u16("transaction version")?;
        let tx_type = self.read_u16("transaction type")?;

        let input_count = self.read_compact_size("input count")?;
        let mut inputs = Vec::new();
        for _ in 0..input_count {
            inputs.push(self.read_input()?);
        }

        let output_count = self.read_compact_size("output count")?;
        let mut outputs = Vec::new();
        for _ in 0..output_count {
            outputs.push(self.read_output()?);
        }

        let lock_time = self.read_u32("lock time")?;

        let mut tx = RawTransaction {
            version,
            tx_type,
            inputs,
            outputs,
            lock_time,
            extra_payload: Vec::new(),
        };
        if tx.is_special() {
            tx.extra_payload = self.read_var_bytes("extra payload")?;
        }
        Ok(tx)
    }
}

/// Decode the header, transaction count and coinbase of a serialized block
///
/// # Errors
///
/// Returns [`RawBlockError::UnexpectedEof`] if the bytes end before the
/// coinbase transaction is complete.
pub fn read_block_prefix(bytes: &[u8]) -> Result<RawBlockPrefix, RawBlockError> {
    let mut reader = Reader::new(bytes);

    let header = reader.read_header()?;
    let transaction_count = reader.read_compact_size("transaction count")?;
    let coinbase = reader.read_transaction()?;

    Ok(RawBlockPrefix {
        header,
        transaction_count,
        coinbase,
        size: bytes.len(),
    })
}
