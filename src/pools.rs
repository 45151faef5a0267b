// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Mining-pool attribution from coinbase scripts
//!
//! Pools tag the blocks they mine by writing a recognizable string into the
//! input script of the coinbase transaction. [`PoolAttributor`] holds the
//! static signature table and matches a block's coinbase against it.
//!
//! # Examples
//!
//! ```
//! use blockscan::{PoolAttributor, PoolDefinition};
//!
//! let attributor = PoolAttributor::from_definitions(vec![PoolDefinition {
//!     pool_name: "Example Pool".to_string(),
//!     url: "https://pool.example".to_string(),
//!     search_strings: vec!["/example/".to_string()],
//! }]);
//!
//! let info = attributor.attribute_script(b"\x03\x01\x02\x03/example/");
//! assert_eq!(info.pool_name.as_deref(), Some("Example Pool"));
//!
//! assert!(attributor.attribute_script(b"solo").is_unknown());
//! ```

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

use crate::errors::PoolTableError;
use crate::types::block::FullBlock;
use crate::types::pool::PoolInfo;

/// Anything that can expose the script of its coinbase transaction's first input
pub trait CoinbaseScript {
    fn coinbase_script(&self) -> Option<&[u8]>;
}

impl CoinbaseScript for FullBlock {
    fn coinbase_script(&self) -> Option<&[u8]> {
        self.transactions
            .first()
            .and_then(|tx| tx.inputs.first())
            .map(|input| input.script.as_slice())
    }
}

/// One entry of the pool signature file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolDefinition {
    pub pool_name: String,
    pub url: String,
    pub search_strings: Vec<String>,
}

/// Static table of coinbase signatures
///
/// Signatures are tried in the order they were first registered. Registering
/// the same signature again replaces its pool but keeps its position.
#[derive(Debug, Clone, Default)]
pub struct PoolAttributor {
    signatures: Vec<(String, PoolInfo)>,
    positions: HashMap<String, usize>,
}

impl PoolAttributor {
    pub fn from_definitions(definitions: impl IntoIterator<Item = PoolDefinition>) -> Self {
        let mut attributor = Self::default();
        for pool in definitions {
            let info = PoolInfo::new(pool.pool_name, pool.url);
            for signature in pool.search_strings {
                attributor.register(signature, info.clone());
            }
        }
        attributor
    }

    /// Parse a JSON array of `{poolName, url, searchStrings}` entries
    pub fn from_json(json: &str) -> Result<Self, PoolTableError> {
        let definitions: Vec<PoolDefinition> = serde_json::from_str(json)?;
        Ok(Self::from_definitions(definitions))
    }

    /// Load the signature table from a JSON file
    pub async fn from_file(path: impl AsRef<Path>) -> Result<Self, PoolTableError> {
        let path = path.as_ref();
        let json = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| PoolTableError::io(path.display().to_string(), e))?;
        let attributor = Self::from_json(&json)?;
        debug!(
            path = %path.display(),
            signatures = attributor.len(),
            "Loaded pool signature table"
        );
        Ok(attributor)
    }

    fn register(&mut self, signature: String, info: PoolInfo) {
        match self.positions.get(&signature) {
            Some(&index) => self.signatures[index].1 = info,
            None => {
                self.positions.insert(signature.clone(), self.signatures.len());
                self.signatures.push((signature, info));
            }
        }
    }

    /// Number of distinct signatures
    pub fn len(&self) -> usize {
        self.signatures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.signatures.is_empty()
    }

    /// Match a raw coinbase input script
    ///
    /// Invalid UTF-8 is replaced rather than rejected, so such scripts can
    /// only fail to match.
    pub fn attribute_script(&self, script: &[u8]) -> PoolInfo {
        let text = String::from_utf8_lossy(script);
        self.signatures
            .iter()
            .find(|(signature, _)| text.contains(signature.as_str()))
            .map(|(_, info)| info.clone())
            .unwrap_or_default()
    }

    /// Attribute a block through its coinbase
    pub fn attribute<B: CoinbaseScript + ?Sized>(&self, block: &B) -> PoolInfo {
        block
            .coinbase_script()
            .map(|script| self.attribute_script(script))
            .unwrap_or_default()
    }
}
