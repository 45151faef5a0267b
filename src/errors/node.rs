// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Errors reported by the full-node collaborator.
//!
//! The node signals a missing block with one of two RPC codes. Both are
//! folded into dedicated variants here so callers match on a tag instead of
//! comparing numeric codes.

/// RPC code the node returns when a block is not in its block index.
pub const RPC_INVALID_ADDRESS_OR_KEY: i64 = -5;

/// RPC code the node returns when a parameter such as a height is outside its index.
pub const RPC_INVALID_PARAMETER: i64 = -8;

/// Errors that can occur while talking to the full node.
///
/// # Examples
///
/// ```rust
/// use blockscan::NodeError;
///
/// let err = NodeError::from_rpc_code(-5, "Block not found");
/// assert!(err.is_not_found());
///
/// let err = NodeError::from_rpc_code(-28, "Loading block index...");
/// assert!(!err.is_not_found());
/// ```
#[derive(Debug, thiserror::Error)]
pub enum NodeError {
    /// The node has no block with the requested hash.
    #[error("Block not found")]
    BlockNotFound,

    /// The requested height or index entry is not available on the node.
    #[error("Block index not available")]
    IndexUnavailable,

    /// Any other failure of the node call.
    #[error("Node call failed during {operation}")]
    Upstream {
        /// Description of the operation that failed
        operation: String,
        /// The underlying error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Error carried inside [`NodeError::Upstream`] when the node answered with an RPC error object.
#[derive(Debug, thiserror::Error)]
#[error("RPC error {code}: {message}")]
pub struct RpcFailure {
    pub code: i64,
    pub message: String,
}

impl NodeError {
    /// Classify an RPC error object returned by the node.
    pub fn from_rpc_code(code: i64, message: impl Into<String>) -> Self {
        match code {
            RPC_INVALID_ADDRESS_OR_KEY => NodeError::BlockNotFound,
            RPC_INVALID_PARAMETER => NodeError::IndexUnavailable,
            _ => {
                let message = message.into();
                NodeError::Upstream {
                    operation: format!("rpc call ({code})"),
                    source: Box::new(RpcFailure { code, message }),
                }
            }
        }
    }

    /// Helper to create an `Upstream` error from any error type.
    pub fn upstream(
        operation: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        NodeError::Upstream {
            operation: operation.into(),
            source: Box::new(source),
        }
    }

    /// True for both flavours of "the node does not know this block".
    pub fn is_not_found(&self) -> bool {
        matches!(self, NodeError::BlockNotFound | NodeError::IndexUnavailable)
    }
}
