// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the raw block reader.

/// Errors that can occur while decoding serialized block bytes.
#[derive(Debug, thiserror::Error)]
pub enum RawBlockError {
    /// The byte stream ended in the middle of a field.
    #[error("Unexpected end of block data while reading {context}")]
    UnexpectedEof {
        /// The field being read
        context: &'static str,
        #[source]
        source: std::io::Error,
    },

    /// A length prefix does not fit in memory on this platform.
    #[error("Length prefix {length} for {context} is too large")]
    LengthOverflow {
        context: &'static str,
        length: u64,
    },
}

impl RawBlockError {
    pub fn unexpected_eof(context: &'static str, source: std::io::Error) -> Self {
        RawBlockError::UnexpectedEof { context, source }
    }
}
