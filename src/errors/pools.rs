// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for loading the mining-pool signature table.

/// Errors that can occur while loading pool signatures.
#[derive(Debug, thiserror::Error)]
pub enum PoolTableError {
    /// The pool table file could not be read.
    #[error("Failed to read pool table at {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// The pool table is not valid JSON of the expected shape.
    #[error("Failed to parse pool table")]
    Parse {
        #[source]
        source: serde_json::Error,
    },
}

impl PoolTableError {
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        PoolTableError::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<serde_json::Error> for PoolTableError {
    fn from(source: serde_json::Error) -> Self {
        PoolTableError::Parse { source }
    }
}
