// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Mining-pool attribution result

use serde::{Deserialize, Serialize};

/// Pool that mined a block, or an empty object when unknown
///
/// Serializes as `{"poolName": ..., "url": ...}` or `{}`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolInfo {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub pool_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub url: Option<String>,
}

impl PoolInfo {
    pub fn new(pool_name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            pool_name: Some(pool_name.into()),
            url: Some(url.into()),
        }
    }

    /// No signature matched
    pub fn unknown() -> Self {
        Self::default()
    }

    pub fn is_unknown(&self) -> bool {
        self.pool_name.is_none() && self.url.is_none()
    }
}
