// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Search-type hints for a free-text explorer search
//!
//! Given what a user typed, [`SearchTypeHints::define`] orders the kinds of
//! object the string may identify so that the most likely lookup is tried
//! first. The default order is block hash, transaction id, address, height.

use serde::Serialize;

/// One lookup a client may attempt for a search string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SearchTarget {
    pub factory: &'static str,
    pub object: &'static str,
    pub path: &'static str,
}

const BLOCK: SearchTarget = SearchTarget {
    factory: "Block",
    object: "blockHash",
    path: "block/",
};

const TRANSACTION: SearchTarget = SearchTarget {
    factory: "Transaction",
    object: "txId",
    path: "tx/",
};

const ADDRESS: SearchTarget = SearchTarget {
    factory: "Address",
    object: "addrStr",
    path: "address/",
};

const BLOCK_BY_HEIGHT: SearchTarget = SearchTarget {
    factory: "BlockByHeight",
    object: "blockHeight",
    path: "block/",
};

const DEFAULT_ORDER: [SearchTarget; 4] = [BLOCK, TRANSACTION, ADDRESS, BLOCK_BY_HEIGHT];

/// Hash length in hex characters
const HASH_LEN: usize = 64;
/// Base58 address lengths
const ADDRESS_LENS: [usize; 2] = [34, 38];

/// Orders search targets for a search string
///
/// # Examples
///
/// ```
/// use blockscan::SearchTypeHints;
///
/// let order = SearchTypeHints::define("XcDnXVu7p7mTxuPrNFemcqvi9E1cu1xff4");
/// assert_eq!(order[0].factory, "Address");
///
/// let order = SearchTypeHints::define("123456");
/// assert_eq!(order[0].factory, "BlockByHeight");
/// ```
pub struct SearchTypeHints;

impl SearchTypeHints {
    /// The default order, used when there is no search string
    pub fn default_order() -> Vec<SearchTarget> {
        DEFAULT_ORDER.to_vec()
    }

    /// Order the targets for `search`
    ///
    /// A 64-character string not starting with `00` is more likely a
    /// transaction than a block hash. A 34 or 38 character string is most
    /// likely an address. A numeric string is most likely a height. Every
    /// call starts from a fresh copy of the default order.
    pub fn define(search: &str) -> Vec<SearchTarget> {
        let mut order = Self::default_order();
        let len = search.encode_utf16().count();

        if len == HASH_LEN {
            if !search.starts_with("00") {
                order.swap(0, 1);
            }
        } else if ADDRESS_LENS.contains(&len) {
            order.swap(0, 2);
        }

        if is_finite_number(search) {
            order.swap(0, 3);
        }

        order
    }
}

/// Whether `s` converts to a finite number under loose string-to-number rules
///
/// Surrounding whitespace is ignored and a blank string counts as zero.
/// Signed decimal and exponent forms are accepted, as are unsigned
/// `0x`, `0o` and `0b` integer literals.
fn is_finite_number(s: &str) -> bool {
    let s = s.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}');
    if s.is_empty() {
        return true;
    }

    let radix = match s.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        let digits = &s[2..];
        return !digits.is_empty() && digits.chars().all(|c| c.is_digit(radix));
    }

    // Rust also parses "inf" and "nan" spellings, which are never finite
    let decimal = s
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'));
    decimal && s.parse::<f64>().is_ok_and(f64::is_finite)
}
