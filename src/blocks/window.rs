// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Date-range block listing
//!
//! Maps a UTC calendar day (optionally continued from a cursor timestamp) to
//! a page of block summaries, newest first, with the cursors needed to fetch
//! the next page or the neighbouring days.
//!
//! # Window
//!
//! A day `D` is queried as the half-open timestamp range `[gte, lte)` where
//! `gte` is midnight UTC of `D` and `lte` is either midnight of the following
//! day or, when continuing a truncated page, the `moreTs` cursor of the
//! previous page.
//!
//! # Examples
//!
//! ```rust,ignore
//! use blockscan::{DateQuery, DateRangePaginator};
//!
//! let paginator = DateRangePaginator::new(resolver.clone(), config.page_limit);
//! let page = paginator
//!     .list_by_date(DateQuery::for_date("2024-03-01").with_limit(50))
//!     .await?;
//!
//! if page.pagination.more {
//!     let cursor = page.pagination.more_ts;
//!     // feed the cursor back as `start_timestamp`
//! }
//! ```

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, info, Instrument};

use crate::blocks::resolver::BlockResolver;
use crate::config::constants::explorer::SECONDS_PER_DAY;
use crate::errors::PaginationError;
use crate::node::NodeClient;
use crate::tracing::spans;
use crate::types::block::BlockSummary;
use crate::types::config::PageLimit;
use crate::types::timestamp::UnixTimestamp;

/// Parameters of one date listing request
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateQuery {
    /// Day to list as `yyyy-mm-dd`; today (UTC) when absent
    #[serde(rename = "blockDate")]
    pub date: Option<String>,

    /// Continuation cursor, used as the exclusive upper bound when positive
    pub start_timestamp: Option<i64>,

    /// Maximum number of blocks on the page
    pub limit: Option<usize>,
}

impl DateQuery {
    /// Query for today's blocks
    pub fn today() -> Self {
        Self::default()
    }

    pub fn for_date(date: impl Into<String>) -> Self {
        Self {
            date: Some(date.into()),
            ..Self::default()
        }
    }

    pub fn with_start_timestamp(mut self, start_timestamp: i64) -> Self {
        self.start_timestamp = Some(start_timestamp);
        self
    }

    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }
}

/// Half-open timestamp range `[gte, lte)` queried from the node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayWindow {
    pub gte: UnixTimestamp,
    pub lte: UnixTimestamp,
}

impl DayWindow {
    /// Window for `date`, continued from `start_timestamp` if it is positive
    ///
    /// A cursor before the start of the day yields an empty window at `gte`.
    pub fn new(date: NaiveDate, start_timestamp: Option<i64>) -> Self {
        let gte = UnixTimestamp::start_of_day(date);
        let lte = match start_timestamp {
            Some(ts) if ts > 0 => UnixTimestamp(ts).max(gte),
            _ => gte.plus_seconds(SECONDS_PER_DAY),
        };
        Self { gte, lte }
    }

    /// Whether the window spans a full day rather than a continuation
    pub fn is_full_day(&self) -> bool {
        self.lte.as_i64() - self.gte.as_i64() == SECONDS_PER_DAY
    }
}

/// Navigation cursors of a page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// Day containing the window's upper bound
    pub next: Option<String>,
    /// Day before the requested day
    pub prev: Option<String>,
    /// Last second included in the window
    pub current_ts: i64,
    /// The requested day
    pub current: String,
    pub is_today: bool,
    /// More blocks exist in the window than were returned
    pub more: bool,
    /// Cursor for the next page, present only when `more` is set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub more_ts: Option<i64>,
}

/// One page of block summaries, newest first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub blocks: Vec<BlockSummary>,
    pub length: usize,
    pub pagination: Pagination,
}

/// Lists blocks by UTC day through a [`BlockResolver`]
pub struct DateRangePaginator<N> {
    resolver: Arc<BlockResolver<N>>,
    default_limit: PageLimit,
}

impl<N: NodeClient> DateRangePaginator<N> {
    pub fn new(resolver: Arc<BlockResolver<N>>, default_limit: PageLimit) -> Self {
        Self {
            resolver,
            default_limit,
        }
    }

    pub fn resolver(&self) -> &BlockResolver<N> {
        &self.resolver
    }

    pub fn default_limit(&self) -> PageLimit {
        self.default_limit
    }

    /// List one page of blocks for the query, relative to the current time
    pub async fn list_by_date(&self, query: DateQuery) -> Result<Page, PaginationError> {
        self.list_by_date_at(query, Utc::now()).await
    }

    /// List one page of blocks for the query, treating `now` as the current time
    ///
    /// `now` decides the default day and the `isToday` flag.
    ///
    /// # Errors
    ///
    /// - [`PaginationError::InvalidDate`] for a malformed date, before any node call
    /// - [`PaginationError::Node`] if the hash listing fails
    /// - [`PaginationError::Block`] if any block on the page fails to resolve;
    ///   no partial page is returned
    pub async fn list_by_date_at(
        &self,
        query: DateQuery,
        now: DateTime<Utc>,
    ) -> Result<Page, PaginationError> {
        let today = format_day(now.date_naive());
        let (date, current) = match query.date {
            Some(input) => (parse_day(&input)?, input),
            None => (now.date_naive(), today.clone()),
        };
        let is_today = current == today;

        let window = DayWindow::new(date, query.start_timestamp);
        let limit = query.limit.unwrap_or(self.default_limit.as_usize());

        let span = spans::list_by_date(date, window.gte, window.lte);
        async move {
            let (blocks, more) = self.collect_page(window, limit).await?;

            let more_ts = more.then(|| {
                blocks
                    .iter()
                    .map(|block| i64::from(block.time))
                    .min()
                    .unwrap_or(window.lte.as_i64())
            });

            let prev = date
                .checked_sub_signed(Duration::days(1))
                .map(format_day);
            let next = window.lte.utc_date().map(format_day);

            info!(
                date = %current,
                blocks = blocks.len(),
                more,
                more_ts = ?more_ts,
                "Listed blocks by date"
            );

            Ok(Page {
                length: blocks.len(),
                blocks,
                pagination: Pagination {
                    next,
                    prev,
                    current_ts: window.lte.pred().as_i64(),
                    current,
                    is_today,
                    more,
                    more_ts,
                },
            })
        }
        .instrument(span)
        .await
    }

    /// Fetch, truncate and resolve the window's blocks, sorted by height descending
    async fn collect_page(
        &self,
        window: DayWindow,
        limit: usize,
    ) -> Result<(Vec<BlockSummary>, bool), PaginationError> {
        let mut hashes = self
            .resolver
            .node()
            .get_block_hashes_by_timestamp(window.gte, window.lte)
            .await?;
        hashes.reverse();

        let more = hashes.len() > limit;
        if more {
            hashes.truncate(limit);
        }

        debug!(
            hashes = hashes.len(),
            limit,
            more,
            "Resolving block summaries for window"
        );

        let mut blocks = Vec::with_capacity(hashes.len());
        for hash in &hashes {
            blocks.push(self.resolver.resolve_summary(hash).await?);
        }

        blocks.sort_by(|a, b| b.height.cmp(&a.height));
        Ok((blocks, more))
    }
}

/// Format a day as `yyyy-mm-dd`
pub fn format_day(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parse a strict `yyyy-mm-dd` calendar date
pub fn parse_day(input: &str) -> Result<NaiveDate, PaginationError> {
    let bytes = input.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !well_formed {
        return Err(PaginationError::invalid_date(input));
    }

    NaiveDate::parse_from_str(input, "%Y-%m-%d").map_err(|_| PaginationError::invalid_date(input))
}
