//! Table view state over normalized market records.
//!
//! [`MarketTable`] owns the full normalized batch plus the current
//! [`ViewState`] and derives the visible page on demand: filter, stable sort,
//! then a fixed-size slice. Derivations are recomputed from the committed
//! state on every call, so no stale view can outlive a mutation.

use std::cmp::Ordering;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{NormalizedMarket, ValidationError};

/// Records per page.
pub const PAGE_SIZE: usize = 10;

/// Column a table can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    Region,
    MarketType,
    Exchanges,
    TradingHours,
    Status,
}

impl SortKey {
    pub const ALL: [Self; 5] = [
        Self::Region,
        Self::MarketType,
        Self::Exchanges,
        Self::TradingHours,
        Self::Status,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Region => "region",
            Self::MarketType => "market-type",
            Self::Exchanges => "exchanges",
            Self::TradingHours => "trading-hours",
            Self::Status => "status",
        }
    }
}

impl Display for SortKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "region" => Ok(Self::Region),
            "market-type" => Ok(Self::MarketType),
            "exchanges" => Ok(Self::Exchanges),
            "trading-hours" => Ok(Self::TradingHours),
            "status" => Ok(Self::Status),
            other => Err(ValidationError::InvalidSortKey {
                value: other.to_owned(),
            }),
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortDirection {
    #[serde(rename = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    Descending,
}

impl SortDirection {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ascending => "asc",
            Self::Descending => "desc",
        }
    }

    pub const fn toggled(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

impl Display for SortDirection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortDirection {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "asc" => Ok(Self::Ascending),
            "desc" => Ok(Self::Descending),
            other => Err(ValidationError::InvalidSortDirection {
                value: other.to_owned(),
            }),
        }
    }
}

/// Current presentation selections. Survives batch refreshes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub search: String,
    pub sort_key: SortKey,
    pub sort_direction: SortDirection,
    /// 1-based page number, clamped against the filtered set.
    pub page: usize,
}

impl Default for ViewState {
    /// Open markets first, page 1, no filter.
    fn default() -> Self {
        Self {
            search: String::new(),
            sort_key: SortKey::Status,
            sort_direction: SortDirection::Descending,
            page: 1,
        }
    }
}

/// One derived page of the table plus the metadata the presentation layer
/// needs to render pagination and sort affordances.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageView {
    pub records: Vec<NormalizedMarket>,
    pub page: usize,
    pub total_pages: usize,
    pub filtered_count: usize,
    /// 1-based inclusive bounds of the visible slice, e.g. `"11-20 of 25"`.
    pub range_label: String,
    pub sort_key: SortKey,
    pub sort_direction: SortDirection,
}

/// View model over the normalized market list.
#[derive(Debug, Clone, Default)]
pub struct MarketTable {
    markets: Vec<NormalizedMarket>,
    state: ViewState,
}

impl MarketTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_markets(markets: Vec<NormalizedMarket>) -> Self {
        Self {
            markets,
            state: ViewState::default(),
        }
    }

    /// Build with explicit selections; the page is clamped against the data.
    pub fn with_state(markets: Vec<NormalizedMarket>, state: ViewState) -> Self {
        let mut table = Self { markets, state };
        table.state.page = clamp_page(table.state.page, table.total_pages());
        table
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// Replace the whole batch. Selections survive; the page is re-clamped
    /// against the new result size.
    pub fn replace_markets(&mut self, markets: Vec<NormalizedMarket>) {
        self.markets = markets;
        self.state.page = clamp_page(self.state.page, self.total_pages());
    }

    /// Store a new search query and return to page 1.
    pub fn set_search(&mut self, query: impl Into<String>) {
        self.state.search = query.into();
        self.state.page = 1;
    }

    /// Select a sort column. Selecting the current column toggles direction;
    /// a new column starts Ascending. Either way the page resets to 1.
    pub fn set_sort(&mut self, key: SortKey) {
        if self.state.sort_key == key {
            self.state.sort_direction = self.state.sort_direction.toggled();
        } else {
            self.state.sort_key = key;
            self.state.sort_direction = SortDirection::Ascending;
        }
        self.state.page = 1;
    }

    /// Request a page. Out-of-range requests are clamped, never rejected.
    pub fn set_page(&mut self, page: usize) {
        self.state.page = clamp_page(page, self.total_pages());
    }

    pub fn filtered_count(&self) -> usize {
        self.filtered().len()
    }

    pub fn total_pages(&self) -> usize {
        self.filtered_count().div_ceil(PAGE_SIZE).max(1)
    }

    /// Derive the currently visible page. Pure with respect to the committed
    /// state; no memoization, no side effects.
    pub fn visible_page(&self) -> PageView {
        let mut rows = self.filtered();

        match self.state.sort_key {
            // Status is a boolean partition, not a label comparison:
            // Descending puts open markets first.
            SortKey::Status => match self.state.sort_direction {
                SortDirection::Descending => rows.sort_by_key(|market| !market.is_open_now),
                SortDirection::Ascending => rows.sort_by_key(|market| market.is_open_now),
            },
            key => rows.sort_by(|a, b| {
                let ordering = compare_by(a, b, key);
                match self.state.sort_direction {
                    SortDirection::Ascending => ordering,
                    SortDirection::Descending => ordering.reverse(),
                }
            }),
        }

        let filtered_count = rows.len();
        let total_pages = filtered_count.div_ceil(PAGE_SIZE).max(1);
        let page = clamp_page(self.state.page, total_pages);

        let start = (page - 1) * PAGE_SIZE;
        let end = (start + PAGE_SIZE).min(filtered_count);
        let records: Vec<NormalizedMarket> = rows
            .get(start..end)
            .unwrap_or_default()
            .iter()
            .map(|market| (*market).clone())
            .collect();

        let range_label = if filtered_count == 0 {
            String::from("0-0 of 0")
        } else {
            format!("{}-{} of {}", start + 1, end, filtered_count)
        };

        PageView {
            records,
            page,
            total_pages,
            filtered_count,
            range_label,
            sort_key: self.state.sort_key,
            sort_direction: self.state.sort_direction,
        }
    }

    fn filtered(&self) -> Vec<&NormalizedMarket> {
        let query = self.state.search.to_lowercase();
        self.markets
            .iter()
            .filter(|market| query.is_empty() || matches_query(market, &query))
            .collect()
    }
}

fn matches_query(market: &NormalizedMarket, query_lower: &str) -> bool {
    let record = &market.record;
    record.region.to_lowercase().contains(query_lower)
        || record.market_type.to_lowercase().contains(query_lower)
        || record.primary_exchanges.to_lowercase().contains(query_lower)
}

fn compare_by(a: &NormalizedMarket, b: &NormalizedMarket, key: SortKey) -> Ordering {
    match key {
        SortKey::Region => a.record.region.cmp(&b.record.region),
        SortKey::MarketType => a.record.market_type.cmp(&b.record.market_type),
        SortKey::Exchanges => a.record.primary_exchanges.cmp(&b.record.primary_exchanges),
        SortKey::TradingHours => a.viewer_hours.cmp(&b.viewer_hours),
        // Partitioned by the caller; equal keeps the stable pre-sort order.
        SortKey::Status => Ordering::Equal,
    }
}

fn clamp_page(page: usize, total_pages: usize) -> usize {
    page.clamp(1, total_pages)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_sort_key_and_direction() {
        let key = SortKey::from_str("Trading-Hours").expect("must parse");
        assert_eq!(key, SortKey::TradingHours);
        let direction = SortDirection::from_str("DESC").expect("must parse");
        assert_eq!(direction, SortDirection::Descending);
    }

    #[test]
    fn rejects_unknown_sort_key() {
        let err = SortKey::from_str("volume").expect_err("must fail");
        assert!(matches!(err, ValidationError::InvalidSortKey { .. }));
    }

    #[test]
    fn empty_table_still_reports_one_page() {
        let table = MarketTable::new();
        assert_eq!(table.total_pages(), 1);
        let view = table.visible_page();
        assert!(view.records.is_empty());
        assert_eq!(view.range_label, "0-0 of 0");
    }
}
