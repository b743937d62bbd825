//! Row data source consumed by the grid virtualization layer.
//!
//! DESIGN
//! ======
//! Rows are plain integers generated on demand. Nothing is cached: every
//! query rebuilds its range, so the same query always yields the same rows
//! and memory stays flat no matter how far the client scrolls.

use std::ops::Range;

/// Total number of rows reported by [`RangeDataProvider`].
pub const DEFAULT_ROW_COUNT: usize = 10_000;

/// Window requested by the virtualization layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Query {
    pub offset: u32,
    pub limit: u32,
}

impl Query {
    #[must_use]
    pub fn new(offset: u32, limit: u32) -> Self {
        Self { offset, limit }
    }

    /// Half-open row range covered by this query, saturating at `u32::MAX`.
    #[must_use]
    pub fn range(&self) -> Range<u32> {
        self.offset..self.offset.saturating_add(self.limit)
    }
}

/// Paged supplier of row identifiers.
pub trait DataProvider: Send + Sync + 'static {
    /// Rows in `[offset, offset + limit)`, produced lazily.
    fn fetch(&self, query: &Query) -> Box<dyn Iterator<Item = u32> + '_>;

    /// Total number of rows, independent of the query window.
    fn size(&self, query: &Query) -> usize;
}

/// Integer-range provider: row `i` is the value `i`.
#[derive(Debug, Clone, Copy)]
pub struct RangeDataProvider {
    total: usize,
}

impl RangeDataProvider {
    #[must_use]
    pub fn new() -> Self {
        Self { total: DEFAULT_ROW_COUNT }
    }
}

impl Default for RangeDataProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl DataProvider for RangeDataProvider {
    fn fetch(&self, query: &Query) -> Box<dyn Iterator<Item = u32> + '_> {
        Box::new(query.range())
    }

    fn size(&self, _query: &Query) -> usize {
        self.total
    }
}

#[cfg(test)]
#[path = "data_test.rs"]
mod tests;
