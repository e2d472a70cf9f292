//! Pagination cursor.

use std::ops::Range;

/// Current page and page size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    page_index: usize,
    page_size: usize,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page_index: 0,
            page_size: 10,
        }
    }
}

impl Pagination {
    /// Creates a cursor on the first page. A zero size is raised to 1.
    pub fn new(page_size: usize) -> Self {
        Self {
            page_index: 0,
            page_size: page_size.max(1),
        }
    }

    /// Returns the zero-based page index.
    pub fn page_index(&self) -> usize {
        self.page_index
    }

    /// Returns the page size (always at least 1).
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Returns the number of pages for `total` rows (0 when empty).
    pub fn page_count(&self, total: usize) -> usize {
        total.div_ceil(self.page_size)
    }

    /// Returns the largest valid page index for `total` rows.
    pub fn last_index(&self, total: usize) -> usize {
        self.page_count(total).saturating_sub(1)
    }

    /// Returns the row range of the current page, clipped to `total`.
    pub fn range(&self, total: usize) -> Range<usize> {
        let start = self.page_index.saturating_mul(self.page_size).min(total);
        let end = start.saturating_add(self.page_size).min(total);
        start..end
    }

    /// Moves to a page, clamped into `[0, last_index(total)]`.
    ///
    /// Returns true if the index changed.
    pub fn set_page(&mut self, page_index: usize, total: usize) -> bool {
        let clamped = page_index.min(self.last_index(total));
        let changed = clamped != self.page_index;
        self.page_index = clamped;
        changed
    }

    /// Changes the page size and re-clamps the index. Zero is ignored.
    ///
    /// Returns true if anything changed.
    pub fn set_page_size(&mut self, page_size: usize, total: usize) -> bool {
        if page_size == 0 {
            return false;
        }
        let resized = page_size != self.page_size;
        self.page_size = page_size;
        let moved = self.clamp(total);
        resized || moved
    }

    /// Re-clamps the index after the row count changed.
    ///
    /// Returns true if the index moved.
    pub fn clamp(&mut self, total: usize) -> bool {
        let index = self.page_index;
        self.set_page(index, total)
    }
}
