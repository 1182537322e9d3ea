//! Pagination report line

use std::fmt;

/// Position of the displayed page within the collection, 1-based and inclusive.
///
/// Renders as `Showing {first} to {last} of {total} artworks`. An empty page
/// reports `first` and `last` as 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageReport {
    /// Position of the first displayed record.
    pub first: usize,
    /// Position of the last displayed record.
    pub last: usize,
    /// Records in the whole collection.
    pub total: usize,
}

impl PageReport {
    /// Builds the report for `len` records displayed on page `page_index`.
    pub fn new(page_index: usize, len: usize, page_size: usize, total: usize) -> Self {
        if len == 0 {
            return Self {
                first: 0,
                last: 0,
                total,
            };
        }
        let first = page_index.saturating_mul(page_size).saturating_add(1);
        Self {
            first,
            last: first.saturating_add(len - 1),
            total,
        }
    }
}

impl fmt::Display for PageReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Showing {} to {} of {} artworks",
            self.first, self.last, self.total
        )
    }
}
