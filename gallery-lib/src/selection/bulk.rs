//! Bulk "select first N" scan

use log::debug;

use crate::api::PageFetcher;
use crate::error::TransportError;
use crate::error::ValidationError;
use crate::model::ArtworkId;

/// Checks a user-entered bulk count.
///
/// Zero and negative counts are rejected before anything is fetched.
///
/// # Example
///
/// ```
/// use gallery_lib::selection::validate_count;
///
/// assert_eq!(validate_count(15), Ok(15));
/// assert!(validate_count(0).is_err());
/// assert!(validate_count(-5).is_err());
/// ```
pub fn validate_count(n: i64) -> Result<usize, ValidationError> {
    if n <= 0 {
        return Err(ValidationError::InvalidCount { requested: n });
    }
    usize::try_from(n).map_err(|_| ValidationError::InvalidCount { requested: n })
}

/// Number of pages that hold the first `n` records.
pub fn pages_needed(n: usize, page_size: usize) -> usize {
    n.div_ceil(page_size.max(1))
}

/// Result of a completed bulk scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkScan {
    /// Ids of the first records of the collection, in source order.
    pub ids: Vec<ArtworkId>,
    /// Number of fetches issued.
    pub pages_fetched: usize,
}

/// Collects the ids of the first `n` records by scanning pages in order.
///
/// Pages are requested one at a time starting from page 0, and page `k + 1`
/// is only requested after page `k` has been consumed. The scan stops as soon
/// as `n` ids are collected, so it never issues more than
/// `ceil(n / page_size)` fetches. It also stops once the collection is
/// exhausted: at the first short page, or when every record of the reported
/// total has been collected. When `n` falls inside a page, the
/// first records of that page in source order are taken.
///
/// The scan only reads; applying the result to a selection is the caller's
/// job.
pub struct BulkSelector<'a> {
    fetcher: &'a dyn PageFetcher,
    page_size: usize,
}

impl<'a> BulkSelector<'a> {
    /// Creates a selector scanning pages of `page_size` records.
    pub fn new(fetcher: &'a dyn PageFetcher, page_size: usize) -> Self {
        Self {
            fetcher,
            page_size: page_size.max(1),
        }
    }

    /// Runs the scan.
    ///
    /// Any fetch failure aborts it; ids gathered from earlier pages are
    /// discarded along with it.
    pub async fn collect(&self, n: usize) -> Result<BulkScan, TransportError> {
        let last_page = pages_needed(n, self.page_size);
        let mut ids = Vec::new();
        let mut pages_fetched = 0;

        for page_index in 0..last_page {
            let page = self.fetcher.fetch(page_index, self.page_size).await?;
            pages_fetched += 1;

            let wanted = n - ids.len();
            ids.extend(page.ids().take(wanted));
            debug!(
                "Bulk scan page {}: {} records, {}/{} collected",
                page_index,
                page.len(),
                ids.len(),
                n
            );

            let exhausted = !page.is_full(self.page_size) || ids.len() >= page.total_count();
            if ids.len() >= n || exhausted {
                break;
            }
        }

        Ok(BulkScan { ids, pages_fetched })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pages_needed() {
        assert_eq!(pages_needed(15, 12), 2);
        assert_eq!(pages_needed(24, 12), 2);
        assert_eq!(pages_needed(1, 12), 1);
        assert_eq!(pages_needed(0, 12), 0);
    }

    #[test]
    fn test_validate_count() {
        assert_eq!(validate_count(1), Ok(1));
        assert_eq!(
            validate_count(0),
            Err(ValidationError::InvalidCount { requested: 0 })
        );
        assert_eq!(
            validate_count(-5),
            Err(ValidationError::InvalidCount { requested: -5 })
        );
    }
}
