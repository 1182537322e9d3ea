//! Page type for paginated list results.

use crate::model::Artwork;
use crate::model::ArtworkId;

/// One fixed-size, ordered chunk of the remote collection.
///
/// Pages are addressed by a 0-based index. The record at offset `i` of page
/// `p` sits at absolute position `p * page_size + i` in the collection.
///
/// # Example
///
/// ```
/// use gallery_lib::api::Page;
/// use gallery_lib::model::{Artwork, ArtworkId};
///
/// let page = Page::new(1, vec![Artwork::new(ArtworkId(10))], 13);
/// assert_eq!(page.index(), 1);
/// assert_eq!(page.total_count(), 13);
/// assert!(!page.is_full(12));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    index: usize,
    records: Vec<Artwork>,
    /// Total record count reported by the source alongside this page.
    total_count: usize,
}

impl Page {
    /// Creates a new page.
    pub fn new(index: usize, records: Vec<Artwork>, total_count: usize) -> Self {
        Self {
            index,
            records,
            total_count,
        }
    }

    /// Returns the 0-based page index.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns a reference to the records in this page, in source order.
    pub fn records(&self) -> &[Artwork] {
        &self.records
    }

    /// Returns the total number of records in the collection.
    pub fn total_count(&self) -> usize {
        self.total_count
    }

    /// Returns the ids of the records in this page, in source order.
    pub fn ids(&self) -> impl Iterator<Item = ArtworkId> + '_ {
        self.records.iter().map(|r| r.id)
    }

    /// Returns `true` if this page has no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the number of records in this page.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the page holds `page_size` records.
    ///
    /// A short page is the last page of the collection.
    pub fn is_full(&self, page_size: usize) -> bool {
        self.records.len() >= page_size
    }
}
