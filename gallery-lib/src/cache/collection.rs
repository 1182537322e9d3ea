//! Sparse page-block cache

use std::collections::BTreeMap;

use crate::model::Artwork;

/// Every record seen so far, addressed by absolute position.
///
/// Storage is one block per fetched page, so the positions of pages that
/// were never fetched are absent rather than zero-valued, and if any
/// position of a page is present all of them are.
///
/// # Example
///
/// ```
/// use gallery_lib::cache::CollectionCache;
/// use gallery_lib::model::{Artwork, ArtworkId};
///
/// let mut cache = CollectionCache::new(2);
/// cache.absorb(3, vec![Artwork::new(ArtworkId(7)), Artwork::new(ArtworkId(8))]);
///
/// assert_eq!(cache.get(7).map(|a| a.id), Some(ArtworkId(8)));
/// assert!(cache.read(0).is_none());
/// ```
#[derive(Debug, Clone)]
pub struct CollectionCache {
    page_size: usize,
    pages: BTreeMap<usize, Vec<Artwork>>,
}

impl CollectionCache {
    /// Creates an empty cache for pages of `page_size` records.
    pub fn new(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            pages: BTreeMap::new(),
        }
    }

    /// Returns the page size positions are computed with.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Stores a fetched page, replacing whatever was cached for it.
    ///
    /// Records beyond the page size are dropped so a block never spills into
    /// the next page's positions.
    pub fn absorb(&mut self, page_index: usize, mut records: Vec<Artwork>) {
        records.truncate(self.page_size);
        self.pages.insert(page_index, records);
    }

    /// Returns the cached records of a page, if it was ever fetched.
    pub fn read(&self, page_index: usize) -> Option<&[Artwork]> {
        self.pages.get(&page_index).map(Vec::as_slice)
    }

    /// Returns the record at an absolute position.
    pub fn get(&self, position: usize) -> Option<&Artwork> {
        self.pages
            .get(&(position / self.page_size))?
            .get(position % self.page_size)
    }

    /// Returns `true` if a record is cached at `position`.
    pub fn contains(&self, position: usize) -> bool {
        self.get(position).is_some()
    }

    /// Returns the number of fetched pages.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Returns the number of cached records.
    pub fn record_count(&self) -> usize {
        self.pages.values().map(Vec::len).sum()
    }

    /// Returns `true` if nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}
