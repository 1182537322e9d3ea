//! In-memory page sources for session tests.

#![allow(dead_code)]

use std::collections::HashSet;
use std::ops::Range;
use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use gallery_lib::api::Page;
use gallery_lib::api::PageFetcher;
use gallery_lib::error::TransportError;
use gallery_lib::model::Artwork;
use gallery_lib::model::ArtworkId;
use tokio::sync::Notify;

/// Id of the record at an absolute position.
pub fn id(position: usize) -> ArtworkId {
    ArtworkId(1000 + position as i64)
}

/// Ids of the records at a range of positions.
pub fn ids(positions: Range<usize>) -> HashSet<ArtworkId> {
    positions.map(id).collect()
}

/// A stable collection served page by page, recording every request.
pub struct FakeSource {
    records: Vec<Artwork>,
    calls: Mutex<Vec<usize>>,
    failing: Mutex<HashSet<usize>>,
}

impl FakeSource {
    pub fn with_records(count: usize) -> Arc<Self> {
        let records = (0..count)
            .map(|position| {
                Artwork::new(id(position))
                    .with_title(format!("Artwork {}", position))
                    .with_dates(1800, 1900)
            })
            .collect();
        Arc::new(Self {
            records,
            calls: Mutex::new(Vec::new()),
            failing: Mutex::new(HashSet::new()),
        })
    }

    /// Makes every fetch of `page_index` fail until [`heal`](Self::heal).
    pub fn fail_page(&self, page_index: usize) {
        self.failing.lock().unwrap().insert(page_index);
    }

    pub fn heal(&self) {
        self.failing.lock().unwrap().clear();
    }

    /// Page indices requested so far, in request order.
    pub fn calls(&self) -> Vec<usize> {
        self.calls.lock().unwrap().clone()
    }

    pub fn reset_calls(&self) {
        self.calls.lock().unwrap().clear();
    }
}

#[async_trait]
impl PageFetcher for FakeSource {
    async fn fetch(&self, page_index: usize, page_size: usize) -> Result<Page, TransportError> {
        self.calls.lock().unwrap().push(page_index);

        if self.failing.lock().unwrap().contains(&page_index) {
            return Err(TransportError::http(503, "Service Unavailable"));
        }

        let start = (page_index * page_size).min(self.records.len());
        let end = (start + page_size).min(self.records.len());
        Ok(Page::new(
            page_index,
            self.records[start..end].to_vec(),
            self.records.len(),
        ))
    }
}

/// Wraps a [`FakeSource`] and parks the fetch of one page until released.
pub struct GatedSource {
    source: Arc<FakeSource>,
    gated_page: usize,
    /// Notified when the gated fetch is parked.
    pub reached: Notify,
    /// Notify to let the gated fetch complete.
    pub release: Notify,
}

impl GatedSource {
    pub fn new(source: Arc<FakeSource>, gated_page: usize) -> Arc<Self> {
        Arc::new(Self {
            source,
            gated_page,
            reached: Notify::new(),
            release: Notify::new(),
        })
    }

    pub fn calls(&self) -> Vec<usize> {
        self.source.calls()
    }
}

#[async_trait]
impl PageFetcher for GatedSource {
    async fn fetch(&self, page_index: usize, page_size: usize) -> Result<Page, TransportError> {
        if page_index == self.gated_page {
            self.reached.notify_one();
            self.release.notified().await;
        }
        self.source.fetch(page_index, page_size).await
    }
}
