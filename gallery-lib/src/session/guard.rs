//! Session flag guards and the tracking fetcher

use async_trait::async_trait;
use log::debug;

use super::SessionInner;
use crate::api::Page;
use crate::api::PageFetcher;
use crate::error::TransportError;

/// Raises the loading flag for the guard's lifetime.
struct LoadingGuard<'a> {
    inner: &'a SessionInner,
}

impl<'a> LoadingGuard<'a> {
    fn raise(inner: &'a SessionInner) -> Self {
        inner.state().in_flight += 1;
        Self { inner }
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        let mut state = self.inner.state();
        state.in_flight = state.in_flight.saturating_sub(1);
    }
}

/// Holds the session in bulk-selection mode.
///
/// Entering clears the live selection. Dropping leaves bulk mode whether the
/// scan finished, failed, or its future was dropped.
pub(super) struct BulkModeGuard<'a> {
    inner: &'a SessionInner,
}

impl<'a> BulkModeGuard<'a> {
    pub(super) fn enter(inner: &'a SessionInner) -> Self {
        let mut state = inner.state();
        state.bulk_depth += 1;
        state.selection.clear();
        drop(state);
        Self { inner }
    }
}

impl Drop for BulkModeGuard<'_> {
    fn drop(&mut self) {
        let mut state = self.inner.state();
        state.bulk_depth = state.bulk_depth.saturating_sub(1);
    }
}

/// Wraps the session's fetcher so every fetch raises the loading flag and
/// lands in the collection cache.
pub(super) struct TrackedFetcher<'a> {
    inner: &'a SessionInner,
}

impl<'a> TrackedFetcher<'a> {
    pub(super) fn new(inner: &'a SessionInner) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl<'a> PageFetcher for TrackedFetcher<'a> {
    async fn fetch(&self, page_index: usize, page_size: usize) -> Result<Page, TransportError> {
        let _loading = LoadingGuard::raise(self.inner);
        let page = self.inner.fetcher.fetch(page_index, page_size).await?;

        {
            let mut state = self.inner.state();
            state.cache.absorb(page_index, page.records().to_vec());
            state.total_count = Some(page.total_count());
        }
        debug!(
            "Absorbed page {} ({} records, total {})",
            page_index,
            page.len(),
            page.total_count()
        );

        Ok(page)
    }
}
