//! Session controller
//!
//! A [`Session`] owns the selection, the collection cache and the displayed
//! page for one table. The rendering layer reads from it and reports three
//! kinds of events back: page navigation, full-page selection snapshots, and
//! bulk "select first N" submissions.

mod config;
mod guard;
mod report;

pub use config::*;
pub use report::*;

use std::collections::HashSet;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::MutexGuard;
use std::sync::PoisonError;

use log::info;
use log::warn;

use crate::api::PageFetcher;
use crate::cache::CollectionCache;
use crate::error::Error;
use crate::model::Artwork;
use crate::model::ArtworkId;
use crate::selection::BulkSelector;
use crate::selection::Reconciliation;
use crate::selection::SelectionSet;
use crate::selection::page_view;
use crate::selection::reconcile;
use crate::selection::validate_count;

use guard::BulkModeGuard;
use guard::TrackedFetcher;

/// Session-level controller for a paginated, selectable collection.
///
/// Cheap to clone; clones share state. The state lock is only held for
/// synchronous updates and never across a fetch, so a navigation or a
/// selection event may arrive while a bulk selection is waiting on the
/// network. Bulk-selection mode makes the bulk scan the only writer of the
/// selection for that window.
///
/// # Example
///
/// ```ignore
/// use gallery_lib::GalleryClient;
/// use gallery_lib::session::{Session, SessionConfig};
///
/// let session = Session::new(GalleryClient::artic(), SessionConfig::default());
/// session.open().await?;
///
/// session.select_first_n(15).await?;
/// session.navigate(1).await?;
/// assert_eq!(session.page_selection().len(), 3);
/// ```
#[derive(Clone)]
pub struct Session {
    inner: Arc<SessionInner>,
}

pub(crate) struct SessionInner {
    fetcher: Arc<dyn PageFetcher>,
    config: SessionConfig,
    state: Mutex<SessionState>,
}

struct SessionState {
    cache: CollectionCache,
    selection: SelectionSet,
    /// Index of the displayed page; `None` until the first page loads.
    displayed: Option<usize>,
    /// Total reported by the most recent fetch.
    total_count: Option<usize>,
    in_flight: usize,
    bulk_depth: usize,
}

impl SessionState {
    fn displayed_records(&self) -> &[Artwork] {
        self.displayed
            .and_then(|index| self.cache.read(index))
            .unwrap_or_default()
    }
}

impl SessionInner {
    fn state(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Session {
    /// Creates a session with an empty selection and nothing loaded.
    pub fn new<F: PageFetcher + 'static>(fetcher: F, mut config: SessionConfig) -> Self {
        config.page_size = config.page_size.max(1);
        Self {
            inner: Arc::new(SessionInner {
                fetcher: Arc::new(fetcher),
                state: Mutex::new(SessionState {
                    cache: CollectionCache::new(config.page_size),
                    selection: SelectionSet::new(),
                    displayed: None,
                    total_count: None,
                    in_flight: 0,
                    bulk_depth: 0,
                }),
                config,
            }),
        }
    }

    /// Returns the session configuration.
    pub fn config(&self) -> &SessionConfig {
        &self.inner.config
    }

    /// Loads the first page.
    pub async fn open(&self) -> Result<(), Error> {
        self.navigate(0).await
    }

    /// Fetches and displays the page at the 0-based `page_index`.
    ///
    /// On failure the previously displayed page, the total and the cache are
    /// left as they were. The selection is never touched.
    pub async fn navigate(&self, page_index: usize) -> Result<(), Error> {
        let fetcher = TrackedFetcher::new(&self.inner);
        let page = match fetcher.fetch(page_index, self.inner.config.page_size).await {
            Ok(page) => page,
            Err(e) => {
                warn!("Failed to load page {}: {}", page_index, e);
                return Err(e.into());
            }
        };

        self.inner.state().displayed = Some(page_index);
        info!(
            "Displaying page {} ({} records of {})",
            page_index,
            page.len(),
            page.total_count()
        );
        Ok(())
    }

    /// Merges the table's full selection snapshot for the displayed page.
    ///
    /// `selected` is everything checked on the visible page right now, not a
    /// delta. Ignored while a bulk selection is in flight.
    pub fn apply_page_selection(&self, selected: impl IntoIterator<Item = ArtworkId>) -> Reconciliation {
        let mut guard = self.inner.state();
        let state = &mut *guard;
        let displayed = state
            .displayed
            .and_then(|index| state.cache.read(index))
            .unwrap_or_default();

        let outcome = reconcile(&mut state.selection, displayed, selected, state.bulk_depth > 0);
        if !outcome.is_applied() {
            warn!("Ignoring page selection change during bulk selection");
        }
        outcome
    }

    /// Selects the first `n` records of the collection, replacing the selection.
    ///
    /// Counts of zero or less are rejected before anything is fetched and
    /// leave the selection alone. Otherwise the selection is cleared at once,
    /// pages are scanned in order, and the collected ids replace the
    /// selection when the scan completes. A count above the known total
    /// selects the whole collection. Returns the number of ids selected.
    ///
    /// A failed fetch aborts the scan and leaves the selection cleared; the
    /// prior selection is not restored.
    pub async fn select_first_n(&self, n: i64) -> Result<usize, Error> {
        let requested = match validate_count(n) {
            Ok(requested) => requested,
            Err(e) => {
                warn!("Rejected bulk selection of {}", n);
                return Err(e.into());
            }
        };
        let known_total = self.inner.state().total_count;
        let target = match known_total {
            Some(total) if total < requested => total,
            _ => requested,
        };

        let bulk = BulkModeGuard::enter(&self.inner);
        let fetcher = TrackedFetcher::new(&self.inner);
        let selector = BulkSelector::new(&fetcher, self.inner.config.page_size);

        match selector.collect(target).await {
            Ok(scan) => {
                let selected = scan.ids.len();
                self.inner.state().selection.replace_all(scan.ids);
                drop(bulk);
                info!(
                    "Bulk selected {} items over {} pages",
                    selected, scan.pages_fetched
                );
                Ok(selected)
            }
            Err(e) => {
                drop(bulk);
                warn!("Bulk selection of {} aborted: {}", target, e);
                Err(e.into())
            }
        }
    }

    /// Returns the records of the displayed page.
    pub fn current_page(&self) -> Vec<Artwork> {
        self.inner.state().displayed_records().to_vec()
    }

    /// Returns the 0-based index of the displayed page.
    pub fn page_index(&self) -> usize {
        self.inner.state().displayed.unwrap_or(0)
    }

    /// Returns the total record count reported by the source, or 0 before
    /// anything was fetched.
    pub fn total_count(&self) -> usize {
        self.inner.state().total_count.unwrap_or(0)
    }

    /// Returns the number of pages in the collection.
    pub fn page_count(&self) -> usize {
        self.total_count().div_ceil(self.inner.config.page_size)
    }

    /// Returns `true` while any fetch is in flight.
    pub fn is_loading(&self) -> bool {
        self.inner.state().in_flight > 0
    }

    /// Returns `true` while a bulk selection is in flight.
    pub fn is_bulk_selecting(&self) -> bool {
        self.inner.state().bulk_depth > 0
    }

    /// Returns the selected records of the displayed page, in page order.
    pub fn page_selection(&self) -> Vec<Artwork> {
        let state = self.inner.state();
        page_view(state.displayed_records(), &state.selection)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Returns `true` if the id is selected.
    pub fn is_selected(&self, id: ArtworkId) -> bool {
        self.inner.state().selection.contains(id)
    }

    /// Returns a copy of the whole selection.
    pub fn selected_ids(&self) -> HashSet<ArtworkId> {
        self.inner.state().selection.snapshot()
    }

    /// Returns the number of selected ids.
    pub fn selected_count(&self) -> usize {
        self.inner.state().selection.len()
    }

    /// Returns a cached page, if it was ever fetched.
    pub fn cached_page(&self, page_index: usize) -> Option<Vec<Artwork>> {
        self.inner.state().cache.read(page_index).map(<[Artwork]>::to_vec)
    }

    /// Returns the cached record at an absolute position.
    pub fn cached_record(&self, position: usize) -> Option<Artwork> {
        self.inner.state().cache.get(position).cloned()
    }

    /// Returns the pagination line for the displayed page.
    pub fn page_report(&self) -> PageReport {
        let state = self.inner.state();
        PageReport::new(
            state.displayed.unwrap_or(0),
            state.displayed_records().len(),
            self.inner.config.page_size,
            state.total_count.unwrap_or(0),
        )
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.inner.state();
        f.debug_struct("Session")
            .field("page_size", &self.inner.config.page_size)
            .field("displayed", &state.displayed)
            .field("total_count", &state.total_count)
            .field("selected", &state.selection.len())
            .field("bulk_selecting", &(state.bulk_depth > 0))
            .finish()
    }
}
