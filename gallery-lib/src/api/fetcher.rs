//! Page fetcher trait

use std::sync::Arc;

use async_trait::async_trait;

use super::Page;
use crate::error::TransportError;

/// Retrieves one page of the remote collection.
///
/// Implementations perform a single request per call. They do not retry and
/// they do not touch session state; a failure is returned to the caller,
/// which aborts whatever operation issued the fetch.
///
/// # Example
///
/// ```
/// use async_trait::async_trait;
/// use gallery_lib::api::{Page, PageFetcher};
/// use gallery_lib::error::TransportError;
///
/// struct Empty;
///
/// #[async_trait]
/// impl PageFetcher for Empty {
///     async fn fetch(&self, page_index: usize, _page_size: usize) -> Result<Page, TransportError> {
///         Ok(Page::new(page_index, Vec::new(), 0))
///     }
/// }
/// ```
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetches the page at the 0-based `page_index`.
    async fn fetch(&self, page_index: usize, page_size: usize) -> Result<Page, TransportError>;
}

#[async_trait]
impl<T: PageFetcher + ?Sized> PageFetcher for Arc<T> {
    async fn fetch(&self, page_index: usize, page_size: usize) -> Result<Page, TransportError> {
        (**self).fetch(page_index, page_size).await
    }
}
