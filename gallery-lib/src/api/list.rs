//! Artwork list endpoint.

use async_trait::async_trait;
use log::debug;
use serde::Deserialize;
use url::Url;

use super::Page;
use super::PageFetcher;
use crate::error::TransportError;
use crate::model::Artwork;
use crate::GalleryClient;

/// Path of the list endpoint, relative to the base URL.
pub const LIST_PATH: &str = "api/v1/artworks";

/// Attributes requested from the list endpoint.
pub const LIST_FIELDS: &str = "id,title,place_of_origin,artist_display,inscriptions,date_start,date_end";

impl GalleryClient {
    /// Builds the list URL for a 0-based page index.
    ///
    /// The endpoint numbers pages from 1, so `page_index` 0 becomes `page=1`.
    pub fn list_url(&self, page_index: usize, page_size: usize) -> Result<Url, TransportError> {
        let raw = format!("{}/{}", self.base_url().trim_end_matches('/'), LIST_PATH);
        let mut url = Url::parse(&raw).map_err(|e| TransportError::InvalidUrl(format!("{}: {}", raw, e)))?;

        url.query_pairs_mut()
            .append_pair("page", &page_index.saturating_add(1).to_string())
            .append_pair("limit", &page_size.to_string())
            .append_pair("fields", LIST_FIELDS);

        Ok(url)
    }

    /// Fetches one page of artworks.
    pub async fn list_artworks(&self, page_index: usize, page_size: usize) -> Result<Page, TransportError> {
        let url = self.list_url(page_index, page_size)?;
        debug!("GET {}", url);

        let mut request = self.http_client().get(url);
        if let Some(timeout) = self.timeout() {
            request = request.timeout(timeout);
        }

        let response = request.send().await.map_err(|e| self.map_send_error(e))?;
        let status = response.status();
        let body = response.text().await.map_err(|e| self.map_send_error(e))?;

        if !status.is_success() {
            let message = if body.is_empty() {
                status.canonical_reason().unwrap_or_default().to_string()
            } else {
                body
            };
            return Err(TransportError::http(status.as_u16(), message));
        }

        parse_list_response(page_index, &body)
    }

    fn map_send_error(&self, error: reqwest::Error) -> TransportError {
        match self.timeout() {
            Some(timeout) if error.is_timeout() => TransportError::Timeout(timeout),
            _ => TransportError::Network(error),
        }
    }
}

#[async_trait]
impl PageFetcher for GalleryClient {
    async fn fetch(&self, page_index: usize, page_size: usize) -> Result<Page, TransportError> {
        self.list_artworks(page_index, page_size).await
    }
}

/// List endpoint response body.
#[derive(Debug, Deserialize)]
struct ListResponse {
    data: Vec<Artwork>,
    pagination: Pagination,
}

#[derive(Debug, Deserialize)]
struct Pagination {
    total: usize,
}

/// Decodes a list response body into a [`Page`].
pub fn parse_list_response(page_index: usize, body: &str) -> Result<Page, TransportError> {
    let response: ListResponse =
        serde_json::from_str(body).map_err(|e| TransportError::parse_with_body(e.to_string(), body))?;

    Ok(Page::new(page_index, response.data, response.pagination.total))
}
