//! Main GalleryClient

use std::sync::Arc;
use std::time::Duration;

use reqwest::Client;

/// Base URL of the public Art Institute of Chicago API.
pub const ARTIC_BASE_URL: &str = "https://api.artic.edu";

/// HTTP client for the paginated artwork list endpoint.
///
/// This client is cheap to clone (uses `Arc` internally) and can be shared
/// across threads safely. It implements [`PageFetcher`](crate::api::PageFetcher),
/// which is how a [`Session`](crate::session::Session) consumes it.
///
/// # Example
///
/// ```ignore
/// use gallery_lib::GalleryClient;
///
/// let client = GalleryClient::builder()
///     .url("https://api.artic.edu")
///     .timeout(Duration::from_secs(10))
///     .build();
///
/// let page = client.list_artworks(0, 12).await?;
/// ```
#[derive(Clone)]
pub struct GalleryClient {
    inner: Arc<GalleryClientInner>,
}

struct GalleryClientInner {
    base_url: String,
    http_client: Client,
    timeout: Option<Duration>,
}

impl GalleryClient {
    /// Creates a new builder for constructing a client.
    pub fn builder() -> GalleryClientBuilder<Missing> {
        GalleryClientBuilder::new()
    }

    /// Creates a client for the public Art Institute of Chicago API.
    pub fn artic() -> Self {
        Self::builder().url(ARTIC_BASE_URL).build()
    }

    /// Returns the base URL of the remote source.
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// Returns the per-request timeout, if one was set.
    pub fn timeout(&self) -> Option<Duration> {
        self.inner.timeout
    }

    pub(crate) fn http_client(&self) -> &Client {
        &self.inner.http_client
    }
}

impl std::fmt::Debug for GalleryClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GalleryClient")
            .field("base_url", &self.inner.base_url)
            .field("timeout", &self.inner.timeout)
            .finish()
    }
}

/// Marker type for missing required builder fields.
pub struct Missing;

/// Marker type for set builder fields.
pub struct Set<T>(T);

/// Builder for constructing a [`GalleryClient`].
///
/// `build` is only available once `url` has been given. The URL is the host
/// of the collection, e.g. `https://api.artic.edu`; the list endpoint path
/// [`LIST_PATH`](crate::api::LIST_PATH) and the paging query are appended to
/// it on every fetch, so it should not carry a path of its own.
///
/// # Example
///
/// ```
/// use std::time::Duration;
/// use gallery_lib::GalleryClient;
///
/// let client = GalleryClient::builder()
///     .url("https://api.artic.edu")
///     .timeout(Duration::from_secs(30))
///     .build();
///
/// assert_eq!(client.base_url(), "https://api.artic.edu");
/// ```
pub struct GalleryClientBuilder<Url> {
    url: Url,
    timeout: Option<Duration>,
    connect_timeout: Option<Duration>,
    http_client: Option<Client>,
}

impl GalleryClientBuilder<Missing> {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            url: Missing,
            timeout: None,
            connect_timeout: None,
            http_client: None,
        }
    }

    /// Sets the base URL of the remote source.
    pub fn url(self, url: impl Into<String>) -> GalleryClientBuilder<Set<String>> {
        GalleryClientBuilder {
            url: Set(url.into()),
            timeout: self.timeout,
            connect_timeout: self.connect_timeout,
            http_client: self.http_client,
        }
    }
}

impl Default for GalleryClientBuilder<Missing> {
    fn default() -> Self {
        Self::new()
    }
}

impl<U> GalleryClientBuilder<U> {
    /// Sets the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the connection timeout.
    ///
    /// This is applied when building the HTTP client, and ignored when a
    /// custom client is supplied.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = Some(timeout);
        self
    }

    /// Sets a custom HTTP client.
    ///
    /// If not set, a default client will be created.
    pub fn http_client(mut self, client: Client) -> Self {
        self.http_client = Some(client);
        self
    }
}

impl GalleryClientBuilder<Set<String>> {
    /// Builds the [`GalleryClient`].
    pub fn build(self) -> GalleryClient {
        let connect_timeout = self.connect_timeout;
        let http_client = self.http_client.unwrap_or_else(|| {
            let mut builder = Client::builder();
            if let Some(timeout) = connect_timeout {
                builder = builder.connect_timeout(timeout);
            }
            builder.build().unwrap_or_else(|e| {
                log::warn!("Falling back to default HTTP client: {}", e);
                Client::new()
            })
        });

        GalleryClient {
            inner: Arc::new(GalleryClientInner {
                base_url: self.url.0,
                http_client,
                timeout: self.timeout,
            }),
        }
    }
}
