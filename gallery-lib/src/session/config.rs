//! Session configuration

/// Records per page used by the table and the remote source.
pub const DEFAULT_PAGE_SIZE: usize = 12;

/// Configuration for a [`Session`](super::Session).
///
/// # Example
///
/// ```
/// use gallery_lib::session::SessionConfig;
///
/// let config = SessionConfig::default().with_page_size(25);
/// assert_eq!(config.page_size, 25);
/// ```
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Records per page.
    ///
    /// Default: 12
    pub page_size: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl SessionConfig {
    /// Creates a new config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page size. Zero is raised to one.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size.max(1);
        self
    }
}
