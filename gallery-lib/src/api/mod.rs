//! Remote collection API
//!
//! The [`PageFetcher`] trait is the boundary between the selection core and
//! the remote source. [`GalleryClient`](crate::GalleryClient) implements it
//! against the paginated HTTP list endpoint; tests implement it in memory.

mod fetcher;
mod list;
mod page;

pub use fetcher::*;
pub use list::*;
pub use page::*;
