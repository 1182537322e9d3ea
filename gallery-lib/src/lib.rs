//! Paginated artwork collection with cross-page selection
//!
//! An async library that lazily loads a remote, paginated artwork collection
//! one page at a time and keeps a selection of artwork ids that spans pages
//! the client has never fetched.

pub mod api;
pub mod cache;
pub mod error;
pub mod model;
pub mod selection;
pub mod session;

mod client;

pub use client::*;
pub use error::Error;
pub use session::Session;
pub use session::SessionConfig;
