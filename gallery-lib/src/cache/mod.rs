//! Collection cache
//!
//! A sparse record buffer keyed by absolute position in the remote
//! collection, filled one whole page at a time and never evicted.

mod collection;

pub use collection::*;
