//! Page-independent selection state
//!
//! The [`SelectionSet`] holds every selected id regardless of which page is
//! displayed. It changes through exactly two paths: [`reconcile`], which
//! merges a full-page snapshot from the table, and the [`BulkSelector`],
//! whose result replaces the set wholesale. [`page_view`] projects it onto
//! the displayed page.

mod bulk;
mod reconcile;
mod set;
mod view;

pub use bulk::*;
pub use reconcile::*;
pub use set::*;
pub use view::*;
