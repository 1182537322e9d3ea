//! Selection reconciler

use super::SelectionSet;
use crate::model::Artwork;
use crate::model::ArtworkId;

/// Outcome of a [`reconcile`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reconciliation {
    /// The snapshot was merged into the selection.
    Applied,
    /// A bulk selection was in flight; the snapshot was discarded.
    Ignored,
}

impl Reconciliation {
    /// Returns `true` if the selection was updated.
    pub fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Merges a full-page selection snapshot into the global selection.
///
/// `snapshot` lists everything checked on the displayed page right now. Every
/// id on `displayed` is deselected first and the snapshot is then added, so
/// unchecking a row is expressible and ids on other pages are untouched.
///
/// While `bulk_active` is set the bulk selection is the only writer and the
/// snapshot is dropped.
///
/// # Example
///
/// ```
/// use gallery_lib::model::{Artwork, ArtworkId};
/// use gallery_lib::selection::{reconcile, Reconciliation, SelectionSet};
///
/// let page = vec![Artwork::new(ArtworkId(1)), Artwork::new(ArtworkId(2))];
/// let mut selection: SelectionSet = [ArtworkId(1), ArtworkId(99)].into_iter().collect();
///
/// let outcome = reconcile(&mut selection, &page, [ArtworkId(2)], false);
///
/// assert_eq!(outcome, Reconciliation::Applied);
/// assert!(selection.contains(ArtworkId(2)));
/// assert!(selection.contains(ArtworkId(99)));
/// assert!(!selection.contains(ArtworkId(1)));
/// ```
pub fn reconcile(
    selection: &mut SelectionSet,
    displayed: &[Artwork],
    snapshot: impl IntoIterator<Item = ArtworkId>,
    bulk_active: bool,
) -> Reconciliation {
    if bulk_active {
        return Reconciliation::Ignored;
    }

    for record in displayed {
        selection.remove(record.id);
    }
    selection.extend(snapshot);

    Reconciliation::Applied
}
