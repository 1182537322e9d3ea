//! Selection set

use std::collections::HashSet;

use crate::model::ArtworkId;

/// The global set of selected artwork ids.
///
/// Membership does not depend on whether an id's record is cached or
/// displayed; bulk selection in particular selects ids whose pages the
/// table has never shown.
///
/// # Example
///
/// ```
/// use gallery_lib::model::ArtworkId;
/// use gallery_lib::selection::SelectionSet;
///
/// let mut selection = SelectionSet::new();
/// selection.add(ArtworkId(1));
/// selection.replace_all([ArtworkId(2), ArtworkId(3)]);
///
/// assert!(!selection.contains(ArtworkId(1)));
/// assert_eq!(selection.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    ids: HashSet<ArtworkId>,
}

impl SelectionSet {
    /// Creates an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects an id. Returns `true` if it was not already selected.
    pub fn add(&mut self, id: ArtworkId) -> bool {
        self.ids.insert(id)
    }

    /// Deselects an id. Returns `true` if it was selected.
    pub fn remove(&mut self, id: ArtworkId) -> bool {
        self.ids.remove(&id)
    }

    /// Returns `true` if the id is selected.
    pub fn contains(&self, id: ArtworkId) -> bool {
        self.ids.contains(&id)
    }

    /// Replaces the whole selection in one step.
    pub fn replace_all(&mut self, ids: impl IntoIterator<Item = ArtworkId>) {
        self.ids = ids.into_iter().collect();
    }

    /// Deselects everything.
    pub fn clear(&mut self) {
        self.ids.clear();
    }

    /// Returns a copy of the selected ids.
    pub fn snapshot(&self) -> HashSet<ArtworkId> {
        self.ids.clone()
    }

    /// Returns the number of selected ids.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns `true` if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

impl FromIterator<ArtworkId> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = ArtworkId>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}

impl Extend<ArtworkId> for SelectionSet {
    fn extend<I: IntoIterator<Item = ArtworkId>>(&mut self, iter: I) {
        self.ids.extend(iter);
    }
}
