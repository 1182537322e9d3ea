//! Page selection view

use super::SelectionSet;
use crate::model::Artwork;
use crate::model::ArtworkId;

/// Returns the records of the displayed page that are selected, in page order.
///
/// This is computed fresh on every call and never stored.
pub fn page_view<'a>(displayed: &'a [Artwork], selection: &SelectionSet) -> Vec<&'a Artwork> {
    displayed.iter().filter(|r| selection.contains(r.id)).collect()
}

/// Same as [`page_view`], returning only the ids.
pub fn page_view_ids(displayed: &[Artwork], selection: &SelectionSet) -> Vec<ArtworkId> {
    page_view(displayed, selection).into_iter().map(|r| r.id).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_keeps_page_order_and_ignores_other_pages() {
        let page: Vec<Artwork> = [4, 9, 2].into_iter().map(|id| Artwork::new(ArtworkId(id))).collect();
        let selection: SelectionSet = [ArtworkId(2), ArtworkId(4), ArtworkId(100)].into_iter().collect();

        assert_eq!(page_view_ids(&page, &selection), vec![ArtworkId(4), ArtworkId(2)]);
    }

    #[test]
    fn test_view_of_empty_page() {
        let selection: SelectionSet = [ArtworkId(1)].into_iter().collect();
        assert!(page_view(&[], &selection).is_empty());
    }
}
