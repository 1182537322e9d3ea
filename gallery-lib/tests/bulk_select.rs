//! Bulk "select first N" through a session.

mod common;

use common::FakeSource;
use common::GatedSource;
use common::id;
use common::ids;
use gallery_lib::Session;
use gallery_lib::SessionConfig;
use gallery_lib::selection::BulkSelector;
use gallery_lib::selection::Reconciliation;

#[tokio::test]
async fn test_select_first_15_spans_two_pages() {
    let source = FakeSource::with_records(100);
    let session = Session::new(source.clone(), SessionConfig::default());

    let selected = session.select_first_n(15).await.unwrap();

    assert_eq!(selected, 15);
    assert_eq!(session.selected_ids(), ids(0..15));
    assert_eq!(source.calls(), vec![0, 1]);
    assert!(!session.is_bulk_selecting());
    assert!(!session.is_loading());
}

#[tokio::test]
async fn test_exact_multiple_of_page_size() {
    let source = FakeSource::with_records(100);
    let session = Session::new(source.clone(), SessionConfig::default());

    session.select_first_n(24).await.unwrap();

    assert_eq!(session.selected_ids(), ids(0..24));
    assert_eq!(source.calls(), vec![0, 1]);
}

#[tokio::test]
async fn test_invalid_counts_are_rejected() {
    let source = FakeSource::with_records(100);
    let session = Session::new(source.clone(), SessionConfig::default());
    session.open().await.unwrap();
    session.apply_page_selection([id(2), id(3)]);
    source.reset_calls();

    for n in [0, -5] {
        let err = session.select_first_n(n).await.unwrap_err();
        assert!(err.is_invalid_count());
        assert_eq!(err.to_string(), "Please enter a valid number");
    }

    assert!(source.calls().is_empty());
    assert_eq!(session.selected_ids(), ids(2..4));
    assert!(!session.is_bulk_selecting());
}

#[tokio::test]
async fn test_failed_page_aborts_bulk_selection() {
    let source = FakeSource::with_records(100);
    let session = Session::new(source.clone(), SessionConfig::default());
    session.open().await.unwrap();
    session.apply_page_selection([id(0)]);
    source.reset_calls();
    source.fail_page(1);

    let err = session.select_first_n(30).await.unwrap_err();

    assert!(err.as_transport().is_some());
    assert_eq!(source.calls(), vec![0, 1]);
    // Cleared on entry and not restored; nothing from the scan applied.
    assert!(session.selected_ids().is_empty());
    assert!(!session.is_bulk_selecting());
    assert!(!session.is_loading());

    source.heal();
    session.navigate(1).await.unwrap();
    assert_eq!(session.page_index(), 1);
    assert_eq!(session.apply_page_selection([id(12)]), Reconciliation::Applied);
    assert_eq!(session.selected_ids(), ids(12..13));

    assert_eq!(session.select_first_n(30).await.unwrap(), 30);
    assert_eq!(session.selected_ids(), ids(0..30));
}

#[tokio::test]
async fn test_count_beyond_known_total() {
    let source = FakeSource::with_records(30);
    let session = Session::new(source.clone(), SessionConfig::default());
    session.open().await.unwrap();
    source.reset_calls();

    let selected = session.select_first_n(1000).await.unwrap();

    assert_eq!(selected, 30);
    assert_eq!(session.selected_ids(), ids(0..30));
    assert_eq!(source.calls(), vec![0, 1, 2]);
}

#[tokio::test]
async fn test_count_beyond_unknown_total_stops_at_short_page() {
    let source = FakeSource::with_records(30);
    let session = Session::new(source.clone(), SessionConfig::default());

    let selected = session.select_first_n(100).await.unwrap();

    assert_eq!(selected, 30);
    assert_eq!(source.calls(), vec![0, 1, 2]);
}

#[tokio::test]
async fn test_count_beyond_unknown_total_stops_at_reported_total() {
    let source = FakeSource::with_records(24);
    let session = Session::new(source.clone(), SessionConfig::default());

    let selected = session.select_first_n(100).await.unwrap();

    assert_eq!(selected, 24);
    assert_eq!(session.selected_ids(), ids(0..24));
    assert_eq!(source.calls(), vec![0, 1]);
}

#[tokio::test]
async fn test_bulk_selection_shows_on_later_pages() {
    let source = FakeSource::with_records(100);
    let session = Session::new(source.clone(), SessionConfig::default());
    session.open().await.unwrap();

    session.select_first_n(15).await.unwrap();
    assert_eq!(session.page_selection().len(), 12);

    session.navigate(1).await.unwrap();
    let view: Vec<_> = session.page_selection().into_iter().map(|r| r.id).collect();
    assert_eq!(view, vec![id(12), id(13), id(14)]);

    assert!(session.cached_page(1).is_some());
}

#[tokio::test]
async fn test_bulk_replaces_previous_selection() {
    let source = FakeSource::with_records(100);
    let session = Session::new(source, SessionConfig::default());
    session.navigate(5).await.unwrap();
    session.apply_page_selection([id(60), id(61)]);

    session.select_first_n(3).await.unwrap();

    assert_eq!(session.selected_ids(), ids(0..3));
}

#[tokio::test]
async fn test_page_events_ignored_while_bulk_in_flight() {
    let gated = GatedSource::new(FakeSource::with_records(60), 1);
    let session = Session::new(gated.clone(), SessionConfig::default());
    session.open().await.unwrap();
    session.apply_page_selection([id(5)]);

    let bulk = session.select_first_n(20);
    let interfere = async {
        gated.reached.notified().await;
        assert!(session.is_bulk_selecting());
        assert!(session.is_loading());
        assert!(session.selected_ids().is_empty());

        let outcome = session.apply_page_selection([id(0), id(1)]);
        assert_eq!(outcome, Reconciliation::Ignored);
        assert!(session.selected_ids().is_empty());

        session.navigate(2).await.unwrap();
        assert_eq!(session.page_index(), 2);

        gated.release.notify_one();
    };
    let (result, ()) = tokio::join!(bulk, interfere);

    assert_eq!(result.unwrap(), 20);
    assert!(!session.is_bulk_selecting());
    assert_eq!(session.selected_ids(), ids(0..20));
    assert_eq!(gated.calls(), vec![0, 0, 2, 1]);
}

#[tokio::test]
async fn test_dropped_bulk_selection_leaves_bulk_mode() {
    let gated = GatedSource::new(FakeSource::with_records(60), 1);
    let session = Session::new(gated.clone(), SessionConfig::default());
    session.open().await.unwrap();

    tokio::select! {
        _ = session.select_first_n(20) => panic!("bulk selection finished while its page was parked"),
        _ = gated.reached.notified() => {}
    }

    assert!(!session.is_bulk_selecting());
    assert!(!session.is_loading());
    // Page 0 was absorbed before the scan was dropped; nothing was applied.
    assert!(session.selected_ids().is_empty());
    assert_eq!(gated.calls(), vec![0, 0]);

    assert_eq!(session.apply_page_selection([id(3)]), Reconciliation::Applied);
    assert_eq!(session.selected_ids(), ids(3..4));
}

#[tokio::test]
async fn test_selector_takes_head_of_cut_page() {
    let source = FakeSource::with_records(50);
    let selector = BulkSelector::new(source.as_ref(), 12);

    let scan = selector.collect(27).await.unwrap();

    assert_eq!(scan.pages_fetched, 3);
    assert_eq!(scan.ids.len(), 27);
    assert_eq!(scan.ids, (0..27).map(id).collect::<Vec<_>>());
}
