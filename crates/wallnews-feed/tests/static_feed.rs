//! Static snapshot loading from disk.

use std::io::Write;

use tempfile::NamedTempFile;
use wallnews_feed::{try_load_snapshot, CardFeed, FeedError, FeedOrigin, StaticFeed};

fn snapshot_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[tokio::test]
async fn test_static_feed_loads_cards_and_export_time() {
    let file = snapshot_file(
        r#"{
            "exportedAt": "2026-10-14T18:05:00.000Z",
            "count": 2,
            "superCards": [
                {"id": "s1", "title": "One", "rootsCheck": "Pending"},
                {"id": "s2", "title": "Two"}
            ]
        }"#,
    );

    let batch = StaticFeed::from_path(file.path()).load().await;
    assert_eq!(batch.origin, FeedOrigin::Static);
    assert_eq!(batch.exported_at.as_deref(), Some("2026-10-14T18:05:00.000Z"));
    let ids: Vec<_> = batch.cards.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(ids, vec!["s1", "s2"]);
}

#[tokio::test]
async fn test_empty_object_snapshot_is_empty_feed() {
    let file = snapshot_file("{}");
    let batch = StaticFeed::from_path(file.path()).load().await;
    assert!(batch.is_empty());
    assert!(batch.exported_at.is_none());
}

#[tokio::test]
async fn test_missing_super_cards_is_empty_feed() {
    let file = snapshot_file(r#"{"exportedAt": "2026-10-14T18:05:00Z", "count": 0}"#);
    let batch = StaticFeed::from_path(file.path()).load().await;
    assert!(batch.is_empty());
    assert_eq!(batch.exported_at.as_deref(), Some("2026-10-14T18:05:00Z"));
}

#[tokio::test]
async fn test_malformed_snapshot_degrades_to_empty() {
    let file = snapshot_file("{\"superCards\": [ {\"id\": ");
    let batch = StaticFeed::from_path(file.path()).load().await;
    assert!(batch.is_empty());

    let err = try_load_snapshot(file.path()).await.unwrap_err();
    assert!(matches!(err, FeedError::Core(_)));
}

#[tokio::test]
async fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = try_load_snapshot(&dir.path().join("supercards.json"))
        .await
        .unwrap_err();
    assert!(matches!(err, FeedError::Io(_)));
}

#[tokio::test]
async fn test_bundled_example_export() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../../data/supercards.json");
    let batch = StaticFeed::from_path(path).load().await;

    assert_eq!(batch.len(), 2);
    assert_eq!(batch.exported_at.as_deref(), Some("2026-10-15T07:45:12.318Z"));

    let views = wallnews_core::render_feed(&batch.cards);
    assert!(views[0].verified);
    assert_eq!(views[0].source_badges.len(), 3);
    assert_eq!(
        views[0].divergences[0].unresolved_markers().collect::<Vec<_>>(),
        vec!["4"]
    );
    assert!(!views[1].verified);
    assert_eq!(views[1].roots_check.status, wallnews_core::RootsStatus::Unknown);
    assert_eq!(views[1].source_count, 1);
    assert_eq!(views[1].timeframe, "Recent");
}
