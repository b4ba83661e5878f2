//! Card feeds: the one boundary between upstream data and rendering.
//!
//! A feed yields a [`FeedBatch`] from exactly one origin, either the live
//! backend or a static export snapshot. Loading never fails from the
//! caller's point of view: errors are logged and the batch is empty.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Serialize;
use tracing::Instrument;

use wallnews_core::{emit_feed_degraded, emit_feed_loaded, feed_span, StaticSnapshot, SuperNewsCard};

use crate::backend::BackendClient;
use crate::Result;

/// Where a batch came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedOrigin {
    Live,
    Static,
}

impl FeedOrigin {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Live => "live",
            Self::Static => "static",
        }
    }
}

impl std::fmt::Display for FeedOrigin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Cards handed to the rendering layer, unmodified.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedBatch {
    pub origin: FeedOrigin,
    /// Export time; only static snapshots carry one.
    pub exported_at: Option<String>,
    pub cards: Vec<SuperNewsCard>,
}

impl FeedBatch {
    pub fn empty(origin: FeedOrigin) -> Self {
        Self {
            origin,
            exported_at: None,
            cards: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    fn emit_loaded(&self) {
        emit_feed_loaded(
            self.origin.as_str(),
            self.cards.len(),
            self.exported_at.as_deref(),
        );
    }
}

/// A single best-effort source of cards.
#[async_trait]
pub trait CardFeed: Send + Sync {
    fn origin(&self) -> FeedOrigin;

    async fn load(&self) -> FeedBatch;
}

/// Cards from the backend stream endpoint.
pub struct LiveFeed {
    client: BackendClient,
}

impl LiveFeed {
    pub fn new(client: BackendClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl CardFeed for LiveFeed {
    fn origin(&self) -> FeedOrigin {
        FeedOrigin::Live
    }

    async fn load(&self) -> FeedBatch {
        async {
            let batch = FeedBatch {
                origin: FeedOrigin::Live,
                exported_at: None,
                cards: self.client.fetch_cards().await,
            };
            batch.emit_loaded();
            batch
        }
        .instrument(feed_span(FeedOrigin::Live.as_str()))
        .await
    }
}

enum SnapshotSource {
    Path(PathBuf),
    Bundled(StaticSnapshot),
}

/// Cards from a static export snapshot, on disk or already in memory.
pub struct StaticFeed {
    source: SnapshotSource,
}

impl StaticFeed {
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self {
            source: SnapshotSource::Path(path.into()),
        }
    }

    pub fn from_snapshot(snapshot: StaticSnapshot) -> Self {
        Self {
            source: SnapshotSource::Bundled(snapshot),
        }
    }
}

/// Read and parse a snapshot file, surfacing every failure.
pub async fn try_load_snapshot(path: &Path) -> Result<StaticSnapshot> {
    let text = tokio::fs::read_to_string(path).await?;
    Ok(StaticSnapshot::parse(&text)?)
}

#[async_trait]
impl CardFeed for StaticFeed {
    fn origin(&self) -> FeedOrigin {
        FeedOrigin::Static
    }

    async fn load(&self) -> FeedBatch {
        async {
            let snapshot = match &self.source {
                SnapshotSource::Bundled(snapshot) => snapshot.clone(),
                SnapshotSource::Path(path) => match try_load_snapshot(path).await {
                    Ok(snapshot) => snapshot,
                    Err(err) => {
                        emit_feed_degraded(FeedOrigin::Static.as_str(), &err);
                        StaticSnapshot::default()
                    }
                },
            };

            let batch = FeedBatch {
                origin: FeedOrigin::Static,
                exported_at: snapshot.exported_at,
                cards: snapshot.super_cards,
            };
            batch.emit_loaded();
            batch
        }
        .instrument(feed_span(FeedOrigin::Static.as_str()))
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_labels() {
        assert_eq!(FeedOrigin::Live.to_string(), "live");
        assert_eq!(
            serde_json::to_value(FeedOrigin::Static).unwrap(),
            serde_json::json!("static")
        );
    }

    #[test]
    fn test_empty_batch() {
        let batch = FeedBatch::empty(FeedOrigin::Live);
        assert!(batch.is_empty());
        assert_eq!(batch.len(), 0);
        assert!(batch.exported_at.is_none());
    }

    #[tokio::test]
    async fn test_bundled_snapshot_loads_unmodified() {
        let snapshot = StaticSnapshot::parse(
            r#"{"exportedAt": "2026-10-14T18:05:00Z", "count": 1, "superCards": [{"id": "x", "title": "T"}]}"#,
        )
        .unwrap();
        let feed = StaticFeed::from_snapshot(snapshot.clone());
        assert_eq!(feed.origin(), FeedOrigin::Static);

        let batch = feed.load().await;
        assert_eq!(batch.exported_at.as_deref(), Some("2026-10-14T18:05:00Z"));
        assert_eq!(batch.cards, snapshot.super_cards);
    }

    #[tokio::test]
    async fn test_missing_snapshot_file_is_empty_batch() {
        let feed = StaticFeed::from_path("/nonexistent/wallnews/supercards.json");
        let batch = feed.load().await;
        assert!(batch.is_empty());
        assert_eq!(batch.origin, FeedOrigin::Static);
    }
}
