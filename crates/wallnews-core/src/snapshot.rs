//! Static export snapshot: `{ exportedAt, count, superCards }`.
//!
//! Written by the backend's export job and bundled with the front end.
//! Decoding is lenient below the top level: `{}` or a missing `superCards`
//! is an empty feed, not an error.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::domain::lenient;
use crate::domain::{CoreError, Result, SuperNewsCard};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaticSnapshot {
    /// ISO-8601 export time, as written by the exporter.
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub exported_at: Option<String>,
    /// Card count claimed by the exporter. Informational only.
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub count: Option<u64>,
    #[serde(default, deserialize_with = "lenient::object_seq")]
    pub super_cards: Vec<SuperNewsCard>,
}

impl StaticSnapshot {
    /// Parse snapshot text. Fails only on invalid JSON or a non-object root.
    pub fn parse(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self> {
        if !value.is_object() {
            return Err(CoreError::SnapshotShape {
                found: lenient::kind_of(&value),
            });
        }
        let snapshot: Self = serde_json::from_value(value)?;
        if snapshot.count_mismatch() {
            warn!(
                declared = ?snapshot.count,
                decoded = snapshot.super_cards.len(),
                "snapshot count does not match decoded cards"
            );
        }
        Ok(snapshot)
    }

    /// Declared `count` disagrees with the number of decoded cards.
    pub fn count_mismatch(&self) -> bool {
        self.count
            .is_some_and(|declared| declared != self.super_cards.len() as u64)
    }

    pub fn into_cards(self) -> Vec<SuperNewsCard> {
        self.super_cards
    }
}

/// Human-readable export time, `YYYY-MM-DD HH:MM UTC`.
///
/// Falls back to the raw string when it is not RFC 3339.
pub fn format_exported_at(raw: &str) -> String {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| {
            dt.with_timezone(&Utc)
                .format("%Y-%m-%d %H:%M UTC")
                .to_string()
        })
        .unwrap_or_else(|_| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_snapshot() {
        let snapshot = StaticSnapshot::parse(
            r#"{
                "exportedAt": "2026-10-15T09:30:00.000Z",
                "count": 2,
                "superCards": [{"id": "a", "title": "A"}, {"id": "b", "title": "B"}]
            }"#,
        )
        .unwrap();
        assert_eq!(snapshot.exported_at.as_deref(), Some("2026-10-15T09:30:00.000Z"));
        assert_eq!(snapshot.count, Some(2));
        assert!(!snapshot.count_mismatch());
        let ids: Vec<_> = snapshot.into_cards().into_iter().map(|c| c.id).collect();
        assert_eq!(ids, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_empty_object_is_empty_feed() {
        let snapshot = StaticSnapshot::parse("{}").unwrap();
        assert!(snapshot.super_cards.is_empty());
        assert!(snapshot.exported_at.is_none());
    }

    #[test]
    fn test_wrong_typed_super_cards_is_empty_feed() {
        let snapshot = StaticSnapshot::parse(r#"{"superCards": "none", "count": 4}"#).unwrap();
        assert!(snapshot.super_cards.is_empty());
        assert!(snapshot.count_mismatch());
    }

    #[test]
    fn test_invalid_json_is_error() {
        let err = StaticSnapshot::parse("{\"superCards\": [").unwrap_err();
        assert!(matches!(err, CoreError::Serialization(_)));
    }

    #[test]
    fn test_non_object_root_is_error() {
        let err = StaticSnapshot::parse("[1, 2]").unwrap_err();
        assert!(matches!(err, CoreError::SnapshotShape { found: "array" }));
    }

    #[test]
    fn test_format_exported_at() {
        assert_eq!(
            format_exported_at("2026-10-15T09:30:00.000Z"),
            "2026-10-15 09:30 UTC"
        );
        assert_eq!(
            format_exported_at("2026-10-15T11:30:00+02:00"),
            "2026-10-15 09:30 UTC"
        );
        assert_eq!(format_exported_at("yesterday"), "yesterday");
    }
}
