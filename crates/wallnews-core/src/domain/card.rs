//! SuperNewsCard wire contract.
//!
//! Cards are produced upstream (live stream endpoint or a static export) and
//! are treated as untrusted: every field decodes through a value-or-default
//! adapter, so a missing or wrongly-typed field never discards the card.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::compliance::Compliance;
use super::lenient;
use super::roots_check::RootsCheckInput;

/// An external publication reference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    /// Display label (publication name)
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub name: String,
    /// Canonical link
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub url: String,
    #[serde(
        default,
        deserialize_with = "lenient::or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub title: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub description: Option<String>,
}

impl Source {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            title: None,
            description: None,
        }
    }
}

/// Citation marker key (the digits inside `[n]`) to source.
///
/// Keys are whatever the upstream emitted; they are not guaranteed to be
/// dense, ordered, or aligned with positions in [`SuperNewsCard::sources`].
pub type CitationsMap = BTreeMap<String, Source>;

/// Main and alternative framings of the story.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Perspectives {
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub main: String,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub alternative: String,
}

/// Actors involved in the story.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Who {
    #[serde(default, deserialize_with = "lenient::string_seq")]
    pub people: Vec<String>,
    #[serde(default, deserialize_with = "lenient::string_seq")]
    pub organizations: Vec<String>,
    #[serde(default, deserialize_with = "lenient::string_seq")]
    pub countries: Vec<String>,
}

/// Event timing metadata.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct When {
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub event_date: String,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub is_fresh: bool,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub timeframe: String,
}

/// Background context and the upstream's own roots-check summary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Why {
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub context: String,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub roots_check: String,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub confidence: String,
}

/// One synthesized, multi-source news item.
///
/// Free-text fields that may carry inline `[n]` citation markers:
/// `body_cited`, each entry of `facts`/`divergences`/`uncertainties`, and
/// `wallbot_analysis`. `title` and `summary` are plain text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SuperNewsCard {
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub summary: String,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub description: String,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub url: String,
    #[serde(default, deserialize_with = "lenient::object_seq")]
    pub sources: Vec<Source>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub source_count: Option<u32>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub published_at: Option<String>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub is_super_news_card: bool,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub ai_synthesized: bool,
    #[serde(
        rename = "body_cited",
        default,
        deserialize_with = "lenient::or_default"
    )]
    pub body_cited: Option<String>,
    #[serde(default, deserialize_with = "lenient::object_map")]
    pub citations_map: CitationsMap,
    #[serde(default, deserialize_with = "lenient::string_seq")]
    pub facts: Vec<String>,
    #[serde(default, deserialize_with = "lenient::string_seq")]
    pub divergences: Vec<String>,
    #[serde(default, deserialize_with = "lenient::string_seq")]
    pub uncertainties: Vec<String>,
    #[serde(default, deserialize_with = "lenient::object_or_default")]
    pub perspectives: Perspectives,
    #[serde(default, deserialize_with = "lenient::string_seq")]
    pub geo_zones: Vec<String>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub wallbot_analysis: Option<String>,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub roots_check: Option<RootsCheckInput>,
    #[serde(default, deserialize_with = "lenient::object_or_default")]
    pub compliance: Option<Compliance>,
    #[serde(
        default,
        deserialize_with = "lenient::object_or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub who: Option<Who>,
    #[serde(
        default,
        deserialize_with = "lenient::or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub what: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient::object_or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub when: Option<When>,
    #[serde(
        default,
        deserialize_with = "lenient::object_or_default",
        skip_serializing_if = "Option::is_none"
    )]
    pub why: Option<Why>,
}

/// Decode a card list, skipping elements that are not objects.
pub fn cards_from_value(value: serde_json::Value) -> Vec<SuperNewsCard> {
    #[derive(Deserialize)]
    struct Cards(#[serde(deserialize_with = "lenient::object_seq")] Vec<SuperNewsCard>);

    serde_json::from_value::<Cards>(value)
        .map(|cards| cards.0)
        .unwrap_or_default()
}
