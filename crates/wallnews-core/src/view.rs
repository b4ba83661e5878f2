//! Card view model: everything the presentation layer needs, materialised.

use serde::Serialize;

use crate::cited_text::{render_cited_text, CitedText};
use crate::domain::{BadgeTone, RootsCheck, SuperNewsCard};
use crate::obs;
use crate::trust::{compliance_score, derive_verified_badge, normalize_optional_roots_check};

/// Category label when the card has none.
pub const DEFAULT_CATEGORY: &str = "NEWS";

/// Timeframe label when the card has none.
pub const DEFAULT_TIMEFRAME: &str = "Recent";

/// Entry in the card's source list.
///
/// `position` is the 1-based list index. It is not a citation-map key and
/// may differ from the marker that cites the same publication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceBadge {
    pub position: usize,
    pub name: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardView {
    pub id: String,
    pub category_label: String,
    pub source_count: usize,
    pub verified: bool,
    pub title: String,
    pub summary: String,
    pub roots_check: RootsCheck,
    pub roots_tone: BadgeTone,
    pub body: CitedText,
    pub facts: Vec<CitedText>,
    pub divergences: Vec<CitedText>,
    pub uncertainties: Vec<CitedText>,
    pub analysis: CitedText,
    pub source_badges: Vec<SourceBadge>,
    pub compliance_score: f64,
    pub timeframe: String,
}

impl CardView {
    pub fn from_card(card: &SuperNewsCard) -> Self {
        let citations = &card.citations_map;
        let render_all = |entries: &[String]| -> Vec<CitedText> {
            entries
                .iter()
                .map(|entry| render_cited_text(Some(entry.as_str()), citations))
                .collect()
        };

        let roots_check = normalize_optional_roots_check(card.roots_check.as_ref());
        let roots_tone = roots_check.status.tone();

        Self {
            id: card.id.clone(),
            category_label: category_label(card.category.as_deref()),
            source_count: card
                .source_count
                .map(|n| n as usize)
                .unwrap_or(card.sources.len()),
            verified: derive_verified_badge(card.compliance.as_ref()),
            title: card.title.clone(),
            summary: card.summary.clone(),
            roots_check,
            roots_tone,
            body: render_cited_text(card.body_cited.as_deref(), citations),
            facts: render_all(&card.facts),
            divergences: render_all(&card.divergences),
            uncertainties: render_all(&card.uncertainties),
            analysis: render_cited_text(card.wallbot_analysis.as_deref(), citations),
            source_badges: card
                .sources
                .iter()
                .enumerate()
                .map(|(idx, source)| SourceBadge {
                    position: idx + 1,
                    name: source.name.clone(),
                    url: source.url.clone(),
                })
                .collect(),
            compliance_score: compliance_score(card.compliance.as_ref()),
            timeframe: card
                .when
                .as_ref()
                .map(|when| when.timeframe.as_str())
                .filter(|t| !t.is_empty())
                .unwrap_or(DEFAULT_TIMEFRAME)
                .to_string(),
        }
    }

    /// Every rendered field, in display order.
    pub fn cited_fields(&self) -> impl Iterator<Item = &CitedText> {
        std::iter::once(&self.body)
            .chain(self.facts.iter())
            .chain(self.divergences.iter())
            .chain(self.uncertainties.iter())
            .chain(std::iter::once(&self.analysis))
    }

    pub fn unresolved_citation_count(&self) -> usize {
        self.cited_fields()
            .map(|field| field.unresolved_markers().count())
            .sum()
    }
}

fn category_label(category: Option<&str>) -> String {
    match category {
        Some(c) if !c.is_empty() => c.to_uppercase(),
        _ => DEFAULT_CATEGORY.to_string(),
    }
}

/// Render each card independently.
pub fn render_feed(cards: &[SuperNewsCard]) -> Vec<CardView> {
    cards
        .iter()
        .map(|card| {
            let view = CardView::from_card(card);
            obs::emit_card_rendered(
                &view.id,
                view.verified,
                view.roots_check.status,
                view.unresolved_citation_count(),
            );
            view
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        CitationsMap, Compliance, RootsCheckInput, RootsStatus, Source, When, FALLBACK_ICON,
    };

    fn sample_card() -> SuperNewsCard {
        let mut citations = CitationsMap::new();
        citations.insert("2".into(), Source::new("AP", "https://apnews.com/b"));
        citations.insert("5".into(), Source::new("Reuters", "https://reuters.com/a"));

        SuperNewsCard {
            id: "card-7".into(),
            title: "Title [1]".into(),
            summary: "Summary".into(),
            category: Some("politics".into()),
            sources: vec![
                Source::new("Reuters", "https://reuters.com/a"),
                Source::new("AP", "https://apnews.com/b"),
            ],
            citations_map: citations,
            body_cited: Some("Body [5] and [2].".into()),
            facts: vec!["Fact [2]".into(), "Bare fact".into()],
            divergences: vec!["Split [9]".into()],
            uncertainties: vec![],
            wallbot_analysis: Some("Analysis [5]".into()),
            roots_check: Some(RootsCheckInput::from("Pending review")),
            compliance: Some(Compliance::with_score(92.0)),
            when: Some(When {
                timeframe: "Today".into(),
                ..When::default()
            }),
            ..SuperNewsCard::default()
        }
    }

    #[test]
    fn test_from_card_materialises_fields() {
        let view = CardView::from_card(&sample_card());
        assert_eq!(view.category_label, "POLITICS");
        assert_eq!(view.source_count, 2);
        assert!(view.verified);
        assert_eq!(view.compliance_score, 92.0);
        assert_eq!(view.timeframe, "Today");
        assert_eq!(view.body.plain_text(), "Body [5] and [2].");
        assert_eq!(view.body.segments()[1].href(), Some("https://reuters.com/a"));
        assert_eq!(view.facts.len(), 2);
        assert_eq!(view.divergences[0].unresolved_markers().collect::<Vec<_>>(), vec!["9"]);
        assert!(view.uncertainties.is_empty());
        assert_eq!(view.analysis.segments()[1].label(), Some("Reuters"));
        assert_eq!(view.unresolved_citation_count(), 1);
    }

    #[test]
    fn test_title_and_summary_are_not_rendered() {
        let view = CardView::from_card(&sample_card());
        assert_eq!(view.title, "Title [1]");
        assert_eq!(view.summary, "Summary");
    }

    #[test]
    fn test_source_badges_use_positions_not_marker_keys() {
        let view = CardView::from_card(&sample_card());
        let positions: Vec<_> = view
            .source_badges
            .iter()
            .map(|b| (b.position, b.name.as_str()))
            .collect();
        assert_eq!(positions, vec![(1, "Reuters"), (2, "AP")]);
        // Reuters is cited as [5] in the text but listed at position 1.
        assert_eq!(view.body.segments()[1].display_text(), "[5]");
    }

    #[test]
    fn test_degraded_roots_check_normalised() {
        let view = CardView::from_card(&sample_card());
        assert_eq!(view.roots_check.status, RootsStatus::Unknown);
        assert_eq!(view.roots_check.icon, FALLBACK_ICON);
        assert_eq!(view.roots_check.message, "Pending review");
        assert_eq!(view.roots_tone, BadgeTone::Negative);
    }

    #[test]
    fn test_empty_card_degrades_per_field() {
        let view = CardView::from_card(&SuperNewsCard::default());
        assert_eq!(view.category_label, DEFAULT_CATEGORY);
        assert_eq!(view.timeframe, DEFAULT_TIMEFRAME);
        assert_eq!(view.source_count, 0);
        assert!(!view.verified);
        assert_eq!(view.compliance_score, 0.0);
        assert!(view.body.is_empty());
        assert!(view.analysis.is_empty());
        assert!(view.source_badges.is_empty());
        assert_eq!(view.roots_check.status, RootsStatus::Unknown);
    }

    #[test]
    fn test_explicit_source_count_wins() {
        let card = SuperNewsCard {
            source_count: Some(5),
            ..sample_card()
        };
        assert_eq!(CardView::from_card(&card).source_count, 5);
    }

    #[test]
    fn test_render_feed_preserves_order() {
        let mut second = sample_card();
        second.id = "card-8".into();
        let views = render_feed(&[sample_card(), second]);
        let ids: Vec<_> = views.iter().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["card-7", "card-8"]);
        assert!(render_feed(&[]).is_empty());
    }
}
