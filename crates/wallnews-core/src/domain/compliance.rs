//! Editorial compliance signal attached to each card upstream.

use serde::{Deserialize, Serialize};

use super::lenient;

/// Upper bound of the compliance scale.
pub const MAX_SCORE: f64 = 100.0;

/// Named sub-checks. Pass-through only; nothing here is computed locally.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceDetails {
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub has_citations: bool,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub has_conclusion: bool,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub no_forbidden_adjectives: bool,
    /// Upstream assertion that `summary` carries no citation markers.
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub summary_no_citations: bool,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub wallbot_has_citations: bool,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub has_facts: bool,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub has_divergences: bool,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub has_wallbot_analysis: bool,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub has_perspectives: bool,
}

/// Compliance record. `score` is nominally 0-100 but is not trusted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Compliance {
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub score: f64,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub is_valid: bool,
    #[serde(default, deserialize_with = "lenient::object_or_default")]
    pub details: ComplianceDetails,
}

impl Compliance {
    pub fn with_score(score: f64) -> Self {
        Self {
            score,
            ..Self::default()
        }
    }

    /// Score clamped to `0..=100`; NaN reads as 0.
    pub fn clamped_score(&self) -> f64 {
        if self.score.is_nan() {
            return 0.0;
        }
        self.score.clamp(0.0, MAX_SCORE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_clamped_score() {
        assert_eq!(Compliance::with_score(94.0).clamped_score(), 94.0);
        assert_eq!(Compliance::with_score(-5.0).clamped_score(), 0.0);
        assert_eq!(Compliance::with_score(250.0).clamped_score(), 100.0);
        assert_eq!(Compliance::with_score(f64::NAN).clamped_score(), 0.0);
        assert_eq!(Compliance::with_score(f64::INFINITY).clamped_score(), 100.0);
    }

    #[test]
    fn test_decode_partial_record() {
        let c: Compliance = serde_json::from_value(json!({
            "score": "high",
            "details": {"hasFacts": true, "hasPerspectives": "yes"}
        }))
        .unwrap();
        assert_eq!(c.score, 0.0);
        assert!(!c.is_valid);
        assert!(c.details.has_facts);
        assert!(!c.details.has_perspectives);
    }

    #[test]
    fn test_positional_details_are_ignored() {
        let c: Compliance = serde_json::from_value(json!({
            "score": 92,
            "details": [true, true, true, true, true, true, true, true, true]
        }))
        .unwrap();
        assert_eq!(c.score, 92.0);
        assert_eq!(c.details, ComplianceDetails::default());
    }

    #[test]
    fn test_details_wire_names() {
        let details = ComplianceDetails {
            summary_no_citations: true,
            ..ComplianceDetails::default()
        };
        let value = serde_json::to_value(&details).unwrap();
        assert_eq!(value["summaryNoCitations"], json!(true));
        assert_eq!(value["noForbiddenAdjectives"], json!(false));
    }
}
