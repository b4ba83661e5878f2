//! Trust badge policy: roots-check normalisation and the compliance threshold.

use crate::domain::{Compliance, RootsCheck, RootsCheckInput};

/// Minimum compliance score for the "WallNews Verified" badge.
pub const VERIFIED_SCORE_THRESHOLD: f64 = 90.0;

/// Collapse the wire union into a structured descriptor.
///
/// A bare message becomes an `unknown` descriptor with the fallback icon;
/// a structured value is returned as-is, so normalising twice is the same
/// as normalising once.
pub fn normalize_roots_check(input: RootsCheckInput) -> RootsCheck {
    match input {
        RootsCheckInput::Structured(check) => check,
        RootsCheckInput::Message(message) => RootsCheck::unknown(message),
    }
}

/// Normalise an optional roots check; absence reads as an empty message.
pub fn normalize_optional_roots_check(input: Option<&RootsCheckInput>) -> RootsCheck {
    match input {
        Some(input) => normalize_roots_check(input.clone()),
        None => RootsCheck::unknown(""),
    }
}

/// Score used for display. Missing compliance reads as 0.
pub fn compliance_score(compliance: Option<&Compliance>) -> f64 {
    compliance.map(Compliance::clamped_score).unwrap_or(0.0)
}

/// Whether the card earns the verified badge.
pub fn derive_verified_badge(compliance: Option<&Compliance>) -> bool {
    compliance_score(compliance) >= VERIFIED_SCORE_THRESHOLD
}
