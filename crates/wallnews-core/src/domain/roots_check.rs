//! Roots-check verification descriptor.

use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::lenient;

/// Icon used when the upstream sent only a message string.
pub const FALLBACK_ICON: &str = "❓";

/// Confidence descriptor used when the upstream sent only a message string.
pub const UNKNOWN_CONFIDENCE: &str = "unknown";

/// Verification status.
///
/// The upstream emits `verified`, `partial` or `unverified`. `Unknown` is a
/// local state for degraded input and for any unrecognised status value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RootsStatus {
    Verified,
    Partial,
    Unverified,
    #[default]
    #[serde(other)]
    Unknown,
}

/// Visual weight of a roots-check badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BadgeTone {
    Positive,
    Caution,
    Negative,
}

impl RootsStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Verified => "verified",
            Self::Partial => "partial",
            Self::Unverified => "unverified",
            Self::Unknown => "unknown",
        }
    }

    /// Unverified and unknown share the negative tone.
    pub fn tone(self) -> BadgeTone {
        match self {
            Self::Verified => BadgeTone::Positive,
            Self::Partial => BadgeTone::Caution,
            Self::Unverified | Self::Unknown => BadgeTone::Negative,
        }
    }
}

impl std::fmt::Display for RootsStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured roots-check descriptor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootsCheck {
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub status: RootsStatus,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub icon: String,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub message: String,
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub confidence: String,
}

impl RootsCheck {
    /// Descriptor for a bare message with no structured status.
    pub fn unknown(message: impl Into<String>) -> Self {
        Self {
            status: RootsStatus::Unknown,
            icon: FALLBACK_ICON.to_string(),
            message: message.into(),
            confidence: UNKNOWN_CONFIDENCE.to_string(),
        }
    }
}

/// Roots check as it arrives on the wire: structured, or degraded to a
/// bare message string.
///
/// Decode at the boundary and normalise straight away with
/// [`crate::trust::normalize_roots_check`]; nothing downstream should match
/// on this type.
///
/// Only a JSON object decodes as `Structured` and only a string as
/// `Message`; every other JSON type is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RootsCheckInput {
    Structured(RootsCheck),
    Message(String),
}

impl<'de> Deserialize<'de> for RootsCheckInput {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Value::deserialize(deserializer)? {
            Value::String(message) => Ok(Self::Message(message)),
            value @ Value::Object(_) => RootsCheck::deserialize(value)
                .map(Self::Structured)
                .map_err(de::Error::custom),
            other => Err(de::Error::custom(format!(
                "expected roots-check object or message string, found {}",
                lenient::kind_of(&other)
            ))),
        }
    }
}

impl From<RootsCheck> for RootsCheckInput {
    fn from(value: RootsCheck) -> Self {
        Self::Structured(value)
    }
}

impl From<&str> for RootsCheckInput {
    fn from(value: &str) -> Self {
        Self::Message(value.to_string())
    }
}
