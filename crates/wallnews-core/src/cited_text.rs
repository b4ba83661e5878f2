//! Inline citation rendering.
//!
//! Free text from the upstream carries bracketed markers such as `[1]` or
//! `[12]`. [`render_cited_text`] splits a string into plain runs and
//! citation references resolved against the card's [`CitationsMap`].
//!
//! Marker grammar: `[`, one or more ASCII digits, `]`. Nothing looser is a
//! marker: `[ 1]`, `[1a]` and `[]` stay plain text.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::{CitationsMap, Source};

const MARKER_PATTERN: &str = r"\[([0-9]+)\]";

fn marker_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(MARKER_PATTERN).expect("marker pattern compiles"))
}

/// One renderable piece of cited text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Segment {
    /// Plain run, never empty.
    Text { value: String },
    /// Marker occurrence. `source` is `None` when the key is not in the map.
    Citation {
        marker: String,
        source: Option<Source>,
    },
}

impl Segment {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text {
            value: value.into(),
        }
    }

    pub fn citation(marker: impl Into<String>, source: Option<Source>) -> Self {
        Self::Citation {
            marker: marker.into(),
            source,
        }
    }

    /// What the reader sees: the run itself, or `[marker]`.
    pub fn display_text(&self) -> String {
        match self {
            Self::Text { value } => value.clone(),
            Self::Citation { marker, .. } => format!("[{marker}]"),
        }
    }

    /// Link target for a resolved citation. Opens in a new browsing context.
    pub fn href(&self) -> Option<&str> {
        match self {
            Self::Citation {
                source: Some(source),
                ..
            } => Some(source.url.as_str()),
            _ => None,
        }
    }

    /// Tooltip / accessible label for a resolved citation.
    pub fn label(&self) -> Option<&str> {
        match self {
            Self::Citation {
                source: Some(source),
                ..
            } => Some(source.name.as_str()),
            _ => None,
        }
    }

    pub fn is_citation(&self) -> bool {
        matches!(self, Self::Citation { .. })
    }

    pub fn is_linked(&self) -> bool {
        self.href().is_some()
    }
}

/// Ordered segments for one free-text field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CitedText(Vec<Segment>);

impl CitedText {
    pub fn segments(&self) -> &[Segment] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Concatenated display text. Reproduces marker-free input exactly.
    pub fn plain_text(&self) -> String {
        self.0.iter().map(Segment::display_text).collect()
    }

    /// Marker keys in order of appearance, repeats included.
    pub fn markers(&self) -> impl Iterator<Item = &str> {
        self.0.iter().filter_map(|segment| match segment {
            Segment::Citation { marker, .. } => Some(marker.as_str()),
            Segment::Text { .. } => None,
        })
    }

    /// Marker keys with no matching source.
    pub fn unresolved_markers(&self) -> impl Iterator<Item = &str> {
        self.0.iter().filter_map(|segment| match segment {
            Segment::Citation {
                marker,
                source: None,
            } => Some(marker.as_str()),
            _ => None,
        })
    }

    pub fn into_segments(self) -> Vec<Segment> {
        self.0
    }
}

impl From<Vec<Segment>> for CitedText {
    fn from(segments: Vec<Segment>) -> Self {
        Self(segments)
    }
}

impl IntoIterator for CitedText {
    type Item = Segment;
    type IntoIter = std::vec::IntoIter<Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a CitedText {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Direct key lookup. A miss is normal and renders as an unlinked marker.
pub fn resolve_source<'a>(citations: &'a CitationsMap, marker: &str) -> Option<&'a Source> {
    citations.get(marker)
}

/// Split `text` into plain runs and citation references.
///
/// Absent or empty text yields no segments. Empty runs between adjacent
/// markers are dropped. Pure: no state, no I/O.
pub fn render_cited_text(text: Option<&str>, citations: &CitationsMap) -> CitedText {
    let Some(text) = text else {
        return CitedText::default();
    };

    let mut segments = Vec::new();
    let mut cursor = 0;

    for caps in marker_pattern().captures_iter(text) {
        let (Some(whole), Some(digits)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        push_text(&mut segments, &text[cursor..whole.start()]);
        let marker = digits.as_str();
        segments.push(Segment::citation(
            marker,
            resolve_source(citations, marker).cloned(),
        ));
        cursor = whole.end();
    }
    push_text(&mut segments, &text[cursor..]);

    CitedText(segments)
}

fn push_text(segments: &mut Vec<Segment>, run: &str) {
    if !run.is_empty() {
        segments.push(Segment::text(run));
    }
}
