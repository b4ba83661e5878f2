//! WallNews Core Library
//!
//! The SuperNewsCard data contract, inline citation rendering, and the
//! trust badge policy shared by the feed loader and the CLI.
//!
//! Control flow: a feed yields [`SuperNewsCard`]s, each card becomes a
//! [`CardView`] (free-text fields rendered through [`render_cited_text`],
//! roots check normalised, verified badge derived), and the presentation
//! layer draws the view.

pub mod cited_text;
pub mod domain;
pub mod obs;
pub mod report;
pub mod snapshot;
pub mod telemetry;
pub mod trust;
pub mod view;

pub use cited_text::{render_cited_text, resolve_source, CitedText, Segment};

pub use domain::{
    cards_from_value, BadgeTone, CitationsMap, Compliance, ComplianceDetails, CoreError,
    Perspectives, Result, RootsCheck, RootsCheckInput, RootsStatus, Source, SuperNewsCard, When,
    Who, Why, FALLBACK_ICON,
};

pub use obs::{
    emit_card_rendered, emit_feed_degraded, emit_feed_loaded, emit_readiness_probed, feed_span,
    FeedSpan,
};
pub use report::{render_card_text, render_feed_text, render_status_line};
pub use snapshot::{format_exported_at, StaticSnapshot};
pub use telemetry::init_tracing;
pub use trust::{
    compliance_score, derive_verified_badge, normalize_optional_roots_check,
    normalize_roots_check, VERIFIED_SCORE_THRESHOLD,
};
pub use view::{render_feed, CardView, SourceBadge};
