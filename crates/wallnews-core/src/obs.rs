//! Structured observability hooks for feed loading and card rendering.
//!
//! This module provides:
//! - Feed-scoped tracing spans via the `FeedSpan` RAII guard
//! - Emission functions for key events: feed loaded, fetch degraded,
//!   readiness probed, card rendered
//!
//! Events are emitted at `info!` level unless noted (filter with `RUST_LOG`).

use tracing::{debug, info, warn};

use crate::domain::RootsStatus;

/// RAII guard that enters a feed-scoped tracing span.
///
/// # Example
///
/// ```ignore
/// let _span = FeedSpan::enter("live");
/// // every event below is tagged with origin = "live"
/// ```
pub struct FeedSpan {
    _span: tracing::span::EnteredSpan,
}

impl FeedSpan {
    pub fn enter(origin: &str) -> Self {
        Self {
            _span: feed_span(origin).entered(),
        }
    }
}

/// Feed-scoped span for async code; attach with `Instrument::instrument`.
pub fn feed_span(origin: &str) -> tracing::Span {
    tracing::info_span!("wallnews.feed", origin = %origin)
}

/// Emit event: a feed produced `card_count` cards.
pub fn emit_feed_loaded(origin: &str, card_count: usize, exported_at: Option<&str>) {
    info!(
        event = "feed.loaded",
        origin = %origin,
        card_count = card_count,
        exported_at = exported_at.unwrap_or("-"),
    );
}

/// Emit event: a load failed and was degraded to an empty list (warning level).
pub fn emit_feed_degraded(origin: &str, error: &dyn std::fmt::Display) {
    warn!(event = "feed.degraded", origin = %origin, error = %error);
}

/// Emit event: backend readiness probe completed.
pub fn emit_readiness_probed(base_url: &str, ready: bool) {
    info!(event = "backend.readiness", base_url = %base_url, ready = ready);
}

/// Emit event: one card rendered (debug level).
pub fn emit_card_rendered(
    card_id: &str,
    verified: bool,
    roots_status: RootsStatus,
    unresolved_citations: usize,
) {
    debug!(
        event = "card.rendered",
        card_id = %card_id,
        verified = verified,
        roots_status = %roots_status,
        unresolved_citations = unresolved_citations,
    );
}
