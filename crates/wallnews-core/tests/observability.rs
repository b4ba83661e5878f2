//! Observability tests for feed loading and card rendering.
//!
//! These verify that the structured emitters run inside a captured
//! subscriber without panicking.

use wallnews_core::{
    emit_card_rendered, emit_feed_degraded, emit_feed_loaded, emit_readiness_probed, render_feed,
    FeedSpan, RootsStatus, SuperNewsCard,
};
use tracing_test::traced_test;

#[traced_test]
#[test]
fn test_emit_feed_loaded_logs_origin_and_count() {
    emit_feed_loaded("static", 12, Some("2026-10-14T18:05:00Z"));
}

#[traced_test]
#[test]
fn test_emit_feed_degraded_logs_warning() {
    let error_msg = "HTTP 502 from backend";
    emit_feed_degraded("live", &error_msg);
}

#[traced_test]
#[test]
fn test_emit_readiness_probed() {
    emit_readiness_probed("http://localhost:4000", true);
}

#[traced_test]
#[test]
fn test_emit_card_rendered_debug_event() {
    emit_card_rendered("card-1", false, RootsStatus::Partial, 2);
}

#[traced_test]
#[test]
fn test_feed_span_wraps_rendering() {
    let span = FeedSpan::enter("static");
    let views = render_feed(&[SuperNewsCard::default()]);
    assert_eq!(views.len(), 1);
    drop(span);
}
