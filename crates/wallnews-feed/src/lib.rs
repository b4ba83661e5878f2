//! WallNews Feed: loading SuperNewsCards for display
//!
//! This crate is the thin collaborator boundary between the upstream
//! backend and the rendering core. It obtains a card list from exactly one
//! origin, the live stream endpoint or a static export snapshot, and hands
//! it over unmodified.
//!
//! Failures never reach the renderer: the best-effort entry points
//! ([`CardFeed::load`], [`BackendClient::fetch_cards`],
//! [`BackendClient::is_ready`]) log and degrade to an empty feed or
//! "not ready". The `try_*` variants surface [`FeedError`] for callers that
//! want it.

pub mod backend;
pub mod error;
pub mod feed;

pub use backend::{BackendClient, BackendConfig, BACKEND_URL_ENV, DEFAULT_BACKEND_URL};
pub use error::FeedError;
pub use feed::{try_load_snapshot, CardFeed, FeedBatch, FeedOrigin, LiveFeed, StaticFeed};

/// Result type for feed operations
pub type Result<T> = std::result::Result<T, FeedError>;
