//! Error types for feed loading
//!
//! Callers that want best-effort behaviour use the infallible loaders,
//! which log these and degrade to an empty feed.

use thiserror::Error;

/// Errors that can occur while loading a feed
#[derive(Error, Debug)]
pub enum FeedError {
    /// Transport failure or undecodable response body
    #[error("HTTP error: {0}")]
    Http(String),

    /// Backend answered with a non-success status
    #[error("backend returned HTTP {code}")]
    Status { code: u16 },

    /// Snapshot file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Snapshot contract violation
    #[error("snapshot error: {0}")]
    Core(#[from] wallnews_core::CoreError),
}

impl From<reqwest::Error> for FeedError {
    fn from(err: reqwest::Error) -> Self {
        FeedError::Http(err.to_string())
    }
}
