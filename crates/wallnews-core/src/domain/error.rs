//! Error taxonomy for the card contract layer.
//!
//! Almost nothing here is fatal: absent or malformed card fields degrade to
//! defaults during decoding. Errors only surface when a whole document is
//! not JSON at all, or when its root is not an object.

/// Core errors.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("snapshot is not a JSON object (found {found})")]
    SnapshotShape { found: &'static str },
}

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
