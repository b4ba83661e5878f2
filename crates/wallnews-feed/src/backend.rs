//! WallNews backend client
//!
//! Two endpoints are consumed:
//! - `GET {base}/api/stream/supercards` → `{ success, count, superCards }`
//! - `GET {base}/api/health/ready` → `{ ready }`
//!
//! One request per call: no retry, no timeout, no caching, no pagination.

use reqwest::header::CACHE_CONTROL;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use wallnews_core::{cards_from_value, emit_feed_degraded, emit_readiness_probed, SuperNewsCard};

use crate::error::FeedError;
use crate::Result;

/// Environment variable holding the backend base address.
pub const BACKEND_URL_ENV: &str = "WALLNEWS_BACKEND_URL";

/// Local development backend.
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:4000";

const SUPERCARDS_PATH: &str = "/api/stream/supercards";
const READY_PATH: &str = "/api/health/ready";

/// Backend configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base address, without trailing slash
    pub base_url: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self::new(
            &std::env::var(BACKEND_URL_ENV).unwrap_or_else(|_| DEFAULT_BACKEND_URL.to_string()),
        )
    }
}

impl BackendConfig {
    /// Create a new config from environment variables
    pub fn from_env() -> Self {
        Self::default()
    }

    /// Create config for a specific backend
    pub fn new(base_url: &str) -> Self {
        BackendConfig {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn supercards_url(&self) -> String {
        format!("{}{}", self.base_url, SUPERCARDS_PATH)
    }

    pub fn ready_url(&self) -> String {
        format!("{}{}", self.base_url, READY_PATH)
    }
}

/// HTTP client for the card stream and health endpoints
#[derive(Debug, Clone)]
pub struct BackendClient {
    config: BackendConfig,
    http_client: reqwest::Client,
}

impl BackendClient {
    /// Create a new backend client
    pub fn new(config: BackendConfig) -> Result<Self> {
        let http_client = reqwest::Client::builder()
            .user_agent(concat!("wallnews-feed/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(BackendClient {
            config,
            http_client,
        })
    }

    /// Create client from environment variables
    pub fn from_env() -> Result<Self> {
        Self::new(BackendConfig::from_env())
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Fetch all cards, surfacing every failure.
    ///
    /// A 2xx body with `success != true` or no `superCards` is an empty list.
    pub async fn try_fetch_cards(&self) -> Result<Vec<SuperNewsCard>> {
        let url = self.config.supercards_url();
        debug!(url = %url, "fetching supercards");

        let response = self
            .http_client
            .get(&url)
            .header(CACHE_CONTROL, "no-store")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status {
                code: status.as_u16(),
            });
        }

        let body: Value = response.json().await?;
        Ok(decode_cards_response(body))
    }

    /// Fetch all cards; any failure degrades to an empty list.
    pub async fn fetch_cards(&self) -> Vec<SuperNewsCard> {
        match self.try_fetch_cards().await {
            Ok(cards) => cards,
            Err(err) => {
                emit_feed_degraded("live", &err);
                Vec::new()
            }
        }
    }

    /// Probe readiness, surfacing every failure.
    pub async fn try_is_ready(&self) -> Result<bool> {
        let response = self
            .http_client
            .get(self.config.ready_url())
            .header(CACHE_CONTROL, "no-store")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status {
                code: status.as_u16(),
            });
        }

        let body: Value = response.json().await?;
        Ok(body.get("ready") == Some(&Value::Bool(true)))
    }

    /// Probe readiness; any failure reads as not ready.
    pub async fn is_ready(&self) -> bool {
        let ready = match self.try_is_ready().await {
            Ok(ready) => ready,
            Err(err) => {
                debug!(error = %err, "readiness probe failed");
                false
            }
        };
        emit_readiness_probed(self.base_url(), ready);
        ready
    }
}

/// Decode a `{ success, count, superCards }` body.
fn decode_cards_response(mut body: Value) -> Vec<SuperNewsCard> {
    if body.get("success") != Some(&Value::Bool(true)) {
        warn!("backend reported success != true; treating as empty feed");
        return Vec::new();
    }
    match body.get_mut("superCards").map(Value::take) {
        Some(cards) => cards_from_value(cards),
        None => Vec::new(),
    }
}
