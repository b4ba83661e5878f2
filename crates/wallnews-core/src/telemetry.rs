//! Log setup for the `wallnews` binary.
//!
//! Rendered cards and JSON documents go to stdout, so every log line is
//! written to stderr. `RUST_LOG` overrides the default filter.

use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// HTTP client internals stay at `warn` unless `RUST_LOG` asks otherwise.
const QUIET_DEPENDENCIES: &[&str] = &["hyper=warn", "hyper_util=warn", "reqwest=warn"];

/// Filter directives used when `RUST_LOG` is unset.
pub fn default_directives(level: Level) -> String {
    std::iter::once(level.as_str().to_ascii_lowercase())
        .chain(QUIET_DEPENDENCIES.iter().map(|d| d.to_string()))
        .collect::<Vec<_>>()
        .join(",")
}

/// Install the global subscriber: plain lines, or newline-delimited JSON
/// when `json` is set. Only the first call in a process takes effect.
pub fn init_tracing(json: bool, level: Level) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(level)));

    let plain_layer = (!json).then(|| {
        fmt::layer()
            .with_target(false)
            .with_writer(std::io::stderr)
    });
    let json_layer = json.then(|| {
        fmt::layer()
            .json()
            .with_current_span(true)
            .with_writer(std::io::stderr)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(plain_layer)
        .with(json_layer)
        .try_init()
        .ok();
}
