//! WallNews CLI - render the SuperNewsCard trust feed in a terminal
//!
//! ## Commands
//!
//! - `live`: fetch cards from the backend stream and render them
//! - `snapshot`: render cards from a static export file
//! - `ready`: probe backend readiness
//! - `cite`: split one text into citation segments

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;
use tracing::Level;

use wallnews_core::{
    render_cited_text, render_feed, render_feed_text, CardView, CitationsMap, Segment,
};
use wallnews_feed::{
    BackendClient, BackendConfig, CardFeed, FeedBatch, FeedOrigin, LiveFeed, StaticFeed,
};

#[derive(Parser)]
#[command(name = "wallnews")]
#[command(author = "WallNews Engineering")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "WallNews trust feed: SuperNewsCards with traceable citations", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Emit JSON-formatted log lines
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Human-readable card layout
    Text,
    /// Rendered card views as JSON
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch cards from the backend stream and render them
    Live {
        /// Backend base address
        #[arg(long, env = "WALLNEWS_BACKEND_URL", default_value = "http://localhost:4000")]
        backend_url: String,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Render cards from a static export snapshot
    Snapshot {
        /// Path to the exported supercards JSON
        path: PathBuf,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Probe backend readiness (exit status 1 when not ready)
    Ready {
        /// Backend base address
        #[arg(long, env = "WALLNEWS_BACKEND_URL", default_value = "http://localhost:4000")]
        backend_url: String,
    },

    /// Split one text into citation segments and print them as JSON
    Cite {
        /// Text containing [n] markers
        text: String,

        /// JSON object mapping marker keys to sources
        #[arg(short, long)]
        citations: Option<PathBuf>,
    },
}

/// JSON document printed by `live` / `snapshot --format json`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FeedOutput<'a> {
    origin: FeedOrigin,
    exported_at: Option<&'a str>,
    count: usize,
    cards: &'a [CardView],
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Setup logging
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    wallnews_core::init_tracing(cli.json, level);

    match cli.command {
        Commands::Live {
            backend_url,
            format,
        } => {
            let client = BackendClient::new(BackendConfig::new(&backend_url))
                .context("Failed to create backend client")?;
            cmd_feed(&LiveFeed::new(client), format).await
        }
        Commands::Snapshot { path, format } => {
            cmd_feed(&StaticFeed::from_path(path), format).await
        }
        Commands::Ready { backend_url } => cmd_ready(&backend_url).await,
        Commands::Cite { text, citations } => cmd_cite(&text, citations.as_deref()),
    }
}

async fn cmd_feed(feed: &dyn CardFeed, format: OutputFormat) -> Result<ExitCode> {
    let batch = feed.load().await;
    println!("{}", format_batch(&batch, format)?);
    Ok(ExitCode::SUCCESS)
}

fn format_batch(batch: &FeedBatch, format: OutputFormat) -> Result<String> {
    let views = render_feed(&batch.cards);
    let exported_at = batch.exported_at.as_deref();

    match format {
        OutputFormat::Text => Ok(render_feed_text(&views, exported_at)),
        OutputFormat::Json => {
            let output = FeedOutput {
                origin: batch.origin,
                exported_at,
                count: views.len(),
                cards: &views,
            };
            Ok(serde_json::to_string_pretty(&output)?)
        }
    }
}

async fn cmd_ready(backend_url: &str) -> Result<ExitCode> {
    let client = BackendClient::new(BackendConfig::new(backend_url))
        .context("Failed to create backend client")?;

    if client.is_ready().await {
        println!("Backend {} is ready", client.base_url());
        Ok(ExitCode::SUCCESS)
    } else {
        println!("Backend {} is not ready", client.base_url());
        Ok(ExitCode::FAILURE)
    }
}

fn cmd_cite(text: &str, citations_path: Option<&Path>) -> Result<ExitCode> {
    let citations = match citations_path {
        Some(path) => load_citations(path)?,
        None => CitationsMap::new(),
    };

    let segments: Vec<Segment> = render_cited_text(Some(text), &citations).into_segments();
    println!("{}", serde_json::to_string_pretty(&segments)?);
    Ok(ExitCode::SUCCESS)
}

fn load_citations(path: &Path) -> Result<CitationsMap> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read citations file {:?}", path))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Citations file {:?} is not a marker → source map", path))
}
