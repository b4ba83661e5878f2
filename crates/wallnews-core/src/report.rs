//! Plain-text rendering of the live feed for terminals and logs.

use crate::cited_text::CitedText;
use crate::snapshot::format_exported_at;
use crate::view::CardView;

pub const VERIFIED_BADGE: &str = "✓ WallNews Verified";

const EMPTY_FEED_TITLE: &str = "No SuperNewsCards";
const EMPTY_FEED_HINT: &str =
    "The data has not been exported yet. Run the export script on the backend:";
const EXPORT_COMMAND: &str = "node scripts/export-supercards.js";

fn push_section(lines: &mut Vec<String>, heading: &str, entries: &[CitedText]) {
    if entries.is_empty() {
        return;
    }
    lines.push(String::new());
    lines.push(heading.to_string());
    for entry in entries {
        lines.push(format!("  - {}", entry.plain_text()));
    }
}

fn push_block(lines: &mut Vec<String>, heading: &str, text: &CitedText) {
    if text.is_empty() {
        return;
    }
    lines.push(String::new());
    lines.push(heading.to_string());
    lines.push(format!("  {}", text.plain_text()));
}

/// Render one card. Citations print as their literal `[n]` marker; the
/// numbered source list at the end carries the URLs.
pub fn render_card_text(view: &CardView) -> String {
    let mut lines = Vec::new();

    let mut header = format!("[{}] {} Sources", view.category_label, view.source_count);
    if view.verified {
        header.push_str("  ");
        header.push_str(VERIFIED_BADGE);
    }
    lines.push(header);
    lines.push(view.title.clone());
    if !view.summary.is_empty() {
        lines.push(view.summary.clone());
    }

    lines.push(String::new());
    lines.push(format!(
        "{} {} ({})",
        view.roots_check.icon,
        view.roots_check.message,
        view.roots_check.status
    ));

    push_block(&mut lines, "Full Analysis", &view.body);
    push_section(&mut lines, "✓ ESTABLISHED FACTS", &view.facts);
    push_section(&mut lines, "⚡ DIVERGENCES", &view.divergences);
    push_section(&mut lines, "❓ UNCERTAINTIES", &view.uncertainties);
    push_block(&mut lines, "WallBot Analysis", &view.analysis);

    lines.push(String::new());
    lines.push("Sources".to_string());
    for badge in &view.source_badges {
        lines.push(format!("  [{}] {} <{}>", badge.position, badge.name, badge.url));
    }

    lines.push(String::new());
    lines.push(format!(
        "Compliance Score: {}/100 | {}",
        view.compliance_score, view.timeframe
    ));

    lines.join("\n")
}

/// Status line: card count and, for snapshots, the export time.
pub fn render_status_line(card_count: usize, exported_at: Option<&str>) -> String {
    let plural = if card_count == 1 { "" } else { "s" };
    let mut line = format!("{card_count} SuperNewsCard{plural}");
    if let Some(raw) = exported_at {
        line.push_str(&format!(" | Last updated: {}", format_exported_at(raw)));
    }
    line
}

/// Render a whole feed, or the empty-state hint when there is nothing to show.
pub fn render_feed_text(views: &[CardView], exported_at: Option<&str>) -> String {
    let mut blocks = vec![render_status_line(views.len(), exported_at)];

    if views.is_empty() {
        blocks.push(format!("{EMPTY_FEED_TITLE}\n{EMPTY_FEED_HINT}\n  {EXPORT_COMMAND}"));
    } else {
        blocks.extend(views.iter().map(render_card_text));
    }

    blocks.join("\n\n")
}
