// Colored terminal output for metrics and update results.

use colored::Colorize;

use crate::badge::RenderedBadge;
use crate::pipeline::update::UpdateOutcome;
use crate::scholar::citations::ScholarMetrics;

use super::format_bytes;

/// Display an author's metrics.
pub fn display_metrics(metrics: &ScholarMetrics) {
    if let Some(name) = &metrics.author_name {
        println!("{}", name.bold());
    }
    println!(
        "  {:<10} {}",
        "Citations".dimmed(),
        metrics.citations.to_string().green().bold()
    );
    if let Some(h) = metrics.h_index {
        println!("  {:<10} {}", "h-index".dimmed(), h);
    }
    if let Some(i10) = metrics.i10_index {
        println!("  {:<10} {}", "i10-index".dimmed(), i10);
    }
}

/// Display the files written by a badge render.
pub fn display_badge(badge: &RenderedBadge) {
    println!(
        "  {} {} ({})",
        "SVG".dimmed(),
        badge.svg_path.display(),
        format_bytes(badge.svg_bytes as u64)
    );
    if let Some(png) = &badge.png_path {
        println!("  {} {}", "PNG".dimmed(), png.display());
    }
    println!("  {} {}", "URL".dimmed(), badge.url);
}

/// Display the summary of a full update run.
pub fn display_outcome(outcome: &UpdateOutcome, notifications_enabled: bool) {
    display_metrics(&outcome.metrics);
    println!();

    if outcome.notified {
        println!("  {} notification sent", "✓".green());
    } else if notifications_enabled {
        println!("  {} notification failed (see log)", "!".yellow());
    }

    display_badge(&outcome.badge);
}
