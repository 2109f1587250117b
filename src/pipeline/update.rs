// Update pipeline: fetch citations → notify → render badge.
//
// Strictly sequential. The citation lookup and badge download are fatal on
// failure; the notification is best-effort and only logged when it fails.

use anyhow::Result;
use tracing::{info, warn};

use crate::badge::download::BadgeClient;
use crate::badge::{self, BadgeTarget, RenderedBadge};
use crate::notify::traits::{citation_message, Notifier};
use crate::scholar::citations::ScholarMetrics;
use crate::scholar::client::SerpApiClient;

/// What a completed update produced.
#[derive(Debug, Clone)]
pub struct UpdateOutcome {
    pub metrics: ScholarMetrics,
    /// True only when a notification was actually delivered.
    pub notified: bool,
    pub badge: RenderedBadge,
}

/// Run the full update for one author.
pub async fn run(
    scholar: &SerpApiClient,
    notifier: &dyn Notifier,
    badges: &BadgeClient,
    author_id: &str,
    notify_title: &str,
    target: &BadgeTarget,
) -> Result<UpdateOutcome> {
    // Step 1: Citation count (fatal on any failure)
    let metrics = scholar.fetch_metrics(author_id).await?;
    info!(author_id = author_id, citations = metrics.citations, "Fetched citation count");

    // Step 2: Notification (never fatal)
    let notified = if notifier.is_enabled() {
        match notifier
            .notify(notify_title, &citation_message(metrics.citations))
            .await
        {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "Notification failed, continuing");
                false
            }
        }
    } else {
        false
    };

    // Step 3: Badge (fatal on download failure)
    let badge = badge::render(badges, target, metrics.citations).await?;

    Ok(UpdateOutcome {
        metrics,
        notified,
        badge,
    })
}
