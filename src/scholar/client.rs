// HTTP client for SerpApi's Google Scholar Author engine.
//
// One GET to `/search.json?engine=google_scholar_author&author_id=...`.
// SerpApi reports problems (bad key, unknown author, exhausted quota) as a
// JSON body with an `error` key, often alongside a 4xx status, so the body
// is inspected before the status code.

use anyhow::Context;
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;
use tracing::debug;

use super::citations::{extract_metrics, CitationError, ScholarMetrics};

/// Thin reqwest wrapper for the SerpApi search endpoint.
pub struct SerpApiClient {
    client: reqwest::Client,
    base_url: String,
    api_key: SecretString,
    language: String,
}

impl SerpApiClient {
    /// Create a new client pointing at the given base URL
    /// (normally `https://serpapi.com`).
    pub fn new(base_url: &str, api_key: SecretString, language: &str) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(crate::USER_AGENT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
            language: language.to_string(),
        })
    }

    /// Fetch the raw author profile JSON, surfacing upstream errors.
    pub async fn fetch_profile(&self, author_id: &str) -> Result<Value, CitationError> {
        let url = format!("{}/search.json", self.base_url);

        debug!(author_id = author_id, "SerpApi author query");

        let response = self
            .client
            .get(&url)
            .query(&[
                ("engine", "google_scholar_author"),
                ("author_id", author_id),
                ("api_key", self.api_key.expose_secret()),
                ("hl", self.language.as_str()),
                ("no_cache", "true"),
            ])
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        match serde_json::from_str::<Value>(&text) {
            Ok(body) => {
                if let Some(error) = body.get("error") {
                    let message = error
                        .as_str()
                        .map(str::to_string)
                        .unwrap_or_else(|| error.to_string());
                    return Err(CitationError::Upstream(message));
                }
                if !status.is_success() {
                    return Err(CitationError::HttpStatus {
                        status: status.as_u16(),
                        body: text,
                    });
                }
                Ok(body)
            }
            Err(_) if !status.is_success() => Err(CitationError::HttpStatus {
                status: status.as_u16(),
                body: text,
            }),
            Err(e) => Err(CitationError::InvalidJson(e)),
        }
    }

    /// Fetch the author's metrics: citation total plus optional extras.
    pub async fn fetch_metrics(&self, author_id: &str) -> Result<ScholarMetrics, CitationError> {
        let body = self.fetch_profile(author_id).await?;
        let metrics = extract_metrics(&body)?;

        debug!(
            author_id = author_id,
            citations = metrics.citations,
            h_index = ?metrics.h_index,
            "Parsed author metrics"
        );

        Ok(metrics)
    }

    /// Fetch only the total citation count.
    pub async fn fetch_citations(&self, author_id: &str) -> Result<u64, CitationError> {
        self.fetch_metrics(author_id).await.map(|m| m.citations)
    }
}
