// Badge image download and file output.

use std::path::Path;

use anyhow::{Context, Result};
use reqwest::Url;
use tracing::info;

/// Unauthenticated client for the badge image service.
pub struct BadgeClient {
    client: reqwest::Client,
}

impl BadgeClient {
    pub fn new() -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(crate::USER_AGENT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self { client })
    }

    /// GET the badge image and return its body unchanged.
    /// Any non-success status is an error.
    pub async fn fetch(&self, url: &Url) -> Result<Vec<u8>> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .with_context(|| format!("Failed to download badge {url}"))?;

        if !response.status().is_success() {
            anyhow::bail!("Badge request returned {}: {}", response.status(), url);
        }

        let bytes = response
            .bytes()
            .await
            .context("Failed to read badge response body")?;

        Ok(bytes.to_vec())
    }
}

/// Write image bytes verbatim, creating the parent directory if needed.
pub fn write_badge(dest: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = dest.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create output directory: {}", parent.display()))?;
    }

    std::fs::write(dest, bytes).with_context(|| format!("Failed to write {}", dest.display()))?;

    info!(path = %dest.display(), bytes = bytes.len(), "Wrote badge");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_fetch_returns_body_bytes() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/badge/Citations-3-_.svg"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(b"<svg/>".to_vec()))
            .mount(&mock_server)
            .await;

        let url = Url::parse(&format!("{}/badge/Citations-3-_.svg", mock_server.uri())).unwrap();
        let bytes = BadgeClient::new().unwrap().fetch(&url).await.unwrap();
        assert_eq!(bytes, b"<svg/>");
    }

    #[tokio::test]
    async fn test_fetch_404_is_an_error() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let url = Url::parse(&format!("{}/badge/x.svg", mock_server.uri())).unwrap();
        let err = BadgeClient::new().unwrap().fetch(&url).await.unwrap_err();
        assert!(err.to_string().contains("404"));
    }

    #[test]
    fn test_write_badge_creates_parent_dir() {
        let dir = std::env::temp_dir().join("scholar-badge-write-test");
        let _ = std::fs::remove_dir_all(&dir);
        let dest = dir.join("nested").join("badge.svg");

        write_badge(&dest, b"abc").unwrap();
        assert_eq!(std::fs::read(&dest).unwrap(), b"abc");

        // Cleanup
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
