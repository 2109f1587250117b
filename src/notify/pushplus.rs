// PushPlus webhook notifier.
//
// POST {"token", "title", "content"} as JSON. PushPlus answers 200 even for
// rejected tokens, with the real outcome in the body's `code` field.
//
// API docs: https://www.pushplus.plus/doc/

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::traits::Notifier;

/// PushPlus push-notification sender.
pub struct PushPlusNotifier {
    client: Client,
    url: String,
    token: SecretString,
}

impl PushPlusNotifier {
    pub fn new(url: &str, token: SecretString) -> Result<Self> {
        let client = Client::builder()
            .user_agent(crate::USER_AGENT)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            url: url.to_string(),
            token,
        })
    }
}

#[async_trait]
impl Notifier for PushPlusNotifier {
    async fn notify(&self, title: &str, content: &str) -> Result<()> {
        let request = PushPlusRequest {
            token: self.token.expose_secret(),
            title,
            content,
        };

        let response = self
            .client
            .post(&self.url)
            .json(&request)
            .send()
            .await
            .context("Failed to call PushPlus")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("PushPlus returned {}: {}", status, body);
        }

        let reply: PushPlusResponse = response
            .json()
            .await
            .context("Failed to parse PushPlus response")?;

        if reply.code != 200 {
            anyhow::bail!("PushPlus rejected the message (code {}): {}", reply.code, reply.msg);
        }

        debug!(title = title, "PushPlus notification sent");
        Ok(())
    }
}

// --- PushPlus request/response types ---

#[derive(Serialize)]
struct PushPlusRequest<'a> {
    token: &'a str,
    title: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct PushPlusResponse {
    code: i64,
    #[serde(default)]
    msg: String,
}
