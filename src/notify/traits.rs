use anyhow::Result;
use async_trait::async_trait;

/// Trait for sending a short text notification. Implementations are async
/// because every provider is an HTTP webhook.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver one message. Callers treat failures as non-fatal.
    async fn notify(&self, title: &str, content: &str) -> Result<()>;

    /// Whether this notifier actually sends anything.
    fn is_enabled(&self) -> bool {
        true
    }
}

/// Notifier used when notifications are switched off. Always succeeds
/// without doing anything.
pub struct NoopNotifier;

#[async_trait]
impl Notifier for NoopNotifier {
    async fn notify(&self, _title: &str, _content: &str) -> Result<()> {
        Ok(())
    }

    fn is_enabled(&self) -> bool {
        false
    }
}

/// Body text sent with each update.
pub fn citation_message(citations: u64) -> String {
    format!("Current citations: {citations}")
}
