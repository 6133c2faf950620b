mod message_builder;
mod sender;

pub use message_builder::DISCORD_CONTENT_LIMIT;

use reqwest::Client;
use std::time::Duration;
use url::Url;

use dailyclaim_domain::shared::DomainError;

const WEBHOOK_PREFIX: &str = "https://discord.com/api/webhooks/";

/// Check that `url` points at a Discord webhook
pub fn validate_webhook_url(url: &str) -> Result<Url, DomainError> {
    let trimmed = url.trim();
    if !trimmed.to_lowercase().starts_with(WEBHOOK_PREFIX) {
        return Err(DomainError::InvalidWebhook(
            "DISCORD_WEBHOOK is not a valid Discord webhook URL.".to_string(),
        ));
    }

    Url::parse(trimmed).map_err(|e| {
        DomainError::InvalidWebhook(format!("DISCORD_WEBHOOK cannot be parsed: {}", e))
    })
}

/// Discord webhook notification sender
pub struct DiscordWebhookSender {
    webhook_url: String,
    client: Client,
    timeout: Duration,
}

impl DiscordWebhookSender {
    /// The URL is validated on every send, before any request is built
    pub fn new(webhook_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            webhook_url: webhook_url.into(),
            client: Client::new(),
            timeout,
        }
    }
}
