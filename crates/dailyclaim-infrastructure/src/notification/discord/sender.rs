use async_trait::async_trait;
use reqwest::StatusCode;

use dailyclaim_domain::notification::{NotificationMessage, NotificationSender};
use dailyclaim_domain::shared::DomainError;

use super::validate_webhook_url;

#[async_trait]
impl NotificationSender for super::DiscordWebhookSender {
    async fn send(&self, message: &NotificationMessage) -> Result<(), DomainError> {
        let url = validate_webhook_url(&self.webhook_url)?;
        let payload = self.build_payload(message);

        let response = self
            .client
            .post(url)
            .timeout(self.timeout)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                DomainError::Delivery(format!("Failed to send Discord notification: {}", e))
            })?;

        let status = response.status();
        if status == StatusCode::NO_CONTENT {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        check_status(status, &body)
    }
}

/// Discord answers a successful execute with 204 No Content; anything else failed
fn check_status(status: StatusCode, body: &str) -> Result<(), DomainError> {
    if status == StatusCode::NO_CONTENT {
        return Ok(());
    }

    Err(DomainError::Delivery(format!(
        "Discord webhook failed with status {}: {}",
        status, body
    )))
}
