use async_trait::async_trait;
use serde::Serialize;

use super::message::NotificationMessage;
use crate::shared::DomainError;

/// Outcome of handing the summary to the messaging platform
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "reason", rename_all = "snake_case")]
pub enum DeliveryResult {
    Delivered,
    Failed(String),
}

impl DeliveryResult {
    pub fn is_delivered(&self) -> bool {
        matches!(self, DeliveryResult::Delivered)
    }
}

impl From<Result<(), DomainError>> for DeliveryResult {
    fn from(result: Result<(), DomainError>) -> Self {
        match result {
            Ok(()) => DeliveryResult::Delivered,
            Err(e) => DeliveryResult::Failed(e.to_string()),
        }
    }
}

/// Notification sender trait (Strategy pattern)
#[async_trait]
pub trait NotificationSender: Send + Sync {
    /// Send a notification message
    async fn send(&self, message: &NotificationMessage) -> Result<(), DomainError>;
}
