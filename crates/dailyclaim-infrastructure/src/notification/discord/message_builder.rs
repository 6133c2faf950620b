use serde_json::json;

use dailyclaim_domain::notification::NotificationMessage;

/// Maximum length of a Discord message, in characters
pub const DISCORD_CONTENT_LIMIT: usize = 2000;

const ELLIPSIS: &str = "...";

/// Cut `content` to the Discord limit, marking the cut with an ellipsis
pub(super) fn truncate_content(content: &str) -> String {
    if content.chars().count() <= DISCORD_CONTENT_LIMIT {
        return content.to_string();
    }

    let keep = DISCORD_CONTENT_LIMIT - ELLIPSIS.len();
    let mut truncated: String = content.chars().take(keep).collect();
    truncated.push_str(ELLIPSIS);
    truncated
}

impl super::DiscordWebhookSender {
    /// JSON body for the webhook execute endpoint
    pub(super) fn build_payload(&self, message: &NotificationMessage) -> serde_json::Value {
        json!({
            "content": truncate_content(&message.content)
        })
    }
}
