mod discord;

pub use discord::{validate_webhook_url, DiscordWebhookSender, DISCORD_CONTENT_LIMIT};
