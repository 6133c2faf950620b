use serde::{Deserialize, Serialize};

use crate::report::{join_list, AggregateReport, Ordinal};

pub const SIGN_OFF: &str = "You're welcome...";

/// Notification message to be sent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationMessage {
    pub content: String,
}

impl NotificationMessage {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

fn accounts_phrase(accounts: &[Ordinal]) -> String {
    let labels: Vec<String> = accounts.iter().map(|o| o.to_string()).collect();
    let noun = if labels.len() == 1 { "account" } else { "accounts" };
    format!("your {} {}", join_list(&labels), noun)
}

/// Render the run summary
///
/// Layout: optional mention, one block per game with activity, an error
/// line when soft errors happened, then the sign-off.
pub fn render_report(
    report: &AggregateReport,
    mention: Option<&str>,
    run_number: Option<u64>,
) -> NotificationMessage {
    let mut blocks: Vec<String> = Vec::new();

    if let Some(user) = mention.map(str::trim).filter(|u| !u.is_empty()) {
        blocks.push(format!("<@{}>", user));
    }

    for activity in &report.games {
        let mut lines = vec![format!("**{}**", activity.game.display_name())];
        if !activity.already_claimed.is_empty() {
            lines.push(format!(
                "I already did dailies for {}.",
                accounts_phrase(&activity.already_claimed)
            ));
        }
        if !activity.completed.is_empty() {
            lines.push(format!(
                "I did dailies for {} today.",
                accounts_phrase(&activity.completed)
            ));
        }
        blocks.push(lines.join("\n"));
    }

    if !report.has_activity() {
        blocks.push("I couldn't do dailies for any of your accounts.".to_string());
    }

    if report.has_errors() {
        let items: Vec<String> = report
            .errors
            .iter()
            .map(|error| {
                format!(
                    "your {} account's {} ({})",
                    error.account,
                    error.failure.label(),
                    error.failure.kind.description()
                )
            })
            .collect();
        blocks.push(format!("I ran into trouble with {}.", join_list(&items)));
    }

    let sign_off = match run_number {
        Some(n) => format!("{} (run #{})", SIGN_OFF, n),
        None => SIGN_OFF.to_string(),
    };
    blocks.push(sign_off);

    NotificationMessage::new(blocks.join("\n\n"))
}
