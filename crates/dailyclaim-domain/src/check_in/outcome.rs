use serde::{Deserialize, Serialize};

use super::gateway::ClaimResponse;
use crate::shared::DomainError;

/// Result of one (account, game) check-in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CheckInOutcome {
    /// Reward claimed by this run
    Completed,
    /// Reward was already claimed earlier today
    AlreadyClaimed,
    /// Cookie invalid or expired
    AuthError,
    /// The account has no data for this game
    NotPlayed,
    Undocumented { retcode: String },
    TransportError { reason: String },
}

impl CheckInOutcome {
    /// Total mapping from the API `retcode` to an outcome
    pub fn from_retcode(retcode: &str) -> Self {
        match retcode.trim() {
            "0" => CheckInOutcome::Completed,
            "-5003" => CheckInOutcome::AlreadyClaimed,
            "-100" => CheckInOutcome::AuthError,
            "-10002" => CheckInOutcome::NotPlayed,
            other => CheckInOutcome::Undocumented {
                retcode: other.to_string(),
            },
        }
    }

    /// Classify a gateway answer, turning failures into `TransportError`
    pub fn from_response(response: Result<ClaimResponse, DomainError>) -> Self {
        match response {
            Ok(response) => Self::from_retcode(&response.retcode),
            Err(e) => CheckInOutcome::TransportError {
                reason: e.to_string(),
            },
        }
    }

    /// Completed or already claimed
    pub fn is_activity(&self) -> bool {
        matches!(
            self,
            CheckInOutcome::Completed | CheckInOutcome::AlreadyClaimed
        )
    }

    pub fn is_error(&self) -> bool {
        !self.is_activity()
    }

    /// Log line for the console
    pub fn message(&self) -> String {
        match self {
            CheckInOutcome::Completed => "Successfully checked in!".to_string(),
            CheckInOutcome::AlreadyClaimed => "Already checked in for today".to_string(),
            CheckInOutcome::AuthError => {
                "Error not logged in. Your cookie is invalid, try setting up again".to_string()
            }
            CheckInOutcome::NotPlayed => {
                "Error not found. You haven't played this game".to_string()
            }
            CheckInOutcome::Undocumented { retcode } => format!(
                "Error undocumented (retcode {}), report to Issues page if this persists",
                retcode
            ),
            CheckInOutcome::TransportError { reason } => format!("Request failed: {}", reason),
        }
    }

    /// Short label used in the summary message
    pub fn short_description(&self) -> String {
        match self {
            CheckInOutcome::Completed => "checked in".to_string(),
            CheckInOutcome::AlreadyClaimed => "already checked in".to_string(),
            CheckInOutcome::AuthError => "invalid cookie".to_string(),
            CheckInOutcome::NotPlayed => "not played".to_string(),
            CheckInOutcome::Undocumented { retcode } => format!("undocumented retcode {}", retcode),
            CheckInOutcome::TransportError { .. } => "request failed".to_string(),
        }
    }
}
