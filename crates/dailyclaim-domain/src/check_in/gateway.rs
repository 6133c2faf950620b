use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::game::Game;
use crate::shared::DomainError;

/// Raw answer of the rewards API to a sign request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClaimResponse {
    /// `retcode` field, rendered as a string
    pub retcode: String,
    pub message: Option<String>,
}

impl ClaimResponse {
    pub fn new(retcode: impl Into<String>) -> Self {
        Self {
            retcode: retcode.into(),
            message: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }
}

/// Transport for the daily sign endpoint of a game
#[async_trait]
pub trait CheckInGateway: Send + Sync {
    /// Send one sign request for `game` authenticated with `cookie`
    async fn claim(&self, cookie: &str, game: Game) -> Result<ClaimResponse, DomainError>;
}
