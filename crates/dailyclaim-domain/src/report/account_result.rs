use serde::Serialize;

use crate::check_in::CheckInOutcome;
use crate::game::Game;

/// Why a game produced no reward for an account
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FailureKind {
    Outcome { outcome: CheckInOutcome },
    UnknownGame,
}

impl FailureKind {
    pub fn description(&self) -> String {
        match self {
            FailureKind::Outcome { outcome } => outcome.short_description(),
            FailureKind::UnknownGame => "unknown game".to_string(),
        }
    }
}

/// One soft error of an account
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Failure {
    /// Game id, or the raw token when the game is unknown
    pub target: String,
    pub game: Option<Game>,
    pub kind: FailureKind,
}

impl Failure {
    /// Display name for known games, raw token otherwise
    pub fn label(&self) -> String {
        match self.game {
            Some(game) => game.display_name().to_string(),
            None => self.target.clone(),
        }
    }
}

/// Running per-account tally of check-in outcomes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AccountResult {
    completed: Vec<Game>,
    already_claimed: Vec<Game>,
    failures: Vec<Failure>,
}

impl AccountResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, game: Game, outcome: CheckInOutcome) {
        match outcome {
            CheckInOutcome::Completed => {
                // A fresh claim supersedes an earlier "already claimed" for the same game
                self.already_claimed.retain(|g| *g != game);
                if !self.completed.contains(&game) {
                    self.completed.push(game);
                }
            }
            CheckInOutcome::AlreadyClaimed => {
                if !self.completed.contains(&game) && !self.already_claimed.contains(&game) {
                    self.already_claimed.push(game);
                }
            }
            outcome => self.failures.push(Failure {
                target: game.id().to_string(),
                game: Some(game),
                kind: FailureKind::Outcome { outcome },
            }),
        }
    }

    pub fn record_rejection(&mut self, token: &str) {
        self.failures.push(Failure {
            target: token.to_string(),
            game: None,
            kind: FailureKind::UnknownGame,
        });
    }

    pub fn completed(&self) -> &[Game] {
        &self.completed
    }

    pub fn already_claimed(&self) -> &[Game] {
        &self.already_claimed
    }

    pub fn failures(&self) -> &[Failure] {
        &self.failures
    }

    /// At least one game was claimed, now or earlier today
    pub fn has_activity(&self) -> bool {
        !self.completed.is_empty() || !self.already_claimed.is_empty()
    }
}
