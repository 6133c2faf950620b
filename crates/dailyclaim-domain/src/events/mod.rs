use serde::Serialize;

use crate::check_in::CheckInOutcome;
use crate::game::Game;
use crate::shared::AccountIndex;

/// Severity of a run event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EventLevel {
    Debug,
    Info,
    Warn,
    Error,
}

/// Everything worth reporting while a run progresses
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum RunEvent {
    AccountStarted {
        account: AccountIndex,
        games: Vec<String>,
    },
    CheckInStarted {
        account: AccountIndex,
        game: Game,
    },
    Outcome {
        account: AccountIndex,
        game: Game,
        outcome: CheckInOutcome,
    },
    GameRejected {
        account: AccountIndex,
        token: String,
    },
    NotificationDelivered,
    NotificationFailed {
        reason: String,
    },
}

impl RunEvent {
    pub fn level(&self) -> EventLevel {
        match self {
            RunEvent::CheckInStarted { .. } => EventLevel::Debug,
            RunEvent::AccountStarted { .. } | RunEvent::NotificationDelivered => EventLevel::Info,
            RunEvent::Outcome { outcome, .. } => match outcome {
                CheckInOutcome::Completed | CheckInOutcome::AlreadyClaimed => EventLevel::Info,
                CheckInOutcome::NotPlayed | CheckInOutcome::TransportError { .. } => {
                    EventLevel::Warn
                }
                CheckInOutcome::AuthError | CheckInOutcome::Undocumented { .. } => {
                    EventLevel::Error
                }
            },
            RunEvent::GameRejected { .. } | RunEvent::NotificationFailed { .. } => {
                EventLevel::Error
            }
        }
    }

    pub fn account(&self) -> Option<AccountIndex> {
        match self {
            RunEvent::AccountStarted { account, .. }
            | RunEvent::CheckInStarted { account, .. }
            | RunEvent::Outcome { account, .. }
            | RunEvent::GameRejected { account, .. } => Some(*account),
            RunEvent::NotificationDelivered | RunEvent::NotificationFailed { .. } => None,
        }
    }

    /// Game identifier, or the rejected token for unknown games
    pub fn game(&self) -> Option<String> {
        match self {
            RunEvent::CheckInStarted { game, .. } | RunEvent::Outcome { game, .. } => {
                Some(game.id().to_string())
            }
            RunEvent::GameRejected { token, .. } => Some(token.clone()),
            _ => None,
        }
    }

    pub fn message(&self) -> String {
        match self {
            RunEvent::AccountStarted { account, .. } => {
                format!("-- CHECKING IN FOR ACCOUNT {} --", account.number())
            }
            RunEvent::CheckInStarted { game, .. } => {
                format!("----- CHECKING IN FOR {} -----", game.id())
            }
            RunEvent::Outcome { game, outcome, .. } => {
                format!("{}: {}", game.id().to_uppercase(), outcome.message())
            }
            RunEvent::GameRejected { token, .. } => format!(
                "Game {} is invalid. Available games are: zzz, gi, hsr, hi3, and tot",
                token
            ),
            RunEvent::NotificationDelivered => {
                "Successfully sent message to Discord webhook!".to_string()
            }
            RunEvent::NotificationFailed { reason } => format!(
                "Error sending message to Discord webhook, please check URL and permissions: {}",
                reason
            ),
        }
    }
}

/// Consumer of run events
pub trait EventSink {
    fn emit(&mut self, event: &RunEvent);
}

/// Fans every event out to all subscribed sinks, in subscription order
#[derive(Default)]
pub struct RunEvents<'a> {
    sinks: Vec<&'a mut dyn EventSink>,
}

impl<'a> RunEvents<'a> {
    pub fn new() -> Self {
        Self { sinks: Vec::new() }
    }

    pub fn subscribe(mut self, sink: &'a mut dyn EventSink) -> Self {
        self.sinks.push(sink);
        self
    }
}

impl EventSink for RunEvents<'_> {
    fn emit(&mut self, event: &RunEvent) {
        for sink in self.sinks.iter_mut() {
            sink.emit(event);
        }
    }
}

/// Keeps every event in memory
#[derive(Debug, Default)]
pub struct RecordingSink {
    pub events: Vec<RunEvent>,
}

impl EventSink for RecordingSink {
    fn emit(&mut self, event: &RunEvent) {
        self.events.push(event.clone());
    }
}
