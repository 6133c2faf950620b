use serde::Serialize;
use std::collections::BTreeMap;

use super::account_result::{AccountResult, Failure, FailureKind};
use super::ordinal::Ordinal;
use crate::check_in::CheckInOutcome;
use crate::game::Game;
use crate::shared::AccountIndex;

/// Accounts grouped by outcome for one game
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameActivity {
    pub game: Game,
    pub already_claimed: Vec<Ordinal>,
    pub completed: Vec<Ordinal>,
}

impl GameActivity {
    fn new(game: Game) -> Self {
        Self {
            game,
            already_claimed: Vec::new(),
            completed: Vec::new(),
        }
    }
}

/// Soft error attributed to an account by its original number
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportedError {
    pub account: Ordinal,
    pub failure: Failure,
}

/// Read-only summary of a run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AggregateReport {
    /// Games with at least one claim, in order of first activity
    pub games: Vec<GameActivity>,
    pub errors: Vec<ReportedError>,
    pub active_accounts: usize,
    pub total_accounts: usize,
}

impl AggregateReport {
    pub fn game(&self, game: Game) -> Option<&GameActivity> {
        self.games.iter().find(|activity| activity.game == game)
    }

    pub fn has_activity(&self) -> bool {
        !self.games.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Number of soft errors caused by the given outcome predicate
    pub fn count_outcomes<F>(&self, predicate: F) -> usize
    where
        F: Fn(&CheckInOutcome) -> bool,
    {
        self.errors
            .iter()
            .filter(|error| match &error.failure.kind {
                FailureKind::Outcome { outcome } => predicate(outcome),
                FailureKind::UnknownGame => false,
            })
            .count()
    }
}

/// Collects per-account outcomes for one run
///
/// Owned by the run driver and never shared across runs.
#[derive(Debug, Default)]
pub struct Aggregator {
    accounts: BTreeMap<AccountIndex, AccountResult>,
    activity_order: Vec<Game>,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an account even if it ends up with no games
    pub fn touch(&mut self, account: AccountIndex) {
        self.accounts.entry(account).or_default();
    }

    pub fn record(&mut self, account: AccountIndex, game: Game, outcome: CheckInOutcome) {
        if outcome.is_activity() && !self.activity_order.contains(&game) {
            self.activity_order.push(game);
        }
        self.accounts.entry(account).or_default().record(game, outcome);
    }

    pub fn record_rejection(&mut self, account: AccountIndex, token: &str) {
        self.accounts
            .entry(account)
            .or_default()
            .record_rejection(token);
    }

    pub fn account(&self, account: AccountIndex) -> Option<&AccountResult> {
        self.accounts.get(&account)
    }

    /// Build the report from the current state
    ///
    /// Silent accounts (no claim at all) are left out of the game groups and
    /// the remaining accounts are numbered 1..N in their original order.
    pub fn snapshot(&self) -> AggregateReport {
        let mut games: Vec<GameActivity> = self
            .activity_order
            .iter()
            .map(|game| GameActivity::new(*game))
            .collect();
        let mut errors = Vec::new();
        let mut active_accounts = 0;

        for (index, result) in &self.accounts {
            errors.extend(result.failures().iter().map(|failure| ReportedError {
                account: Ordinal(index.number()),
                failure: failure.clone(),
            }));

            if !result.has_activity() {
                continue;
            }

            active_accounts += 1;
            let label = Ordinal(active_accounts);

            for activity in games.iter_mut() {
                if result.completed().contains(&activity.game) {
                    activity.completed.push(label);
                } else if result.already_claimed().contains(&activity.game) {
                    activity.already_claimed.push(label);
                }
            }
        }

        AggregateReport {
            games,
            errors,
            active_accounts,
            total_accounts: self.accounts.len(),
        }
    }
}
