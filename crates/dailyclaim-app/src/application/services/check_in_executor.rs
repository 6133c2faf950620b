use log::{debug, info};
use std::sync::Arc;
use tracing::instrument;

use dailyclaim_domain::check_in::{CheckInGateway, CheckInOutcome};
use dailyclaim_domain::events::{EventSink, RunEvent};
use dailyclaim_domain::{AccountIndex, Game};

/// Check-in executor service
///
/// Sends one sign request per game and reports every step as a
/// [`RunEvent`]. Nothing here fails: transport problems become
/// [`CheckInOutcome::TransportError`] and the run moves on.
pub struct CheckInExecutor {
    gateway: Arc<dyn CheckInGateway>,
}

impl CheckInExecutor {
    pub fn new(gateway: Arc<dyn CheckInGateway>) -> Self {
        Self { gateway }
    }

    /// Claim the daily reward of one game
    pub async fn check_in(&self, cookie: &str, game: Game) -> CheckInOutcome {
        let response = self.gateway.claim(cookie, game).await;
        let outcome = CheckInOutcome::from_response(response);
        debug!("{} check-in resolved to {:?}", game.id(), outcome);
        outcome
    }

    /// Check in an account for every requested game, in list order
    ///
    /// Tokens that are not a known game are rejected without sending a
    /// request; the remaining games still run.
    #[instrument(skip(self, account, cookie, games, events), fields(account = account.number(), games = games.len()))]
    pub async fn run_account(
        &self,
        account: AccountIndex,
        cookie: &str,
        games: &[String],
        events: &mut dyn EventSink,
    ) {
        for token in games {
            let game = match token.parse::<Game>() {
                Ok(game) => game,
                Err(_) => {
                    events.emit(&RunEvent::GameRejected {
                        account,
                        token: token.clone(),
                    });
                    continue;
                }
            };

            events.emit(&RunEvent::CheckInStarted { account, game });
            let outcome = self.check_in(cookie, game).await;
            events.emit(&RunEvent::Outcome {
                account,
                game,
                outcome,
            });
        }

        info!("Account {} done", account.number());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use dailyclaim_domain::check_in::ClaimResponse;
    use dailyclaim_domain::events::RecordingSink;
    use dailyclaim_domain::DomainError;
    use mockall::mock;

    mock! {
        pub Gateway {}

        #[async_trait]
        impl CheckInGateway for Gateway {
            async fn claim(&self, cookie: &str, game: Game) -> Result<ClaimResponse, DomainError>;
        }
    }

    fn tokens(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_check_in_maps_retcode() {
        let mut gateway = MockGateway::new();
        gateway
            .expect_claim()
            .withf(|cookie, game| cookie == "ltuid=1" && *game == Game::Gi)
            .times(1)
            .returning(|_, _| Ok(ClaimResponse::new("-5003").with_message("already")));

        let executor = CheckInExecutor::new(Arc::new(gateway));

        assert_eq!(
            executor.check_in("ltuid=1", Game::Gi).await,
            CheckInOutcome::AlreadyClaimed
        );
    }

    #[tokio::test]
    async fn test_transport_error_becomes_outcome() {
        let mut gateway = MockGateway::new();
        gateway
            .expect_claim()
            .returning(|_, _| Err(DomainError::Transport("connection reset".to_string())));

        let executor = CheckInExecutor::new(Arc::new(gateway));
        let outcome = executor.check_in("c", Game::Hsr).await;

        assert!(matches!(outcome, CheckInOutcome::TransportError { .. }));
    }

    #[tokio::test]
    async fn test_run_account_emits_events_in_order() {
        let mut gateway = MockGateway::new();
        gateway
            .expect_claim()
            .withf(|_, game| *game == Game::Gi)
            .times(1)
            .returning(|_, _| Ok(ClaimResponse::new("0")));
        gateway
            .expect_claim()
            .withf(|_, game| *game == Game::Hsr)
            .times(1)
            .returning(|_, _| Ok(ClaimResponse::new("-100")));

        let executor = CheckInExecutor::new(Arc::new(gateway));
        let mut sink = RecordingSink::default();
        let account = AccountIndex::new(0);

        executor
            .run_account(account, "c", &tokens(&["gi", "hsr"]), &mut sink)
            .await;

        assert_eq!(
            sink.events,
            vec![
                RunEvent::CheckInStarted {
                    account,
                    game: Game::Gi
                },
                RunEvent::Outcome {
                    account,
                    game: Game::Gi,
                    outcome: CheckInOutcome::Completed
                },
                RunEvent::CheckInStarted {
                    account,
                    game: Game::Hsr
                },
                RunEvent::Outcome {
                    account,
                    game: Game::Hsr,
                    outcome: CheckInOutcome::AuthError
                },
            ]
        );
    }

    #[tokio::test]
    async fn test_unknown_game_sends_no_request() {
        let mut gateway = MockGateway::new();
        gateway
            .expect_claim()
            .withf(|_, game| *game == Game::Gi)
            .times(1)
            .returning(|_, _| Ok(ClaimResponse::new("0")));

        let executor = CheckInExecutor::new(Arc::new(gateway));
        let mut sink = RecordingSink::default();
        let account = AccountIndex::new(1);

        executor
            .run_account(account, "c", &tokens(&["xyz", "gi"]), &mut sink)
            .await;

        assert_eq!(
            sink.events[0],
            RunEvent::GameRejected {
                account,
                token: "xyz".to_string()
            }
        );
        assert_eq!(sink.events.len(), 3);
    }

    #[tokio::test]
    async fn test_empty_game_list_does_nothing() {
        let gateway = MockGateway::new();
        let executor = CheckInExecutor::new(Arc::new(gateway));
        let mut sink = RecordingSink::default();

        executor
            .run_account(AccountIndex::new(0), "c", &[], &mut sink)
            .await;

        assert!(sink.events.is_empty());
    }
}
