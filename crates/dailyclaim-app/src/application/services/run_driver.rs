use log::{info, warn};

use dailyclaim_domain::check_in::resolve_game_list;
use dailyclaim_domain::events::{EventSink, RunEvent, RunEvents};
use dailyclaim_domain::notification::DeliveryResult;
use dailyclaim_domain::policy::{EscalationPolicy, RunStatus};
use dailyclaim_domain::report::{AggregateReport, Aggregator};
use dailyclaim_domain::AccountIndex;

use super::check_in_executor::CheckInExecutor;
use super::notifier::Notifier;

/// One account with its cookie and effective game list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountPlan {
    pub account: AccountIndex,
    pub cookie: String,
    pub games: Vec<String>,
}

/// Pair every cookie with its game list
///
/// Accounts without a game line (or with an empty one) inherit the list of
/// the closest earlier account that named its games.
pub fn plan_accounts(cookies: &[String], game_lines: &[String]) -> Vec<AccountPlan> {
    let mut previous: Vec<String> = Vec::new();

    cookies
        .iter()
        .enumerate()
        .map(|(index, cookie)| {
            let line = game_lines.get(index).map(String::as_str).unwrap_or("");
            let games = resolve_game_list(line, &previous);
            if !games.is_empty() {
                previous = games.clone();
            }
            AccountPlan {
                account: AccountIndex::new(index),
                cookie: cookie.clone(),
                games,
            }
        })
        .collect()
}

/// Result of a whole run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub report: AggregateReport,
    /// `None` when no webhook is configured
    pub delivery: Option<DeliveryResult>,
    pub status: RunStatus,
}

/// Drives one run: check-ins, aggregation, notification, verdict
pub struct RunDriver {
    executor: CheckInExecutor,
    notifier: Option<Notifier>,
    policy: EscalationPolicy,
}

impl RunDriver {
    pub fn new(executor: CheckInExecutor, policy: EscalationPolicy) -> Self {
        Self {
            executor,
            notifier: None,
            policy,
        }
    }

    pub fn with_notifier(mut self, notifier: Notifier) -> Self {
        self.notifier = Some(notifier);
        self
    }

    /// Run every account in order and deliver the summary
    ///
    /// `console` sees every event live; the aggregator sees the same stream.
    pub async fn run(
        &self,
        plans: &[AccountPlan],
        mention: Option<&str>,
        console: &mut dyn EventSink,
    ) -> RunSummary {
        let mut aggregator = Aggregator::new();

        {
            let mut events = RunEvents::new()
                .subscribe(&mut *console)
                .subscribe(&mut aggregator);

            for plan in plans {
                events.emit(&RunEvent::AccountStarted {
                    account: plan.account,
                    games: plan.games.clone(),
                });
                self.executor
                    .run_account(plan.account, &plan.cookie, &plan.games, &mut events)
                    .await;
            }
        }

        let report = aggregator.snapshot();
        info!(
            "Check-ins finished: {} of {} account(s) active, {} soft error(s)",
            report.active_accounts,
            report.total_accounts,
            report.errors.len()
        );

        let delivery = match &self.notifier {
            Some(notifier) => {
                let result = notifier.send(&report, mention).await;
                match &result {
                    DeliveryResult::Delivered => console.emit(&RunEvent::NotificationDelivered),
                    DeliveryResult::Failed(reason) => console.emit(&RunEvent::NotificationFailed {
                        reason: reason.clone(),
                    }),
                }
                Some(result)
            }
            None => {
                info!("No Discord webhook configured, skipping notification");
                None
            }
        };

        let status = self.policy.evaluate(&report, delivery.as_ref());
        if let RunStatus::Failed { reasons } = &status {
            for reason in reasons {
                warn!("Run failed: {}", reason);
            }
        }

        RunSummary {
            report,
            delivery,
            status,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_plan_inherits_previous_games() {
        let plans = plan_accounts(&owned(&["a", "b", "c"]), &owned(&["gi hsr", "", "zzz"]));

        assert_eq!(plans[0].games, owned(&["gi", "hsr"]));
        assert_eq!(plans[1].games, owned(&["gi", "hsr"]));
        assert_eq!(plans[2].games, owned(&["zzz"]));
    }

    #[test]
    fn test_plan_missing_lines_inherit() {
        let plans = plan_accounts(&owned(&["a", "b"]), &owned(&["tot"]));

        assert_eq!(plans.len(), 2);
        assert_eq!(plans[1].account, AccountIndex::new(1));
        assert_eq!(plans[1].cookie, "b");
        assert_eq!(plans[1].games, owned(&["tot"]));
    }

    #[test]
    fn test_plan_inherits_last_non_empty_list() {
        let plans = plan_accounts(
            &owned(&["a", "b", "c", "d"]),
            &owned(&["gi", "hsr", "", ""]),
        );

        assert_eq!(plans[2].games, owned(&["hsr"]));
        assert_eq!(plans[3].games, owned(&["hsr"]));
    }

    #[test]
    fn test_plan_first_account_without_games() {
        let plans = plan_accounts(&owned(&["a", "b"]), &owned(&["", "gi"]));

        assert!(plans[0].games.is_empty());
        assert_eq!(plans[1].games, owned(&["gi"]));
    }
}
