use super::aggregator::Aggregator;
use crate::events::{EventSink, RunEvent};

/// Feeds check-in events into the aggregator
impl EventSink for Aggregator {
    fn emit(&mut self, event: &RunEvent) {
        match event {
            RunEvent::AccountStarted { account, .. } => self.touch(*account),
            RunEvent::Outcome {
                account,
                game,
                outcome,
            } => self.record(*account, *game, outcome.clone()),
            RunEvent::GameRejected { account, token } => self.record_rejection(*account, token),
            RunEvent::CheckInStarted { .. }
            | RunEvent::NotificationDelivered
            | RunEvent::NotificationFailed { .. } => {}
        }
    }
}
