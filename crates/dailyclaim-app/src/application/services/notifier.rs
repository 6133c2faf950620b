use log::{debug, info, warn};
use std::sync::Arc;

use dailyclaim_domain::notification::{
    render_report, DeliveryResult, NotificationSender, RunCounter,
};
use dailyclaim_domain::report::AggregateReport;

/// Notification application service
/// Renders the run summary and hands it to the configured sender
pub struct Notifier {
    sender: Arc<dyn NotificationSender>,
    counter: Option<Arc<dyn RunCounter>>,
}

impl Notifier {
    pub fn new(sender: Arc<dyn NotificationSender>) -> Self {
        Self {
            sender,
            counter: None,
        }
    }

    /// Number every message with a persisted run counter
    pub fn with_counter(mut self, counter: Arc<dyn RunCounter>) -> Self {
        self.counter = Some(counter);
        self
    }

    fn next_run_number(&self) -> Option<u64> {
        let counter = self.counter.as_ref()?;
        match counter.next() {
            Ok(n) => Some(n),
            Err(e) => {
                warn!("Run counter unavailable, sending without a run number: {}", e);
                None
            }
        }
    }

    /// Render and deliver the summary; never fails the run by itself
    pub async fn send(&self, report: &AggregateReport, mention: Option<&str>) -> DeliveryResult {
        let run_number = self.next_run_number();
        let message = render_report(report, mention, run_number);

        info!(
            "Sending summary: {} game group(s), {} error(s)",
            report.games.len(),
            report.errors.len()
        );

        let result = DeliveryResult::from(self.sender.send(&message).await);
        if let DeliveryResult::Failed(reason) = &result {
            debug!("Summary delivery failed: {}", reason);
        }
        result
    }
}
