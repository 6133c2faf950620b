use serde::{Deserialize, Serialize};

use crate::check_in::CheckInOutcome;
use crate::notification::DeliveryResult;
use crate::report::AggregateReport;

/// Which soft errors turn the whole run into a failure
///
/// Everything defaults to lenient: soft errors are reported but the
/// process still exits with status 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EscalationPolicy {
    pub auth_errors: bool,
    pub undocumented: bool,
    pub delivery: bool,
}

/// Final verdict of a run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RunStatus {
    Succeeded,
    Failed { reasons: Vec<String> },
}

impl RunStatus {
    pub fn exit_code(&self) -> u8 {
        match self {
            RunStatus::Succeeded => 0,
            RunStatus::Failed { .. } => 1,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, RunStatus::Succeeded)
    }
}

impl EscalationPolicy {
    /// Classify a finished run
    ///
    /// `delivery` is `None` when no webhook was configured.
    pub fn evaluate(&self, report: &AggregateReport, delivery: Option<&DeliveryResult>) -> RunStatus {
        let mut reasons = Vec::new();

        if self.auth_errors {
            let count = report.count_outcomes(|o| matches!(o, CheckInOutcome::AuthError));
            if count > 0 {
                reasons.push(format!("{} check-in(s) failed with an invalid cookie", count));
            }
        }

        if self.undocumented {
            let count =
                report.count_outcomes(|o| matches!(o, CheckInOutcome::Undocumented { .. }));
            if count > 0 {
                reasons.push(format!(
                    "{} check-in(s) returned an undocumented retcode",
                    count
                ));
            }
        }

        if self.delivery {
            if let Some(DeliveryResult::Failed(reason)) = delivery {
                reasons.push(format!("notification was not delivered: {}", reason));
            }
        }

        if reasons.is_empty() {
            RunStatus::Succeeded
        } else {
            RunStatus::Failed { reasons }
        }
    }
}
