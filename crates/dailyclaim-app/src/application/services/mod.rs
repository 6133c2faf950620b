mod check_in_executor;
mod notifier;
mod run_driver;

pub use check_in_executor::CheckInExecutor;
pub use notifier::Notifier;
pub use run_driver::{plan_accounts, AccountPlan, RunDriver, RunSummary};
