mod account_result;
mod aggregator;
mod ordinal;
mod sink;


pub use account_result::{AccountResult, Failure, FailureKind};
pub use aggregator::{AggregateReport, Aggregator, GameActivity, ReportedError};
pub use ordinal::{join_list, ordinal_suffix, Ordinal};
