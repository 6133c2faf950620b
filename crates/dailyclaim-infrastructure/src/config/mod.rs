mod env;
mod timeouts;

pub use env::{parse_bool, split_lines, AppConfig};
pub use timeouts::TimeoutConfig;
