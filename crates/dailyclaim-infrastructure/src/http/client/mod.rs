mod check_in;
mod types;

pub use types::{SignRequest, SignResponse, USER_AGENT};

use anyhow::{Context, Result};
use reqwest::Client;

use crate::config::TimeoutConfig;

/// HTTP client for the HoYoLAB daily sign endpoints
pub struct HoyolabClient {
    pub(super) client: Client,
}

impl HoyolabClient {
    pub fn with_timeouts(timeouts: &TimeoutConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .gzip(true)
            .timeout(timeouts.http_request)
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client })
    }
}
