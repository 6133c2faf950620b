use serde::{Deserialize, Serialize};

use dailyclaim_domain::check_in::ClaimResponse;
use dailyclaim_domain::shared::DomainError;

pub const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/126.0.0.0 Safari/537.36";
pub const LOCALE: &str = "en-us";
pub const ACT_ORIGIN: &str = "https://act.hoyolab.com";
pub const SEC_CH_UA: &str = r#""Not/A)Brand";v="8", "Chromium";v="126", "Brave";v="126""#;

/// Body of a sign request
#[derive(Debug, Clone, Serialize)]
pub struct SignRequest {
    pub lang: &'static str,
    pub act_id: String,
}

/// Relevant part of a sign response
#[derive(Debug, Clone, Deserialize)]
pub struct SignResponse {
    #[serde(default)]
    pub retcode: Option<serde_json::Value>,
    #[serde(default)]
    pub message: Option<String>,
}

impl SignResponse {
    /// Parse a raw body into a claim response
    ///
    /// Only a body that is not JSON is malformed. A missing or `null`
    /// retcode reads as `"undefined"` / `"null"`, which classifies as an
    /// undocumented code.
    pub fn parse(body: &str) -> Result<ClaimResponse, DomainError> {
        let response: SignResponse = serde_json::from_str(body).map_err(|e| {
            DomainError::MalformedResponse(format!("Failed to parse sign response: {}", e))
        })?;

        let retcode = match response.retcode {
            Some(serde_json::Value::String(code)) => code,
            Some(serde_json::Value::Null) => "null".to_string(),
            None => "undefined".to_string(),
            Some(other) => other.to_string(),
        };

        Ok(ClaimResponse {
            retcode,
            message: response.message,
        })
    }
}
