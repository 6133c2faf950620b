use std::path::PathBuf;
use std::time::Duration;

use dailyclaim_domain::policy::EscalationPolicy;
use dailyclaim_domain::shared::DomainError;

use super::timeouts::TimeoutConfig;

/// Run configuration, read once at startup
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// One cookie per account
    pub cookies: Vec<String>,
    /// Raw game lists, positionally aligned with `cookies`
    pub games: Vec<String>,
    pub discord_webhook: Option<String>,
    pub discord_user: Option<String>,
    pub policy: EscalationPolicy,
    pub run_counter_file: Option<PathBuf>,
    pub log_dir: Option<PathBuf>,
    pub timeouts: TimeoutConfig,
}

/// Split a multi-line variable into trimmed lines
///
/// Trailing blank lines are dropped; blank lines in the middle are kept so
/// that positions stay aligned between variables.
pub fn split_lines(value: &str) -> Vec<String> {
    let value = value.trim_end();
    if value.is_empty() {
        return Vec::new();
    }
    value.split('\n').map(|line| line.trim().to_string()).collect()
}

/// Parse a boolean flag (`1/0`, `true/false`, `yes/no`, `on/off`)
pub fn parse_bool(key: &str, value: &str) -> Result<bool, DomainError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(DomainError::InvalidConfiguration(format!(
            "{} must be a boolean, got '{}'",
            key, other
        ))),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl AppConfig {
    /// Load configuration from the process environment
    ///
    /// A `.env` file in the working directory is loaded first when present;
    /// variables already set in the environment take precedence.
    pub fn from_env() -> Result<Self, DomainError> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                return Err(DomainError::InvalidConfiguration(format!(
                    "Failed to read .env file: {}",
                    e
                )));
            }
        }

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, DomainError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let cookies = lookup("COOKIE")
            .map(|v| split_lines(&v))
            .unwrap_or_default();
        if cookies.is_empty() {
            return Err(DomainError::InvalidConfiguration(
                "COOKIE environment variable not set!".to_string(),
            ));
        }

        let games = lookup("GAMES").map(|v| split_lines(&v)).unwrap_or_default();
        if games.is_empty() {
            return Err(DomainError::InvalidConfiguration(
                "GAMES environment variable not set!".to_string(),
            ));
        }

        let flag = |key: &str| -> Result<bool, DomainError> {
            match lookup(key) {
                Some(value) => parse_bool(key, &value),
                None => Ok(false),
            }
        };

        let policy = EscalationPolicy {
            auth_errors: flag("FAIL_ON_AUTH_ERROR")?,
            undocumented: flag("FAIL_ON_UNDOCUMENTED")?,
            delivery: flag("FAIL_ON_DELIVERY_ERROR")?,
        };

        let seconds = |key: &str, default: Duration| -> Result<Duration, DomainError> {
            match non_empty(lookup(key)) {
                Some(value) => {
                    let secs = value.parse::<u64>().map_err(|_| {
                        DomainError::InvalidConfiguration(format!(
                            "{} must be a whole number of seconds, got '{}'",
                            key, value
                        ))
                    })?;
                    if secs == 0 {
                        return Err(DomainError::InvalidConfiguration(format!(
                            "{} must be positive",
                            key
                        )));
                    }
                    Ok(Duration::from_secs(secs))
                }
                None => Ok(default),
            }
        };

        let defaults = TimeoutConfig::default();
        let timeouts = TimeoutConfig::new()
            .with_http_request(seconds("HTTP_TIMEOUT_SECS", defaults.http_request)?)
            .with_webhook(seconds("WEBHOOK_TIMEOUT_SECS", defaults.webhook)?);

        Ok(Self {
            cookies,
            games,
            discord_webhook: non_empty(lookup("DISCORD_WEBHOOK")),
            discord_user: non_empty(lookup("DISCORD_USER")),
            policy,
            run_counter_file: non_empty(lookup("RUN_COUNTER_FILE")).map(PathBuf::from),
            log_dir: non_empty(lookup("LOG_DIR")).map(PathBuf::from),
            timeouts,
        })
    }

    /// Game list line for an account; missing lines read as empty
    pub fn games_for(&self, index: usize) -> &str {
        self.games.get(index).map(String::as_str).unwrap_or("")
    }
}
