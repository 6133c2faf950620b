use serde::{Deserialize, Serialize};
use std::fmt;

/// Zero-based position of an account in the configured cookie list
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct AccountIndex(usize);

impl AccountIndex {
    pub fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn get(&self) -> usize {
        self.0
    }

    /// One-based account number as shown to users
    pub fn number(&self) -> usize {
        self.0 + 1
    }
}

impl fmt::Display for AccountIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number())
    }
}

/// Error codes for structured error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Configuration (1xxx)
    InvalidConfiguration = 1001,
    InvalidWebhook = 1002,

    // Input (2xxx)
    UnknownGame = 2001,

    // Infrastructure (5xxx)
    NetworkError = 5001,
    MalformedResponse = 5002,
    DeliveryError = 5003,
    CounterError = 5004,
}

impl ErrorCode {
    /// Get error code as integer
    pub fn code(&self) -> u16 {
        *self as u16
    }

    /// Get error severity
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            ErrorCode::InvalidConfiguration => ErrorSeverity::Critical,

            ErrorCode::InvalidWebhook | ErrorCode::DeliveryError => ErrorSeverity::Error,

            ErrorCode::UnknownGame
            | ErrorCode::NetworkError
            | ErrorCode::MalformedResponse
            | ErrorCode::CounterError => ErrorSeverity::Warning,
        }
    }
}

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ErrorSeverity {
    Warning,
    Error,
    Critical,
}

#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Invalid webhook: {0}")]
    InvalidWebhook(String),

    #[error("Game {0} is invalid. Available games are: zzz, gi, hsr, hi3, and tot")]
    UnknownGame(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Delivery error: {0}")]
    Delivery(String),

    #[error("Run counter error: {0}")]
    Counter(String),
}

impl DomainError {
    /// Get error code
    pub fn code(&self) -> ErrorCode {
        match self {
            DomainError::InvalidConfiguration(_) => ErrorCode::InvalidConfiguration,
            DomainError::InvalidWebhook(_) => ErrorCode::InvalidWebhook,
            DomainError::UnknownGame(_) => ErrorCode::UnknownGame,
            DomainError::Transport(_) => ErrorCode::NetworkError,
            DomainError::MalformedResponse(_) => ErrorCode::MalformedResponse,
            DomainError::Delivery(_) => ErrorCode::DeliveryError,
            DomainError::Counter(_) => ErrorCode::CounterError,
        }
    }

    /// Get error message
    pub fn message(&self) -> &str {
        match self {
            DomainError::InvalidConfiguration(msg)
            | DomainError::InvalidWebhook(msg)
            | DomainError::UnknownGame(msg)
            | DomainError::Transport(msg)
            | DomainError::MalformedResponse(msg)
            | DomainError::Delivery(msg)
            | DomainError::Counter(msg) => msg,
        }
    }

    /// Get error severity
    pub fn severity(&self) -> ErrorSeverity {
        self.code().severity()
    }

    /// Format error with code
    pub fn format_with_code(&self) -> String {
        format!("[{}] {}", self.code().code(), self)
    }
}
