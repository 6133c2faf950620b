use crate::shared::DomainError;

/// Monotonic counter persisted across runs
pub trait RunCounter: Send + Sync {
    /// Increment the counter and return the new value
    fn next(&self) -> Result<u64, DomainError>;
}
