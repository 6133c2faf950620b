// Domain layer - Pure business logic
// No network, filesystem or environment access happens here

pub mod check_in;
pub mod events;
pub mod game;
pub mod notification;
pub mod policy;
pub mod report;
pub mod shared;

// Re-exports for convenience
pub use events::{EventSink, RunEvent};
pub use game::Game;
pub use shared::{AccountIndex, DomainError};
