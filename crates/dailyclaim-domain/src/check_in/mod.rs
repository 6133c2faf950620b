mod gateway;
mod outcome;
mod selection;


pub use gateway::{CheckInGateway, ClaimResponse};
pub use outcome::CheckInOutcome;
pub use selection::{resolve_game_list, split_game_list};
