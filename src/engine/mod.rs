pub mod pricing;
pub mod settlement;
pub mod status;

pub use settlement::{resolve_settlement, BetSide};
pub use status::{derive_status, BetStatus, BetStatusInfo, GameStatus, GameTimeInfo};
