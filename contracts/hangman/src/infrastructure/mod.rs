mod escrow;
mod events;
pub mod storage;

pub use escrow::EscrowGateway;
pub use events::GameEvents;
pub use storage::{ConfigRepository, GameRepository};
