pub mod board;
pub mod error;
pub mod game;
pub mod layout;
pub mod render;
pub mod types;
pub mod wasm;

pub use error::GameError;
pub use game::{GameConfig, GameInstance, MoveOutcome};
pub use types::{Position, Tile};
