use thiserror::Error;

use crate::types::Position;

/// Reasons a move or value is rejected by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("game is already over")]
    GameOver,

    #[error("waiting for the skipped turn to resolve")]
    Passing,

    #[error("cell ({x}, {y}) is outside the board")]
    OutOfBounds { x: i64, y: i64 },

    #[error("cell ({}, {}) is already occupied", .0.x, .0.y)]
    Occupied(Position),

    #[error("illegal move at ({}, {})", .0.x, .0.y)]
    IllegalMove(Position),

    #[error("invalid tile value: {0}")]
    InvalidTile(i8),
}
