use std::ops::Neg;

use serde::{Deserialize, Serialize};

use crate::error::GameError;

pub const BOARD_SIZE: usize = 8;

/// Contents of one board cell.
///
/// The discriminants are signed so that negating a player's tile yields the
/// opponent's tile: `-Tile::Black == Tile::White`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "i8", try_from = "i8")]
#[repr(i8)]
pub enum Tile {
    White = -1,
    #[default]
    Empty = 0,
    Black = 1,
}

impl Tile {
    pub fn is_empty(self) -> bool {
        self == Tile::Empty
    }

    pub fn label(self) -> &'static str {
        match self {
            Tile::Black => "Black",
            Tile::White => "White",
            Tile::Empty => "Empty",
        }
    }
}

impl Neg for Tile {
    type Output = Tile;

    fn neg(self) -> Tile {
        match self {
            Tile::Black => Tile::White,
            Tile::White => Tile::Black,
            Tile::Empty => Tile::Empty,
        }
    }
}

impl From<Tile> for i8 {
    fn from(tile: Tile) -> i8 {
        tile as i8
    }
}

impl TryFrom<i8> for Tile {
    type Error = GameError;

    fn try_from(value: i8) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(Tile::White),
            0 => Ok(Tile::Empty),
            1 => Ok(Tile::Black),
            other => Err(GameError::InvalidTile(other)),
        }
    }
}

/// A grid coordinate: `x` is the column, `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: u8,
    pub y: u8,
}

impl Position {
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Checked constructor for coordinates coming from outside the engine.
    pub fn try_new(x: i64, y: i64) -> Result<Self, GameError> {
        if in_bounds(x) && in_bounds(y) {
            Ok(Self::new(x as u8, y as u8))
        } else {
            Err(GameError::OutOfBounds { x, y })
        }
    }

    pub fn is_on_board(self) -> bool {
        usize::from(self.x) < BOARD_SIZE && usize::from(self.y) < BOARD_SIZE
    }

    /// The neighbouring cell in `direction`, or `None` past the edge.
    pub fn step(self, direction: Direction) -> Option<Position> {
        let x = i64::from(self.x) + i64::from(direction.dx);
        let y = i64::from(self.y) + i64::from(direction.dy);
        Position::try_new(x, y).ok()
    }

    /// Iterates every cell, column by column.
    pub fn all() -> impl Iterator<Item = Position> {
        (0..BOARD_SIZE as u8).flat_map(|x| (0..BOARD_SIZE as u8).map(move |y| Position::new(x, y)))
    }
}

fn in_bounds(index: i64) -> bool {
    (0..BOARD_SIZE as i64).contains(&index)
}

/// One of the eight unit vectors used to scan for flip runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Direction {
    pub dx: i8,
    pub dy: i8,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::new(-1, -1),
        Direction::new(-1, 0),
        Direction::new(-1, 1),
        Direction::new(0, -1),
        Direction::new(0, 1),
        Direction::new(1, -1),
        Direction::new(1, 0),
        Direction::new(1, 1),
    ];

    const fn new(dx: i8, dy: i8) -> Self {
        Self { dx, dy }
    }
}

/// Session phase as seen by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Status {
    Playing,
    /// A player was skipped; input is locked until the pass delay elapses.
    Passing,
    GameOver,
}

/// Public game state returned from WASM APIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    /// Row-major cells (`y * 8 + x`), using the signed tile values.
    pub board: Vec<Tile>,
    pub turn: Tile,
    pub move_number: u32,
    pub status: Status,
    pub black_count: u8,
    pub white_count: u8,
    /// Contract:
    /// - `true` when the last move was followed by an automatic pass.
    /// - `false` otherwise.
    pub is_pass: bool,
    /// Opponent cells captured by the last move (origin excluded).
    pub flipped: Vec<Position>,
}

/// Values shown in the statistics panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Stats {
    pub turn: String,
    pub move_number: u32,
    pub black_tiles: u8,
    pub white_tiles: u8,
    pub empty_tiles: u8,
}

/// Standing of the game; `winner` is `Tile::Empty` for a draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameResult {
    pub winner: Tile,
    pub black_count: u8,
    pub white_count: u8,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negation_swaps_players_and_keeps_empty() {
        assert_eq!(-Tile::Black, Tile::White);
        assert_eq!(-Tile::White, Tile::Black);
        assert_eq!(-Tile::Empty, Tile::Empty);
    }

    #[test]
    fn tile_converts_to_and_from_signed_values() {
        assert_eq!(i8::from(Tile::Black), 1);
        assert_eq!(i8::from(Tile::White), -1);
        assert_eq!(Tile::try_from(0), Ok(Tile::Empty));
        assert_eq!(Tile::try_from(2), Err(GameError::InvalidTile(2)));
    }

    #[test]
    fn step_stops_at_the_edge() {
        let corner = Position::new(0, 7);

        assert_eq!(corner.step(Direction::new(1, -1)), Some(Position::new(1, 6)));
        assert_eq!(corner.step(Direction::new(-1, 0)), None);
        assert_eq!(corner.step(Direction::new(0, 1)), None);
    }

    #[test]
    fn unchecked_positions_report_whether_they_are_on_the_board() {
        assert!(Position::new(7, 7).is_on_board());
        assert!(!Position::new(8, 0).is_on_board());
        assert!(!Position::new(0, 255).is_on_board());
    }

    #[test]
    fn directions_are_distinct_non_zero_unit_vectors() {
        for (i, a) in Direction::ALL.iter().enumerate() {
            assert!(a.dx != 0 || a.dy != 0);
            assert!(a.dx.abs() <= 1 && a.dy.abs() <= 1);
            assert!(Direction::ALL[i + 1..].iter().all(|b| a != b));
        }
    }

    #[test]
    fn all_positions_cover_the_grid_once() {
        let positions: Vec<_> = Position::all().collect();

        assert_eq!(positions.len(), BOARD_SIZE * BOARD_SIZE);
        assert_eq!(positions[0], Position::new(0, 0));
        assert_eq!(positions[1], Position::new(0, 1));
        assert_eq!(positions[63], Position::new(7, 7));
    }
}
