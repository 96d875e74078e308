use crate::types::{BOARD_SIZE, Direction, Position, Tile};

const NUM_SQUARES: usize = BOARD_SIZE * BOARD_SIZE;
const STARTING_TILES: [(Tile, Position); 4] = [
    (Tile::White, Position::new(3, 3)),
    (Tile::White, Position::new(4, 4)),
    (Tile::Black, Position::new(3, 4)),
    (Tile::Black, Position::new(4, 3)),
];

/// The 8x8 grid, indexed `cells[x][y]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Tile; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates the initial board:
    /// d4=white, e5=white, d5=black, e4=black.
    pub fn new() -> Self {
        let mut board = Self::empty();
        for (tile, pos) in STARTING_TILES {
            board.set(pos, tile);
        }
        board
    }

    pub fn empty() -> Self {
        Self {
            cells: [[Tile::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    pub fn get(&self, pos: Position) -> Tile {
        self.cells[pos.x as usize][pos.y as usize]
    }

    pub fn set(&mut self, pos: Position, tile: Tile) {
        self.cells[pos.x as usize][pos.y as usize] = tile;
    }

    /// Scans from `origin` along `direction` for a run that `turn` captures.
    ///
    /// Returns the origin, every opponent cell of the run and the bounding
    /// cell of `turn`'s colour. Returns an empty list when the adjacent cell
    /// is not the opponent's or the run reaches an empty cell or the edge.
    pub fn check_direction(&self, direction: Direction, origin: Position, turn: Tile) -> Vec<Position> {
        debug_assert!(!turn.is_empty(), "turn must be Black or White");

        let Some(next) = origin.step(direction) else {
            return Vec::new();
        };
        if self.get(next) != -turn {
            return Vec::new();
        }

        let mut run = vec![origin, next];
        let mut cursor = next;
        while let Some(pos) = cursor.step(direction) {
            let tile = self.get(pos);
            if tile == turn {
                run.push(pos);
                return run;
            } else if tile.is_empty() {
                return Vec::new();
            }

            run.push(pos);
            cursor = pos;
        }

        Vec::new()
    }

    /// True when `pos` is empty and placing `turn` there captures something.
    pub fn is_legal(&self, pos: Position, turn: Tile) -> bool {
        if !self.get(pos).is_empty() {
            return false;
        }

        Direction::ALL
            .iter()
            .any(|&direction| !self.check_direction(direction, pos, turn).is_empty())
    }

    /// Returns every legal cell for `turn`, column by column.
    pub fn legal_moves(&self, turn: Tile) -> Vec<Position> {
        Position::all().filter(|&pos| self.is_legal(pos, turn)).collect()
    }

    pub fn has_legal_move(&self, turn: Tile) -> bool {
        Position::all().any(|pos| self.is_legal(pos, turn))
    }

    /// Places `turn` at `pos` and flips every captured run.
    /// Returns the flipped opponent cells. Returns an empty list and leaves
    /// the board untouched when the move is illegal.
    pub fn place(&mut self, pos: Position, turn: Tile) -> Vec<Position> {
        if !self.get(pos).is_empty() {
            return Vec::new();
        }

        let runs: Vec<Position> = Direction::ALL
            .iter()
            .flat_map(|&direction| self.check_direction(direction, pos, turn))
            .collect();

        let mut flipped = Vec::new();
        for cell in runs {
            if self.get(cell) == -turn {
                flipped.push(cell);
            }
            self.set(cell, turn);
        }

        flipped
    }

    pub fn count_of(&self, tile: Tile) -> u8 {
        self.cells.iter().flatten().filter(|&&cell| cell == tile).count() as u8
    }

    /// Returns `(black_count, white_count)`.
    pub fn count(&self) -> (u8, u8) {
        (self.count_of(Tile::Black), self.count_of(Tile::White))
    }

    pub fn empty_count(&self) -> u8 {
        self.count_of(Tile::Empty)
    }

    /// Converts the board to row-major cells (`y * 8 + x`).
    pub fn to_array(&self) -> [Tile; NUM_SQUARES] {
        let mut out = [Tile::Empty; NUM_SQUARES];
        for pos in Position::all() {
            out[pos.y as usize * BOARD_SIZE + pos.x as usize] = self.get(pos);
        }
        out
    }

    /// Builds a board from eight rows of `B`, `W` and `.` characters.
    #[cfg(test)]
    pub(crate) fn from_rows(rows: [&str; BOARD_SIZE]) -> Self {
        let mut board = Self::empty();
        for (y, row) in rows.iter().enumerate() {
            for (x, ch) in row.chars().filter(|c| !c.is_whitespace()).enumerate() {
                let tile = match ch {
                    'B' => Tile::Black,
                    'W' => Tile::White,
                    _ => Tile::Empty,
                };
                board.set(Position::new(x as u8, y as u8), tile);
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(x: u8, y: u8) -> Position {
        Position::new(x, y)
    }

    #[test]
    fn initial_board_has_two_tiles_each_on_the_diagonals() {
        let board = Board::new();

        assert_eq!(board.get(pos(3, 3)), Tile::White);
        assert_eq!(board.get(pos(4, 4)), Tile::White);
        assert_eq!(board.get(pos(3, 4)), Tile::Black);
        assert_eq!(board.get(pos(4, 3)), Tile::Black);
        assert_eq!(board.count(), (2, 2));
        assert_eq!(board.empty_count(), 60);
    }

    #[test]
    fn initial_black_legal_moves_are_four_expected_squares() {
        let board = Board::new();

        let expected = vec![pos(2, 3), pos(3, 2), pos(4, 5), pos(5, 4)];

        assert_eq!(board.legal_moves(Tile::Black), expected);
    }

    #[test]
    fn initial_white_legal_moves_mirror_black() {
        let board = Board::new();

        let expected = vec![pos(2, 4), pos(3, 5), pos(4, 2), pos(5, 3)];

        assert_eq!(board.legal_moves(Tile::White), expected);
    }

    #[test]
    fn check_direction_returns_origin_run_and_bounding_tile() {
        let board = Board::new();

        let run = board.check_direction(Direction { dx: 1, dy: 0 }, pos(2, 3), Tile::Black);

        assert_eq!(run, vec![pos(2, 3), pos(3, 3), pos(4, 3)]);
    }

    #[test]
    fn check_direction_requires_adjacent_opponent() {
        let board = Board::new();

        // adjacent cell is empty
        assert!(board.check_direction(Direction { dx: -1, dy: 0 }, pos(2, 3), Tile::Black).is_empty());
        // adjacent cell is the mover's own tile
        assert!(board.check_direction(Direction { dx: 1, dy: 1 }, pos(2, 2), Tile::White).is_empty());
        // adjacent cell is off the board
        assert!(board.check_direction(Direction { dx: -1, dy: -1 }, pos(0, 0), Tile::Black).is_empty());
    }

    #[test]
    fn check_direction_fails_when_run_reaches_empty_or_edge() {
        let board = Board::from_rows([
            ". W W . . . . .",
            ". W W W W W W W",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
        ]);
        let east = Direction { dx: 1, dy: 0 };

        assert!(board.check_direction(east, pos(0, 0), Tile::Black).is_empty());
        assert!(board.check_direction(Direction { dx: 1, dy: 1 }, pos(0, 0), Tile::Black).is_empty());
        assert!(!board.is_legal(pos(0, 0), Tile::Black));
        // run of white tiles ends at the edge
        assert!(board.check_direction(east, pos(0, 1), Tile::Black).is_empty());
        assert!(!board.is_legal(pos(0, 1), Tile::Black));
    }

    #[test]
    fn long_run_collects_every_opponent_tile() {
        let board = Board::from_rows([
            ". W W W W W W B",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
        ]);

        let run = board.check_direction(Direction { dx: 1, dy: 0 }, pos(0, 0), Tile::Black);

        assert_eq!(run.len(), 8);
        assert_eq!(run.first(), Some(&pos(0, 0)));
        assert_eq!(run.last(), Some(&pos(7, 0)));
    }

    #[test]
    fn place_flips_opponent_stones_and_updates_counts() {
        let mut board = Board::new();

        let flipped = board.place(pos(2, 3), Tile::Black);

        assert_eq!(flipped, vec![pos(3, 3)]);
        assert_eq!(board.count(), (4, 1));
        assert_eq!(board.empty_count(), 59);
        assert_eq!(board.get(pos(2, 3)), Tile::Black);
        assert_eq!(board.get(pos(3, 3)), Tile::Black);
        assert_eq!(board.get(pos(4, 4)), Tile::White);
    }

    #[test]
    fn place_flips_runs_in_several_directions() {
        let mut board = Board::from_rows([
            "B . B . . . . .",
            ". W W . . . . .",
            "B W . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
            ". . . . . . . .",
        ]);

        // (2,2) captures west, north and north-west.
        let flipped = board.place(pos(2, 2), Tile::Black);

        assert_eq!(flipped.len(), 3);
        assert!(flipped.contains(&pos(1, 1)));
        assert!(flipped.contains(&pos(2, 1)));
        assert!(flipped.contains(&pos(1, 2)));
        assert_eq!(board.count(), (7, 0));
    }

    #[test]
    fn illegal_place_returns_empty_and_keeps_board_unchanged() {
        let mut board = Board::new();
        let before = board;

        assert!(board.place(pos(0, 0), Tile::Black).is_empty());
        assert!(board.place(pos(3, 3), Tile::Black).is_empty());
        assert_eq!(board, before);
    }

    #[test]
    fn every_opening_move_adds_exactly_one_tile() {
        let start = Board::new();
        for mv in start.legal_moves(Tile::Black) {
            let mut board = start;
            let flipped = board.place(mv, Tile::Black);

            assert!(!flipped.is_empty());
            assert_eq!(board.empty_count(), start.empty_count() - 1);
            let (black, white) = board.count();
            assert_eq!(black as usize, 2 + 1 + flipped.len());
            assert_eq!(white as usize, 2 - flipped.len());
        }
    }

    #[test]
    fn to_array_is_row_major() {
        let cells = Board::new().to_array();

        assert_eq!(cells[3 * BOARD_SIZE + 4], Tile::Black);
        assert_eq!(cells[4 * BOARD_SIZE + 3], Tile::Black);
        assert_eq!(cells[3 * BOARD_SIZE + 3], Tile::White);
        assert_eq!(cells[0], Tile::Empty);
    }
}
