use web_time::{Duration, Instant};

use crate::board::Board;
use crate::error::GameError;
use crate::types::{GameResult, GameState, Position, Stats, Status, Tile};

pub const DEFAULT_PASS_DELAY: Duration = Duration::from_millis(1000);
/// Half-move counter value at the start; the displayed move number is half of it.
const INITIAL_MOVE_COUNTER: u32 = 2;

/// Session settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// How long input stays locked after a player is skipped.
    pub pass_delay: Duration,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            pass_delay: DEFAULT_PASS_DELAY,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Playing,
    Passing { resume_at: Instant, skipped: Tile },
    GameOver,
}

/// What a successful move did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    pub position: Position,
    /// Opponent cells turned to the mover's colour (origin excluded).
    pub flipped: Vec<Position>,
    /// The player whose turn was skipped, if any.
    pub skipped: Option<Tile>,
    pub game_over: bool,
}

/// One hot-seat game: the board, whose turn it is and the pass/game-over state.
pub struct GameInstance {
    board: Board,
    turn: Tile,
    move_counter: u32,
    phase: Phase,
    config: GameConfig,
    flipped: Vec<Position>,
    is_pass: bool,
}

impl GameInstance {
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    pub fn with_config(config: GameConfig) -> Self {
        Self {
            board: Board::new(),
            turn: Tile::Black,
            move_counter: INITIAL_MOVE_COUNTER,
            phase: Phase::Playing,
            config,
            flipped: Vec::new(),
            is_pass: false,
        }
    }

    /// Restores the starting position with Black to move.
    pub fn reset(&mut self) {
        *self = Self::with_config(self.config);
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Tile {
        self.turn
    }

    pub fn move_number(&self) -> u32 {
        self.move_counter / 2
    }

    pub fn status(&self) -> Status {
        match self.phase {
            Phase::Playing => Status::Playing,
            Phase::Passing { .. } => Status::Passing,
            Phase::GameOver => Status::GameOver,
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// True when a click would be considered at all.
    pub fn accepts_input(&self) -> bool {
        self.phase == Phase::Playing
    }

    pub fn is_legal(&self, pos: Position) -> bool {
        pos.is_on_board() && self.board.is_legal(pos, self.turn)
    }

    pub fn legal_moves(&self) -> Vec<Position> {
        self.board.legal_moves(self.turn)
    }

    pub fn play(&mut self, pos: Position) -> Result<MoveOutcome, GameError> {
        self.play_at(pos, Instant::now())
    }

    /// Applies a move for the current player as of `now`.
    ///
    /// Contract:
    /// - On success the turn has moved on, possibly skipping a player who has
    ///   no legal move. A skip locks input until `tick` is called after the
    ///   pass delay; when neither player can move the game is over.
    /// - On error nothing changes.
    pub fn play_at(&mut self, pos: Position, now: Instant) -> Result<MoveOutcome, GameError> {
        match self.phase {
            Phase::GameOver => return Err(GameError::GameOver),
            Phase::Passing { .. } => return Err(GameError::Passing),
            Phase::Playing => {}
        }
        if !pos.is_on_board() {
            return Err(GameError::OutOfBounds {
                x: i64::from(pos.x),
                y: i64::from(pos.y),
            });
        }
        if !self.board.get(pos).is_empty() {
            return Err(GameError::Occupied(pos));
        }

        let flipped = self.board.place(pos, self.turn);
        if flipped.is_empty() {
            return Err(GameError::IllegalMove(pos));
        }

        self.flipped = flipped.clone();
        self.is_pass = false;
        self.advance_turn();

        let mut skipped = None;
        if !self.board.has_legal_move(self.turn) {
            let skipped_player = self.turn;
            skipped = Some(skipped_player);
            self.is_pass = true;
            self.advance_turn();

            self.phase = if !self.board.has_legal_move(self.turn) {
                Phase::GameOver
            } else if self.config.pass_delay.is_zero() {
                Phase::Playing
            } else {
                Phase::Passing {
                    resume_at: now + self.config.pass_delay,
                    skipped: skipped_player,
                }
            };
        }

        Ok(MoveOutcome {
            position: pos,
            flipped,
            skipped,
            game_over: self.is_game_over(),
        })
    }

    /// Ends a pending pass once its delay has elapsed.
    /// Returns `true` when input was unlocked by this call.
    ///
    /// `turn()` already names the resuming player while the pass is pending;
    /// `stats()` keeps showing the skipped player until this unlocks.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.phase {
            Phase::Passing { resume_at, .. } if now >= resume_at => {
                self.phase = Phase::Playing;
                true
            }
            _ => false,
        }
    }

    pub fn stats(&self) -> Stats {
        let (black_tiles, white_tiles) = self.board.count();
        Stats {
            turn: match self.phase {
                Phase::GameOver => "Game over".to_string(),
                Phase::Passing { skipped, .. } => skipped.label().to_string(),
                Phase::Playing => self.turn.label().to_string(),
            },
            move_number: self.move_number(),
            black_tiles,
            white_tiles,
            empty_tiles: self.board.empty_count(),
        }
    }

    pub fn to_game_state(&self) -> GameState {
        let (black_count, white_count) = self.board.count();
        GameState {
            board: self.board.to_array().to_vec(),
            turn: self.turn,
            move_number: self.move_number(),
            status: self.status(),
            black_count,
            white_count,
            is_pass: self.is_pass,
            flipped: self.flipped.clone(),
        }
    }

    pub fn to_game_result(&self) -> GameResult {
        let (black_count, white_count) = self.board.count();
        GameResult {
            winner: if black_count > white_count {
                Tile::Black
            } else if white_count > black_count {
                Tile::White
            } else {
                Tile::Empty
            },
            black_count,
            white_count,
        }
    }

    fn advance_turn(&mut self) {
        self.turn = -self.turn;
        self.move_counter += 1;
    }

    #[cfg(test)]
    fn set_board_for_test(&mut self, board: Board, turn: Tile) {
        self.board = board;
        self.turn = turn;
        self.phase = Phase::Playing;
        self.is_pass = false;
        self.flipped.clear();
    }
}

impl Default for GameInstance {
    fn default() -> Self {
        Self::new()
    }
}
