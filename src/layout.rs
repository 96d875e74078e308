use serde::{Deserialize, Serialize};

use crate::types::{BOARD_SIZE, Position, Tile};

/// Canvas geometry and colours. Every field may be overridden from the host;
/// missing fields keep their defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Layout {
    pub square_size: f64,
    /// Diameter of a disc and of a legal-move ring.
    pub tile_size: f64,
    pub padding: f64,
    pub background_colour: String,
    pub square_colour: String,
    pub shadow_colour: String,
    pub shadow_width: f64,
    pub white_colour: String,
    pub black_colour: String,
    /// Grid corners marked with a small dot.
    pub decorations: Vec<Position>,
    pub decoration_size: f64,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            square_size: 60.0,
            tile_size: 50.0,
            padding: 5.0,
            background_colour: "#000000".to_string(),
            square_colour: "#66A760".to_string(),
            shadow_colour: "#000000".to_string(),
            shadow_width: 2.0,
            white_colour: "#FFFFFF".to_string(),
            black_colour: "#000000".to_string(),
            decorations: vec![
                Position::new(2, 2),
                Position::new(6, 6),
                Position::new(2, 6),
                Position::new(6, 2),
            ],
            decoration_size: 15.0,
        }
    }
}

impl Layout {
    /// Distance between the top-left corners of neighbouring squares.
    pub fn pitch(&self) -> f64 {
        self.square_size + self.padding
    }

    /// Edge length of the square canvas.
    pub fn canvas_size(&self) -> f64 {
        BOARD_SIZE as f64 * self.pitch() + self.padding
    }

    /// Top-left pixel of the square at grid `index` (same on both axes).
    pub fn square_origin(&self, index: u8) -> f64 {
        self.pitch() * f64::from(index) + self.padding
    }

    /// Centre pixel of the square at `pos`.
    pub fn square_centre(&self, pos: Position) -> (f64, f64) {
        let half = self.square_size / 2.0;
        (
            self.square_origin(pos.x) + half,
            self.square_origin(pos.y) + half,
        )
    }

    /// Centre of a decoration dot, which sits on the padding between squares.
    pub fn decoration_centre(&self, corner: Position) -> (f64, f64) {
        let centre = |index: u8| self.pitch() * f64::from(index) + self.padding / 2.0;
        (centre(corner.x), centre(corner.y))
    }

    /// Maps a click in canvas pixels to the grid cell under it.
    /// Returns `None` outside the grid.
    pub fn to_square(&self, px: f64, py: f64) -> Option<Position> {
        let square = |coordinate: f64| (coordinate / self.pitch()).floor() as i64;
        if !px.is_finite() || !py.is_finite() {
            return None;
        }
        Position::try_new(square(px), square(py)).ok()
    }

    pub fn tile_colour(&self, tile: Tile) -> Option<&str> {
        match tile {
            Tile::White => Some(&self.white_colour),
            Tile::Black => Some(&self.black_colour),
            Tile::Empty => None,
        }
    }
}
