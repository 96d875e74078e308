//! Turns the game state into canvas drawing operations.
//!
//! The host replays the commands in order on a `CanvasRenderingContext2D`.

use serde::{Deserialize, Serialize};

use crate::game::GameInstance;
use crate::layout::Layout;
use crate::types::Position;

/// Display toggles bound to the option checkboxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Options {
    /// Ring every cell the current player may move to.
    pub legal_moves: bool,
    pub board_decorations: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            legal_moves: true,
            board_decorations: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "op", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum DrawCommand {
    FillRect {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        colour: String,
    },
    FillCircle {
        x: f64,
        y: f64,
        radius: f64,
        colour: String,
    },
    StrokeCircle {
        x: f64,
        y: f64,
        radius: f64,
        colour: String,
        line_width: f64,
    },
}

/// Builds the full frame: background, squares with hint rings and discs,
/// then the optional decoration dots.
pub fn render(game: &GameInstance, options: &Options, layout: &Layout) -> Vec<DrawCommand> {
    let size = layout.canvas_size();
    let mut commands = vec![DrawCommand::FillRect {
        x: 0.0,
        y: 0.0,
        width: size,
        height: size,
        colour: layout.background_colour.clone(),
    }];

    let hints = if options.legal_moves {
        game.legal_moves()
    } else {
        Vec::new()
    };
    let radius = layout.tile_size / 2.0;

    for pos in Position::all() {
        commands.push(DrawCommand::FillRect {
            x: layout.square_origin(pos.x),
            y: layout.square_origin(pos.y),
            width: layout.square_size,
            height: layout.square_size,
            colour: layout.square_colour.clone(),
        });

        let (x, y) = layout.square_centre(pos);
        if hints.contains(&pos) {
            commands.push(DrawCommand::StrokeCircle {
                x,
                y,
                radius,
                colour: layout.shadow_colour.clone(),
                line_width: layout.shadow_width,
            });
        }

        if let Some(colour) = layout.tile_colour(game.board().get(pos)) {
            commands.push(DrawCommand::FillCircle {
                x,
                y,
                radius,
                colour: colour.to_string(),
            });
        }
    }

    if options.board_decorations {
        for &corner in &layout.decorations {
            let (x, y) = layout.decoration_centre(corner);
            commands.push(DrawCommand::FillCircle {
                x,
                y,
                radius: layout.decoration_size / 2.0,
                colour: layout.background_colour.clone(),
            });
        }
    }

    commands
}
