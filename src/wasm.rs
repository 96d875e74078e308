use wasm_bindgen::prelude::*;
use web_time::{Duration, Instant};

use crate::game::{GameConfig, GameInstance, MoveOutcome};
use crate::layout::Layout;
use crate::render::{Options, render};
use crate::types::Position;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = console)]
    fn log(message: &str);
}

/// Browser-facing handle: one game plus its display settings.
#[wasm_bindgen]
pub struct WebOthello {
    game: GameInstance,
    options: Options,
    layout: Layout,
}

#[wasm_bindgen]
impl WebOthello {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        console_error_panic_hook::set_once();
        Self {
            game: GameInstance::new(),
            options: Options::default(),
            layout: Layout::default(),
        }
    }

    /// Builds a game with a custom layout; missing fields use the defaults.
    #[wasm_bindgen(js_name = withLayout)]
    pub fn with_layout(layout: JsValue) -> Result<WebOthello, JsValue> {
        let layout: Layout = serde_wasm_bindgen::from_value(layout)?;
        let mut web = Self::new();
        web.layout = layout;
        Ok(web)
    }

    /// Builds a game whose automatic passes lock input for `millis`.
    #[wasm_bindgen(js_name = withPassDelay)]
    pub fn with_pass_delay(millis: u32) -> WebOthello {
        let mut web = Self::new();
        web.game = GameInstance::with_config(GameConfig {
            pass_delay: Duration::from_millis(u64::from(millis)),
        });
        web
    }

    #[wasm_bindgen(js_name = canvasSize)]
    pub fn canvas_size(&self) -> f64 {
        self.layout.canvas_size()
    }

    /// Handles a canvas click at `(x, y)` pixels.
    /// Returns `true` when a move was made; anything else is ignored.
    pub fn click(&mut self, x: f64, y: f64) -> bool {
        let Some(square) = self.layout.to_square(x, y) else {
            return false;
        };
        match self.game.play(square) {
            Ok(outcome) => {
                self.report(&outcome);
                true
            }
            Err(_) => false,
        }
    }

    /// Strict variant of `click` for grid coordinates; errors are returned.
    pub fn play(&mut self, x: u8, y: u8) -> Result<JsValue, JsValue> {
        let pos = Position::try_new(i64::from(x), i64::from(y)).map_err(to_js_error)?;
        let outcome = self.game.play(pos).map_err(to_js_error)?;
        self.report(&outcome);
        Ok(serde_wasm_bindgen::to_value(&outcome.flipped)?)
    }

    /// Unlocks input once a pending pass delay has elapsed.
    /// Returns `true` when the host should redraw.
    pub fn tick(&mut self) -> bool {
        self.game.tick(Instant::now())
    }

    pub fn reset(&mut self) {
        self.game.reset();
        log("board reset");
    }

    #[wasm_bindgen(js_name = setOptions)]
    pub fn set_options(&mut self, options: JsValue) -> Result<(), JsValue> {
        self.options = serde_wasm_bindgen::from_value(options)?;
        Ok(())
    }

    pub fn options(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&self.options)?)
    }

    pub fn state(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&self.game.to_game_state())?)
    }

    pub fn stats(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&self.game.stats())?)
    }

    pub fn result(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&self.game.to_game_result())?)
    }

    #[wasm_bindgen(js_name = legalMoves)]
    pub fn legal_moves(&self) -> Result<JsValue, JsValue> {
        Ok(serde_wasm_bindgen::to_value(&self.game.legal_moves())?)
    }

    #[wasm_bindgen(js_name = drawCommands)]
    pub fn draw_commands(&self) -> Result<JsValue, JsValue> {
        let commands = render(&self.game, &self.options, &self.layout);
        Ok(serde_wasm_bindgen::to_value(&commands)?)
    }
}

impl WebOthello {
    fn report(&self, outcome: &MoveOutcome) {
        if let Some(skipped) = outcome.skipped {
            log(&format!("{} has no legal move and passes", skipped.label()));
        }
        if outcome.game_over {
            let result = self.game.to_game_result();
            log(&format!(
                "game over: black {} - white {}",
                result.black_count, result.white_count
            ));
        }
    }
}

impl Default for WebOthello {
    fn default() -> Self {
        Self::new()
    }
}

fn to_js_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}
