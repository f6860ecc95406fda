//! Browser bindings
//!
//! Thin wasm-bindgen wrappers around the game cores. The page owns the canvas,
//! the animation-frame loop and the DOM; these classes only hold state.

use wasm_bindgen::prelude::*;

use crate::countdown::{Countdown, pad2};
use crate::settings::Settings;
use crate::sim::{
    self, DropResult, FlipResult, HillClimbInput, HillClimbState, MemoryGame, Quiz, Question,
    StackGame, TapHeartGame, Throttle, TicTacToeGame,
};

fn js_err(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn seed_from_clock() -> u64 {
    js_sys::Date::now() as u64
}

fn load_settings(json: Option<String>) -> Settings {
    json.map(|j| Settings::from_json_or_default(&j))
        .unwrap_or_default()
}

/// Install logging and the panic hook once at module load
#[wasm_bindgen(start)]
pub fn wasm_init() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("love-arcade {} loaded", env!("CARGO_PKG_VERSION"));
}

#[wasm_bindgen(js_name = HillClimb)]
pub struct WebHillClimb {
    state: HillClimbState,
    input: HillClimbInput,
}

#[wasm_bindgen(js_class = HillClimb)]
impl WebHillClimb {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WebHillClimb {
        WebHillClimb {
            state: HillClimbState::new(),
            input: HillClimbInput::default(),
        }
    }

    pub fn start(&mut self) {
        self.state.start();
        self.input = HillClimbInput::default();
    }

    pub fn stop(&mut self) {
        self.state.stop();
    }

    /// Held drive direction: -1, 0 or 1 (anything else is rejected)
    pub fn set_throttle(&mut self, axis: i32) -> Result<(), JsValue> {
        self.input.throttle =
            Throttle::from_axis(axis).ok_or_else(|| js_err(format!("bad throttle {axis}")))?;
        Ok(())
    }

    pub fn press_brake(&mut self) {
        self.input.brake = true;
    }

    /// One animation frame; returns how many coins were picked up
    pub fn step(&mut self) -> u32 {
        let picked = sim::step(&mut self.state, &self.input);
        self.input.brake = false;
        picked.len() as u32
    }

    pub fn running(&self) -> bool {
        self.state.running
    }
    pub fn world_x(&self) -> f64 {
        self.state.world_x
    }
    pub fn car_y(&self) -> f64 {
        self.state.car_y
    }
    pub fn car_angle(&self) -> f64 {
        self.state.car_angle
    }
    pub fn speed(&self) -> f64 {
        self.state.speed
    }
    pub fn coins(&self) -> u32 {
        self.state.coins
    }
    pub fn distance(&self) -> f64 {
        self.state.distance as f64
    }

    /// Terrain height per screen column
    pub fn terrain_profile(&self) -> Vec<f64> {
        self.state.terrain_profile()
    }

    /// Visible coins as flat [x0, y0, x1, y1, ...] screen coordinates
    pub fn visible_coins(&self) -> Vec<f64> {
        self.state
            .visible_coins()
            .into_iter()
            .flat_map(|(_, p)| [p.x, p.y])
            .collect()
    }
}

impl Default for WebHillClimb {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen(js_name = TicTacToe)]
#[derive(Default)]
pub struct WebTicTacToe {
    game: TicTacToeGame,
}

#[wasm_bindgen(js_class = TicTacToe)]
impl WebTicTacToe {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WebTicTacToe {
        WebTicTacToe::default()
    }

    /// Human move; returns the computer's reply or -1 (also for ignored clicks)
    pub fn play(&mut self, cell: usize) -> Result<i32, JsValue> {
        let reply = self.game.click(cell).map_err(js_err)?;
        Ok(reply.map_or(-1, |c| c as i32))
    }

    /// Cells as a 9-character string of `X`, `O` and `.`
    pub fn cells(&self) -> String {
        self.game
            .board()
            .cells()
            .iter()
            .map(|c| c.map_or('.', |m| if m == sim::Mark::X { 'X' } else { 'O' }))
            .collect()
    }

    pub fn status(&self) -> String {
        self.game.status()
    }

    pub fn finished(&self) -> bool {
        self.game.outcome().is_some()
    }

    pub fn reset(&mut self) {
        self.game.reset();
    }
}

#[wasm_bindgen(js_name = Stack)]
#[derive(Default)]
pub struct WebStack {
    game: StackGame,
}

#[wasm_bindgen(js_class = Stack)]
impl WebStack {
    #[wasm_bindgen(constructor)]
    pub fn new() -> WebStack {
        WebStack::default()
    }

    pub fn start(&mut self) {
        self.game.start();
    }

    pub fn tick(&mut self) {
        self.game.tick();
    }

    /// Returns false when the drop missed and the run ended
    pub fn drop_block(&mut self) -> bool {
        !matches!(self.game.drop_block(), DropResult::Missed)
    }

    pub fn running(&self) -> bool {
        self.game.running
    }

    pub fn level(&self) -> u32 {
        self.game.level
    }

    /// Placed blocks as flat [x, w, y, ...]
    pub fn blocks(&self) -> Vec<f64> {
        self.game
            .stack
            .iter()
            .flat_map(|s| [s.x, s.w, s.y])
            .collect()
    }

    /// Sliding block as [x, w, y]
    pub fn mover(&self) -> Vec<f64> {
        let m = self.game.mover;
        vec![m.x, m.w, m.y]
    }
}

#[wasm_bindgen(js_name = Memory)]
pub struct WebMemory {
    game: MemoryGame,
}

#[wasm_bindgen(js_class = Memory)]
impl WebMemory {
    #[wasm_bindgen(constructor)]
    pub fn new(settings_json: Option<String>) -> WebMemory {
        let settings = load_settings(settings_json);
        WebMemory {
            game: MemoryGame::new(settings.memory_pairs, seed_from_clock()),
        }
    }

    /// Returns the reveal delay in ms when a pair was turned, else 0
    pub fn flip(&mut self, index: usize) -> u32 {
        match self.game.flip(index) {
            FlipResult::Second(pending) => pending.reveal_ms(),
            FlipResult::First | FlipResult::Ignored => 0,
        }
    }

    pub fn resolve(&mut self) {
        self.game.resolve();
    }

    pub fn reset(&mut self) {
        self.game.reset(seed_from_clock());
    }

    pub fn moves(&self) -> u32 {
        self.game.moves
    }

    pub fn done(&self) -> bool {
        self.game.is_done()
    }

    /// Cards as JSON
    pub fn deck(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.game.deck).map_err(js_err)
    }
}

#[wasm_bindgen(js_name = TapHeart)]
pub struct WebTapHeart {
    game: TapHeartGame,
}

#[wasm_bindgen(js_class = TapHeart)]
impl WebTapHeart {
    #[wasm_bindgen(constructor)]
    pub fn new(settings_json: Option<String>) -> WebTapHeart {
        let settings = load_settings(settings_json);
        WebTapHeart {
            game: TapHeartGame::new(settings.tap_round_secs, settings.tap_spawn_ms, seed_from_clock()),
        }
    }

    pub fn start(&mut self) {
        self.game.start(seed_from_clock());
    }

    pub fn advance(&mut self, ms: u32) {
        self.game.advance(ms);
    }

    pub fn hit(&mut self, id: u32) -> bool {
        self.game.hit(id)
    }

    pub fn running(&self) -> bool {
        self.game.running
    }

    pub fn time_left(&self) -> u32 {
        self.game.time_left
    }

    pub fn score(&self) -> u32 {
        self.game.score
    }

    /// Live hearts as JSON
    pub fn hearts(&self) -> Result<String, JsValue> {
        serde_json::to_string(&self.game.hearts).map_err(js_err)
    }
}

#[wasm_bindgen(js_name = Quiz)]
pub struct WebQuiz {
    quiz: Quiz,
}

#[wasm_bindgen(js_class = Quiz)]
impl WebQuiz {
    /// Questions as a JSON array of `{prompt, options, answer_index}`
    #[wasm_bindgen(constructor)]
    pub fn new(questions_json: &str) -> Result<WebQuiz, JsValue> {
        let questions: Vec<Question> = serde_json::from_str(questions_json).map_err(js_err)?;
        Ok(WebQuiz {
            quiz: Quiz::new(questions),
        })
    }

    pub fn choose(&mut self, option: usize) -> Result<(), JsValue> {
        self.quiz.choose(option).map_err(js_err)
    }

    pub fn next(&mut self) -> Result<bool, JsValue> {
        self.quiz.next().map_err(js_err)
    }

    pub fn restart(&mut self) {
        self.quiz.restart();
    }

    pub fn index(&self) -> usize {
        self.quiz.index()
    }

    pub fn score(&self) -> u32 {
        self.quiz.score()
    }

    pub fn complete(&self) -> bool {
        self.quiz.is_complete()
    }
}

/// Countdown readout as JSON `{days, hours, minutes, seconds, done, progress}`
#[wasm_bindgen]
pub fn countdown_now(settings_json: Option<String>) -> String {
    let settings = load_settings(settings_json);
    let now = chrono::Local::now().naive_local();
    let countdown = Countdown::new(&settings.countdown, now);
    let left = countdown.time_left(now);
    serde_json::json!({
        "days": pad2(left.days),
        "hours": pad2(left.hours),
        "minutes": pad2(left.minutes),
        "seconds": pad2(left.seconds),
        "done": left.is_zero(),
        "progress": countdown.year_progress(now),
    })
    .to_string()
}
