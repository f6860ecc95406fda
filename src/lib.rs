//! Love Arcade - birthday countdown and mini-games
//!
//! Core modules:
//! - `sim`: Deterministic game cores (hill climb, tic-tac-toe, stacking, memory, tap-the-heart, quiz)
//! - `countdown`: Date arithmetic for the birthday countdown
//! - `settings`: Host-tunable preferences (JSON)
//! - `error`: Errors for host-facing entry points
//! - `web`: wasm-bindgen classes for the browser page (wasm32 only)

pub mod countdown;
pub mod error;
pub mod settings;
pub mod sim;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use countdown::{Countdown, TimeLeft};
pub use error::{ArcadeError, Result};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    // === Hill climb (viewport 320x200, one step per animation frame) ===

    /// Hill climb viewport
    pub const HILL_VIEW_WIDTH: f64 = 320.0;
    pub const HILL_VIEW_HEIGHT: f64 = 200.0;
    /// Car is drawn at a fixed screen column; the world scrolls under it
    pub const CAR_SCREEN_X: f64 = 80.0;
    /// Car center sits this far above the terrain surface
    pub const CAR_GROUND_OFFSET: f64 = 10.0;

    /// Fall acceleration while airborne (px per frame)
    pub const GRAVITY: f64 = 0.5;
    pub const MAX_SPEED: f64 = 2.8;
    /// Reverse is capped at this fraction of MAX_SPEED
    pub const REVERSE_RATIO: f64 = 0.6;
    pub const ACCEL: f64 = 0.03;
    /// Idle speed decay: speed * FRICTION, then FRICTION_BIAS toward zero
    pub const FRICTION: f64 = 0.985;
    pub const FRICTION_BIAS: f64 = 0.001;
    /// World pixels travelled per unit of speed per frame
    pub const FEEL_SCALE: f64 = 2.0;

    /// Brake pulls speed toward zero by this much per frame
    pub const BRAKE_DECEL: f64 = 0.05;
    /// Braking stops once |speed| is at or below this
    pub const BRAKE_STOP: f64 = 0.02;

    /// Horizontal run used for the car angle (matches the slope stencil width)
    pub const SLOPE_RUN: f64 = 2.0;
    pub const SLOPE_EPS: f64 = 1.0;

    /// Coins
    pub const COIN_SPACING: f64 = 120.0;
    pub const COIN_START_X: f64 = 140.0;
    pub const COIN_LIFT: f64 = 18.0;
    pub const COIN_EVEN_LIFT: f64 = 6.0;
    pub const COIN_PICKUP_RADIUS: f64 = 16.0;
    /// Coin index window scanned for pickups, relative to the car's bucket
    pub const COIN_SCAN_BEHIND: i64 = 2;
    pub const COIN_SCAN_AHEAD: i64 = 6;
    /// Coin index window scanned for drawing
    pub const COIN_DRAW_AHEAD: i64 = 20;
    /// Off-screen slack before a coin is culled from drawing
    pub const COIN_CULL_MARGIN: f64 = 20.0;

    /// World pixels per displayed meter
    pub const DISTANCE_DIVISOR: f64 = 5.0;

    // === Tic-tac-toe ===

    /// Score for a win found at search depth 0
    pub const WIN_SCORE: i32 = 10;

    // === Stacking (viewport 320x300) ===

    pub const STACK_VIEW_WIDTH: f64 = 320.0;
    pub const STACK_VIEW_HEIGHT: f64 = 300.0;
    pub const STACK_BLOCK_HEIGHT: f64 = 20.0;
    pub const STACK_BASE_X: f64 = 80.0;
    pub const STACK_BASE_WIDTH: f64 = 160.0;
    pub const STACK_BASE_SPEED: f64 = 2.0;
    /// Mover speed gained per placed block
    pub const STACK_SPEEDUP: f64 = 0.15;

    // === Memory match ===

    pub const MEMORY_MAX_PAIRS: usize = 6;
    /// Host delay before a matched pair is locked in
    pub const MATCH_REVEAL_MS: u32 = 400;
    /// Host delay before a mismatched pair is flipped back
    pub const MISMATCH_REVEAL_MS: u32 = 700;

    // === Tap the heart ===

    pub const TAP_ROUND_SECS: u32 = 20;
    pub const TAP_SPAWN_MS: u32 = 650;
    /// Spawn area in percent of the play field
    pub const TAP_X_MIN_PCT: f64 = 5.0;
    pub const TAP_X_SPAN_PCT: f64 = 90.0;
    pub const TAP_Y_MIN_PCT: f64 = 5.0;
    pub const TAP_Y_SPAN_PCT: f64 = 80.0;
}
