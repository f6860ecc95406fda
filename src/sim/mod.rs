//! Deterministic game cores
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed per-frame steps only (no delta-time)
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod hill_climb;
pub mod memory;
pub mod quiz;
pub mod stack;
pub mod tap_heart;
pub mod terrain;
pub mod tictactoe;

pub use hill_climb::{HillClimbInput, HillClimbState, Throttle, step};
pub use memory::{Card, FlipResult, MemoryGame, PendingPair, generate_deck};
pub use quiz::{Question, Quiz};
pub use stack::{DropResult, Mover, Slab, StackGame};
pub use tap_heart::{Heart, TapHeartGame};
pub use terrain::{coin_at, coin_bucket, slope, surface_angle, terrain_y};
pub use tictactoe::{Board, Mark, Outcome, TicTacToeGame, best_move, best_move_index, minimax};
