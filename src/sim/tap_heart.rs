//! Tap the heart
//!
//! Hearts pop up at random spots on a fixed interval while a round clock
//! counts down. Time is fed in by the host through [`TapHeartGame::advance`];
//! both timers are fixed-interval, so the same seed and the same total time
//! always spawn the same hearts.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use crate::consts::*;

const SECOND_MS: u32 = 1000;

/// A live heart, positioned in percent of the play field
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Heart {
    pub id: u32,
    pub x_pct: f64,
    pub y_pct: f64,
}

#[derive(Debug, Clone)]
pub struct TapHeartGame {
    pub running: bool,
    /// Whole seconds left in the round
    pub time_left: u32,
    pub score: u32,
    pub hearts: Vec<Heart>,
    round_secs: u32,
    spawn_ms: u32,
    /// Ids keep counting across rounds
    next_id: u32,
    clock_ms: u32,
    spawn_clock_ms: u32,
    rng: Pcg32,
}

impl TapHeartGame {
    /// Idle game; `spawn_ms` of zero is treated as one millisecond
    pub fn new(round_secs: u32, spawn_ms: u32, seed: u64) -> Self {
        Self {
            running: false,
            time_left: round_secs,
            score: 0,
            hearts: Vec::new(),
            round_secs,
            spawn_ms: spawn_ms.max(1),
            next_id: 1,
            clock_ms: 0,
            spawn_clock_ms: 0,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Begin a round (ignored while one is running)
    pub fn start(&mut self, seed: u64) {
        if self.running {
            return;
        }
        self.running = true;
        self.time_left = self.round_secs;
        self.score = 0;
        self.hearts.clear();
        self.clock_ms = 0;
        self.spawn_clock_ms = 0;
        self.rng = Pcg32::seed_from_u64(seed);
        log::info!("Tap-the-heart round started ({}s)", self.round_secs);
    }

    /// Round finished (as opposed to never started)
    pub fn is_over(&self) -> bool {
        !self.running && self.time_left == 0
    }

    /// Run both timers forward by `ms`, firing every interval that elapses
    ///
    /// When the countdown and the spawner are due at the same instant the
    /// countdown fires first.
    pub fn advance(&mut self, ms: u32) {
        let mut remaining = ms;
        while self.running && remaining > 0 {
            let to_second = SECOND_MS - self.clock_ms;
            let to_spawn = self.spawn_ms - self.spawn_clock_ms;
            let dt = remaining.min(to_second).min(to_spawn);

            self.clock_ms += dt;
            self.spawn_clock_ms += dt;
            remaining -= dt;

            if self.clock_ms == SECOND_MS {
                self.clock_ms = 0;
                self.time_left = self.time_left.saturating_sub(1);
                if self.time_left == 0 {
                    self.finish();
                    break;
                }
            }
            if self.spawn_clock_ms == self.spawn_ms {
                self.spawn_clock_ms = 0;
                self.spawn();
            }
        }
    }

    /// Tap a heart; scores only while running and only for a live heart
    pub fn hit(&mut self, id: u32) -> bool {
        if !self.running {
            return false;
        }
        let Some(pos) = self.hearts.iter().position(|h| h.id == id) else {
            return false;
        };
        self.hearts.remove(pos);
        self.score += 1;
        true
    }

    fn spawn(&mut self) {
        let id = self.next_id;
        self.next_id += 1;
        let x_pct = TAP_X_MIN_PCT + self.rng.random::<f64>() * TAP_X_SPAN_PCT;
        let y_pct = TAP_Y_MIN_PCT + self.rng.random::<f64>() * TAP_Y_SPAN_PCT;
        self.hearts.push(Heart { id, x_pct, y_pct });
    }

    fn finish(&mut self) {
        self.running = false;
        self.hearts.clear();
        log::info!("Tap-the-heart round over, score {}", self.score);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started() -> TapHeartGame {
        let mut game = TapHeartGame::new(TAP_ROUND_SECS, TAP_SPAWN_MS, 0);
        game.start(11);
        game
    }

    #[test]
    fn test_spawns_on_interval() {
        let mut game = started();
        game.advance(649);
        assert!(game.hearts.is_empty());
        game.advance(1);
        assert_eq!(game.hearts.len(), 1);
        assert_eq!(game.hearts[0].id, 1);

        game.advance(650 * 3);
        assert_eq!(game.hearts.len(), 4);
        assert_eq!(game.time_left, 18);
    }

    #[test]
    fn test_heart_positions_in_bounds() {
        let mut game = started();
        game.advance(10_000);
        assert!(!game.hearts.is_empty());
        for h in &game.hearts {
            assert!(h.x_pct >= 5.0 && h.x_pct < 95.0);
            assert!(h.y_pct >= 5.0 && h.y_pct < 85.0);
        }
    }

    #[test]
    fn test_chunked_time_matches_single_advance() {
        let mut a = started();
        let mut b = started();
        a.advance(7_777);
        for _ in 0..7_777 {
            b.advance(1);
        }
        assert_eq!(a.hearts, b.hearts);
        assert_eq!(a.time_left, b.time_left);
    }

    #[test]
    fn test_hit_scores_and_removes() {
        let mut game = started();
        game.advance(1300);
        assert_eq!(game.hearts.len(), 2);

        assert!(game.hit(1));
        assert_eq!(game.score, 1);
        assert_eq!(game.hearts.len(), 1);
        assert!(!game.hit(1));
        assert_eq!(game.score, 1);
    }

    #[test]
    fn test_round_ends() {
        let mut game = started();
        game.advance(19_999);
        assert!(game.running);
        assert_eq!(game.time_left, 1);
        // 650 ms spawner fired 30 times by 19.5 s
        assert_eq!(game.hearts.len(), 30);

        game.advance(1);
        assert!(!game.running);
        assert!(game.is_over());
        assert!(game.hearts.is_empty());
        assert!(!game.hit(5));

        // Further time does nothing
        game.advance(5_000);
        assert_eq!(game.time_left, 0);
    }

    #[test]
    fn test_ids_continue_across_rounds() {
        let mut game = started();
        game.advance(20_000);
        game.start(12);
        game.advance(650);
        assert_eq!(game.hearts[0].id, 31);
        assert_eq!(game.score, 0);
    }
}
