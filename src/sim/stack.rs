//! Block stacking timing game
//!
//! A block slides back and forth above the tower; dropping it keeps only the
//! part that overlaps the block below. Missing entirely ends the run.

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// A placed block (top-left corner and width; height is `STACK_BLOCK_HEIGHT`)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Slab {
    pub x: f64,
    pub w: f64,
    pub y: f64,
}

impl Slab {
    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.w
    }
}

/// The sliding block waiting to be dropped
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Mover {
    pub x: f64,
    pub w: f64,
    /// Signed horizontal speed (px per frame)
    pub dir: f64,
    pub y: f64,
}

/// Result of a drop
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DropResult {
    /// Block landed; carries the new level
    Placed { level: u32, width: f64 },
    /// No overlap; the run is over
    Missed,
    /// Nothing is running
    Ignored,
}

fn base_slab() -> Slab {
    Slab {
        x: STACK_BASE_X,
        w: STACK_BASE_WIDTH,
        y: STACK_VIEW_HEIGHT - STACK_BLOCK_HEIGHT,
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StackGame {
    pub running: bool,
    /// Placed blocks, base first
    pub stack: Vec<Slab>,
    pub mover: Mover,
    /// Blocks placed on top of the base in the current (or last) run
    pub level: u32,
}

impl Default for StackGame {
    fn default() -> Self {
        Self::new()
    }
}

impl StackGame {
    pub fn new() -> Self {
        let base = base_slab();
        Self {
            running: false,
            stack: vec![base],
            mover: Mover {
                x: 0.0,
                w: base.w,
                dir: STACK_BASE_SPEED,
                y: base.y - STACK_BLOCK_HEIGHT,
            },
            level: 0,
        }
    }

    /// Start a fresh tower
    pub fn start(&mut self) {
        *self = Self {
            running: true,
            ..Self::new()
        };
        log::info!("Stack game started");
    }

    /// Highest placed block; an empty tower reads as the base
    pub fn top(&self) -> Slab {
        self.stack.last().copied().unwrap_or_else(base_slab)
    }

    /// Slide the mover one frame, bouncing off the viewport edges
    pub fn tick(&mut self) {
        if !self.running {
            return;
        }
        let m = &mut self.mover;
        m.x += m.dir;
        if m.x <= 0.0 || m.x + m.w >= STACK_VIEW_WIDTH {
            m.dir = -m.dir;
        }
    }

    /// Drop the mover onto the tower
    pub fn drop_block(&mut self) -> DropResult {
        if !self.running {
            return DropResult::Ignored;
        }

        let top = self.top();
        let left = self.mover.x.max(top.x);
        let right = (self.mover.x + self.mover.w).min(top.right());
        let overlap = right - left;

        if overlap <= 0.0 {
            self.running = false;
            log::info!("Stack game over at level {}", self.level);
            return DropResult::Missed;
        }

        self.stack.push(Slab {
            x: left,
            w: overlap,
            y: top.y - STACK_BLOCK_HEIGHT,
        });
        self.mover = Mover {
            x: 0.0,
            w: overlap,
            dir: STACK_BASE_SPEED + self.stack.len() as f64 * STACK_SPEEDUP,
            y: top.y - 2.0 * STACK_BLOCK_HEIGHT,
        };
        self.level = (self.stack.len() - 1) as u32;

        DropResult::Placed {
            level: self.level,
            width: overlap,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn started() -> StackGame {
        let mut game = StackGame::new();
        game.start();
        game
    }

    #[test]
    fn test_initial_layout() {
        let game = started();
        assert_eq!(game.stack, vec![Slab { x: 80.0, w: 160.0, y: 280.0 }]);
        assert_eq!(game.mover.x, 0.0);
        assert_eq!(game.mover.w, 160.0);
        assert_eq!(game.mover.dir, 2.0);
        assert_eq!(game.mover.y, 260.0);
        assert_eq!(game.level, 0);
    }

    #[test]
    fn test_tick_bounces() {
        let mut game = started();
        // 160 wide block hits the right edge at x = 160 after 80 frames
        for _ in 0..80 {
            game.tick();
        }
        assert_eq!(game.mover.x, 160.0);
        assert_eq!(game.mover.dir, -2.0);

        game.tick();
        assert_eq!(game.mover.x, 158.0);
    }

    #[test]
    fn test_tick_idle_when_stopped() {
        let mut game = StackGame::new();
        game.tick();
        assert_eq!(game.mover.x, 0.0);
        assert_eq!(game.drop_block(), DropResult::Ignored);
    }

    #[test]
    fn test_empty_snapshot_reads_base() {
        let json = r#"{"running":true,"stack":[],"mover":{"x":80.0,"w":160.0,"dir":2.0,"y":260.0},"level":0}"#;
        let mut game: StackGame = serde_json::from_str(json).unwrap();
        assert_eq!(game.top(), Slab { x: 80.0, w: 160.0, y: 280.0 });
        assert_eq!(game.drop_block(), DropResult::Placed { level: 0, width: 160.0 });
        assert_eq!(game.top(), Slab { x: 80.0, w: 160.0, y: 260.0 });
    }

    #[test]
    fn test_partial_overlap_trims() {
        let mut game = started();
        // Mover spans 0..160, base spans 80..240
        let result = game.drop_block();
        assert_eq!(result, DropResult::Placed { level: 1, width: 80.0 });
        assert_eq!(game.top(), Slab { x: 80.0, w: 80.0, y: 260.0 });
        assert_eq!(game.mover.w, 80.0);
        assert_eq!(game.mover.x, 0.0);
        assert_eq!(game.mover.y, 240.0);
        assert!((game.mover.dir - 2.3).abs() < 1e-12);
    }

    #[test]
    fn test_perfect_drop_keeps_width() {
        let mut game = started();
        for _ in 0..40 {
            game.tick();
        }
        assert_eq!(game.mover.x, 80.0);
        assert_eq!(
            game.drop_block(),
            DropResult::Placed {
                level: 1,
                width: 160.0
            }
        );
    }

    #[test]
    fn test_miss_ends_run() {
        let mut game = started();
        game.drop_block(); // top now 80..160
        // Mover 0..80 touches the top's left edge: zero overlap is a miss
        assert_eq!(game.drop_block(), DropResult::Missed);
        assert!(!game.running);
        assert_eq!(game.level, 1);

        game.start();
        assert_eq!(game.level, 0);
        assert_eq!(game.stack.len(), 1);
    }
}
