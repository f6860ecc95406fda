//! Hill climb driving toy
//!
//! One call to [`step`] advances exactly one animation frame. There is no
//! delta-time correction: a slow frame simply means a slow car.

use std::collections::HashSet;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use super::terrain::{coin_at, coin_bucket, surface_angle, terrain_y};
use crate::consts::*;

/// Discrete driving input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Throttle {
    Reverse,
    #[default]
    Idle,
    Accelerate,
}

impl Throttle {
    /// Parse a raw axis value; only -1, 0 and 1 are accepted
    pub fn from_axis(axis: i32) -> Option<Self> {
        match axis {
            -1 => Some(Throttle::Reverse),
            0 => Some(Throttle::Idle),
            1 => Some(Throttle::Accelerate),
            _ => None,
        }
    }

    pub fn axis(self) -> i32 {
        match self {
            Throttle::Reverse => -1,
            Throttle::Idle => 0,
            Throttle::Accelerate => 1,
        }
    }
}

/// Input for a single frame
#[derive(Debug, Clone, Default)]
pub struct HillClimbInput {
    /// Held drive direction
    pub throttle: Throttle,
    /// Brake pressed this frame (one-shot; braking continues after release)
    pub brake: bool,
}

/// Complete hill climb state
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HillClimbState {
    /// Whether a drive is in progress
    pub running: bool,
    /// Horizontal scroll of the world under the car
    pub world_x: f64,
    /// Car center height (screen space, y down)
    pub car_y: f64,
    /// Car body rotation (radians)
    pub car_angle: f64,
    /// Signed speed, bounded to [-REVERSE_RATIO * MAX_SPEED, MAX_SPEED]
    pub speed: f64,
    /// Brake deceleration in progress
    pub braking: bool,
    /// Collected coin indices (insertion only)
    pub collected: HashSet<i64>,
    /// Coins scored this drive
    pub coins: u32,
    /// Distance readout in meters (never negative)
    pub distance: u64,
    /// Frames stepped since start
    pub frame: u64,
}

impl Default for HillClimbState {
    fn default() -> Self {
        Self::new()
    }
}

impl HillClimbState {
    /// Idle state with the car resting at the origin
    pub fn new() -> Self {
        Self {
            running: false,
            world_x: 0.0,
            car_y: terrain_y(0.0) - CAR_GROUND_OFFSET,
            car_angle: 0.0,
            speed: 0.0,
            braking: false,
            collected: HashSet::new(),
            coins: 0,
            distance: 0,
            frame: 0,
        }
    }

    /// Begin a fresh drive, discarding all progress
    pub fn start(&mut self) {
        *self = Self {
            running: true,
            ..Self::new()
        };
        log::info!("Hill climb started");
    }

    /// Stop stepping (the host cancelled its frame loop)
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Car position on screen
    pub fn car_screen_pos(&self) -> DVec2 {
        DVec2::new(CAR_SCREEN_X, self.car_y)
    }

    /// Terrain heights for every screen column, left to right
    pub fn terrain_profile(&self) -> Vec<f64> {
        let left = self.world_x - CAR_SCREEN_X;
        (0..HILL_VIEW_WIDTH as usize)
            .map(|col| terrain_y(left + col as f64))
            .collect()
    }

    /// Uncollected coins on screen, as (index, screen position)
    pub fn visible_coins(&self) -> Vec<(i64, DVec2)> {
        let idx = coin_bucket(self.world_x);
        ((idx - COIN_SCAN_BEHIND)..=(idx + COIN_DRAW_AHEAD))
            .filter(|&i| i >= 0 && !self.collected.contains(&i))
            .filter_map(|i| {
                let coin = coin_at(i);
                let sx = CAR_SCREEN_X + (coin.x - self.world_x);
                if sx < -COIN_CULL_MARGIN || sx > HILL_VIEW_WIDTH + COIN_CULL_MARGIN {
                    None
                } else {
                    Some((i, DVec2::new(sx, coin.y)))
                }
            })
            .collect()
    }

    fn update_speed(&mut self, throttle: Throttle) {
        match throttle {
            Throttle::Accelerate => self.speed += ACCEL,
            Throttle::Reverse => self.speed -= ACCEL,
            Throttle::Idle => {
                if self.speed > 0.0 {
                    self.speed = (self.speed * FRICTION - FRICTION_BIAS).max(0.0);
                }
                if self.speed < 0.0 {
                    self.speed = (self.speed * FRICTION + FRICTION_BIAS).min(0.0);
                }
            }
        }

        if self.speed > MAX_SPEED {
            self.speed = MAX_SPEED;
        }
        if self.speed < -MAX_SPEED * REVERSE_RATIO {
            self.speed = -MAX_SPEED * REVERSE_RATIO;
        }
    }

    fn settle_on_terrain(&mut self) {
        let ground = terrain_y(self.world_x);
        if self.car_y < ground - CAR_GROUND_OFFSET {
            self.car_y += GRAVITY;
        } else {
            self.car_y = ground - CAR_GROUND_OFFSET;
        }
    }

    /// Pick up coins near the car; returns the indices collected this frame
    fn collect_coins(&mut self) -> Vec<i64> {
        let idx = coin_bucket(self.world_x);
        let mut picked = Vec::new();

        for i in (idx - COIN_SCAN_BEHIND)..=(idx + COIN_SCAN_AHEAD) {
            if i < 0 || self.collected.contains(&i) {
                continue;
            }
            let coin = coin_at(i);
            let screen_x = CAR_SCREEN_X + (coin.x - self.world_x);
            let dx = screen_x - CAR_SCREEN_X;
            let dy = coin.y - self.car_y;
            if dx.hypot(dy) < COIN_PICKUP_RADIUS {
                self.collected.insert(i);
                self.coins += 1;
                picked.push(i);
                log::debug!("Coin {} collected (total {})", i, self.coins);
            }
        }

        picked
    }

    fn apply_brake(&mut self) {
        if !self.braking {
            return;
        }
        if self.speed.abs() > BRAKE_STOP {
            self.speed += if self.speed > 0.0 { -BRAKE_DECEL } else { BRAKE_DECEL };
        } else {
            self.braking = false;
        }
    }
}

/// Advance the drive by one frame
///
/// Returns the coin indices collected during this frame. Does nothing while
/// the drive is not running.
pub fn step(state: &mut HillClimbState, input: &HillClimbInput) -> Vec<i64> {
    if !state.running {
        return Vec::new();
    }

    state.update_speed(input.throttle);
    state.world_x += state.speed * FEEL_SCALE;
    state.settle_on_terrain();
    state.car_angle = surface_angle(state.world_x);

    let picked = state.collect_coins();

    state.distance = (state.world_x / DISTANCE_DIVISOR).floor().max(0.0) as u64;

    // Brake runs after the physics update, from the press frame onward
    if input.brake {
        state.braking = true;
    }
    state.apply_brake();

    state.frame += 1;
    picked
}
