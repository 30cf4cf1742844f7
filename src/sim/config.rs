//! Simulation tuning
//!
//! Everything here is plain data handed to `GameState::with_config`. The
//! defaults reproduce the original BallBreaker playfield.

use serde::{Deserialize, Serialize};

use super::level::Layout;
use crate::consts::*;

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    pub starting_lives: u8,
    pub paddle_speed: i32,
    pub paddle_min_x: i32,
    pub paddle_max_x: i32,
    pub points_per_brick: u32,
    pub layout: Layout,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            starting_lives: STARTING_LIVES,
            paddle_speed: PADDLE_SPEED,
            paddle_min_x: PADDLE_MIN_X,
            paddle_max_x: PADDLE_MAX_X,
            points_per_brick: POINTS_PER_BRICK,
            layout: Layout::default(),
        }
    }
}

impl GameConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clamp a paddle x coordinate to the track
    pub fn clamp_paddle_x(&self, x: i32) -> i32 {
        x.clamp(self.paddle_min_x, self.paddle_max_x)
    }
}
