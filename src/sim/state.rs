//! Game state and core simulation types
//!
//! All state the tick function reads or writes lives in `GameState`. Nothing
//! here is shared between threads; callers own the state and pass it to `tick`.

use glam::IVec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::config::GameConfig;
use super::level::generate_level;
use super::rect::Rect;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Game is paused
    Paused,
    /// Run ended (see `Outcome`)
    GameOver,
}

/// How the session ended, if it has
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Outcome {
    #[default]
    InProgress,
    Won,
    Lost,
}

impl Outcome {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

/// Something that happened during the last tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    WallBounce,
    PaddleHit { kick: i32 },
    BrickDestroyed { id: u32, kind: BrickKind },
    LifeLost { lives_left: u8 },
    Won,
    Lost,
}

/// The ball
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: IVec2,
    pub vel: IVec2,
    pub size: IVec2,
}

impl Default for Ball {
    fn default() -> Self {
        Self {
            pos: IVec2::new(BALL_START_X, BALL_START_Y),
            vel: IVec2::new(BALL_START_DX, BALL_START_DY),
            size: IVec2::splat(BALL_SIZE),
        }
    }
}

impl Ball {
    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }

    /// Advance by the current velocity
    pub fn advance(&mut self) {
        self.pos += self.vel;
    }

    /// Negate vertical velocity and nudge along the new direction
    pub fn bounce_y(&mut self) {
        self.vel.y = -self.vel.y;
        self.pos.y += self.vel.y;
    }

    /// Negate horizontal velocity and nudge along the new direction
    pub fn bounce_x(&mut self) {
        self.vel.x = -self.vel.x;
        self.pos.x += self.vel.x;
    }

    /// Back to the serve position and velocity after a lost life
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// The player's paddle. Only `x` ever changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paddle {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Default for Paddle {
    fn default() -> Self {
        Self {
            x: PADDLE_START_X,
            y: PADDLE_Y,
            width: PADDLE_WIDTH,
            height: PADDLE_HEIGHT,
        }
    }
}

impl Paddle {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Region in which the ball counts as caught: the paddle face extended
    /// `PADDLE_CATCH_DEPTH` pixels downward
    pub fn catch_zone(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, PADDLE_CATCH_DEPTH)
    }

    /// Ball top at or below this row means the paddle missed
    pub fn miss_line(&self) -> i32 {
        self.y + MISS_OFFSET
    }

    pub fn center_x(&self) -> i32 {
        self.x + self.width / 2
    }

    /// Apply one tick of held-key movement. Left is applied before right and
    /// each step is clamped to the track on its own.
    pub fn steer(&mut self, move_left: bool, move_right: bool, config: &GameConfig) {
        if move_left {
            self.x = config.clamp_paddle_x(self.x - config.paddle_speed);
        }
        if move_right {
            self.x = config.clamp_paddle_x(self.x + config.paddle_speed);
        }
    }
}

/// Brick types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum BrickKind {
    /// Restarts horizontal motion of a ball travelling straight up or down
    Silver,
    #[default]
    Gold,
}

/// A destructible target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brick {
    pub id: u32,
    pub kind: BrickKind,
    pub rect: Rect,
}

/// A static border tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Wall {
    pub rect: Rect,
}

impl Wall {
    pub fn tile(x: i32, y: i32) -> Self {
        Self {
            rect: Rect::new(x, y, WALL_TILE, WALL_TILE),
        }
    }
}

/// Complete game state (deterministic for a given seed and input sequence)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Drives the paddle edge kick
    pub rng: Pcg32,
    pub config: GameConfig,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Spare lives; a miss with none left ends the run
    pub lives: u8,
    /// Bricks destroyed this session
    pub destroyed: u32,
    pub score: u32,
    pub phase: GamePhase,
    pub outcome: Outcome,
    pub paddle: Paddle,
    pub ball: Ball,
    pub walls: Vec<Wall>,
    /// Live bricks, in resolution order
    pub bricks: Vec<Brick>,
    /// Events raised by the most recent tick
    pub events: Vec<GameEvent>,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a new game with default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_config(seed, GameConfig::default())
    }

    pub fn with_config(seed: u64, config: GameConfig) -> Self {
        let layout = config.layout;
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            lives: config.starting_lives,
            config,
            time_ticks: 0,
            destroyed: 0,
            score: 0,
            phase: GamePhase::Playing,
            outcome: Outcome::InProgress,
            paddle: Paddle::default(),
            ball: Ball::default(),
            walls: Vec::new(),
            bricks: Vec::new(),
            events: Vec::new(),
            next_id: 1,
        };

        generate_level(&mut state, layout);

        state
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn is_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// End the run with a terminal outcome
    pub(crate) fn finish(&mut self, outcome: Outcome) {
        debug_assert!(outcome.is_terminal());
        self.outcome = outcome;
        self.phase = GamePhase::GameOver;
        self.events.push(match outcome {
            Outcome::Won => GameEvent::Won,
            _ => GameEvent::Lost,
        });
        log::info!(
            "Game over: {:?} after {} ticks, score {}",
            outcome,
            self.time_ticks,
            self.score
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_defaults() {
        let state = GameState::new(7);
        assert_eq!(state.lives, STARTING_LIVES);
        assert_eq!(state.score, 0);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.outcome, Outcome::InProgress);
        assert_eq!(state.ball.pos, IVec2::new(250, 500));
        assert_eq!(state.ball.vel, IVec2::new(2, -2));
        assert_eq!(state.paddle.x, 212);
        assert_eq!(state.bricks.len(), 30);
        assert_eq!(state.walls.len(), 284);
    }

    #[test]
    fn test_ball_bounce_nudges() {
        let mut ball = Ball::default();
        ball.bounce_y();
        assert_eq!(ball.vel, IVec2::new(2, 2));
        assert_eq!(ball.pos, IVec2::new(250, 502));

        ball.bounce_x();
        assert_eq!(ball.vel, IVec2::new(-2, 2));
        assert_eq!(ball.pos, IVec2::new(248, 502));
    }

    #[test]
    fn test_ball_reset() {
        let mut ball = Ball::default();
        ball.pos = IVec2::new(10, 600);
        ball.vel = IVec2::new(-5, 2);
        ball.reset();
        assert_eq!(ball, Ball::default());
    }

    #[test]
    fn test_paddle_steer_clamps() {
        let config = GameConfig::default();
        let mut paddle = Paddle::default();

        for _ in 0..200 {
            paddle.steer(true, false, &config);
        }
        assert_eq!(paddle.x, PADDLE_MIN_X);

        for _ in 0..200 {
            paddle.steer(false, true, &config);
        }
        assert_eq!(paddle.x, PADDLE_MAX_X);
    }

    #[test]
    fn test_paddle_both_keys_cancel() {
        let config = GameConfig::default();
        let mut paddle = Paddle::default();
        paddle.steer(true, true, &config);
        assert_eq!(paddle.x, PADDLE_START_X);
    }

    #[test]
    fn test_paddle_both_keys_at_left_stop() {
        let config = GameConfig::default();
        let mut paddle = Paddle {
            x: PADDLE_MIN_X,
            ..Default::default()
        };
        // Left is clamped away, then right still applies
        paddle.steer(true, true, &config);
        assert_eq!(paddle.x, PADDLE_MIN_X + PADDLE_SPEED);

        paddle.x = PADDLE_MAX_X;
        paddle.steer(true, true, &config);
        assert_eq!(paddle.x, PADDLE_MAX_X);
    }
}
