//! Ball Breaker - a fixed-timestep Breakout simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (movement, collisions, game state)
//! - `view`: Per-frame snapshot for whatever draws the game
//! - `highscore`: Persisted best score
//! - `settings`: Tunable configuration loaded from JSON
//! - `session`: Fixed-period driver tying the above together

pub mod highscore;
pub mod session;
pub mod settings;
pub mod sim;
pub mod view;

pub use highscore::HighScore;
pub use session::Session;
pub use settings::Settings;

/// Game configuration constants (pixel units, top-left origin)
pub mod consts {
    /// Fixed simulation period in milliseconds
    pub const TICK_MILLIS: u64 = 10;

    /// Border tiles are square
    pub const WALL_TILE: i32 = 10;
    /// Border rows/columns are laid out for 0..=WALL_SPAN
    pub const WALL_SPAN: i32 = 700;
    pub const TOP_WALL_Y: i32 = 0;
    pub const BOTTOM_WALL_Y: i32 = 570;
    pub const LEFT_WALL_X: i32 = 0;
    pub const RIGHT_WALL_X: i32 = 500;

    /// Ball position thresholds that decide which way a wall bounce reflects
    pub const TOP_BOUNCE_Y: i32 = 10;
    pub const BOTTOM_BOUNCE_Y: i32 = 635;
    pub const LEFT_BOUNCE_X: i32 = 10;
    pub const RIGHT_BOUNCE_X: i32 = 485;

    /// Ball defaults
    pub const BALL_SIZE: i32 = 15;
    pub const BALL_START_X: i32 = 250;
    pub const BALL_START_Y: i32 = 500;
    pub const BALL_START_DX: i32 = 2;
    pub const BALL_START_DY: i32 = -2;

    /// Paddle defaults
    pub const PADDLE_START_X: i32 = 212;
    pub const PADDLE_Y: i32 = 550;
    pub const PADDLE_WIDTH: i32 = 100;
    pub const PADDLE_HEIGHT: i32 = 10;
    pub const PADDLE_MIN_X: i32 = 10;
    pub const PADDLE_MAX_X: i32 = 400;
    /// Pixels per tick while a move key is held (10 px per 20 ms)
    pub const PADDLE_SPEED: i32 = 5;
    /// How far below the paddle top a ball can still be caught
    pub const PADDLE_CATCH_DEPTH: i32 = 100;
    /// Ball right edge within [x, x + LEFT_ZONE] kicks left
    pub const PADDLE_LEFT_ZONE: i32 = 55;
    /// Ball right edge at or past x + RIGHT_ZONE kicks right
    pub const PADDLE_RIGHT_ZONE: i32 = 75;
    /// Ball top this far below the paddle top is a miss
    pub const MISS_OFFSET: i32 = 10;

    /// Brick defaults
    pub const BRICK_WIDTH: i32 = 35;
    pub const BRICK_HEIGHT: i32 = 20;
    pub const POINTS_PER_BRICK: u32 = 35;
    /// Horizontal speed given to a stalled ball when it strikes a silver brick
    pub const SILVER_RESTART_DX: i32 = 2;

    /// Spare lives at session start (a miss with zero spares loses)
    pub const STARTING_LIVES: u8 = 2;
}
