//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (collection order for walls and bricks)
//! - No rendering or platform dependencies

pub mod collision;
pub mod config;
pub mod level;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{BrickHit, classify_brick_hit, resolve_walls};
pub use config::GameConfig;
pub use level::{Layout, build_walls, generate_level};
pub use rect::Rect;
pub use state::{Ball, Brick, BrickKind, GameEvent, GamePhase, GameState, Outcome, Paddle, Wall};
pub use tick::{TickInput, tick};
