//! Per-frame snapshot for a renderer
//!
//! The simulation never draws. Whatever does draw reads a `FrameView` each
//! frame: ball, paddle, bricks, and the score/lives/outcome panel.

use serde::Serialize;

use crate::sim::{BrickKind, GamePhase, GameState, Outcome, Rect};

/// A brick as the renderer sees it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BrickView {
    pub kind: BrickKind,
    pub rect: Rect,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FrameView {
    pub tick: u64,
    pub ball: Rect,
    pub paddle: Rect,
    pub bricks: Vec<BrickView>,
    pub score: u32,
    pub lives: u8,
    pub high_score: u32,
    pub outcome: Outcome,
    pub paused: bool,
}

impl FrameView {
    pub fn capture(state: &GameState, high_score: u32) -> Self {
        Self {
            tick: state.time_ticks,
            ball: state.ball.rect(),
            paddle: state.paddle.rect(),
            bricks: state
                .bricks
                .iter()
                .map(|b| BrickView {
                    kind: b.kind,
                    rect: b.rect,
                })
                .collect(),
            score: state.score,
            lives: state.lives,
            high_score,
            outcome: state.outcome,
            paused: state.phase == GamePhase::Paused,
        }
    }

    /// Single-line status text, e.g. for a HUD or a log line
    pub fn status_line(&self) -> String {
        let banner = match self.outcome {
            Outcome::InProgress if self.paused => " | PAUSED",
            Outcome::InProgress => "",
            Outcome::Won => " | Congratulations! You won",
            Outcome::Lost => " | You lost!",
        };
        format!(
            "SCORE: {} | HighScore: {} | Lives: {} | Bricks: {}{}",
            self.score,
            self.high_score,
            self.lives,
            self.bricks.len(),
            banner
        )
    }
}
