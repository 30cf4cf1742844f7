//! Fixed timestep simulation tick
//!
//! Core game loop that advances the simulation deterministically. The paddle
//! controller and the ball update share one tick, so the paddle position the
//! collision checks read is always the one produced earlier in the same step.

use super::collision::{
    ball_missed, ball_paddle_contact, bounce_off_brick, bounce_off_paddle, classify_brick_hit,
    resolve_walls,
};
use super::state::{GameEvent, GamePhase, GameState, Outcome};

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Move-left key is held
    pub move_left: bool,
    /// Move-right key is held
    pub move_right: bool,
    /// Pause toggle (one-shot)
    pub pause: bool,
}

impl TickInput {
    /// Demo-mode input: chase the ball, lining up an edge-zone hit that sends
    /// it toward the next live brick
    pub fn autopilot(state: &GameState) -> Self {
        let ball_center = state.ball.pos.x + state.ball.size.x / 2;
        let aim = match state.bricks.first() {
            // Strike with the left zone to kick left, the right zone to kick right
            Some(brick) if brick.rect.left() + brick.rect.size.x / 2 < ball_center => AIM_LEFT,
            Some(_) => AIM_RIGHT,
            None => 0,
        };
        let offset = ball_center + aim - state.paddle.center_x();
        let dead_zone = state.config.paddle_speed;
        Self {
            move_left: offset < -dead_zone,
            move_right: offset > dead_zone,
            pause: false,
        }
    }
}

/// Paddle centre sits this far right of the ball for a left kick
const AIM_LEFT: i32 = 25;
/// ...and this far left of it for a right kick
const AIM_RIGHT: i32 = -30;

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput) {
    state.events.clear();

    if input.pause {
        match state.phase {
            GamePhase::Playing => {
                state.phase = GamePhase::Paused;
                return;
            }
            GamePhase::Paused => state.phase = GamePhase::Playing,
            GamePhase::GameOver => {}
        }
    }

    // Terminal and paused states stay put
    if state.phase != GamePhase::Playing {
        return;
    }

    state.time_ticks += 1;

    // Paddle controller
    state
        .paddle
        .steer(input.move_left, input.move_right, &state.config);

    state.ball.advance();

    // Walls
    for _ in 0..resolve_walls(&mut state.ball, &state.walls) {
        state.events.push(GameEvent::WallBounce);
    }

    // Missed the paddle
    if ball_missed(&state.ball, &state.paddle) {
        if state.lives == 0 {
            state.finish(Outcome::Lost);
            return;
        }
        state.lives -= 1;
        state.ball.reset();
        state.events.push(GameEvent::LifeLost {
            lives_left: state.lives,
        });
        log::debug!("Life lost, {} left", state.lives);
    } else if ball_paddle_contact(&state.ball, &state.paddle) {
        let kick = bounce_off_paddle(&mut state.ball, &state.paddle, &mut state.rng);
        state.events.push(GameEvent::PaddleHit { kick });
    }

    // Bricks: the first one struck this tick is destroyed
    let ball_rect = state.ball.rect();
    if let Some(index) = state
        .bricks
        .iter()
        .position(|brick| ball_rect.overlaps(&brick.rect))
    {
        let brick = state.bricks.remove(index);
        let hit = classify_brick_hit(&ball_rect, &brick.rect);
        bounce_off_brick(&mut state.ball, brick.kind, hit);

        state.destroyed += 1;
        state.score = state.score.saturating_add(state.config.points_per_brick);
        state.events.push(GameEvent::BrickDestroyed {
            id: brick.id,
            kind: brick.kind,
        });
        log::debug!(
            "Brick {} destroyed ({:?}), {} left",
            brick.id,
            hit,
            state.bricks.len()
        );
    }

    if state.bricks.is_empty() {
        state.finish(Outcome::Won);
    }
}
