//! Collision detection and response
//!
//! Detection is reactive: every test runs against the ball's position after
//! it has moved, with no sweep. A fast ball can pass through a thin obstacle
//! in one tick and that is accepted behavior.

use rand::Rng;

use super::rect::Rect;
use super::state::{Ball, BrickKind, Paddle, Wall};
use crate::consts::*;

/// Which edges of a brick the ball is straddling
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BrickHit {
    pub left: bool,
    pub right: bool,
    pub top: bool,
    pub bottom: bool,
}

impl BrickHit {
    /// Ball crossed a vertical edge
    pub fn side(&self) -> bool {
        self.left || self.right
    }

    /// Ball crossed a horizontal edge
    pub fn cap(&self) -> bool {
        self.top || self.bottom
    }
}

/// Bounce the ball off every wall tile it overlaps, in layout order.
///
/// Which component reflects depends on where the ball is, not which tile was
/// hit. The nudge after each reflection usually carries the ball clear of
/// neighbouring tiles. Returns the number of reflections applied.
pub fn resolve_walls(ball: &mut Ball, walls: &[Wall]) -> u32 {
    let mut bounces = 0;
    for wall in walls {
        if !ball.rect().overlaps(&wall.rect) {
            continue;
        }
        if ball.pos.y <= TOP_BOUNCE_Y {
            ball.bounce_y();
            bounces += 1;
        }
        // Normally unreachable: the miss line sits above this threshold
        if ball.pos.y >= BOTTOM_BOUNCE_Y {
            ball.bounce_y();
            bounces += 1;
        }
        if ball.pos.x <= LEFT_BOUNCE_X {
            ball.bounce_x();
            bounces += 1;
        }
        if ball.pos.x >= RIGHT_BOUNCE_X {
            ball.bounce_x();
            bounces += 1;
        }
    }
    bounces
}

/// True once the ball has dropped past the paddle row
pub fn ball_missed(ball: &Ball, paddle: &Paddle) -> bool {
    ball.pos.y >= paddle.miss_line()
}

/// Whether the ball is in contact with the paddle's catch zone
pub fn ball_paddle_contact(ball: &Ball, paddle: &Paddle) -> bool {
    ball.rect().touches(&paddle.catch_zone())
}

/// Edge-zone kick magnitude: 3, 4 or 5 with weights 1:2:1
pub fn roll_kick<R: Rng + ?Sized>(rng: &mut R) -> i32 {
    match rng.random_range(0..4) {
        0 => 3,
        3 => 5,
        _ => 4,
    }
}

/// Reflect the ball off the paddle and steer it by where it struck.
///
/// Left zone sends it left, right zone sends it right, and the centre sends
/// it straight back up. Returns the new horizontal velocity.
pub fn bounce_off_paddle<R: Rng + ?Sized>(ball: &mut Ball, paddle: &Paddle, rng: &mut R) -> i32 {
    ball.bounce_y();

    let ball_left = ball.pos.x;
    let ball_right = ball.pos.x + ball.size.x;
    let left_zone = ball_right >= paddle.x && ball_right <= paddle.x + PADDLE_LEFT_ZONE;
    let right_zone = ball_left - ball.size.x <= paddle.x + paddle.width
        && ball_right >= paddle.x + PADDLE_RIGHT_ZONE;

    ball.vel.x = if left_zone {
        -roll_kick(rng)
    } else if right_zone {
        roll_kick(rng)
    } else {
        0
    };
    ball.pos.x += ball.vel.x;
    ball.vel.x
}

/// Classify which brick edges the ball straddles
pub fn classify_brick_hit(ball: &Rect, brick: &Rect) -> BrickHit {
    BrickHit {
        left: ball.left() < brick.left() && ball.right() > brick.left(),
        right: ball.left() < brick.right() && ball.right() > brick.right(),
        top: ball.top() < brick.top() && ball.bottom() > brick.top(),
        bottom: ball.top() < brick.bottom() && ball.bottom() > brick.bottom(),
    }
}

/// Reflect the ball off a struck brick.
///
/// Side hits reflect horizontally, cap hits vertically, corner hits both. A
/// ball fully inside the brick on both axes passes through unreflected.
pub fn bounce_off_brick(ball: &mut Ball, kind: BrickKind, hit: BrickHit) {
    if hit.side() {
        restart_stalled(ball, kind);
        ball.bounce_x();
    }
    if hit.cap() {
        restart_stalled(ball, kind);
        ball.bounce_y();
    }
}

fn restart_stalled(ball: &mut Ball, kind: BrickKind) {
    if kind == BrickKind::Silver && ball.vel.x == 0 {
        ball.vel.x = SILVER_RESTART_DX;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::level::build_walls;
    use glam::IVec2;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn ball_at(x: i32, y: i32, dx: i32, dy: i32) -> Ball {
        Ball {
            pos: IVec2::new(x, y),
            vel: IVec2::new(dx, dy),
            size: IVec2::splat(BALL_SIZE),
        }
    }

    #[test]
    fn test_top_wall_reflects_vertical_only() {
        let walls = build_walls();
        let mut ball = ball_at(250, 8, 2, -2);
        let bounces = resolve_walls(&mut ball, &walls);
        assert_eq!(bounces, 1);
        assert_eq!(ball.vel, IVec2::new(2, 2));
        assert_eq!(ball.pos, IVec2::new(250, 10));
    }

    #[test]
    fn test_left_wall_reflects_horizontal_only() {
        let walls = build_walls();
        let mut ball = ball_at(9, 300, -2, 2);
        let bounces = resolve_walls(&mut ball, &walls);
        assert_eq!(bounces, 1);
        assert_eq!(ball.vel, IVec2::new(2, 2));
        assert_eq!(ball.pos, IVec2::new(11, 300));
    }

    #[test]
    fn test_right_wall_reflects_horizontal_only() {
        let walls = build_walls();
        let mut ball = ball_at(487, 300, 2, -2);
        resolve_walls(&mut ball, &walls);
        assert_eq!(ball.vel, IVec2::new(-2, -2));
        assert_eq!(ball.pos, IVec2::new(485, 300));
    }

    #[test]
    fn test_bottom_threshold_reflects_vertical() {
        // A lone right-column tile below the miss line
        let walls = [Wall::tile(RIGHT_WALL_X, 640)];
        let mut ball = ball_at(495, 640, 2, 2);
        let bounces = resolve_walls(&mut ball, &walls);
        assert_eq!(bounces, 2);
        assert_eq!(ball.vel, IVec2::new(-2, -2));
        assert_eq!(ball.pos, IVec2::new(493, 638));
    }

    #[test]
    fn test_bottom_corner_of_full_border() {
        // Two stacked column tiles each flip both components
        let walls = build_walls();
        let mut ball = ball_at(495, 640, 2, 2);
        assert_eq!(resolve_walls(&mut ball, &walls), 4);
        assert_eq!(ball, ball_at(495, 640, 2, 2));
    }

    #[test]
    fn test_open_field_no_bounce() {
        let walls = build_walls();
        let mut ball = ball_at(250, 300, 2, -2);
        assert_eq!(resolve_walls(&mut ball, &walls), 0);
        assert_eq!(ball, ball_at(250, 300, 2, -2));
    }

    #[test]
    fn test_miss_line() {
        let paddle = Paddle::default();
        assert!(!ball_missed(&ball_at(250, 559, 0, 2), &paddle));
        assert!(ball_missed(&ball_at(250, 560, 0, 2), &paddle));
    }

    #[test]
    fn test_paddle_contact() {
        let paddle = Paddle::default();
        // Bottom edge exactly on the paddle face counts
        assert!(ball_paddle_contact(&ball_at(250, 535, 0, 2), &paddle));
        assert!(!ball_paddle_contact(&ball_at(250, 534, 0, 2), &paddle));
        // Off to the side
        assert!(!ball_paddle_contact(&ball_at(100, 540, 0, 2), &paddle));
    }

    #[test]
    fn test_paddle_center_goes_straight_up() {
        let paddle = Paddle::default();
        let mut rng = Pcg32::seed_from_u64(1);
        // Right edge at 212 + 65: past the left zone, short of the right zone
        let mut ball = ball_at(262, 540, 2, 2);
        let dx = bounce_off_paddle(&mut ball, &paddle, &mut rng);
        assert_eq!(dx, 0);
        assert_eq!(ball.vel, IVec2::new(0, -2));
        assert_eq!(ball.pos, IVec2::new(262, 538));
    }

    #[test]
    fn test_paddle_edges_kick_outward() {
        let paddle = Paddle::default();
        let mut rng = Pcg32::seed_from_u64(2);
        for _ in 0..50 {
            let mut left = ball_at(210, 540, 2, 2);
            let dx = bounce_off_paddle(&mut left, &paddle, &mut rng);
            assert!((-5..=-3).contains(&dx), "left kick was {dx}");
            assert_eq!(left.vel.y, -2);

            let mut right = ball_at(290, 540, -2, 2);
            let dx = bounce_off_paddle(&mut right, &paddle, &mut rng);
            assert!((3..=5).contains(&dx), "right kick was {dx}");
        }
    }

    #[test]
    fn test_kick_distribution() {
        let mut rng = Pcg32::seed_from_u64(42);
        let mut counts = [0u32; 3];
        for _ in 0..4000 {
            counts[(roll_kick(&mut rng) - 3) as usize] += 1;
        }
        // Expect roughly 1000 / 2000 / 1000
        assert!((800..1200).contains(&counts[0]), "{counts:?}");
        assert!((1800..2200).contains(&counts[1]), "{counts:?}");
        assert!((800..1200).contains(&counts[2]), "{counts:?}");
    }

    #[test]
    fn test_classify_bottom_hit() {
        let brick = Rect::new(35, 70, 35, 20);
        // Ball coming up into the underside
        let ball = Rect::new(45, 85, 15, 15);
        let hit = classify_brick_hit(&ball, &brick);
        assert!(hit.bottom);
        assert!(!hit.side());
    }

    #[test]
    fn test_classify_side_hit() {
        let brick = Rect::new(35, 70, 35, 20);
        let ball = Rect::new(25, 72, 15, 15);
        let hit = classify_brick_hit(&ball, &brick);
        assert!(hit.left);
        assert!(!hit.cap());
    }

    #[test]
    fn test_gold_brick_keeps_stalled_ball_vertical() {
        let mut ball = ball_at(45, 85, 0, -2);
        let hit = BrickHit {
            bottom: true,
            ..Default::default()
        };
        bounce_off_brick(&mut ball, BrickKind::Gold, hit);
        assert_eq!(ball.vel, IVec2::new(0, 2));
    }

    #[test]
    fn test_silver_brick_restarts_stalled_ball() {
        let mut ball = ball_at(45, 85, 0, -2);
        let hit = BrickHit {
            bottom: true,
            ..Default::default()
        };
        bounce_off_brick(&mut ball, BrickKind::Silver, hit);
        assert_eq!(ball.vel, IVec2::new(2, 2));
    }

    #[test]
    fn test_embedded_ball_passes_through() {
        let mut ball = ball_at(40, 72, 2, -2);
        bounce_off_brick(&mut ball, BrickKind::Gold, BrickHit::default());
        assert_eq!(ball, ball_at(40, 72, 2, -2));
    }
}
