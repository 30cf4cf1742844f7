//! Axis-aligned rectangles in integer pixel space
//!
//! Every collidable thing in the playfield (ball, paddle, bricks, wall tiles)
//! is a `Rect`. Coordinates grow right (+x) and down (+y), origin at the top
//! left of the playfield.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned box: top-left corner plus size
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: IVec2,
    pub size: IVec2,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self {
            pos: IVec2::new(x, y),
            size: IVec2::new(w, h),
        }
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.pos.y + self.size.y
    }

    /// Strict AABB intersection: boxes that only share an edge do not overlap
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.bottom() > other.top()
            && self.top() < other.bottom()
    }

    /// Inclusive AABB intersection: shared edges count as contact
    pub fn touches(&self, other: &Rect) -> bool {
        self.left() <= other.right()
            && self.right() >= other.left()
            && self.bottom() >= other.top()
            && self.top() <= other.bottom()
    }
}
