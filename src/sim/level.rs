//! Playfield layouts: the border walls and the brick arrangements

use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::state::{Brick, BrickKind, GameState, Wall};
use crate::consts::*;

/// Brick arrangement used to fill the field at session start
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    /// Three stepped rows of gold bricks
    #[default]
    Pyramid,
    /// Five double columns of silver bricks
    Columns,
    /// Columns and pyramid together
    Full,
}

impl Layout {
    pub fn as_str(&self) -> &'static str {
        match self {
            Layout::Pyramid => "pyramid",
            Layout::Columns => "columns",
            Layout::Full => "full",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "pyramid" | "gold" => Some(Layout::Pyramid),
            "columns" | "silver" => Some(Layout::Columns),
            "full" | "both" => Some(Layout::Full),
            _ => None,
        }
    }
}

/// Build the border: four rows of tiles, each spanning 0..=WALL_SPAN.
///
/// Tiles are pushed interleaved (top, bottom, left, right for each step), which
/// is the order overlapping walls are resolved in.
pub fn build_walls() -> Vec<Wall> {
    let mut walls = Vec::with_capacity(4 * (WALL_SPAN / WALL_TILE + 1) as usize);
    for k in (0..=WALL_SPAN).step_by(WALL_TILE as usize) {
        walls.push(Wall::tile(k, TOP_WALL_Y));
        walls.push(Wall::tile(k, BOTTOM_WALL_Y));
        walls.push(Wall::tile(LEFT_WALL_X, k));
        walls.push(Wall::tile(RIGHT_WALL_X, k));
    }
    walls
}

/// Gold pyramid: rows at y=70, 90, 110, each narrower by one brick per side
fn pyramid_positions() -> Vec<(i32, i32)> {
    let rows = [(35, 455, 70), (70, 420, 90), (105, 385, 110)];
    rows.iter()
        .flat_map(|&(start, end, y)| {
            (start..end)
                .step_by(BRICK_WIDTH as usize)
                .map(move |x| (x, y))
        })
        .collect()
}

/// Silver columns: pairs of columns 30 px apart, six bricks tall
fn column_positions() -> Vec<(i32, i32)> {
    let pairs = [(20, 50), (120, 150), (220, 250), (320, 350), (420, 450)];
    let mut out = Vec::new();
    for (left, right) in pairs {
        for y in (20..200).step_by(35) {
            out.push((right, y + 30));
            out.push((left, y + 30));
        }
    }
    out
}

/// Replace the state's walls and bricks with a fresh playfield
pub fn generate_level(state: &mut GameState, layout: Layout) {
    state.walls = build_walls();
    state.bricks.clear();

    let mut placements: Vec<(BrickKind, i32, i32)> = Vec::new();
    if matches!(layout, Layout::Columns | Layout::Full) {
        placements.extend(column_positions().into_iter().map(|(x, y)| (BrickKind::Silver, x, y)));
    }
    if matches!(layout, Layout::Pyramid | Layout::Full) {
        placements.extend(pyramid_positions().into_iter().map(|(x, y)| (BrickKind::Gold, x, y)));
    }

    for (kind, x, y) in placements {
        let id = state.next_entity_id();
        state.bricks.push(Brick {
            id,
            kind,
            rect: Rect::new(x, y, BRICK_WIDTH, BRICK_HEIGHT),
        });
    }

    log::info!(
        "Level '{}': {} walls, {} bricks",
        layout.as_str(),
        state.walls.len(),
        state.bricks.len()
    );
}
