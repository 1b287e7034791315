//! Drag an existing line end or corner to a new cell.
//!
//! On press the tool traces every line run leaving the pressed cell, hopping
//! over at most one corner or branch, and remembers where each run ends.
//! While dragging it redraws a bent line from the pointer to each of those
//! ends, so every segment that met at the old point now meets at the new one.

use super::Tool;
use crate::draw::draw_line;
use crate::grid::Grid;
use crate::vector::Vector;

/// A line end reachable from the pressed cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawEnd {
    pub position: Vector,
    /// Set when the first hop from the pressed cell was horizontal. Used as
    /// the bend orientation when redrawing towards this end.
    pub clockwise: bool,
}

/// Re-routes the lines meeting at the pressed cell.
#[derive(Debug, Clone, Default)]
pub struct MoveTool {
    ends: Option<Vec<DrawEnd>>,
}

impl MoveTool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ends found by the current gesture, empty when idle.
    pub fn ends(&self) -> &[DrawEnd] {
        self.ends.as_deref().unwrap_or_default()
    }
}

/// Walk from `start` in `direction` along a straight run of line cells.
///
/// Stops before the first non-line cell, or on the first line cell that is
/// not part of a straight run (a corner, branch or dead end). Returns
/// `start` when no step could be taken, including at the edge of the
/// coordinate space.
pub fn follow_line(grid: &dyn Grid, start: Vector, direction: Vector) -> Vector {
    let mut end = start;
    loop {
        let next = end + direction;
        if next == end || !grid.is_special(next) {
            return end;
        }
        if !grid.context(next).is_straight() {
            return next;
        }
        end = next;
    }
}

/// Every line end connected to `position`, through at most one corner.
pub fn find_ends(grid: &dyn Grid, position: Vector) -> Vec<DrawEnd> {
    let mut ends = Vec::new();

    for direction in Vector::DIRECTIONS {
        let mid = follow_line(grid, position, direction);
        if mid == position {
            continue;
        }

        let clockwise = direction.x != 0;
        if grid.context(mid).is_dead_end() {
            ends.push(DrawEnd { position: mid, clockwise });
            continue;
        }

        for turn in Vector::DIRECTIONS {
            // Never head straight back towards the pressed cell.
            if (direction + turn).is_zero() {
                continue;
            }
            let end = follow_line(grid, mid, turn);
            if end != mid {
                ends.push(DrawEnd { position: end, clockwise });
            }
        }
    }

    ends
}

impl Tool for MoveTool {
    fn start(&mut self, grid: &mut dyn Grid, position: Vector) {
        let ends = find_ends(grid, position);
        log::debug!("Move from {:?} found {} line ends", position, ends.len());
        self.ends = Some(ends);
    }

    fn update(&mut self, grid: &mut dyn Grid, position: Vector) {
        let Some(ends) = &self.ends else { return };
        grid.clear_draw();
        for end in ends {
            draw_line(grid, position, end.position, end.clockwise);
        }
    }

    fn end(&mut self, grid: &mut dyn Grid, _position: Vector) {
        if self.ends.take().is_some() {
            grid.commit_draw();
        }
    }
}
