//! Single orthogonal line tool.

use super::Tool;
use crate::draw::draw_line;
use crate::grid::Grid;
use crate::vector::Vector;

/// Draws one bent line from the press point to the pointer.
#[derive(Debug, Clone, Default)]
pub struct LineTool {
    anchor: Option<Vector>,
}

impl LineTool {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Bend away from a perpendicular line already crossing either end, so the
/// new segment meets it head-on.
fn bend_clockwise(grid: &dyn Grid, anchor: Vector, position: Vector) -> bool {
    let start = grid.context(anchor);
    let end = grid.context(position);
    (start.up && start.down) || (end.left && end.right)
}

impl Tool for LineTool {
    fn start(&mut self, _grid: &mut dyn Grid, position: Vector) {
        self.anchor = Some(position);
    }

    fn update(&mut self, grid: &mut dyn Grid, position: Vector) {
        let Some(anchor) = self.anchor else { return };
        grid.clear_draw();
        let clockwise = bend_clockwise(grid, anchor, position);
        log::trace!("Line preview {:?} -> {:?} (clockwise: {})", anchor, position, clockwise);
        draw_line(grid, anchor, position, clockwise);
    }

    fn end(&mut self, grid: &mut dyn Grid, _position: Vector) {
        if self.anchor.take().is_some() {
            grid.commit_draw();
        }
    }
}
