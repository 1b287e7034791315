//! Rectangle outline tool.

use super::Tool;
use crate::draw::draw_line;
use crate::grid::Grid;
use crate::vector::Vector;

/// Draws a rectangle outline between the press point and the pointer.
#[derive(Debug, Clone, Default)]
pub struct BoxTool {
    anchor: Option<Vector>,
}

impl BoxTool {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Tool for BoxTool {
    fn start(&mut self, _grid: &mut dyn Grid, position: Vector) {
        self.anchor = Some(position);
    }

    fn update(&mut self, grid: &mut dyn Grid, position: Vector) {
        let Some(anchor) = self.anchor else { return };
        grid.clear_draw();
        // Both bends together give all four sides.
        draw_line(grid, anchor, position, true);
        draw_line(grid, anchor, position, false);
    }

    fn end(&mut self, grid: &mut dyn Grid, _position: Vector) {
        if self.anchor.take().is_some() {
            grid.commit_draw();
        }
    }
}
