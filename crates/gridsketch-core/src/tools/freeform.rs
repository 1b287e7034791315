//! Freeform glyph stamping and erasing.

use super::Tool;
use crate::grid::Grid;
use crate::vector::Vector;

/// Writes a fixed value into every cell the pointer touches.
///
/// Writes go straight to the committed layer, so there is no preview and
/// nothing to commit on release. A `None` value erases.
#[derive(Debug, Clone, Default)]
pub struct FreeformTool {
    value: Option<char>,
}

impl FreeformTool {
    pub fn new(value: Option<char>) -> Self {
        Self { value }
    }

    pub fn value(&self) -> Option<char> {
        self.value
    }
}

impl Tool for FreeformTool {
    fn start(&mut self, grid: &mut dyn Grid, position: Vector) {
        grid.set_value(position, self.value);
    }

    fn update(&mut self, grid: &mut dyn Grid, position: Vector) {
        grid.set_value(position, self.value);
    }

    fn end(&mut self, _grid: &mut dyn Grid, _position: Vector) {}
}
