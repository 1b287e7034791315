//! Routes gestures to the active drawing tool.

use crate::grid::Grid;
use crate::input::{CellSize, Gesture, GestureTracker, PointerEvent};
use crate::tools::{ActiveTool, Tool, ToolKind};
use crate::vector::Vector;

/// Owns the grid and the active tool, and forwards gestures between them.
#[derive(Debug, Clone)]
pub struct Controller<G: Grid> {
    grid: G,
    kind: ToolKind,
    tool: ActiveTool,
    input: GestureTracker,
}

impl<G: Grid> Controller<G> {
    /// Create a controller with the default tool.
    pub fn new(grid: G, cell_size: CellSize) -> Self {
        let kind = ToolKind::default();
        Self {
            grid,
            kind,
            tool: ActiveTool::new(kind),
            input: GestureTracker::new(cell_size),
        }
    }

    pub fn grid(&self) -> &G {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut G {
        &mut self.grid
    }

    pub fn into_grid(self) -> G {
        self.grid
    }

    pub fn current_tool(&self) -> ToolKind {
        self.kind
    }

    /// Switch tools. Any gesture in progress is dropped; its preview stays
    /// in the draft layer until the new tool redraws.
    pub fn set_tool(&mut self, kind: ToolKind) {
        log::debug!("Switching tool {:?} -> {:?}", self.kind, kind);
        self.kind = kind;
        self.tool = ActiveTool::new(kind);
        self.input.reset();
    }

    /// Abandon the current gesture and its preview.
    pub fn cancel(&mut self) {
        self.grid.clear_draw();
        self.tool = ActiveTool::new(self.kind);
        self.input.reset();
    }

    pub fn handle_drawing_press(&mut self, position: Vector) {
        self.tool.start(&mut self.grid, position);
    }

    pub fn handle_drawing_move(&mut self, position: Vector) {
        log::trace!("Drag to {:?}", position);
        self.tool.update(&mut self.grid, position);
    }

    pub fn handle_drawing_release(&mut self, position: Vector) {
        self.tool.end(&mut self.grid, position);
    }

    /// Feed a screen-space pointer event through gesture tracking.
    pub fn handle_pointer_event(&mut self, event: PointerEvent) {
        match self.input.handle_pointer_event(event) {
            Some(Gesture::Press(cell)) => self.handle_drawing_press(cell),
            Some(Gesture::Move(cell)) => self.handle_drawing_move(cell),
            Some(Gesture::Release(cell)) => self.handle_drawing_release(cell),
            None => {}
        }
    }
}
