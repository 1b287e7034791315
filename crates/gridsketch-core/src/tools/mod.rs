//! Drawing tools driven by press/drag/release gestures.

mod boxes;
mod freeform;
mod line;
mod move_line;

pub use boxes::BoxTool;
pub use freeform::FreeformTool;
pub use line::LineTool;
pub use move_line::{DrawEnd, MoveTool};

use crate::grid::Grid;
use crate::vector::Vector;
use serde::{Deserialize, Serialize};

/// Available tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(tag = "kind")]
pub enum ToolKind {
    /// Rectangle outline from the press point to the pointer.
    #[default]
    Box,
    /// One bent line, oriented to join existing lines cleanly.
    Line,
    /// Stamp a glyph on every cell the pointer crosses.
    Freeform { value: char },
    /// Freeform with nothing: clears cells.
    Erase,
    /// Drag an existing line end or corner, re-routing its segments.
    Move,
}

/// One drawing strategy.
///
/// A gesture is one `start`, any number of `update`s and one `end`.
/// Tools keep only gesture-scoped state; `update` or `end` without a prior
/// `start` does nothing.
pub trait Tool {
    /// Pointer pressed on `position`.
    fn start(&mut self, grid: &mut dyn Grid, position: Vector);

    /// Pointer dragged onto `position`: redraw the preview.
    fn update(&mut self, grid: &mut dyn Grid, position: Vector);

    /// Pointer released on `position`: commit.
    fn end(&mut self, grid: &mut dyn Grid, position: Vector);
}

/// The tool currently receiving gestures.
#[derive(Debug, Clone)]
pub enum ActiveTool {
    Box(BoxTool),
    Line(LineTool),
    Freeform(FreeformTool),
    Move(MoveTool),
}

impl ActiveTool {
    /// A fresh tool with no gesture state.
    pub fn new(kind: ToolKind) -> Self {
        match kind {
            ToolKind::Box => ActiveTool::Box(BoxTool::new()),
            ToolKind::Line => ActiveTool::Line(LineTool::new()),
            ToolKind::Freeform { value } => ActiveTool::Freeform(FreeformTool::new(Some(value))),
            ToolKind::Erase => ActiveTool::Freeform(FreeformTool::new(None)),
            ToolKind::Move => ActiveTool::Move(MoveTool::new()),
        }
    }

    fn as_tool_mut(&mut self) -> &mut dyn Tool {
        match self {
            ActiveTool::Box(tool) => tool,
            ActiveTool::Line(tool) => tool,
            ActiveTool::Freeform(tool) => tool,
            ActiveTool::Move(tool) => tool,
        }
    }
}

impl Default for ActiveTool {
    fn default() -> Self {
        Self::new(ToolKind::default())
    }
}

impl Tool for ActiveTool {
    fn start(&mut self, grid: &mut dyn Grid, position: Vector) {
        self.as_tool_mut().start(grid, position);
    }

    fn update(&mut self, grid: &mut dyn Grid, position: Vector) {
        self.as_tool_mut().update(grid, position);
    }

    fn end(&mut self, grid: &mut dyn Grid, position: Vector) {
        self.as_tool_mut().end(grid, position);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tool_kind_builds_matching_tool() {
        assert!(matches!(ActiveTool::new(ToolKind::Box), ActiveTool::Box(_)));
        assert!(matches!(ActiveTool::new(ToolKind::Line), ActiveTool::Line(_)));
        assert!(matches!(ActiveTool::new(ToolKind::Move), ActiveTool::Move(_)));

        match ActiveTool::new(ToolKind::Freeform { value: 'o' }) {
            ActiveTool::Freeform(tool) => assert_eq!(tool.value(), Some('o')),
            other => panic!("expected freeform, got {:?}", other),
        }
        match ActiveTool::new(ToolKind::Erase) {
            ActiveTool::Freeform(tool) => assert_eq!(tool.value(), None),
            other => panic!("expected freeform, got {:?}", other),
        }
    }

    #[test]
    fn test_tool_kind_serde() {
        let kind: ToolKind = serde_json::from_str(r##"{"kind":"Freeform","value":"#"}"##).unwrap();
        assert_eq!(kind, ToolKind::Freeform { value: '#' });

        let kind: ToolKind = serde_json::from_str(r#"{"kind":"Move"}"#).unwrap();
        assert_eq!(kind, ToolKind::Move);

        let json = serde_json::to_string(&ToolKind::Erase).unwrap();
        assert_eq!(json, r#"{"kind":"Erase"}"#);
    }
}
