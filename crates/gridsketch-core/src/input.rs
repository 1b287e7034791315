//! Pointer input: screen-space events to cell gestures.

use crate::vector::Vector;
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Size of one grid cell on screen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CellSize {
    pub width: f64,
    pub height: f64,
}

impl CellSize {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

impl Default for CellSize {
    fn default() -> Self {
        Self::new(9.0, 16.0)
    }
}

/// Pointer event in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PointerEvent {
    Down { position: Point },
    Move { position: Point },
    Up { position: Point },
}

/// A press, drag or release resolved to a grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    Press(Vector),
    Move(Vector),
    Release(Vector),
}

/// Turns raw pointer events into well-ordered gestures.
///
/// Hover moves and moves that stay in the same cell produce nothing, so
/// tools only redraw when the pointer reaches a new cell.
#[derive(Debug, Clone, Default)]
pub struct GestureTracker {
    cell_size: CellSize,
    /// Last cell reported while dragging, `None` when no drag is active.
    last_cell: Option<Vector>,
}

impl GestureTracker {
    pub fn new(cell_size: CellSize) -> Self {
        Self {
            cell_size,
            last_cell: None,
        }
    }

    pub fn cell_size(&self) -> CellSize {
        self.cell_size
    }

    /// Whether a press has been seen without its release.
    pub fn is_dragging(&self) -> bool {
        self.last_cell.is_some()
    }

    /// Forget any drag in progress.
    pub fn reset(&mut self) {
        self.last_cell = None;
    }

    /// Process a pointer event.
    pub fn handle_pointer_event(&mut self, event: PointerEvent) -> Option<Gesture> {
        match event {
            PointerEvent::Down { position } => {
                if self.is_dragging() {
                    return None;
                }
                let cell = Vector::from_screen(position, self.cell_size);
                self.last_cell = Some(cell);
                Some(Gesture::Press(cell))
            }
            PointerEvent::Move { position } => {
                let last = self.last_cell?;
                let cell = Vector::from_screen(position, self.cell_size);
                if cell == last {
                    return None;
                }
                self.last_cell = Some(cell);
                Some(Gesture::Move(cell))
            }
            PointerEvent::Up { position } => {
                self.last_cell.take()?;
                Some(Gesture::Release(Vector::from_screen(position, self.cell_size)))
            }
        }
    }
}
