//! GridSketch Core Library
//!
//! Gesture-driven drawing on a character grid: boxes, bent lines, freeform
//! glyphs and dragging existing lines, with a live preview layer that is
//! committed on release.

pub mod config;
pub mod controller;
pub mod draw;
pub mod grid;
pub mod input;
pub mod tools;
pub mod vector;

pub use config::SketchConfig;
pub use controller::Controller;
pub use draw::{draw_line, line_cells};
pub use grid::{CharGrid, Context, Grid, GridError, SPECIAL_VALUE};
pub use input::{CellSize, Gesture, GestureTracker, PointerEvent};
pub use tools::{ActiveTool, DrawEnd, Tool, ToolKind};
pub use vector::Vector;
