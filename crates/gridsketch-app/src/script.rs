//! Gesture scripts: a canvas seed plus a list of tool changes and pointer
//! events, replayed through the controller.

use gridsketch_core::{
    CharGrid, Controller, Grid, GridError, PointerEvent, SketchConfig, ToolKind, Vector,
};
use kurbo::Point;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use thiserror::Error;

/// Application errors.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Usage: gridsketch <script.json>")]
    Usage,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid script: {0}")]
    Script(#[from] serde_json::Error),
    #[error("Invalid canvas: {0}")]
    Grid(#[from] GridError),
}

/// One scripted action.
///
/// `down`/`move`/`up` take screen coordinates and go through gesture
/// tracking; `press`/`drag`/`release` address cells directly.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    Tool(ToolKind),
    Down([f64; 2]),
    Move([f64; 2]),
    Up([f64; 2]),
    Press([i32; 2]),
    Drag([i32; 2]),
    Release([i32; 2]),
    Cancel,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Script {
    #[serde(default)]
    pub config: SketchConfig,
    /// Initial canvas rows.
    #[serde(default)]
    pub canvas: Vec<String>,
    #[serde(default)]
    pub steps: Vec<Step>,
}

impl Script {
    pub fn from_json(json: &str) -> Result<Self, AppError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, AppError> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// The starting grid: configured size, grown to fit the canvas seed.
    pub fn build_grid(&self) -> Result<CharGrid, AppError> {
        if self.canvas.is_empty() {
            return Ok(self.config.build_grid()?);
        }

        let seed = CharGrid::from_text(&self.canvas.join("\n"))?;
        let mut grid = CharGrid::new(
            self.config.width.max(seed.width()),
            self.config.height.max(seed.height()),
        )?;
        for y in 0..seed.height() as i32 {
            for x in 0..seed.width() as i32 {
                let cell = Vector::new(x, y);
                if let Some(value) = seed.value_at(cell) {
                    grid.set_value(cell, Some(value));
                }
            }
        }
        Ok(grid)
    }
}

/// Replay a script and return the rendered canvas.
pub fn replay(script: &Script) -> Result<String, AppError> {
    let grid = script.build_grid()?;
    let mut controller = Controller::new(grid, script.config.cell_size);

    for step in &script.steps {
        log::trace!("Step {:?}", step);
        match *step {
            Step::Tool(kind) => controller.set_tool(kind),
            Step::Down([x, y]) => controller.handle_pointer_event(PointerEvent::Down {
                position: Point::new(x, y),
            }),
            Step::Move([x, y]) => controller.handle_pointer_event(PointerEvent::Move {
                position: Point::new(x, y),
            }),
            Step::Up([x, y]) => controller.handle_pointer_event(PointerEvent::Up {
                position: Point::new(x, y),
            }),
            Step::Press([x, y]) => controller.handle_drawing_press(Vector::new(x, y)),
            Step::Drag([x, y]) => controller.handle_drawing_move(Vector::new(x, y)),
            Step::Release([x, y]) => controller.handle_drawing_release(Vector::new(x, y)),
            Step::Cancel => controller.cancel(),
        }
    }

    Ok(controller.grid().render())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_parse_steps() {
        let script = Script::from_json(
            r#"{
                "steps": [
                    { "tool": { "kind": "Freeform", "value": "o" } },
                    { "down": [1.5, 2.5] },
                    { "press": [3, 4] },
                    "cancel"
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(
            script.steps,
            vec![
                Step::Tool(ToolKind::Freeform { value: 'o' }),
                Step::Down([1.5, 2.5]),
                Step::Press([3, 4]),
                Step::Cancel,
            ]
        );
        assert_eq!(script.config, SketchConfig::default());
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let err = Script::from_json(r#"{ "stepz": [] }"#).unwrap_err();
        assert!(matches!(err, AppError::Script(_)));
    }

    #[test]
    fn test_canvas_seed_grows_grid() {
        let script = Script::from_json(
            r#"{ "config": { "width": 2, "height": 1 }, "canvas": ["+--+", "|hi|"] }"#,
        )
        .unwrap();
        let grid = script.build_grid().unwrap();

        assert_eq!((grid.width(), grid.height()), (4, 2));
        assert_eq!(grid.render(), "+--+\n|hi|\n");
    }

    #[test]
    fn test_replay_box_with_pointer_events() {
        let script = Script::from_json(
            r#"{
                "config": { "width": 5, "height": 3, "cell_size": { "width": 10.0, "height": 10.0 } },
                "steps": [
                    { "down": [0.0, 0.0] },
                    { "move": [45.0, 5.0] },
                    { "move": [35.0, 25.0] },
                    { "up": [35.0, 25.0] }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(replay(&script).unwrap(), "+--+\n|  |\n+--+\n");
    }

    #[test]
    fn test_replay_move_on_seeded_canvas() {
        let script = Script::from_json(
            r#"{
                "config": { "width": 6, "height": 4 },
                "canvas": ["+--+"],
                "steps": [
                    { "tool": { "kind": "Move" } },
                    { "press": [0, 0] },
                    { "drag": [0, 3] },
                    { "release": [0, 3] }
                ]
            }"#,
        )
        .unwrap();

        let out = replay(&script).unwrap();
        let rows: Vec<&str> = out.lines().collect();
        assert_eq!(rows.len(), 4);
        assert!(rows[3].starts_with('+'));
        assert_eq!(rows[3].trim_end().len(), 4);
    }

    #[test]
    fn test_replay_with_extreme_pointer_positions() {
        let script = Script::from_json(
            r#"{
                "config": { "width": 3, "height": 2 },
                "steps": [
                    { "tool": { "kind": "Move" } },
                    { "down": [1e300, 0.0] },
                    { "move": [0.0, 1e300] },
                    { "up": [0.0, 1e300] }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(replay(&script).unwrap(), "\n\n");
    }

    #[test]
    fn test_load_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r##"{{ "config": {{ "width": 3, "height": 1 }}, "steps": [ {{ "tool": {{ "kind": "Freeform", "value": "#" }} }}, {{ "press": [1, 0] }} ] }}"##
        )
        .unwrap();

        let script = Script::load(file.path()).unwrap();
        assert_eq!(replay(&script).unwrap(), " #\n");
    }

    #[test]
    fn test_load_missing_file() {
        let err = Script::load(Path::new("/nonexistent/gridsketch.json")).unwrap_err();
        assert!(matches!(err, AppError::Io(_)));
    }
}
