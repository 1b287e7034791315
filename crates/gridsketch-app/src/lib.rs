//! GridSketch Application
//!
//! Command-line driver that replays gesture scripts against a canvas and
//! prints the result.

mod script;

pub use script::{AppError, Script, Step, replay};
