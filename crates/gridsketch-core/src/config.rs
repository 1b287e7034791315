//! Canvas configuration.

use crate::grid::{CharGrid, GridError};
use crate::input::CellSize;
use serde::{Deserialize, Serialize};

/// Canvas dimensions and on-screen cell size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SketchConfig {
    /// Columns.
    pub width: usize,
    /// Rows.
    pub height: usize,
    pub cell_size: CellSize,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            width: 80,
            height: 24,
            cell_size: CellSize::default(),
        }
    }
}

impl SketchConfig {
    /// An empty grid of the configured size.
    pub fn build_grid(&self) -> Result<CharGrid, GridError> {
        CharGrid::new(self.width, self.height)
    }
}
