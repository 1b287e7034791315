//! Character grid with a draft layer for live previews.

use crate::vector::Vector;
use thiserror::Error;

/// Raw value stored for line and border cells. Rendering picks the
/// displayed glyph from the cell's context.
pub const SPECIAL_VALUE: char = '+';

/// Largest width or height a [`CharGrid`] accepts.
pub const MAX_DIMENSION: usize = 4096;

/// Grid construction errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("Grid must have at least one row and one column")]
    EmptyGrid,
    #[error("Grid of {width}x{height} exceeds the {max} cell limit per side", max = MAX_DIMENSION)]
    TooLarge { width: usize, height: usize },
}

/// Which neighbours of a cell are special.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Context {
    pub left: bool,
    pub right: bool,
    pub up: bool,
    pub down: bool,
}

impl Context {
    /// Number of special neighbours.
    pub fn count(&self) -> usize {
        [self.left, self.right, self.up, self.down]
            .into_iter()
            .filter(|&set| set)
            .count()
    }

    /// Exactly one special neighbour: the line stops here.
    pub fn is_dead_end(&self) -> bool {
        self.count() == 1
    }

    pub fn is_horizontal(&self) -> bool {
        self.left && self.right && !self.up && !self.down
    }

    pub fn is_vertical(&self) -> bool {
        !self.left && !self.right && self.up && self.down
    }

    /// Part of a straight run with no corner or branch.
    pub fn is_straight(&self) -> bool {
        self.is_horizontal() || self.is_vertical()
    }
}

/// The surface the drawing tools read from and write to.
///
/// Writes through [`Grid::draw_special`] land in a draft layer that is
/// either thrown away by [`Grid::clear_draw`] or made permanent by
/// [`Grid::commit_draw`]. [`Grid::set_value`] bypasses the draft.
pub trait Grid {
    /// Whether the cell's effective value (draft first) is a line cell.
    fn is_special(&self, position: Vector) -> bool;

    /// Write a committed value immediately. `None` erases the cell.
    fn set_value(&mut self, position: Vector, value: Option<char>);

    /// Mark a cell as a line cell in the draft layer.
    fn draw_special(&mut self, position: Vector);

    /// Discard the draft layer.
    fn clear_draw(&mut self);

    /// Promote the draft layer to committed values.
    fn commit_draw(&mut self);

    /// Neighbour snapshot, recomputed on every call.
    fn context(&self, position: Vector) -> Context {
        Context {
            left: self.is_special(position + Vector::LEFT),
            right: self.is_special(position + Vector::RIGHT),
            up: self.is_special(position + Vector::UP),
            down: self.is_special(position + Vector::DOWN),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Cell {
    value: Option<char>,
    /// Set while a preview marks this cell special.
    draft: bool,
}

impl Cell {
    fn raw(&self) -> Option<char> {
        if self.draft {
            Some(SPECIAL_VALUE)
        } else {
            self.value
        }
    }
}

/// In-memory fixed-size [`Grid`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharGrid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    /// Cells currently carrying a draft mark.
    scratch: Vec<Vector>,
}

impl CharGrid {
    /// Create an empty grid.
    pub fn new(width: usize, height: usize) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyGrid);
        }
        if width > MAX_DIMENSION || height > MAX_DIMENSION {
            return Err(GridError::TooLarge { width, height });
        }
        Ok(Self {
            width,
            height,
            cells: vec![Cell::default(); width * height],
            scratch: Vec::new(),
        })
    }

    /// Build a grid from a text sketch.
    ///
    /// `+`, `-` and `|` become line cells, spaces stay empty and every other
    /// character is kept as a plain glyph.
    pub fn from_text(text: &str) -> Result<Self, GridError> {
        let lines: Vec<&str> = text.lines().collect();
        let width = lines.iter().map(|l| l.chars().count()).max().unwrap_or(0);
        let mut grid = Self::new(width, lines.len())?;

        for (y, line) in lines.iter().enumerate() {
            for (x, c) in line.chars().enumerate() {
                let value = match c {
                    '+' | '-' | '|' => Some(SPECIAL_VALUE),
                    ' ' => None,
                    other => Some(other),
                };
                grid.cells[y * width + x].value = value;
            }
        }
        Ok(grid)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells in the draft layer.
    pub fn draft_len(&self) -> usize {
        self.scratch.len()
    }

    pub fn contains(&self, position: Vector) -> bool {
        self.index(position).is_some()
    }

    /// Effective raw value of a cell, draft first.
    pub fn value_at(&self, position: Vector) -> Option<char> {
        self.index(position).and_then(|i| self.cells[i].raw())
    }

    /// Glyph shown for a cell, resolving line cells from their context.
    pub fn display_char(&self, position: Vector) -> char {
        if !self.is_special(position) {
            return self.value_at(position).unwrap_or(' ');
        }
        let context = self.context(position);
        if context.is_horizontal() {
            '-'
        } else if context.is_vertical() {
            '|'
        } else {
            '+'
        }
    }

    /// Render the grid as text, one line per row, trailing spaces trimmed.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for y in 0..self.height as i32 {
            let row: String = (0..self.width as i32)
                .map(|x| self.display_char(Vector::new(x, y)))
                .collect();
            out.push_str(row.trim_end());
            out.push('\n');
        }
        out
    }

    fn index(&self, position: Vector) -> Option<usize> {
        let x = usize::try_from(position.x).ok()?;
        let y = usize::try_from(position.y).ok()?;
        (x < self.width && y < self.height).then_some(y * self.width + x)
    }
}

impl Grid for CharGrid {
    fn is_special(&self, position: Vector) -> bool {
        self.value_at(position) == Some(SPECIAL_VALUE)
    }

    fn set_value(&mut self, position: Vector, value: Option<char>) {
        match self.index(position) {
            Some(i) => self.cells[i].value = value,
            None => log::trace!("Ignoring write outside grid at {:?}", position),
        }
    }

    fn draw_special(&mut self, position: Vector) {
        let Some(i) = self.index(position) else {
            log::trace!("Ignoring draft mark outside grid at {:?}", position);
            return;
        };
        let cell = &mut self.cells[i];
        if !cell.draft {
            cell.draft = true;
            self.scratch.push(position);
        }
    }

    fn clear_draw(&mut self) {
        for position in std::mem::take(&mut self.scratch) {
            if let Some(i) = self.index(position) {
                self.cells[i].draft = false;
            }
        }
    }

    fn commit_draw(&mut self) {
        let scratch = std::mem::take(&mut self.scratch);
        log::debug!("Committing {} draft cells", scratch.len());
        for position in scratch {
            if let Some(i) = self.index(position) {
                let cell = &mut self.cells[i];
                cell.value = Some(SPECIAL_VALUE);
                cell.draft = false;
            }
        }
    }
}
