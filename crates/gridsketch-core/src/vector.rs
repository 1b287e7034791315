//! Integer cell coordinates.

use crate::input::CellSize;
use kurbo::Point;
use serde::{Deserialize, Serialize};
use std::ops::{Add, Neg, Sub};

/// A cell position or a step between cells on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Vector {
    pub x: i32,
    pub y: i32,
}

impl Vector {
    pub const ZERO: Vector = Vector::new(0, 0);
    pub const RIGHT: Vector = Vector::new(1, 0);
    pub const LEFT: Vector = Vector::new(-1, 0);
    pub const DOWN: Vector = Vector::new(0, 1);
    pub const UP: Vector = Vector::new(0, -1);

    /// The four axis directions, in the order line tracing explores them.
    pub const DIRECTIONS: [Vector; 4] = [Vector::RIGHT, Vector::LEFT, Vector::DOWN, Vector::UP];

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Euclidean magnitude.
    pub fn length(self) -> f64 {
        f64::from(self.x).hypot(f64::from(self.y))
    }

    pub fn is_zero(self) -> bool {
        self.length() == 0.0
    }

    /// Convert a screen-space pointer position into the cell under it.
    pub fn from_screen(point: Point, cell: CellSize) -> Self {
        Self {
            x: (point.x / cell.width).floor() as i32,
            y: (point.y / cell.height).floor() as i32,
        }
    }
}

// Arithmetic saturates: stepping past the edge of the coordinate space
// stays on the edge cell instead of wrapping or panicking.
impl Add for Vector {
    type Output = Vector;

    fn add(self, rhs: Vector) -> Vector {
        Vector::new(self.x.saturating_add(rhs.x), self.y.saturating_add(rhs.y))
    }
}

impl Sub for Vector {
    type Output = Vector;

    fn sub(self, rhs: Vector) -> Vector {
        Vector::new(self.x.saturating_sub(rhs.x), self.y.saturating_sub(rhs.y))
    }
}

impl Neg for Vector {
    type Output = Vector;

    fn neg(self) -> Vector {
        Vector::new(self.x.saturating_neg(), self.y.saturating_neg())
    }
}

impl From<(i32, i32)> for Vector {
    fn from((x, y): (i32, i32)) -> Self {
        Vector::new(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opposite_directions_cancel() {
        for d in Vector::DIRECTIONS {
            assert!((d + (-d)).is_zero());
            assert!(!d.is_zero());
        }
        assert!(!(Vector::RIGHT + Vector::DOWN).is_zero());
    }

    #[test]
    fn test_arithmetic_saturates_at_edges() {
        let edge = Vector::new(i32::MAX, i32::MIN);
        assert_eq!(edge + Vector::RIGHT, edge);
        assert_eq!(edge + Vector::UP, edge);
        assert_eq!(edge - Vector::LEFT, edge);
        assert_eq!(-Vector::new(i32::MIN, 0), Vector::new(i32::MAX, 0));
    }

    #[test]
    fn test_length() {
        assert!((Vector::new(3, 4).length() - 5.0).abs() < f64::EPSILON);
        assert!(Vector::ZERO.is_zero());
    }

    #[test]
    fn test_from_screen_floors_into_cells() {
        let cell = CellSize::new(10.0, 20.0);
        assert_eq!(Vector::from_screen(Point::new(0.0, 0.0), cell), Vector::ZERO);
        assert_eq!(Vector::from_screen(Point::new(19.9, 39.9), cell), Vector::new(1, 1));
        assert_eq!(Vector::from_screen(Point::new(20.0, 40.0), cell), Vector::new(2, 2));
        assert_eq!(Vector::from_screen(Point::new(-1.0, -1.0), cell), Vector::new(-1, -1));
    }
}
