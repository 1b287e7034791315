//! Orthogonal line rendering shared by the drawing tools.

use crate::grid::Grid;
use crate::vector::Vector;

/// Cells of the "L" path between `start` and `end`, in draw order.
///
/// With `clockwise` the horizontal run sits on the start's row and the
/// vertical run on the end's column; otherwise the horizontal run sits on
/// the end's row and the vertical run on the start's column. Both endpoints
/// and the corner are always included, so a cell may appear twice.
///
/// The path is produced lazily; nothing is allocated however long it is.
pub fn line_cells(start: Vector, end: Vector, clockwise: bool) -> impl Iterator<Item = Vector> {
    let (hx1, hx2) = (start.x.min(end.x), start.x.max(end.x));
    let (vy1, vy2) = (start.y.min(end.y), start.y.max(end.y));
    let (hy, vx) = if clockwise {
        (start.y, end.x)
    } else {
        (end.y, start.x)
    };

    let horizontal = (hx1.saturating_add(1)..hx2).map(move |x| Vector::new(x, hy));
    let vertical = (vy1.saturating_add(1)..vy2).map(move |y| Vector::new(vx, y));

    horizontal
        .chain(vertical)
        .chain([start, end, Vector::new(vx, hy)])
}

/// Draw the "L" path between `start` and `end` into the grid's draft layer.
pub fn draw_line<G: Grid + ?Sized>(grid: &mut G, start: Vector, end: Vector, clockwise: bool) {
    for cell in line_cells(start, end, clockwise) {
        grid.draw_special(cell);
    }
}
