//! Boustrophedon board layout.
//!
//! Cell numbering is linear; only the drawing zigzags. Row 0 is the bottom
//! row and runs left to right, row 1 runs right to left, and so on.

use serde::{Deserialize, Serialize};

use super::{Cell, BOARD_SIZE, FINISH};

/// Pixel width of one cell.
pub const CELL_WIDTH: f32 = 90.0;
/// Pixel height of one cell.
pub const CELL_HEIGHT: f32 = 70.0;

/// Row (from the bottom) and column (from the left) of a cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridPosition {
    pub row: u8,
    pub col: u8,
}

/// Pixel coordinate, origin at the top-left corner of the board.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Linear interpolation towards `other`; `t` in `0.0..=1.0`.
    #[must_use]
    pub fn lerp(self, other: Point, t: f32) -> Point {
        Point {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
        }
    }
}

/// Grid position of an on-board cell. `None` for the off-board start.
#[must_use]
pub fn grid_position(cell: Cell) -> Option<GridPosition> {
    if !(1..=FINISH).contains(&cell) {
        return None;
    }
    let row = (cell - 1) / BOARD_SIZE;
    let offset = (cell - 1) % BOARD_SIZE;
    let col = if row % 2 == 0 {
        offset
    } else {
        BOARD_SIZE - 1 - offset
    };
    Some(GridPosition { row, col })
}

/// Cell drawn at `row` (from the bottom) and `col` (from the left).
#[must_use]
pub fn cell_at(row: u8, col: u8) -> Cell {
    debug_assert!(row < BOARD_SIZE && col < BOARD_SIZE);
    let offset = if row % 2 == 0 { col + 1 } else { BOARD_SIZE - col };
    row * BOARD_SIZE + offset
}

/// Pixel centre of a cell.
#[must_use]
pub fn cell_center(cell: Cell) -> Option<Point> {
    let GridPosition { row, col } = grid_position(cell)?;
    Some(Point {
        x: f32::from(col) * CELL_WIDTH + CELL_WIDTH / 2.0,
        y: f32::from(BOARD_SIZE - 1 - row) * CELL_HEIGHT + CELL_HEIGHT / 2.0,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::START;

    #[test]
    fn test_zigzag_rows() {
        assert_eq!(grid_position(1), Some(GridPosition { row: 0, col: 0 }));
        assert_eq!(grid_position(10), Some(GridPosition { row: 0, col: 9 }));
        assert_eq!(grid_position(11), Some(GridPosition { row: 1, col: 9 }));
        assert_eq!(grid_position(20), Some(GridPosition { row: 1, col: 0 }));
        assert_eq!(grid_position(100), Some(GridPosition { row: 9, col: 0 }));
        assert_eq!(grid_position(0), None);
        assert_eq!(grid_position(101), None);
    }

    #[test]
    fn test_cell_at_inverts_grid_position() {
        for cell in 1..=FINISH {
            let pos = grid_position(cell).unwrap();
            assert_eq!(cell_at(pos.row, pos.col), cell);
        }
    }

    #[test]
    fn test_cell_center() {
        assert_eq!(cell_center(1), Some(Point { x: 45.0, y: 665.0 }));
        assert_eq!(cell_center(100), Some(Point { x: 45.0, y: 35.0 }));
        assert_eq!(cell_center(START), None);
    }

    #[test]
    fn test_lerp() {
        let a = Point { x: 0.0, y: 0.0 };
        let b = Point { x: 10.0, y: -20.0 };
        assert_eq!(a.lerp(b, 0.5), Point { x: 5.0, y: -10.0 });
        assert_eq!(a.lerp(b, 1.0), b);
    }
}
