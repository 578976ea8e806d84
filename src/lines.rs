use crate::engine::{Board, Cell, Pos, BOARD_SIZE};

/// Minimum run length that qualifies a line for removal.
pub const MIN_LINE_LEN: usize = 5;

/// One of the four scan axes through a pivot cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
    /// Top-left to bottom-right.
    DiagonalDown,
    /// Bottom-left to top-right.
    DiagonalUp,
}

impl Axis {
    /// All axes in emission order.
    pub const ALL: [Axis; 4] = [
        Axis::Horizontal,
        Axis::Vertical,
        Axis::DiagonalDown,
        Axis::DiagonalUp,
    ];

    /// Unit step toward the axis-positive end.
    fn step(self) -> (i32, i32) {
        match self {
            Axis::Horizontal => (1, 0),
            Axis::Vertical => (0, 1),
            Axis::DiagonalDown => (1, 1),
            Axis::DiagonalUp => (1, -1),
        }
    }
}

/// A maximal same-color run of at least [`MIN_LINE_LEN`] cells along one
/// axis, eligible for removal.
///
/// Cells are ordered from the axis-negative end to the axis-positive end
/// and always include the pivot the scan started from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Line {
    pub axis: Axis,
    pub cells: Vec<Pos>,
}

/// Finds every qualifying line through `pivot`, the ball that was just
/// placed or moved.
///
/// Each of the four axes is walked outward from the pivot in both
/// directions; a direction stops contributing once it hits a boundary or a
/// mismatching color, while the opposite direction continues independently.
/// A run of [`MIN_LINE_LEN`] or more including the pivot is kept, so up to
/// four lines can come back at once (a cross pattern qualifies on several
/// axes simultaneously). Shorter runs are discarded.
///
/// Emission order is fixed ([`Axis::ALL`]) and the function never mutates
/// the board; scanning an empty pivot finds nothing.
pub fn scan_lines(board: &Board, pivot: Pos) -> Vec<Line> {
    let color = board.get(pivot);
    if color == Cell::Empty {
        return Vec::new();
    }

    let mut lines = Vec::new();
    for axis in Axis::ALL {
        let (dx, dy) = axis.step();
        let mut cells = walk(board, pivot, color, -dx, -dy);
        cells.reverse();
        cells.push(pivot);
        cells.extend(walk(board, pivot, color, dx, dy));
        if cells.len() >= MIN_LINE_LEN {
            lines.push(Line { axis, cells });
        }
    }
    lines
}

// Collects same-colored cells outward from `pivot` along `(dx, dy)`,
// stopping at the first boundary or mismatch. The pivot itself is not
// included.
fn walk(board: &Board, pivot: Pos, color: Cell, dx: i32, dy: i32) -> Vec<Pos> {
    let mut out = Vec::new();
    let mut x = pivot.x as i32 + dx;
    let mut y = pivot.y as i32 + dy;
    while x >= 0 && x < BOARD_SIZE as i32 && y >= 0 && y < BOARD_SIZE as i32 {
        let pos = Pos::new(x as usize, y as usize);
        if board.get(pos) != color {
            break;
        }
        out.push(pos);
        x += dx;
        y += dy;
    }
    out
}
