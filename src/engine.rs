//! Core board representation for the Color Lines puzzle.
//!
//! This module defines the game's fundamental components:
//! - `Cell`: Represents the content of one board square, either empty or a
//!   ball of one of seven colors.
//! - `Pos`: An (x, y) coordinate on the grid.
//! - `Board`: Represents the 9x9 game board and includes methods for cell
//!   access, empty-cell enumeration and terminal display.

use rand::Rng;
use std::fmt;

/// Represents the content of a cell on the game board.
///
/// Each variant corresponds to a specific ball color or an empty state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Represents an empty square.
    Empty,
    /// Represents a blue ball.
    Blue,
    /// Represents a cyan ball.
    Cyan,
    /// Represents a red ball.
    Red,
    /// Represents a brown ball.
    Brown,
    /// Represents a green ball.
    Green,
    /// Represents a yellow ball.
    Yellow,
    /// Represents a magenta ball.
    Magenta,
}

// Helper for drawing forecast colors. Only ball colors are produced here,
// never `Cell::Empty`; the forecast and the spawn step rely on that.
pub(crate) fn random_ball_color(rng: &mut impl Rng) -> Cell {
    match rng.gen_range(0..7u8) {
        0 => Cell::Blue,
        1 => Cell::Cyan,
        2 => Cell::Red,
        3 => Cell::Brown,
        4 => Cell::Green,
        5 => Cell::Yellow,
        6 => Cell::Magenta,
        _ => unreachable!("Generated value out of range"),
    }
}

impl Cell {
    /// Converts the cell to its character representation.
    ///
    /// This is primarily used for text-based display and for board fixtures
    /// in tests (see `utils::board_from_str_array`).
    ///
    /// # Examples
    ///
    /// ```
    /// use color_lines::engine::Cell;
    /// assert_eq!(Cell::Red.to_char(), 'R');
    /// assert_eq!(Cell::Empty.to_char(), '.');
    /// ```
    pub fn to_char(&self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Blue => 'B',
            Cell::Cyan => 'C',
            Cell::Red => 'R',
            Cell::Brown => 'N',
            Cell::Green => 'G',
            Cell::Yellow => 'Y',
            Cell::Magenta => 'M',
        }
    }

    /// Returns the ANSI color code string for terminal output.
    fn to_ansi_color_code(&self) -> &'static str {
        match self {
            Cell::Empty => "40",
            Cell::Red => "41",
            Cell::Green => "42",
            Cell::Brown => "43",
            Cell::Blue => "44",
            Cell::Magenta => "45",
            Cell::Cyan => "46",
            Cell::Yellow => "103",
        }
    }
}

/// Defines the size of the game board (width and height).
/// The board is always the fixed 9x9 grid of the classic rules.
pub const BOARD_SIZE: usize = 9;

/// A coordinate on the board: `x` is the column, `y` is the row, both in
/// `0..BOARD_SIZE`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pos {
    pub x: usize,
    pub y: usize,
}

impl Pos {
    pub const fn new(x: usize, y: usize) -> Self {
        Pos { x, y }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Represents the game board as a 2D grid of `Cell`s.
///
/// The board stores the state of each square and provides bounds-checked
/// reads and writes plus the empty-cell pool used for spawning. Movement,
/// line detection and scoring live in the `pathfinder`, `lines` and `game`
/// modules; the board itself never mutates more than one cell per call.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    grid: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    /// Creates a new empty game board with all cells set to `Cell::Empty`.
    ///
    /// # Examples
    /// ```
    /// use color_lines::engine::{Board, Cell, Pos};
    /// let board = Board::new_empty();
    /// assert_eq!(board.get(Pos::new(0, 0)), Cell::Empty);
    /// ```
    pub fn new_empty() -> Self {
        Board {
            grid: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Creates a new board from a predefined grid configuration.
    ///
    /// This is useful for testing or setting up specific game scenarios.
    /// The outer array index is the row (`y`), the inner one the column (`x`).
    pub fn from_grid(initial_grid: [[Cell; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Board { grid: initial_grid }
    }

    /// Returns the cell at `pos`.
    ///
    /// # Panics
    /// Panics if `pos` is outside the board. Out-of-bounds access is a
    /// programmer error; a correctly driven UI never produces one.
    pub fn get(&self, pos: Pos) -> Cell {
        self.grid[pos.y][pos.x]
    }

    /// Sets the cell at `pos` to `cell`, overwriting unconditionally.
    ///
    /// # Panics
    /// Panics if `pos` is outside the board, like [`Board::get`].
    pub fn set(&mut self, pos: Pos, cell: Cell) {
        self.grid[pos.y][pos.x] = cell;
    }

    /// Returns every empty cell in row-major order (left to right within a
    /// row, top row first).
    ///
    /// The result is recomputed on each call and serves as the candidate
    /// pool for the spawn step; the stable order keeps seeded games
    /// reproducible.
    pub fn empty_cells(&self) -> Vec<Pos> {
        let mut empties = Vec::new();
        for y in 0..BOARD_SIZE {
            for x in 0..BOARD_SIZE {
                if self.grid[y][x] == Cell::Empty {
                    empties.push(Pos::new(x, y));
                }
            }
        }
        empties
    }

    /// Returns `true` when no empty cell remains.
    pub fn is_full(&self) -> bool {
        self.empty_cells().is_empty()
    }

    /// Generates a string representation of the board with an optional
    /// highlighted position.
    ///
    /// The output includes row and column numbers and uses ANSI escape codes
    /// for ball colors in a terminal environment. If `pos` is `Some`, that
    /// cell is marked (the interactive binary uses this to show the selected
    /// ball).
    pub fn to_string_with_highlight(&self, pos: Option<Pos>) -> String {
        let mut output = String::new();

        output.push_str("  ");
        for x in 0..BOARD_SIZE {
            output.push_str(&format!("{:<2}", x));
        }
        output.push('\n');

        for y in 0..BOARD_SIZE {
            output.push_str(&format!("{:<2}", y));

            for x in 0..BOARD_SIZE {
                let is_highlight = pos.map_or(false, |p| p.x == x && p.y == y);
                let color_code = self.grid[y][x].to_ansi_color_code();
                let content = if is_highlight { "[]" } else { "  " };
                output.push_str(&format!("\x1b[1;{};m{}\x1b[m", color_code, content));
            }
            if y < BOARD_SIZE - 1 {
                output.push('\n');
            }
        }

        output
    }
}

impl fmt::Display for Board {
    /// Formats the board for display using `to_string_with_highlight(None)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_string_with_highlight(None))
    }
}
