use crate::engine::{Board, Cell, BOARD_SIZE};
use thiserror::Error;

/// Errors produced when parsing a board from text.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoardParseError {
    #[error("invalid number of rows: expected at most {BOARD_SIZE}, found {0}")]
    TooManyRows(usize),

    #[error("row {row} is too long: expected at most {BOARD_SIZE} characters, found {found}")]
    RowTooLong { row: usize, found: usize },

    #[error("unrecognized character '{ch}' in row {row} col {col}")]
    UnrecognizedChar { ch: char, row: usize, col: usize },
}

/// Parses an array of string slices into a `Board` object.
///
/// Each string slice in the input array represents a row on the board,
/// starting from row 0 (`y = 0`). If fewer than `BOARD_SIZE` rows are
/// provided, the remaining rows are filled with `Cell::Empty`. Similarly, if
/// a row string is shorter than `BOARD_SIZE` characters, the rest of that
/// row is filled with `Cell::Empty`.
///
/// Valid characters are the ones produced by [`Cell::to_char`]:
/// - 'B': `Cell::Blue`
/// - 'C': `Cell::Cyan`
/// - 'R': `Cell::Red`
/// - 'N': `Cell::Brown`
/// - 'G': `Cell::Green`
/// - 'Y': `Cell::Yellow`
/// - 'M': `Cell::Magenta`
/// - '.': `Cell::Empty`
///
/// # Examples
/// ```
/// use color_lines::utils::board_from_str_array;
/// use color_lines::engine::{Cell, Pos};
///
/// let board = board_from_str_array(&[
///     "RGY",
///     "B.M",
/// ])
/// .unwrap();
/// assert_eq!(board.get(Pos::new(0, 0)), Cell::Red);
/// assert_eq!(board.get(Pos::new(1, 1)), Cell::Empty);
/// assert_eq!(board.get(Pos::new(2, 1)), Cell::Magenta);
/// assert_eq!(board.get(Pos::new(3, 0)), Cell::Empty); // rest of row 0 is empty
///
/// assert!(board_from_str_array(&["RXB"]).is_err());
/// ```
pub fn board_from_str_array(s: &[&str]) -> Result<Board, BoardParseError> {
    if s.len() > BOARD_SIZE {
        return Err(BoardParseError::TooManyRows(s.len()));
    }

    let mut grid = [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE];

    for (y, row_str) in s.iter().enumerate() {
        if row_str.chars().count() > BOARD_SIZE {
            return Err(BoardParseError::RowTooLong {
                row: y,
                found: row_str.chars().count(),
            });
        }

        for (x, ch) in row_str.chars().enumerate() {
            // If `row_str` is shorter than `BOARD_SIZE`, remaining cells in
            // this grid row keep their `Cell::Empty` default.
            grid[y][x] = match ch {
                'B' => Cell::Blue,
                'C' => Cell::Cyan,
                'R' => Cell::Red,
                'N' => Cell::Brown,
                'G' => Cell::Green,
                'Y' => Cell::Yellow,
                'M' => Cell::Magenta,
                '.' => Cell::Empty,
                _ => {
                    return Err(BoardParseError::UnrecognizedChar { ch, row: y, col: x });
                }
            };
        }
    }
    Ok(Board::from_grid(grid))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Pos;

    #[test]
    fn test_board_from_str_array_valid() {
        let board_str = [
            "BCRNGYMBC",
            ".........",
            "BCRNGYMBC",
            ".........",
            "BCRNGYMBC",
            ".........",
            "BCRNGYMBC",
            ".........",
            "BCRNGYMBC",
        ];
        let board = board_from_str_array(&board_str).unwrap();
        assert_eq!(board.get(Pos::new(0, 0)), Cell::Blue);
        assert_eq!(board.get(Pos::new(6, 0)), Cell::Magenta);
        assert_eq!(board.get(Pos::new(0, 1)), Cell::Empty);
    }

    #[test]
    fn test_board_from_str_array_invalid_char() {
        let board_str = ["BCRNGYMBX"]; // X is invalid
        let result = board_from_str_array(&board_str);
        assert_eq!(
            result,
            Err(BoardParseError::UnrecognizedChar {
                ch: 'X',
                row: 0,
                col: 8
            })
        );
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("unrecognized character 'X'"));
    }

    #[test]
    fn test_board_from_str_array_row_too_long() {
        let too_long_row = "R".repeat(BOARD_SIZE + 1);
        let board_str = [too_long_row.as_str()];
        let result = board_from_str_array(&board_str);
        assert_eq!(
            result,
            Err(BoardParseError::RowTooLong {
                row: 0,
                found: BOARD_SIZE + 1
            })
        );
    }

    #[test]
    fn test_board_from_str_array_too_many_rows() {
        let rows = vec!["R........."; BOARD_SIZE + 1];
        let result = board_from_str_array(&rows);
        assert_eq!(result, Err(BoardParseError::TooManyRows(BOARD_SIZE + 1)));
    }

    #[test]
    fn test_board_from_str_array_empty_input() {
        let board_str: [&str; 0] = [];
        let board = board_from_str_array(&board_str).unwrap();
        for y in 0..BOARD_SIZE {
            for x in 0..BOARD_SIZE {
                assert_eq!(board.get(Pos::new(x, y)), Cell::Empty);
            }
        }
    }

    #[test]
    fn test_board_from_str_array_partial_rows_and_cols() {
        let board_str = [
            "RGY", // Shorter than BOARD_SIZE
            "B",   // Shorter than BOARD_SIZE
        ];
        let board = board_from_str_array(&board_str).unwrap();
        assert_eq!(board.get(Pos::new(0, 0)), Cell::Red);
        assert_eq!(board.get(Pos::new(1, 0)), Cell::Green);
        assert_eq!(board.get(Pos::new(2, 0)), Cell::Yellow);
        assert_eq!(board.get(Pos::new(3, 0)), Cell::Empty);
        assert_eq!(board.get(Pos::new(0, 1)), Cell::Blue);
        assert_eq!(board.get(Pos::new(1, 1)), Cell::Empty);
        assert_eq!(board.get(Pos::new(0, 2)), Cell::Empty); // next row empty
    }
}
