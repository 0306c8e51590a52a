//! Fixed-size grid of cells, used both as fleet board and guess board.

use crate::common::{BoardError, Cell, Coord};
use core::fmt;

/// `height` rows of `width` cells each. Dimensions never change after
/// construction.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    rows: Vec<Vec<Cell>>,
}

impl Board {
    /// Create a board with every cell `Empty`.
    pub fn new(width: usize, height: usize) -> Self {
        Board {
            width,
            height,
            rows: vec![vec![Cell::Empty; width]; height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn in_bounds(&self, (row, col): Coord) -> bool {
        row < self.height && col < self.width
    }

    /// Read the cell at (`row`, `col`).
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        self.check_bounds(row, col)?;
        Ok(self.rows[row][col])
    }

    /// Write `cell` at (`row`, `col`). The board is untouched on error.
    pub fn set(&mut self, row: usize, col: usize, cell: Cell) -> Result<(), BoardError> {
        self.check_bounds(row, col)?;
        self.rows[row][col] = cell;
        Ok(())
    }

    /// Rows in order, each a slice of `width` cells.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Every coordinate on the board in row-major order.
    pub fn coords(&self) -> impl Iterator<Item = Coord> {
        let width = self.width;
        (0..self.height).flat_map(move |r| (0..width).map(move |c| (r, c)))
    }

    /// Number of cells equal to `cell`.
    pub fn count(&self, cell: Cell) -> usize {
        self.rows
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&c| c == cell)
            .count()
    }

    #[inline]
    fn check_bounds(&self, row: usize, col: usize) -> Result<(), BoardError> {
        if row >= self.height || col >= self.width {
            Err(BoardError::OutOfBounds {
                row,
                col,
                width: self.width,
                height: self.height,
            })
        } else {
            Ok(())
        }
    }
}

/// Compact one-character-per-cell rendering used in logs and test failures.
impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Board {}x{} {{", self.width, self.height)?;
        for row in &self.rows {
            write!(f, "  ")?;
            for cell in row {
                let ch = match cell {
                    Cell::Empty => '.',
                    Cell::Ship(i) => ship_marker(*i),
                    Cell::Hit => 'X',
                    Cell::Miss => 'o',
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        write!(f, "}}")
    }
}

/// Letter identifying ship `index` on a rendered fleet board.
pub fn ship_marker(index: usize) -> char {
    if index < 26 {
        (b'A' + index as u8) as char
    } else {
        '#'
    }
}
