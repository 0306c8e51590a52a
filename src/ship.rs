//! Ship geometry and validated fleets.

use crate::board::Board;
use crate::common::{BoardError, Cell, Coord};

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A proposed ship: an ordered run of cells. Nothing about the geometry is
/// guaranteed until the ship has passed through [`crate::validate()`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Ship {
    cells: Vec<Coord>,
}

impl Ship {
    pub fn new(cells: Vec<Coord>) -> Self {
        Ship { cells }
    }

    /// Straight ship of `len` cells starting at `origin` and extending right
    /// (horizontal) or down (vertical).
    pub fn straight(origin: Coord, orientation: Orientation, len: usize) -> Self {
        let (row, col) = origin;
        let cells = (0..len)
            .map(|i| match orientation {
                Orientation::Horizontal => (row, col + i),
                Orientation::Vertical => (row + i, col),
            })
            .collect();
        Ship { cells }
    }

    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, coord: Coord) -> bool {
        self.cells.contains(&coord)
    }

    /// `true` if the cells, in the order given, step by exactly one along a
    /// single row or column. Gaps, repeats and reversed runs are rejected.
    pub fn is_contiguous(&self) -> bool {
        let next = |a: usize, b: usize| a.checked_add(1) == Some(b);
        match self.cells.as_slice() {
            [] => false,
            [_] => true,
            cells => {
                let horizontal = cells
                    .windows(2)
                    .all(|w| w[0].0 == w[1].0 && next(w[0].1, w[1].1));
                let vertical = cells
                    .windows(2)
                    .all(|w| w[0].1 == w[1].1 && next(w[0].0, w[1].0));
                horizontal || vertical
            }
        }
    }

    /// Orientation of a contiguous ship longer than one cell.
    pub fn orientation(&self) -> Option<Orientation> {
        match self.cells.as_slice() {
            [a, b, ..] if a.0 == b.0 => Some(Orientation::Horizontal),
            [a, b, ..] if a.1 == b.1 => Some(Orientation::Vertical),
            _ => None,
        }
    }
}

impl From<Vec<Coord>> for Ship {
    fn from(cells: Vec<Coord>) -> Self {
        Ship::new(cells)
    }
}

/// A fleet that has passed validation: the right ships, each a straight run,
/// all on the board, no shared cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fleet {
    ships: Vec<Ship>,
}

impl Fleet {
    /// Only [`crate::validate()`] constructs fleets.
    pub(crate) fn new_unchecked(ships: Vec<Ship>) -> Self {
        Fleet { ships }
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Total number of occupied cells.
    pub fn cell_count(&self) -> usize {
        self.ships.iter().map(Ship::len).sum()
    }

    /// Index of the ship occupying `coord`, if any.
    pub fn ship_at(&self, coord: Coord) -> Option<usize> {
        self.ships.iter().position(|s| s.contains(coord))
    }

    /// Ship lengths sorted ascending.
    pub fn sorted_sizes(&self) -> Vec<usize> {
        let mut sizes: Vec<usize> = self.ships.iter().map(Ship::len).collect();
        sizes.sort_unstable();
        sizes
    }

    /// Fleet board with `Cell::Ship(index)` written into every ship cell.
    /// Fails if a ship does not fit on a `width` × `height` board.
    pub fn board(&self, width: usize, height: usize) -> Result<Board, BoardError> {
        let mut board = Board::new(width, height);
        for (index, ship) in self.ships.iter().enumerate() {
            for &(r, c) in ship.cells() {
                board.set(r, c, Cell::Ship(index))?;
            }
        }
        Ok(board)
    }
}
