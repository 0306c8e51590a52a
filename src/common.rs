//! Common types for the engine: cells, sides, guess results and errors.

use core::fmt;

/// Board coordinate as `(row, col)`.
pub type Coord = (usize, usize);

/// State of a single board cell.
///
/// Fleet boards only ever hold `Empty` and `Ship`; guess boards only ever hold
/// `Empty`, `Hit` and `Miss`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Empty,
    /// Occupied by the ship with this index in its fleet.
    Ship(usize),
    Hit,
    Miss,
}

impl Cell {
    /// `true` once a guess has been resolved on this cell.
    pub fn is_resolved(self) -> bool {
        matches!(self, Cell::Hit | Cell::Miss)
    }
}

/// One of the two players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    First,
    Second,
}

impl Side {
    /// Side whose turn it is for the given turn counter.
    pub fn for_turn(turn: usize) -> Self {
        if turn % 2 == 0 {
            Side::First
        } else {
            Side::Second
        }
    }

    pub fn index(self) -> usize {
        match self {
            Side::First => 0,
            Side::Second => 1,
        }
    }

    pub fn opponent(self) -> Self {
        match self {
            Side::First => Side::Second,
            Side::Second => Side::First,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player {}", self.index() + 1)
    }
}

/// Result of a guess attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GuessResult {
    /// Guess landed on a ship cell.
    Hit,
    /// Guess landed on water.
    Miss,
}

impl GuessResult {
    /// Guess board cell recording this result.
    pub fn cell(self) -> Cell {
        match self {
            GuessResult::Hit => Cell::Hit,
            GuessResult::Miss => Cell::Miss,
        }
    }
}

/// Errors returned by board accessors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Coordinate lies outside the `height × width` grid.
    OutOfBounds {
        row: usize,
        col: usize,
        width: usize,
        height: usize,
    },
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds {
                row,
                col,
                width,
                height,
            } => write!(
                f,
                "coordinate ({}, {}) is outside the {}x{} board",
                row, col, width, height
            ),
        }
    }
}

impl std::error::Error for BoardError {}

/// Reasons a proposed fleet is rejected, reported in check order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlacementError {
    /// Number of ships differs from the configured fleet.
    WrongShipCount { expected: usize, found: usize },
    /// Ship lengths (both sorted) do not match the configured sizes.
    WrongSizeMultiset {
        expected: Vec<usize>,
        found: Vec<usize>,
    },
    /// Ship at this index is not a single straight run without gaps.
    NotContiguous { ship: usize },
    /// Ship at this index has a cell off the board.
    OutOfBounds { ship: usize, cell: Coord },
    /// Ship `ship` reuses `cell`, already taken by ship `other`.
    Overlap {
        ship: usize,
        other: usize,
        cell: Coord,
    },
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::WrongShipCount { expected, found } => {
                write!(f, "expected {} ships, got {}", expected, found)
            }
            PlacementError::WrongSizeMultiset { expected, found } => {
                write!(f, "ship sizes {:?} do not match required {:?}", found, expected)
            }
            PlacementError::NotContiguous { ship } => {
                write!(f, "ship {} is not a contiguous straight line", ship)
            }
            PlacementError::OutOfBounds { ship, cell } => {
                write!(f, "ship {} has cell ({}, {}) off the board", ship, cell.0, cell.1)
            }
            PlacementError::Overlap { ship, other, cell } => write!(
                f,
                "ship {} overlaps ship {} at ({}, {})",
                ship, other, cell.0, cell.1
            ),
        }
    }
}

impl std::error::Error for PlacementError {}

/// Errors raised by the game engine and its driver.
#[derive(Debug)]
pub enum GameError {
    /// Configuration cannot describe a playable game.
    InvalidConfig(&'static str),
    /// A side could not produce a valid fleet within the allowed attempts.
    Placement {
        side: Side,
        attempts: usize,
        source: PlacementError,
    },
    /// A guess strategy returned a coordinate off the board.
    InvalidGuessCoordinate { side: Side, coord: Coord },
    /// Operation not allowed in the current phase.
    WrongPhase {
        expected: &'static str,
        actual: crate::game::GameStatus,
    },
    /// The game has already been won.
    GameOver { winner: Side },
    /// A guess strategy failed to yield a coordinate.
    Strategy { side: Side, source: anyhow::Error },
    /// Configured turn limit reached without a winner.
    TurnLimit { turns: usize },
    Board(BoardError),
}

impl From<BoardError> for GameError {
    fn from(err: BoardError) -> Self {
        GameError::Board(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidConfig(why) => write!(f, "invalid game configuration: {}", why),
            GameError::Placement {
                side,
                attempts,
                source,
            } => write!(
                f,
                "{} failed to place a valid fleet after {} attempt(s): {}",
                side, attempts, source
            ),
            GameError::InvalidGuessCoordinate { side, coord } => write!(
                f,
                "{} guessed ({}, {}), which is off the board",
                side, coord.0, coord.1
            ),
            GameError::WrongPhase { expected, actual } => {
                write!(f, "expected {} phase, game is in {:?}", expected, actual)
            }
            GameError::GameOver { winner } => write!(f, "game is over, {} won", winner),
            GameError::Strategy { side, source } => {
                write!(f, "guess strategy for {} failed: {}", side, source)
            }
            GameError::TurnLimit { turns } => {
                write!(f, "no winner after {} turns", turns)
            }
            GameError::Board(e) => write!(f, "board error: {}", e),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::Placement { source, .. } => Some(source),
            GameError::Strategy { source, .. } => Some(&**source),
            GameError::Board(e) => Some(e),
            _ => None,
        }
    }
}
