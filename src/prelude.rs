//! Commonly used types and utilities for ease of import.

pub use crate::{
    validate, Board, Cell, Coord, Fleet, GameConfig, GameController, GameEngine, GameError,
    GameStatus, GuessResult, GuessStrategy, PlacementStrategy, Ship, Side, TurnOutcome,
};

pub use crate::{FreshRandomGuess, ProbabilityGuess, RandomGuess, RandomPlacement};

#[cfg(feature = "std")]
pub use crate::{Delayed, ManualInput, ManualInputHandle, TerminalRenderer};
