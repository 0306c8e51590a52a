//! Turn state machine for a two-player game.
//!
//! [`GameEngine`] owns both fleets and both guess boards and advances through
//! [`GameStatus`] one explicit step at a time. It never calls strategies
//! itself during play, so it can be paused, inspected and stepped without
//! an async runtime; [`crate::controller::GameController`] drives it.

use log::{debug, info, warn};

use crate::{
    board::Board,
    common::{Cell, Coord, GameError, GuessResult, Side},
    config::GameConfig,
    ship::Fleet,
    strategy::PlacementStrategy,
    validation::validate,
};

/// Current phase of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    /// Fleets not yet placed.
    Setup,
    /// Waiting for this side's guess.
    TurnOf(Side),
    /// Guess received, not yet applied.
    Resolving(Side, Coord),
    /// Terminal: this side hit every opponent ship cell.
    Finished(Side),
}

/// What happened when a guess was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnOutcome {
    /// Zero-based index of the turn that produced this outcome.
    pub turn: usize,
    pub side: Side,
    pub coord: Coord,
    pub result: GuessResult,
    /// The coordinate had already been resolved; nothing changed.
    pub repeated: bool,
    /// Opponent ship this guess completed, if any.
    pub sunk: Option<SunkShip>,
    /// Status after the guess was applied.
    pub status: GameStatus,
}

/// A ship whose last cell was just hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct SunkShip {
    /// Index of the ship in the opponent's fleet.
    pub index: usize,
    pub length: usize,
}

/// Everything one side may look at, as handed to renderers.
#[derive(Debug, Clone, Copy)]
pub struct GameView<'a> {
    pub side: Side,
    pub status: GameStatus,
    pub turn: usize,
    /// This side's own ships.
    pub fleet_board: &'a Board,
    /// Shots the opponent has taken at this side.
    pub opponent_guesses: &'a Board,
    /// Shots this side has taken at the opponent.
    pub own_guesses: &'a Board,
}

/// Core game state: fleets, guess boards, turn counter and phase.
pub struct GameEngine {
    config: GameConfig,
    fleets: Option<[Fleet; 2]>,
    fleet_boards: [Board; 2],
    guess_boards: [Board; 2],
    /// Opponent ship cells each side has not hit yet.
    remaining: [usize; 2],
    turn: usize,
    status: GameStatus,
}

impl GameEngine {
    /// Create an engine in the `Setup` phase with empty boards.
    pub fn new(config: GameConfig) -> Result<Self, GameError> {
        config.validate()?;
        let empty = Board::new(config.width, config.height);
        Ok(Self {
            fleet_boards: [empty.clone(), empty.clone()],
            guess_boards: [empty.clone(), empty],
            fleets: None,
            remaining: [0; 2],
            turn: 0,
            status: GameStatus::Setup,
            config,
        })
    }

    /// Create an engine and install two already validated fleets.
    pub fn with_fleets(config: GameConfig, first: Fleet, second: Fleet) -> Result<Self, GameError> {
        let mut engine = Self::new(config)?;
        engine.install_fleets(first, second)?;
        Ok(engine)
    }

    /// Ask each side's placement strategy for a fleet and start the game.
    ///
    /// Each side gets `config.placement_attempts` tries; an invalid layout is
    /// logged and requested again, and running out of tries aborts setup.
    pub fn place_fleets<A, B>(&mut self, first: &mut A, second: &mut B) -> Result<(), GameError>
    where
        A: PlacementStrategy + ?Sized,
        B: PlacementStrategy + ?Sized,
    {
        self.expect_setup()?;
        let first_fleet = self.request_fleet(Side::First, first)?;
        let second_fleet = self.request_fleet(Side::Second, second)?;
        self.install_fleets(first_fleet, second_fleet)
    }

    /// Install both fleets and move to the first side's turn. Fleets are
    /// re-checked against this engine's configuration.
    pub fn install_fleets(&mut self, first: Fleet, second: Fleet) -> Result<(), GameError> {
        self.expect_setup()?;
        for (side, fleet) in [(Side::First, &first), (Side::Second, &second)] {
            validate(fleet.ships(), &self.config).map_err(|source| GameError::Placement {
                side,
                attempts: 1,
                source,
            })?;
        }
        let (width, height) = (self.config.width, self.config.height);
        self.fleet_boards = [first.board(width, height)?, second.board(width, height)?];
        self.remaining = [second.cell_count(), first.cell_count()];
        self.fleets = Some([first, second]);
        self.status = GameStatus::TurnOf(Side::First);
        info!(
            "fleets placed on {}x{} board, {} ships each",
            width,
            height,
            self.config.ships.len()
        );
        Ok(())
    }

    fn request_fleet<P>(&self, side: Side, strategy: &mut P) -> Result<Fleet, GameError>
    where
        P: PlacementStrategy + ?Sized,
    {
        let mut attempt = 0;
        loop {
            attempt += 1;
            let mut scratch = Board::new(self.config.width, self.config.height);
            let ships = strategy.place_fleet(&mut scratch, &self.config.ships);
            match validate(&ships, &self.config) {
                Ok(fleet) => {
                    debug!("{} fleet accepted on attempt {}", side, attempt);
                    return Ok(fleet);
                }
                Err(source) if attempt < self.config.placement_attempts => {
                    warn!(
                        "{} placement attempt {} rejected: {}",
                        side, attempt, source
                    );
                }
                Err(source) => {
                    return Err(GameError::Placement {
                        side,
                        attempts: attempt,
                        source,
                    })
                }
            }
        }
    }

    /// Accept the active side's guess: `TurnOf(side) → Resolving(side, coord)`.
    ///
    /// An off-board coordinate is rejected and the phase is left unchanged.
    pub fn submit_guess(&mut self, coord: Coord) -> Result<Side, GameError> {
        match self.status {
            GameStatus::TurnOf(side) => {
                if !self.guess_boards[side.index()].in_bounds(coord) {
                    return Err(GameError::InvalidGuessCoordinate { side, coord });
                }
                self.status = GameStatus::Resolving(side, coord);
                Ok(side)
            }
            GameStatus::Finished(winner) => Err(GameError::GameOver { winner }),
            actual => Err(GameError::WrongPhase {
                expected: "turn",
                actual,
            }),
        }
    }

    /// Apply the pending guess against the opponent's fleet and advance to
    /// the other side's turn, or to `Finished` if the guesser has now hit
    /// every opponent ship cell.
    pub fn resolve(&mut self) -> Result<TurnOutcome, GameError> {
        let (side, coord) = match self.status {
            GameStatus::Resolving(side, coord) => (side, coord),
            GameStatus::Finished(winner) => return Err(GameError::GameOver { winner }),
            actual => {
                return Err(GameError::WrongPhase {
                    expected: "resolving",
                    actual,
                })
            }
        };
        let me = side.index();
        let opponent = side.opponent();
        let (row, col) = coord;

        let target = self.fleet_boards[opponent.index()].get(row, col)?;
        let result = match target {
            Cell::Ship(_) => GuessResult::Hit,
            _ => GuessResult::Miss,
        };
        let repeated = self.guess_boards[me].get(row, col)?.is_resolved();
        let mut sunk = None;
        if !repeated {
            self.guess_boards[me].set(row, col, result.cell())?;
            if let Cell::Ship(index) = target {
                self.remaining[me] = self.remaining[me].saturating_sub(1);
                sunk = self.sunk_by(side, index);
            }
        }

        let turn = self.turn;
        self.turn += 1;
        self.status = if self.remaining[me] == 0 {
            info!("{} wins after {} turns", side, self.turn);
            GameStatus::Finished(side)
        } else {
            GameStatus::TurnOf(opponent)
        };
        debug!(
            "turn {}: {} -> ({}, {}) {:?}{}",
            turn,
            side,
            row,
            col,
            result,
            if repeated { " (repeat)" } else { "" }
        );

        Ok(TurnOutcome {
            turn,
            side,
            coord,
            result,
            repeated,
            sunk,
            status: self.status,
        })
    }

    /// `submit_guess` followed by `resolve`.
    pub fn play_guess(&mut self, coord: Coord) -> Result<TurnOutcome, GameError> {
        self.submit_guess(coord)?;
        self.resolve()
    }

    /// Opponent ship `index`, if every one of its cells is now `Hit` on
    /// `side`'s guess board.
    fn sunk_by(&self, side: Side, index: usize) -> Option<SunkShip> {
        let fleets = self.fleets.as_ref()?;
        let guesses = &self.guess_boards[side.index()];
        let ship = fleets[side.opponent().index()].ships().get(index)?;
        ship.cells()
            .iter()
            .all(|&(r, c)| guesses.get(r, c) == Ok(Cell::Hit))
            .then(|| SunkShip {
                index,
                length: ship.len(),
            })
    }

    fn expect_setup(&self) -> Result<(), GameError> {
        match self.status {
            GameStatus::Setup => Ok(()),
            actual => Err(GameError::WrongPhase {
                expected: "setup",
                actual,
            }),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Number of guesses resolved so far.
    pub fn turn(&self) -> usize {
        self.turn
    }

    /// Side expected to guess next, if the game is in play.
    pub fn active_side(&self) -> Option<Side> {
        match self.status {
            GameStatus::TurnOf(side) | GameStatus::Resolving(side, _) => Some(side),
            _ => None,
        }
    }

    pub fn winner(&self) -> Option<Side> {
        match self.status {
            GameStatus::Finished(side) => Some(side),
            _ => None,
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self.status, GameStatus::Finished(_))
    }

    pub fn fleet(&self, side: Side) -> Option<&Fleet> {
        self.fleets.as_ref().map(|f| &f[side.index()])
    }

    pub fn fleet_board(&self, side: Side) -> &Board {
        &self.fleet_boards[side.index()]
    }

    pub fn guess_board(&self, side: Side) -> &Board {
        &self.guess_boards[side.index()]
    }

    /// Opponent ship cells `side` still has to hit.
    pub fn remaining(&self, side: Side) -> usize {
        self.remaining[side.index()]
    }

    /// What `side` is allowed to see.
    pub fn view(&self, side: Side) -> GameView<'_> {
        GameView {
            side,
            status: self.status,
            turn: self.turn,
            fleet_board: &self.fleet_boards[side.index()],
            opponent_guesses: &self.guess_boards[side.opponent().index()],
            own_guesses: &self.guess_boards[side.index()],
        }
    }
}
