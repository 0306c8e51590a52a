//! Pluggable strategy interfaces.
//!
//! A side is played by two independent pieces:
//! - a [`PlacementStrategy`] that lays out its fleet once at setup
//! - a [`GuessStrategy`] that picks a target every time the side is active

use crate::{
    board::Board,
    common::Coord,
    game::TurnOutcome,
    ship::Ship,
};

/// Produces a fleet layout for an empty board.
pub trait PlacementStrategy: Send {
    /// Return one ship per entry in `sizes`.
    ///
    /// `board` is an empty scratch board of the game's dimensions owned by
    /// the caller. Implementations may mark it up freely; it is thrown away
    /// afterwards and the returned ships are validated regardless.
    fn place_fleet(&mut self, board: &mut Board, sizes: &[usize]) -> Vec<Ship>;
}

/// Chooses the next target from a side's own guess history.
#[async_trait::async_trait]
pub trait GuessStrategy: Send {
    /// Return the next coordinate to fire at.
    ///
    /// `guesses` holds every earlier guess of this side as `Hit`/`Miss`.
    /// The returned future is the only point where the turn loop suspends.
    /// Repeating a resolved coordinate is legal but wastes the turn.
    async fn choose_guess(&mut self, guesses: &Board) -> anyhow::Result<Coord>;

    /// Inform the strategy of the result of its last guess.
    fn observe(&mut self, _outcome: &TurnOutcome) {}
}

impl<P: PlacementStrategy + ?Sized> PlacementStrategy for Box<P> {
    fn place_fleet(&mut self, board: &mut Board, sizes: &[usize]) -> Vec<Ship> {
        (**self).place_fleet(board, sizes)
    }
}

#[async_trait::async_trait]
impl<G: GuessStrategy + ?Sized> GuessStrategy for Box<G> {
    async fn choose_guess(&mut self, guesses: &Board) -> anyhow::Result<Coord> {
        (**self).choose_guess(guesses).await
    }

    fn observe(&mut self, outcome: &TurnOutcome) {
        (**self).observe(outcome)
    }
}
