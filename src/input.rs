#![cfg(feature = "std")]
//! Guess strategies fed from outside the engine.

use std::time::Duration;

use tokio::sync::mpsc;

use crate::{board::Board, common::Coord, game::TurnOutcome, strategy::GuessStrategy};

/// Guess strategy that waits for coordinates selected elsewhere, e.g. by a
/// pointer click in a UI. Selections made before the turn starts are kept
/// and consumed in order.
pub struct ManualInput {
    selections: mpsc::UnboundedReceiver<Coord>,
}

/// Sending half of a [`ManualInput`].
#[derive(Clone)]
pub struct ManualInputHandle {
    tx: mpsc::UnboundedSender<Coord>,
}

impl ManualInput {
    pub fn channel() -> (Self, ManualInputHandle) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { selections: rx }, ManualInputHandle { tx })
    }
}

impl ManualInputHandle {
    /// Deliver a selected coordinate. Fails once the game has dropped its
    /// [`ManualInput`].
    pub fn select(&self, coord: Coord) -> anyhow::Result<()> {
        self.tx
            .send(coord)
            .map_err(|_| anyhow::anyhow!("game is no longer accepting input"))
    }
}

#[async_trait::async_trait]
impl GuessStrategy for ManualInput {
    async fn choose_guess(&mut self, _guesses: &Board) -> anyhow::Result<Coord> {
        self.selections
            .recv()
            .await
            .ok_or_else(|| anyhow::anyhow!("input closed before a coordinate was selected"))
    }
}

/// Wraps a guess strategy with a fixed pause before every guess, so an
/// opponent looks like it is thinking.
pub struct Delayed<G> {
    inner: G,
    delay: Duration,
}

impl<G: GuessStrategy> Delayed<G> {
    pub fn new(inner: G, delay: Duration) -> Self {
        Self { inner, delay }
    }
}

#[async_trait::async_trait]
impl<G: GuessStrategy> GuessStrategy for Delayed<G> {
    async fn choose_guess(&mut self, guesses: &Board) -> anyhow::Result<Coord> {
        tokio::time::sleep(self.delay).await;
        self.inner.choose_guess(guesses).await
    }

    fn observe(&mut self, outcome: &TurnOutcome) {
        self.inner.observe(outcome)
    }
}
