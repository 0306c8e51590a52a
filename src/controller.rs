//! Async driver that runs a game between two guess strategies.

use log::info;

use crate::{
    common::{GameError, Side},
    game::{GameEngine, GameStatus, TurnOutcome},
    render::Renderer,
    strategy::GuessStrategy,
};

/// Owns a [`GameEngine`] past setup together with the two guess strategies
/// and an optional renderer, and advances the engine one turn at a time.
pub struct GameController {
    engine: GameEngine,
    players: [Box<dyn GuessStrategy>; 2],
    renderer: Option<Box<dyn Renderer>>,
    perspective: Side,
}

impl GameController {
    pub fn new(
        engine: GameEngine,
        first: Box<dyn GuessStrategy>,
        second: Box<dyn GuessStrategy>,
    ) -> Self {
        Self {
            engine,
            players: [first, second],
            renderer: None,
            perspective: Side::First,
        }
    }

    /// Render every transition from `perspective`'s point of view.
    pub fn with_renderer(mut self, renderer: Box<dyn Renderer>, perspective: Side) -> Self {
        self.renderer = Some(renderer);
        self.perspective = perspective;
        self
    }

    pub fn engine(&self) -> &GameEngine {
        &self.engine
    }

    pub fn into_engine(self) -> GameEngine {
        self.engine
    }

    fn render(&mut self) {
        if let Some(renderer) = self.renderer.as_mut() {
            renderer.render(&self.engine.view(self.perspective));
        }
    }

    /// Play one turn: ask the active side for a guess, then resolve it.
    pub async fn step(&mut self) -> Result<TurnOutcome, GameError> {
        let side = match self.engine.status() {
            GameStatus::TurnOf(side) => side,
            GameStatus::Finished(winner) => return Err(GameError::GameOver { winner }),
            actual => {
                return Err(GameError::WrongPhase {
                    expected: "turn",
                    actual,
                })
            }
        };
        if let Some(limit) = self.engine.config().max_turns {
            if self.engine.turn() >= limit {
                return Err(GameError::TurnLimit {
                    turns: self.engine.turn(),
                });
            }
        }

        let coord = self.players[side.index()]
            .choose_guess(self.engine.guess_board(side))
            .await
            .map_err(|source| GameError::Strategy { side, source })?;

        self.engine.submit_guess(coord)?;
        self.render();
        let outcome = self.engine.resolve()?;
        self.players[side.index()].observe(&outcome);
        self.render();
        Ok(outcome)
    }

    /// Play turns until one side wins and return the winner.
    pub async fn run(&mut self) -> Result<Side, GameError> {
        self.render();
        loop {
            let outcome = self.step().await?;
            if let GameStatus::Finished(winner) = outcome.status {
                info!("{} won in {} turns", winner, self.engine.turn());
                return Ok(winner);
            }
        }
    }
}
