//! Two-player Battleship engine for experimenting with placement and
//! guessing strategies.
//!
//! - [`Board`], [`validate`] and [`Fleet`] hold and check the geometry
//! - [`PlacementStrategy`] and [`GuessStrategy`] are the plug-in points
//! - [`GameEngine`] is the turn state machine, [`GameController`] drives it

mod ai;
mod board;
pub mod cli;
mod common;
mod config;
mod controller;
mod game;
#[cfg(feature = "std")]
mod input;
#[cfg(feature = "std")]
mod logging;
pub mod prelude;
mod render;
mod ship;
mod strategy;
mod validation;

pub use ai::*;
pub use board::*;
pub use common::*;
pub use config::*;
pub use controller::*;
pub use game::*;
#[cfg(feature = "std")]
pub use input::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, LOG_ENV};
pub use render::*;
pub use ship::*;
pub use strategy::*;
pub use validation::validate;
