//! Render collaborators: purely observational sinks for game state.

use log::debug;

use crate::{
    board::{ship_marker, Board},
    common::Cell,
    game::GameView,
};
#[cfg(feature = "std")]
use crate::game::GameStatus;

/// Called by the controller after every state transition. Must return
/// promptly; a renderer never influences the game.
pub trait Renderer: Send {
    fn render(&mut self, view: &GameView<'_>);
}

impl<R: Renderer + ?Sized> Renderer for Box<R> {
    fn render(&mut self, view: &GameView<'_>) {
        (**self).render(view)
    }
}

/// Writes one debug line per transition.
#[derive(Debug, Default)]
pub struct LogRenderer;

impl Renderer for LogRenderer {
    fn render(&mut self, view: &GameView<'_>) {
        debug!(
            "[{}] turn {} {:?}: {} hits taken, {} hits landed",
            view.side,
            view.turn,
            view.status,
            view.opponent_guesses.count(Cell::Hit),
            view.own_guesses.count(Cell::Hit),
        );
    }
}

/// Column label for `col`, `A` first.
pub fn column_label(col: usize) -> char {
    (b'A' + col as u8) as char
}

/// Rows of text for a fleet board with the opponent's shots overlaid.
/// `X` hit, `o` miss, letters are ships, `.` is water.
pub fn fleet_lines(fleet: &Board, shots: &Board) -> Vec<String> {
    grid_lines(fleet, |r, c| match shots.get(r, c) {
        Ok(Cell::Hit) => 'X',
        Ok(Cell::Miss) => 'o',
        _ => match fleet.get(r, c) {
            Ok(Cell::Ship(i)) => ship_marker(i),
            _ => '.',
        },
    })
}

/// Rows of text for a guess board: `X` hit, `o` miss, `.` unknown.
pub fn guess_lines(guesses: &Board) -> Vec<String> {
    grid_lines(guesses, |r, c| match guesses.get(r, c) {
        Ok(Cell::Hit) => 'X',
        Ok(Cell::Miss) => 'o',
        _ => '.',
    })
}

fn grid_lines(board: &Board, cell: impl Fn(usize, usize) -> char) -> Vec<String> {
    let mut lines = Vec::with_capacity(board.height() + 1);
    let mut header = String::from("   ");
    for c in 0..board.width() {
        header.push(' ');
        header.push(column_label(c));
    }
    lines.push(header);
    for r in 0..board.height() {
        let mut line = format!("{:2} ", r + 1);
        for c in 0..board.width() {
            line.push(' ');
            line.push(cell(r, c));
        }
        lines.push(line);
    }
    lines
}

/// Prints both boards of one side to stdout whenever a turn starts or the
/// game ends.
#[cfg(feature = "std")]
#[derive(Debug, Default)]
pub struct TerminalRenderer;

#[cfg(feature = "std")]
impl Renderer for TerminalRenderer {
    fn render(&mut self, view: &GameView<'_>) {
        match view.status {
            GameStatus::TurnOf(side) => {
                println!("\n=== turn {}: {} to move ===", view.turn + 1, side);
            }
            GameStatus::Finished(winner) => {
                println!("\n=== game over after {} turns: {} wins ===", view.turn, winner);
            }
            GameStatus::Setup | GameStatus::Resolving(..) => return,
        }
        let fleet = fleet_lines(view.fleet_board, view.opponent_guesses);
        let guesses = guess_lines(view.own_guesses);
        let width = fleet.first().map_or(0, String::len);
        println!("{:<width$}    {}", "Your fleet:", "Your guesses:", width = width);
        for (left, right) in fleet.iter().zip(guesses.iter()) {
            println!("{:<width$}    {}", left, right, width = width);
        }
        println!("Legend: X=Hit  o=Miss  .=Water/Unknown  A-Z=Ships");
    }
}
