//! Coordinate notation for humans (`B7` is row 7, column B) and a guess
//! strategy that reads it from stdin.

use crate::common::Coord;

/// Format `(row, col)` as column letter plus 1-based row.
pub fn coord_to_string((row, col): Coord) -> String {
    let letter = (b'A' + col as u8) as char;
    format!("{}{}", letter, row + 1)
}

/// Parse `A5`-style input for a board of the given size.
pub fn parse_coord(input: &str, width: usize, height: usize) -> Result<Coord, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("Empty input".to_string());
    }
    if input.len() < 2 {
        return Err("Too short - need column letter and row number (e.g., A5)".to_string());
    }
    let last_col = (b'A' + width.saturating_sub(1) as u8) as char;
    let mut chars = input.chars();
    let col_ch = chars.next().ok_or("No column letter")?.to_ascii_uppercase();
    if !col_ch.is_ascii_alphabetic() {
        return Err(format!("Invalid column '{}' - must be a letter A-{}", col_ch, last_col));
    }
    let col = (col_ch as u8).wrapping_sub(b'A') as usize;
    if col >= width {
        return Err(format!("Column '{}' out of bounds - must be A-{}", col_ch, last_col));
    }
    let row_str: String = chars.collect();
    let row: usize = row_str
        .parse()
        .map_err(|_| format!("Invalid row '{}' - must be a number 1-{}", row_str, height))?;
    if row == 0 {
        return Err(format!("Row cannot be 0 - must be 1-{}", height));
    }
    if row > height {
        return Err(format!("Row {} out of bounds - must be 1-{}", row, height));
    }
    Ok((row - 1, col))
}

#[cfg(feature = "std")]
pub use self::stdin::StdinGuess;

#[cfg(feature = "std")]
mod stdin {
    use std::io::{self, BufRead, Write};

    use super::{coord_to_string, parse_coord};
    use crate::{
        board::Board,
        common::{Cell, Coord, GuessResult},
        game::TurnOutcome,
        strategy::GuessStrategy,
    };

    /// Interactive guess strategy reading coordinates typed on stdin.
    #[derive(Debug, Default)]
    pub struct StdinGuess;

    impl StdinGuess {
        pub fn new() -> Self {
            Self
        }
    }

    fn prompt(guesses: &Board) -> anyhow::Result<Coord> {
        let stdin = io::stdin();
        let mut lines = stdin.lock();
        loop {
            print!("\nEnter target coordinates (e.g. A5): ");
            io::stdout().flush()?;
            let mut line = String::new();
            if lines.read_line(&mut line)? == 0 {
                return Err(anyhow::anyhow!("stdin closed"));
            }
            match parse_coord(&line, guesses.width(), guesses.height()) {
                Ok((r, c)) => match guesses.get(r, c)? {
                    Cell::Hit => println!("✗ You already hit that location! Choose another target."),
                    Cell::Miss => println!("✗ You already missed that location! Choose another target."),
                    _ => return Ok((r, c)),
                },
                Err(e) => {
                    println!("✗ Invalid coordinate: {}", e);
                    println!("   Example: A5, B10, J1");
                }
            }
        }
    }

    #[async_trait::async_trait]
    impl GuessStrategy for StdinGuess {
        async fn choose_guess(&mut self, guesses: &Board) -> anyhow::Result<Coord> {
            let board = guesses.clone();
            tokio::task::spawn_blocking(move || prompt(&board)).await?
        }

        fn observe(&mut self, outcome: &TurnOutcome) {
            let at = coord_to_string(outcome.coord);
            match (outcome.result, outcome.sunk) {
                (GuessResult::Hit, Some(sunk)) => {
                    println!("💥 SUNK! {} finished off a ship of length {}.", at, sunk.length)
                }
                (GuessResult::Hit, None) => println!("🎯 HIT at {}!", at),
                (GuessResult::Miss, _) => println!("💧 Miss at {}.", at),
            }
        }
    }
}
