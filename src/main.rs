use std::time::Duration;

use battleship_lab::{
    cli::StdinGuess, init_logging, Delayed, GameConfig, GameController, GameEngine, GuessKind,
    RandomPlacement, Side, TerminalRenderer, BOARD_HEIGHT, BOARD_WIDTH,
};
use clap::{Parser, Subcommand};
use log::LevelFilter;
use rand::Rng;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(long, default_value_t = BOARD_WIDTH, help = "Number of columns")]
    width: usize,
    #[arg(long, default_value_t = BOARD_HEIGHT, help = "Number of rows")]
    height: usize,
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play against a computer opponent, typing guesses on stdin.
    Play {
        #[arg(long, value_enum, default_value_t = GuessKind::Random)]
        opponent: GuessKind,
        #[arg(long, default_value_t = 500, help = "Opponent thinking time in milliseconds")]
        delay_ms: u64,
    },
    /// Watch two computer strategies play each other.
    Watch {
        #[arg(long, value_enum, default_value_t = GuessKind::Probability)]
        first: GuessKind,
        #[arg(long, value_enum, default_value_t = GuessKind::Fresh)]
        second: GuessKind,
        #[arg(long, default_value_t = 0, help = "Pause before every guess in milliseconds")]
        delay_ms: u64,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging(LevelFilter::Warn);
    let cli = Cli::parse();

    let seed = match cli.seed {
        Some(s) => {
            println!("Using fixed seed: {} (game will be reproducible)", s);
            s
        }
        None => rand::rng().random(),
    };
    let config = GameConfig::with_dimensions(cli.width, cli.height);
    let mut engine = GameEngine::new(config.clone())?;
    engine.place_fleets(
        &mut RandomPlacement::seeded(seed),
        &mut RandomPlacement::seeded(seed.wrapping_add(1)),
    )?;

    match cli.command {
        Commands::Play { opponent, delay_ms } => {
            let computer = Delayed::new(
                opponent.build(seed.wrapping_add(2), &config.ships),
                Duration::from_millis(delay_ms),
            );
            let mut controller =
                GameController::new(engine, Box::new(StdinGuess::new()), Box::new(computer))
                    .with_renderer(Box::new(TerminalRenderer), Side::First);
            match controller.run().await? {
                Side::First => println!("\n🎉 VICTORY! You have sunk all enemy ships!"),
                Side::Second => println!("\n💀 DEFEAT. All your ships have been destroyed."),
            }
        }
        Commands::Watch {
            first,
            second,
            delay_ms,
        } => {
            let delay = Duration::from_millis(delay_ms);
            let first_player = Delayed::new(first.build(seed.wrapping_add(2), &config.ships), delay);
            let second_player =
                Delayed::new(second.build(seed.wrapping_add(3), &config.ships), delay);
            let mut controller =
                GameController::new(engine, Box::new(first_player), Box::new(second_player))
                    .with_renderer(Box::new(TerminalRenderer), Side::First);
            let winner = controller.run().await?;
            println!("\n{} ({:?}) wins.", winner, if winner == Side::First { first } else { second });
        }
    }
    Ok(())
}
