use battleship_lab::{
    init_logging, GameConfig, GameController, GameEngine, GameError, GuessKind, LogRenderer,
    RandomPlacement, Side, BOARD_HEIGHT, BOARD_WIDTH,
};
use clap::Parser;
use log::LevelFilter;
use serde_json::json;

/// Play many seeded games between two strategies and print a JSON summary.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(long, default_value_t = 100)]
    games: u64,
    #[arg(long, default_value_t = 0, help = "Base seed; every game derives its own seeds from it")]
    seed: u64,
    #[arg(long, value_enum, default_value_t = GuessKind::Probability)]
    first: GuessKind,
    #[arg(long, value_enum, default_value_t = GuessKind::Fresh)]
    second: GuessKind,
    #[arg(long, default_value_t = BOARD_WIDTH)]
    width: usize,
    #[arg(long, default_value_t = BOARD_HEIGHT)]
    height: usize,
    #[arg(long, default_value_t = 10_000, help = "Give up on a game after this many turns")]
    max_turns: usize,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging(LevelFilter::Warn);
    let args = Args::parse();
    let config = GameConfig::with_dimensions(args.width, args.height).with_max_turns(args.max_turns);

    let mut wins = [0u64; 2];
    let mut unfinished = 0u64;
    let mut turns: Vec<usize> = Vec::new();

    for game in 0..args.games {
        let seed = args.seed.wrapping_add(game).wrapping_mul(4);
        let mut engine = GameEngine::new(config.clone())?;
        engine.place_fleets(
            &mut RandomPlacement::seeded(seed),
            &mut RandomPlacement::seeded(seed.wrapping_add(1)),
        )?;
        let mut controller = GameController::new(
            engine,
            args.first.build(seed.wrapping_add(2), &config.ships),
            args.second.build(seed.wrapping_add(3), &config.ships),
        )
        .with_renderer(Box::new(LogRenderer), Side::First);
        match controller.run().await {
            Ok(winner) => {
                wins[winner.index()] += 1;
                turns.push(controller.engine().turn());
            }
            Err(GameError::TurnLimit { .. }) => unfinished += 1,
            Err(e) => return Err(e.into()),
        }
    }

    let finished = turns.len();
    let mean_turns = if finished == 0 {
        None
    } else {
        Some(turns.iter().sum::<usize>() as f64 / finished as f64)
    };
    let winner = match wins[0].cmp(&wins[1]) {
        std::cmp::Ordering::Greater => Some(Side::First),
        std::cmp::Ordering::Less => Some(Side::Second),
        std::cmp::Ordering::Equal => None,
    };

    let result = json!({
        "games": args.games,
        "config": config,
        "player1": {"strategy": args.first, "wins": wins[0]},
        "player2": {"strategy": args.second, "wins": wins[1]},
        "unfinished": unfinished,
        "turns": {
            "mean": mean_turns,
            "min": turns.iter().min(),
            "max": turns.iter().max(),
        },
        "winner": winner.map(|side| side.to_string()),
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
