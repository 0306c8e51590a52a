use battleship_lab::{
    calc_pdf, sample_pdf, Board, Cell, FreshRandomGuess, GameStatus, GuessKind, GuessResult,
    GuessStrategy, ProbabilityGuess, RandomGuess, Side, SunkShip, TurnOutcome, SHIP_SIZES,
};
use rand::{rngs::SmallRng, SeedableRng};

fn total(pdf: &[Vec<f64>]) -> f64 {
    pdf.iter().flatten().sum()
}

#[test]
fn pdf_on_empty_board_is_normalized_and_centre_heavy() {
    let board = Board::new(10, 10);
    let pdf = calc_pdf(&board, &SHIP_SIZES);
    assert!((total(&pdf) - 1.0).abs() < 1e-9);
    assert!(pdf.iter().flatten().all(|&p| p > 0.0));
    assert!(pdf[4][4] > pdf[0][0]);
}

#[test]
fn pdf_ignores_resolved_cells_and_favours_hit_neighbours() {
    let mut board = Board::new(10, 10);
    board.set(5, 5, Cell::Hit).unwrap();
    board.set(0, 9, Cell::Miss).unwrap();
    let pdf = calc_pdf(&board, &SHIP_SIZES);

    assert_eq!(pdf[5][5], 0.0);
    assert_eq!(pdf[0][9], 0.0);
    assert!((total(&pdf) - 1.0).abs() < 1e-9);
    for neighbour in [pdf[4][5], pdf[6][5], pdf[5][4], pdf[5][6]] {
        assert!(neighbour > pdf[0][0]);
        assert!(neighbour > pdf[9][0]);
    }
}

#[test]
fn pdf_falls_back_to_uniform_when_nothing_fits() {
    let mut board = Board::new(3, 3);
    for (r, c) in [(0, 1), (1, 0), (1, 2), (2, 1)] {
        board.set(r, c, Cell::Miss).unwrap();
    }
    // only isolated cells remain; a length-2 ship fits nowhere
    let pdf = calc_pdf(&board, &[2]);
    assert!((total(&pdf) - 1.0).abs() < 1e-9);
    assert_eq!(pdf[0][0], 0.2);
    assert_eq!(pdf[0][1], 0.0);
}

#[test]
fn sampling_only_picks_cells_with_mass() {
    let mut rng = SmallRng::seed_from_u64(3);
    let mut pdf = vec![vec![0.0; 5]; 4];
    pdf[2][3] = 1.0;
    for _ in 0..50 {
        assert_eq!(sample_pdf(&pdf, 0.5, &mut rng), (2, 3));
    }

    pdf[2][3] = 0.5;
    pdf[0][1] = 0.5;
    for _ in 0..50 {
        let pick = sample_pdf(&pdf, 1.0, &mut rng);
        assert!(pick == (2, 3) || pick == (0, 1));
    }
}

#[test]
fn non_positive_temperature_picks_the_most_likely_cell() {
    let mut rng = SmallRng::seed_from_u64(8);
    let mut pdf = vec![vec![0.1; 3]; 3];
    pdf[1][2] = 0.2;
    pdf[0][0] = 0.0;
    for temperature in [0.0, -1.0, f64::NAN] {
        assert_eq!(sample_pdf(&pdf, temperature, &mut rng), (1, 2));
    }
}

#[tokio::test]
async fn fresh_guess_finds_the_last_open_cell() {
    let mut board = Board::new(6, 6);
    for (r, c) in board.coords().collect::<Vec<_>>() {
        if (r, c) != (4, 1) {
            board.set(r, c, Cell::Miss).unwrap();
        }
    }
    let mut strategy = FreshRandomGuess::seeded(11);
    for _ in 0..10 {
        assert_eq!(strategy.choose_guess(&board).await.unwrap(), (4, 1));
    }
}

#[tokio::test]
async fn fresh_guess_never_repeats() {
    let mut board = Board::new(5, 5);
    let mut strategy = FreshRandomGuess::seeded(5);
    for _ in 0..25 {
        let (r, c) = strategy.choose_guess(&board).await.unwrap();
        assert_eq!(board.get(r, c), Ok(Cell::Empty));
        board.set(r, c, Cell::Miss).unwrap();
    }
    assert_eq!(board.count(Cell::Empty), 0);
}

#[tokio::test]
async fn random_guess_stays_on_the_board() {
    let board = Board::new(7, 3);
    let mut strategy = RandomGuess::seeded(42);
    for _ in 0..200 {
        assert!(board.in_bounds(strategy.choose_guess(&board).await.unwrap()));
    }
}

#[test]
fn probability_guess_forgets_sunk_ships() {
    let mut strategy = ProbabilityGuess::seeded(1, &SHIP_SIZES);
    let outcome = |sunk| TurnOutcome {
        turn: 8,
        side: Side::First,
        coord: (2, 2),
        result: GuessResult::Hit,
        repeated: false,
        sunk,
        status: GameStatus::TurnOf(Side::Second),
    };
    strategy.observe(&outcome(None));
    assert_eq!(strategy.remaining().len(), 5);

    strategy.observe(&outcome(Some(SunkShip { index: 2, length: 3 })));
    let mut left = strategy.remaining().to_vec();
    left.sort_unstable();
    assert_eq!(left, vec![2, 3, 4, 5]);
}

#[tokio::test]
async fn every_kind_builds_a_working_strategy() {
    let board = Board::new(10, 10);
    for kind in [GuessKind::Random, GuessKind::Fresh, GuessKind::Probability] {
        let mut strategy = kind.build(7, &SHIP_SIZES);
        let coord = strategy.choose_guess(&board).await.unwrap();
        assert!(board.in_bounds(coord), "{:?} chose {:?}", kind, coord);
    }
}
