// Reference placement and guessing strategies.
// These are baselines for experiments, not part of the engine contract.

use log::warn;
use rand::{rngs::SmallRng, Rng, SeedableRng};

use crate::{
    board::Board,
    common::{Cell, Coord},
    game::TurnOutcome,
    ship::{Orientation, Ship},
    strategy::{GuessStrategy, PlacementStrategy},
};

/// Random draws allowed per ship before [`RandomPlacement`] gives up on it.
pub const MAX_DRAWS_PER_SHIP: usize = 10_000;

/// Placements covering more observed hits get dramatically more weight so
/// that squares adjacent to confirmed hits stand out.
const HIT_BIAS: f64 = 10.0;

/// Sampling temperature used by [`ProbabilityGuess`]; lower is greedier.
pub const DEFAULT_TEMPERATURE: f64 = 0.5;

/// Places each ship at a uniformly random origin and orientation, redrawing
/// whenever it would collide with a ship already placed in this attempt.
pub struct RandomPlacement<R = SmallRng> {
    rng: R,
}

impl<R: Rng + Send> RandomPlacement<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Draw a non-colliding ship of `size` on `board`, or `None` if it does
    /// not fit in either orientation or every draw collided.
    fn draw(&mut self, board: &Board, size: usize) -> Option<Ship> {
        let fits_h = size <= board.width();
        let fits_v = size <= board.height();
        if size == 0 || !(fits_h || fits_v) {
            return None;
        }
        for _ in 0..MAX_DRAWS_PER_SHIP {
            let orient = match (fits_h, fits_v) {
                (true, true) if self.rng.random::<bool>() => Orientation::Horizontal,
                (true, true) => Orientation::Vertical,
                (true, false) => Orientation::Horizontal,
                _ => Orientation::Vertical,
            };
            let max_r = if orient == Orientation::Vertical {
                board.height() - size
            } else {
                board.height() - 1
            };
            let max_c = if orient == Orientation::Horizontal {
                board.width() - size
            } else {
                board.width() - 1
            };
            let r = self.rng.random_range(0..=max_r);
            let c = self.rng.random_range(0..=max_c);
            let ship = Ship::straight((r, c), orient, size);
            if ship
                .cells()
                .iter()
                .all(|&(rr, cc)| board.get(rr, cc) == Ok(Cell::Empty))
            {
                return Some(ship);
            }
        }
        None
    }
}

impl RandomPlacement<SmallRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng + Send> PlacementStrategy for RandomPlacement<R> {
    fn place_fleet(&mut self, board: &mut Board, sizes: &[usize]) -> Vec<Ship> {
        let mut ships = Vec::with_capacity(sizes.len());
        for &size in sizes {
            let Some(ship) = self.draw(board, size) else {
                warn!("no room left for a ship of length {}", size);
                break;
            };
            let index = ships.len();
            if let Err(e) = ship
                .cells()
                .iter()
                .try_for_each(|&(r, c)| board.set(r, c, Cell::Ship(index)))
            {
                warn!("could not mark ship of length {}: {}", size, e);
                break;
            }
            ships.push(ship);
        }
        ships
    }
}

/// Fires at a uniformly random cell, ignoring history. Repeats happen.
pub struct RandomGuess<R = SmallRng> {
    rng: R,
}

impl<R: Rng + Send> RandomGuess<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomGuess<SmallRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

#[async_trait::async_trait]
impl<R: Rng + Send> GuessStrategy for RandomGuess<R> {
    async fn choose_guess(&mut self, guesses: &Board) -> anyhow::Result<Coord> {
        Ok(random_cell(&mut self.rng, guesses))
    }
}

/// Fires at a uniformly random cell that has not been guessed yet.
pub struct FreshRandomGuess<R = SmallRng> {
    rng: R,
}

impl<R: Rng + Send> FreshRandomGuess<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl FreshRandomGuess<SmallRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

#[async_trait::async_trait]
impl<R: Rng + Send> GuessStrategy for FreshRandomGuess<R> {
    async fn choose_guess(&mut self, guesses: &Board) -> anyhow::Result<Coord> {
        let open: Vec<Coord> = guesses
            .coords()
            .filter(|&(r, c)| guesses.get(r, c) == Ok(Cell::Empty))
            .collect();
        if open.is_empty() {
            return Ok(random_cell(&mut self.rng, guesses));
        }
        Ok(open[self.rng.random_range(0..open.len())])
    }
}

fn random_cell<R: Rng + ?Sized>(rng: &mut R, board: &Board) -> Coord {
    (
        rng.random_range(0..board.height()),
        rng.random_range(0..board.width()),
    )
}

/// Hunts with a probability density over unguessed cells, dropping ship
/// lengths from the model as they are reported sunk.
pub struct ProbabilityGuess<R = SmallRng> {
    rng: R,
    remaining: Vec<usize>,
}

impl<R: Rng + Send> ProbabilityGuess<R> {
    /// `sizes` are the opponent's ship lengths.
    pub fn new(rng: R, sizes: &[usize]) -> Self {
        Self {
            rng,
            remaining: sizes.to_vec(),
        }
    }

    /// Ship lengths not yet reported sunk.
    pub fn remaining(&self) -> &[usize] {
        &self.remaining
    }
}

impl ProbabilityGuess<SmallRng> {
    pub fn seeded(seed: u64, sizes: &[usize]) -> Self {
        Self::new(SmallRng::seed_from_u64(seed), sizes)
    }
}

#[async_trait::async_trait]
impl<R: Rng + Send> GuessStrategy for ProbabilityGuess<R> {
    async fn choose_guess(&mut self, guesses: &Board) -> anyhow::Result<Coord> {
        let pdf = calc_pdf(guesses, &self.remaining);
        Ok(sample_pdf(&pdf, DEFAULT_TEMPERATURE, &mut self.rng))
    }

    fn observe(&mut self, outcome: &TurnOutcome) {
        if let Some(sunk) = outcome.sunk {
            if let Some(pos) = self.remaining.iter().position(|&l| l == sunk.length) {
                self.remaining.swap_remove(pos);
            }
        }
    }
}

/// Compute a probability density over all unguessed cells of `guesses`
/// given the lengths of ships still afloat. Each entry sums the relative
/// likelihood of a ship segment occupying that cell; the matrix is
/// normalized to 1.
pub fn calc_pdf(guesses: &Board, lengths: &[usize]) -> Vec<Vec<f64>> {
    let (height, width) = (guesses.height(), guesses.width());
    let mut matrix = vec![vec![0.0f64; width]; height];

    for &len in lengths {
        if len == 0 {
            continue;
        }
        for orient in [Orientation::Horizontal, Orientation::Vertical] {
            let vertical = orient == Orientation::Vertical;
            let max_row = if vertical { (height + 1).saturating_sub(len) } else { height };
            let max_col = if vertical { width } else { (width + 1).saturating_sub(len) };
            for r in 0..max_row {
                for c in 0..max_col {
                    let segment = |k: usize| if vertical { (r + k, c) } else { (r, c + k) };
                    // check placement validity and count hits
                    let mut valid = true;
                    let mut n_hits = 0i32;
                    for k in 0..len {
                        let (rr, cc) = segment(k);
                        match guesses.get(rr, cc) {
                            Ok(Cell::Hit) => n_hits += 1,
                            Ok(Cell::Empty) => {}
                            _ => {
                                valid = false;
                                break;
                            }
                        }
                    }
                    if !valid {
                        continue;
                    }
                    let weight = HIT_BIAS.powi(n_hits);
                    for k in 0..len {
                        let (rr, cc) = segment(k);
                        if guesses.get(rr, cc) == Ok(Cell::Empty) {
                            matrix[rr][cc] += weight;
                        }
                    }
                }
            }
        }
    }

    normalize(matrix, guesses)
}

/// Scale to a total of 1; with no mass left, spread it evenly over the
/// unguessed cells.
fn normalize(mut matrix: Vec<Vec<f64>>, guesses: &Board) -> Vec<Vec<f64>> {
    let total: f64 = matrix.iter().flatten().sum();
    if total == 0.0 {
        let open = guesses.count(Cell::Empty);
        if open == 0 {
            return matrix;
        }
        let uniform = 1.0 / open as f64;
        for (r, c) in guesses.coords() {
            if guesses.get(r, c) == Ok(Cell::Empty) {
                matrix[r][c] = uniform;
            }
        }
        return matrix;
    }
    for v in matrix.iter_mut().flatten() {
        *v /= total;
    }
    matrix
}

/// Sample a coordinate from a probability matrix using a temperature
/// parameter. A temperature that is not strictly positive picks the most
/// likely cell.
pub fn sample_pdf<R: Rng + ?Sized>(pdf: &[Vec<f64>], temperature: f64, rng: &mut R) -> Coord {
    let height = pdf.len();
    let width = pdf.first().map_or(0, Vec::len);
    if temperature.is_nan() || temperature <= 0.0 {
        return most_likely(pdf);
    }
    let mut adjusted = vec![vec![0.0f64; width]; height];
    let mut total = 0.0;
    for r in 0..height {
        for c in 0..width {
            let v = pdf[r][c].powf(1.0 / temperature);
            adjusted[r][c] = v;
            total += v;
        }
    }
    if total == 0.0 || !total.is_finite() {
        return (rng.random_range(0..height), rng.random_range(0..width));
    }
    let mut cumulative = 0.0;
    let threshold: f64 = rng.random_range(0.0..total);
    for r in 0..height {
        for c in 0..width {
            cumulative += adjusted[r][c];
            if threshold < cumulative {
                return (r, c);
            }
        }
    }
    (height - 1, width - 1)
}

fn most_likely(pdf: &[Vec<f64>]) -> Coord {
    let mut best = ((0, 0), f64::NEG_INFINITY);
    for (r, row) in pdf.iter().enumerate() {
        for (c, &v) in row.iter().enumerate() {
            if v > best.1 {
                best = ((r, c), v);
            }
        }
    }
    best.0
}

/// Named reference guess strategies, selectable from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(clap::ValueEnum, serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "std", serde(rename_all = "kebab-case"))]
pub enum GuessKind {
    /// Uniformly random cell, repeats allowed
    Random,
    /// Uniformly random unguessed cell
    Fresh,
    /// Probability-density hunter
    Probability,
}

impl GuessKind {
    /// Build a seeded instance; `sizes` are the opponent's ship lengths.
    pub fn build(self, seed: u64, sizes: &[usize]) -> Box<dyn GuessStrategy> {
        match self {
            GuessKind::Random => Box::new(RandomGuess::seeded(seed)),
            GuessKind::Fresh => Box::new(FreshRandomGuess::seeded(seed)),
            GuessKind::Probability => Box::new(ProbabilityGuess::seeded(seed, sizes)),
        }
    }
}
