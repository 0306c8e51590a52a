//! Fleet placement validation.

use std::collections::HashMap;

use crate::common::{Coord, PlacementError};
use crate::config::GameConfig;
use crate::ship::{Fleet, Ship};

/// Check a proposed fleet against `config` and return it as a [`Fleet`].
///
/// Checks run in a fixed order and the first failure is reported: ship
/// count, size multiset, contiguity, bounds, overlap. Each ship's cells must
/// be listed in increasing order along its row or column.
pub fn validate(candidate: &[Ship], config: &GameConfig) -> Result<Fleet, PlacementError> {
    if candidate.len() != config.ships.len() {
        return Err(PlacementError::WrongShipCount {
            expected: config.ships.len(),
            found: candidate.len(),
        });
    }

    let expected = config.sorted_sizes();
    let mut found: Vec<usize> = candidate.iter().map(Ship::len).collect();
    found.sort_unstable();
    if found != expected {
        return Err(PlacementError::WrongSizeMultiset { expected, found });
    }

    if let Some(ship) = candidate.iter().position(|s| !s.is_contiguous()) {
        return Err(PlacementError::NotContiguous { ship });
    }

    for (ship, s) in candidate.iter().enumerate() {
        if let Some(&cell) = s
            .cells()
            .iter()
            .find(|&&(r, c)| r >= config.height || c >= config.width)
        {
            return Err(PlacementError::OutOfBounds { ship, cell });
        }
    }

    let mut owner: HashMap<Coord, usize> = HashMap::with_capacity(config.total_ship_cells());
    for (ship, s) in candidate.iter().enumerate() {
        for &cell in s.cells() {
            if let Some(&other) = owner.get(&cell) {
                return Err(PlacementError::Overlap { ship, other, cell });
            }
            owner.insert(cell, ship);
        }
    }

    Ok(Fleet::new_unchecked(candidate.to_vec()))
}
