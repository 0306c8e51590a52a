use crate::common::GameError;

pub const BOARD_WIDTH: usize = 10;
pub const BOARD_HEIGHT: usize = 10;
pub const SHIP_SIZES: [usize; 5] = [5, 4, 3, 3, 2];

/// Largest width or height; columns are labelled with a single letter.
pub const MAX_DIMENSION: usize = 26;

/// Fleet validation attempts granted to each side during setup.
pub const PLACEMENT_ATTEMPTS: usize = 3;

/// Construction-time game parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameConfig {
    pub width: usize,
    pub height: usize,
    /// Required ship lengths, one entry per ship.
    pub ships: Vec<usize>,
    pub placement_attempts: usize,
    /// Abort a driven game after this many resolved guesses.
    pub max_turns: Option<usize>,
}

impl GameConfig {
    /// Standard-fleet configuration on a board of the given size.
    pub fn with_dimensions(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn with_ships(mut self, ships: Vec<usize>) -> Self {
        self.ships = ships;
        self
    }

    pub fn with_max_turns(mut self, max_turns: usize) -> Self {
        self.max_turns = Some(max_turns);
        self
    }

    /// Number of cells every valid fleet covers.
    pub fn total_ship_cells(&self) -> usize {
        self.ships.iter().sum()
    }

    /// Sizes sorted ascending, the form the validator compares against.
    pub fn sorted_sizes(&self) -> Vec<usize> {
        let mut sizes = self.ships.clone();
        sizes.sort_unstable();
        sizes
    }

    /// Reject configurations that cannot describe a playable game.
    pub fn validate(&self) -> Result<(), GameError> {
        if self.width == 0 || self.height == 0 {
            return Err(GameError::InvalidConfig("board dimensions must be non-zero"));
        }
        if self.width > MAX_DIMENSION || self.height > MAX_DIMENSION {
            return Err(GameError::InvalidConfig("board dimensions must not exceed 26"));
        }
        if self.ships.is_empty() {
            return Err(GameError::InvalidConfig("fleet must contain at least one ship"));
        }
        if self.ships.iter().any(|&len| len == 0) {
            return Err(GameError::InvalidConfig("ship lengths must be non-zero"));
        }
        if self
            .ships
            .iter()
            .any(|&len| len > self.width && len > self.height)
        {
            return Err(GameError::InvalidConfig("a ship is longer than the board"));
        }
        if self.total_ship_cells() > self.width * self.height {
            return Err(GameError::InvalidConfig("fleet does not fit on the board"));
        }
        if self.placement_attempts == 0 {
            return Err(GameError::InvalidConfig("placement_attempts must be at least 1"));
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: BOARD_WIDTH,
            height: BOARD_HEIGHT,
            ships: SHIP_SIZES.to_vec(),
            placement_attempts: PLACEMENT_ATTEMPTS,
            max_turns: None,
        }
    }
}
