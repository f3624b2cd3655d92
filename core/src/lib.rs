//! Board and move engine for Reversi on any even-sized square board.
//!
//! [`Board`] holds the cells and implements the rules: placing pieces, detecting captures along
//! the eight directions, flipping the captured runs, listing legal moves and scoring.
//! [`GameSession`] adds turn keeping on top of it for frontends.
#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use error::*;
pub use hints::*;
pub use score::*;
pub use session::*;
pub use types::*;

mod board;
mod capture;
mod cell;
mod error;
mod hints;
mod score;
mod session;
mod types;

/// Smallest board edge that leaves room around the seeded center block.
pub const MIN_SIZE: Coord = 4;

/// Edge length of the standard Othello board.
pub const DEFAULT_SIZE: Coord = 8;

/// Validated board dimensions.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Coord", into = "Coord")]
pub struct GameConfig {
    size: Coord,
}

impl GameConfig {
    pub(crate) const fn new_unchecked(size: Coord) -> Self {
        Self { size }
    }

    /// Accepts even sizes of at least [`MIN_SIZE`].
    pub fn new(size: Coord) -> Result<Self> {
        if size >= MIN_SIZE && size % 2 == 0 {
            Ok(Self::new_unchecked(size))
        } else {
            Err(GameError::InvalidSize(size))
        }
    }

    pub const fn size(&self) -> Coord {
        self.size
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.size, self.size)
    }
}

impl TryFrom<Coord> for GameConfig {
    type Error = GameError;

    fn try_from(size: Coord) -> Result<Self> {
        Self::new(size)
    }
}

impl From<GameConfig> for Coord {
    fn from(config: GameConfig) -> Self {
        config.size
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(DEFAULT_SIZE)
    }
}

/// Outcome of putting a piece on the board
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PlaceOutcome {
    NoChange,
    Placed,
}

impl PlaceOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Placed => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_accepts_even_sizes_from_four() {
        for size in (4..=254).step_by(2) {
            let config = GameConfig::new(size).unwrap();
            assert_eq!(config.size(), size);
        }
    }

    #[test]
    fn config_rejects_odd_or_small_sizes() {
        for size in [0, 1, 2, 3, 5, 7, 9, 255] {
            assert_eq!(GameConfig::new(size), Err(GameError::InvalidSize(size)));
        }
    }

    #[test]
    fn config_deserializes_only_valid_sizes() {
        let config: GameConfig = serde_json::from_str("6").unwrap();
        assert_eq!(config.size(), 6);
        assert_eq!(serde_json::to_string(&config).unwrap(), "6");

        assert!(serde_json::from_str::<GameConfig>("0").is_err());
        assert!(serde_json::from_str::<GameConfig>("7").is_err());
    }

    #[test]
    fn only_placed_has_update() {
        assert!(PlaceOutcome::Placed.has_update());
        assert!(!PlaceOutcome::NoChange.has_update());
    }

    #[test]
    fn largest_board_cell_count_fits() {
        let config = GameConfig::new(254).unwrap();
        assert_eq!(config.total_cells(), 254 * 254);
        assert_eq!(GameConfig::default().total_cells(), 64);
    }
}
