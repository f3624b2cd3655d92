use thiserror::Error;

use crate::Coord;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid board size {0}, expected an even number of at least 4")]
    InvalidSize(Coord),
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Invalid color, only black or white pieces can be played")]
    InvalidColor,
    #[error("Board shape does not match declared size")]
    InvalidBoardShape,
    #[error("Board cells do not agree with each other or with the piece count")]
    InconsistentBoard,
    #[error("Cell is already occupied")]
    Occupied,
    #[error("Move does not capture any piece")]
    IllegalMove,
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
}

pub type Result<T> = core::result::Result<T, GameError>;
