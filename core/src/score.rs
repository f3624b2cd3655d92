use core::fmt;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Winner {
    Black,
    White,
    Draw,
}

impl Winner {
    /// The winning color, `None` on a draw.
    pub const fn color(self) -> Option<Color> {
        match self {
            Self::Black => Some(Color::Black),
            Self::White => Some(Color::White),
            Self::Draw => None,
        }
    }

    pub const fn from_color(color: Color) -> Option<Self> {
        match color {
            Color::Black => Some(Self::Black),
            Color::White => Some(Self::White),
            Color::Empty => None,
        }
    }
}

impl fmt::Display for Winner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Black => "Black",
            Self::White => "White",
            Self::Draw => "Draw",
        })
    }
}

/// Pieces of each color on the board.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub black: CellCount,
    pub white: CellCount,
}

impl Score {
    pub const fn winner(self) -> Winner {
        if self.black > self.white {
            Winner::Black
        } else if self.white > self.black {
            Winner::White
        } else {
            Winner::Draw
        }
    }
}

impl Board {
    pub fn score(&self) -> Score {
        self.cells()
            .fold(Score::default(), |mut score, cell| {
                match cell.color() {
                    Color::Black => score.black += 1,
                    Color::White => score.white += 1,
                    Color::Empty => {}
                }
                score
            })
    }

    /// The game ends once every cell holds a piece.
    ///
    /// A position where neither player can move but cells remain empty is not terminal.
    pub fn is_game_over(&self) -> bool {
        self.piece_count() == self.total_cells()
    }

    /// Winner by piece count. Meant for a full board, but defined on any position.
    pub fn winner(&self) -> Winner {
        self.score().winner()
    }
}
