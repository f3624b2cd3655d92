use core::fmt;
use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::*;

/// Color of a square: one of the two piece colors, or no piece at all.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Empty,
    Black,
    White,
}

impl Color {
    /// Whether this is a color a piece can have.
    pub const fn is_piece(self) -> bool {
        matches!(self, Self::Black | Self::White)
    }

    /// The other piece color, `None` for [`Color::Empty`].
    pub const fn opponent(self) -> Option<Self> {
        match self {
            Self::Black => Some(Self::White),
            Self::White => Some(Self::Black),
            Self::Empty => None,
        }
    }

    /// Glyph used in the board rendering.
    pub const fn glyph(self) -> char {
        match self {
            Self::Empty => '-',
            Self::Black => 'B',
            Self::White => 'W',
        }
    }

    pub const fn from_glyph(glyph: char) -> Option<Self> {
        match glyph {
            '-' => Some(Self::Empty),
            'B' => Some(Self::Black),
            'W' => Some(Self::White),
            _ => None,
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::Empty
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

/// Parses a piece color as typed by a player, `B`/`W` or the full name in any case.
impl FromStr for Color {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("b") || s.eq_ignore_ascii_case("black") {
            Ok(Self::Black)
        } else if s.eq_ignore_ascii_case("w") || s.eq_ignore_ascii_case("white") {
            Ok(Self::White)
        } else {
            Err(GameError::InvalidColor)
        }
    }
}

/// One square of the board.
///
/// A cell is `occupied` exactly when its color is not [`Color::Empty`]. Once occupied it stays so,
/// flips only change the color.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    color: Color,
    occupied: bool,
    position: Coord2,
}

impl Cell {
    pub const fn new(position: Coord2) -> Self {
        Self {
            color: Color::Empty,
            occupied: false,
            position,
        }
    }

    pub const fn color(&self) -> Color {
        self.color
    }

    pub const fn is_occupied(&self) -> bool {
        self.occupied
    }

    pub const fn position(&self) -> Coord2 {
        self.position
    }

    /// Puts a piece on an unoccupied cell. Returns whether anything changed.
    pub(crate) fn place(&mut self, color: Color) -> bool {
        if self.occupied || !color.is_piece() {
            return false;
        }
        self.color = color;
        self.occupied = true;
        true
    }

    pub(crate) fn recolor(&mut self, color: Color) {
        debug_assert!(self.occupied, "only placed pieces can be flipped");
        debug_assert!(color.is_piece());
        self.color = color;
    }
}
