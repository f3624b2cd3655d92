use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;
use ndarray::Array2;
use serde::Serialize;

use crate::*;

/// A private copy of the board with the legal moves of one player marked for display.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct HintBoard {
    board: Board,
    player: Color,
    marks: Array2<bool>,
    moves: Vec<Coord2>,
}

impl HintBoard {
    pub fn player(&self) -> Color {
        self.player
    }

    /// Hinted positions in row-major order.
    pub fn moves(&self) -> &[Coord2] {
        &self.moves
    }

    pub fn is_hinted(&self, coords: Coord2) -> bool {
        self.marks.get(coords.to_nd_index()).copied().unwrap_or(false)
    }

    /// Whether the player has no legal move at all.
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn render(&self) -> String {
        self.to_string()
    }
}

/// Same layout as [`Board`], hinted cells show the player's glyph.
impl fmt::Display for HintBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.board.write_grid(f, |cell| {
            if self.marks[cell.position().to_nd_index()] {
                self.player
            } else {
                cell.color()
            }
        })
    }
}

impl Board {
    /// Empty cells where `player` would capture, in row-major order.
    pub fn legal_moves(&self, player: Color) -> impl Iterator<Item = Coord2> + '_ {
        self.cells()
            .filter(|cell| cell.color() == Color::Empty)
            .map(Cell::position)
            .filter(move |&coords| self.can_capture(coords, player))
    }

    pub fn has_legal_move(&self, player: Color) -> bool {
        self.legal_moves(player).next().is_some()
    }

    /// Marks every legal move of `player` on a copy of this board.
    ///
    /// Captures are checked against this board, which is never modified.
    pub fn hints(&self, player: Color) -> HintBoard {
        let board = self.clone();
        let moves: Vec<Coord2> = self.legal_moves(player).collect();

        let mut marks = Array2::default((self.size(), self.size()).to_nd_index());
        for &coords in &moves {
            marks[coords.to_nd_index()] = true;
        }

        log::debug!("{} legal moves for {:?}", moves.len(), player);
        HintBoard {
            board,
            player,
            marks,
            moves,
        }
    }
}
