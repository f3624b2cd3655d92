use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt;
use core::ops::Index;
use core::str::FromStr;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// The playing surface: a square grid of cells and the count of pieces on it.
///
/// `Clone` is the deep copy: the clone owns its own cell storage.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BoardRepr")]
pub struct Board {
    size: Coord,
    cells: Array2<Cell>,
    piece_count: CellCount,
}

/// Serialized form of [`Board`], checked before it becomes one.
#[derive(Deserialize)]
struct BoardRepr {
    size: Coord,
    cells: Array2<Cell>,
    piece_count: CellCount,
}

impl TryFrom<BoardRepr> for Board {
    type Error = GameError;

    fn try_from(repr: BoardRepr) -> Result<Self> {
        let size = GameConfig::new(repr.size)?.size();
        if repr.cells.dim() != (usize::from(size), usize::from(size)) {
            return Err(GameError::InvalidBoardShape);
        }

        let mut occupied: CellCount = 0;
        for ((row, col), cell) in repr.cells.indexed_iter() {
            let in_place = cell.position() == (row as Coord, col as Coord);
            if !in_place || cell.is_occupied() != cell.color().is_piece() {
                return Err(GameError::InconsistentBoard);
            }
            occupied += CellCount::from(cell.is_occupied());
        }
        if occupied != repr.piece_count {
            return Err(GameError::InconsistentBoard);
        }

        Ok(Self {
            size,
            cells: repr.cells,
            piece_count: repr.piece_count,
        })
    }
}

impl Board {
    /// Creates a board with the standard four-piece center: black on the upper-left to lower-right
    /// diagonal, white on the other.
    pub fn new(config: GameConfig) -> Self {
        let mut board = Self::empty(config);
        let half = config.size() / 2;

        for (coords, color) in [
            ((half - 1, half - 1), Color::Black),
            ((half - 1, half), Color::White),
            ((half, half - 1), Color::White),
            ((half, half), Color::Black),
        ] {
            board.place_piece(coords, color);
        }

        log::debug!("Created {0}x{0} board", config.size());
        board
    }

    fn empty(config: GameConfig) -> Self {
        let size = config.size();
        Self {
            size,
            cells: Array2::from_shape_fn((size, size).to_nd_index(), |(row, col)| {
                Cell::new((row as Coord, col as Coord))
            }),
            piece_count: 0,
        }
    }

    /// Builds a board from rows of glyphs (`B`, `W`, `-`).
    ///
    /// Spaces and `|` are ignored, so the output of [`Board::render`] is accepted as is. No center
    /// seeding happens, the rows describe the whole board.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self> {
        let size = Coord::try_from(rows.len()).map_err(|_| GameError::InvalidBoardShape)?;
        let mut board = Self::empty(GameConfig::new(size)?);

        for (row, line) in rows.iter().enumerate() {
            let mut glyphs = line
                .as_ref()
                .chars()
                .filter(|&c| !c.is_whitespace() && c != '|');
            for col in 0..size {
                let glyph = glyphs.next().ok_or(GameError::InvalidBoardShape)?;
                let color = Color::from_glyph(glyph).ok_or(GameError::InvalidColor)?;
                board.place_piece((row as Coord, col), color);
            }
            if glyphs.next().is_some() {
                return Err(GameError::InvalidBoardShape);
            }
        }

        Ok(board)
    }

    pub fn size(&self) -> Coord {
        self.size
    }

    pub fn total_cells(&self) -> CellCount {
        mult(self.size, self.size)
    }

    /// Number of occupied cells.
    pub fn piece_count(&self) -> CellCount {
        self.piece_count
    }

    pub fn contains(&self, (row, col): Coord2) -> bool {
        row < self.size && col < self.size
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if self.contains(coords) {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// Puts a `color` piece at `coords`.
    ///
    /// Out-of-bounds coordinates, occupied cells and [`Color::Empty`] are ignored and reported as
    /// [`PlaceOutcome::NoChange`]. No capture check happens here.
    pub fn place_piece(&mut self, coords: Coord2, color: Color) -> PlaceOutcome {
        if !self.contains(coords) {
            return PlaceOutcome::NoChange;
        }

        if self.cells[coords.to_nd_index()].place(color) {
            self.piece_count += 1;
            log::trace!("Placed {:?} at {:?}", color, coords);
            PlaceOutcome::Placed
        } else {
            PlaceOutcome::NoChange
        }
    }

    pub fn render(&self) -> String {
        self.to_string()
    }

    pub(crate) fn cells_mut(&mut self) -> &mut Array2<Cell> {
        &mut self.cells
    }

    /// Writes one line per row, `" |"`, then `" X"` per cell, then `" |"`.
    pub(crate) fn write_grid<F>(&self, f: &mut fmt::Formatter<'_>, color_of: F) -> fmt::Result
    where
        F: Fn(&Cell) -> Color,
    {
        for row in self.cells.rows() {
            f.write_str(" |")?;
            for cell in row {
                write!(f, " {}", color_of(cell))?;
            }
            f.write_str(" |\n")?;
        }
        Ok(())
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_grid(f, Cell::color)
    }
}

/// Parses the rendered form, blank lines are skipped.
impl FromStr for Board {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self> {
        let rows: Vec<&str> = s.lines().filter(|line| !line.trim().is_empty()).collect();
        Self::from_rows(rows.as_slice())
    }
}
