/// Single coordinate axis used for the board edge and positions.
pub type Coord = u8;

/// Count type used for piece counts and total-cell counts.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

/// One step `(d_row, d_col)` along a line of cells.
pub type Delta = (isize, isize);

pub trait ToNdIndex {
    type Output;
    fn to_nd_index(self) -> Self::Output;
}

impl ToNdIndex for Coord2 {
    type Output = [usize; 2];

    fn to_nd_index(self) -> Self::Output {
        [self.0.into(), self.1.into()]
    }
}

pub const fn mult(a: Coord, b: Coord) -> CellCount {
    let a = a as CellCount;
    let b = b as CellCount;
    a.saturating_mul(b)
}

/// The eight directions a capture can run in: N, S, E, W and the diagonals.
pub const DIRECTIONS: [Delta; 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Whether `(row, col)` lies on a `size`×`size` board.
pub const fn in_bounds(row: isize, col: isize, size: Coord) -> bool {
    let size = size as isize;
    row >= 0 && row < size && col >= 0 && col < size
}

/// Applies `delta` to `coords`, returning a value only when it remains on a `size`×`size` board.
pub fn apply_delta(coords: Coord2, delta: Delta, size: Coord) -> Option<Coord2> {
    let (row, col) = coords;
    let (d_row, d_col) = delta;

    let next_row = row.checked_add_signed(d_row.try_into().ok()?)?;
    if next_row >= size {
        return None;
    }

    let next_col = col.checked_add_signed(d_col.try_into().ok()?)?;
    if next_col >= size {
        return None;
    }

    Some((next_row, next_col))
}

/// Cells reached by stepping repeatedly from `origin` along `delta`, origin excluded.
///
/// Stops at the first step that leaves the board, so it never yields more than `size - 1` items.
#[derive(Clone, Debug)]
pub struct RayIter {
    current: Coord2,
    delta: Delta,
    size: Coord,
}

impl RayIter {
    pub(crate) fn new(origin: Coord2, delta: Delta, size: Coord) -> Self {
        Self {
            current: origin,
            delta,
            size,
        }
    }
}

impl Iterator for RayIter {
    type Item = Coord2;

    fn next(&mut self) -> Option<Self::Item> {
        let next = apply_delta(self.current, self.delta, self.size)?;
        self.current = next;
        Some(next)
    }
}
