use core::iter;

use crate::*;

impl Board {
    /// Walks from `start` along `delta` looking for a piece of `player`'s color.
    ///
    /// True when such a piece is reached before an empty cell or the board edge. `start` itself is
    /// inspected first. The walk takes at most `size` steps.
    pub fn scan_line(&self, start: Coord2, delta: Delta, player: Color) -> bool {
        if !self.contains(start) {
            return false;
        }

        let line = iter::once(start).chain(self.ray(start, delta));
        for coords in line.take(self.size().into()) {
            match self[coords].color() {
                Color::Empty => return false,
                color if color == player => return true,
                _ => continue,
            }
        }
        false
    }

    /// Whether placing `player` at `origin` captures along `delta`.
    ///
    /// Requires room for at least one opponent piece plus the closing piece, and the adjacent cell
    /// to hold the opponent. `origin` itself is not inspected.
    pub fn check_direction(&self, origin: Coord2, delta: Delta, player: Color) -> bool {
        let Some(opponent) = player.opponent() else {
            return false;
        };

        if !self.contains(origin) {
            return false;
        }

        let Some(neighbor) = apply_delta(origin, delta, self.size()) else {
            return false;
        };

        if apply_delta(neighbor, delta, self.size()).is_none() {
            return false;
        }

        if self[neighbor].color() != opponent {
            return false;
        }

        self.scan_line(neighbor, delta, player)
    }

    /// Directions in which placing `player` at `origin` would capture.
    pub fn capturing_directions(
        &self,
        origin: Coord2,
        player: Color,
    ) -> impl Iterator<Item = Delta> + '_ {
        DIRECTIONS
            .into_iter()
            .filter(move |&delta| self.check_direction(origin, delta, player))
    }

    /// Whether placing `player` at `origin` captures in any direction.
    pub fn can_capture(&self, origin: Coord2, player: Color) -> bool {
        self.capturing_directions(origin, player).next().is_some()
    }

    /// Flips every opponent run bracketed by a piece placed at `origin`.
    ///
    /// Each capturing direction is recolored from the neighbor outward up to the first `player`
    /// piece. Occupancy and the piece count are unchanged. Returns the number of flipped pieces.
    pub fn apply_flips(&mut self, origin: Coord2, player: Color) -> CellCount {
        let mut flipped: CellCount = 0;

        for delta in DIRECTIONS {
            if !self.check_direction(origin, delta, player) {
                continue;
            }

            for coords in self.ray(origin, delta) {
                let cell = &mut self.cells_mut()[coords.to_nd_index()];
                if cell.color() == player {
                    break;
                }
                cell.recolor(player);
                flipped += 1;
            }
            log::trace!("Flipped run from {:?} towards {:?}", origin, delta);
        }

        if flipped > 0 {
            log::debug!("{:?} at {:?} flipped {} pieces", player, origin, flipped);
        }
        flipped
    }

    fn ray(&self, origin: Coord2, delta: Delta) -> RayIter {
        RayIter::new(origin, delta, self.size())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    fn initial(size: Coord) -> Board {
        Board::new(GameConfig::new(size).unwrap())
    }

    fn rows(rows: &[&str]) -> Board {
        Board::from_rows(rows).unwrap()
    }

    #[test]
    fn scan_line_stops_at_own_piece_or_gap() {
        let board = rows(&["-WWB", "----", "-WW-", "----"]);

        assert!(board.scan_line((0, 1), (0, 1), Color::Black));
        assert!(!board.scan_line((2, 1), (0, 1), Color::Black));
        assert!(!board.scan_line((0, 0), (0, 1), Color::Black));
        assert!(!board.scan_line((2, 2), (0, 1), Color::Black));
    }

    #[test]
    fn check_direction_needs_adjacent_opponent() {
        let board = initial(4);

        assert!(board.check_direction((0, 2), (1, 0), Color::Black));
        assert!(!board.check_direction((0, 1), (1, 0), Color::Black));
        assert!(!board.check_direction((0, 1), (1, 1), Color::Black));
    }

    #[test]
    fn check_direction_needs_room_for_two_steps() {
        let board = rows(&["-WB-", "----", "----", "----"]);
        assert!(board.check_direction((0, 0), (0, 1), Color::Black));

        // Neighbor is opponent, but the line ends at the edge right after it.
        let board = rows(&["---W", "----", "----", "----"]);
        assert!(!board.check_direction((0, 2), (0, 1), Color::Black));
        assert!(!board.check_direction((0, 0), (0, -1), Color::Black));
    }

    #[test]
    fn non_piece_colors_never_capture() {
        let board = initial(4);
        for row in 0..4 {
            for col in 0..4 {
                assert!(!board.can_capture((row, col), Color::Empty));
            }
        }
    }

    #[test]
    fn out_of_bounds_origin_never_captures() {
        let board = initial(4);
        assert!(!board.can_capture((4, 4), Color::Black));
        assert!(!board.can_capture((0, 4), Color::White));
    }

    #[test]
    fn white_next_to_edge_is_rejected() {
        let board = initial(4);
        assert!(!board.can_capture((1, 3), Color::White));
    }

    #[test]
    fn black_above_mirrored_center_captures_down_the_column() {
        let mut board = rows(&["----", "-WB-", "-BW-", "----"]);
        assert!(board.can_capture((0, 1), Color::Black));

        board.place_piece((0, 1), Color::Black);
        let flipped = board.apply_flips((0, 1), Color::Black);

        assert_eq!(flipped, 1);
        assert_eq!(
            board.render(),
            " | - B - - |\n | - B B - |\n | - B W - |\n | - - - - |\n"
        );
        assert_eq!(board.piece_count(), 5);
    }

    #[test]
    fn flips_stop_at_first_own_piece() {
        let mut board = rows(&[
            "------",
            "-WWBWB",
            "------",
            "------",
            "------",
            "------",
        ]);
        board.place_piece((1, 0), Color::Black);
        let flipped = board.apply_flips((1, 0), Color::Black);

        assert_eq!(flipped, 2);
        assert_eq!(board.render().lines().nth(1), Some(" | B B B B W B |"));
    }

    #[test]
    fn flips_in_several_directions_at_once() {
        let mut board = rows(&[
            "B-B-B-",
            "-WWW--",
            "BW-WB-",
            "-WWW--",
            "B-B-B-",
            "------",
        ]);
        let directions: Vec<_> = board.capturing_directions((2, 2), Color::Black).collect();
        assert_eq!(directions.len(), 8);

        let count_before = board.piece_count();
        board.place_piece((2, 2), Color::Black);
        let flipped = board.apply_flips((2, 2), Color::Black);

        assert_eq!(flipped, 8);
        assert_eq!(board.piece_count(), count_before + 1);
        assert!(board.cells().all(|cell| cell.color() != Color::White));
    }

    #[test]
    fn apply_flips_without_capture_changes_nothing() {
        let mut board = initial(4);
        let before = board.clone();

        assert_eq!(board.apply_flips((1, 3), Color::White), 0);
        assert_eq!(board.apply_flips((0, 0), Color::Empty), 0);
        assert_eq!(board, before);
    }
}
