use serde::{Deserialize, Serialize};

use crate::*;

/// Valid transitions:
/// - InProgress -> Finished (board filled)
/// - InProgress -> Forfeited (player to move quits)
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionState {
    InProgress,
    Finished(Winner),
    Forfeited { winner: Winner },
}

impl SessionState {
    pub const fn is_finished(self) -> bool {
        !matches!(self, Self::InProgress)
    }

    pub const fn winner(self) -> Option<Winner> {
        match self {
            Self::InProgress => None,
            Self::Finished(winner) => Some(winner),
            Self::Forfeited { winner } => Some(winner),
        }
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::InProgress
    }
}

/// Result of an accepted move.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PlayOutcome {
    pub flipped: CellCount,
    pub state: SessionState,
}

/// A two-player game from the first move to the result.
///
/// Player 1 picks a color, player 2 gets the other one. Black always moves first.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SessionRepr")]
pub struct GameSession {
    board: Board,
    first_player: Color,
    to_move: Color,
    turn: u32,
    state: SessionState,
}

#[derive(Deserialize)]
struct SessionRepr {
    board: Board,
    first_player: Color,
    to_move: Color,
    turn: u32,
    state: SessionState,
}

impl TryFrom<SessionRepr> for GameSession {
    type Error = GameError;

    fn try_from(repr: SessionRepr) -> Result<Self> {
        if !repr.first_player.is_piece() || !repr.to_move.is_piece() {
            return Err(GameError::InvalidColor);
        }
        if matches!(repr.state, SessionState::Finished(_)) != repr.board.is_game_over() {
            return Err(GameError::InconsistentBoard);
        }

        Ok(Self {
            board: repr.board,
            first_player: repr.first_player,
            to_move: repr.to_move,
            turn: repr.turn,
            state: repr.state,
        })
    }
}

impl GameSession {
    pub fn new(config: GameConfig, first_player: Color) -> Result<Self> {
        if !first_player.is_piece() {
            return Err(GameError::InvalidColor);
        }

        log::debug!("Player 1 is {:?}", first_player);
        Ok(Self {
            board: Board::new(config),
            first_player,
            to_move: Color::Black,
            turn: 0,
            state: Default::default(),
        })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state.is_finished()
    }

    /// Number of moves and passes made so far.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    pub fn current_color(&self) -> Color {
        self.to_move
    }

    /// Color of player 1.
    pub fn first_player(&self) -> Color {
        self.first_player
    }

    /// Seat number, 1 or 2, of the player holding `color`.
    pub fn seat_of(&self, color: Color) -> u8 {
        if color == self.first_player { 1 } else { 2 }
    }

    pub fn current_seat(&self) -> u8 {
        self.seat_of(self.to_move)
    }

    /// Places a piece for the player to move and flips what it captures.
    ///
    /// The move must be on the board, on an empty cell and capture at least one piece.
    pub fn play(&mut self, coords: Coord2) -> Result<PlayOutcome> {
        self.check_in_progress()?;
        let coords = self.board.validate_coords(coords)?;

        if self.board[coords].is_occupied() {
            return Err(GameError::Occupied);
        }

        let player = self.to_move;
        if !self.board.can_capture(coords, player) {
            return Err(GameError::IllegalMove);
        }

        let placed = self.board.place_piece(coords, player);
        debug_assert!(placed.has_update());
        let flipped = self.board.apply_flips(coords, player);
        log::debug!(
            "Turn {}: {:?} played {:?}, flipped {}",
            self.turn,
            player,
            coords,
            flipped
        );
        self.advance();

        if self.board.is_game_over() {
            let winner = self.board.winner();
            log::debug!("Board full, winner: {:?}", winner);
            self.state = SessionState::Finished(winner);
        }

        Ok(PlayOutcome {
            flipped,
            state: self.state,
        })
    }

    /// Hands the turn to the other player.
    ///
    /// Passing never ends the game, even when neither player has a legal move left.
    pub fn pass(&mut self) -> Result<()> {
        self.check_in_progress()?;

        if !self.board.has_legal_move(Color::Black) && !self.board.has_legal_move(Color::White) {
            log::warn!(
                "Neither player can move with {} empty cells left, the game only ends on a full board",
                self.board.total_cells() - self.board.piece_count()
            );
        }

        log::debug!("Turn {}: {:?} passed", self.turn, self.to_move);
        self.advance();
        Ok(())
    }

    /// Legal moves of the player to move, on a copy of the board.
    pub fn hints(&self) -> HintBoard {
        self.board.hints(self.to_move)
    }

    /// The player to move quits, the other one wins.
    pub fn forfeit(&mut self) -> Result<Winner> {
        self.check_in_progress()?;

        let winner = self
            .to_move
            .opponent()
            .and_then(Winner::from_color)
            .ok_or(GameError::InvalidColor)?;
        log::debug!("{:?} forfeited", self.to_move);
        self.state = SessionState::Forfeited { winner };
        Ok(winner)
    }

    fn advance(&mut self) {
        if let Some(next) = self.to_move.opponent() {
            self.to_move = next;
        }
        self.turn += 1;
    }

    fn check_in_progress(&self) -> Result<()> {
        if self.state.is_finished() {
            Err(GameError::AlreadyEnded)
        } else {
            Ok(())
        }
    }
}
