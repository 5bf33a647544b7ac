//! Common types for tic-tac-toe: marks, phases, move outcomes and errors.

use crate::bitboard::BitBoardError;
use core::fmt;

/// A player, identified by the mark they place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Player {
    /// Moves first.
    X,
    O,
}

impl Player {
    /// The player who moves after `self`.
    pub fn other(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

/// Contents of a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    /// The player owning this cell, if any.
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

/// Top-level state of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Phase {
    InProgress,
    /// Terminal: the current player completed a line.
    Won,
    /// Terminal: the board filled with no line completed.
    Draw,
}

impl Phase {
    /// Returns `true` for `Won` and `Draw`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Phase::InProgress)
    }
}

/// Why a move was refused. Rejected moves never change state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum RejectReason {
    /// The game has already been won or drawn.
    GameOver,
    /// The target cell already holds a mark.
    CellOccupied,
    /// The cell index is not in `0..9`.
    OutOfRange,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::GameOver => write!(f, "game is over"),
            RejectReason::CellOccupied => write!(f, "cell is already occupied"),
            RejectReason::OutOfRange => write!(f, "cell index is out of range"),
        }
    }
}

/// Whether `apply_move` changed the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum MoveOutcome {
    Accepted,
    Rejected(RejectReason),
}

impl MoveOutcome {
    pub fn is_accepted(self) -> bool {
        matches!(self, MoveOutcome::Accepted)
    }

    /// The rejection reason, if the move was refused.
    pub fn rejection(self) -> Option<RejectReason> {
        match self {
            MoveOutcome::Accepted => None,
            MoveOutcome::Rejected(reason) => Some(reason),
        }
    }
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying bitboard error.
    BitBoardError(BitBoardError),
    /// Cell index is outside the board.
    OutOfRange,
    /// Cell already holds a mark.
    CellOccupied,
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        match err {
            BitBoardError::IndexOutOfBounds { .. } => BoardError::OutOfRange,
            other => BoardError::BitBoardError(other),
        }
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::BitBoardError(e) => write!(f, "BitBoard error: {}", e),
            BoardError::OutOfRange => write!(f, "Cell index is out of range"),
            BoardError::CellOccupied => write!(f, "Cell is already occupied"),
        }
    }
}

/// Errors returned when rebuilding an engine from a snapshot that could not
/// have been produced by legal play.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    /// X must have the same number of marks as O, or exactly one more.
    MarkCount { x: usize, o: usize },
    /// The player to move disagrees with the mark counts.
    WrongTurn { expected: Player, found: Player },
    /// A winning line is present without a win, or missing from one.
    WinningLine,
    /// The phase disagrees with what the board shows.
    Outcome,
}

impl fmt::Display for StateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateError::MarkCount { x, o } => {
                write!(f, "Impossible mark counts: {} X against {} O", x, o)
            }
            StateError::WrongTurn { expected, found } => {
                write!(f, "Expected {} to move, snapshot says {}", expected, found)
            }
            StateError::WinningLine => write!(f, "Winning line does not match phase"),
            StateError::Outcome => write!(f, "Phase does not match board contents"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}

#[cfg(feature = "std")]
impl std::error::Error for StateError {}
