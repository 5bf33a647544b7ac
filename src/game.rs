use crate::{
    board::Board,
    common::{BoardError, Cell, MoveOutcome, Phase, Player, RejectReason, StateError},
    config::{WinLine, CELL_COUNT},
};
use log::{debug, trace};

/// Copy of everything an adapter needs to draw the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub board: [Cell; CELL_COUNT],
    pub current_player: Player,
    pub phase: Phase,
    pub winning_line: Option<WinLine>,
}

impl GameState {
    /// The state of a fresh game.
    pub fn initial() -> Self {
        GameState {
            board: [Cell::Empty; CELL_COUNT],
            current_player: Player::X,
            phase: Phase::InProgress,
            winning_line: None,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}

#[cfg(feature = "std")]
impl GameState {
    /// Encode the snapshot with bincode for handing to an adapter.
    pub fn encode(&self) -> Result<std::vec::Vec<u8>, bincode::Error> {
        bincode::serialize(self)
    }

    /// Decode a snapshot produced by [`GameState::encode`].
    pub fn decode(bytes: &[u8]) -> Result<Self, bincode::Error> {
        bincode::deserialize(bytes)
    }
}

/// Result of [`GameEngine::apply_move`]: what happened plus the state after it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct MoveResult {
    pub outcome: MoveOutcome,
    pub state: GameState,
}

/// Rules engine owning the board, the turn and the game phase.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameEngine {
    board: Board,
    current_player: Player,
    phase: Phase,
    winning_line: Option<WinLine>,
}

impl GameEngine {
    /// Create an engine with an empty board and X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            phase: Phase::InProgress,
            winning_line: None,
        }
    }

    /// Immutable reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Row-major cell contents.
    pub fn cells(&self) -> [Cell; CELL_COUNT] {
        self.board.cells()
    }

    /// Player to move while in progress; the winner once won.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// The line that decided the game, set only when won.
    pub fn winning_line(&self) -> Option<WinLine> {
        self.winning_line
    }

    pub fn is_draw(&self) -> bool {
        self.phase == Phase::Draw
    }

    /// Number of marks placed since the last reset.
    pub fn moves_made(&self) -> usize {
        self.board.occupied()
    }

    /// Try to place the current player's mark on `cell_index`.
    ///
    /// Invalid input is never an error: the move is rejected with a reason
    /// and the state is left exactly as it was.
    pub fn apply_move(&mut self, cell_index: i64) -> MoveResult {
        let outcome = match self.try_move(cell_index) {
            Ok(()) => MoveOutcome::Accepted,
            Err(reason) => {
                trace!("rejected move {}: {}", cell_index, reason);
                MoveOutcome::Rejected(reason)
            }
        };
        MoveResult {
            outcome,
            state: self.state(),
        }
    }

    fn try_move(&mut self, cell_index: i64) -> Result<(), RejectReason> {
        if self.phase.is_terminal() {
            return Err(RejectReason::GameOver);
        }
        let index = usize::try_from(cell_index)
            .ok()
            .filter(|&idx| idx < CELL_COUNT)
            .ok_or(RejectReason::OutOfRange)?;
        self.board
            .place(index, self.current_player)
            .map_err(|e| match e {
                BoardError::CellOccupied => RejectReason::CellOccupied,
                _ => RejectReason::OutOfRange,
            })?;
        debug!("{} takes cell {}", self.current_player, index);
        self.evaluate();
        Ok(())
    }

    /// Decide the phase after the current player's move. Only the mover's
    /// lines are checked: the board changed by one of their marks.
    fn evaluate(&mut self) {
        let mover = self.current_player;
        if let Some(line) = self.board.winning_line(mover) {
            self.phase = Phase::Won;
            self.winning_line = Some(line);
            debug!("{} wins on {:?}", mover, line);
        } else if self.board.is_full() {
            self.phase = Phase::Draw;
            debug!("board full, game drawn");
        } else {
            self.current_player = mover.other();
        }
    }

    /// Restore the initial state.
    pub fn reset(&mut self) {
        self.board.clear();
        self.current_player = Player::X;
        self.phase = Phase::InProgress;
        self.winning_line = None;
        debug!("game reset");
    }

    /// Generate a snapshot of the current state.
    pub fn state(&self) -> GameState {
        GameState {
            board: self.board.cells(),
            current_player: self.current_player,
            phase: self.phase,
            winning_line: self.winning_line,
        }
    }

    /// Rebuild an engine from a snapshot, refusing states that legal play
    /// from an empty board could not reach.
    pub fn from_state(state: GameState) -> Result<Self, StateError> {
        let board = Board::from_cells(&state.board);
        let x = board.count(Player::X);
        let o = board.count(Player::O);
        if x != o && x != o + 1 {
            return Err(StateError::MarkCount { x, o });
        }
        // X moves first, so X moved last whenever it holds more marks
        let last_mover = if x > o { Player::X } else { Player::O };
        let x_line = board.winning_line(Player::X);
        let o_line = board.winning_line(Player::O);

        match state.phase {
            Phase::InProgress => {
                if state.winning_line.is_some() {
                    return Err(StateError::WinningLine);
                }
                if x_line.is_some() || o_line.is_some() || board.is_full() {
                    return Err(StateError::Outcome);
                }
                let expected = last_mover.other();
                if x + o == 0 && state.current_player != Player::X {
                    return Err(StateError::WrongTurn {
                        expected: Player::X,
                        found: state.current_player,
                    });
                }
                if x + o > 0 && state.current_player != expected {
                    return Err(StateError::WrongTurn {
                        expected,
                        found: state.current_player,
                    });
                }
            }
            Phase::Won => {
                let line = state.winning_line.ok_or(StateError::WinningLine)?;
                if x + o == 0 {
                    return Err(StateError::Outcome);
                }
                if state.current_player != last_mover {
                    return Err(StateError::WrongTurn {
                        expected: last_mover,
                        found: state.current_player,
                    });
                }
                let (own, theirs) = match last_mover {
                    Player::X => (x_line, o_line),
                    Player::O => (o_line, x_line),
                };
                if theirs.is_some() {
                    return Err(StateError::Outcome);
                }
                if own != Some(line) {
                    return Err(StateError::WinningLine);
                }
            }
            Phase::Draw => {
                if state.winning_line.is_some() {
                    return Err(StateError::WinningLine);
                }
                if !board.is_full() || x_line.is_some() || o_line.is_some() {
                    return Err(StateError::Outcome);
                }
                if state.current_player != last_mover {
                    return Err(StateError::WrongTurn {
                        expected: last_mover,
                        found: state.current_player,
                    });
                }
            }
        }

        Ok(Self {
            board,
            current_player: state.current_player,
            phase: state.phase,
            winning_line: state.winning_line,
        })
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
