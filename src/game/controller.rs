use std::fmt;

use tracing::debug;

use super::board::Board;
use super::evaluator::{evaluate, Outcome};
use super::player::{Roster, Seat};

/// What the acting player asked for on their turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Move {
    /// Drop a piece into a 0-based column.
    Drop(usize),
    /// End the session immediately.
    End,
}

/// A move that was refused. The session state is unchanged and the same
/// player is asked again.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    OutOfRange { columns: usize },
    /// `column` is 1-based, as the player typed it.
    ColumnFull { column: usize },
    SessionOver,
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::OutOfRange { columns } => {
                write!(f, "The column number is out of range (1 - {columns})")
            }
            MoveError::ColumnFull { column } => write!(f, "Column {column} is full"),
            MoveError::SessionOver => write!(f, "The game is already over"),
        }
    }
}

impl std::error::Error for MoveError {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    AwaitingMove(Seat),
    Concluded(Outcome),
}

/// Runs one session: alternates the acting seat, applies drops and
/// re-evaluates the board after each one.
#[derive(Debug, Clone)]
pub struct TurnController {
    board: Board,
    phase: Phase,
    moves_played: usize,
}

impl TurnController {
    pub fn new(board: Board, starting: Seat) -> Self {
        TurnController {
            board,
            phase: Phase::AwaitingMove(starting),
            moves_played: 0,
        }
    }

    /// Controller for the given 1-based session of a match; the opening
    /// seat alternates between sessions.
    pub fn for_session(board: Board, session: u32) -> Self {
        Self::new(board, Seat::opening(session))
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Seat whose turn it is, `None` once the session has concluded
    pub fn active(&self) -> Option<Seat> {
        match self.phase {
            Phase::AwaitingMove(seat) => Some(seat),
            Phase::Concluded(_) => None,
        }
    }

    pub fn outcome(&self) -> Outcome {
        match self.phase {
            Phase::AwaitingMove(_) => Outcome::Ongoing,
            Phase::Concluded(outcome) => outcome,
        }
    }

    pub fn is_concluded(&self) -> bool {
        matches!(self.phase, Phase::Concluded(_))
    }

    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    /// Apply a move for the active seat.
    ///
    /// A drop into a playable column switches the active seat and
    /// re-evaluates the board. When that concludes the session, the roster is
    /// credited for the result. [`Move::End`] concludes the session as
    /// [`Outcome::Aborted`] without touching the board or the roster.
    ///
    /// Rejected moves leave everything unchanged. Once concluded, every move
    /// is rejected with [`MoveError::SessionOver`] and the outcome is kept.
    pub fn apply(&mut self, mv: Move, roster: &mut Roster) -> Result<Outcome, MoveError> {
        let seat = match self.phase {
            Phase::AwaitingMove(seat) => seat,
            Phase::Concluded(_) => return Err(MoveError::SessionOver),
        };

        let column = match mv {
            Move::End => {
                debug!(moves = self.moves_played, "session ended by player");
                self.phase = Phase::Concluded(Outcome::Aborted);
                return Ok(Outcome::Aborted);
            }
            Move::Drop(column) => column,
        };

        if column >= self.board.columns() {
            return Err(MoveError::OutOfRange {
                columns: self.board.columns(),
            });
        }
        if !self.board.is_column_playable(column) {
            return Err(MoveError::ColumnFull { column: column + 1 });
        }

        let row = self.board.drop_piece(column, seat.to_cell());
        self.moves_played += 1;
        debug!(?seat, row, column, "piece dropped");

        let outcome = evaluate(&self.board);
        self.phase = if outcome.is_terminal() {
            roster.award(outcome);
            debug!(?outcome, moves = self.moves_played, "session concluded");
            Phase::Concluded(outcome)
        } else {
            Phase::AwaitingMove(seat.other())
        };
        Ok(outcome)
    }
}
