//! Win and draw detection over a whole board.
//!
//! Every maximal line in the four scan directions is walked looking for a run
//! of [`WIN_LENGTH`] or more identical pieces. Directions are scanned in a
//! fixed order (rows top to bottom, columns left to right, then both
//! diagonal orientations) and the first run found decides the result, so a
//! malformed board holding runs for both seats reports whichever comes first.

use tracing::instrument;

use super::board::{Board, Cell};
use super::player::Seat;

/// Pieces in a row needed to win. Longer runs win as well.
pub const WIN_LENGTH: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Ongoing,
    Win(Seat),
    Draw,
    /// The session was ended from the input side before it concluded.
    Aborted,
}

impl Outcome {
    pub fn is_terminal(self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Horizontal,
    Vertical,
    /// Top-left to bottom-right, `\`
    DownRight,
    /// Top-right to bottom-left, `/`
    DownLeft,
}

impl Direction {
    pub const SCAN_ORDER: [Direction; 4] = [
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DownRight,
        Direction::DownLeft,
    ];

    /// Row and column step between neighbouring cells of a line.
    fn step(self) -> (usize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DownRight => (1, 1),
            Direction::DownLeft => (1, -1),
        }
    }

    /// First cell of every maximal line in this direction, in scan order.
    fn line_starts(self, rows: usize, columns: usize) -> Vec<(usize, usize)> {
        match self {
            Direction::Horizontal => (0..rows).map(|row| (row, 0)).collect(),
            Direction::Vertical => (0..columns).map(|col| (0, col)).collect(),
            Direction::DownRight => (0..rows)
                .map(|row| (row, 0))
                .chain((1..columns).map(|col| (0, col)))
                .collect(),
            Direction::DownLeft => (0..columns)
                .rev()
                .map(|col| (0, col))
                .chain((1..rows).map(|row| (row, columns.saturating_sub(1))))
                .collect(),
        }
    }
}

/// A run of identical pieces long enough to win.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinningLine {
    pub seat: Seat,
    pub direction: Direction,
    /// `(row, col)` of every cell in the run, in scan order.
    pub cells: Vec<(usize, usize)>,
}

/// Report whether a seat has won, the board is drawn, or play continues.
///
/// A winning run always takes precedence over a full board, so a move that
/// both completes four in a row and fills the last column is a win.
/// Never returns [`Outcome::Aborted`].
#[instrument(level = "trace", skip(board), fields(rows = board.rows(), columns = board.columns()))]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(line) = find_winning_line(board) {
        return Outcome::Win(line.seat);
    }
    if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::Ongoing
    }
}

/// Find the first winning run in scan order, if any.
pub fn find_winning_line(board: &Board) -> Option<WinningLine> {
    let (rows, columns) = (board.rows(), board.columns());
    for direction in Direction::SCAN_ORDER {
        for start in direction.line_starts(rows, columns) {
            let cells = walk(rows, columns, start, direction);
            if let Some(line) = scan_line(board, direction, cells) {
                return Some(line);
            }
        }
    }
    None
}

/// Cells from `start` to the board edge, stepping in `direction`.
fn walk(
    rows: usize,
    columns: usize,
    start: (usize, usize),
    direction: Direction,
) -> impl Iterator<Item = (usize, usize)> {
    let (dr, dc) = direction.step();
    std::iter::successors(Some(start), move |&(row, col)| {
        let row = row + dr;
        let col = col.checked_add_signed(dc)?;
        (row < rows && col < columns).then_some((row, col))
    })
}

fn scan_line(
    board: &Board,
    direction: Direction,
    cells: impl Iterator<Item = (usize, usize)>,
) -> Option<WinningLine> {
    let mut current = Cell::Empty;
    let mut run: Vec<(usize, usize)> = Vec::new();

    for (row, col) in cells {
        let cell = board.get(row, col);
        if cell == current && cell != Cell::Empty {
            run.push((row, col));
            continue;
        }
        if run.len() >= WIN_LENGTH {
            break;
        }
        current = cell;
        run.clear();
        if cell != Cell::Empty {
            run.push((row, col));
        }
    }

    if run.len() < WIN_LENGTH {
        return None;
    }
    Seat::from_cell(current).map(|seat| WinningLine {
        seat,
        direction,
        cells: run,
    })
}
