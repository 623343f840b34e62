use std::ops::{Index, IndexMut};

use super::board::Cell;
use super::evaluator::Outcome;

/// Points awarded to the winner of a session.
pub const WIN_POINTS: u32 = 2;
/// Points awarded to each player when a session is drawn.
pub const DRAW_POINTS: u32 = 1;

/// Which of the two players, independent of their names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    First,
    Second,
}

impl Seat {
    /// Get the other seat
    pub fn other(self) -> Seat {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }

    /// Convert seat to the piece it drops
    pub fn to_cell(self) -> Cell {
        match self {
            Seat::First => Cell::Ring,
            Seat::Second => Cell::Star,
        }
    }

    /// Owner of a piece, `None` for an empty cell
    pub fn from_cell(cell: Cell) -> Option<Seat> {
        match cell {
            Cell::Ring => Some(Seat::First),
            Cell::Star => Some(Seat::Second),
            Cell::Empty => None,
        }
    }

    /// Seat that opens the given 1-based session: odd sessions go to the
    /// first player, even sessions to the second.
    pub fn opening(session: u32) -> Seat {
        if session % 2 == 1 {
            Seat::First
        } else {
            Seat::Second
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub name: String,
    pub seat: Seat,
    /// Points accumulated over the match. Only ever increases.
    pub wins: u32,
}

impl Player {
    pub fn new(name: impl Into<String>, seat: Seat) -> Self {
        Player {
            name: name.into(),
            seat,
            wins: 0,
        }
    }

    pub fn piece(&self) -> Cell {
        self.seat.to_cell()
    }
}

/// Both players of a match, indexable by [`Seat`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Roster {
    players: [Player; 2],
}

impl Roster {
    pub fn new(first: impl Into<String>, second: impl Into<String>) -> Self {
        Roster {
            players: [
                Player::new(first, Seat::First),
                Player::new(second, Seat::Second),
            ],
        }
    }

    pub fn first(&self) -> &Player {
        &self.players[0]
    }

    pub fn second(&self) -> &Player {
        &self.players[1]
    }

    /// Credit the points a concluded session earns.
    ///
    /// A win is worth [`WIN_POINTS`] to the winner, a draw [`DRAW_POINTS`] to
    /// each player. Ongoing and aborted sessions award nothing.
    pub fn award(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win(seat) => self[seat].wins += WIN_POINTS,
            Outcome::Draw => {
                for player in &mut self.players {
                    player.wins += DRAW_POINTS;
                }
            }
            Outcome::Ongoing | Outcome::Aborted => {}
        }
    }
}

impl Index<Seat> for Roster {
    type Output = Player;

    fn index(&self, seat: Seat) -> &Player {
        match seat {
            Seat::First => &self.players[0],
            Seat::Second => &self.players[1],
        }
    }
}

impl IndexMut<Seat> for Roster {
    fn index_mut(&mut self, seat: Seat) -> &mut Player {
        match seat {
            Seat::First => &mut self.players[0],
            Seat::Second => &mut self.players[1],
        }
    }
}
