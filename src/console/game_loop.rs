use std::io::Write;

use tracing::info;

use super::input::{Command, MoveSource};
use super::render::render_board;
use super::setup::MatchSetup;
use crate::config::Dimensions;
use crate::error::ConsoleError;
use crate::game::{Board, Outcome, Roster, Seat, TurnController};

/// Result of a whole match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchReport {
    /// One entry per session played, in order. An aborted session is the
    /// last entry.
    pub outcomes: Vec<Outcome>,
    pub roster: Roster,
}

/// A series of sessions between the same two players on boards of the same
/// size. Owns the roster and credits it after every session.
pub struct Match {
    roster: Roster,
    dimensions: Dimensions,
    games: u32,
}

impl Match {
    pub fn new(setup: MatchSetup) -> Self {
        Match {
            roster: setup.roster,
            dimensions: setup.dimensions,
            games: setup.games,
        }
    }

    /// Play every session, reading moves from `input` and writing the
    /// transcript to `out`. Ending a session stops the whole match.
    pub fn play<S: MoveSource, W: Write>(
        mut self,
        input: &mut S,
        out: &mut W,
    ) -> Result<MatchReport, ConsoleError> {
        writeln!(
            out,
            "{} VS {}",
            self.roster.first().name,
            self.roster.second().name
        )?;
        writeln!(out, "{} board", self.dimensions)?;
        if self.games == 1 {
            writeln!(out, "Single game")?;
        } else {
            writeln!(out, "Total {} games", self.games)?;
        }
        info!(games = self.games, dimensions = %self.dimensions, "match started");

        let mut outcomes = Vec::new();
        for session in 1..=self.games {
            if self.games > 1 {
                writeln!(out, "Game #{session}")?;
            }
            let outcome = self.play_session(session, input, out)?;
            outcomes.push(outcome);
            info!(session, ?outcome, "session finished");

            if outcome == Outcome::Aborted {
                break;
            }
            if self.games > 1 {
                writeln!(out, "Score")?;
                writeln!(
                    out,
                    "{}: {} {}: {}",
                    self.roster.first().name,
                    self.roster.first().wins,
                    self.roster.second().name,
                    self.roster.second().wins
                )?;
            }
        }

        writeln!(out, "Game over!")?;
        out.flush()?;
        Ok(MatchReport {
            outcomes,
            roster: self.roster,
        })
    }

    fn play_session<S: MoveSource, W: Write>(
        &mut self,
        session: u32,
        input: &mut S,
        out: &mut W,
    ) -> Result<Outcome, ConsoleError> {
        let board = Board::new(self.dimensions.rows, self.dimensions.columns);
        let mut controller = TurnController::for_session(board, session);
        write!(out, "{}", render_board(controller.board()))?;

        while let Some(seat) = controller.active() {
            writeln!(out, "{}'s turn:", self.roster[seat].name)?;
            out.flush()?;

            let command = input.next_command()?;
            let Some(mv) = command.to_move() else {
                writeln!(out, "Incorrect column number")?;
                continue;
            };

            match controller.apply(mv, &mut self.roster) {
                Ok(outcome) => {
                    if matches!(command, Command::Column(_)) {
                        write!(out, "{}", render_board(controller.board()))?;
                    }
                    self.announce(outcome, out)?;
                }
                Err(err) => writeln!(out, "{err}")?,
            }
        }

        Ok(controller.outcome())
    }

    fn announce<W: Write>(&self, outcome: Outcome, out: &mut W) -> Result<(), ConsoleError> {
        match outcome {
            Outcome::Win(seat) => writeln!(out, "Player {} won", self.name(seat))?,
            Outcome::Draw => writeln!(out, "It is a draw")?,
            Outcome::Ongoing | Outcome::Aborted => {}
        }
        Ok(())
    }

    fn name(&self, seat: Seat) -> &str {
        &self.roster[seat].name
    }
}
