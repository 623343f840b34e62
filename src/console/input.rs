use std::collections::VecDeque;
use std::io::BufRead;

use crate::error::ConsoleError;
use crate::game::Move;

/// One line of player input during a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// A 1-based column number as typed.
    Column(u64),
    End,
    Unrecognized,
}

impl Command {
    /// `end` (surrounding whitespace allowed) ends the session; a bare run of
    /// digits selects a column; anything else is unrecognized.
    pub fn parse(line: &str) -> Command {
        if line.trim() == "end" {
            return Command::End;
        }
        if line.is_empty() || !line.bytes().all(|b| b.is_ascii_digit()) {
            return Command::Unrecognized;
        }
        // Too many digits for u64 is still just a column that doesn't exist.
        Command::Column(line.parse().unwrap_or(u64::MAX))
    }

    /// Translate to a controller move. Column 0 and columns too large for
    /// the platform map to an index no board has, so they are rejected as
    /// out of range.
    pub fn to_move(self) -> Option<Move> {
        match self {
            Command::Column(number) => {
                let index = usize::try_from(number)
                    .ok()
                    .and_then(|n| n.checked_sub(1))
                    .unwrap_or(usize::MAX);
                Some(Move::Drop(index))
            }
            Command::End => Some(Move::End),
            Command::Unrecognized => None,
        }
    }
}

/// Where a session's moves come from. Blocks until the next one is available.
pub trait MoveSource {
    fn next_command(&mut self) -> Result<Command, ConsoleError>;
}

/// Reads one answer per line from any buffered reader.
pub struct LineInput<R> {
    reader: R,
}

impl<R: BufRead> LineInput<R> {
    pub fn new(reader: R) -> Self {
        LineInput { reader }
    }

    /// Read one line without its line terminator.
    ///
    /// `waiting_for` names what was asked for and is reported if the input
    /// ends first.
    pub fn read_line(&mut self, waiting_for: &str) -> Result<String, ConsoleError> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Err(ConsoleError::InputClosed(waiting_for.to_string()));
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(line)
    }
}

impl<R: BufRead> MoveSource for LineInput<R> {
    fn next_command(&mut self) -> Result<Command, ConsoleError> {
        self.read_line("a move").map(|line| Command::parse(&line))
    }
}

/// Replays a fixed list of commands, then reports the input as closed.
#[derive(Debug, Clone, Default)]
pub struct Scripted {
    commands: VecDeque<Command>,
}

impl Scripted {
    pub fn new(commands: impl IntoIterator<Item = Command>) -> Self {
        Scripted {
            commands: commands.into_iter().collect(),
        }
    }

    /// Script of column selections, 1-based.
    pub fn columns(columns: impl IntoIterator<Item = u64>) -> Self {
        Self::new(columns.into_iter().map(Command::Column))
    }
}

impl MoveSource for Scripted {
    fn next_command(&mut self) -> Result<Command, ConsoleError> {
        self.commands
            .pop_front()
            .ok_or_else(|| ConsoleError::InputClosed("a move".to_string()))
    }
}
