use crate::config::Dimensions;
use crate::game::{Board, Move, MoveError, Outcome, Roster, TurnController};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;
use tracing::info;

/// Full-screen match: the same sessions, scoring and rules as the text
/// console, driven by the keyboard.
pub struct App {
    roster: Roster,
    dimensions: Dimensions,
    games: u32,
    session: u32,
    controller: TurnController,
    selected_column: usize,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(roster: Roster, dimensions: Dimensions, games: u32) -> Self {
        App {
            controller: new_session(dimensions, 1),
            roster,
            dimensions,
            games,
            session: 1,
            selected_column: dimensions.columns / 2, // Start in middle
            should_quit: false,
            message: None,
        }
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn controller(&self) -> &TurnController {
        &self.controller
    }

    pub fn session(&self) -> u32 {
        self.session
    }

    pub fn selected_column(&self) -> usize {
        self.selected_column
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            terminal
                .draw(|f| self.render(f))
                .map_err(Into::<io::Error>::into)?;

            if self.should_quit {
                break;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < self.dimensions.columns {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.apply(Move::Drop(self.selected_column));
            }
            KeyCode::Char(c @ '1'..='9') => {
                let column = c as usize - '1' as usize;
                if column < self.dimensions.columns {
                    self.selected_column = column;
                }
                self.apply(Move::Drop(column));
            }
            KeyCode::Char('e') => {
                self.apply(Move::End);
            }
            KeyCode::Char('n') => {
                self.next_session();
            }
            _ => {}
        }
    }

    fn apply(&mut self, mv: Move) {
        match self.controller.apply(mv, &mut self.roster) {
            Ok(Outcome::Ongoing) => {}
            Ok(outcome) => {
                info!(session = self.session, ?outcome, "session finished");
                self.message = Some(self.conclusion_message(outcome));
            }
            Err(MoveError::SessionOver) => {
                self.message = Some(self.closing_hint());
            }
            Err(err) => {
                self.message = Some(err.to_string());
            }
        }
    }

    fn conclusion_message(&self, outcome: Outcome) -> String {
        let result = match outcome {
            Outcome::Win(seat) => format!("Player {} won", self.roster[seat].name),
            Outcome::Draw => "It is a draw".to_string(),
            Outcome::Aborted => "Game ended".to_string(),
            Outcome::Ongoing => String::new(),
        };
        format!("{result}. {}", self.closing_hint())
    }

    fn has_next_session(&self) -> bool {
        self.controller.outcome() != Outcome::Aborted && self.session < self.games
    }

    fn closing_hint(&self) -> String {
        if self.has_next_session() {
            format!("Press 'n' for game #{}", self.session + 1)
        } else {
            "Game over! Press 'q' to quit.".to_string()
        }
    }

    fn next_session(&mut self) {
        if !self.controller.is_concluded() || !self.has_next_session() {
            return;
        }
        self.session += 1;
        self.controller = new_session(self.dimensions, self.session);
        self.selected_column = self.dimensions.columns / 2;
        self.message = Some(format!("Game #{}", self.session));
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        let game_label = if self.games == 1 {
            "Single game".to_string()
        } else {
            format!("Game {} of {}", self.session, self.games)
        };
        super::game_view::render(
            frame,
            &self.controller,
            &self.roster,
            self.selected_column,
            &self.message,
            &game_label,
        );
    }
}

fn new_session(dimensions: Dimensions, session: u32) -> TurnController {
    TurnController::for_session(Board::new(dimensions.rows, dimensions.columns), session)
}
