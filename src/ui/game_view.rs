use crate::game::{find_winning_line, Board, Cell, Outcome, Roster, Seat, TurnController};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(
    frame: &mut Frame,
    controller: &TurnController,
    roster: &Roster,
    selected_column: usize,
    message: &Option<String>,
    game_label: &str,
) {
    let board_height = controller.board().rows() as u16 + 4;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Header
            Constraint::Min(board_height),    // Board
            Constraint::Length(3),            // Message
            Constraint::Length(3),            // Score
            Constraint::Length(3),            // Controls
        ])
        .split(frame.area());

    render_header(frame, controller, roster, game_label, chunks[0]);
    render_board(frame, controller, selected_column, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_score(frame, roster, chunks[3]);
    render_controls(frame, chunks[4]);
}

fn seat_color(seat: Seat) -> Color {
    match seat {
        Seat::First => Color::Red,
        Seat::Second => Color::Yellow,
    }
}

fn render_header(
    frame: &mut Frame,
    controller: &TurnController,
    roster: &Roster,
    game_label: &str,
    area: Rect,
) {
    let (status, color) = match controller.active() {
        Some(seat) => (
            format!("{}'s turn  |  {}", roster[seat].name, game_label),
            seat_color(seat),
        ),
        None => (format!("Game Over  |  {}", game_label), Color::White),
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Connect Four"),
        );

    frame.render_widget(header, area);
}

fn render_board(frame: &mut Frame, controller: &TurnController, selected_column: usize, area: Rect) {
    let board = controller.board();
    let columns = board.columns();
    let selecting = !controller.is_concluded();
    let winning_cells = match controller.outcome() {
        Outcome::Win(_) => find_winning_line(board).map(|line| line.cells).unwrap_or_default(),
        _ => Vec::new(),
    };

    let mut lines = Vec::new();

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")]; // Padding (3 chars to match "  ║")
    for col in 0..columns {
        if selecting && col == selected_column {
            col_line.push(Span::styled(
                format!(" {} ", col + 1),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(format!(" {} ", col + 1)));
        }
    }
    col_line.push(Span::raw("  ")); // Suffix padding to match " ║"
    lines.push(Line::from(col_line));

    let rule = "═".repeat(columns * 3 + 1);
    lines.push(Line::from(format!("  ╔{rule}╗")));

    for row in 0..board.rows() {
        let mut row_spans = vec![Span::raw("  ║")];

        for col in 0..columns {
            let mut span = cell_span(board, row, col);
            if winning_cells.contains(&(row, col)) {
                span = span.patch_style(Style::default().add_modifier(Modifier::REVERSED));
            }
            row_spans.push(span);
        }

        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  ╚{rule}╝")));

    if selecting {
        let mut indicator_line = vec![Span::raw("   ")];
        for col in 0..columns {
            if col == selected_column {
                indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
            } else {
                indicator_line.push(Span::raw("   "));
            }
        }
        indicator_line.push(Span::raw("  "));
        lines.push(Line::from(indicator_line));
    }

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn cell_span(board: &Board, row: usize, col: usize) -> Span<'static> {
    match board.get(row, col) {
        Cell::Empty => Span::styled(" . ", Style::default().fg(Color::DarkGray)),
        cell => {
            let color = Seat::from_cell(cell).map_or(Color::DarkGray, seat_color);
            Span::styled(" ● ", Style::default().fg(color))
        }
    }
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_score(frame: &mut Frame, roster: &Roster, area: Rect) {
    let entry = |seat: Seat| {
        let player = &roster[seat];
        Span::styled(
            format!("{}: {}", player.name, player.wins),
            Style::default()
                .fg(seat_color(seat))
                .add_modifier(Modifier::BOLD),
        )
    };
    let line = Line::from(vec![entry(Seat::First), Span::raw("   "), entry(Seat::Second)]);

    let score = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Score"));

    frame.render_widget(score, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let line = Line::from(
        "←/→: Move  |  Enter/1-9: Drop  |  E: End game  |  N: Next game  |  Q: Quit",
    );

    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Controls"),
        );

    frame.render_widget(controls, area);
}
