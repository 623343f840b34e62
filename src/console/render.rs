use crate::game::{Board, Cell};

/// Character drawn for a cell.
pub fn cell_symbol(cell: Cell) -> char {
    match cell {
        Cell::Empty => ' ',
        Cell::Ring => 'o',
        Cell::Star => '*',
    }
}

/// Draw the board as text: 1-based column headers, one line per row with
/// vertical bars between cells, and a bottom border.
///
/// ```text
///  1 2 3 4 5
/// ║ ║ ║ ║ ║ ║
/// ║ ║o║*║ ║ ║
/// ╚═╩═╩═╩═╩═╝
/// ```
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();

    for col in 1..=board.columns() {
        out.push_str(&format!(" {col}"));
    }
    out.push('\n');

    for row in 0..board.rows() {
        for col in 0..board.columns() {
            out.push('║');
            out.push(cell_symbol(board.get(row, col)));
        }
        out.push_str("║\n");
    }

    out.push('╚');
    for _ in 1..board.columns() {
        out.push_str("═╩");
    }
    out.push_str("═╝\n");
    out
}
