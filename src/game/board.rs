/// Default board height used when no dimensions are given.
pub const DEFAULT_ROWS: usize = 6;
/// Default board width used when no dimensions are given.
pub const DEFAULT_COLUMNS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    /// Piece of the first seat, drawn as `o`.
    Ring,
    /// Piece of the second seat, drawn as `*`.
    Star,
}

/// A rows x columns grid of cells. Row 0 is the top, row `rows - 1` the bottom.
///
/// The board performs no range validation of its dimensions; callers build
/// it from already-validated configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board
    pub fn new(rows: usize, columns: usize) -> Self {
        Board {
            rows,
            columns,
            cells: vec![Cell::Empty; rows * columns],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Get the cell at a specific position
    pub fn get(&self, row: usize, col: usize) -> Cell {
        debug_assert!(
            row < self.rows && col < self.columns,
            "cell ({row}, {col}) outside {}x{} board",
            self.rows,
            self.columns
        );
        self.cells[row * self.columns + col]
    }

    /// A column is playable if it exists and its top cell is still empty
    pub fn is_column_playable(&self, col: usize) -> bool {
        col < self.columns && self.get(0, col) == Cell::Empty
    }

    /// Drop a piece in a column, returns the row where it landed.
    ///
    /// # Panics
    ///
    /// Panics if the column is not playable. Callers check
    /// [`Board::is_column_playable`] first.
    pub fn drop_piece(&mut self, col: usize, cell: Cell) -> usize {
        assert!(
            self.is_column_playable(col),
            "drop into unplayable column {col}"
        );

        // Lowest empty row; the playable check guarantees one exists.
        let row = (0..self.rows)
            .rev()
            .find(|&row| self.get(row, col) == Cell::Empty)
            .unwrap_or(0);
        self.cells[row * self.columns + col] = cell;
        row
    }

    /// The board is full once every column's top cell is taken
    pub fn is_full(&self) -> bool {
        (0..self.columns).all(|col| self.get(0, col) != Cell::Empty)
    }

    /// Iterate over the playable columns, left to right.
    pub fn playable_columns(&self) -> impl Iterator<Item = usize> + '_ {
        (0..self.columns).filter(|&col| self.is_column_playable(col))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS, DEFAULT_COLUMNS)
    }
}

#[cfg(test)]
impl Board {
    /// Build a board from rows drawn top to bottom with `.` for empty, `o`
    /// and `*` for pieces. Pieces are dropped bottom-up, so floating pieces
    /// are rejected.
    pub(crate) fn from_picture(picture: &[&str]) -> Board {
        let rows = picture.len();
        let columns = picture[0].len();
        let mut board = Board::new(rows, columns);
        for col in 0..columns {
            let mut open = false;
            for row in (0..rows).rev() {
                let cell = match picture[row].as_bytes()[col] {
                    b'.' => Cell::Empty,
                    b'o' => Cell::Ring,
                    b'*' => Cell::Star,
                    other => panic!("unknown cell {:?}", other as char),
                };
                if cell == Cell::Empty {
                    open = true;
                    continue;
                }
                assert!(!open, "floating piece at ({row}, {col})");
                board.drop_piece(col, cell);
            }
        }
        board
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(5, 9);
        assert_eq!(board.rows(), 5);
        assert_eq!(board.columns(), 9);
        for row in 0..5 {
            for col in 0..9 {
                assert_eq!(board.get(row, col), Cell::Empty);
            }
        }
    }

    #[test]
    fn test_drop_piece() {
        let mut board = Board::default();

        let row = board.drop_piece(3, Cell::Ring);
        assert_eq!(row, 5); // Should land at bottom
        assert_eq!(board.get(5, 3), Cell::Ring);

        let row = board.drop_piece(3, Cell::Star);
        assert_eq!(row, 4); // On top of the first piece
        assert_eq!(board.get(4, 3), Cell::Star);
    }

    #[test]
    fn test_drops_fill_upward() {
        let mut board = Board::new(7, 5);
        for expected in (0..7).rev() {
            assert_eq!(board.drop_piece(2, Cell::Star), expected);
        }
        assert!(!board.is_column_playable(2));
    }

    #[test]
    fn test_column_playable() {
        let mut board = Board::default();
        assert!(board.is_column_playable(0));
        assert!(board.is_column_playable(6));
        assert!(!board.is_column_playable(7));

        for _ in 0..6 {
            board.drop_piece(0, Cell::Ring);
        }
        assert!(!board.is_column_playable(0));
        assert_eq!(board.playable_columns().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    #[should_panic(expected = "unplayable column")]
    fn test_drop_into_full_column_panics() {
        let mut board = Board::new(5, 5);
        for _ in 0..6 {
            board.drop_piece(1, Cell::Ring);
        }
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "outside 6x7 board")]
    fn test_get_rejects_column_past_edge() {
        let mut board = Board::default();
        board.drop_piece(0, Cell::Ring);
        board.get(4, 7);
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new(5, 5);
        for col in 0..5 {
            assert!(!board.is_full());
            for _ in 0..5 {
                board.drop_piece(col, Cell::Ring);
            }
        }
        assert!(board.is_full());
        assert_eq!(board.playable_columns().count(), 0);
    }

    #[test]
    fn test_from_picture() {
        let board = Board::from_picture(&[
            ".....",
            ".....",
            ".....",
            "*....",
            "o*..o",
        ]);
        assert_eq!(board.get(4, 0), Cell::Ring);
        assert_eq!(board.get(3, 0), Cell::Star);
        assert_eq!(board.get(4, 1), Cell::Star);
        assert_eq!(board.get(4, 4), Cell::Ring);
        assert_eq!(board.get(3, 4), Cell::Empty);
    }
}
