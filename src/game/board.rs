use crate::error::MoveError;

use super::player::Player;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Win-scan directions as (row, col) steps: horizontal, vertical, diagonal
/// down-right, diagonal down-left. The order is part of the contract of
/// [`Board::winner`].
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    White,
    Black,
}

impl Cell {
    /// The player occupying this cell, if any
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::White => Some(Player::White),
            Cell::Black => Some(Player::Black),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
    turn: Player,
}

impl Board {
    /// Create a new empty board; White moves first
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
            turn: Player::White,
        }
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row 5 is the bottom
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// The player entitled to make the next move
    pub fn current_player(&self) -> Player {
        self.turn
    }

    /// Check if a column is full (out-of-range columns count as full)
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.cells[0][col] != Cell::Empty
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    /// Columns that can still take a piece, in ascending order
    pub fn legal_moves(&self) -> Vec<usize> {
        (0..COLS).filter(|&col| !self.is_column_full(col)).collect()
    }

    /// Drop the current player's piece into a column.
    ///
    /// The piece settles in the lowest empty cell of the column and the turn
    /// passes to the other player. Column legality is checked before the
    /// game-over state, so an illegal column is reported as
    /// [`MoveError::InvalidMove`] even on a decided game. Nothing is mutated
    /// when an error is returned.
    pub fn apply_move(&mut self, column: usize) -> Result<(), MoveError> {
        if self.is_column_full(column) {
            return Err(MoveError::InvalidMove { column });
        }

        if self.winner().is_some() {
            return Err(MoveError::GameAlreadyOver);
        }

        // Find the lowest empty row in this column
        for row in (0..ROWS).rev() {
            if self.cells[row][column] == Cell::Empty {
                self.cells[row][column] = self.turn.to_cell();
                self.turn = self.turn.other();
                return Ok(());
            }
        }

        unreachable!("column passed the fullness check but has no empty cell");
    }

    /// The player with four pieces in a straight line, if any.
    ///
    /// Recomputed from the grid on every call; nothing is cached. Lines are
    /// scanned one direction at a time (horizontal, vertical, diagonal
    /// down-right, diagonal down-left), top to bottom and left to right
    /// within each direction, and the owner of the first complete line found
    /// is reported. Sequential play cannot produce two winners, but a
    /// hand-built grid holding both resolves deterministically by that scan
    /// order.
    pub fn winner(&self) -> Option<Player> {
        for dir in DIRECTIONS {
            for row in 0..ROWS {
                for col in 0..COLS {
                    if let Some(player) = self.line_at(row, col, dir) {
                        return Some(player);
                    }
                }
            }
        }
        None
    }

    /// Check for four equal pieces starting at (row, col) and stepping by `dir`
    fn line_at(&self, row: usize, col: usize, dir: (isize, isize)) -> Option<Player> {
        let first = self.cells[row][col];
        let player = first.player()?;
        let (dr, dc) = dir;

        for step in 1..4 {
            let r = row as isize + step * dr;
            let c = col as isize + step * dc;
            if r < 0 || r >= ROWS as isize || c < 0 || c >= COLS as isize {
                return None;
            }
            if self.cells[r as usize][c as usize] != first {
                return None;
            }
        }

        Some(player)
    }

    /// Build a board from raw cells for testing (states unreachable through
    /// play included)
    #[cfg(test)]
    pub(crate) fn from_cells(cells: [[Cell; COLS]; ROWS], turn: Player) -> Self {
        Board { cells, turn }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(board: &mut Board, columns: &[usize]) {
        for &col in columns {
            board.apply_move(col).unwrap();
        }
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for row in 0..ROWS {
            for col in 0..COLS {
                assert_eq!(board.get(row, col), Cell::Empty);
            }
        }
        assert_eq!(board.current_player(), Player::White);
        assert_eq!(board.winner(), None);
        assert_eq!(board.legal_moves(), vec![0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_gravity_stacks_pieces() {
        let mut board = Board::new();

        // First piece lands at the bottom of column 3
        board.apply_move(3).unwrap();
        assert_eq!(board.get(5, 3), Cell::White);

        // Second piece lands on top of the first
        board.apply_move(3).unwrap();
        assert_eq!(board.get(4, 3), Cell::Black);
        assert_eq!(board.get(5, 3), Cell::White);

        board.apply_move(3).unwrap();
        assert_eq!(board.get(3, 3), Cell::White);
    }

    #[test]
    fn test_turn_alternates() {
        let mut board = Board::new();
        assert_eq!(board.current_player(), Player::White);

        for (n, &col) in [3, 4, 3, 4, 3].iter().enumerate() {
            board.apply_move(col).unwrap();
            let expected = if (n + 1) % 2 == 0 {
                Player::White
            } else {
                Player::Black
            };
            assert_eq!(board.current_player(), expected, "after {} moves", n + 1);
        }
    }

    #[test]
    fn test_legal_moves_excludes_full_column() {
        let mut board = Board::new();
        play(&mut board, &[2; 6]);

        assert!(board.is_column_full(2));
        assert_eq!(board.legal_moves(), vec![0, 1, 3, 4, 5, 6]);
    }

    #[test]
    fn test_move_in_full_column_rejected_without_mutation() {
        let mut board = Board::new();
        play(&mut board, &[2; 6]);

        let before = board;
        assert_eq!(
            board.apply_move(2),
            Err(MoveError::InvalidMove { column: 2 })
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_out_of_range_column_rejected() {
        let mut board = Board::new();
        assert_eq!(
            board.apply_move(7),
            Err(MoveError::InvalidMove { column: 7 })
        );
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_move_after_win_rejected_without_mutation() {
        let mut board = Board::new();
        // White completes a horizontal line on the bottom row
        play(&mut board, &[0, 0, 1, 1, 2, 2, 3]);
        assert_eq!(board.winner(), Some(Player::White));

        let before = board;
        assert_eq!(board.apply_move(4), Err(MoveError::GameAlreadyOver));
        assert_eq!(board, before);
    }

    #[test]
    fn test_illegal_column_reported_before_game_over() {
        let mut board = Board::new();
        play(&mut board, &[0, 0, 1, 1, 2, 2, 3]);
        assert_eq!(board.winner(), Some(Player::White));

        // An out-of-range column on a decided game is still an invalid move
        assert_eq!(
            board.apply_move(9),
            Err(MoveError::InvalidMove { column: 9 })
        );
    }

    #[test]
    fn test_horizontal_win() {
        let mut board = Board::new();
        play(&mut board, &[0, 0, 1, 1, 2, 2, 3]);

        // White holds (5,0) through (5,3)
        for col in 0..4 {
            assert_eq!(board.get(5, col), Cell::White);
        }
        assert_eq!(board.winner(), Some(Player::White));
    }

    #[test]
    fn test_vertical_win() {
        let mut board = Board::new();
        play(&mut board, &[0, 3, 1, 3, 0, 3, 1, 3]);

        // Black holds (5,3) through (2,3)
        for row in 2..6 {
            assert_eq!(board.get(row, 3), Cell::Black);
        }
        assert_eq!(board.winner(), Some(Player::Black));
    }

    #[test]
    fn test_diagonal_down_right_win() {
        let mut board = Board::new();
        // White builds (2,0), (3,1), (4,2), (5,3); Black fills below,
        // spare White moves are parked in column 6.
        play(&mut board, &[3, 0, 6, 0, 6, 0, 0, 1, 6, 1, 1, 2]);
        assert_eq!(board.winner(), None);

        board.apply_move(2).unwrap();
        assert_eq!(board.get(2, 0), Cell::White);
        assert_eq!(board.get(3, 1), Cell::White);
        assert_eq!(board.get(4, 2), Cell::White);
        assert_eq!(board.get(5, 3), Cell::White);
        assert_eq!(board.winner(), Some(Player::White));
    }

    #[test]
    fn test_diagonal_down_left_win() {
        let mut board = Board::new();
        // Mirror image: White builds (2,3), (3,2), (4,1), (5,0)
        play(&mut board, &[0, 3, 6, 3, 6, 3, 3, 2, 6, 2, 2, 1]);
        assert_eq!(board.winner(), None);

        board.apply_move(1).unwrap();
        assert_eq!(board.get(2, 3), Cell::White);
        assert_eq!(board.get(3, 2), Cell::White);
        assert_eq!(board.get(4, 1), Cell::White);
        assert_eq!(board.get(5, 0), Cell::White);
        assert_eq!(board.winner(), Some(Player::White));
    }

    #[test]
    fn test_three_in_a_row_is_not_a_win() {
        let mut board = Board::new();
        // White: three across the bottom row
        play(&mut board, &[0, 0, 1, 1, 2]);
        assert_eq!(board.winner(), None);

        // White: three stacked in one column
        let mut board = Board::new();
        play(&mut board, &[3, 0, 3, 1, 3]);
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn test_no_empty_cell_below_a_piece() {
        let mut board = Board::new();
        play(&mut board, &[0, 1, 2, 3, 4, 5, 6, 0, 1, 2, 3, 4, 5, 6]);
        assert_eq!(board.winner(), None);

        for col in 0..COLS {
            let mut seen_piece = false;
            for row in 0..ROWS {
                match board.get(row, col) {
                    Cell::Empty => assert!(!seen_piece, "hole below a piece at ({row}, {col})"),
                    _ => seen_piece = true,
                }
            }
        }
    }

    #[test]
    fn test_double_win_resolves_by_scan_order() {
        let w = Cell::White;
        let b = Cell::Black;

        // White horizontal on the bottom row, Black vertical in column 6:
        // the horizontal direction is scanned first.
        let mut cells = [[Cell::Empty; COLS]; ROWS];
        for col in 0..4 {
            cells[5][col] = w;
        }
        for row in 2..6 {
            cells[row][6] = b;
        }
        let board = Board::from_cells(cells, Player::White);
        assert_eq!(board.winner(), Some(Player::White));

        // Direction order beats player order: a Black horizontal still wins
        // against a White vertical.
        let mut cells = [[Cell::Empty; COLS]; ROWS];
        for col in 3..7 {
            cells[0][col] = b;
        }
        for row in 2..6 {
            cells[row][0] = w;
        }
        let board = Board::from_cells(cells, Player::White);
        assert_eq!(board.winner(), Some(Player::Black));

        // Two horizontals: the row nearer the top is found first.
        let mut cells = [[Cell::Empty; COLS]; ROWS];
        for col in 0..4 {
            cells[5][col] = w;
        }
        for col in 2..6 {
            cells[2][col] = b;
        }
        let board = Board::from_cells(cells, Player::White);
        assert_eq!(board.winner(), Some(Player::Black));
    }

    #[test]
    fn test_full_winless_board_is_not_an_error() {
        // Two-row bands of alternating colors: full board, no line of four.
        let w = Cell::White;
        let b = Cell::Black;
        let cells = [
            [w, b, w, b, w, b, w],
            [w, b, w, b, w, b, w],
            [b, w, b, w, b, w, b],
            [b, w, b, w, b, w, b],
            [w, b, w, b, w, b, w],
            [w, b, w, b, w, b, w],
        ];
        let mut board = Board::from_cells(cells, Player::White);

        assert!(board.is_full());
        assert_eq!(board.winner(), None);
        assert_eq!(board.legal_moves(), Vec::<usize>::new());
        // A full board only yields the ordinary recoverable error
        assert_eq!(
            board.apply_move(3),
            Err(MoveError::InvalidMove { column: 3 })
        );
    }
}
