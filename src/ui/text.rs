use std::io::{self, Write};

use crate::config::DisplayConfig;
use crate::game::{Board, MoveError, COLS, ROWS};

/// Render the grid in the classic pipe-and-dash form: one line per row with
/// cells fenced by `|`, then a dashed footer as wide as the board.
pub fn render_board(board: &Board, display: &DisplayConfig) -> String {
    let mut lines = Vec::with_capacity(ROWS + 1);
    for row in 0..ROWS {
        let cells: Vec<&str> = (0..COLS)
            .map(|col| display.symbol(board.get(row, col)))
            .collect();
        lines.push(format!("|{}|", cells.join("|")));
    }
    lines.push("-".repeat(2 * COLS + 1));
    lines.join("\n")
}

/// Play a game on stdout/stdin: print the board, read 1-based column
/// numbers line by line, stop on a win, a full board, `q`, or EOF.
pub fn run(display: &DisplayConfig) -> io::Result<()> {
    let stdin = io::stdin();
    let mut board = Board::new();
    let mut input = String::new();

    println!("Connect Four: two players, one keyboard.");
    println!("Enter a column number (1-{COLS}) to drop a piece, or q to quit.");

    loop {
        println!();
        println!("{}", render_board(&board, display));

        if let Some(winner) = board.winner() {
            println!("{} wins!", winner.name());
            return Ok(());
        }
        if board.is_full() {
            println!("The board is full. Nobody wins.");
            return Ok(());
        }

        let mover = board.current_player();
        print!(
            "{} ({}) to move. Column (1-{COLS}): ",
            mover.name(),
            display.symbol(mover.to_cell())
        );
        io::stdout().flush()?;

        input.clear();
        if stdin.read_line(&mut input)? == 0 {
            // EOF ends the session
            println!();
            return Ok(());
        }
        let entry = input.trim();
        if entry.is_empty() {
            continue;
        }
        if entry.eq_ignore_ascii_case("q") {
            return Ok(());
        }

        let column = match entry.parse::<usize>() {
            Ok(n) if n >= 1 => n - 1,
            _ => {
                println!("enter a column number between 1 and {COLS}, or q to quit");
                continue;
            }
        };

        match board.apply_move(column) {
            Ok(()) => {
                tracing::debug!(column, player = mover.name(), "move applied");
            }
            Err(MoveError::InvalidMove { .. }) => {
                println!("column {} is not a legal move", column + 1);
            }
            Err(MoveError::GameAlreadyOver) => {
                println!("the game is already over");
            }
        }
    }
}
