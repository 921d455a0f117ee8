//! Text rendering of boards and results.

use tictactoe::{Board, Cell, GameState, Outcome, Position};

/// Formats the board with empty cells numbered 1-9.
pub fn board(board: &Board) -> String {
    let mut result = String::new();
    for row in 0..3 {
        let cells: Vec<String> = (0..3)
            .filter_map(|col| Position::from_row_col(row, col))
            .map(|pos| match board.get(pos) {
                Cell::Empty => (pos.to_index() + 1).to_string(),
                Cell::Occupied(symbol) => symbol.to_string(),
            })
            .collect();
        result.push_str(&format!(" {} \n", cells.join(" | ")));
        if row < 2 {
            result.push_str("---+---+---\n");
        }
    }
    result
}

/// Lists the cell numbers still open, e.g. `"1, 3, 9"`.
pub fn open_cells(state: &GameState) -> String {
    state
        .legal_moves()
        .iter()
        .map(|m| (m.index() + 1).to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// End-of-game message.
pub fn announcement(outcome: Outcome) -> String {
    match outcome {
        Outcome::Won(symbol) => format!("Congratulations {}, you won!", symbol),
        Outcome::Draw => "It's a tie!".to_string(),
        Outcome::InProgress => "The game is still going.".to_string(),
    }
}

/// Welcome text shown before the first prompt.
pub const BANNER: &str = "\
Welcome to tic-tac-toe!
Take turns placing X and O on the 3x3 grid. Three in a row wins.
Enter a cell number (1-9) or a name like \"center\". Type \"undo\" to take
back your last move or \"quit\" to leave.
";
