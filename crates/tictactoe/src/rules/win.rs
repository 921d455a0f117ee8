//! Win detection logic for tic-tac-toe.

use crate::{Board, Cell, Position, Symbol};
use tracing::instrument;

/// The eight winning lines: rows, then columns, then diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the first line in [`LINES`] held entirely by one symbol.
///
/// On a board reachable through legal play at most one symbol can hold a
/// line. For any other board the scan order decides.
#[instrument(level = "trace")]
pub fn winning_line(board: &Board) -> Option<[Position; 3]> {
    LINES.into_iter().find(|&[a, b, c]| {
        let cell = board.get(a);
        cell != Cell::Empty && cell == board.get(b) && cell == board.get(c)
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(symbol)` if a symbol has three in a row,
/// `None` otherwise.
#[instrument(level = "trace")]
pub fn check_winner(board: &Board) -> Option<Symbol> {
    winning_line(board).and_then(|[a, _, _]| board.get(a).symbol())
}

/// Returns the lowest-index empty cell that would give `symbol` three in a row.
#[instrument(level = "trace")]
pub fn completing_position(board: &Board, symbol: Symbol) -> Option<Position> {
    board
        .empty_positions()
        .find(|&pos| LINES.iter().any(|line| completes(board, line, pos, symbol)))
}

fn completes(board: &Board, line: &[Position; 3], pos: Position, symbol: Symbol) -> bool {
    line.contains(&pos)
        && line
            .iter()
            .filter(|&&other| other != pos)
            .all(|&other| board.get(other) == Cell::Occupied(symbol))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = Board::new()
            .with(Position::TopLeft, Symbol::X)
            .with(Position::TopCenter, Symbol::X)
            .with(Position::TopRight, Symbol::X);
        assert_eq!(check_winner(&board), Some(Symbol::X));
        assert_eq!(winning_line(&board), Some(LINES[0]));
    }

    #[test]
    fn test_winner_diagonal() {
        let board = Board::new()
            .with(Position::TopLeft, Symbol::O)
            .with(Position::Center, Symbol::O)
            .with(Position::BottomRight, Symbol::O);
        assert_eq!(check_winner(&board), Some(Symbol::O));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = Board::new()
            .with(Position::TopLeft, Symbol::X)
            .with(Position::TopCenter, Symbol::X);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = Board::new()
            .with(Position::TopLeft, Symbol::X)
            .with(Position::TopCenter, Symbol::O)
            .with(Position::TopRight, Symbol::X);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_completing_position_finds_gap() {
        let board = Board::new()
            .with(Position::TopLeft, Symbol::X)
            .with(Position::BottomRight, Symbol::X);
        assert_eq!(
            completing_position(&board, Symbol::X),
            Some(Position::Center)
        );
        assert_eq!(completing_position(&board, Symbol::O), None);
    }

    #[test]
    fn test_completing_position_ignores_blocked_line() {
        let board = Board::new()
            .with(Position::TopLeft, Symbol::X)
            .with(Position::TopCenter, Symbol::X)
            .with(Position::TopRight, Symbol::O);
        assert_eq!(completing_position(&board, Symbol::X), None);
    }

    #[test]
    fn test_completing_position_prefers_lowest_index() {
        // X threatens both 2 (top row) and 6 (left column).
        let board = Board::new()
            .with(Position::TopLeft, Symbol::X)
            .with(Position::TopCenter, Symbol::X)
            .with(Position::MiddleLeft, Symbol::X);
        assert_eq!(
            completing_position(&board, Symbol::X),
            Some(Position::TopRight)
        );
    }
}
