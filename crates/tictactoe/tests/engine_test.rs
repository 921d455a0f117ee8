//! Tests for the board engine through the public API.

use std::collections::HashSet;
use tictactoe::{
    Board, GameInvariants, GameState, IllegalMoveError, InvariantSet, Move, Outcome, Position,
    Symbol, apply, legal_moves, terminal_status,
};

fn play(first: Symbol, cells: &[usize]) -> Result<GameState, IllegalMoveError> {
    let mut state = GameState::new(first);
    for &idx in cells {
        state = apply(&state, Move::at_index(idx, state.to_move())?)?;
    }
    Ok(state)
}

/// Every distinct state reachable from an empty board.
fn reachable(first: Symbol) -> Vec<GameState> {
    let mut seen = HashSet::<Board>::new();
    let mut stack = vec![GameState::new(first)];
    let mut out = Vec::new();
    while let Some(state) = stack.pop() {
        if !seen.insert(*state.board()) {
            continue;
        }
        for action in legal_moves(&state) {
            stack.push(apply(&state, action).expect("legal move"));
        }
        out.push(state);
    }
    out
}

fn transpose(pos: Position) -> Position {
    Position::from_row_col(pos.col(), pos.row()).expect("on board")
}

fn rotate(pos: Position) -> Position {
    Position::from_row_col(pos.col(), 2 - pos.row()).expect("on board")
}

#[test]
fn test_scenario_top_row() {
    let state = play(Symbol::X, &[0, 4, 1, 7, 2]).expect("legal game");
    assert_eq!(state.outcome(), Outcome::Won(Symbol::X));
    assert_eq!(
        state.winning_line(),
        Some([Position::TopLeft, Position::TopCenter, Position::TopRight])
    );
}

#[test]
fn test_scenario_left_column_then_rejects_moves() {
    let state = play(Symbol::X, &[0, 1, 3, 4, 6]).expect("legal game");
    assert_eq!(state.outcome(), Outcome::Won(Symbol::X));
    assert!(legal_moves(&state).is_empty());

    for pos in state.board().empty_positions() {
        for symbol in [Symbol::X, Symbol::O] {
            assert_eq!(
                apply(&state, Move::new(symbol, pos)),
                Err(IllegalMoveError::GameOver)
            );
        }
    }
}

#[test]
fn test_full_board_without_line_is_draw() {
    // X O X / X O O / O X X
    let state = play(Symbol::X, &[0, 1, 2, 4, 3, 5, 7, 6, 8]).expect("legal game");
    assert_eq!(state.outcome(), Outcome::Draw);
    assert!(legal_moves(&state).is_empty());
}

#[test]
fn test_nine_move_sequence_completing_diagonal_is_a_win() {
    // X:0,O:1,X:2,O:3,X:4,O:5,X:7,O:6,X:8 fills the board, but X's last
    // move completes 0-4-8, so the win takes precedence over the draw.
    let state = play(Symbol::X, &[0, 1, 2, 3, 4, 5, 7, 6, 8]).expect("legal game");
    assert_eq!(state.outcome(), Outcome::Won(Symbol::X));
    assert_eq!(
        state.winning_line(),
        Some([Position::TopLeft, Position::Center, Position::BottomRight])
    );
}

#[test]
fn test_o_cannot_open_when_x_starts() {
    let state = GameState::new(Symbol::X);
    assert_eq!(
        apply(&state, Move::new(Symbol::O, Position::Center)),
        Err(IllegalMoveError::WrongTurn(Symbol::O))
    );
}

#[test]
fn test_out_of_range_index_rejected() {
    assert_eq!(
        Move::at_index(9, Symbol::X),
        Err(IllegalMoveError::OutOfRange(9))
    );
}

#[test]
fn test_replay_matches_step_by_step() {
    let moves = [
        Move::new(Symbol::O, Position::Center),
        Move::new(Symbol::X, Position::TopLeft),
        Move::new(Symbol::O, Position::BottomRight),
    ];
    let replayed = GameState::replay(Symbol::O, &moves).expect("legal replay");
    let stepped = play(Symbol::O, &[4, 0, 8]).expect("legal game");
    assert_eq!(replayed, stepped);
    assert_eq!(replayed.history(), &moves);
}

#[test]
fn test_replay_stops_at_first_illegal_move() {
    let moves = [
        Move::new(Symbol::X, Position::Center),
        Move::new(Symbol::O, Position::Center),
    ];
    assert_eq!(
        GameState::replay(Symbol::X, &moves),
        Err(IllegalMoveError::CellOccupied(Position::Center))
    );
}

#[test]
fn test_reachable_state_count() {
    // Well-known count of distinct legal positions, empty board included.
    assert_eq!(reachable(Symbol::X).len(), 5478);
}

#[test]
fn test_every_reachable_state_keeps_invariants() {
    for first in [Symbol::X, Symbol::O] {
        for state in reachable(first) {
            let leads = state.board().count(first) as isize;
            let trails = state.board().count(first.opponent()) as isize;
            assert!(
                (0..=1).contains(&(leads - trails)),
                "{:?}",
                state.board()
            );
            assert_eq!(state.board().filled(), state.history().len());
            assert!(GameInvariants::check_all(&state).is_ok());
            assert_eq!(state.is_terminal(), legal_moves(&state).is_empty());
        }
    }
}

#[test]
fn test_terminal_states_reject_everything() {
    for state in reachable(Symbol::X).into_iter().filter(GameState::is_terminal) {
        for pos in Position::ALL {
            for symbol in [Symbol::X, Symbol::O] {
                assert_eq!(
                    apply(&state, Move::new(symbol, pos)),
                    Err(IllegalMoveError::GameOver)
                );
            }
        }
    }
}

#[test]
fn test_terminal_status_is_idempotent() {
    for state in reachable(Symbol::X) {
        let first = terminal_status(&state);
        assert_eq!(terminal_status(&state), first);
        assert_eq!(state.outcome(), first);
    }
}

#[test]
fn test_terminal_status_symmetric_under_transpose_and_rotation() {
    for state in reachable(Symbol::X) {
        for transform in [transpose, rotate] {
            let mapped: Vec<Move> = state
                .history()
                .iter()
                .map(|m| Move::new(m.symbol, transform(m.position)))
                .collect();
            let image = GameState::replay(state.first(), &mapped).expect("image is legal");
            assert_eq!(terminal_status(&image), terminal_status(&state));
        }
    }
}

#[test]
fn test_undo_walks_back_to_start() {
    let mut state = play(Symbol::X, &[4, 0, 8, 2, 1]).expect("legal game");
    let mut steps = 0;
    while let Some(previous) = state.undo() {
        assert_eq!(previous.history(), &state.history()[..state.history().len() - 1]);
        state = previous;
        steps += 1;
    }
    assert_eq!(steps, 5);
    assert_eq!(state, GameState::new(Symbol::X));
}

#[test]
fn test_state_serializes_to_json() {
    let state = play(Symbol::X, &[4]).expect("legal game");
    let json = serde_json::to_value(&state).expect("serializable");
    assert_eq!(json["to_move"], "O");
    assert_eq!(json["outcome"], "InProgress");
    let back: GameState = serde_json::from_value(json).expect("deserializable");
    assert_eq!(back, state);
}
