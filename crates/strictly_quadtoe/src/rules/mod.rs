//! Win rules for four-by-four tic-tac-toe.
//!
//! Evaluation is driven by the last move: only patterns that pass through the
//! moved-to cell are inspected, in a fixed priority order, and the first one
//! that completes wins. Rules are pure functions over a borrowed board.
//!
//! Priority:
//!
//! 1. the move's row
//! 2. the move's column
//! 3. the principal diagonal, only for moves on it
//! 4. the secondary diagonal, only for moves on it
//! 5. the four corners, only for moves on a corner
//! 6. the 2×2 boxes having the move as one of their corners

pub mod corners;
pub mod draw;
pub mod line;
pub mod square;

pub use draw::{is_draw, is_full};

use super::board::{Board, Coord};
use super::evaluation::{EvaluationResult, MatchedCell};
use super::types::CellState;
use tracing::{debug, instrument};

/// Checks whether the mark at `coord` completes a winning pattern.
///
/// The state under test is whatever occupies `coord`. An empty or off-board
/// coordinate never wins.
#[instrument(skip(board), fields(size = board.size()))]
pub fn evaluate(board: &Board, coord: Coord) -> EvaluationResult {
    let state = match board.get(coord) {
        Some(state) if !state.is_empty() => state,
        _ => return EvaluationResult::no_win(),
    };

    let result = line::row(board, coord, state)
        .or_else(|| line::column(board, coord, state))
        .or_else(|| line::principal_diagonal(board, coord, state))
        .or_else(|| line::secondary_diagonal(board, coord, state))
        .or_else(|| corners::four_corners(board, coord, state))
        .or_else(|| square::any_box(board, coord, state));

    match result {
        Some(result) => {
            debug!(pattern = ?result.pattern(), %state, "Pattern completed");
            result
        }
        None => EvaluationResult::no_win(),
    }
}

/// Collects the given coordinates as matched cells if every one of them is on
/// the board and holds `state`.
pub(crate) fn all_match(
    board: &Board,
    coords: impl IntoIterator<Item = Coord>,
    state: CellState,
) -> Option<Vec<MatchedCell>> {
    coords
        .into_iter()
        .map(|coord| {
            (board.get(coord) == Some(state))
                .then(|| MatchedCell::new(coord.row, coord.column, state))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::WinPattern;

    fn place(board: &mut Board, cells: &[(usize, usize)], state: CellState) {
        for &(row, column) in cells {
            board.set(Coord::new(row, column), state);
        }
    }

    #[test]
    fn test_empty_cell_never_wins() {
        let board = Board::new(4);
        assert!(!evaluate(&board, Coord::new(0, 0)).has_won());
    }

    #[test]
    fn test_row_takes_priority_over_box() {
        let mut board = Board::new(4);
        place(
            &mut board,
            &[(0, 0), (0, 1), (0, 2), (0, 3), (1, 0), (1, 1)],
            CellState::Cross,
        );
        let result = evaluate(&board, Coord::new(0, 1));
        assert_eq!(result.pattern(), Some(WinPattern::Row(0)));
    }

    #[test]
    fn test_evaluate_does_not_mutate_board() {
        let mut board = Board::new(4);
        place(&mut board, &[(0, 0), (1, 1), (2, 2), (3, 3)], CellState::Circle);
        let before = board.clone();
        let result = evaluate(&board, Coord::new(2, 2));
        assert!(result.has_won());
        assert_eq!(board, before);
    }

    #[test]
    fn test_no_win_has_no_cells() {
        let mut board = Board::new(4);
        place(&mut board, &[(0, 0), (0, 1), (0, 2)], CellState::Cross);
        let result = evaluate(&board, Coord::new(0, 2));
        assert!(!result.has_won());
        assert!(result.matched_cells().is_empty());
        assert_eq!(result.pattern(), None);
    }
}
