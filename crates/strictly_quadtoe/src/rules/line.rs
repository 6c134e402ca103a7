//! Straight-line rules: row, column and both diagonals.

use super::super::board::{Board, Coord};
use super::super::evaluation::{EvaluationResult, WinPattern};
use super::super::types::CellState;
use super::all_match;
use tracing::instrument;

/// Wins if every cell in the move's row holds `state`.
#[instrument(skip(board))]
pub fn row(board: &Board, coord: Coord, state: CellState) -> Option<EvaluationResult> {
    let cells = (0..board.size()).map(|column| Coord::new(coord.row, column));
    all_match(board, cells, state)
        .map(|matched| EvaluationResult::win(WinPattern::Row(coord.row), matched))
}

/// Wins if every cell in the move's column holds `state`.
#[instrument(skip(board))]
pub fn column(board: &Board, coord: Coord, state: CellState) -> Option<EvaluationResult> {
    let cells = (0..board.size()).map(|row| Coord::new(row, coord.column));
    all_match(board, cells, state)
        .map(|matched| EvaluationResult::win(WinPattern::Column(coord.column), matched))
}

/// Wins if the move lies on the principal diagonal and all of it holds `state`.
#[instrument(skip(board))]
pub fn principal_diagonal(
    board: &Board,
    coord: Coord,
    state: CellState,
) -> Option<EvaluationResult> {
    if !board.on_principal_diagonal(coord) {
        return None;
    }
    let cells = (0..board.size()).map(|i| Coord::new(i, i));
    all_match(board, cells, state)
        .map(|matched| EvaluationResult::win(WinPattern::PrincipalDiagonal, matched))
}

/// Wins if the move lies on the secondary diagonal and all of it holds `state`.
#[instrument(skip(board))]
pub fn secondary_diagonal(
    board: &Board,
    coord: Coord,
    state: CellState,
) -> Option<EvaluationResult> {
    if !board.on_secondary_diagonal(coord) {
        return None;
    }
    let last = board.size() - 1;
    let cells = (0..board.size()).map(|i| Coord::new(i, last - i));
    all_match(board, cells, state)
        .map(|matched| EvaluationResult::win(WinPattern::SecondaryDiagonal, matched))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(cells: &[(usize, usize)], state: CellState) -> Board {
        let mut board = Board::new(4);
        for &(row, column) in cells {
            board.set(Coord::new(row, column), state);
        }
        board
    }

    #[test]
    fn test_row_win_lists_cells_left_to_right() {
        let board = board_with(&[(2, 0), (2, 1), (2, 2), (2, 3)], CellState::Cross);
        let result = row(&board, Coord::new(2, 3), CellState::Cross).expect("row should win");
        let coords: Vec<_> = result.matched_cells().iter().map(|c| c.coord()).collect();
        assert_eq!(
            coords,
            vec![
                Coord::new(2, 0),
                Coord::new(2, 1),
                Coord::new(2, 2),
                Coord::new(2, 3)
            ]
        );
        assert!(result.matched_cells().iter().all(|c| c.matched));
    }

    #[test]
    fn test_row_blocked_by_opponent() {
        let mut board = board_with(&[(0, 0), (0, 1), (0, 3)], CellState::Cross);
        board.set(Coord::new(0, 2), CellState::Circle);
        assert!(row(&board, Coord::new(0, 0), CellState::Cross).is_none());
    }

    #[test]
    fn test_column_win() {
        let board = board_with(&[(0, 1), (1, 1), (2, 1), (3, 1)], CellState::Circle);
        let result =
            column(&board, Coord::new(0, 1), CellState::Circle).expect("column should win");
        assert_eq!(result.pattern(), Some(WinPattern::Column(1)));
        assert_eq!(result.matched_cells().len(), 4);
    }

    #[test]
    fn test_principal_diagonal_gated_on_locus() {
        let mut board = board_with(&[(0, 0), (1, 1), (2, 2), (3, 3)], CellState::Cross);
        board.set(Coord::new(0, 1), CellState::Cross);
        assert!(principal_diagonal(&board, Coord::new(0, 1), CellState::Cross).is_none());
        assert!(principal_diagonal(&board, Coord::new(3, 3), CellState::Cross).is_some());
    }

    #[test]
    fn test_secondary_diagonal_runs_top_right_to_bottom_left() {
        let board = board_with(&[(0, 3), (1, 2), (2, 1), (3, 0)], CellState::Circle);
        let result = secondary_diagonal(&board, Coord::new(0, 3), CellState::Circle)
            .expect("diagonal should win");
        assert_eq!(result.matched_cells()[0].coord(), Coord::new(0, 3));
        assert_eq!(result.matched_cells()[3].coord(), Coord::new(3, 0));
    }

    #[test]
    fn test_secondary_diagonal_gated_on_locus() {
        let board = board_with(&[(0, 3), (1, 2), (2, 1), (3, 0), (1, 1)], CellState::Circle);
        assert!(secondary_diagonal(&board, Coord::new(1, 1), CellState::Circle).is_none());
    }
}
