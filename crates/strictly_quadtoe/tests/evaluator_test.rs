//! Tests for the win evaluator against whole boards.

use strictly_quadtoe::{
    evaluate, Board, BoxQuadrant, CellState, Coord, MatchedCell, WinPattern,
};

fn board_with(cross: &[(usize, usize)], circle: &[(usize, usize)]) -> Board {
    let mut board = Board::new(4);
    for &(row, column) in cross {
        board.set(Coord::new(row, column), CellState::Cross);
    }
    for &(row, column) in circle {
        board.set(Coord::new(row, column), CellState::Circle);
    }
    board
}

fn crosses(cells: &[(usize, usize)]) -> Vec<MatchedCell> {
    let mut matched: Vec<_> = cells
        .iter()
        .map(|&(row, column)| MatchedCell::new(row, column, CellState::Cross))
        .collect();
    matched.sort();
    matched
}

fn sorted(cells: &[MatchedCell]) -> Vec<MatchedCell> {
    let mut cells = cells.to_vec();
    cells.sort();
    cells
}

#[test]
fn test_win_by_first_row() {
    let board = board_with(&[(0, 0), (0, 1), (0, 2), (0, 3)], &[(1, 0), (1, 1), (1, 2)]);
    let result = evaluate(&board, Coord::new(0, 0));
    assert!(result.has_won());
    assert_eq!(result.pattern(), Some(WinPattern::Row(0)));
    assert_eq!(
        sorted(result.matched_cells()),
        crosses(&[(0, 0), (0, 1), (0, 2), (0, 3)])
    );
}

#[test]
fn test_win_by_first_column() {
    let board = board_with(&[(0, 0), (1, 0), (2, 0), (3, 0)], &[(0, 1), (1, 1), (2, 1)]);
    let result = evaluate(&board, Coord::new(0, 0));
    assert!(result.has_won());
    assert_eq!(result.pattern(), Some(WinPattern::Column(0)));
    assert_eq!(
        sorted(result.matched_cells()),
        crosses(&[(0, 0), (1, 0), (2, 0), (3, 0)])
    );
}

#[test]
fn test_win_by_principal_diagonal() {
    let board = board_with(&[(0, 0), (1, 1), (2, 2), (3, 3)], &[(0, 1), (0, 2), (0, 3)]);
    let result = evaluate(&board, Coord::new(0, 0));
    assert_eq!(result.pattern(), Some(WinPattern::PrincipalDiagonal));
    assert_eq!(
        sorted(result.matched_cells()),
        crosses(&[(0, 0), (1, 1), (2, 2), (3, 3)])
    );
}

#[test]
fn test_win_by_secondary_diagonal() {
    let board = board_with(&[(0, 3), (1, 2), (2, 1), (3, 0)], &[(0, 1), (0, 2), (1, 1)]);
    let result = evaluate(&board, Coord::new(0, 3));
    assert_eq!(result.pattern(), Some(WinPattern::SecondaryDiagonal));
    assert_eq!(
        sorted(result.matched_cells()),
        crosses(&[(0, 3), (1, 2), (2, 1), (3, 0)])
    );
}

#[test]
fn test_win_by_four_corners() {
    let board = board_with(&[(0, 0), (0, 3), (3, 0), (3, 3)], &[(0, 1), (0, 2), (1, 1)]);
    let result = evaluate(&board, Coord::new(0, 3));
    assert_eq!(result.pattern(), Some(WinPattern::Corners));
    assert_eq!(
        result.matched_cells().to_vec(),
        crosses(&[(0, 0), (0, 3), (3, 0), (3, 3)])
    );
}

#[test]
fn test_win_by_box() {
    let board = board_with(&[(0, 0), (0, 1), (1, 0), (1, 1)], &[(0, 2), (1, 2), (2, 2)]);
    let result = evaluate(&board, Coord::new(1, 1));
    assert_eq!(result.pattern(), Some(WinPattern::Box(BoxQuadrant::TopLeft)));
    assert_eq!(
        sorted(result.matched_cells()),
        crosses(&[(0, 0), (0, 1), (1, 0), (1, 1)])
    );
}

#[test]
fn test_diagonal_ignored_for_move_off_diagonal() {
    // The diagonal is complete, but (0, 1) does not lie on it.
    let board = board_with(&[(0, 0), (1, 1), (2, 2), (3, 3), (0, 1)], &[]);
    let result = evaluate(&board, Coord::new(0, 1));
    assert!(!result.has_won());
}

#[test]
fn test_corners_ignored_for_move_off_corner() {
    let board = board_with(&[(0, 0), (0, 3), (3, 0), (3, 3), (2, 1)], &[]);
    assert!(!evaluate(&board, Coord::new(2, 1)).has_won());
    assert!(evaluate(&board, Coord::new(3, 0)).has_won());
}

#[test]
fn test_box_not_touching_move_is_ignored() {
    let board = board_with(&[(0, 0), (0, 1), (1, 0), (1, 1), (3, 3)], &[]);
    assert!(!evaluate(&board, Coord::new(3, 3)).has_won());
}

#[test]
fn test_matched_cells_carry_player_state() {
    let board = board_with(&[], &[(2, 2), (2, 3), (3, 2), (3, 3)]);
    let result = evaluate(&board, Coord::new(2, 2));
    assert_eq!(result.pattern(), Some(WinPattern::Box(BoxQuadrant::BottomRight)));
    assert!(result
        .matched_cells()
        .iter()
        .all(|cell| cell.state == CellState::Circle && cell.matched));
}

#[test]
fn test_evaluator_is_size_agnostic() {
    let mut board = Board::new(5);
    for i in 0..5 {
        board.set(Coord::new(i, 4 - i), CellState::Cross);
    }
    let result = evaluate(&board, Coord::new(2, 2));
    assert_eq!(result.pattern(), Some(WinPattern::SecondaryDiagonal));
    assert_eq!(result.matched_cells().len(), 5);
}
