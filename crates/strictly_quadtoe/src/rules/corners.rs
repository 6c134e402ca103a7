//! Four-corners rule.

use super::super::board::{Board, Coord};
use super::super::evaluation::{EvaluationResult, WinPattern};
use super::super::types::CellState;
use super::all_match;
use tracing::instrument;

/// Wins if the move is a corner and all four corners hold `state`.
#[instrument(skip(board))]
pub fn four_corners(board: &Board, coord: Coord, state: CellState) -> Option<EvaluationResult> {
    if !board.is_corner(coord) {
        return None;
    }
    all_match(board, board.corners(), state)
        .map(|matched| EvaluationResult::win(WinPattern::Corners, matched))
}
