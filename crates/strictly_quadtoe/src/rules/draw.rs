//! Draw detection.

use super::super::board::Board;
use super::super::evaluation::EvaluationResult;
use tracing::instrument;

/// Checks if the board has no empty positions left.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// A move that fills the board without completing a pattern ends in a draw.
#[instrument(skip(board, evaluation))]
pub fn is_draw(board: &Board, evaluation: &EvaluationResult) -> bool {
    !evaluation.has_won() && is_full(board)
}
