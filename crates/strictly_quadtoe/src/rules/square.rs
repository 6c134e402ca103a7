//! 2×2 box rule.

use super::super::board::{Board, Coord};
use super::super::evaluation::{BoxQuadrant, EvaluationResult, WinPattern};
use super::super::types::CellState;
use super::all_match;
use strum::IntoEnumIterator;
use tracing::instrument;

/// Cells of the box in the given quadrant of `coord`, column by column.
///
/// `None` when part of the box would have a negative index. Indices past the
/// far edge are left for the board lookup to reject.
pub fn box_cells(coord: Coord, quadrant: BoxQuadrant) -> Option<[Coord; 4]> {
    let (rows, columns) = quadrant.origin_offset();
    let origin = coord.offset(rows, columns)?;
    Some([
        origin,
        origin.offset(1, 0)?,
        origin.offset(0, 1)?,
        origin.offset(1, 1)?,
    ])
}

/// Wins if one of the boxes cornered on the move holds `state` throughout.
///
/// Boxes are tried top-left, top-right, bottom-left, bottom-right.
#[instrument(skip(board))]
pub fn any_box(board: &Board, coord: Coord, state: CellState) -> Option<EvaluationResult> {
    BoxQuadrant::iter().find_map(|quadrant| {
        let cells = box_cells(coord, quadrant)?;
        all_match(board, cells, state)
            .map(|matched| EvaluationResult::win(WinPattern::Box(quadrant), matched))
    })
}
