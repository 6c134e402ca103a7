//! Results produced by the win evaluator.

use super::board::Coord;
use super::types::CellState;
use derive_more::Display;
use derive_new::new;
use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// One position taking part in a winning pattern.
///
/// Ordering is by row, then column, so sorted lists compare deterministically.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, new,
)]
pub struct MatchedCell {
    /// Row index.
    pub row: usize,
    /// Column index.
    pub column: usize,
    /// State shared by every cell in the pattern.
    pub state: CellState,
    /// Always set for cells reported by the evaluator.
    #[new(value = "true")]
    pub matched: bool,
}

impl MatchedCell {
    /// Coordinate of this cell.
    pub fn coord(&self) -> Coord {
        Coord::new(self.row, self.column)
    }
}

/// Which of the four 2×2 boxes touching a move completed, named by where the
/// box lies relative to the move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter)]
pub enum BoxQuadrant {
    /// Box extends up and to the left.
    #[display("top-left")]
    TopLeft,
    /// Box extends up and to the right.
    #[display("top-right")]
    TopRight,
    /// Box extends down and to the left.
    #[display("bottom-left")]
    BottomLeft,
    /// Box extends down and to the right.
    #[display("bottom-right")]
    BottomRight,
}

impl BoxQuadrant {
    /// Offset from the move to the box's top-left cell.
    pub fn origin_offset(self) -> (isize, isize) {
        match self {
            BoxQuadrant::TopLeft => (-1, -1),
            BoxQuadrant::TopRight => (-1, 0),
            BoxQuadrant::BottomLeft => (0, -1),
            BoxQuadrant::BottomRight => (0, 0),
        }
    }
}

/// Shape of a detected win.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum WinPattern {
    /// Full row.
    #[display("row {_0}")]
    Row(usize),
    /// Full column.
    #[display("column {_0}")]
    Column(usize),
    /// Top-left to bottom-right diagonal.
    #[display("principal diagonal")]
    PrincipalDiagonal,
    /// Top-right to bottom-left diagonal.
    #[display("secondary diagonal")]
    SecondaryDiagonal,
    /// All four corners.
    #[display("four corners")]
    Corners,
    /// A 2×2 box.
    #[display("{_0} box")]
    Box(BoxQuadrant),
}

/// Outcome of checking one move.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EvaluationResult {
    won: bool,
    pattern: Option<WinPattern>,
    matched_cells: Vec<MatchedCell>,
}

impl EvaluationResult {
    /// A result with no win.
    pub fn no_win() -> Self {
        Self::default()
    }

    /// A winning result for the given pattern and cells.
    pub fn win(pattern: WinPattern, matched_cells: Vec<MatchedCell>) -> Self {
        Self {
            won: true,
            pattern: Some(pattern),
            matched_cells,
        }
    }

    /// Returns true if the move completed a pattern.
    pub fn has_won(&self) -> bool {
        self.won
    }

    /// The pattern that matched, if any.
    pub fn pattern(&self) -> Option<WinPattern> {
        self.pattern
    }

    /// Cells forming the pattern, empty unless won.
    pub fn matched_cells(&self) -> &[MatchedCell] {
        &self.matched_cells
    }

    /// Consumes the result, returning the matched cells.
    pub fn into_matched_cells(self) -> Vec<MatchedCell> {
        self.matched_cells
    }
}
