//! Engine error types.

use super::types::{CellState, GameStatus};
use derive_more::Display;

/// Engine operation that checks its calling state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Operation {
    /// Starting a freshly initialized game.
    #[display("start the game")]
    StartGame,
    /// Submitting a move.
    #[display("submit a move")]
    SubmitMove,
}

/// Error returned by the game engine.
///
/// A rejected call never changes engine state.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum EngineError {
    /// The operation is not allowed in the current status.
    #[display("Cannot {operation} while the game is {status}")]
    InvalidState {
        /// What the caller attempted.
        operation: Operation,
        /// Status at the time of the call.
        status: GameStatus,
    },

    /// The move lies outside the board.
    #[display("({row}, {column}) is outside the {size}x{size} board")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        column: usize,
        /// Board side length.
        size: usize,
    },

    /// The target cell is already marked.
    #[display("({row}, {column}) is already marked {occupant}")]
    CellOccupied {
        /// Requested row.
        row: usize,
        /// Requested column.
        column: usize,
        /// Mark found in the cell.
        occupant: CellState,
    },

    /// A post-move invariant failed.
    #[display("Invariant violation: {description}")]
    InvariantViolation {
        /// Descriptions of every violated invariant.
        description: String,
    },
}

impl std::error::Error for EngineError {}

impl EngineError {
    /// Returns true for the invalid-state kind.
    pub fn is_invalid_state(&self) -> bool {
        matches!(self, EngineError::InvalidState { .. })
    }
}
