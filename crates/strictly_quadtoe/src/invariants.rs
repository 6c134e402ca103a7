//! First-class invariants for the game engine.
//!
//! Invariants are logical properties that must hold after every accepted
//! move. The engine checks them in debug builds; they are also testable on
//! their own.

use super::engine::GameEngine;
use super::types::{CellState, GameStatus, PlayerId};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn check<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        check::<S, I1>(state, &mut violations);
        check::<S, I2>(state, &mut violations);
        check::<S, I3>(state, &mut violations);
        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Invariant: crosses lead circles by zero or one.
pub struct BalancedMarks;

impl<O> Invariant<GameEngine<O>> for BalancedMarks {
    fn holds(engine: &GameEngine<O>) -> bool {
        let crosses = engine.board().count(CellState::Cross);
        let circles = engine.board().count(CellState::Circle);
        crosses == circles || crosses == circles + 1
    }

    fn description() -> &'static str {
        "Cross count leads circle count by at most one"
    }
}

/// Invariant: the history accounts for exactly the marked cells.
pub struct HistoryMatchesBoard;

impl<O> Invariant<GameEngine<O>> for HistoryMatchesBoard {
    fn holds(engine: &GameEngine<O>) -> bool {
        let board = engine.board();
        let marked = board.cell_count() - board.count(CellState::Empty);
        engine.history().len() == marked
            && engine
                .history()
                .iter()
                .all(|coord| board.get(*coord).is_some_and(|cell| !cell.is_empty()))
    }

    fn description() -> &'static str {
        "History length equals marked cells and every history cell is marked"
    }
}

/// Invariant: while a move is awaited, A is to move exactly after an even
/// number of moves.
pub struct ActivePlayerFollowsHistory;

impl<O> Invariant<GameEngine<O>> for ActivePlayerFollowsHistory {
    fn holds(engine: &GameEngine<O>) -> bool {
        if engine.status() != GameStatus::AwaitingMove {
            return true;
        }
        let expected = if engine.history().len() % 2 == 0 {
            PlayerId::A
        } else {
            PlayerId::B
        };
        engine.active_player() == Some(expected)
    }

    fn description() -> &'static str {
        "Players alternate turns starting with A"
    }
}

/// All engine invariants as a composable set.
pub type EngineInvariants = (BalancedMarks, HistoryMatchesBoard, ActivePlayerFollowsHistory);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineConfig;

    fn started() -> GameEngine {
        let mut engine = GameEngine::new();
        engine.initialize();
        engine.start_game().expect("start");
        engine
    }

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        let engine = started();
        assert!(EngineInvariants::check_all(&engine).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_moves() {
        let mut engine = started();
        for (row, column) in [(0, 0), (2, 1), (3, 3)] {
            engine.submit_move(row, column).expect("move");
        }
        assert!(EngineInvariants::check_all(&engine).is_ok());
        assert_eq!(engine.active_player(), Some(PlayerId::B));
    }

    #[test]
    fn test_two_invariants_as_set() {
        let engine = started();
        type TwoInvariants = (BalancedMarks, ActivePlayerFollowsHistory);
        assert!(TwoInvariants::check_all(&engine).is_ok());
    }

    #[test]
    fn test_uninitialized_engine_holds() {
        let engine = GameEngine::with_config(EngineConfig::default()).expect("config");
        assert!(BalancedMarks::holds(&engine));
        assert!(HistoryMatchesBoard::holds(&engine));
    }
}
