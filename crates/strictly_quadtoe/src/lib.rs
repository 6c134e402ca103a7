//! Strictly Quadtoe - four-by-four tic-tac-toe rules engine.
//!
//! A game is won by filling, with one player's marks, any of:
//!
//! - a row or a column
//! - either diagonal
//! - the four corners
//! - a 2×2 box
//!
//! Only patterns through the last move are checked, in that priority order.
//!
//! # Architecture
//!
//! - **Rules**: pure win evaluator over a borrowed [`Board`]
//! - **Engine**: lifecycle, turn order and notifications ([`GameEngine`])
//! - **Config**: board size and player profiles, loadable from TOML
//!
//! # Example
//!
//! ```
//! use strictly_quadtoe::{GameEngine, GameStatus, MoveOutcome, PlayerId};
//!
//! # fn example() -> Result<(), strictly_quadtoe::EngineError> {
//! let mut engine = GameEngine::new();
//! engine.initialize();
//! engine.start_game()?;
//!
//! let outcome = engine.submit_move(0, 0)?;
//! assert_eq!(outcome, MoveOutcome::Continuing { next_player: PlayerId::B });
//! assert_eq!(engine.status(), GameStatus::AwaitingMove);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod config;
mod engine;
mod error;
mod evaluation;
mod invariants;
mod rules;
mod types;

// Crate-level exports - Board
pub use board::{Board, Coord, DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE};

// Crate-level exports - Configuration
pub use config::{ConfigError, EngineConfig, PlayerProfile};

// Crate-level exports - Engine
pub use engine::{EventLog, GameEngine, GameEvent, GameObserver, MoveOutcome, Replay};

// Crate-level exports - Errors
pub use error::{EngineError, Operation};

// Crate-level exports - Evaluation
pub use evaluation::{BoxQuadrant, EvaluationResult, MatchedCell, WinPattern};

// Crate-level exports - Invariants
pub use invariants::{
    ActivePlayerFollowsHistory, BalancedMarks, EngineInvariants, HistoryMatchesBoard, Invariant,
    InvariantSet, InvariantViolation,
};

// Crate-level exports - Rules
pub use rules::{evaluate, is_draw, is_full};

// Crate-level exports - Domain types
pub use types::{CellState, GameStatus, IconRef, Player, PlayerId};
