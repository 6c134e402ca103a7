//! Game engine for four-by-four tic-tac-toe.
//!
//! The engine owns one game's board, players and status, and is the only
//! place where status transitions happen:
//!
//! ```text
//! Uninitialized -> NotStarted -> AwaitingMove <-> AwaitingMove
//!                                     |
//!                                     +-> PlayerAWon | PlayerBWon | Draw
//! ```
//!
//! `initialize` is legal from any status and restarts the game. Results are
//! returned from each call and also pushed, synchronously and in order, to a
//! [`GameObserver`] owned by the engine.

use super::board::{Board, Coord};
use super::config::{ConfigError, EngineConfig};
use super::error::{EngineError, Operation};
use super::evaluation::{EvaluationResult, MatchedCell, WinPattern};
use super::rules;
use super::types::{GameStatus, Player, PlayerId};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Receives engine notifications.
///
/// Both methods default to doing nothing.
pub trait GameObserver {
    /// Called after every status transition, including each turn handoff.
    fn on_status_changed(&mut self, _status: GameStatus) {}

    /// Called after the winning status change with the pattern's cells.
    fn on_game_over(&mut self, _matched_cells: &[MatchedCell]) {}
}

impl GameObserver for () {}

/// A notification, as recorded by [`EventLog`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum GameEvent {
    /// The game status changed.
    StatusChanged {
        /// New status.
        status: GameStatus,
    },
    /// The game was won.
    GameOver {
        /// Cells of the winning pattern.
        matched_cells: Vec<MatchedCell>,
    },
}

/// Observer that records every notification in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventLog {
    events: Vec<GameEvent>,
}

impl EventLog {
    /// Creates an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Events received so far.
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Statuses received so far, skipping game-over events.
    pub fn statuses(&self) -> Vec<GameStatus> {
        self.events
            .iter()
            .filter_map(|event| match event {
                GameEvent::StatusChanged { status } => Some(*status),
                GameEvent::GameOver { .. } => None,
            })
            .collect()
    }

    /// Removes and returns every recorded event.
    pub fn drain(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

impl GameObserver for EventLog {
    fn on_status_changed(&mut self, status: GameStatus) {
        self.events.push(GameEvent::StatusChanged { status });
    }

    fn on_game_over(&mut self, matched_cells: &[MatchedCell]) {
        self.events.push(GameEvent::GameOver {
            matched_cells: matched_cells.to_vec(),
        });
    }
}

/// Result of an accepted move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The game goes on with the other player.
    Continuing {
        /// Seat now to move.
        next_player: PlayerId,
    },
    /// The move completed a pattern.
    Won {
        /// Terminal status reached.
        status: GameStatus,
        /// Seat that made the winning move.
        winner: PlayerId,
        /// Pattern that completed.
        pattern: WinPattern,
        /// Cells of that pattern.
        matched_cells: Vec<MatchedCell>,
    },
    /// The move filled the board without a pattern.
    Draw,
}

impl MoveOutcome {
    /// Status the engine holds after this outcome.
    pub fn status(&self) -> GameStatus {
        match self {
            MoveOutcome::Continuing { .. } => GameStatus::AwaitingMove,
            MoveOutcome::Won { status, .. } => *status,
            MoveOutcome::Draw => GameStatus::Draw,
        }
    }

    /// Returns true if the game ended.
    pub fn is_terminal(&self) -> bool {
        self.status().is_terminal()
    }
}

/// Summary of replaying a recorded move list.
#[derive(Debug, Clone, PartialEq, Eq, Getters)]
pub struct Replay {
    /// Moves accepted by the engine.
    applied: usize,
    /// Moves left over after the game ended.
    ignored: usize,
    /// Outcome of the last accepted move.
    outcome: Option<MoveOutcome>,
}

/// Four-by-four tic-tac-toe engine.
///
/// Not synchronized: callers serialize access.
#[derive(Debug, Clone)]
pub struct GameEngine<O = ()> {
    config: EngineConfig,
    board: Board,
    players: Option<[Player; 2]>,
    active: Option<PlayerId>,
    status: GameStatus,
    history: Vec<Coord>,
    last_evaluation: Option<EvaluationResult>,
    observer: O,
}

impl GameEngine {
    /// Creates an uninitialized engine with the default configuration.
    #[instrument]
    pub fn new() -> Self {
        Self::build(EngineConfig::default(), ())
    }

    /// Creates an uninitialized engine with the given configuration.
    pub fn with_config(config: EngineConfig) -> Result<Self, ConfigError> {
        Self::with_observer(config, ())
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

// ─────────────────────────────────────────────────────────────
//  Read-only accessors
// ─────────────────────────────────────────────────────────────

impl<O> GameEngine<O> {
    fn build(config: EngineConfig, observer: O) -> Self {
        Self {
            board: Board::new(*config.board_size()),
            config,
            players: None,
            active: None,
            status: GameStatus::Uninitialized,
            history: Vec::new(),
            last_evaluation: None,
            observer,
        }
    }

    /// Returns true once the game has been won or drawn.
    pub fn is_game_over(&self) -> bool {
        self.status.is_terminal()
    }

    /// The player whose turn it is, unset until the game starts.
    ///
    /// After a win this stays on the winner.
    pub fn current_player(&self) -> Option<&Player> {
        self.active.and_then(|id| self.player(id))
    }

    /// Seat of the current player.
    pub fn active_player(&self) -> Option<PlayerId> {
        self.active
    }

    /// The player in a seat, once initialized.
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.as_ref().map(|players| &players[id.index()])
    }

    /// Both players in seat order, once initialized.
    pub fn players(&self) -> Option<&[Player; 2]> {
        self.players.as_ref()
    }

    /// Side length of the board.
    pub fn board_size(&self) -> usize {
        self.board.size()
    }

    /// The board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Current status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Accepted moves since the last initialization.
    pub fn history(&self) -> &[Coord] {
        &self.history
    }

    /// Evaluation of the most recent accepted move.
    pub fn last_evaluation(&self) -> Option<&EvaluationResult> {
        self.last_evaluation.as_ref()
    }

    /// Configuration the engine was built with.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The observer.
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// The observer, mutably.
    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Consumes the engine, returning the observer.
    pub fn into_observer(self) -> O {
        self.observer
    }
}

// ─────────────────────────────────────────────────────────────
//  Lifecycle
// ─────────────────────────────────────────────────────────────

impl<O: GameObserver> GameEngine<O> {
    /// Creates an uninitialized engine that notifies `observer`.
    #[instrument(skip(observer))]
    pub fn with_observer(config: EngineConfig, observer: O) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::build(config, observer))
    }

    /// Resets the board and players, moving to `NotStarted`.
    ///
    /// Legal from any status. Sends no notification.
    #[instrument(skip(self), fields(previous = %self.status))]
    pub fn initialize(&mut self) {
        self.board = Board::new(*self.config.board_size());
        self.players = Some(self.config.players());
        self.active = None;
        self.history.clear();
        self.last_evaluation = None;
        self.status = GameStatus::NotStarted;
        info!(board_size = self.board.size(), "Engine initialized");
    }

    /// Starts the game with player A to move.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidState`] unless the status is `NotStarted`.
    #[instrument(skip(self), fields(status = %self.status))]
    pub fn start_game(&mut self) -> Result<GameStatus, EngineError> {
        self.require(Operation::StartGame, GameStatus::NotStarted)?;
        self.active = Some(PlayerId::A);
        self.status = GameStatus::AwaitingMove;
        self.observer.on_status_changed(self.status);
        info!("Game started, player A to move");
        Ok(self.status)
    }

    /// Marks `(row, column)` for the active player and evaluates the move.
    ///
    /// Notifies the status change, then for a win the matched cells.
    ///
    /// # Errors
    ///
    /// - [`EngineError::InvalidState`] unless the status is `AwaitingMove`
    /// - [`EngineError::OutOfBounds`] if the cell is off the board
    /// - [`EngineError::CellOccupied`] if the cell is already marked
    /// - [`EngineError::InvariantViolation`] in debug builds, after the move
    ///   has been taken back
    ///
    /// None of these change the engine.
    #[instrument(skip(self), fields(status = %self.status))]
    pub fn submit_move(&mut self, row: usize, column: usize) -> Result<MoveOutcome, EngineError> {
        self.require(Operation::SubmitMove, GameStatus::AwaitingMove)?;
        let coord = Coord::new(row, column);
        self.check_target(coord)?;
        let mover = self.active.ok_or_else(|| EngineError::InvariantViolation {
            description: "No active player while awaiting a move".to_string(),
        })?;

        #[cfg(debug_assertions)]
        let (active_before, evaluation_before) = (self.active, self.last_evaluation.clone());

        self.board.set(coord, mover.mark());
        self.history.push(coord);
        debug!(player = %mover, %coord, "Move applied");

        let evaluation = rules::evaluate(&self.board, coord);
        let outcome = match evaluation.pattern() {
            Some(pattern) => MoveOutcome::Won {
                status: mover.winning_status(),
                winner: mover,
                pattern,
                matched_cells: evaluation.matched_cells().to_vec(),
            },
            None if rules::is_draw(&self.board, &evaluation) => MoveOutcome::Draw,
            None => MoveOutcome::Continuing {
                next_player: mover.opponent(),
            },
        };

        if let MoveOutcome::Continuing { next_player } = outcome {
            self.active = Some(next_player);
        }
        self.status = outcome.status();
        self.last_evaluation = Some(evaluation);

        #[cfg(debug_assertions)]
        if let Err(violation) = self.check_invariants() {
            self.board.set(coord, super::types::CellState::Empty);
            self.history.pop();
            self.active = active_before;
            self.status = GameStatus::AwaitingMove;
            self.last_evaluation = evaluation_before;
            return Err(violation);
        }

        self.observer.on_status_changed(self.status);
        match &outcome {
            MoveOutcome::Won {
                winner,
                pattern,
                matched_cells,
                ..
            } => {
                self.observer.on_game_over(matched_cells);
                info!(%winner, %pattern, "Game won");
            }
            MoveOutcome::Draw => info!("Game drawn"),
            MoveOutcome::Continuing { .. } => {}
        }

        Ok(outcome)
    }

    /// Restarts and plays `moves` in order, stopping when the game ends.
    ///
    /// # Errors
    ///
    /// Propagates the first rejected move.
    #[instrument(skip(self, moves), fields(moves = moves.len()))]
    pub fn replay(&mut self, moves: &[Coord]) -> Result<Replay, EngineError> {
        self.initialize();
        self.start_game()?;

        let mut applied = 0;
        let mut outcome = None;
        for coord in moves {
            let result = self.submit_move(coord.row, coord.column)?;
            applied += 1;
            let finished = result.is_terminal();
            outcome = Some(result);
            if finished {
                break;
            }
        }

        let ignored = moves.len() - applied;
        if ignored > 0 {
            warn!(ignored, "Moves after the end of the game were ignored");
        }
        Ok(Replay {
            applied,
            ignored,
            outcome,
        })
    }

    fn require(&self, operation: Operation, expected: GameStatus) -> Result<(), EngineError> {
        if self.status != expected {
            warn!(%operation, status = %self.status, "Call rejected in current state");
            return Err(EngineError::InvalidState {
                operation,
                status: self.status,
            });
        }
        Ok(())
    }

    fn check_target(&self, coord: Coord) -> Result<(), EngineError> {
        match self.board.get(coord) {
            None => {
                warn!(%coord, "Move off the board");
                Err(EngineError::OutOfBounds {
                    row: coord.row,
                    column: coord.column,
                    size: self.board.size(),
                })
            }
            Some(occupant) if !occupant.is_empty() => {
                warn!(%coord, %occupant, "Move onto a marked cell");
                Err(EngineError::CellOccupied {
                    row: coord.row,
                    column: coord.column,
                    occupant,
                })
            }
            Some(_) => Ok(()),
        }
    }

    #[cfg(debug_assertions)]
    fn check_invariants(&self) -> Result<(), EngineError> {
        use super::invariants::{EngineInvariants, InvariantSet};

        EngineInvariants::check_all(self).map_err(|violations| {
            let description = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%description, "Engine invariant violated");
            EngineError::InvariantViolation { description }
        })
    }
}
