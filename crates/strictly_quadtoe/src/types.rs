//! Core domain types for four-by-four tic-tac-toe.

use derive_getters::Getters;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Occupancy of a single board position.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display,
)]
pub enum CellState {
    /// Free position.
    #[default]
    #[display(".")]
    Empty,
    /// Marked by player A.
    #[display("X")]
    Cross,
    /// Marked by player B.
    #[display("O")]
    Circle,
}

impl CellState {
    /// Returns true if nobody has marked this position yet.
    pub fn is_empty(self) -> bool {
        matches!(self, CellState::Empty)
    }

    /// Returns the player whose mark this is, if any.
    pub fn owner(self) -> Option<PlayerId> {
        match self {
            CellState::Empty => None,
            CellState::Cross => Some(PlayerId::A),
            CellState::Circle => Some(PlayerId::B),
        }
    }
}

/// Seat of a player in the game. A always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum PlayerId {
    /// First player, marks with a cross.
    #[display("A")]
    A,
    /// Second player, marks with a circle.
    #[display("B")]
    B,
}

impl PlayerId {
    /// Returns the opponent seat.
    pub fn opponent(self) -> Self {
        match self {
            PlayerId::A => PlayerId::B,
            PlayerId::B => PlayerId::A,
        }
    }

    /// The mark this seat writes onto the board.
    pub fn mark(self) -> CellState {
        match self {
            PlayerId::A => CellState::Cross,
            PlayerId::B => CellState::Circle,
        }
    }

    /// The terminal status reached when this seat wins.
    pub fn winning_status(self) -> GameStatus {
        match self {
            PlayerId::A => GameStatus::PlayerAWon,
            PlayerId::B => GameStatus::PlayerBWon,
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            PlayerId::A => 0,
            PlayerId::B => 1,
        }
    }
}

/// Icon reference handed through to the presentation layer.
///
/// The engine never resolves or interprets it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, derive_more::From)]
#[serde(transparent)]
pub struct IconRef(String);

impl IconRef {
    /// Creates an icon reference from any string-like identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the raw identifier.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for IconRef {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A participant in the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct Player {
    /// Seat this player occupies.
    id: PlayerId,
    /// Display label.
    name: String,
    /// Opaque icon reference.
    icon: IconRef,
    /// Mark written onto the board for this player.
    mark: CellState,
}

impl Player {
    /// Creates a player; the mark follows from the seat.
    #[instrument(skip(name, icon), fields(player_name = %name.as_ref()))]
    pub fn new(id: PlayerId, name: impl AsRef<str>, icon: IconRef) -> Self {
        Self {
            id,
            name: name.as_ref().to_string(),
            icon,
            mark: id.mark(),
        }
    }
}

/// Lifecycle status of a game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum GameStatus {
    /// Engine constructed but never initialized.
    #[default]
    #[display("uninitialized")]
    Uninitialized,
    /// Board reset, waiting for the game to start.
    #[display("not started")]
    NotStarted,
    /// Waiting for the active player to move.
    #[display("awaiting a move")]
    AwaitingMove,
    /// Player A completed a pattern.
    #[display("won by player A")]
    PlayerAWon,
    /// Player B completed a pattern.
    #[display("won by player B")]
    PlayerBWon,
    /// Board filled with no pattern completed.
    #[display("drawn")]
    Draw,
}

impl GameStatus {
    /// Returns true for the won and drawn states.
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            GameStatus::PlayerAWon | GameStatus::PlayerBWon | GameStatus::Draw
        )
    }

    /// Returns the winning seat, if the game was won.
    pub fn winner(self) -> Option<PlayerId> {
        match self {
            GameStatus::PlayerAWon => Some(PlayerId::A),
            GameStatus::PlayerBWon => Some(PlayerId::B),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marks_follow_seats() {
        assert_eq!(PlayerId::A.mark(), CellState::Cross);
        assert_eq!(PlayerId::B.mark(), CellState::Circle);
        assert_eq!(CellState::Circle.owner(), Some(PlayerId::B));
        assert_eq!(CellState::Empty.owner(), None);
    }

    #[test]
    fn test_opponent_alternates() {
        assert_eq!(PlayerId::A.opponent(), PlayerId::B);
        assert_eq!(PlayerId::A.opponent().opponent(), PlayerId::A);
    }

    #[test]
    fn test_terminal_statuses() {
        assert!(!GameStatus::Uninitialized.is_terminal());
        assert!(!GameStatus::AwaitingMove.is_terminal());
        assert!(GameStatus::Draw.is_terminal());
        assert_eq!(GameStatus::PlayerBWon.winner(), Some(PlayerId::B));
        assert_eq!(GameStatus::Draw.winner(), None);
    }

    #[test]
    fn test_player_carries_icon_unchanged() {
        let player = Player::new(PlayerId::B, "Player2", IconRef::from("ic_circle"));
        assert_eq!(player.icon().as_str(), "ic_circle");
        assert_eq!(*player.mark(), CellState::Circle);
    }
}
