//! Engine configuration.

use super::board::{DEFAULT_BOARD_SIZE, MAX_BOARD_SIZE};
use super::types::{IconRef, Player, PlayerId};
use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Name and icon for one seat.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct PlayerProfile {
    /// Display label.
    name: String,
    /// Opaque icon reference, passed through to the presentation layer.
    icon: IconRef,
}

impl PlayerProfile {
    /// Creates a profile.
    pub fn new(name: impl Into<String>, icon: impl Into<IconRef>) -> Self {
        Self {
            name: name.into(),
            icon: icon.into(),
        }
    }

    /// Builds the player occupying `id`.
    pub fn to_player(&self, id: PlayerId) -> Player {
        Player::new(id, &self.name, self.icon.clone())
    }
}

/// Configuration for a game engine.
///
/// Every key is optional in TOML, including the keys inside a player
/// table. Absent keys keep their default:
///
/// ```toml
/// board_size = 4
///
/// [player_a]
/// name = "Player1"
/// icon = "ic_close"
///
/// [player_b]
/// name = "Player2"
/// icon = "ic_circle"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[setters(prefix = "with_")]
#[serde(from = "ConfigFile")]
pub struct EngineConfig {
    /// Side length of the square board.
    board_size: usize,
    /// Player moving first, marking crosses.
    player_a: PlayerProfile,
    /// Player moving second, marking circles.
    player_b: PlayerProfile,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            player_a: PlayerProfile::new("Player1", "ic_close"),
            player_b: PlayerProfile::new("Player2", "ic_circle"),
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  On-disk layout
// ─────────────────────────────────────────────────────────────

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    board_size: Option<usize>,
    player_a: ProfileFile,
    player_b: ProfileFile,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct ProfileFile {
    name: Option<String>,
    icon: Option<IconRef>,
}

impl ProfileFile {
    fn merge_over(self, seat_default: PlayerProfile) -> PlayerProfile {
        PlayerProfile {
            name: self.name.unwrap_or(seat_default.name),
            icon: self.icon.unwrap_or(seat_default.icon),
        }
    }
}

impl From<ConfigFile> for EngineConfig {
    fn from(file: ConfigFile) -> Self {
        let defaults = Self::default();
        Self {
            board_size: file.board_size.unwrap_or(defaults.board_size),
            player_a: file.player_a.merge_over(defaults.player_a),
            player_b: file.player_b.merge_over(defaults.player_b),
        }
    }
}

impl EngineConfig {
    /// Reads and validates an engine config from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            ConfigError::new(format!("Cannot read engine config {}: {}", path.display(), e))
        })?;
        let config = Self::from_toml_str(&content)?;
        info!(
            board_size = config.board_size,
            player_a = %config.player_a.name,
            player_b = %config.player_b.name,
            "Engine config read"
        );
        Ok(config)
    }

    /// Parses configuration from TOML text and validates it.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Malformed engine config: {}", e)))?;
        debug!(board_size = config.board_size, "Engine config parsed");
        config.validate()?;
        Ok(config)
    }

    /// Checks that the configuration describes a playable game.
    #[instrument(skip(self), fields(board_size = self.board_size))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size < 2 {
            return Err(ConfigError::new(format!(
                "Board size must be at least 2, got {}",
                self.board_size
            )));
        }
        if self.board_size > MAX_BOARD_SIZE {
            return Err(ConfigError::new(format!(
                "Board size must be at most {}, got {}",
                MAX_BOARD_SIZE, self.board_size
            )));
        }
        if self.player_a.name == self.player_b.name {
            return Err(ConfigError::new(format!(
                "Players must have distinct names, both are {:?}",
                self.player_a.name
            )));
        }
        Ok(())
    }

    /// Builds both players in seat order.
    pub fn players(&self) -> [Player; 2] {
        [
            self.player_a.to_player(PlayerId::A),
            self.player_b.to_player(PlayerId::B),
        ]
    }
}

/// Rejected engine configuration, tagged with the check that raised it.
#[derive(Debug, Clone, Display, Error)]
#[display("Invalid engine config: {} (raised at {}:{})", message, file, line)]
pub struct ConfigError {
    /// What is wrong with the configuration.
    pub message: String,
    /// Line of the check that rejected it.
    pub line: u32,
    /// Source file of the check that rejected it.
    pub file: &'static str,
}

impl ConfigError {
    /// Records `message` against the caller's location.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let raised_at = std::panic::Location::caller();
        debug!(%message, "Engine config rejected");
        Self {
            message,
            line: raised_at.line(),
            file: raised_at.file(),
        }
    }
}
