//! Error types
//!
//! Gameplay itself has no recoverable errors: rejected paddle moves and empty
//! collision batches are no-ops. Errors only come from construction (bricks,
//! settings) and fail fast.

use std::fmt;

/// Top-level error enum for the game.
#[derive(Debug)]
pub enum GameError {
    /// A brick was built with a hit count that has no tier color.
    InvalidHits {
        /// The rejected hit count.
        hits: u8,
    },

    /// A settings value is outside its usable range.
    InvalidSetting {
        /// Name of the setting.
        name: &'static str,
        /// Human-readable description of the accepted range.
        reason: &'static str,
    },

    /// Settings JSON could not be parsed.
    SettingsParse(serde_json::Error),
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::InvalidHits { hits } => {
                write!(f, "brick hit count {} is outside 1..=4", hits)
            }
            GameError::InvalidSetting { name, reason } => {
                write!(f, "invalid setting '{}': {}", name, reason)
            }
            GameError::SettingsParse(err) => write!(f, "failed to parse settings: {}", err),
        }
    }
}

impl std::error::Error for GameError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            GameError::SettingsParse(err) => Some(err),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for GameError {
    fn from(err: serde_json::Error) -> Self {
        GameError::SettingsParse(err)
    }
}
