//! Game settings
//!
//! Timing and effect values the session reads at construction. Defaults match
//! the classic game exactly; a host may override any subset from JSON.

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::GameError;

/// Runtime-tunable game settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Lives at the start of a session
    pub starting_lives: i32,
    /// Delay between physics ticks (ms)
    pub tick_interval_ms: u64,
    /// Pause between losing a life and the next serve (ms)
    pub respawn_delay_ms: u64,

    // === Visual Effects ===
    /// Explosion particles when a brick breaks
    pub particles: bool,
    /// Particles per explosion
    pub particle_count: usize,
    /// How long each particle stays on screen (ms)
    pub particle_lifetime_ms: u64,

    // === Input ===
    /// Paddle step for one arrow key press
    pub paddle_step: f32,

    /// Seed for the particle RNG
    pub seed: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            starting_lives: STARTING_LIVES,
            tick_interval_ms: TICK_INTERVAL_MS,
            respawn_delay_ms: RESPAWN_DELAY_MS,

            particles: true,
            particle_count: PARTICLE_COUNT,
            particle_lifetime_ms: PARTICLE_LIFETIME_MS,

            paddle_step: PADDLE_STEP,

            seed: 0,
        }
    }
}

impl Settings {
    /// Parse settings from JSON; missing keys keep their defaults
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject values the session cannot run with
    pub fn validate(&self) -> Result<(), GameError> {
        if self.tick_interval_ms == 0 {
            return Err(GameError::InvalidSetting {
                name: "tick_interval_ms",
                reason: "must be greater than zero",
            });
        }
        if self.starting_lives < 0 {
            return Err(GameError::InvalidSetting {
                name: "starting_lives",
                reason: "must not be negative",
            });
        }
        if self.paddle_step.is_nan() || self.paddle_step <= 0.0 {
            return Err(GameError::InvalidSetting {
                name: "paddle_step",
                reason: "must be a positive number",
            });
        }
        Ok(())
    }

    /// Particles per explosion (0 when particles are disabled)
    pub fn burst_size(&self) -> usize {
        if self.particles { self.particle_count } else { 0 }
    }
}
