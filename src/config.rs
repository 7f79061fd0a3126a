//! Game configuration: field geometry, timing and per-difficulty tuning.
//!
//! Everything has a built-in default. A JSON file may override any subset of
//! fields; missing keys keep their defaults.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::game::types::{DifficultyProfile, FlappyDifficulty};

/// Configuration for a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub field_width: f64,
    pub field_height: f64,

    pub bird_width: f64,
    pub bird_height: f64,

    pub pipe_width: f64,
    pub pipe_height: f64,
    /// Horizontal scroll per frame.
    pub pipe_speed: f64,

    /// Simulated length of one frame.
    pub frame_ms: u64,

    pub easy: DifficultyProfile,
    pub medium: DifficultyProfile,
    pub hard: DifficultyProfile,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            bird_width: BIRD_WIDTH,
            bird_height: BIRD_HEIGHT,
            pipe_width: PIPE_WIDTH,
            pipe_height: PIPE_HEIGHT,
            pipe_speed: PIPE_SPEED,
            frame_ms: FRAME_INTERVAL_MS,
            easy: FlappyDifficulty::Easy.default_profile(),
            medium: FlappyDifficulty::Medium.default_profile(),
            hard: FlappyDifficulty::Hard.default_profile(),
        }
    }
}

impl GameConfig {
    /// Load a JSON config file and validate it.
    pub fn load(path: &Path) -> io::Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    /// Parse and validate a JSON config.
    pub fn from_json(text: &str) -> io::Result<Self> {
        let config: GameConfig = serde_json::from_str(text)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the simulation cannot run with.
    pub fn validate(&self) -> io::Result<()> {
        let positive = [
            ("field_width", self.field_width),
            ("field_height", self.field_height),
            ("bird_width", self.bird_width),
            ("bird_height", self.bird_height),
            ("pipe_width", self.pipe_width),
            ("pipe_height", self.pipe_height),
            ("pipe_speed", self.pipe_speed),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(invalid(format!("{} must be positive, got {}", name, value)));
            }
        }

        if self.frame_ms == 0 || self.frame_ms > MAX_FRAME_DT_MS {
            return Err(invalid(format!(
                "frame_ms must be between 1 and {}, got {}",
                MAX_FRAME_DT_MS, self.frame_ms
            )));
        }

        for difficulty in FlappyDifficulty::ALL {
            let profile = self.profile(difficulty);
            let key = difficulty.difficulty_str();
            if profile.spawn_interval_ms == 0 {
                return Err(invalid(format!("{}.spawn_interval_ms must be at least 1", key)));
            }
            if !(profile.gap_divisor.is_finite() && profile.gap_divisor > 1.0) {
                return Err(invalid(format!(
                    "{}.gap_divisor must be greater than 1, got {}",
                    key, profile.gap_divisor
                )));
            }
            if !profile.gravity.is_finite() || !profile.flap_impulse.is_finite() {
                return Err(invalid(format!("{} physics values must be finite", key)));
            }
        }

        Ok(())
    }

    /// Tuning for the given difficulty.
    pub fn profile(&self, difficulty: FlappyDifficulty) -> DifficultyProfile {
        match difficulty {
            FlappyDifficulty::Easy => self.easy,
            FlappyDifficulty::Medium => self.medium,
            FlappyDifficulty::Hard => self.hard,
        }
    }

    /// Bird column: an eighth of the way across.
    pub fn bird_x(&self) -> f64 {
        self.field_width / 8.0
    }

    /// Bird start row: vertically centered.
    pub fn bird_reset_y(&self) -> f64 {
        (self.field_height - self.bird_height) / 2.0
    }

    /// New pipes enter at the right edge.
    pub fn pipe_spawn_x(&self) -> f64 {
        self.field_width
    }
}

fn invalid(message: String) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, message)
}
