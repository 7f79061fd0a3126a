//! Flappy data structures: difficulty, bird, pipes and the session aggregate.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use super::events::SessionEvent;
use crate::config::GameConfig;

/// Difficulty levels, selectable only outside of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlappyDifficulty {
    Easy,
    Medium,
    Hard,
}

difficulty_enum_impl!(FlappyDifficulty);

impl FlappyDifficulty {
    /// Lowercase key used on the command line and in config files.
    pub fn difficulty_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }

    /// Parse `"easy"`, `"medium"` or `"hard"` (any case).
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|d| d.difficulty_str().eq_ignore_ascii_case(s))
    }

    /// Built-in tuning for this level. Configs may override it.
    pub fn default_profile(&self) -> DifficultyProfile {
        match self {
            Self::Easy => DifficultyProfile {
                gravity: 0.2,
                flap_impulse: -5.5,
                spawn_interval_ms: 1800,
                gap_divisor: 3.0,
            },
            Self::Medium => DifficultyProfile {
                gravity: 0.25,
                flap_impulse: -6.0,
                spawn_interval_ms: 1500,
                gap_divisor: 4.0,
            },
            Self::Hard => DifficultyProfile {
                gravity: 0.3,
                flap_impulse: -6.5,
                spawn_interval_ms: 1200,
                gap_divisor: 5.0,
            },
        }
    }
}

/// The four numbers a difficulty level controls.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DifficultyProfile {
    /// Added to the bird's vertical velocity every frame (px/frame²).
    pub gravity: f64,
    /// Velocity a flap sets, negative is upward (px/frame).
    pub flap_impulse: f64,
    /// Simulated time between pipe pairs.
    pub spawn_interval_ms: u64,
    /// Opening between a pair is `field_height / gap_divisor`.
    pub gap_divisor: f64,
}

/// Session phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GamePhase {
    Start,
    Running,
    GameOver,
}

impl GamePhase {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Start => "START",
            Self::Running => "RUNNING",
            Self::GameOver => "GAME_OVER",
        }
    }
}

/// Why a run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CrashCause {
    /// Bird overlapped a pipe.
    Pipe,
    /// Bird dropped below the field.
    Fell,
}

/// The player-controlled bird. `x` never changes during a run.
#[derive(Debug, Clone, PartialEq)]
pub struct Bird {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    /// Vertical velocity in px/frame (positive = downward).
    pub velocity: f64,
}

impl Bird {
    /// Bird at its reset position for the given config.
    pub fn new(config: &GameConfig) -> Self {
        Self {
            x: config.bird_x(),
            y: config.bird_reset_y(),
            width: config.bird_width,
            height: config.bird_height,
            velocity: 0.0,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.x, self.y, self.width, self.height)
    }
}

/// Which half of a pair a pipe is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PipeRole {
    Top,
    Bottom,
}

/// A single pipe obstacle. Pipes are always spawned as a top/bottom pair.
#[derive(Debug, Clone, PartialEq)]
pub struct Pipe {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub role: PipeRole,
    /// Set once the bird's left edge clears this pipe's right edge.
    pub passed: bool,
}

impl Pipe {
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::new(self.x, self.y, self.width, self.height)
    }
}

/// One game session. Owns the bird and the pipes; everything that mutates them
/// goes through the methods in `logic`.
#[derive(Debug, Clone)]
pub struct FlappySession {
    pub config: GameConfig,
    pub difficulty: FlappyDifficulty,
    /// Profile captured when the run started (or the difficulty was picked).
    pub profile: DifficultyProfile,
    pub phase: GamePhase,

    pub bird: Bird,
    /// Oldest pair at the front.
    pub pipes: VecDeque<Pipe>,

    /// 0.5 per individual pipe passed.
    pub score: f64,
    /// Highest score reached since the process started.
    pub best_score: f64,
    pub crash_cause: Option<CrashCause>,

    // Spawner
    /// Armed while running; cleared the moment the run ends.
    pub spawner_active: bool,
    /// Simulated time until the next pair. Goes to zero or below on the frame
    /// a pair is due; the overshoot carries into the next interval.
    pub spawn_countdown_ms: i64,

    // Timing
    /// Wall time not yet consumed by a whole frame.
    pub accumulated_time_ms: u64,
    /// Frames simulated in the current run.
    pub frame_count: u64,

    /// Events not yet drained by the driver.
    pub events: Vec<SessionEvent>,
}

impl FlappySession {
    /// New session in START with the given difficulty.
    pub fn new(config: GameConfig, difficulty: FlappyDifficulty) -> Self {
        let profile = config.profile(difficulty);
        let bird = Bird::new(&config);
        Self {
            config,
            difficulty,
            profile,
            phase: GamePhase::Start,
            bird,
            pipes: VecDeque::new(),
            score: 0.0,
            best_score: 0.0,
            crash_cause: None,
            spawner_active: false,
            spawn_countdown_ms: 0,
            accumulated_time_ms: 0,
            frame_count: 0,
            events: Vec::new(),
        }
    }

    /// Session using the built-in field and tuning.
    pub fn with_difficulty(difficulty: FlappyDifficulty) -> Self {
        Self::new(GameConfig::default(), difficulty)
    }

    /// Whether difficulty changes are currently refused.
    pub fn difficulty_locked(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Opening between the pipes of a pair under the active profile.
    pub fn gap_size(&self) -> f64 {
        self.config.field_height / self.profile.gap_divisor
    }
}
