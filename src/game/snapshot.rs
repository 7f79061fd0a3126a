//! Read-only scene description handed to renderers.

use serde::Serialize;

use super::types::{CrashCause, FlappyDifficulty, FlappySession, GamePhase, PipeRole};

/// Position and size of a drawable entity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EntityRect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// A pipe as the renderer sees it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PipeView {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub role: PipeRole,
}

/// Everything needed to draw one frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneSnapshot {
    pub game_state: GamePhase,
    pub bird: EntityRect,
    /// Spawn order, oldest first.
    pub pipes: Vec<PipeView>,
    pub score: f64,
    pub best_score: f64,
    pub difficulty: FlappyDifficulty,
    pub difficulty_locked: bool,
    pub crash_cause: Option<CrashCause>,
    pub field_width: f64,
    pub field_height: f64,
    pub gap: f64,
}

impl SceneSnapshot {
    pub fn capture(session: &FlappySession) -> Self {
        let bird = &session.bird;
        Self {
            game_state: session.phase,
            bird: EntityRect {
                x: bird.x,
                y: bird.y,
                width: bird.width,
                height: bird.height,
            },
            pipes: session
                .pipes
                .iter()
                .map(|p| PipeView {
                    x: p.x,
                    y: p.y,
                    width: p.width,
                    height: p.height,
                    role: p.role,
                })
                .collect(),
            score: session.score,
            best_score: session.best_score,
            difficulty: session.difficulty,
            difficulty_locked: session.difficulty_locked(),
            crash_cause: session.crash_cause,
            field_width: session.config.field_width,
            field_height: session.config.field_height,
            gap: session.gap_size(),
        }
    }
}
