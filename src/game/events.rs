//! Structured record of what happened in a session.
//!
//! The session pushes events as it changes state; drivers drain them after
//! each tick and decide how to surface them (the terminal shows a short log,
//! the simulator prints them in verbose mode).

use std::collections::VecDeque;

use serde::Serialize;

use super::types::{CrashCause, FlappyDifficulty};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SessionEvent {
    /// START → RUNNING.
    Started { difficulty: FlappyDifficulty },

    /// Difficulty picked while not running.
    DifficultyChanged {
        from: FlappyDifficulty,
        to: FlappyDifficulty,
    },

    /// A new pair entered at the right edge.
    PairSpawned { top_y: f64, gap: f64 },

    /// Bird cleared one pipe (half a point).
    PipePassed { score: f64 },

    /// Pipes that scrolled fully off the left edge.
    PipesEvicted { count: usize },

    /// RUNNING → GAME_OVER.
    Crashed {
        cause: CrashCause,
        score: f64,
        frames: u64,
    },

    /// GAME_OVER → RUNNING.
    Restarted { difficulty: FlappyDifficulty },
}

impl SessionEvent {
    /// One-line description for logs.
    pub fn message(&self) -> String {
        match self {
            SessionEvent::Started { difficulty } => {
                format!("Run started on {}", difficulty.name())
            }
            SessionEvent::DifficultyChanged { from, to } => {
                format!("Difficulty {} \u{2192} {}", from.name(), to.name())
            }
            SessionEvent::PairSpawned { top_y, gap } => {
                format!("Pipe pair spawned (top {:.1}, gap {:.0})", top_y, gap)
            }
            SessionEvent::PipePassed { score } => format!("Pipe cleared, score {}", score),
            SessionEvent::PipesEvicted { count } => format!("{} pipe(s) left the field", count),
            SessionEvent::Crashed {
                cause,
                score,
                frames,
            } => {
                let what = match cause {
                    CrashCause::Pipe => "Hit a pipe",
                    CrashCause::Fell => "Fell out of the sky",
                };
                format!("{} after {} frames, score {}", what, frames, score)
            }
            SessionEvent::Restarted { difficulty } => {
                format!("Restarted on {}", difficulty.name())
            }
        }
    }

    /// Routine events that a compact log can skip.
    pub fn is_noise(&self) -> bool {
        matches!(
            self,
            SessionEvent::PairSpawned { .. } | SessionEvent::PipesEvicted { .. }
        )
    }
}

/// Rolling log of the most recent notable events.
#[derive(Debug, Clone)]
pub struct EventLog {
    entries: VecDeque<String>,
    capacity: usize,
}

impl EventLog {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Record an event unless it is routine. Oldest entries fall off.
    pub fn record(&mut self, event: &SessionEvent) {
        if event.is_noise() || self.capacity == 0 {
            return;
        }
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(event.message());
    }

    /// Entries oldest first.
    pub fn entries(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_drops_oldest_and_skips_noise() {
        let mut log = EventLog::new(2);
        log.record(&SessionEvent::Started {
            difficulty: FlappyDifficulty::Easy,
        });
        log.record(&SessionEvent::PipesEvicted { count: 2 });
        log.record(&SessionEvent::PipePassed { score: 0.5 });
        log.record(&SessionEvent::PipePassed { score: 1.0 });

        let entries: Vec<&str> = log.entries().collect();
        assert_eq!(entries, vec!["Pipe cleared, score 0.5", "Pipe cleared, score 1"]);
    }

    #[test]
    fn test_crash_message_names_cause() {
        let event = SessionEvent::Crashed {
            cause: CrashCause::Fell,
            score: 2.5,
            frames: 300,
        };
        let msg = event.message();
        assert!(msg.contains("Fell"));
        assert!(msg.contains("2.5"));
        assert!(msg.contains("300"));
    }

    #[test]
    fn test_noise_classification() {
        assert!(SessionEvent::PipesEvicted { count: 2 }.is_noise());
        assert!(SessionEvent::PairSpawned {
            top_y: -80.0,
            gap: 160.0
        }
        .is_noise());
        assert!(!SessionEvent::PipePassed { score: 0.5 }.is_noise());
        assert!(!SessionEvent::Restarted {
            difficulty: FlappyDifficulty::Hard
        }
        .is_noise());
    }

    #[test]
    fn test_events_serialize_with_tag() {
        let json = serde_json::to_string(&SessionEvent::Started {
            difficulty: FlappyDifficulty::Medium,
        })
        .unwrap();
        assert_eq!(json, r#"{"event":"started","difficulty":"medium"}"#);
    }
}
