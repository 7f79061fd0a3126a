//! Session state machine, frame stepping and input handling.

use rand::Rng;

use super::collision::sweep_pipes;
use super::events::SessionEvent;
use super::physics;
use super::snapshot::SceneSnapshot;
use super::spawner::{advance_pipes, spawn_pair};
use super::types::{Bird, CrashCause, FlappyDifficulty, FlappySession, GamePhase};
use crate::constants::MAX_FRAME_DT_MS;

/// UI-agnostic input actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlappyInput {
    /// Space / Up. Begins the run from START, flaps while running.
    Flap,
    /// Enter. Begins the run from START.
    Start,
    /// R. Restarts from GAME_OVER.
    Restart,
    /// 1 / 2 / 3.
    SelectDifficulty(FlappyDifficulty),
}

/// Route one input to the matching session command. Inputs that make no sense
/// in the current phase are dropped.
pub fn process_input(session: &mut FlappySession, input: FlappyInput) {
    match input {
        FlappyInput::Flap => match session.phase {
            // The press that starts the run does not also flap
            GamePhase::Start => session.start_game(),
            GamePhase::Running => session.flap(),
            GamePhase::GameOver => {}
        },
        FlappyInput::Start => session.start_game(),
        FlappyInput::Restart => session.restart(),
        FlappyInput::SelectDifficulty(difficulty) => session.set_difficulty(difficulty),
    }
}

impl FlappySession {
    /// START → RUNNING. Arms the spawner and locks the difficulty.
    pub fn start_game(&mut self) {
        if self.phase != GamePhase::Start {
            return;
        }
        self.begin_run();
        self.events.push(SessionEvent::Started {
            difficulty: self.difficulty,
        });
    }

    /// Set the bird's velocity to the flap impulse. Running only.
    pub fn flap(&mut self) {
        if self.phase != GamePhase::Running {
            return;
        }
        physics::flap(&mut self.bird, self.profile.flap_impulse);
    }

    /// GAME_OVER → RUNNING with a fresh bird, no pipes and a zero score.
    pub fn restart(&mut self) {
        if self.phase != GamePhase::GameOver {
            return;
        }
        self.bird = Bird::new(&self.config);
        self.pipes.clear();
        self.score = 0.0;
        self.crash_cause = None;
        self.begin_run();
        self.events.push(SessionEvent::Restarted {
            difficulty: self.difficulty,
        });
    }

    /// Pick a difficulty. Ignored while a run is in progress.
    pub fn set_difficulty(&mut self, difficulty: FlappyDifficulty) {
        if self.difficulty_locked() || self.difficulty == difficulty {
            return;
        }
        let from = self.difficulty;
        self.difficulty = difficulty;
        self.profile = self.config.profile(difficulty);
        self.events.push(SessionEvent::DifficultyChanged {
            from,
            to: difficulty,
        });
    }

    /// One display frame: physics, scroll, scoring and collision.
    /// Does nothing outside of RUNNING.
    pub fn advance_frame(&mut self) {
        if self.phase != GamePhase::Running {
            return;
        }
        self.frame_count += 1;

        physics::tick_bird(&mut self.bird, self.profile.gravity);
        if physics::fell_out(&self.bird, self.config.field_height) {
            self.end_run(CrashCause::Fell);
            return;
        }

        let evicted = advance_pipes(&mut self.pipes, self.config.pipe_speed);
        if evicted > 0 {
            self.events.push(SessionEvent::PipesEvicted { count: evicted });
        }

        let sweep = sweep_pipes(&self.bird, &mut self.pipes);
        for _ in 0..sweep.newly_passed {
            self.score += 0.5;
            self.events
                .push(SessionEvent::PipePassed { score: self.score });
        }
        self.best_score = self.best_score.max(self.score);

        if sweep.hit {
            self.end_run(CrashCause::Pipe);
        }
    }

    /// Append a new pipe pair at the right edge. Running only.
    pub fn spawn_tick<R: Rng>(&mut self, rng: &mut R) {
        if self.phase != GamePhase::Running || !self.spawner_active {
            return;
        }
        let [top, bottom] = spawn_pair(rng, self.profile.gap_divisor, &self.config);
        self.events.push(SessionEvent::PairSpawned {
            top_y: top.y,
            gap: bottom.y - top.y - top.height,
        });
        self.pipes.push_back(top);
        self.pipes.push_back(bottom);
    }

    /// Drive the session from wall time.
    ///
    /// `dt_ms` is milliseconds since the last call (clamped to
    /// [`MAX_FRAME_DT_MS`]). Frames are stepped in fixed increments and the
    /// spawn countdown is charged with each frame's simulated time, firing
    /// [`spawn_tick`](Self::spawn_tick) whenever it runs out. Returns true if
    /// at least one frame was simulated.
    pub fn tick<R: Rng>(&mut self, dt_ms: u64, rng: &mut R) -> bool {
        if self.phase != GamePhase::Running {
            return false;
        }

        let frame_ms = self.config.frame_ms;
        self.accumulated_time_ms += dt_ms.min(MAX_FRAME_DT_MS);
        let mut changed = false;

        while self.accumulated_time_ms >= frame_ms {
            self.accumulated_time_ms -= frame_ms;
            self.advance_frame();
            changed = true;

            if self.phase != GamePhase::Running {
                break;
            }

            self.spawn_countdown_ms -= frame_ms as i64;
            if self.spawn_countdown_ms <= 0 {
                self.spawn_tick(rng);
                self.spawn_countdown_ms += self.profile.spawn_interval_ms as i64;
            }
        }

        changed
    }

    /// Current scene for the renderer.
    pub fn snapshot(&self) -> SceneSnapshot {
        SceneSnapshot::capture(self)
    }

    /// Hand pending events to the caller.
    pub fn drain_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }

    fn begin_run(&mut self) {
        self.phase = GamePhase::Running;
        self.profile = self.config.profile(self.difficulty);
        self.spawner_active = true;
        self.spawn_countdown_ms = self.profile.spawn_interval_ms as i64;
        self.accumulated_time_ms = 0;
        self.frame_count = 0;
    }

    fn end_run(&mut self, cause: CrashCause) {
        self.phase = GamePhase::GameOver;
        self.spawner_active = false;
        self.spawn_countdown_ms = 0;
        self.accumulated_time_ms = 0;
        self.crash_cause = Some(cause);
        self.best_score = self.best_score.max(self.score);
        self.events.push(SessionEvent::Crashed {
            cause,
            score: self.score,
            frames: self.frame_count,
        });
    }
}
