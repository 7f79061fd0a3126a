//! Integration test: session lifecycle
//!
//! Drives `FlappySession` through START → RUNNING → GAME_OVER → RUNNING the
//! way a renderer would, checking the frozen-state, scoring and restart rules.
//!
//! Uses seeded ChaCha8Rng for deterministic pipe placement.

use flappy::game::{CrashCause, Pipe, PipeRole};
use flappy::{
    process_input, FlappyDifficulty, FlappyInput, FlappySession, GameConfig, GamePhase,
    SessionEvent,
};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn test_rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(42)
}

fn running_session(difficulty: FlappyDifficulty) -> FlappySession {
    let mut session = FlappySession::with_difficulty(difficulty);
    process_input(&mut session, FlappyInput::Start);
    session
}

/// Flap whenever the bird sinks below the middle of the field.
fn hover(session: &mut FlappySession) {
    if session.bird.y > 300.0 && session.bird.velocity > 0.0 {
        session.flap();
    }
}

// =============================================================================
// Frozen states
// =============================================================================

#[test]
fn test_start_phase_ignores_frames_and_spawns() {
    let mut session = FlappySession::with_difficulty(FlappyDifficulty::Medium);
    let mut rng = test_rng();
    let before = session.snapshot();

    for _ in 0..100 {
        session.advance_frame();
        session.spawn_tick(&mut rng);
        session.tick(16, &mut rng);
    }

    assert_eq!(session.snapshot(), before);
}

#[test]
fn test_game_over_freezes_last_frame() {
    let mut session = running_session(FlappyDifficulty::Medium);
    let mut rng = test_rng();
    session.spawn_tick(&mut rng);
    for _ in 0..10 {
        session.advance_frame();
    }
    session.bird.y = 650.0;
    session.advance_frame();
    assert_eq!(session.phase, GamePhase::GameOver);

    let frozen = session.snapshot();
    for _ in 0..50 {
        session.advance_frame();
        session.spawn_tick(&mut rng);
        session.tick(16, &mut rng);
        session.flap();
    }
    assert_eq!(session.snapshot(), frozen);
    assert_eq!(frozen.pipes.len(), 2);
}

// =============================================================================
// Physics through the session
// =============================================================================

#[test]
fn test_five_frames_of_free_fall_on_easy() {
    let mut session = running_session(FlappyDifficulty::Easy);
    let start_y = session.bird.y;

    let mut expected_y = start_y;
    let mut velocity = 0.0;
    for _ in 0..5 {
        session.advance_frame();
        velocity += 0.2;
        expected_y += velocity;
    }

    assert!((session.bird.velocity - 1.0).abs() < 1e-9);
    assert!((session.bird.y - expected_y).abs() < 1e-9);
}

#[test]
fn test_bird_never_above_field_top() {
    let mut session = running_session(FlappyDifficulty::Hard);
    for frame in 0..400 {
        if frame % 3 == 0 {
            session.flap();
        }
        session.advance_frame();
        assert!(session.bird.y >= 0.0, "bird went above the top on frame {}", frame);
        if session.phase != GamePhase::Running {
            break;
        }
    }
}

#[test]
fn test_flap_uses_profile_impulse_for_each_difficulty() {
    for difficulty in FlappyDifficulty::ALL {
        let mut session = running_session(difficulty);
        session.bird.velocity = 4.2;
        session.flap();
        assert_eq!(
            session.bird.velocity,
            difficulty.default_profile().flap_impulse
        );
    }
}

#[test]
fn test_free_fall_ends_run_as_fell() {
    let mut session = running_session(FlappyDifficulty::Medium);
    let mut rng = test_rng();
    let mut frames = 0;
    while session.phase == GamePhase::Running && frames < 1_000 {
        session.tick(16, &mut rng);
        frames += 1;
    }
    assert_eq!(session.phase, GamePhase::GameOver);
    assert_eq!(session.crash_cause, Some(CrashCause::Fell));
    assert!(session.bird.y > 640.0);
}

// =============================================================================
// Pipes, scoring and collision
// =============================================================================

#[test]
fn test_reference_overlap_scenario() {
    let mut session = running_session(FlappyDifficulty::Medium);
    session.bird.y = 320.0;
    session.pipes.push_back(Pipe {
        x: 40.0,
        y: 300.0,
        width: 64.0,
        height: 250.0,
        role: PipeRole::Bottom,
        passed: false,
    });

    session.advance_frame();

    assert_eq!(session.phase, GamePhase::GameOver);
    assert_eq!(session.crash_cause, Some(CrashCause::Pipe));
}

#[test]
fn test_threading_a_gap_scores_one_per_pair() {
    let config = GameConfig::default();
    let mut session = running_session(FlappyDifficulty::Easy);
    // Opening from 190 to 403, comfortably around the hover band
    for (y, role) in [(-60.0, PipeRole::Top), (403.0, PipeRole::Bottom)] {
        session.pipes.push_back(Pipe {
            x: config.field_width,
            y,
            width: config.pipe_width,
            height: config.pipe_height,
            role,
            passed: false,
        });
    }

    let mut scores = Vec::new();
    for _ in 0..200 {
        hover(&mut session);
        session.advance_frame();
        scores.push(session.score);
        if session.phase != GamePhase::Running {
            break;
        }
    }

    assert_eq!(session.phase, GamePhase::Running);
    assert_eq!(session.score, 1.0);
    // Score never moves backwards and only in half-point multiples
    for pair in scores.windows(2) {
        let step = pair[1] - pair[0];
        assert!(step == 0.0 || step == 0.5 || step == 1.0);
    }
}

#[test]
fn test_passed_pipes_eventually_evicted() {
    let mut session = running_session(FlappyDifficulty::Easy);
    let mut rng = test_rng();
    session.spawn_tick(&mut rng);

    let mut evicted = 0;
    for _ in 0..250 {
        // Park the bird at the top and keep the pipes below it
        session.bird.y = 0.0;
        session.bird.velocity = 0.0;
        session.pipes.iter_mut().for_each(|p| p.y = p.y.max(100.0));
        session.advance_frame();
        for event in session.drain_events() {
            if let SessionEvent::PipesEvicted { count } = event {
                evicted += count;
            }
        }
    }

    assert_eq!(evicted, 2);
    assert!(session.pipes.is_empty());
    assert_eq!(session.score, 1.0);
}

// =============================================================================
// Restart and difficulty
// =============================================================================

#[test]
fn test_restart_from_game_over_in_one_call() {
    let mut session = running_session(FlappyDifficulty::Medium);
    let mut rng = test_rng();
    session.spawn_tick(&mut rng);
    session.spawn_tick(&mut rng);
    session.score = 7.5;
    session.bird.y = 700.0;
    session.advance_frame();
    assert_eq!(session.phase, GamePhase::GameOver);

    process_input(&mut session, FlappyInput::Restart);

    let snap = session.snapshot();
    assert_eq!(snap.game_state, GamePhase::Running);
    assert_eq!(snap.score, 0.0);
    assert!(snap.pipes.is_empty());
    assert_eq!(snap.bird.y, 308.0);
    assert_eq!(session.bird.velocity, 0.0);
    assert_eq!(snap.best_score, 7.5);
}

#[test]
fn test_spawner_rearmed_after_restart() {
    let mut session = running_session(FlappyDifficulty::Hard);
    let mut rng = test_rng();
    session.bird.y = 700.0;
    session.advance_frame();
    assert!(!session.spawner_active);

    session.set_difficulty(FlappyDifficulty::Easy);
    session.restart();
    assert!(session.spawner_active);
    assert_eq!(session.spawn_countdown_ms, 1800);

    session.spawn_tick(&mut rng);
    assert_eq!(session.pipes.len(), 2);
    let gap = session.pipes[1].y - (session.pipes[0].y + session.pipes[0].height);
    assert!((gap - 640.0 / 3.0).abs() < 1e-9);
}

#[test]
fn test_difficulty_keys_ignored_mid_run() {
    let mut session = running_session(FlappyDifficulty::Medium);
    process_input(
        &mut session,
        FlappyInput::SelectDifficulty(FlappyDifficulty::Hard),
    );
    assert_eq!(session.difficulty, FlappyDifficulty::Medium);
    assert!(session.snapshot().difficulty_locked);
}

#[test]
fn test_independent_sessions_do_not_interfere() {
    let mut a = running_session(FlappyDifficulty::Easy);
    let b = running_session(FlappyDifficulty::Easy);
    for _ in 0..20 {
        a.advance_frame();
    }
    assert_ne!(a.bird.y, b.bird.y);
    assert_eq!(b.bird.y, 308.0);
}
