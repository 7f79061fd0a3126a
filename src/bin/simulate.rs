//! Flappy Headless Simulator
//!
//! Runs sessions without a terminal using a fixed flap cadence, so tuning
//! changes can be checked for how long a run survives and how it scores.
//! Uses the same `FlappySession::tick()` as the interactive game.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Options:
//!   --frames N        Frame budget per run (default: 3600 = about a minute)
//!   --seed N          RNG seed (default: 42)
//!   --runs N          Number of runs with incrementing seeds (default: 1)
//!   --difficulty D    easy | medium | hard (default: medium)
//!   --flap-every N    Flap every N frames, 0 = never (default: 24)
//!   --config FILE     JSON config overrides
//!   --json            Print each run's final snapshot as JSON
//!   --verbose         Print session events as they happen

use flappy::{FlappyDifficulty, FlappySession, GameConfig, GamePhase};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{self, Write};
use std::path::PathBuf;

// ── CLI Configuration ────────────────────────────────────────────────

struct SimConfig {
    frames: u64,
    seed: u64,
    runs: u32,
    difficulty: FlappyDifficulty,
    flap_every: u64,
    config_path: Option<PathBuf>,
    json: bool,
    verbose: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            frames: 3600,
            seed: 42,
            runs: 1,
            difficulty: FlappyDifficulty::Medium,
            flap_every: 24,
            config_path: None,
            json: false,
            verbose: false,
        }
    }
}

fn parse_args() -> io::Result<SimConfig> {
    let args: Vec<String> = std::env::args().collect();
    let mut config = SimConfig::default();
    let mut i = 1;
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "--frames" => config.frames = number(&args, &mut i, flag)?,
            "--seed" => config.seed = number(&args, &mut i, flag)?,
            "--runs" => config.runs = number::<u32>(&args, &mut i, flag)?.max(1),
            "--flap-every" => config.flap_every = number(&args, &mut i, flag)?,
            "--difficulty" => {
                let raw = value(&args, &mut i, flag)?;
                config.difficulty = FlappyDifficulty::parse(raw)
                    .ok_or_else(|| bad_arg(format!("unknown difficulty '{}'", raw)))?;
            }
            "--config" => config.config_path = Some(PathBuf::from(value(&args, &mut i, flag)?)),
            "--json" => config.json = true,
            "--verbose" => config.verbose = true,
            "--help" | "-h" => {
                println!("Usage: simulate [--frames N] [--seed N] [--runs N] [--difficulty D]");
                println!("                [--flap-every N] [--config FILE] [--json] [--verbose]");
                std::process::exit(0);
            }
            other => return Err(bad_arg(format!("unknown option '{}'", other))),
        }
        i += 1;
    }
    Ok(config)
}

fn value<'a>(args: &'a [String], i: &mut usize, flag: &str) -> io::Result<&'a str> {
    *i += 1;
    args.get(*i)
        .map(String::as_str)
        .ok_or_else(|| bad_arg(format!("{} requires a value", flag)))
}

fn number<T: std::str::FromStr>(args: &[String], i: &mut usize, flag: &str) -> io::Result<T> {
    let raw = value(args, i, flag)?;
    raw.parse()
        .map_err(|_| bad_arg(format!("{} requires a number, got '{}'", flag, raw)))
}

fn bad_arg(message: String) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, message)
}

// ── Run ──────────────────────────────────────────────────────────────

struct RunSummary {
    seed: u64,
    frames: u64,
    session: FlappySession,
}

fn simulate_run(
    game_config: &GameConfig,
    sim: &SimConfig,
    seed: u64,
    out: &mut impl Write,
) -> io::Result<RunSummary> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut session = FlappySession::new(game_config.clone(), sim.difficulty);
    let frame_ms = game_config.frame_ms;

    session.start_game();
    while session.frame_count < sim.frames && session.phase == GamePhase::Running {
        if sim.flap_every > 0 && session.frame_count % sim.flap_every == 0 {
            session.flap();
        }
        session.tick(frame_ms, &mut rng);

        for event in session.drain_events() {
            if sim.verbose && !event.is_noise() {
                let frame = session.frame_count;
                writeln!(out, "[seed {} frame {:>5}] {}", seed, frame, event.message())?;
            }
        }
    }

    Ok(RunSummary {
        seed,
        frames: session.frame_count,
        session,
    })
}

fn main() -> io::Result<()> {
    let sim = match parse_args() {
        Ok(sim) => sim,
        Err(e) => {
            eprintln!("simulate: {}", e);
            std::process::exit(2);
        }
    };

    let game_config = match &sim.config_path {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut total_score = 0.0;
    let mut best = 0.0_f64;

    for run in 0..sim.runs {
        let seed = sim.seed + run as u64;
        let summary = simulate_run(&game_config, &sim, seed, &mut out)?;
        let snap = summary.session.snapshot();

        if sim.json {
            let line = serde_json::to_string(&snap)
                .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
            writeln!(out, "{}", line)?;
        } else {
            let outcome = match snap.crash_cause {
                Some(cause) => format!("{:?}", cause).to_lowercase(),
                None => "survived".to_string(),
            };
            writeln!(
                out,
                "seed={} difficulty={} frames={} score={} outcome={}",
                summary.seed,
                snap.difficulty.difficulty_str(),
                summary.frames,
                snap.score,
                outcome
            )?;
        }

        total_score += snap.score;
        best = best.max(snap.score);
    }

    if sim.runs > 1 && !sim.json {
        writeln!(
            out,
            "runs={} mean_score={:.2} best_score={}",
            sim.runs,
            total_score / sim.runs as f64,
            best
        )?;
    }

    Ok(())
}
