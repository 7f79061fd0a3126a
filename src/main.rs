mod input;
mod ui;

use crossterm::cursor;
use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use flappy::build_info;
use flappy::{process_input, EventLog, FlappyDifficulty, FlappySession, GameConfig};
use flappy::{EVENT_LOG_CAPACITY, FRAME_INTERVAL_MS};
use input::{map_key, KeyAction};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};

struct Options {
    difficulty: FlappyDifficulty,
    config_path: Option<PathBuf>,
    seed: Option<u64>,
}

fn print_help() {
    println!("Flappy - terminal arcade\n");
    println!("Usage: flappy [options]\n");
    println!("Options:");
    println!("  --difficulty <easy|medium|hard>  Starting difficulty (default: medium)");
    println!("  --config <file.json>             Override field and tuning values");
    println!("  --seed <n>                       Seed pipe placement");
    println!("  --version                        Show version information");
    println!("  --help                           Show this help message");
}

/// Parse command-line options. Informational flags exit here.
fn parse_args() -> io::Result<Options> {
    let args: Vec<String> = std::env::args().collect();
    let mut options = Options {
        difficulty: FlappyDifficulty::Medium,
        config_path: None,
        seed: None,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--version" | "-v" => {
                println!("{}", build_info::version_line("flappy"));
                std::process::exit(0);
            }
            "--help" | "-h" => {
                print_help();
                std::process::exit(0);
            }
            "--difficulty" | "-d" => {
                i += 1;
                let value = option_value(&args, i, "--difficulty")?;
                options.difficulty = FlappyDifficulty::parse(value).ok_or_else(|| {
                    bad_arg(format!("unknown difficulty '{}' (easy, medium, hard)", value))
                })?;
            }
            "--config" | "-c" => {
                i += 1;
                options.config_path = Some(PathBuf::from(option_value(&args, i, "--config")?));
            }
            "--seed" => {
                i += 1;
                let value = option_value(&args, i, "--seed")?;
                let seed = value
                    .parse()
                    .map_err(|_| bad_arg(format!("--seed requires a number, got '{}'", value)))?;
                options.seed = Some(seed);
            }
            other => {
                return Err(bad_arg(format!(
                    "unknown option '{}'; run 'flappy --help' for usage",
                    other
                )));
            }
        }
        i += 1;
    }

    Ok(options)
}

fn option_value<'a>(args: &'a [String], i: usize, flag: &str) -> io::Result<&'a str> {
    args.get(i)
        .map(String::as_str)
        .ok_or_else(|| bad_arg(format!("{} requires a value", flag)))
}

fn bad_arg(message: String) -> io::Error {
    io::Error::new(io::ErrorKind::InvalidInput, message)
}

fn main() -> io::Result<()> {
    let options = match parse_args() {
        Ok(options) => options,
        Err(e) => {
            eprintln!("flappy: {}", e);
            std::process::exit(2);
        }
    };

    let config = match &options.config_path {
        Some(path) => GameConfig::load(path).map_err(|e| {
            eprintln!("Failed to load config {}: {}", path.display(), e);
            e
        })?,
        None => GameConfig::default(),
    };

    let mut rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut session = FlappySession::new(config, options.difficulty);
    let mut log = EventLog::new(EVENT_LOG_CAPACITY);

    enable_raw_mode()?;
    with_restore(
        || {
            let mut stdout = io::stdout();
            stdout.execute(EnterAlternateScreen)?;
            let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
            run(&mut terminal, &mut session, &mut log, &mut rng)
        },
        restore_terminal,
    )?;

    if session.best_score > 0.0 {
        println!("Best score this session: {}", session.best_score);
    }
    Ok(())
}

/// Run `body`, then `restore` whether or not `body` failed. The body's error
/// wins over a restore error.
fn with_restore<T>(
    body: impl FnOnce() -> io::Result<T>,
    restore: impl FnOnce() -> io::Result<()>,
) -> io::Result<T> {
    let result = body();
    let restored = restore();
    let value = result?;
    restored?;
    Ok(value)
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(LeaveAlternateScreen)?;
    stdout.execute(cursor::Show)?;
    Ok(())
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    session: &mut FlappySession,
    log: &mut EventLog,
    rng: &mut StdRng,
) -> io::Result<()> {
    let frame_interval = Duration::from_millis(FRAME_INTERVAL_MS);
    let mut last_tick = Instant::now();

    loop {
        let snap = session.snapshot();
        terminal.draw(|frame| ui::draw_ui(frame, &snap, log))?;

        // Wait for input until the next frame is due
        let timeout = frame_interval.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                match map_key(key) {
                    Some(KeyAction::Quit) => return Ok(()),
                    Some(KeyAction::Game(input)) => process_input(session, input),
                    None => {}
                }
            }
        }

        let elapsed = last_tick.elapsed();
        if elapsed >= frame_interval {
            session.tick(elapsed.as_millis() as u64, rng);
            last_tick = Instant::now();
        }

        for event in session.drain_events() {
            log.record(&event);
        }
    }
}
