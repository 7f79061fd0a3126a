//! Flappy - Terminal Arcade Library
//!
//! Exposes the simulation core for the binaries, tests and any other
//! renderer that wants to drive a session.

pub mod build_info;
pub mod config;
pub mod constants;
pub mod game;

pub use config::GameConfig;
pub use constants::*;
pub use game::{
    process_input, EventLog, FlappyDifficulty, FlappyInput, FlappySession, GamePhase,
    SceneSnapshot, SessionEvent,
};
