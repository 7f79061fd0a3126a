//! Terminal presentation. Binary-only: the library never draws.

pub mod flappy_scene;
pub mod game_common;

use flappy::{EventLog, SceneSnapshot};
use ratatui::Frame;

/// Draw one frame of the game screen.
pub fn draw_ui(frame: &mut Frame, snap: &SceneSnapshot, log: &EventLog) {
    let area = frame.size();
    flappy_scene::render_flappy(frame, area, snap, log);
}
