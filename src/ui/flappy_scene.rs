//! Terminal rendering of a Flappy scene snapshot.

use flappy::game::{CrashCause, EventLog, GamePhase, PipeRole, SceneSnapshot};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::ui::game_common::{draw_arcade_frame, draw_banner, draw_side_panel, draw_status, hint};

/// What occupies one terminal cell of the play field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SceneCell {
    Empty,
    Bird,
    Pipe,
    /// Pipe row bordering the opening.
    PipeLip,
}

/// Render the whole Flappy screen.
pub fn render_flappy(frame: &mut Frame, area: Rect, snap: &SceneSnapshot, log: &EventLog) {
    let layout = draw_arcade_frame(frame, area, Color::Cyan);

    render_play_area(frame, layout.field, snap);
    render_status_bar_content(frame, layout.status, snap);
    render_info_panel(frame, layout.side, snap, log);

    match snap.game_state {
        GamePhase::Start => draw_banner(
            frame,
            layout.field,
            Color::Yellow,
            [
                "GET READY",
                &format!("Difficulty: {}", snap.difficulty.name()),
                "[Space] Start  [1/2/3] Difficulty",
            ],
        ),
        GamePhase::GameOver => {
            let cause = match snap.crash_cause {
                Some(CrashCause::Fell) => "You fell out of the sky.",
                _ => "You hit a pipe.",
            };
            draw_banner(
                frame,
                layout.field,
                Color::Red,
                [
                    "GAME OVER",
                    &format!("{} Score: {}", cause, snap.score),
                    "[R] Restart  [1/2/3] Difficulty",
                ],
            );
        }
        GamePhase::Running => {}
    }
}

/// Classify the terminal cell at (`col`, `row`) of a `width` x `height` grid.
///
/// Each cell samples the field at its center. The bird always gets the cell
/// under its center so it stays visible on very small terminals.
pub fn cell_at(snap: &SceneSnapshot, col: u16, row: u16, width: u16, height: u16) -> SceneCell {
    if width == 0 || height == 0 {
        return SceneCell::Empty;
    }
    let cell_w = snap.field_width / width as f64;
    let cell_h = snap.field_height / height as f64;

    let bird = &snap.bird;
    let bird_col = ((bird.x + bird.width / 2.0) / cell_w).floor();
    let bird_row = ((bird.y + bird.height / 2.0) / cell_h).floor();
    if col as f64 == bird_col && row as f64 == bird_row {
        return SceneCell::Bird;
    }

    let fx = (col as f64 + 0.5) * cell_w;
    let fy = (row as f64 + 0.5) * cell_h;

    for pipe in &snap.pipes {
        if fx < pipe.x || fx >= pipe.x + pipe.width || fy < pipe.y || fy >= pipe.y + pipe.height
        {
            continue;
        }
        let at_lip = match pipe.role {
            PipeRole::Top => fy + cell_h >= pipe.y + pipe.height,
            PipeRole::Bottom => fy - cell_h < pipe.y,
        };
        return if at_lip {
            SceneCell::PipeLip
        } else {
            SceneCell::Pipe
        };
    }

    SceneCell::Empty
}

fn render_play_area(frame: &mut Frame, area: Rect, snap: &SceneSnapshot) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let bird_glyph = match snap.game_state {
        GamePhase::GameOver => "✕",
        _ => "►",
    };

    let mut lines = Vec::with_capacity(area.height as usize);
    for row in 0..area.height {
        let mut spans = Vec::with_capacity(area.width as usize);
        for col in 0..area.width {
            let span = match cell_at(snap, col, row, area.width, area.height) {
                SceneCell::Bird => Span::styled(
                    bird_glyph,
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                ),
                SceneCell::Pipe => Span::styled("█", Style::default().fg(Color::Green)),
                SceneCell::PipeLip => Span::styled("▓", Style::default().fg(Color::LightGreen)),
                SceneCell::Empty => Span::raw(" "),
            };
            spans.push(span);
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn render_status_bar_content(frame: &mut Frame, area: Rect, snap: &SceneSnapshot) {
    match snap.game_state {
        GamePhase::Start => draw_status(
            frame,
            area,
            "Press Space to start!",
            Color::Yellow,
            &[
                hint("[Space]", "Start"),
                hint("[1/2/3]", "Difficulty"),
                hint("[Q]", "Quit"),
            ],
        ),
        GamePhase::Running => draw_status(
            frame,
            area,
            &format!("Score: {}", snap.score),
            Color::Green,
            &[hint("[Space/Up]", "Flap"), hint("[Q]", "Quit")],
        ),
        GamePhase::GameOver => draw_status(
            frame,
            area,
            &format!("Final score: {}", snap.score),
            Color::Red,
            &[
                hint("[R]", "Restart"),
                hint("[1/2/3]", "Difficulty"),
                hint("[Q]", "Quit"),
            ],
        ),
    }
}

fn render_info_panel(frame: &mut Frame, area: Rect, snap: &SceneSnapshot, log: &EventLog) {
    let inner = draw_side_panel(frame, area);

    if inner.height < 2 || inner.width < 4 {
        return;
    }

    let label = Style::default().fg(Color::DarkGray);
    let difficulty_style = if snap.difficulty_locked {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    };

    let mut lines = vec![
        Line::from(Span::styled(
            format!(" {} ", snap.difficulty.name()),
            difficulty_style,
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled(" Score: ", label),
            Span::styled(
                format!("{}", snap.score),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(vec![
            Span::styled(" Best: ", label),
            Span::styled(
                format!("{}", snap.best_score),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(vec![
            Span::styled(" Gap: ", label),
            Span::styled(format!("{:.0}px", snap.gap), Style::default().fg(Color::Green)),
        ]),
        Line::from(vec![
            Span::styled(" State: ", label),
            Span::styled(snap.game_state.label(), Style::default().fg(Color::White)),
        ]),
        Line::from(""),
    ];

    if !log.is_empty() {
        lines.push(Line::from(Span::styled(" Log:", label)));
        let width = inner.width.saturating_sub(2) as usize;
        for entry in log.entries() {
            let text: String = entry.chars().take(width).collect();
            lines.push(Line::from(Span::styled(
                format!(" {}", text),
                Style::default().fg(Color::Gray),
            )));
        }
    }

    frame.render_widget(Paragraph::new(lines), inner);
}
