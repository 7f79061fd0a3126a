//! Screen chrome around the play field: outer frame, key hints, side panel
//! and the phase banner.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Width of the side panel in cells.
pub const SIDE_PANEL_WIDTH: u16 = 26;
/// Rows reserved under the field for the status line and key hints.
const STATUS_ROWS: u16 = 2;
const BANNER_ROWS: u16 = 5;

/// A key and what it does, shown on the hint line.
pub struct KeyHint {
    pub key: &'static str,
    pub action: &'static str,
}

pub const fn hint(key: &'static str, action: &'static str) -> KeyHint {
    KeyHint { key, action }
}

/// Regions of the arcade screen.
pub struct ArcadeLayout {
    pub field: Rect,
    pub status: Rect,
    pub side: Rect,
}

/// Split the inside of the outer frame into field, status rows and side panel.
pub fn split_arcade(inner: Rect) -> ArcadeLayout {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(SIDE_PANEL_WIDTH)])
        .split(inner);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(8), Constraint::Length(STATUS_ROWS)])
        .split(columns[0]);

    ArcadeLayout {
        field: rows[0],
        status: rows[1],
        side: columns[1],
    }
}

/// Draw the outer frame and return the regions inside it.
pub fn draw_arcade_frame(frame: &mut Frame, area: Rect, accent: Color) -> ArcadeLayout {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(" Flappy ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    split_arcade(inner)
}

/// Status message on the first row, key hints on the second.
pub fn draw_status(frame: &mut Frame, area: Rect, message: &str, color: Color, hints: &[KeyHint]) {
    if area.height == 0 {
        return;
    }
    frame.render_widget(
        Paragraph::new(message)
            .style(Style::default().fg(color))
            .alignment(Alignment::Center),
        Rect { height: 1, ..area },
    );

    if area.height < 2 || hints.is_empty() {
        return;
    }
    let mut spans = Vec::with_capacity(hints.len() * 3);
    for (i, h) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(h.key, Style::default().fg(Color::White)));
        spans.push(Span::styled(
            format!(" {}", h.action),
            Style::default().fg(Color::DarkGray),
        ));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        Rect {
            y: area.y + 1,
            height: 1,
            ..area
        },
    );
}

/// Bordered side panel. Returns the area inside the border.
pub fn draw_side_panel(frame: &mut Frame, area: Rect) -> Rect {
    let block = Block::default()
        .title(" Run ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// Rows the banner occupies: centered vertically in the field, or `None` if
/// the field is too short to hold it.
pub fn banner_rect(field: Rect) -> Option<Rect> {
    if field.height < BANNER_ROWS {
        return None;
    }
    Some(Rect {
        x: field.x,
        y: field.y + (field.height - BANNER_ROWS) / 2,
        width: field.width,
        height: BANNER_ROWS,
    })
}

/// Phase banner drawn over the frozen field.
pub fn draw_banner(frame: &mut Frame, field: Rect, color: Color, lines: [&str; 3]) {
    let Some(area) = banner_rect(field) else {
        return;
    };
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [title, message, footer] = lines;
    let text = vec![
        Line::from(Span::styled(
            title,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(message, Style::default().fg(Color::White))),
        Line::from(Span::styled(footer, Style::default().fg(Color::DarkGray))),
    ];
    frame.render_widget(Paragraph::new(text).alignment(Alignment::Center), inner);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_reserves_side_panel_and_status_rows() {
        let layout = split_arcade(Rect::new(0, 0, 80, 30));
        assert_eq!(layout.side.width, SIDE_PANEL_WIDTH);
        assert_eq!(layout.status.height, STATUS_ROWS);
        assert_eq!(layout.field.width, 80 - SIDE_PANEL_WIDTH);
        assert_eq!(layout.field.height, 30 - STATUS_ROWS);
    }

    #[test]
    fn test_banner_centered_in_field() {
        let field = Rect::new(2, 1, 40, 21);
        let banner = banner_rect(field).expect("field is tall enough");
        assert_eq!(banner.y, 1 + 8);
        assert_eq!(banner.height, BANNER_ROWS);
        assert_eq!(banner.width, 40);
    }

    #[test]
    fn test_banner_skipped_on_short_field() {
        assert!(banner_rect(Rect::new(0, 0, 40, 4)).is_none());
    }
}
