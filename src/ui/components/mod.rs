pub mod block_list;
pub mod status_bar;

use crate::app::{AppState, HitArea};
use crate::clipboard::ClipboardWriter;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

fn split(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // Copy blocks
            Constraint::Length(1), // Status bar
        ])
        .split(area);
    (chunks[0], chunks[1])
}

pub fn render<C: ClipboardWriter>(f: &mut Frame, state: &AppState<C>) {
    let (list_area, status_area) = split(f.area());

    block_list::render(f, state, list_area);
    status_bar::render(f, state, status_area);

    if state.show_help {
        render_help_overlay(f, state);
    }
}

/// Clickable widget regions for a frame of the given size.
pub fn hit_areas<C: ClipboardWriter>(state: &AppState<C>, area: Rect) -> Vec<HitArea> {
    let (list_area, _) = split(area);
    block_list::layout(state, list_area)
}

fn render_help_overlay<C: ClipboardWriter>(f: &mut Frame, state: &AppState<C>) {
    let help_text = r#"
    copy-tui Help

      ↑/↓ or j/k            Move selection
      g/G or Home/End       First/last block
      Enter, Space or y     Copy selected block
      Left click            Copy clicked block
      ?                     Toggle help
      q or Esc              Quit

    A copied block shows ✓ and a failed copy ✗
    until it resets.
    "#;

    let area = centered_rect(60, 60, f.area());

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(state.theme.background));

    let paragraph = Paragraph::new(help_text)
        .block(block)
        .style(Style::default().fg(state.theme.foreground))
        .wrap(Wrap { trim: true });

    f.render_widget(Clear, area);
    f.render_widget(paragraph, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
