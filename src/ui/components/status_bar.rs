use crate::app::AppState;
use crate::clipboard::ClipboardWriter;
use ratatui::{
    Frame,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
};

const VERSION: &str = env!("CARGO_PKG_VERSION");

pub fn status_text<C: ClipboardWriter>(state: &AppState<C>, width: u16) -> String {
    let source = state
        .source
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| state.source.display().to_string());

    let selection = if state.widget_count() == 0 {
        String::new()
    } else {
        format!(
            " | block {}/{} {}",
            state.cursor_position + 1,
            state.widget_count(),
            state.widget_state(state.cursor_position)
        )
    };

    let nav_hint = "⏎ copy  ? help  q quit";
    let version_text = format!("v{VERSION}");

    let left_content = format!(" {source}{selection}");

    let padding = width.saturating_sub(
        left_content.chars().count() as u16
            + nav_hint.chars().count() as u16
            + version_text.len() as u16
            + 3,
    );

    format!(
        "{} {} {:>padding$} {}",
        left_content,
        nav_hint,
        "",
        version_text,
        padding = padding as usize
    )
}

pub fn render<C: ClipboardWriter>(f: &mut Frame, state: &AppState<C>, area: Rect) {
    let style = Style::default()
        .fg(state.theme.status_bar_fg)
        .bg(state.theme.status_bar_bg);

    let status = Paragraph::new(Line::from(vec![Span::styled(
        status_text(state, area.width),
        style,
    )]))
    .style(style);

    f.render_widget(status, area);
}
