use crate::app::{AppState, HitArea};
use crate::clipboard::ClipboardWriter;
use crate::controller::{CopyWidget, WidgetState};
use crate::document::{self, Document};
use crate::utils::unicode::{payload_lines, truncate_to_width};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

const MAX_PAYLOAD_LINES: usize = 8;

fn display_lines(doc: &Document, widget: &CopyWidget, width: usize) -> Vec<String> {
    let mut lines = payload_lines(widget.payload(doc), width);
    if lines.len() > MAX_PAYLOAD_LINES {
        let hidden = lines.len() - (MAX_PAYLOAD_LINES - 1);
        lines.truncate(MAX_PAYLOAD_LINES - 1);
        lines.push(format!("… {hidden} more lines"));
    }
    lines
}

/// Where each widget lands inside `area`, scrolled so the selected one is on screen.
pub fn layout<C: ClipboardWriter>(state: &AppState<C>, area: Rect) -> Vec<HitArea> {
    let doc = document::lock(state.controller.document());
    let content_width = area.width.saturating_sub(4) as usize;

    let heights: Vec<usize> = state
        .controller
        .widgets()
        .iter()
        .map(|w| display_lines(&doc, w, content_width).len() + 2)
        .collect();

    if heights.is_empty() {
        return Vec::new();
    }

    let cursor = state.cursor_position.min(heights.len() - 1);
    let mut start = cursor;
    let mut total = heights[cursor];
    while start > 0 && total + heights[start - 1] <= area.height as usize {
        start -= 1;
        total += heights[start];
    }

    let bottom = area.bottom();
    let mut y = area.y;
    let mut areas = Vec::new();
    for (widget_index, &height) in heights.iter().enumerate().skip(start) {
        if y >= bottom {
            break;
        }
        let height = height.min((bottom - y) as usize) as u16;
        areas.push(HitArea {
            area: Rect::new(area.x, y, area.width, height),
            widget_index,
        });
        y += height;
    }
    areas
}

pub fn render<C: ClipboardWriter>(f: &mut Frame, state: &AppState<C>, area: Rect) {
    let areas = layout(state, area);

    if areas.is_empty() {
        let message = format!("No code blocks in {}", state.source.display());
        let empty = Paragraph::new(message).style(Style::default().fg(state.theme.foreground));
        f.render_widget(empty, area);
        return;
    }

    let doc = document::lock(state.controller.document());
    let content_width = area.width.saturating_sub(4) as usize;

    for hit in areas {
        let widget = &state.controller.widgets()[hit.widget_index];
        let is_cursor = hit.widget_index == state.cursor_position;

        let border_style = if is_cursor {
            Style::default()
                .fg(state.theme.cursor)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(state.theme.border)
        };

        let caption = widget.caption(&doc).unwrap_or_default();
        let caption = truncate_to_width(caption, content_width.saturating_sub(24));
        let title = Line::from(vec![
            Span::styled(format!(" {} ", hit.widget_index + 1), border_style),
            Span::styled(format!("{caption} "), Style::default().fg(state.theme.caption)),
        ]);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title_top(title)
            .title_top(status_line(&doc, widget, state).right_aligned())
            .style(Style::default().bg(state.theme.background));

        let lines: Vec<Line> = display_lines(&doc, widget, content_width)
            .into_iter()
            .map(|line| Line::from(Span::styled(line, Style::default().fg(state.theme.foreground))))
            .collect();

        f.render_widget(Paragraph::new(lines).block(block), hit.area);
    }
}

fn status_line<'a, C: ClipboardWriter>(
    doc: &'a Document,
    widget: &CopyWidget,
    state: &AppState<C>,
) -> Line<'a> {
    let style = match widget.state(doc) {
        WidgetState::Success => Style::default().fg(state.theme.success),
        WidgetState::Failure => Style::default().fg(state.theme.failure),
        WidgetState::Idle | WidgetState::Busy => Style::default().fg(state.theme.foreground),
    };

    let icon = widget.visible_icon(doc).unwrap_or("…");
    let mut spans = vec![Span::styled(format!(" [{icon}]"), style)];
    if let Some(message) = widget.visible_message(doc) {
        spans.push(Span::styled(format!(" {message}"), style.add_modifier(Modifier::BOLD)));
    }
    spans.push(Span::raw(" "));
    Line::from(spans)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::tests::test_state;
    use crate::clipboard::mock::MockClipboard;
    use pretty_assertions::assert_eq;
    use ratatui::{Terminal, backend::TestBackend};

    #[test]
    fn test_layout_stacks_widgets() {
        let state = test_state(&["one", "two\nlines"], MockClipboard::resolving());
        let areas = layout(&state, Rect::new(0, 0, 40, 20));

        assert_eq!(
            areas,
            vec![
                HitArea { area: Rect::new(0, 0, 40, 3), widget_index: 0 },
                HitArea { area: Rect::new(0, 3, 40, 4), widget_index: 1 },
            ]
        );
    }

    #[test]
    fn test_layout_scrolls_to_cursor() {
        let mut state = test_state(&["a", "b", "c", "d"], MockClipboard::resolving());
        state.cursor_position = 3;

        let areas = layout(&state, Rect::new(0, 0, 40, 6));
        let indices: Vec<usize> = areas.iter().map(|a| a.widget_index).collect();
        assert_eq!(indices, vec![2, 3]);
    }

    #[test]
    fn test_layout_scrolls_through_many_tall_blocks() {
        let payload = (1..=8).map(|i| i.to_string()).collect::<Vec<_>>().join("\n");
        let payloads = vec![payload.as_str(); 7000];
        let mut state = test_state(&payloads, MockClipboard::resolving());
        state.move_cursor_to_bottom();

        let areas = layout(&state, Rect::new(0, 0, 80, 30));
        let indices: Vec<usize> = areas.iter().map(|a| a.widget_index).collect();
        assert_eq!(indices, vec![6997, 6998, 6999]);
        assert_eq!(areas.last().unwrap().area, Rect::new(0, 20, 80, 10));
    }

    #[test]
    fn test_long_payload_is_folded() {
        let payload = (1..=20).map(|i| i.to_string()).collect::<Vec<_>>().join("\n");
        let state = test_state(&[payload.as_str()], MockClipboard::resolving());
        let doc = document::lock(state.controller.document());
        let lines = display_lines(&doc, &state.controller.widgets()[0], 40);

        assert_eq!(lines.len(), MAX_PAYLOAD_LINES);
        assert_eq!(lines.last().unwrap(), "… 13 more lines");
    }

    #[test]
    fn test_render_shows_payload_and_idle_icon() {
        let state = test_state(&["abc123"], MockClipboard::resolving());
        let mut terminal = Terminal::new(TestBackend::new(40, 5)).unwrap();

        terminal
            .draw(|f| render(f, &state, f.area()))
            .unwrap();

        let content: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(content.contains("abc123"));
        assert!(content.contains("caption"));
        assert!(content.contains("[⧉]"));
    }

    #[test]
    fn test_render_empty_document() {
        let state = test_state(&[], MockClipboard::resolving());
        let mut terminal = Terminal::new(TestBackend::new(40, 3)).unwrap();

        terminal
            .draw(|f| render(f, &state, f.area()))
            .unwrap();

        let content: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(content.contains("No code blocks in test.md"));
    }
}
