use super::state::AppState;
use crate::clipboard::ClipboardWriter;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

pub fn handle_key_event<C: ClipboardWriter>(key: KeyEvent, state: &mut AppState<C>) {
    if state.show_help {
        handle_help_overlay(key, state);
        return;
    }

    match (key.code, key.modifiers) {
        (KeyCode::Up, KeyModifiers::NONE) | (KeyCode::Char('k'), KeyModifiers::NONE) => {
            state.move_cursor_up();
        }
        (KeyCode::Down, KeyModifiers::NONE) | (KeyCode::Char('j'), KeyModifiers::NONE) => {
            state.move_cursor_down();
        }
        (KeyCode::Home, _) | (KeyCode::Char('g'), KeyModifiers::NONE) => {
            state.move_cursor_to_top();
        }
        (KeyCode::End, _) | (KeyCode::Char('G'), _) => {
            state.move_cursor_to_bottom();
        }

        // Copy the selected block
        (KeyCode::Enter, KeyModifiers::NONE)
        | (KeyCode::Char(' '), KeyModifiers::NONE)
        | (KeyCode::Char('y'), KeyModifiers::NONE) => {
            state.activate_selected();
        }

        (KeyCode::Char('?'), _) => {
            state.show_help = true;
        }

        (KeyCode::Char('q'), KeyModifiers::NONE) | (KeyCode::Esc, _) => {
            state.should_quit = true;
        }
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => {
            state.should_quit = true;
        }

        _ => {}
    }
}

fn handle_help_overlay<C: ClipboardWriter>(key: KeyEvent, state: &mut AppState<C>) {
    match key.code {
        KeyCode::Char('?') | KeyCode::Esc => {
            state.show_help = false;
        }
        KeyCode::Char('q') => {
            state.should_quit = true;
        }
        _ => {}
    }
}

pub fn handle_mouse_event<C: ClipboardWriter>(mouse: MouseEvent, state: &mut AppState<C>) {
    if state.show_help {
        return;
    }

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(index) = state.widget_at(mouse.column, mouse.row) {
                state.activate(index);
            }
        }
        MouseEventKind::ScrollUp => state.move_cursor_up(),
        MouseEventKind::ScrollDown => state.move_cursor_down(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::state::tests::test_state;
    use crate::app::HitArea;
    use crate::clipboard::mock::MockClipboard;
    use crate::controller::WidgetState;
    use pretty_assertions::assert_eq;
    use ratatui::layout::Rect;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_navigation_keys() {
        let mut state = test_state(&["a", "b", "c"], MockClipboard::resolving());

        handle_key_event(key(KeyCode::Char('j')), &mut state);
        assert_eq!(state.cursor_position, 1);
        handle_key_event(key(KeyCode::Down), &mut state);
        assert_eq!(state.cursor_position, 2);
        handle_key_event(key(KeyCode::Char('k')), &mut state);
        assert_eq!(state.cursor_position, 1);
        handle_key_event(key(KeyCode::Home), &mut state);
        assert_eq!(state.cursor_position, 0);
        handle_key_event(key(KeyCode::End), &mut state);
        assert_eq!(state.cursor_position, 2);
    }

    #[test]
    fn test_quit_keys() {
        let mut state = test_state(&["a"], MockClipboard::resolving());
        handle_key_event(key(KeyCode::Char('q')), &mut state);
        assert!(state.should_quit);

        let mut state = test_state(&["a"], MockClipboard::resolving());
        handle_key_event(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL), &mut state);
        assert!(state.should_quit);
    }

    #[test]
    fn test_help_overlay_swallows_keys() {
        let mut state = test_state(&["a", "b"], MockClipboard::resolving());

        handle_key_event(key(KeyCode::Char('?')), &mut state);
        assert!(state.show_help);

        handle_key_event(key(KeyCode::Char('j')), &mut state);
        assert_eq!(state.cursor_position, 0);

        handle_key_event(key(KeyCode::Esc), &mut state);
        assert!(!state.show_help);
        assert!(!state.should_quit);
    }

    #[tokio::test(start_paused = true)]
    async fn test_enter_copies_selected_block() {
        let clipboard = MockClipboard::resolving();
        let mut state = test_state(&["a", "b"], clipboard.clone());

        handle_key_event(key(KeyCode::Down), &mut state);
        handle_key_event(key(KeyCode::Enter), &mut state);
        assert_eq!(state.widget_state(1), WidgetState::Busy);

        // A second press while the cycle runs does nothing.
        handle_key_event(key(KeyCode::Enter), &mut state);

        for _ in 0..4 {
            tokio::task::yield_now().await;
        }
        assert_eq!(clipboard.writes(), vec!["b".to_string()]);
        assert_eq!(state.widget_state(1), WidgetState::Success);
    }

    #[tokio::test(start_paused = true)]
    async fn test_click_copies_block_under_pointer() {
        let clipboard = MockClipboard::resolving();
        let mut state = test_state(&["a", "b"], clipboard.clone());
        state.hit_areas = vec![
            HitArea { area: Rect::new(0, 0, 20, 3), widget_index: 0 },
            HitArea { area: Rect::new(0, 3, 20, 3), widget_index: 1 },
        ];

        handle_mouse_event(click(4, 4), &mut state);
        assert_eq!(state.cursor_position, 1);
        assert_eq!(state.widget_state(1), WidgetState::Busy);

        handle_mouse_event(click(4, 10), &mut state);

        for _ in 0..4 {
            tokio::task::yield_now().await;
        }
        assert_eq!(clipboard.writes(), vec!["b".to_string()]);
    }
}
