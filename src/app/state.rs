use crate::clipboard::{ClipboardWriter, SystemClipboard};
use crate::controller::{Activation, CopyButtonController, CopyWidget, WidgetState};
use crate::document;
use crate::ui::theme::Theme;
use ratatui::layout::{Position, Rect};
use std::path::PathBuf;
use tracing::debug;

/// Screen region occupied by one widget in the last drawn frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitArea {
    pub area: Rect,
    pub widget_index: usize,
}

pub struct AppState<C = SystemClipboard> {
    pub controller: CopyButtonController<C>,
    pub source: PathBuf,
    pub cursor_position: usize,
    pub should_quit: bool,
    pub show_help: bool,
    pub theme: Theme,
    pub hit_areas: Vec<HitArea>,
}

impl<C: ClipboardWriter> AppState<C> {
    pub fn new(controller: CopyButtonController<C>, theme: Theme, source: PathBuf) -> Self {
        Self {
            controller,
            source,
            cursor_position: 0,
            should_quit: false,
            show_help: false,
            theme,
            hit_areas: Vec::new(),
        }
    }

    pub fn widget_count(&self) -> usize {
        self.controller.widgets().len()
    }

    pub fn selected_widget(&self) -> Option<&CopyWidget> {
        self.controller.widgets().get(self.cursor_position)
    }

    pub fn widget_state(&self, index: usize) -> WidgetState {
        self.controller
            .widgets()
            .get(index)
            .map(|w| w.state(&document::lock(self.controller.document())))
            .unwrap_or_default()
    }

    pub fn move_cursor_up(&mut self) {
        self.cursor_position = self.cursor_position.saturating_sub(1);
    }

    pub fn move_cursor_down(&mut self) {
        if self.cursor_position + 1 < self.widget_count() {
            self.cursor_position += 1;
        }
    }

    pub fn move_cursor_to_top(&mut self) {
        self.cursor_position = 0;
    }

    pub fn move_cursor_to_bottom(&mut self) {
        self.cursor_position = self.widget_count().saturating_sub(1);
    }

    /// Activate the trigger of the widget at `index` and select it.
    ///
    /// The copy itself runs in the background; this returns as soon as the
    /// trigger has been disabled.
    pub fn activate(&mut self, index: usize) {
        let Some(trigger) = self.controller.widgets().get(index).map(|w| w.trigger) else {
            return;
        };
        self.cursor_position = index;

        match self.controller.activate(trigger) {
            Activation::Started(_) => debug!(index, "Copy started"),
            Activation::Ignored => debug!(index, "Copy already in progress"),
            Activation::Unwired => {}
        }
    }

    pub fn activate_selected(&mut self) {
        self.activate(self.cursor_position);
    }

    pub fn widget_at(&self, column: u16, row: u16) -> Option<usize> {
        self.hit_areas
            .iter()
            .find(|hit| hit.area.contains(Position::new(column, row)))
            .map(|hit| hit.widget_index)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::clipboard::mock::MockClipboard;
    use crate::controller::DEFAULT_RESET_DELAY;
    use crate::document::{Document, share};
    use pretty_assertions::assert_eq;

    pub(crate) fn test_state(payloads: &[&str], clipboard: MockClipboard) -> AppState<MockClipboard> {
        let mut doc = Document::new();
        for payload in payloads {
            doc.append_copyable_block(Some("caption"), payload);
        }
        let controller = CopyButtonController::attach(share(doc), clipboard, DEFAULT_RESET_DELAY);
        AppState::new(controller, Theme::default(), PathBuf::from("test.md"))
    }

    #[test]
    fn test_cursor_movement_is_clamped() {
        let mut state = test_state(&["a", "b", "c"], MockClipboard::resolving());
        assert_eq!(state.cursor_position, 0);

        state.move_cursor_up();
        assert_eq!(state.cursor_position, 0);

        state.move_cursor_down();
        state.move_cursor_down();
        state.move_cursor_down();
        assert_eq!(state.cursor_position, 2);

        state.move_cursor_to_top();
        assert_eq!(state.cursor_position, 0);

        state.move_cursor_to_bottom();
        assert_eq!(state.cursor_position, 2);
    }

    #[test]
    fn test_cursor_on_empty_document() {
        let mut state = test_state(&[], MockClipboard::resolving());
        state.move_cursor_down();
        state.move_cursor_to_bottom();
        assert_eq!(state.cursor_position, 0);
        assert!(state.selected_widget().is_none());
        assert_eq!(state.widget_state(0), WidgetState::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_activate_selects_and_starts_copy() {
        let clipboard = MockClipboard::resolving();
        let mut state = test_state(&["a", "b"], clipboard.clone());

        state.activate(1);
        assert_eq!(state.cursor_position, 1);
        assert_eq!(state.widget_state(1), WidgetState::Busy);
        assert_eq!(state.widget_state(0), WidgetState::Idle);

        tokio::task::yield_now().await;
        tokio::task::yield_now().await;
        assert_eq!(clipboard.writes(), vec!["b".to_string()]);
    }

    #[tokio::test]
    async fn test_activate_out_of_range_is_noop() {
        let clipboard = MockClipboard::resolving();
        let mut state = test_state(&["a"], clipboard.clone());
        state.activate(5);
        assert_eq!(state.cursor_position, 0);
        assert_eq!(state.widget_state(0), WidgetState::Idle);
    }

    #[test]
    fn test_widget_at() {
        let mut state = test_state(&["a", "b"], MockClipboard::resolving());
        state.hit_areas = vec![
            HitArea { area: Rect::new(0, 0, 10, 3), widget_index: 0 },
            HitArea { area: Rect::new(0, 3, 10, 4), widget_index: 1 },
        ];

        assert_eq!(state.widget_at(0, 0), Some(0));
        assert_eq!(state.widget_at(9, 2), Some(0));
        assert_eq!(state.widget_at(5, 3), Some(1));
        assert_eq!(state.widget_at(5, 7), None);
        assert_eq!(state.widget_at(10, 1), None);
    }

    #[test]
    fn test_widget_at_screen_edge() {
        let mut state = test_state(&["a"], MockClipboard::resolving());
        state.hit_areas = vec![HitArea {
            area: Rect::new(u16::MAX - 5, u16::MAX - 3, 10, 10),
            widget_index: 0,
        }];

        assert_eq!(state.widget_at(u16::MAX - 1, u16::MAX - 1), Some(0));
        assert_eq!(state.widget_at(0, 0), None);
    }
}
