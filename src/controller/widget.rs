use super::state::WidgetState;
use crate::document::markers::*;
use crate::document::{Document, NodeId, OPAQUE, TRANSPARENT};

/// The nodes making up one copy widget, resolved from its trigger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CopyWidget {
    pub block: NodeId,
    pub trigger: NodeId,
    pub payload: NodeId,
    pub idle_icon: NodeId,
    pub success_icon: NodeId,
    pub success_message: NodeId,
    pub failure_icon: NodeId,
    pub failure_message: NodeId,
}

impl CopyWidget {
    /// Resolve the widget a trigger belongs to.
    ///
    /// Payload and messages are looked up inside the nearest enclosing
    /// block; the icons inside the trigger itself. Returns `None` when any
    /// part is missing.
    pub fn locate(doc: &Document, trigger: NodeId) -> Option<Self> {
        let block = doc.closest(trigger, COPYABLE_TEXT_BLOCK)?;

        Some(Self {
            block,
            trigger,
            payload: doc.query(block, COPYABLE_TEXT)?,
            success_message: doc.query(block, COPY_SUCCESSFUL_MESSAGE)?,
            failure_message: doc.query(block, COPY_FAILURE_MESSAGE)?,
            idle_icon: doc.query(trigger, CLIPBOARD_COPY_ICON)?,
            success_icon: doc.query(trigger, CLIPBOARD_CHECK_ICON)?,
            failure_icon: doc.query(trigger, CLIPBOARD_X_ICON)?,
        })
    }

    pub fn payload<'a>(&self, doc: &'a Document) -> &'a str {
        doc.text(self.payload).unwrap_or_default()
    }

    pub fn caption<'a>(&self, doc: &'a Document) -> Option<&'a str> {
        doc.query(self.block, COPYABLE_TEXT_CAPTION)
            .and_then(|id| doc.text(id))
    }

    pub fn state(&self, doc: &Document) -> WidgetState {
        if !doc.is_disabled(self.trigger) {
            WidgetState::Idle
        } else if doc.is_visible(self.success_icon) {
            WidgetState::Success
        } else if doc.is_visible(self.failure_icon) {
            WidgetState::Failure
        } else {
            WidgetState::Busy
        }
    }

    /// The indicator glyph currently shown on the trigger, if any.
    pub fn visible_icon<'a>(&self, doc: &'a Document) -> Option<&'a str> {
        [self.idle_icon, self.success_icon, self.failure_icon]
            .into_iter()
            .find(|&id| doc.is_visible(id))
            .and_then(|id| doc.text(id))
    }

    /// The status message currently shown, if any.
    pub fn visible_message<'a>(&self, doc: &'a Document) -> Option<&'a str> {
        [self.success_message, self.failure_message]
            .into_iter()
            .find(|&id| doc.is_visible(id))
            .and_then(|id| doc.text(id))
    }

    pub(crate) fn begin(&self, doc: &mut Document) {
        doc.set_disabled(self.trigger, true);
        doc.set_opacity(self.idle_icon, TRANSPARENT);
    }

    pub(crate) fn show_success(&self, doc: &mut Document) {
        doc.set_opacity(self.success_message, OPAQUE);
        doc.set_opacity(self.success_icon, OPAQUE);
    }

    pub(crate) fn show_failure(&self, doc: &mut Document) {
        doc.set_opacity(self.failure_message, OPAQUE);
        doc.set_opacity(self.failure_icon, OPAQUE);
    }

    /// Hide every status indicator, bring back the idle icon and re-enable
    /// the trigger, whichever branch ran.
    pub(crate) fn reset(&self, doc: &mut Document) {
        doc.set_opacity(self.success_message, TRANSPARENT);
        doc.set_opacity(self.success_icon, TRANSPARENT);
        doc.set_opacity(self.failure_message, TRANSPARENT);
        doc.set_opacity(self.failure_icon, TRANSPARENT);

        doc.set_opacity(self.idle_icon, OPAQUE);

        doc.set_disabled(self.trigger, false);
    }
}
