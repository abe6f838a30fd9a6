pub mod state;
pub mod widget;

pub use state::WidgetState;
pub use widget::CopyWidget;

use crate::clipboard::{ClipboardError, ClipboardWriter};
use crate::document::markers::COPYABLE_TEXT_BUTTON;
use crate::document::{self, NodeId, SharedDocument};
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{Instant, sleep_until};
use tracing::{debug, error, info, warn};

pub const DEFAULT_RESET_DELAY: Duration = Duration::from_millis(5000);

/// How a settled clipboard write ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Copied,
    Failed(ClipboardError),
}

/// What an activation did.
#[derive(Debug)]
pub enum Activation {
    /// The cycle started. The handle resolves once the write settled and
    /// the reset was scheduled.
    Started(JoinHandle<Outcome>),
    /// The trigger was disabled, a cycle is already running.
    Ignored,
    /// The node is not a trigger wired at setup.
    Unwired,
}

/// Drives the copy cycle for every widget found when it was attached.
pub struct CopyButtonController<C> {
    doc: SharedDocument,
    clipboard: Arc<C>,
    widgets: Vec<CopyWidget>,
    reset_delay: Duration,
}

impl<C: ClipboardWriter> CopyButtonController<C> {
    /// Wire one handler to every trigger currently in the document.
    ///
    /// Triggers added to the document afterwards are not picked up.
    pub fn attach(doc: SharedDocument, clipboard: C, reset_delay: Duration) -> Self {
        let widgets = {
            let guard = document::lock(&doc);
            guard
                .query_all(guard.root(), COPYABLE_TEXT_BUTTON)
                .into_iter()
                .filter_map(|trigger| {
                    let widget = CopyWidget::locate(&guard, trigger);
                    if widget.is_none() {
                        warn!(%trigger, "Copy trigger is missing part of its widget, not wiring it");
                    }
                    widget
                })
                .collect::<Vec<_>>()
        };

        debug!(count = widgets.len(), "Attached copy triggers");

        Self {
            doc,
            clipboard: Arc::new(clipboard),
            widgets,
            reset_delay,
        }
    }

    pub fn document(&self) -> &SharedDocument {
        &self.doc
    }

    pub fn widgets(&self) -> &[CopyWidget] {
        &self.widgets
    }

    pub fn reset_delay(&self) -> Duration {
        self.reset_delay
    }

    pub fn widget_for(&self, trigger: NodeId) -> Option<&CopyWidget> {
        self.widgets.iter().find(|w| w.trigger == trigger)
    }

    /// Handle one activation of `trigger`.
    ///
    /// The trigger is disabled and the idle icon hidden before this returns.
    /// The clipboard write and the delayed reset run on the tokio runtime,
    /// so this must be called from within one.
    pub fn activate(&self, trigger: NodeId) -> Activation {
        let Some(widget) = self.widget_for(trigger).copied() else {
            return Activation::Unwired;
        };

        let text = {
            let mut doc = document::lock(&self.doc);
            if doc.is_disabled(widget.trigger) {
                return Activation::Ignored;
            }
            widget.begin(&mut doc);
            widget.payload(&doc).to_string()
        };

        let doc = Arc::clone(&self.doc);
        let clipboard = Arc::clone(&self.clipboard);
        let reset_delay = self.reset_delay;

        Activation::Started(tokio::spawn(run_cycle(
            doc,
            clipboard,
            widget,
            text,
            reset_delay,
        )))
    }
}

async fn run_cycle<C: ClipboardWriter>(
    doc: SharedDocument,
    clipboard: Arc<C>,
    widget: CopyWidget,
    text: String,
    reset_delay: Duration,
) -> Outcome {
    let outcome = match clipboard.write_text(text.clone()).await {
        Ok(()) => {
            info!("Successfully copied text: {text}");
            widget.show_success(&mut document::lock(&doc));
            Outcome::Copied
        }
        Err(err) => {
            error!("Failed to copy text: {text}, Failed with error: {err}");
            widget.show_failure(&mut document::lock(&doc));
            Outcome::Failed(err)
        }
    };

    let deadline = Instant::now() + reset_delay;
    tokio::spawn(async move {
        sleep_until(deadline).await;
        widget.reset(&mut document::lock(&doc));
        debug!(trigger = %widget.trigger, "Copy widget reset");
    });

    outcome
}
