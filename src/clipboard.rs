use arboard::Clipboard;
use std::fmt;
use std::future::Future;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use thiserror::Error;

/// The one failure a copy can end in.
///
/// Covers every way the platform can refuse a write: no display server,
/// permission denied, unsupported environment.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClipboardError {
    #[error("{cause}")]
    WriteFailed { cause: String },
}

impl ClipboardError {
    pub fn write_failed(cause: impl fmt::Display) -> Self {
        Self::WriteFailed {
            cause: cause.to_string(),
        }
    }
}

/// Asynchronous plain-text clipboard write.
pub trait ClipboardWriter: Send + Sync + 'static {
    fn write_text(&self, text: String) -> impl Future<Output = Result<(), ClipboardError>> + Send;
}

/// System clipboard backed by arboard.
///
/// arboard calls block, so each write runs on tokio's blocking pool. The
/// arboard instance is created on first use and kept for the lifetime of the
/// value: on X11 and Wayland the copied text is served by that instance, and
/// dropping it gives the selection away.
#[derive(Clone, Default)]
pub struct SystemClipboard {
    slot: Arc<Mutex<Option<Clipboard>>>,
    handoff: Option<Duration>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Block each write up to `wait` so a clipboard manager can take the
    /// selection over. For processes that exit right after copying.
    pub fn with_handoff(mut self, wait: Duration) -> Self {
        self.handoff = Some(wait);
        self
    }

    pub fn handoff(&self) -> Option<Duration> {
        self.handoff
    }
}

impl fmt::Debug for SystemClipboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SystemClipboard")
            .field("handoff", &self.handoff)
            .finish_non_exhaustive()
    }
}

fn copy_to_clipboard(
    slot: &Mutex<Option<Clipboard>>,
    text: &str,
    handoff: Option<Duration>,
) -> Result<(), ClipboardError> {
    let mut slot = slot.lock().unwrap_or_else(PoisonError::into_inner);

    let mut clipboard = match slot.take() {
        Some(clipboard) => clipboard,
        None => Clipboard::new().map_err(|e| {
            ClipboardError::write_failed(format!("Failed to access system clipboard: {e}"))
        })?,
    };

    // A failed instance is dropped so the next write reconnects.
    let result = set_text(&mut clipboard, text, handoff);
    if result.is_ok() {
        *slot = Some(clipboard);
    }
    result.map_err(|e| ClipboardError::write_failed(format!("Failed to copy text to clipboard: {e}")))
}

#[cfg(target_os = "linux")]
fn set_text(clipboard: &mut Clipboard, text: &str, handoff: Option<Duration>) -> Result<(), arboard::Error> {
    use arboard::SetExtLinux;
    use std::time::Instant;

    match handoff {
        Some(wait) => clipboard
            .set()
            .wait_until(Instant::now() + wait)
            .text(text.to_owned()),
        None => clipboard.set_text(text),
    }
}

#[cfg(not(target_os = "linux"))]
fn set_text(clipboard: &mut Clipboard, text: &str, _handoff: Option<Duration>) -> Result<(), arboard::Error> {
    clipboard.set_text(text)
}

impl ClipboardWriter for SystemClipboard {
    async fn write_text(&self, text: String) -> Result<(), ClipboardError> {
        let slot = Arc::clone(&self.slot);
        let handoff = self.handoff;
        tokio::task::spawn_blocking(move || copy_to_clipboard(&slot, &text, handoff))
            .await
            .map_err(ClipboardError::write_failed)?
    }
}

#[cfg(test)]
pub mod mock {
    use super::{ClipboardError, ClipboardWriter};
    use std::sync::{Arc, Mutex};
    use tokio::sync::Notify;

    /// In-memory clipboard that records writes and resolves or rejects on demand.
    #[derive(Clone, Default)]
    pub struct MockClipboard {
        writes: Arc<Mutex<Vec<String>>>,
        reject_with: Option<String>,
        gate: Option<Arc<Notify>>,
    }

    impl MockClipboard {
        pub fn resolving() -> Self {
            Self::default()
        }

        pub fn rejecting(cause: &str) -> Self {
            Self {
                reject_with: Some(cause.to_string()),
                ..Self::default()
            }
        }

        /// Hold every write pending until `release` is called.
        pub fn held(mut self) -> Self {
            self.gate = Some(Arc::new(Notify::new()));
            self
        }

        pub fn release(&self) {
            if let Some(gate) = &self.gate {
                gate.notify_one();
            }
        }

        pub fn writes(&self) -> Vec<String> {
            self.writes.lock().unwrap().clone()
        }
    }

    impl ClipboardWriter for MockClipboard {
        async fn write_text(&self, text: String) -> Result<(), ClipboardError> {
            self.writes.lock().unwrap().push(text);
            if let Some(gate) = &self.gate {
                gate.notified().await;
            }
            match &self.reject_with {
                Some(cause) => Err(ClipboardError::write_failed(cause)),
                None => Ok(()),
            }
        }
    }
}
