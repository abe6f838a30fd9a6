pub mod markdown;
pub mod markers;
pub mod node;

pub use markdown::{load_document, parse_document};
pub use node::{Document, Node, NodeId, OPAQUE, TRANSPARENT};

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// A document shared between the UI loop and in-flight copy tasks.
pub type SharedDocument = Arc<Mutex<Document>>;

pub fn share(doc: Document) -> SharedDocument {
    Arc::new(Mutex::new(doc))
}

/// Lock a shared document. Node updates are plain field writes, so a
/// poisoned lock still holds a usable tree.
pub fn lock(doc: &SharedDocument) -> MutexGuard<'_, Document> {
    doc.lock().unwrap_or_else(PoisonError::into_inner)
}
