//! Structural markers that tie a copy widget together.
//!
//! A trigger never references its payload or indicators directly. The
//! controller finds them by walking up to the enclosing block and querying
//! back down for these class names.

pub const COPYABLE_TEXT_BLOCK: &str = "copyable-text-block";
pub const COPYABLE_TEXT: &str = "copyable-text";
pub const COPYABLE_TEXT_CAPTION: &str = "copyable-text-caption";
pub const COPYABLE_TEXT_BUTTON: &str = "copyable-text-button";

pub const CLIPBOARD_COPY_ICON: &str = "clipboard-copy-icon";
pub const CLIPBOARD_CHECK_ICON: &str = "clipboard-check-icon";
pub const CLIPBOARD_X_ICON: &str = "clipboard-x-icon";

pub const COPY_SUCCESSFUL_MESSAGE: &str = "copy-successful-message";
pub const COPY_FAILURE_MESSAGE: &str = "copy-failure-message";

pub const SUCCESS_MESSAGE_TEXT: &str = "Copied!";
pub const FAILURE_MESSAGE_TEXT: &str = "Copy failed";
