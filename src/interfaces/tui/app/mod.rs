//! TUI application state and operations

mod clipboard;
mod navigation;
mod state;
mod url_operations;
mod validation;

pub use clipboard::{ClipboardSink, SystemClipboard};
pub use state::{
    App, CurrentScreen, EditingField, FormState, PendingRequest, ResolvedTarget, TransientMessage,
};
