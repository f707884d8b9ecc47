//! System clipboard access

use crate::errors::{LinkdeckError, Result};

/// Destination for copied links
pub trait ClipboardSink {
    fn set_text(&mut self, text: &str) -> Result<()>;
}

/// arboard-backed clipboard
///
/// The handle is kept open after the first copy; on X11 the selection is
/// owned by the process and disappears once the handle is dropped.
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ClipboardSink for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        if self.inner.is_none() {
            let clipboard =
                arboard::Clipboard::new().map_err(|e| LinkdeckError::clipboard(e.to_string()))?;
            self.inner = Some(clipboard);
        }
        match self.inner.as_mut() {
            Some(clipboard) => clipboard
                .set_text(text.to_string())
                .map_err(|e| LinkdeckError::clipboard(e.to_string())),
            None => Err(LinkdeckError::clipboard("Clipboard unavailable")),
        }
    }
}
