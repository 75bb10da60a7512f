//! System clipboard access.
//!
//! A small trait seam so the session controller can be exercised in tests
//! without a real display server.

use arboard::Clipboard;

use crate::error::{Error, Result};

/// Clipboard operations the session controller needs.
pub trait ClipboardAccess {
    /// Write text to the clipboard.
    fn set_text(&mut self, text: &str) -> Result<()>;

    /// Read text from the clipboard, if any is available.
    fn get_text(&mut self) -> Option<String>;
}

/// The real system clipboard, backed by arboard.
///
/// A fresh `arboard::Clipboard` handle is opened per call; keeping one
/// alive for the process lifetime holds the X11 selection on Linux.
#[derive(Debug, Default)]
pub struct SystemClipboard;

impl ClipboardAccess for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        Clipboard::new()
            .and_then(|mut cb| cb.set_text(text.to_owned()))
            .map_err(Error::clipboard)
    }

    fn get_text(&mut self) -> Option<String> {
        Clipboard::new().ok()?.get_text().ok()
    }
}
