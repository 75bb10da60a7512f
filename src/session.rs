//! Conversion session state.
//!
//! Owns the raw input, the format selection, and the last rendered
//! output for one interactive session. Operations mirror the form's
//! buttons: convert, clear, copy. Nothing here touches the terminal, so
//! the whole controller is unit-testable.

use crate::clipboard::ClipboardAccess;
use crate::error::{Error, Result};
use crate::quote;
use crate::types::Format;

/// One interactive session's transient state.
///
/// There is no storage and no cross-session identity; the state lives
/// exactly as long as the process.
#[derive(Debug, Clone, Default)]
pub struct Session {
    input: String,
    format: Format,
    output: String,
}

impl Session {
    /// Create a session with the given initial format selection.
    #[must_use]
    pub fn new(format: Format) -> Self {
        Self { format, ..Self::default() }
    }

    /// The current raw input text.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// The currently selected output format.
    #[must_use]
    pub const fn format(&self) -> Format {
        self.format
    }

    /// The last rendered output; empty until the first successful convert.
    #[must_use]
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Replace the raw input wholesale.
    pub fn set_input(&mut self, input: impl Into<String>) {
        self.input = input.into();
    }

    /// Select an output format. Does not re-convert; the output stays as
    /// rendered until the next convert request.
    pub fn set_format(&mut self, format: Format) {
        self.format = format;
    }

    /// Run the parse → group → render pipeline over the current input.
    ///
    /// Empty-after-trim input is [`Error::EmptyInput`]. On any failure
    /// the previous output is left untouched, matching the form's
    /// behavior of keeping the last good result on screen.
    pub fn convert(&mut self) -> Result<&str> {
        if self.input.trim().is_empty() {
            return Err(Error::EmptyInput);
        }
        self.output = quote::convert(&self.input, self.format)?;
        Ok(&self.output)
    }

    /// Reset input and output. The format selection survives.
    pub fn clear(&mut self) {
        self.input.clear();
        self.output.clear();
    }

    /// Copy the current output to the clipboard.
    ///
    /// With no output this is a no-op returning `Ok(false)` — never an
    /// error. Returns `Ok(true)` once the text has been handed to the
    /// clipboard.
    pub fn copy_output(&self, clipboard: &mut dyn ClipboardAccess) -> Result<bool> {
        if self.output.is_empty() {
            return Ok(false);
        }
        clipboard.set_text(&self.output)?;
        Ok(true)
    }
}
