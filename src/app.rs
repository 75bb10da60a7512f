//! TUI application state and key handling.
//!
//! [`App`] wraps the pure [`Session`] controller with everything the
//! terminal needs: the input editor, command mode, transient messages,
//! and the key dispatch that ties them together.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use unicode_width::UnicodeWidthStr;

use crate::clipboard::{ClipboardAccess, SystemClipboard};
use crate::config::Config;
use crate::constants::{editor, status};
use crate::error::Error;
use crate::session::Session;
use crate::types::Format;

/// Multi-line input editor state.
///
/// Content is kept as one `String` per line; the cursor column is a
/// character index (converted to bytes only at the edit site), so pasted
/// emoji and other multi-byte text move the cursor correctly.
#[derive(Debug, Clone)]
pub struct EditorState {
    /// Editor lines; never empty (an empty editor is one empty line).
    pub content: Vec<String>,
    /// Cursor column as a character index into the current line.
    pub cursor_x: usize,
    /// Cursor line index.
    pub cursor_y: usize,
    /// First visible line.
    pub scroll_offset: usize,
    /// Visible height, written back by the UI on every draw.
    pub viewport_height: usize,
}

impl Default for EditorState {
    fn default() -> Self {
        Self {
            content: vec![String::new()],
            cursor_x: 0,
            cursor_y: 0,
            scroll_offset: 0,
            viewport_height: editor::DEFAULT_VIEWPORT_HEIGHT,
        }
    }
}

/// Byte offset of a character index, clamping past-the-end to the end.
fn byte_index(line: &str, char_idx: usize) -> usize {
    line.char_indices().nth(char_idx).map_or(line.len(), |(i, _)| i)
}

impl EditorState {
    /// The full editor text, lines joined with `\n`.
    #[must_use]
    pub fn text(&self) -> String {
        self.content.join("\n")
    }

    /// Whether the editor holds any non-whitespace content.
    #[must_use]
    pub fn has_content(&self) -> bool {
        self.content.iter().any(|line| !line.trim().is_empty())
    }

    /// Display width of the text left of the cursor, for cursor placement.
    #[must_use]
    pub fn cursor_display_column(&self) -> usize {
        self.content.get(self.cursor_y).map_or(0, |line| {
            let byte = byte_index(line, self.cursor_x);
            line[..byte].width()
        })
    }

    fn current_line_chars(&self) -> usize {
        self.content.get(self.cursor_y).map_or(0, |l| l.chars().count())
    }

    fn insert_char(&mut self, c: char) {
        if self.cursor_y >= self.content.len() {
            self.content.push(String::new());
        }
        let line = &mut self.content[self.cursor_y];
        let byte = byte_index(line, self.cursor_x);
        line.insert(byte, c);
        self.cursor_x += 1;
    }

    /// Insert possibly multi-line text at the cursor (paste path).
    fn insert_str(&mut self, text: &str) {
        let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
        let byte = byte_index(&self.content[self.cursor_y], self.cursor_x);
        let tail = self.content[self.cursor_y].split_off(byte);
        let mut segments = normalized.split('\n');
        if let Some(first) = segments.next() {
            self.content[self.cursor_y].push_str(first);
            self.cursor_x += first.chars().count();
        }
        for segment in segments {
            self.cursor_y += 1;
            self.content.insert(self.cursor_y, segment.to_string());
            self.cursor_x = segment.chars().count();
        }
        self.content[self.cursor_y].push_str(&tail);
    }

    fn insert_newline(&mut self) {
        let byte = byte_index(&self.content[self.cursor_y], self.cursor_x);
        let remainder = self.content[self.cursor_y].split_off(byte);
        self.cursor_y += 1;
        self.content.insert(self.cursor_y, remainder);
        self.cursor_x = 0;
    }

    fn delete_backward(&mut self) {
        if self.cursor_x > 0 {
            let line = &mut self.content[self.cursor_y];
            let byte = byte_index(line, self.cursor_x - 1);
            line.remove(byte);
            self.cursor_x -= 1;
        } else if self.cursor_y > 0 {
            let line = self.content.remove(self.cursor_y);
            self.cursor_y -= 1;
            self.cursor_x = self.current_line_chars();
            self.content[self.cursor_y].push_str(&line);
        }
    }

    fn delete_forward(&mut self) {
        if self.cursor_x < self.current_line_chars() {
            let line = &mut self.content[self.cursor_y];
            let byte = byte_index(line, self.cursor_x);
            line.remove(byte);
        } else if self.cursor_y + 1 < self.content.len() {
            let next = self.content.remove(self.cursor_y + 1);
            self.content[self.cursor_y].push_str(&next);
        }
    }

    fn move_left(&mut self) {
        if self.cursor_x > 0 {
            self.cursor_x -= 1;
        } else if self.cursor_y > 0 {
            self.cursor_y -= 1;
            self.cursor_x = self.current_line_chars();
        }
    }

    fn move_right(&mut self) {
        if self.cursor_x < self.current_line_chars() {
            self.cursor_x += 1;
        } else if self.cursor_y + 1 < self.content.len() {
            self.cursor_y += 1;
            self.cursor_x = 0;
        }
    }

    fn move_up(&mut self) {
        if self.cursor_y > 0 {
            self.cursor_y -= 1;
            self.cursor_x = self.cursor_x.min(self.current_line_chars());
        }
    }

    fn move_down(&mut self) {
        if self.cursor_y + 1 < self.content.len() {
            self.cursor_y += 1;
            self.cursor_x = self.cursor_x.min(self.current_line_chars());
        }
    }

    /// Keep the cursor inside the viewport after any edit or movement.
    fn scroll_to_cursor(&mut self) {
        if self.cursor_y < self.scroll_offset {
            self.scroll_offset = self.cursor_y;
        } else if self.cursor_y >= self.scroll_offset + self.viewport_height {
            self.scroll_offset = self.cursor_y + 1 - self.viewport_height;
        }
    }

    fn reset(&mut self) {
        *self = Self {
            viewport_height: self.viewport_height,
            ..Self::default()
        };
    }
}

/// Transient feedback shown in the command bar.
#[derive(Debug, Clone)]
pub struct StatusMessage {
    /// Text shown to the user.
    pub text: String,
    expires_at: Option<Instant>,
}

impl StatusMessage {
    fn copied() -> Self {
        Self {
            text: "Copied!".to_string(),
            expires_at: Some(Instant::now() + status::COPIED_TTL),
        }
    }

    fn expired_by(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|deadline| now >= deadline)
    }
}

/// Top-level application state.
pub struct App {
    /// Conversion session (input text, format, rendered output).
    pub session: Session,
    /// Input editor state.
    pub editor: EditorState,
    /// Buffer for `:` commands.
    pub command_buffer: String,
    /// Whether the command bar owns keystrokes.
    pub is_command_mode: bool,
    /// Blocking error modal text, dismissed with Esc.
    pub error_message: Option<String>,
    /// Transient command-bar feedback, auto-expiring.
    pub status_message: Option<StatusMessage>,
    /// Whether the help modal is shown.
    pub show_help: bool,
    /// Loaded configuration.
    pub config: Config,
    should_quit: bool,
    clipboard: Box<dyn ClipboardAccess>,
}

impl App {
    /// Create the application from loaded configuration.
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self::with_clipboard(config, Box::new(SystemClipboard))
    }

    /// Create the application with a specific clipboard implementation.
    #[must_use]
    pub fn with_clipboard(config: Config, clipboard: Box<dyn ClipboardAccess>) -> Self {
        Self {
            session: Session::new(config.initial_format),
            editor: EditorState::default(),
            command_buffer: String::new(),
            is_command_mode: false,
            error_message: None,
            status_message: None,
            show_help: false,
            config,
            should_quit: false,
            clipboard,
        }
    }

    /// Whether the event loop should exit.
    #[must_use]
    pub const fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Request a clean exit.
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Drop the status message once its deadline has passed.
    pub fn expire_status(&mut self, now: Instant) {
        if self.status_message.as_ref().is_some_and(|s| s.expired_by(now)) {
            self.status_message = None;
        }
    }

    /// Route one key event through modals, command mode, shortcuts, and
    /// finally the editor.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.show_help {
            if matches!(key.code, KeyCode::Esc | KeyCode::F(1) | KeyCode::Char('?')) {
                self.show_help = false;
            }
            return;
        }

        if self.error_message.is_some() {
            if key.code == KeyCode::Esc {
                self.error_message = None;
            }
            return;
        }

        if self.is_command_mode {
            self.handle_command_input(key);
            return;
        }

        if key.code == KeyCode::Char(':') {
            self.is_command_mode = true;
            self.command_buffer.clear();
            return;
        }

        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL)
            || key.modifiers.contains(KeyModifiers::META);

        match key.code {
            KeyCode::F(1) => self.show_help = true,
            KeyCode::F(5) => self.convert(),
            KeyCode::Tab => self.toggle_format(),
            KeyCode::Char('y') if ctrl => self.copy_output(),
            KeyCode::Char('l') if ctrl => self.clear(),
            KeyCode::Char('v') if ctrl => self.paste_from_clipboard(),
            KeyCode::Char('q') if ctrl => self.quit(),
            _ => self.handle_editor_key(key),
        }

        self.editor.scroll_to_cursor();
    }

    /// Insert text into the editor (bracketed paste from the terminal).
    pub fn insert_text(&mut self, text: &str) {
        self.editor.insert_str(text);
        self.editor.scroll_to_cursor();
    }

    fn handle_command_input(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.is_command_mode = false;
                self.command_buffer.clear();
            }
            KeyCode::Enter => {
                self.is_command_mode = false;
                self.execute_command();
                self.command_buffer.clear();
            }
            KeyCode::Backspace => {
                self.command_buffer.pop();
            }
            KeyCode::Char(c) => {
                self.command_buffer.push(c);
            }
            _ => {}
        }
    }

    fn execute_command(&mut self) {
        let command = self.command_buffer.trim().to_string();
        match command.as_str() {
            "q" | "quit" => self.quit(),
            "h" | "help" => self.show_help = true,
            "c" | "convert" => self.convert(),
            "y" | "copy" => self.copy_output(),
            "clear" => self.clear(),
            "retail" => self.set_format(Format::Retail),
            "wholesale" => self.set_format(Format::Wholesale),
            _ => {
                if let Some(name) = command.strip_prefix("format ") {
                    match name.parse::<Format>() {
                        Ok(format) => self.set_format(format),
                        Err(err) => self.report(&err),
                    }
                }
            }
        }
    }

    fn handle_editor_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) => self.editor.insert_char(c),
            KeyCode::Enter => self.editor.insert_newline(),
            KeyCode::Backspace => self.editor.delete_backward(),
            KeyCode::Delete => self.editor.delete_forward(),
            KeyCode::Left => self.editor.move_left(),
            KeyCode::Right => self.editor.move_right(),
            KeyCode::Up => self.editor.move_up(),
            KeyCode::Down => self.editor.move_down(),
            KeyCode::Home => self.editor.cursor_x = 0,
            KeyCode::End => self.editor.cursor_x = self.editor.current_line_chars(),
            _ => {}
        }
    }

    /// Run the conversion pipeline over the editor text.
    pub fn convert(&mut self) {
        self.status_message = None;
        self.session.set_input(self.editor.text());
        if let Err(err) = self.session.convert() {
            self.report(&err);
        }
    }

    /// Copy the rendered output to the clipboard, with transient feedback.
    pub fn copy_output(&mut self) {
        self.status_message = None;
        match self.session.copy_output(self.clipboard.as_mut()) {
            Ok(true) => self.status_message = Some(StatusMessage::copied()),
            Ok(false) => {} // nothing rendered yet; deliberately silent
            Err(err) => self.report(&err),
        }
    }

    /// Reset input, output, and messages. The format selection survives.
    pub fn clear(&mut self) {
        self.status_message = None;
        self.error_message = None;
        self.session.clear();
        self.editor.reset();
    }

    /// Flip the two-valued format selection.
    pub fn toggle_format(&mut self) {
        self.set_format(self.session.format().toggle());
    }

    fn set_format(&mut self, format: Format) {
        self.status_message = None;
        self.session.set_format(format);
    }

    fn paste_from_clipboard(&mut self) {
        if let Some(text) = self.clipboard.get_text() {
            self.editor.insert_str(&text);
        }
    }

    /// Log the cause and show the user-facing message for an error.
    fn report(&mut self, err: &Error) {
        tracing::error!("{err}");
        self.error_message = Some(user_message(err));
    }
}

/// Map an error to the message the form shows.
///
/// Conversion internals are never surfaced; anything unexpected collapses
/// to a generic retry message while the cause goes to the log.
fn user_message(err: &Error) -> String {
    match err {
        Error::EmptyInput => "Please enter a quotation to convert.".to_string(),
        Error::InvalidPrice { .. } => err.to_string(),
        Error::Clipboard(_) => {
            "Failed to copy text. Please try again or copy manually.".to_string()
        }
        _ => "An error occurred during conversion. Please check your input format and try again."
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;
    use crate::error::Result;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    #[derive(Default)]
    struct SharedClipboard {
        copied: Rc<RefCell<Vec<String>>>,
        fail: bool,
    }

    impl ClipboardAccess for SharedClipboard {
        fn set_text(&mut self, text: &str) -> Result<()> {
            if self.fail {
                return Err(Error::clipboard("unavailable"));
            }
            self.copied.borrow_mut().push(text.to_string());
            Ok(())
        }

        fn get_text(&mut self) -> Option<String> {
            self.copied.borrow().last().cloned()
        }
    }

    fn test_app() -> (App, Rc<RefCell<Vec<String>>>) {
        let copied = Rc::new(RefCell::new(Vec::new()));
        let clipboard = SharedClipboard { copied: Rc::clone(&copied), fail: false };
        (App::with_clipboard(Config::default(), Box::new(clipboard)), copied)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            if c == '\n' {
                app.handle_key(key(KeyCode::Enter));
            } else {
                app.handle_key(key(KeyCode::Char(c)));
            }
        }
    }

    const INPUT: &str = "Tire A\nMADE IN JAPAN\nAED 500\n2";

    #[test]
    fn tab_toggles_format() {
        let (mut app, _) = test_app();
        assert_eq!(app.session.format(), Format::Retail);
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.session.format(), Format::Wholesale);
        app.handle_key(key(KeyCode::Tab));
        assert_eq!(app.session.format(), Format::Retail);
    }

    #[test]
    fn typing_then_f5_converts() {
        let (mut app, _) = test_app();
        type_text(&mut app, INPUT);
        app.handle_key(key(KeyCode::F(5)));
        assert!(app.session.output().contains("🛞 *Tire A*"));
        assert!(app.error_message.is_none());
    }

    #[test]
    fn convert_on_empty_editor_shows_the_empty_input_message() {
        let (mut app, _) = test_app();
        app.handle_key(key(KeyCode::F(5)));
        assert_eq!(
            app.error_message.as_deref(),
            Some("Please enter a quotation to convert.")
        );
        // Esc dismisses, other keys are swallowed while the modal is up
        app.handle_key(key(KeyCode::Char('x')));
        assert!(app.error_message.is_some());
        app.handle_key(key(KeyCode::Esc));
        assert!(app.error_message.is_none());
    }

    #[test]
    fn invalid_price_is_surfaced_with_the_field_text() {
        let (mut app, _) = test_app();
        type_text(&mut app, "Tire A\nMADE IN JAPAN\nAED n/a\n2");
        app.handle_key(key(KeyCode::Tab)); // wholesale
        app.handle_key(key(KeyCode::F(5)));
        assert!(app.error_message.as_deref().is_some_and(|m| m.contains("AED n/a")));
    }

    #[test]
    fn copy_after_convert_sets_transient_status() {
        let (mut app, copied) = test_app();
        type_text(&mut app, INPUT);
        app.handle_key(key(KeyCode::F(5)));
        app.handle_key(ctrl('y'));
        assert_eq!(app.status_message.as_ref().map(|s| s.text.as_str()), Some("Copied!"));
        assert_eq!(copied.borrow().len(), 1);

        // Not yet expired right away, gone after the TTL.
        app.expire_status(Instant::now());
        assert!(app.status_message.is_some());
        app.expire_status(Instant::now() + status::COPIED_TTL + Duration::from_millis(1));
        assert!(app.status_message.is_none());
    }

    #[test]
    fn copy_with_no_output_does_nothing() {
        let (mut app, copied) = test_app();
        app.handle_key(ctrl('y'));
        assert!(app.status_message.is_none());
        assert!(app.error_message.is_none());
        assert!(copied.borrow().is_empty());
    }

    #[test]
    fn a_new_action_cancels_the_pending_status() {
        let (mut app, _) = test_app();
        type_text(&mut app, INPUT);
        app.handle_key(key(KeyCode::F(5)));
        app.handle_key(ctrl('y'));
        assert!(app.status_message.is_some());
        app.handle_key(key(KeyCode::F(5)));
        assert!(app.status_message.is_none());
    }

    #[test]
    fn clear_resets_editor_and_output_but_not_format() {
        let (mut app, _) = test_app();
        app.handle_key(key(KeyCode::Tab)); // wholesale
        type_text(&mut app, INPUT);
        app.handle_key(key(KeyCode::F(5)));
        app.handle_key(ctrl('l'));
        assert!(!app.editor.has_content());
        assert_eq!(app.session.output(), "");
        assert_eq!(app.session.format(), Format::Wholesale);
    }

    #[test]
    fn colon_commands_quit_and_convert() {
        let (mut app, _) = test_app();
        type_text(&mut app, INPUT);
        app.handle_key(key(KeyCode::Char(':')));
        assert!(app.is_command_mode);
        type_text(&mut app, "convert");
        app.handle_key(key(KeyCode::Enter));
        assert!(!app.is_command_mode);
        assert!(app.session.output().contains("Tire A"));

        app.handle_key(key(KeyCode::Char(':')));
        type_text(&mut app, "q");
        app.handle_key(key(KeyCode::Enter));
        assert!(app.should_quit());
    }

    #[test]
    fn format_command_with_argument() {
        let (mut app, _) = test_app();
        app.handle_key(key(KeyCode::Char(':')));
        type_text(&mut app, "format wholesale");
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.session.format(), Format::Wholesale);
    }

    #[test]
    fn pasted_text_lands_in_the_editor_as_lines() {
        let (mut app, _) = test_app();
        app.insert_text("Tire A\r\nMADE IN JAPAN\nAED 500\n2");
        assert_eq!(app.editor.content.len(), 4);
        assert_eq!(app.editor.text(), INPUT);
        assert_eq!(app.editor.cursor_y, 3);
        assert_eq!(app.editor.cursor_x, 1);
    }

    #[test]
    fn editor_handles_multibyte_cursor_movement() {
        let (mut app, _) = test_app();
        type_text(&mut app, "🛞ab");
        app.handle_key(key(KeyCode::Left));
        app.handle_key(key(KeyCode::Left));
        app.handle_key(key(KeyCode::Backspace));
        assert_eq!(app.editor.text(), "ab");
        assert_eq!(app.editor.cursor_x, 0);
    }

    #[test]
    fn backspace_at_line_start_joins_lines() {
        let (mut app, _) = test_app();
        type_text(&mut app, "ab\ncd");
        app.handle_key(key(KeyCode::Home));
        app.handle_key(key(KeyCode::Backspace));
        assert_eq!(app.editor.text(), "abcd");
        assert_eq!(app.editor.cursor_x, 2);
    }
}
