//! Diagnostics logging setup.
//!
//! The TUI owns the terminal, so diagnostics go to a log file instead of
//! stdout. Logging being unavailable is never fatal: the app runs without
//! diagnostics rather than refusing to start.

use std::sync::Mutex;

use crate::config::Config;

/// Log file name inside the configured log directory.
const LOG_FILE: &str = "quoteflow.log";

/// Install a file-backed tracing subscriber, if the log directory is usable.
pub fn init(config: &Config) {
    let Some(dir) = config.log_dir.as_deref() else {
        return;
    };
    if fs_err::create_dir_all(dir).is_err() {
        return;
    }
    let Ok(file) = fs_err::OpenOptions::new()
        .create(true)
        .append(true)
        .open(dir.join(LOG_FILE))
    else {
        return;
    };
    let _ = tracing_subscriber::fmt()
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();
}
