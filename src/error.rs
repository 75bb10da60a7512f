//! Application error types.
//!
//! Provides unified error handling for the conversion pipeline, the
//! clipboard, and terminal setup. Every error is recoverable by re-editing
//! the input; user-facing wording lives in [`crate::app`].

use thiserror::Error;

/// Application result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types
#[derive(Debug, Error)]
pub enum Error {
    /// Conversion was requested while the input was empty after trimming.
    #[error("input is empty")]
    EmptyInput,

    /// A price field could not be read as a decimal amount.
    #[error("invalid price {text:?}: expected an amount like \"AED 500\" or \"AED 250.50\"")]
    InvalidPrice {
        /// The offending price field, as it appeared in the input.
        text: String,
    },

    /// Clipboard access failed.
    #[error("clipboard error: {0}")]
    Clipboard(String),

    /// Configuration error with guidance
    #[error("Configuration error: {message}. {hint}")]
    Config {
        /// Description of the configuration problem.
        message: String,
        /// Actionable guidance for fixing the issue.
        hint: &'static str,
    },

    /// IO error (terminal, log file)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic message error (escape hatch)
    #[error("{0}")]
    Msg(String),
}

impl Error {
    /// Create an invalid-price error, keeping the field text for the message.
    pub fn invalid_price(text: impl Into<String>) -> Self {
        Self::InvalidPrice { text: text.into() }
    }

    /// Create a clipboard error from any underlying failure.
    pub fn clipboard(source: impl std::fmt::Display) -> Self {
        Self::Clipboard(source.to_string())
    }

    /// Create a config error with actionable hint
    pub fn config(message: impl Into<String>, hint: &'static str) -> Self {
        Self::Config { message: message.into(), hint }
    }
}

// Convenience conversions
impl From<String> for Error {
    fn from(s: String) -> Self {
        Self::Msg(s)
    }
}

impl From<&str> for Error {
    fn from(s: &str) -> Self {
        Self::Msg(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used, clippy::unwrap_used, clippy::panic)]

    use super::*;

    #[test]
    fn invalid_price_keeps_field_text() {
        let err = Error::invalid_price("AED abc");
        match err {
            Error::InvalidPrice { text } => assert_eq!(text, "AED abc"),
            _ => panic!("Expected InvalidPrice"),
        }
    }

    #[test]
    fn clipboard_error_carries_cause() {
        let err = Error::clipboard("display unavailable");
        assert!(err.to_string().contains("display unavailable"));
    }
}
