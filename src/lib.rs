//! `quoteflow` - tire quotation to WhatsApp message converter.
//!
//! This crate reformats a pasted block of plain-text tire-price lines
//! into one of two WhatsApp-ready message templates ("retail" or
//! "wholesale") and copies the result to the system clipboard.


// Re-export public modules for use in integration tests and as a library
pub mod app;
pub mod clipboard;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod quote;
pub mod session;
pub mod types;
pub mod ui;
