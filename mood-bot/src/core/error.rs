//! Error types for the bot core.
//!
//! [`DbotError`] is the top-level error; [`HandlerError`] is what command parsing rejects with.

use thiserror::Error;

/// Top-level error (bot transport, ledger persistence, config, IO).
#[derive(Error, Debug)]
pub enum DbotError {
    #[error("Bot error: {0}")]
    Bot(String),

    #[error("Persistence error: {0}")]
    Persistence(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Command parsing failures (bad arguments, unknown command). Handled inside the command
/// handler and never propagated.
#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("Usage: {0}")]
    Usage(String),

    #[error("Unknown command: {0}")]
    UnknownCommand(String),
}

impl From<serde_json::Error> for DbotError {
    fn from(e: serde_json::Error) -> Self {
        DbotError::Persistence(e.to_string())
    }
}

/// Result type for core operations; uses [`DbotError`].
pub type Result<T> = std::result::Result<T, DbotError>;
