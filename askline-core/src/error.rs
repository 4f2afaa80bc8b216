//! Error types for prompt setup and prompt execution.
//!
//! Setup mistakes ([`ConfigError`]) and runtime read failures
//! ([`PromptError`]) travel on separate types so a configuration bug can
//! never be mistaken for a recoverable input problem. Rejected input is not
//! an error at all; the engine re-prompts for it.

use thiserror::Error;

/// Raised while a prompt is actively reading input.
#[derive(Debug, Error)]
pub enum PromptError {
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    /// The input source reached end of input while a prompt was still
    /// waiting for a valid answer.
    #[error("input closed before a valid answer was read")]
    Closed,
}

/// Raised at setup, before any console interaction. Never retried.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("a menu needs at least one option")]
    EmptyMenu,

    #[error("continue and quit triggers must differ: both are {0:?}")]
    MatchingTriggers(String),
}
