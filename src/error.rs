//! Error types for the pressroom pipeline.

use thiserror::Error;

/// Errors that can occur during article generation.
#[derive(Error, Debug)]
pub enum Error {
    /// Request rejected before any stage ran
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Transport-level failure talking to the LLM provider
    #[error("LLM request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Provider returned a non-success status
    #[error("LLM provider error ({status}): {message}")]
    Provider { status: u16, message: String },

    /// Provider response contained no completion
    #[error("Empty completion from provider")]
    EmptyCompletion,

    /// Maximum agent iterations reached
    #[error("Maximum iterations ({0}) reached")]
    MaxIterations(usize),

    /// Server I/O error
    #[error("Server error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for pressroom operations.
pub type Result<T> = std::result::Result<T, Error>;
