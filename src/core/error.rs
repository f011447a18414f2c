//! Error types and handling for the orchestrator.
//!
//! Failures inside a request never leave the core as errors: they are folded
//! into a [`ToolResult`](crate::domains::tools::ToolResult). This type covers
//! the remaining startup and plumbing failures.

use thiserror::Error;

/// A specialized Result type for orchestrator operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the orchestrator.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
