//! Tool-specific error types.

use thiserror::Error;

/// Errors that can occur while validating or running an educational tool.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToolError {
    /// The requested tool is not one of the supported educational tools.
    #[error("Unsupported tool: {0}")]
    UnsupportedTool(String),

    /// A parameter the tool requires was absent or null.
    #[error("Missing required parameter: {0}")]
    MissingParameter(String),

    /// Parameters were present but could not be interpreted.
    #[error("Invalid parameters: {0}")]
    InvalidParameter(String),

    /// An internal error occurred while generating content.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ToolError {
    /// Create a new "unsupported tool" error.
    pub fn unsupported(name: impl Into<String>) -> Self {
        Self::UnsupportedTool(name.into())
    }

    /// Create a new "missing parameter" error.
    pub fn missing_parameter(name: impl Into<String>) -> Self {
        Self::MissingParameter(name.into())
    }

    /// Create a new "invalid parameter" error.
    pub fn invalid_parameter(msg: impl Into<String>) -> Self {
        Self::InvalidParameter(msg.into())
    }

    /// Create a new "internal" error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
