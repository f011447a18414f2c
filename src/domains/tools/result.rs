//! Uniform response envelope returned for every tool invocation.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::error::ToolError;
use super::identifier::ToolIdentifier;

/// Outcome of a tool invocation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolResult {
    /// Whether the tool produced content.
    pub success: bool,

    /// The resolved tool, or the unrecognized name that was requested.
    pub tool_name: String,

    /// Tool-specific payload; an empty object on failure.
    pub response_data: Value,

    /// Description of the failure, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl ToolResult {
    /// Create a successful result.
    pub fn success(tool: ToolIdentifier, data: Value) -> Self {
        Self {
            success: true,
            tool_name: tool.as_str().to_string(),
            response_data: data,
            error_message: None,
        }
    }

    /// Create a failed result.
    pub fn failure(tool_name: impl Into<String>, error: &ToolError) -> Self {
        Self {
            success: false,
            tool_name: tool_name.into(),
            response_data: Value::Object(Map::new()),
            error_message: Some(error.to_string()),
        }
    }
}
