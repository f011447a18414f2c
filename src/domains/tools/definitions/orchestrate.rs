//! Orchestrate tool definition.
//!
//! The full pipeline as a single MCP tool: the client sends the
//! conversation snapshot and the server picks the educational tool.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::Tool,
};

use super::common::call_tool_result;
use crate::domains::extraction::ConversationSnapshot;
use crate::domains::orchestration::TutorOrchestrator;

/// Orchestrate tool - selects and runs an educational tool for a conversation.
pub struct OrchestrateTool;

impl OrchestrateTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "orchestrate";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Pick the right educational tool (notes, flashcards or a concept explanation) for the student's current message, infer its parameters from the profile and chat history, and run it.";

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<ConversationSnapshot>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }

    /// Create a ToolRoute for STDIO transport.
    pub fn create_route<S>(orchestrator: Arc<TutorOrchestrator>) -> ToolRoute<S>
    where
        S: Send + Sync + 'static,
    {
        ToolRoute::new_dyn(Self::to_tool(), move |ctx: ToolCallContext<'_, S>| {
            let args = ctx.arguments.clone().unwrap_or_default();
            let orchestrator = orchestrator.clone();
            async move {
                let snapshot: ConversationSnapshot =
                    serde_json::from_value(serde_json::Value::Object(args))
                        .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                orchestrator
                    .check_message_length(&snapshot)
                    .map_err(|e| McpError::invalid_params(e.to_string(), None))?;
                Ok(call_tool_result(&orchestrator.orchestrate(&snapshot)))
            }
            .boxed()
        })
    }
}
