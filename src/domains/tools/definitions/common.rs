//! Common MCP plumbing shared by the tool definitions.
//!
//! Educational tools are routed through [`TutorOrchestrator::invoke_tool`]
//! so that MCP and HTTP callers hit the same validation boundary.

use std::sync::Arc;

use futures::FutureExt;
use rmcp::{
    ErrorData as McpError,
    handler::server::tool::{ToolCallContext, ToolRoute, cached_schema_for_type},
    model::{CallToolResult, Content, Tool},
};

use crate::domains::orchestration::TutorOrchestrator;
use crate::domains::tools::dispatcher::EducationalTool;
use crate::domains::tools::result::ToolResult;

/// Create a Tool model for an educational tool (metadata).
pub fn educational_tool<T: EducationalTool>() -> Tool {
    Tool {
        name: T::IDENTIFIER.as_str().into(),
        description: Some(T::DESCRIPTION.into()),
        input_schema: cached_schema_for_type::<T::Params>(),
        annotations: None,
        output_schema: None,
        icons: None,
        meta: None,
        title: None,
    }
}

/// Create a ToolRoute for an educational tool.
pub fn educational_route<T, S>(orchestrator: Arc<TutorOrchestrator>) -> ToolRoute<S>
where
    T: EducationalTool + 'static,
    S: Send + Sync + 'static,
{
    ToolRoute::new_dyn(educational_tool::<T>(), move |ctx: ToolCallContext<'_, S>| {
        let args = ctx.arguments.clone().unwrap_or_default();
        let orchestrator = orchestrator.clone();
        async move {
            let result =
                orchestrator.invoke_tool(T::IDENTIFIER.as_str(), serde_json::Value::Object(args));
            Ok::<CallToolResult, McpError>(call_tool_result(&result))
        }
        .boxed()
    })
}

/// Convert the uniform envelope into an MCP result.
///
/// Successful payloads travel as structured content alongside a short text
/// summary; failures become MCP tool errors carrying the message.
pub fn call_tool_result(result: &ToolResult) -> CallToolResult {
    if result.success {
        CallToolResult {
            content: vec![Content::text(format!(
                "{} completed successfully",
                result.tool_name
            ))],
            structured_content: Some(result.response_data.clone()),
            is_error: Some(false),
            meta: None,
        }
    } else {
        let message = result
            .error_message
            .clone()
            .unwrap_or_else(|| format!("{} failed", result.tool_name));
        CallToolResult::error(vec![Content::text(message)])
    }
}
