//! Tool Router - builds the rmcp ToolRouter for the STDIO transport.

use std::sync::Arc;

use rmcp::handler::server::tool::ToolRouter;

use super::definitions::common::educational_route;
use super::definitions::{
    ConceptExplainerTool, FlashcardGeneratorTool, NoteMakerTool, OrchestrateTool,
};
use crate::domains::orchestration::TutorOrchestrator;

/// Build the tool router with all registered tools.
pub fn build_tool_router<S>(orchestrator: Arc<TutorOrchestrator>) -> ToolRouter<S>
where
    S: Send + Sync + 'static,
{
    ToolRouter::new()
        .with_route(OrchestrateTool::create_route(orchestrator.clone()))
        .with_route(educational_route::<NoteMakerTool, S>(orchestrator.clone()))
        .with_route(educational_route::<FlashcardGeneratorTool, S>(orchestrator.clone()))
        .with_route(educational_route::<ConceptExplainerTool, S>(orchestrator))
}
