//! Tool Registry - names of every MCP tool the server exposes.

use super::definitions::{
    ConceptExplainerTool, FlashcardGeneratorTool, NoteMakerTool, OrchestrateTool,
};
use super::dispatcher::EducationalTool;

// ============================================================================
// Tool Registry
// ============================================================================

/// Tool registry - the single source of truth for exposed tools.
pub struct ToolRegistry;

impl ToolRegistry {
    /// Get all tool names.
    pub fn tool_names() -> Vec<&'static str> {
        vec![
            OrchestrateTool::NAME,
            NoteMakerTool::IDENTIFIER.as_str(),
            FlashcardGeneratorTool::IDENTIFIER.as_str(),
            ConceptExplainerTool::IDENTIFIER.as_str(),
        ]
    }
}
