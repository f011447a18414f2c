//! Tool dispatcher - routes typed parameters to their content generator.
//!
//! The dispatcher is the failure boundary of the tools domain: unknown tool
//! names, invalid parameters and generator failures all come back as a
//! [`ToolResult`] with `success == false`.

use schemars::JsonSchema;
use serde::Serialize;
use serde_json::Value;
use tracing::{error, info, instrument, warn};

use super::definitions::{ConceptExplainerTool, FlashcardGeneratorTool, NoteMakerTool};
use super::error::ToolError;
use super::identifier::ToolIdentifier;
use super::params::ToolParameters;
use super::result::ToolResult;

/// A content generator for one educational tool.
///
/// Generators are pure template expansions: same parameters, same output.
pub trait EducationalTool {
    /// Identifier the tool is registered under.
    const IDENTIFIER: ToolIdentifier;

    /// Tool description shown to clients.
    const DESCRIPTION: &'static str;

    type Params: JsonSchema + 'static;
    type Output: Serialize;

    fn generate(params: &Self::Params) -> Self::Output;
}

/// Maps each [`ToolIdentifier`] to its generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct ToolDispatcher;

impl ToolDispatcher {
    pub fn new() -> Self {
        Self
    }

    /// Run the generator the parameters are addressed to.
    #[instrument(skip_all, fields(tool = %parameters.tool()))]
    pub fn dispatch(&self, parameters: &ToolParameters) -> ToolResult {
        match parameters {
            ToolParameters::NoteMaker(params) => run::<NoteMakerTool>(params),
            ToolParameters::FlashcardGenerator(params) => run::<FlashcardGeneratorTool>(params),
            ToolParameters::ConceptExplainer(params) => run::<ConceptExplainerTool>(params),
        }
    }

    /// Resolve a tool by name, validate its arguments and run it.
    pub fn invoke(&self, tool_name: &str, arguments: Value) -> ToolResult {
        let tool = match tool_name.parse::<ToolIdentifier>() {
            Ok(tool) => tool,
            Err(e) => {
                warn!("Unknown tool requested: {}", tool_name);
                return ToolResult::failure(tool_name, &e);
            }
        };

        match ToolParameters::from_value(tool, arguments) {
            Ok(parameters) => self.dispatch(&parameters),
            Err(e) => {
                warn!("Rejected parameters for {}: {}", tool, e);
                ToolResult::failure(tool.as_str(), &e)
            }
        }
    }
}

fn run<T: EducationalTool>(params: &T::Params) -> ToolResult {
    let output = T::generate(params);

    match serde_json::to_value(&output) {
        Ok(data) => {
            info!("{} completed", T::IDENTIFIER);
            ToolResult::success(T::IDENTIFIER, data)
        }
        Err(e) => {
            error!("Failed to serialize {} output: {}", T::IDENTIFIER, e);
            ToolResult::failure(T::IDENTIFIER.as_str(), &ToolError::internal(e.to_string()))
        }
    }
}
