//! Server handler and lifecycle management.
//!
//! [`TutorServer`] owns the shared orchestrator and implements the MCP
//! `ServerHandler` trait. Tool routes are built in
//! `domains/tools/router.rs`; the HTTP transport calls the orchestrator
//! directly through [`TutorServer::orchestrator`].

use rmcp::{
    ServerHandler, handler::server::tool::ToolRouter, model::*, tool_handler,
};
use std::sync::Arc;

use super::config::Config;
use crate::domains::orchestration::TutorOrchestrator;
use crate::domains::tools::{ToolRegistry, build_tool_router};

/// The main server handler.
#[derive(Clone)]
pub struct TutorServer {
    /// Server configuration.
    config: Arc<Config>,

    /// Extraction and dispatch pipeline shared by every transport.
    orchestrator: Arc<TutorOrchestrator>,

    /// Tool router for handling MCP tool calls.
    tool_router: ToolRouter<Self>,
}

impl TutorServer {
    /// Create a new server with the given configuration.
    pub fn new(config: Config) -> Self {
        let orchestrator = Arc::new(TutorOrchestrator::new(config.extraction.clone()));

        Self {
            tool_router: build_tool_router::<Self>(orchestrator.clone()),
            config: Arc::new(config),
            orchestrator,
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the shared orchestrator.
    pub fn orchestrator(&self) -> &Arc<TutorOrchestrator> {
        &self.orchestrator
    }
}

/// ServerHandler implementation with tool_handler macro for automatic tool routing.
#[tool_handler]
impl ServerHandler for TutorServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            server_info: Implementation {
                name: self.name().to_string(),
                title: None,
                version: self.version().to_string(),
                icons: None,
                website_url: None,
            },
            instructions: Some(format!(
                "AI tutor orchestrator. Call `orchestrate` with the student's profile, chat history and current message to get notes, flashcards or a concept explanation, or call an educational tool directly. Tools: {}.",
                ToolRegistry::tool_names().join(", ")
            )),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}
