//! Tools domain module.
//!
//! The three educational content generators and the dispatcher in front
//! of them.
//!
//! ## Architecture
//!
//! - `definitions/` - Individual tool implementations (one file per tool)
//! - `identifier.rs` - The closed set of tool identifiers
//! - `schema.rs` - Required/optional parameter names per tool
//! - `params.rs` - Typed parameters and the validation boundary
//! - `dispatcher.rs` - Identifier to generator mapping
//! - `result.rs` - Uniform response envelope
//! - `router.rs` / `registry.rs` - MCP exposure
//! - `error.rs` - Tool-specific error types
//!
//! ## Adding a New Tool
//!
//! 1. Add a variant to `ToolIdentifier` and its schema in `schema.rs`
//! 2. Create the definition in `definitions/` implementing `EducationalTool`
//! 3. Add a `ToolParameters` variant and a dispatcher arm
//! 4. Register it in `registry.rs` and `router.rs`

pub mod definitions;
mod dispatcher;
mod error;
mod identifier;
pub mod params;
mod registry;
mod result;
pub mod router;
mod schema;

pub use dispatcher::{EducationalTool, ToolDispatcher};
pub use error::ToolError;
pub use identifier::ToolIdentifier;
pub use params::{Difficulty, ExplanationDepth, NoteTakingStyle, ToolParameters};
pub use registry::ToolRegistry;
pub use result::ToolResult;
pub use router::build_tool_router;
pub use schema::{ToolCatalog, ToolSchema, tool_catalog};
