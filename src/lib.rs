//! AI Tutor Orchestrator
//!
//! Turns a snapshot of a tutoring conversation into a call to one of three
//! educational tools (note maker, flashcard generator, concept explainer)
//! and returns the tool's payload in a uniform result envelope.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, the MCP server and transports
//! - **domains**: business logic organized by bounded contexts
//!   - **extraction**: keyword rules that pick a tool and infer its parameters
//!   - **tools**: tool identifiers, typed parameters, generators and dispatch
//!   - **orchestration**: the extract-then-dispatch pipeline
//!
//! # Example
//!
//! ```rust,no_run
//! use tutor_orchestrator::{Config, TutorOrchestrator};
//! use tutor_orchestrator::domains::extraction::ConversationSnapshot;
//!
//! fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let orchestrator = TutorOrchestrator::new(config.extraction);
//!     let snapshot: ConversationSnapshot = serde_json::from_str(
//!         r#"{"user_info": {"user_id": "s1", "name": "Ana", "grade_level": "8",
//!             "learning_style_summary": "Visual", "emotional_state_summary": "Curious",
//!             "mastery_level_summary": "Level 4"},
//!             "chat_history": [],
//!             "current_message": "Make flashcards on algebra"}"#,
//!     )?;
//!     let result = orchestrator.orchestrate(&snapshot);
//!     println!("{}", serde_json::to_string_pretty(&result)?);
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, Result, TutorServer};
pub use domains::orchestration::TutorOrchestrator;
