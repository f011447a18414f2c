//! Orchestration domain module.
//!
//! Ties the extractor and the dispatcher together and is the surface every
//! transport talks to.

mod orchestrator;

pub use orchestrator::TutorOrchestrator;
