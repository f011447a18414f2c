//! Extraction domain module.
//!
//! Turns a conversation snapshot (student profile, recent chat turns and
//! the current message) into a tool choice and a complete, typed parameter
//! set for that tool.
//!
//! ## Architecture
//!
//! - `snapshot.rs` - Per-request input types
//! - `keywords.rs` - Read-only keyword tables and the tool selection table
//! - `extractor.rs` - The rule engine

mod extractor;
pub mod keywords;
mod snapshot;

pub use extractor::{
    ExtractedRequest, RuleBasedExtractor, infer_depth, infer_difficulty, infer_flashcard_count,
    infer_note_style, mastery_tier, select_tool,
};
pub use snapshot::{ChatTurn, ConversationSnapshot, StudentProfile};
