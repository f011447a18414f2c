//! Per-request conversation input.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Student profile supplied by the tutoring front-end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct StudentProfile {
    /// Unique identifier for the student.
    pub user_id: String,

    /// Student's display name.
    pub name: String,

    /// Student's current grade level.
    pub grade_level: String,

    /// Free-text summary of the student's preferred learning style.
    pub learning_style_summary: String,

    /// Free-text summary of the student's current emotional state.
    pub emotional_state_summary: String,

    /// Free-text mastery description, e.g. "Level 6: ready for application".
    pub mastery_level_summary: String,
}

/// A single turn of the chat, oldest first in a history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ChatTurn {
    /// Who spoke ("user", "assistant", ...).
    pub role: String,

    /// What was said.
    pub content: String,
}

/// Everything the extractor needs to decide on a tool and its parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ConversationSnapshot {
    pub user_info: StudentProfile,

    /// Prior turns, oldest first. Required, but may be empty.
    pub chat_history: Vec<ChatTurn>,

    /// The message currently being answered.
    pub current_message: String,
}

impl ChatTurn {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
        }
    }
}

/// Content of the last `window` turns, oldest first.
pub(crate) fn recent_turns(history: &[ChatTurn], window: usize) -> impl Iterator<Item = &str> {
    history[history.len().saturating_sub(window)..]
        .iter()
        .map(|turn| turn.content.as_str())
}
