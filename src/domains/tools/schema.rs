//! Static parameter schemas for the educational tools.
//!
//! The catalog is built once and shared read-only; callers use it to
//! document and validate the parameter contract of each tool.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use serde::Serialize;

use super::identifier::ToolIdentifier;

/// Required and optional parameter names of a single tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ToolSchema {
    pub required: &'static [&'static str],
    pub optional: &'static [&'static str],
}

/// Mapping from every supported tool to its schema, in catalog order.
pub type ToolCatalog = BTreeMap<ToolIdentifier, ToolSchema>;

const NOTE_MAKER: ToolSchema = ToolSchema {
    required: &["user_info", "chat_history", "topic", "subject", "note_taking_style"],
    optional: &["include_examples", "include_analogies"],
};

const FLASHCARD_GENERATOR: ToolSchema = ToolSchema {
    required: &["user_info", "topic", "count", "difficulty", "subject"],
    optional: &["include_examples"],
};

const CONCEPT_EXPLAINER: ToolSchema = ToolSchema {
    required: &[
        "user_info",
        "chat_history",
        "concept_to_explain",
        "current_topic",
        "desired_depth",
    ],
    optional: &[],
};

static CATALOG: LazyLock<ToolCatalog> = LazyLock::new(|| {
    ToolIdentifier::ALL
        .into_iter()
        .map(|tool| (tool, tool.schema()))
        .collect()
});

impl ToolIdentifier {
    /// Parameter schema of this tool.
    pub const fn schema(&self) -> ToolSchema {
        match self {
            Self::NoteMaker => NOTE_MAKER,
            Self::FlashcardGenerator => FLASHCARD_GENERATOR,
            Self::ConceptExplainer => CONCEPT_EXPLAINER,
        }
    }
}

/// The full tool catalog.
pub fn tool_catalog() -> &'static ToolCatalog {
    &CATALOG
}
