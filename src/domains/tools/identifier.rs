//! The closed set of educational tools.

use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::error::ToolError;

/// Identifies one of the supported educational content generators.
///
/// The declaration order is the catalog order reported by `list_tools`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum ToolIdentifier {
    NoteMaker,
    FlashcardGenerator,
    ConceptExplainer,
}

impl ToolIdentifier {
    /// Every supported tool, in catalog order.
    pub const ALL: [ToolIdentifier; 3] = [
        ToolIdentifier::NoteMaker,
        ToolIdentifier::FlashcardGenerator,
        ToolIdentifier::ConceptExplainer,
    ];

    /// Wire name of the tool.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::NoteMaker => "note_maker",
            Self::FlashcardGenerator => "flashcard_generator",
            Self::ConceptExplainer => "concept_explainer",
        }
    }
}

impl fmt::Display for ToolIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToolIdentifier {
    type Err = ToolError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tool| tool.as_str() == name)
            .ok_or_else(|| ToolError::unsupported(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_names() {
        for tool in ToolIdentifier::ALL {
            assert_eq!(tool.as_str().parse::<ToolIdentifier>().unwrap(), tool);
        }
    }

    #[test]
    fn test_parse_is_case_sensitive() {
        let err = "Note_Maker".parse::<ToolIdentifier>().unwrap_err();
        assert_eq!(err, ToolError::UnsupportedTool("Note_Maker".to_string()));
    }

    #[test]
    fn test_serde_uses_wire_names() {
        let json = serde_json::to_value(ToolIdentifier::FlashcardGenerator).unwrap();
        assert_eq!(json, serde_json::json!("flashcard_generator"));
    }
}
