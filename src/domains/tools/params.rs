//! Strongly typed tool parameters.
//!
//! [`ToolParameters`] is the single validation boundary between untyped
//! JSON arguments and the generators: every required key must be present
//! and non-null, and every constrained value must be in its domain.

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use super::definitions::{ConceptExplainerParams, FlashcardGeneratorParams, NoteMakerParams};
use super::error::ToolError;
use super::identifier::ToolIdentifier;

/// Smallest number of flashcards a request may produce.
pub const MIN_FLASHCARD_COUNT: u32 = 1;

/// Largest number of flashcards a request may produce.
pub const MAX_FLASHCARD_COUNT: u32 = 20;

/// How notes should be laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum NoteTakingStyle {
    Outline,
    BulletPoints,
    Narrative,
    Structured,
}

/// Flashcard difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

/// Depth of a concept explanation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ExplanationDepth {
    Basic,
    Intermediate,
    Advanced,
    Comprehensive,
}

impl NoteTakingStyle {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Outline => "outline",
            Self::BulletPoints => "bullet_points",
            Self::Narrative => "narrative",
            Self::Structured => "structured",
        }
    }
}

impl Difficulty {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl ExplanationDepth {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Basic => "basic",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
            Self::Comprehensive => "comprehensive",
        }
    }
}

/// Clamp a requested flashcard count to the supported range.
pub fn clamp_flashcard_count(count: i64) -> u32 {
    count.clamp(MIN_FLASHCARD_COUNT as i64, MAX_FLASHCARD_COUNT as i64) as u32
}

/// Deserialize a flashcard count, clamping out-of-range values.
pub(crate) fn deserialize_flashcard_count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let count = i64::deserialize(deserializer)?;
    Ok(clamp_flashcard_count(count))
}

pub(crate) fn default_true() -> bool {
    true
}

/// Parameters for one tool invocation, keyed by the tool they belong to.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ToolParameters {
    NoteMaker(NoteMakerParams),
    FlashcardGenerator(FlashcardGeneratorParams),
    ConceptExplainer(ConceptExplainerParams),
}

impl ToolParameters {
    /// The tool these parameters are addressed to.
    pub fn tool(&self) -> ToolIdentifier {
        match self {
            Self::NoteMaker(_) => ToolIdentifier::NoteMaker,
            Self::FlashcardGenerator(_) => ToolIdentifier::FlashcardGenerator,
            Self::ConceptExplainer(_) => ToolIdentifier::ConceptExplainer,
        }
    }

    /// Validate untyped arguments against the schema of `tool`.
    ///
    /// Missing or null required keys are reported by name; optional keys
    /// fall back to their documented defaults.
    pub fn from_value(tool: ToolIdentifier, arguments: Value) -> Result<Self, ToolError> {
        let Some(object) = arguments.as_object() else {
            return Err(ToolError::invalid_parameter(
                "parameters must be a JSON object",
            ));
        };

        if let Some(missing) = tool
            .schema()
            .required
            .iter()
            .find(|key| object.get(**key).is_none_or(Value::is_null))
        {
            return Err(ToolError::missing_parameter(*missing));
        }

        let parsed = match tool {
            ToolIdentifier::NoteMaker => serde_json::from_value(arguments).map(Self::NoteMaker),
            ToolIdentifier::FlashcardGenerator => {
                serde_json::from_value(arguments).map(Self::FlashcardGenerator)
            }
            ToolIdentifier::ConceptExplainer => {
                serde_json::from_value(arguments).map(Self::ConceptExplainer)
            }
        };

        parsed.map_err(|e| ToolError::invalid_parameter(e.to_string()))
    }

    /// Flat parameter-name to value mapping, as documented by the schema.
    pub fn to_value(&self) -> crate::Result<Value> {
        Ok(serde_json::to_value(self)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn user_info() -> Value {
        json!({
            "user_id": "student123",
            "name": "Alice",
            "grade_level": "10",
            "learning_style_summary": "Visual learner",
            "emotional_state_summary": "Focused",
            "mastery_level_summary": "Level 6"
        })
    }

    #[test]
    fn test_clamp_flashcard_count() {
        assert_eq!(clamp_flashcard_count(-3), 1);
        assert_eq!(clamp_flashcard_count(0), 1);
        assert_eq!(clamp_flashcard_count(12), 12);
        assert_eq!(clamp_flashcard_count(500), 20);
    }

    #[test]
    fn test_flashcard_optional_defaults() {
        let params = ToolParameters::from_value(
            ToolIdentifier::FlashcardGenerator,
            json!({
                "user_info": user_info(),
                "topic": "Algebra",
                "count": 50,
                "difficulty": "hard",
                "subject": "Mathematics"
            }),
        )
        .unwrap();

        match params {
            ToolParameters::FlashcardGenerator(p) => {
                assert_eq!(p.count, 20);
                assert_eq!(p.difficulty, Difficulty::Hard);
                assert!(p.include_examples);
            }
            other => panic!("unexpected variant: {:?}", other),
        }
    }

    #[test]
    fn test_missing_required_key_is_named() {
        let err = ToolParameters::from_value(
            ToolIdentifier::NoteMaker,
            json!({
                "user_info": user_info(),
                "chat_history": [],
                "topic": "Photosynthesis",
                "subject": "Biology"
            }),
        )
        .unwrap_err();
        assert_eq!(err, ToolError::MissingParameter("note_taking_style".into()));
    }

    #[test]
    fn test_null_required_key_is_missing() {
        let err = ToolParameters::from_value(
            ToolIdentifier::ConceptExplainer,
            json!({
                "user_info": user_info(),
                "chat_history": [],
                "concept_to_explain": null,
                "current_topic": "Biology",
                "desired_depth": "basic"
            }),
        )
        .unwrap_err();
        assert_eq!(err, ToolError::MissingParameter("concept_to_explain".into()));
    }

    #[test]
    fn test_value_outside_domain_is_invalid() {
        let err = ToolParameters::from_value(
            ToolIdentifier::ConceptExplainer,
            json!({
                "user_info": user_info(),
                "chat_history": [],
                "concept_to_explain": "Derivatives",
                "current_topic": "Mathematics",
                "desired_depth": "bottomless"
            }),
        )
        .unwrap_err();
        assert!(matches!(err, ToolError::InvalidParameter(_)));
    }

    #[test]
    fn test_non_object_arguments_are_invalid() {
        let err = ToolParameters::from_value(ToolIdentifier::NoteMaker, json!([1, 2])).unwrap_err();
        assert!(matches!(err, ToolError::InvalidParameter(_)));
    }

    #[test]
    fn test_to_value_is_flat_mapping() {
        let params = ToolParameters::from_value(
            ToolIdentifier::NoteMaker,
            json!({
                "user_info": user_info(),
                "chat_history": [{"role": "user", "content": "hi"}],
                "topic": "Photosynthesis",
                "subject": "Biology",
                "note_taking_style": "bullet_points"
            }),
        )
        .unwrap();
        let value = params.to_value().unwrap();
        assert_eq!(value["note_taking_style"], "bullet_points");
        assert_eq!(value["include_examples"], true);
        assert_eq!(value["include_analogies"], false);
        assert_eq!(value["user_info"]["name"], "Alice");
    }
}
