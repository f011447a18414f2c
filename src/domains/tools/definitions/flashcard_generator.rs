//! Flashcard generator tool definition.
//!
//! Produces a fixed number of practice flashcards whose wording follows the
//! requested difficulty.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domains::extraction::StudentProfile;
use crate::domains::tools::dispatcher::EducationalTool;
use crate::domains::tools::identifier::ToolIdentifier;
use crate::domains::tools::params::{Difficulty, default_true, deserialize_flashcard_count};

/// Parameters for the flashcard generator tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FlashcardGeneratorParams {
    pub user_info: StudentProfile,

    /// Topic the flashcards cover.
    pub topic: String,

    /// Number of flashcards (clamped to 1-20).
    #[serde(deserialize_with = "deserialize_flashcard_count")]
    #[schemars(with = "u32")]
    pub count: u32,

    pub difficulty: Difficulty,

    /// Academic subject the topic belongs to.
    pub subject: String,

    /// Attach an example to every card (default: true).
    #[serde(default = "default_true")]
    pub include_examples: bool,
}

#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct Flashcard {
    pub title: String,
    pub question: String,
    pub answer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
}

/// Generated flashcard deck.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct FlashcardGeneratorOutput {
    pub flashcards: Vec<Flashcard>,
    pub topic: String,
    pub adaptation_details: String,
    pub difficulty: Difficulty,
}

/// Flashcard generator tool - difficulty-adapted practice cards.
pub struct FlashcardGeneratorTool;

impl EducationalTool for FlashcardGeneratorTool {
    const IDENTIFIER: ToolIdentifier = ToolIdentifier::FlashcardGenerator;

    const DESCRIPTION: &'static str = "Generate practice flashcards for a topic at easy, medium or hard difficulty. Between 1 and 20 cards per request.";

    type Params = FlashcardGeneratorParams;
    type Output = FlashcardGeneratorOutput;

    fn generate(params: &FlashcardGeneratorParams) -> FlashcardGeneratorOutput {
        let topic = params.topic.as_str();
        let subject = params.subject.as_str();

        info!(
            "Generating {} flashcards for topic: {}, difficulty: {}",
            params.count,
            topic,
            params.difficulty.as_str()
        );

        let (question, answer, example) = match params.difficulty {
            Difficulty::Easy => (
                format!("What is the basic concept of {}?", topic),
                format!("The basic concept of {} is fundamental understanding.", topic),
                format!("Example: {} in simple terms", topic),
            ),
            Difficulty::Medium => (
                format!("What are the key principles of {}?", topic),
                format!(
                    "The key principles of {} include core concepts and practical applications.",
                    topic
                ),
                format!("Example: {} in practice", topic),
            ),
            Difficulty::Hard => (
                format!("Explain the advanced applications of {} in {}.", topic, subject),
                format!(
                    "Advanced applications of {} include complex scenarios and real-world implementations.",
                    topic
                ),
                format!("Advanced example: {} in professional context", topic),
            ),
        };

        let flashcards = (1..=params.count)
            .map(|n| Flashcard {
                title: format!("Question {}", n),
                question: question.clone(),
                answer: answer.clone(),
                example: params.include_examples.then(|| example.clone()),
            })
            .collect();

        FlashcardGeneratorOutput {
            flashcards,
            topic: topic.to_string(),
            adaptation_details: format!(
                "Adapted for {} difficulty level based on student profile",
                params.difficulty.as_str()
            ),
            difficulty: params.difficulty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(count: u32, difficulty: Difficulty, include_examples: bool) -> FlashcardGeneratorParams {
        FlashcardGeneratorParams {
            user_info: StudentProfile {
                user_id: "student456".to_string(),
                name: "Bob".to_string(),
                grade_level: "8".to_string(),
                learning_style_summary: "Kinesthetic learner".to_string(),
                emotional_state_summary: "Motivated".to_string(),
                mastery_level_summary: "Level 4".to_string(),
            },
            topic: "Algebra".to_string(),
            count,
            difficulty,
            subject: "Mathematics".to_string(),
            include_examples,
        }
    }

    #[test]
    fn test_generates_requested_number_of_cards() {
        let output = FlashcardGeneratorTool::generate(&params(5, Difficulty::Medium, true));
        assert_eq!(output.flashcards.len(), 5);
        assert_eq!(output.flashcards[0].title, "Question 1");
        assert_eq!(output.flashcards[4].title, "Question 5");
        assert_eq!(
            output.flashcards[0].question,
            "What are the key principles of Algebra?"
        );
    }

    #[test]
    fn test_hard_cards_mention_subject() {
        let output = FlashcardGeneratorTool::generate(&params(1, Difficulty::Hard, true));
        assert!(output.flashcards[0].question.contains("in Mathematics"));
        assert_eq!(
            output.adaptation_details,
            "Adapted for hard difficulty level based on student profile"
        );
    }

    #[test]
    fn test_examples_omitted_when_disabled() {
        let output = FlashcardGeneratorTool::generate(&params(2, Difficulty::Easy, false));
        assert!(output.flashcards.iter().all(|card| card.example.is_none()));

        let json = serde_json::to_value(&output).unwrap();
        assert!(json["flashcards"][0].get("example").is_none());
        assert_eq!(json["difficulty"], "easy");
    }
}
