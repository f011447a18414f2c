//! Note maker tool definition.
//!
//! Produces structured study notes for a topic, laid out according to the
//! student's note-taking style.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domains::extraction::{ChatTurn, StudentProfile};
use crate::domains::tools::dispatcher::EducationalTool;
use crate::domains::tools::identifier::ToolIdentifier;
use crate::domains::tools::params::{NoteTakingStyle, default_true};

// ============================================================================
// Tool Parameters
// ============================================================================

/// Parameters for the note maker tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct NoteMakerParams {
    pub user_info: StudentProfile,

    pub chat_history: Vec<ChatTurn>,

    /// Topic the notes cover.
    pub topic: String,

    /// Academic subject the topic belongs to.
    pub subject: String,

    pub note_taking_style: NoteTakingStyle,

    /// Include worked examples (default: true).
    #[serde(default = "default_true")]
    pub include_examples: bool,

    /// Include analogies (default: false).
    #[serde(default)]
    pub include_analogies: bool,
}

// ============================================================================
// Tool Output
// ============================================================================

#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct NoteSection {
    pub title: String,
    pub content: String,
    pub key_points: Vec<String>,
    pub examples: Vec<String>,
    pub analogies: Vec<String>,
}

#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct VisualElement {
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
}

/// Generated notes.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct NoteMakerOutput {
    pub topic: String,
    pub title: String,
    pub summary: String,
    pub note_sections: Vec<NoteSection>,
    pub key_concepts: Vec<String>,
    pub connections_to_prior_learning: Vec<String>,
    pub visual_elements: Vec<VisualElement>,
    pub practice_suggestions: Vec<String>,
    pub source_references: Vec<String>,
    pub note_taking_style: NoteTakingStyle,
}

// ============================================================================
// Tool Definition
// ============================================================================

/// Note maker tool - template-based study notes.
pub struct NoteMakerTool;

impl EducationalTool for NoteMakerTool {
    const IDENTIFIER: ToolIdentifier = ToolIdentifier::NoteMaker;

    const DESCRIPTION: &'static str = "Generate structured study notes for a topic, adapted to the student's note-taking style. Optionally includes examples and analogies.";

    type Params = NoteMakerParams;
    type Output = NoteMakerOutput;

    fn generate(params: &NoteMakerParams) -> NoteMakerOutput {
        let topic = params.topic.as_str();
        let subject = params.subject.as_str();

        info!(
            "Generating notes for topic: {}, style: {}",
            topic,
            params.note_taking_style.as_str()
        );

        // Examples and analogies are only emitted when requested.
        let examples = |items: Vec<String>| if params.include_examples { items } else { Vec::new() };
        let analogies = |items: Vec<String>| if params.include_analogies { items } else { Vec::new() };

        let note_sections = match params.note_taking_style {
            NoteTakingStyle::Structured => vec![
                NoteSection {
                    title: "Introduction".to_string(),
                    content: format!("Introduction to {} in {}", topic, subject),
                    key_points: vec![
                        format!("Key concept 1 of {}", topic),
                        format!("Key concept 2 of {}", topic),
                    ],
                    examples: examples(vec![
                        format!("Example 1: {} in practice", topic),
                        format!("Example 2: {} application", topic),
                    ]),
                    analogies: analogies(vec![format!("Think of {} like...", topic)]),
                },
                NoteSection {
                    title: "Main Concepts".to_string(),
                    content: format!("Core concepts of {}", topic),
                    key_points: vec![
                        format!("Concept A: {} fundamentals", topic),
                        format!("Concept B: {} applications", topic),
                    ],
                    examples: examples(vec![format!("Real-world example of {}", topic)]),
                    analogies: analogies(vec![format!("{} is similar to...", topic)]),
                },
            ],
            NoteTakingStyle::BulletPoints => vec![NoteSection {
                title: format!("{} Overview", topic),
                content: format!("Key points about {}", topic),
                key_points: vec![
                    format!("• Point 1: {} basics", topic),
                    format!("• Point 2: {} importance", topic),
                ],
                examples: examples(vec![format!("• Example: {} in action", topic)]),
                analogies: analogies(vec![format!("• Analogy: {} is like...", topic)]),
            }],
            NoteTakingStyle::Narrative | NoteTakingStyle::Outline => vec![NoteSection {
                title: format!("Understanding {}", topic),
                content: format!("A comprehensive look at {} in {}", topic, subject),
                key_points: vec![
                    format!("Main idea: {} fundamentals", topic),
                    format!("Application: {} in practice", topic),
                ],
                examples: examples(vec![format!("Example: {} case study", topic)]),
                analogies: analogies(vec![format!("Analogy: {} comparison", topic)]),
            }],
        };

        NoteMakerOutput {
            topic: topic.to_string(),
            title: format!("Notes on {}", topic),
            summary: format!(
                "Comprehensive notes covering {} with examples and key concepts.",
                topic
            ),
            note_sections,
            key_concepts: vec![
                format!("Concept 1: {} basics", topic),
                format!("Concept 2: {} applications", topic),
                format!("Concept 3: {} importance", topic),
            ],
            connections_to_prior_learning: vec![
                format!("Builds on previous {} knowledge", subject),
                format!("Connects to {} fundamentals", topic),
            ],
            visual_elements: vec![VisualElement {
                kind: "diagram".to_string(),
                description: format!("{} process flow", topic),
            }],
            practice_suggestions: vec![
                format!("Practice exercise 1: {} basics", topic),
                format!("Practice exercise 2: {} application", topic),
            ],
            source_references: vec![
                format!("Reference 1: {} textbook", topic),
                format!("Reference 2: {} online resources", topic),
            ],
            note_taking_style: params.note_taking_style,
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
