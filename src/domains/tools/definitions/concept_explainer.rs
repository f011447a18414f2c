//! Concept explainer tool definition.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domains::extraction::{ChatTurn, StudentProfile};
use crate::domains::tools::dispatcher::EducationalTool;
use crate::domains::tools::identifier::ToolIdentifier;
use crate::domains::tools::params::ExplanationDepth;

/// Parameters for the concept explainer tool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ConceptExplainerParams {
    pub user_info: StudentProfile,

    pub chat_history: Vec<ChatTurn>,

    /// The concept the student asked about.
    pub concept_to_explain: String,

    /// Subject area the concept sits in.
    pub current_topic: String,

    pub desired_depth: ExplanationDepth,
}

/// Generated explanation.
#[derive(Debug, Clone, Serialize, JsonSchema)]
pub struct ConceptExplainerOutput {
    pub explanation: String,
    pub examples: Vec<String>,
    pub related_concepts: Vec<String>,
    pub visual_aids: Vec<String>,
    pub practice_questions: Vec<String>,
    pub source_references: Vec<String>,
}

/// Concept explainer tool - depth-adapted explanations.
pub struct ConceptExplainerTool;

impl EducationalTool for ConceptExplainerTool {
    const IDENTIFIER: ToolIdentifier = ToolIdentifier::ConceptExplainer;

    const DESCRIPTION: &'static str = "Explain a concept at basic, intermediate, advanced or comprehensive depth, with examples, visual aids and practice questions.";

    type Params = ConceptExplainerParams;
    type Output = ConceptExplainerOutput;

    fn generate(params: &ConceptExplainerParams) -> ConceptExplainerOutput {
        let concept = params.concept_to_explain.as_str();

        info!(
            "Explaining concept: {}, depth: {}",
            concept,
            params.desired_depth.as_str()
        );

        let (explanation, examples, practice_questions) = match params.desired_depth {
            ExplanationDepth::Basic => (
                format!(
                    "This is a basic explanation of {}. It covers the fundamental principles in simple terms.",
                    concept
                ),
                vec![
                    format!("Simple example: {} in everyday life", concept),
                    format!("Basic example: {} fundamentals", concept),
                ],
                vec![
                    format!("What is {}?", concept),
                    format!("How does {} work?", concept),
                ],
            ),
            ExplanationDepth::Intermediate => (
                format!(
                    "This is an intermediate explanation of {}. It covers the main principles and practical applications.",
                    concept
                ),
                vec![
                    format!("Example 1: {} in practice", concept),
                    format!("Example 2: {} applications", concept),
                ],
                vec![
                    format!("How does {} work?", concept),
                    format!("What are the applications of {}?", concept),
                ],
            ),
            ExplanationDepth::Advanced => (
                format!(
                    "This is an advanced explanation of {}. It covers complex principles, applications, and theoretical foundations.",
                    concept
                ),
                vec![
                    format!("Advanced example: {} in professional context", concept),
                    format!("Complex example: {} in research", concept),
                ],
                vec![
                    format!("Analyze the implications of {}", concept),
                    format!("Evaluate the applications of {}", concept),
                ],
            ),
            ExplanationDepth::Comprehensive => (
                format!(
                    "This is a comprehensive explanation of {}. It covers all aspects from basic principles to advanced applications and real-world implications.",
                    concept
                ),
                vec![
                    format!("Basic example: {} fundamentals", concept),
                    format!("Advanced example: {} in practice", concept),
                    format!("Real-world example: {} applications", concept),
                ],
                vec![
                    format!("Explain {} from multiple perspectives", concept),
                    format!("Compare {} with related concepts", concept),
                ],
            ),
        };

        ConceptExplainerOutput {
            explanation,
            examples,
            related_concepts: vec![
                format!("Related concept 1 to {}", concept),
                format!("Related concept 2 to {}", concept),
            ],
            visual_aids: vec![
                format!("Diagram: {} process flow", concept),
                format!("Chart: {} relationships", concept),
            ],
            practice_questions,
            source_references: vec![
                format!("Reference 1: {} textbook", concept),
                format!("Reference 2: {} online resources", concept),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(depth: ExplanationDepth) -> ConceptExplainerParams {
        ConceptExplainerParams {
            user_info: StudentProfile {
                user_id: "student789".to_string(),
                name: "Carol".to_string(),
                grade_level: "11".to_string(),
                learning_style_summary: "Auditory".to_string(),
                emotional_state_summary: "Curious".to_string(),
                mastery_level_summary: "Level 8".to_string(),
            },
            chat_history: Vec::new(),
            concept_to_explain: "Derivatives".to_string(),
            current_topic: "Mathematics".to_string(),
            desired_depth: depth,
        }
    }

    #[test]
    fn test_explanation_follows_depth() {
        let basic = ConceptExplainerTool::generate(&params(ExplanationDepth::Basic));
        assert!(basic.explanation.starts_with("This is a basic explanation of Derivatives."));
        assert_eq!(basic.practice_questions[0], "What is Derivatives?");

        let advanced = ConceptExplainerTool::generate(&params(ExplanationDepth::Advanced));
        assert!(advanced.explanation.contains("theoretical foundations"));
    }

    #[test]
    fn test_comprehensive_has_three_examples() {
        let output = ConceptExplainerTool::generate(&params(ExplanationDepth::Comprehensive));
        assert_eq!(output.examples.len(), 3);
        assert_eq!(output.visual_aids.len(), 2);
    }
}
