//! Rule-based extractor.
//!
//! Maps a [`ConversationSnapshot`] onto a tool choice and that tool's full
//! parameter set. Explicit signals in the current message take priority
//! over the (possibly stale) profile summaries; every inference has a
//! fallback so degenerate input never fails.

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, instrument};

use super::keywords::{self, contains_any};
use super::snapshot::{ChatTurn, ConversationSnapshot, recent_turns};
use crate::core::config::ExtractionConfig;
use crate::domains::tools::definitions::{
    ConceptExplainerParams, FlashcardGeneratorParams, NoteMakerParams,
};
use crate::domains::tools::params::{
    Difficulty, ExplanationDepth, NoteTakingStyle, ToolParameters, clamp_flashcard_count,
};
use crate::domains::tools::ToolIdentifier;

/// Matches a mastery tier such as "Level 6" or "level: 10".
static MASTERY_TIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\blevel\s*:?\s*(\d+)").expect("mastery tier pattern is valid")
});

/// Tool choice plus the parameters extracted for it.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedRequest {
    pub tool: ToolIdentifier,
    pub parameters: ToolParameters,
}

/// Deterministic keyword-driven extractor.
#[derive(Debug, Clone, Default)]
pub struct RuleBasedExtractor {
    config: ExtractionConfig,
}

impl RuleBasedExtractor {
    pub fn new(config: ExtractionConfig) -> Self {
        Self { config }
    }

    /// Choose a tool and derive every parameter it needs.
    #[instrument(skip_all, fields(user = %snapshot.user_info.user_id))]
    pub fn extract(&self, snapshot: &ConversationSnapshot) -> ExtractedRequest {
        let profile = &snapshot.user_info;
        let message = snapshot.current_message.trim();
        let lowered = message.to_lowercase();

        let tool = select_tool(&lowered);
        let topic = self.extract_topic(message, &snapshot.chat_history);
        let subject = self.extract_subject(message, &snapshot.chat_history);

        debug!(%tool, %topic, %subject, "Inferred request shape");

        let parameters = match tool {
            ToolIdentifier::NoteMaker => ToolParameters::NoteMaker(NoteMakerParams {
                user_info: profile.clone(),
                chat_history: snapshot.chat_history.clone(),
                topic,
                subject,
                note_taking_style: infer_note_style(&profile.learning_style_summary),
                include_examples: true,
                include_analogies: profile
                    .learning_style_summary
                    .to_lowercase()
                    .contains("visual"),
            }),
            ToolIdentifier::FlashcardGenerator => {
                ToolParameters::FlashcardGenerator(FlashcardGeneratorParams {
                    user_info: profile.clone(),
                    topic,
                    count: infer_flashcard_count(&lowered),
                    difficulty: infer_difficulty(&profile.mastery_level_summary, &lowered),
                    subject,
                    include_examples: true,
                })
            }
            ToolIdentifier::ConceptExplainer => {
                ToolParameters::ConceptExplainer(ConceptExplainerParams {
                    user_info: profile.clone(),
                    chat_history: snapshot.chat_history.clone(),
                    concept_to_explain: topic,
                    current_topic: subject,
                    desired_depth: infer_depth(&profile.mastery_level_summary, &lowered),
                })
            }
        };

        ExtractedRequest { tool, parameters }
    }

    /// First topic keyword found in the message and recent history,
    /// title-cased. Falls back to the opening words of the message.
    pub fn extract_topic(&self, message: &str, history: &[ChatTurn]) -> String {
        let text = scan_text(message, history, self.config.topic_history_window);

        if let Some(keyword) = keywords::TOPIC_KEYWORDS
            .iter()
            .find(|keyword| text.contains(**keyword))
        {
            return title_case(keyword);
        }

        let opening: Vec<&str> = message
            .split_whitespace()
            .take(keywords::FALLBACK_TOPIC_WORDS)
            .collect();
        if opening.is_empty() {
            keywords::FALLBACK_TOPIC.to_string()
        } else {
            opening.join(" ")
        }
    }

    /// Subject label for the first subject keyword in the message and
    /// recent history.
    pub fn extract_subject(&self, message: &str, history: &[ChatTurn]) -> String {
        let text = scan_text(message, history, self.config.subject_history_window);

        keywords::SUBJECT_KEYWORDS
            .iter()
            .find(|(keyword, _)| text.contains(keyword))
            .map_or(keywords::FALLBACK_SUBJECT, |(_, subject)| *subject)
            .to_string()
    }
}

/// Walk the selection table top to bottom; default when nothing matches.
///
/// `message` must already be lower-cased.
pub fn select_tool(message: &str) -> ToolIdentifier {
    keywords::TOOL_RULES
        .iter()
        .find(|rule| contains_any(message, rule.keywords))
        .map_or(keywords::DEFAULT_TOOL, |rule| rule.tool)
}

pub fn infer_note_style(learning_style: &str) -> NoteTakingStyle {
    let style = learning_style.to_lowercase();

    if style.contains("visual") {
        NoteTakingStyle::Structured
    } else if style.contains("kinesthetic") {
        NoteTakingStyle::BulletPoints
    } else if style.contains("auditory") {
        NoteTakingStyle::Narrative
    } else {
        NoteTakingStyle::Outline
    }
}

/// `message` must already be lower-cased.
pub fn infer_flashcard_count(message: &str) -> u32 {
    let count = if contains_any(message, keywords::FEW_CARDS) {
        keywords::FEW_CARD_COUNT
    } else if contains_any(message, keywords::MANY_CARDS) {
        keywords::MANY_CARD_COUNT
    } else {
        keywords::DEFAULT_CARD_COUNT
    };
    clamp_flashcard_count(count.into())
}

/// Message keywords first, then the mastery tier, then medium.
///
/// `message` must already be lower-cased.
pub fn infer_difficulty(mastery_level: &str, message: &str) -> Difficulty {
    if contains_any(message, keywords::EASIER) {
        return Difficulty::Easy;
    }
    if contains_any(message, keywords::HARDER) {
        return Difficulty::Hard;
    }

    match mastery_tier(mastery_level) {
        Some(1..=3) => Difficulty::Easy,
        Some(4..=6) => Difficulty::Medium,
        Some(tier) if tier >= 7 => Difficulty::Hard,
        _ => Difficulty::Medium,
    }
}

/// Message keywords first, then the mastery tier, then intermediate.
///
/// `message` must already be lower-cased.
pub fn infer_depth(mastery_level: &str, message: &str) -> ExplanationDepth {
    if contains_any(message, keywords::SHALLOWER) {
        return ExplanationDepth::Basic;
    }
    if contains_any(message, keywords::DEEPER) {
        return ExplanationDepth::Comprehensive;
    }

    match mastery_tier(mastery_level) {
        Some(tier) if tier >= 8 => ExplanationDepth::Advanced,
        Some(2..=3) => ExplanationDepth::Basic,
        _ => ExplanationDepth::Intermediate,
    }
}

/// Numeric tier from a summary like "Level 6: Good understanding".
pub fn mastery_tier(summary: &str) -> Option<u32> {
    MASTERY_TIER
        .captures(summary)
        .and_then(|caps| caps[1].parse().ok())
}

/// Lower-cased message followed by the last `window` turns.
fn scan_text(message: &str, history: &[ChatTurn], window: usize) -> String {
    let mut text = message.to_lowercase();
    for content in recent_turns(history, window) {
        text.push(' ');
        text.push_str(&content.to_lowercase());
    }
    text
}

fn title_case(keyword: &str) -> String {
    keyword
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
