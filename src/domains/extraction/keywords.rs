//! Keyword tables driving the rule-based extractor.
//!
//! All matching is substring matching against lower-cased text, so every
//! entry here must be lower-case.

use crate::domains::tools::ToolIdentifier;

/// One row of the tool selection table.
#[derive(Debug, Clone, Copy)]
pub struct ToolRule {
    pub keywords: &'static [&'static str],
    pub tool: ToolIdentifier,
}

/// Tool selection rules, evaluated top to bottom. First match wins.
pub const TOOL_RULES: &[ToolRule] = &[
    ToolRule {
        keywords: &["note", "notes", "summary", "outline", "study guide"],
        tool: ToolIdentifier::NoteMaker,
    },
    ToolRule {
        keywords: &["flashcard", "quiz", "test", "practice", "review", "memorize"],
        tool: ToolIdentifier::FlashcardGenerator,
    },
    ToolRule {
        keywords: &["explain", "understand", "concept", "how", "what", "why", "confused"],
        tool: ToolIdentifier::ConceptExplainer,
    },
];

/// Tool chosen when no rule matches.
pub const DEFAULT_TOOL: ToolIdentifier = ToolIdentifier::ConceptExplainer;

/// Topic keywords in priority order. Narrow topics come before the broad
/// subjects they are usually mentioned with.
pub const TOPIC_KEYWORDS: &[&str] = &[
    "photosynthesis",
    "derivatives",
    "world war",
    "computer science",
    "calculus",
    "algebra",
    "geometry",
    "statistics",
    "math",
    "biology",
    "chemistry",
    "physics",
    "environmental",
    "science",
    "history",
    "literature",
    "english",
    "writing",
    "reading",
    "programming",
    "coding",
    "equations",
];

/// Keyword to subject label, in priority order.
pub const SUBJECT_KEYWORDS: &[(&str, &str)] = &[
    ("calculus", "Mathematics"),
    ("algebra", "Mathematics"),
    ("geometry", "Mathematics"),
    ("statistics", "Mathematics"),
    ("math", "Mathematics"),
    ("biology", "Biology"),
    ("chemistry", "Chemistry"),
    ("physics", "Physics"),
    ("environmental", "Environmental Science"),
    ("science", "Science"),
    ("history", "History"),
    ("english", "English"),
    ("literature", "English"),
    ("programming", "Computer Science"),
    ("coding", "Computer Science"),
];

pub const FALLBACK_TOPIC: &str = "General Topic";
pub const FALLBACK_SUBJECT: &str = "General Education";

/// Number of leading message words used as a topic when no keyword matches.
pub const FALLBACK_TOPIC_WORDS: usize = 3;

// Flashcard count hints
pub const FEW_CARDS: &[&str] = &["few", "some", "little"];
pub const MANY_CARDS: &[&str] = &["many", "lot", "comprehensive", "extensive"];
pub const FEW_CARD_COUNT: u32 = 5;
pub const MANY_CARD_COUNT: u32 = 15;
pub const DEFAULT_CARD_COUNT: u32 = 10;

// Difficulty hints
pub const EASIER: &[&str] = &["struggling", "difficult", "hard", "confused"];
pub const HARDER: &[&str] = &["advanced", "expert", "challenging"];

// Explanation depth hints
pub const SHALLOWER: &[&str] = &["basic", "simple", "beginner", "confused"];
pub const DEEPER: &[&str] = &["advanced", "comprehensive", "detailed"];

/// Whether `text` contains any of `keywords`.
pub fn contains_any(text: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| text.contains(keyword))
}
