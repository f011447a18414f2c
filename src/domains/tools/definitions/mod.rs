//! Tool definitions module.
//!
//! One file per tool: parameters, output shape and the content generator.

pub mod common;
pub mod concept_explainer;
pub mod flashcard_generator;
pub mod note_maker;
pub mod orchestrate;

pub use concept_explainer::{ConceptExplainerOutput, ConceptExplainerParams, ConceptExplainerTool};
pub use flashcard_generator::{
    Flashcard, FlashcardGeneratorOutput, FlashcardGeneratorParams, FlashcardGeneratorTool,
};
pub use note_maker::{NoteMakerOutput, NoteMakerParams, NoteMakerTool, NoteSection};
pub use orchestrate::OrchestrateTool;
