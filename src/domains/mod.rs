//! Domains module containing business logic organized by bounded contexts.
//!
//! `extraction` reads the conversation, `tools` owns the educational tools,
//! and `orchestration` wires the two together.

pub mod extraction;
pub mod orchestration;
pub mod tools;
