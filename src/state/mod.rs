//! State management module
//!
//! This module holds the conversation state machine: the fixed question
//! sequence and the per-user registry that drives users through it.

pub mod questionnaire;
pub mod registry;

// Re-export commonly used state components
pub use questionnaire::{Question, QuestionSpec};
pub use registry::{ConversationRegistry, ConversationState, StepOutcome};
