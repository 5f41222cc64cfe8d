//! Bot handlers module
//!
//! This module contains all Telegram bot handlers:
//! - Command handlers (/start, /cancel, /retry, /help)
//! - Message handlers for questionnaire answers

pub mod commands;
pub mod messages;

// Re-export commonly used handler functions
pub use commands::*;
pub use messages::*;
