//! orderdesk Telegram Bot
//!
//! A Telegram bot that collects customer orders through a fixed linear
//! questionnaire and appends each completed order as one row to a Google
//! Sheets spreadsheet. The conversation state machine is transport-agnostic;
//! the bot runs in long-polling or webhook mode from the same core.

pub mod config;
pub mod handlers;
pub mod models;
pub mod services;
pub mod state;
pub mod utils;

// Re-export commonly used types
pub use config::Settings;
pub use utils::errors::{OrderDeskError, Result};

// Re-export main components for easy access
pub use models::order::OrderRecord;
pub use services::{OrderService, SheetsService};
pub use state::{ConversationRegistry, QuestionSpec, StepOutcome};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Get library information
pub fn info() -> String {
    format!("{} v{}", NAME, VERSION)
}
