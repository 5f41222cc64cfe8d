//! Error handling for orderdesk
//!
//! This module defines the main error types used throughout the application
//! and provides a unified error handling strategy.

use thiserror::Error;

/// Main error type for the orderdesk application
#[derive(Error, Debug)]
pub enum OrderDeskError {
    #[error("no active conversation for user {user_id}")]
    NoActiveConversation { user_id: i64 },

    #[error("Telegram API error: {0}")]
    Telegram(#[from] teloxide::RequestError),

    #[error("Spreadsheet error: {0}")]
    Sheets(#[from] SheetsError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("URL parsing error: {0}")]
    UrlParse(#[from] url::ParseError),
}

/// Google Sheets API specific errors
#[derive(Error, Debug)]
pub enum SheetsError {
    #[error("Sheets API request failed: {0}")]
    RequestFailed(String),

    #[error("Sheets API returned status {status}: {body}")]
    ApiStatus { status: u16, body: String },

    #[error("Sheets API timeout")]
    Timeout,
}

/// Result type alias for orderdesk operations
pub type Result<T> = std::result::Result<T, OrderDeskError>;

impl OrderDeskError {
    /// Check if the error is recoverable from the user's point of view.
    ///
    /// A recoverable error means the user can retry the action themselves
    /// (send /start, send /retry); an unrecoverable one needs operator
    /// attention.
    pub fn is_recoverable(&self) -> bool {
        match self {
            OrderDeskError::NoActiveConversation { .. } => true,
            OrderDeskError::Telegram(_) => true,
            OrderDeskError::Sheets(_) => true,
            OrderDeskError::Http(_) => true,
            OrderDeskError::Io(_) => true,
            OrderDeskError::Config(_) => false,
            OrderDeskError::Serialization(_) => false,
            OrderDeskError::UrlParse(_) => false,
        }
    }
}
