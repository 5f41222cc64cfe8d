//! Application settings management
//!
//! This module defines the configuration structure and provides methods
//! for loading settings from TOML files and environment variables.

use serde::{Deserialize, Serialize};

/// Main application configuration structure
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Settings {
    pub bot: BotConfig,
    pub sheets: SheetsConfig,
    pub logging: LoggingConfig,
}

/// Telegram bot configuration
///
/// When `webhook_url` is set the bot registers a webhook and listens on
/// `webhook_port`; otherwise it falls back to long polling.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BotConfig {
    pub token: String,
    pub webhook_url: Option<String>,
    #[serde(default = "default_webhook_port")]
    pub webhook_port: u16,
}

/// Google Sheets configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SheetsConfig {
    pub spreadsheet_id: String,
    pub sheet_name: String,
    pub api_token: String,
    #[serde(default = "default_sheets_base_url")]
    pub base_url: String,
    #[serde(default = "default_sheets_timeout")]
    pub timeout_seconds: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: String,
    pub file_path: String,
}

fn default_webhook_port() -> u16 {
    8080
}

fn default_sheets_base_url() -> String {
    "https://sheets.googleapis.com".to_string()
}

fn default_sheets_timeout() -> u64 {
    10
}

impl Settings {
    /// Load settings from configuration file and environment variables
    pub fn new() -> Result<Self, config::ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(config::Environment::with_prefix("ORDERDESK").separator("__"))
            .build()?;

        settings.try_deserialize()
    }

    /// Validate configuration settings
    pub fn validate(&self) -> Result<(), crate::utils::errors::OrderDeskError> {
        super::validation::validate_settings(self)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bot: BotConfig {
                token: String::new(),
                webhook_url: None,
                webhook_port: default_webhook_port(),
            },
            sheets: SheetsConfig {
                spreadsheet_id: String::new(),
                sheet_name: "Orders".to_string(),
                api_token: String::new(),
                base_url: default_sheets_base_url(),
                timeout_seconds: default_sheets_timeout(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                file_path: "/var/log/orderdesk".to_string(),
            },
        }
    }
}
