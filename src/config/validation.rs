//! Configuration validation module
//!
//! This module provides validation functions for application configuration
//! to ensure all required settings are properly configured.

use super::Settings;
use crate::utils::errors::{OrderDeskError, Result};

/// Validate all configuration settings
pub fn validate_settings(settings: &Settings) -> Result<()> {
    validate_bot_config(&settings.bot)?;
    validate_sheets_config(&settings.sheets)?;
    validate_logging_config(&settings.logging)?;

    Ok(())
}

/// Validate bot configuration
fn validate_bot_config(config: &super::BotConfig) -> Result<()> {
    if config.token.is_empty() {
        return Err(OrderDeskError::Config("Bot token is required".to_string()));
    }

    if let Some(url) = &config.webhook_url {
        if !url.starts_with("https://") {
            return Err(OrderDeskError::Config(
                "Webhook URL must use https".to_string(),
            ));
        }
    }

    Ok(())
}

/// Validate Google Sheets configuration
fn validate_sheets_config(config: &super::SheetsConfig) -> Result<()> {
    if config.spreadsheet_id.is_empty() {
        return Err(OrderDeskError::Config(
            "Spreadsheet id is required".to_string(),
        ));
    }

    if config.sheet_name.is_empty() {
        return Err(OrderDeskError::Config(
            "Sheet name is required".to_string(),
        ));
    }

    if config.api_token.is_empty() {
        return Err(OrderDeskError::Config(
            "Sheets API token is required".to_string(),
        ));
    }

    if config.timeout_seconds == 0 {
        return Err(OrderDeskError::Config(
            "Sheets timeout must be greater than 0".to_string(),
        ));
    }

    Ok(())
}

/// Validate logging configuration
fn validate_logging_config(config: &super::LoggingConfig) -> Result<()> {
    if config.level.is_empty() {
        return Err(OrderDeskError::Config("Log level is required".to_string()));
    }

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    if !valid_levels.contains(&config.level.as_str()) {
        return Err(OrderDeskError::Config(format!(
            "Invalid log level: {}. Valid levels: {:?}",
            config.level, valid_levels
        )));
    }

    Ok(())
}
