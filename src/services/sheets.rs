//! Google Sheets persistence sink
//!
//! Appends completed orders to a spreadsheet through the Sheets v4
//! `values:append` endpoint. One record becomes one row: the order id first,
//! then the answers in question spec order. The service holds no conversation
//! state; a failed append never touches the registry.

use std::time::Duration;

use reqwest::Client;
use serde::Serialize;
use tracing::{debug, info};

use crate::config::settings::SheetsConfig;
use crate::models::order::OrderRecord;
use crate::utils::errors::{OrderDeskError, Result, SheetsError};

/// Request body for the values:append call
#[derive(Debug, Serialize)]
struct AppendRequest {
    values: Vec<Vec<String>>,
}

/// Google Sheets append-only client
#[derive(Debug, Clone)]
pub struct SheetsService {
    client: Client,
    config: SheetsConfig,
}

impl SheetsService {
    /// Create a new SheetsService instance
    pub fn new(config: SheetsConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent("orderdesk-bot/1.0")
            .build()
            .map_err(OrderDeskError::Http)?;

        Ok(Self { client, config })
    }

    /// Append one completed order as a spreadsheet row
    pub async fn append(&self, record: &OrderRecord) -> std::result::Result<(), SheetsError> {
        let url = format!(
            "{}/v4/spreadsheets/{}/values/{}:append",
            self.config.base_url.trim_end_matches('/'),
            self.config.spreadsheet_id,
            self.config.sheet_name,
        );

        debug!(order_id = %record.order_id, "Appending order row to spreadsheet");

        let body = AppendRequest {
            values: vec![record.to_row()],
        };

        let response = self
            .client
            .post(&url)
            .query(&[("valueInputOption", "RAW")])
            .bearer_auth(&self.config.api_token)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    SheetsError::Timeout
                } else {
                    SheetsError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SheetsError::ApiStatus {
                status: status.as_u16(),
                body,
            });
        }

        info!(order_id = %record.order_id, "Order row appended to spreadsheet");
        Ok(())
    }
}
