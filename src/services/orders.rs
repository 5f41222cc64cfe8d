//! Order submission service
//!
//! By the time a record exists, the conversation that produced it is already
//! gone from the registry, so a failed spreadsheet append must not lose the
//! record. This service keeps the last failed record per user and lets the
//! user retry just the persistence step, never the questionnaire.

use std::collections::HashMap;
use std::sync::Mutex;

use tracing::{error, info, warn};

use crate::models::order::OrderRecord;
use crate::services::sheets::SheetsService;
use crate::utils::errors::SheetsError;

/// Submits completed orders and tracks failed submissions for retry
#[derive(Debug)]
pub struct OrderService {
    sheets: SheetsService,
    pending: Mutex<HashMap<i64, OrderRecord>>,
}

impl OrderService {
    /// Create a new OrderService instance
    pub fn new(sheets: SheetsService) -> Self {
        Self {
            sheets,
            pending: Mutex::new(HashMap::new()),
        }
    }

    /// Persist a freshly completed order.
    ///
    /// On failure the record is retained; a later [`Self::retry`] re-attempts
    /// the append with the same record and the same order id.
    pub async fn submit(&self, user_id: i64, record: OrderRecord) -> Result<(), SheetsError> {
        match self.sheets.append(&record).await {
            Ok(()) => {
                self.lock_pending().remove(&user_id);
                Ok(())
            }
            Err(e) => {
                error!(
                    user_id = user_id,
                    order_id = %record.order_id,
                    error = %e,
                    "Failed to persist order, keeping record for retry"
                );
                self.lock_pending().insert(user_id, record);
                Err(e)
            }
        }
    }

    /// Retry the persistence step for a user's last failed order.
    ///
    /// Returns the order id on success, or `Ok(None)` when there is nothing
    /// pending for this user.
    pub async fn retry(&self, user_id: i64) -> Result<Option<String>, SheetsError> {
        let record = match self.lock_pending().get(&user_id).cloned() {
            Some(record) => record,
            None => return Ok(None),
        };

        info!(user_id = user_id, order_id = %record.order_id, "Retrying order persistence");

        match self.sheets.append(&record).await {
            Ok(()) => {
                self.lock_pending().remove(&user_id);
                Ok(Some(record.order_id))
            }
            Err(e) => {
                warn!(
                    user_id = user_id,
                    order_id = %record.order_id,
                    error = %e,
                    "Order persistence retry failed"
                );
                Err(e)
            }
        }
    }

    /// Check whether a user has an unpersisted order waiting for retry
    pub fn has_pending(&self, user_id: i64) -> bool {
        self.lock_pending().contains_key(&user_id)
    }

    fn lock_pending(&self) -> std::sync::MutexGuard<'_, HashMap<i64, OrderRecord>> {
        self.pending.lock().unwrap_or_else(|e| e.into_inner())
    }
}
