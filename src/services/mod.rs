//! Services module
//!
//! This module contains the external-facing services: the Google Sheets
//! persistence sink and the order submission service that wraps it.

pub mod orders;
pub mod sheets;

// Re-export commonly used services
pub use orders::OrderService;
pub use sheets::SheetsService;
