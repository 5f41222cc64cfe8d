//! Utility modules
//!
//! Common utilities used throughout the application

pub mod errors;
pub mod logging;

pub use errors::{OrderDeskError, Result, SheetsError};
