//! Data models module

pub mod order;

pub use order::OrderRecord;
