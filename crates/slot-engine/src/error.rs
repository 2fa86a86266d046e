//! Error types for slot-engine operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlotError {
    /// The period start could not be read as a calendar date, or the 7-day
    /// window starting there is not representable.
    #[error("Invalid period start: {0}")]
    InvalidPeriodStart(String),

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    /// A slot label that is not a zero-padded `HH:MM` on a 30-minute boundary.
    #[error("Invalid tick label: {0}")]
    InvalidTick(String),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, SlotError>;
