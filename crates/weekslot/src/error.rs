//! Error types for weekslot operations.
//!
//! Rejected or declined slot selections are not errors; they are reported as
//! [`SlotOutcome`](crate::picker::SlotOutcome) variants.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WeekSlotError {
    #[error("Invalid instant: {0}")]
    InvalidInstant(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, WeekSlotError>;
