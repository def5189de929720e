//! Error types for agenda-core construction and collaborator seams.
//!
//! [`crate::layout::layout`] itself never fails; errors only arise while
//! building its inputs.

use chrono::NaiveDateTime;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AgendaError {
    #[error("Invalid capacity: {0} (an agenda needs at least one line)")]
    InvalidCapacity(usize),

    /// The window's last day lies past the last representable date.
    #[error("Window out of range: {capacity} days from {start} ends past the last representable date")]
    WindowOutOfRange {
        start: NaiveDateTime,
        capacity: usize,
    },

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// The config document was not valid JSON or had the wrong shape.
    #[error("Config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),

    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    /// An event whose end lies before its begin.
    #[error("Invalid event: {0}")]
    InvalidEvent(String),

    #[error("Calendar source error: {0}")]
    Source(String),
}

pub type Result<T> = std::result::Result<T, AgendaError>;
