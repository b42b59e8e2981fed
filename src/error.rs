//! Error types for overlap-engine operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum OverlapError {
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),
}

pub type Result<T> = std::result::Result<T, OverlapError>;
