//! Error types used throughout the scheduling core

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for Eventra scheduling operations
///
/// Every variant is a well-formed rejection of a specific call's inputs;
/// there is no fatal class and nothing is retried inside the core.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum AgendaError {
    /// A proposed or requested time window has `end <= start`.
    #[error("Invalid time range: {0}")]
    InvalidRange(String),

    /// A requested slot duration is zero or negative.
    #[error("Invalid duration: {0}")]
    InvalidDuration(String),

    /// A search horizon is zero, negative, or beyond the supported cap.
    #[error("Invalid horizon: {0}")]
    InvalidHorizon(String),

    /// The owner identifier could not be resolved by the commitment source.
    #[error("Owner not found: {0}")]
    OwnerNotFound(String),

    /// The external commitment source failed to serve the read.
    #[error("Commitment source error: {0}")]
    Source(String),
}

/// Result type alias for Eventra scheduling operations
pub type Result<T> = std::result::Result<T, AgendaError>;
