//! Error types for eykar-ledger.

use thiserror::Error;

/// Result type for ledger operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while registering or querying participants.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Allocation, encoding or distance failed in the coordinate core.
    #[error(transparent)]
    Coords(#[from] eykar_coords::Error),

    /// The name already holds a location.
    #[error("participant already registered: {0}")]
    AlreadyRegistered(String),

    /// No location is stored under this name.
    #[error("unknown participant: {0}")]
    UnknownParticipant(String),

    /// Every index has been handed out.
    #[error("registration index space exhausted")]
    IndexExhausted,
}
